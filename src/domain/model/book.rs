use std::fmt;

use serde::{Deserialize, Serialize};

use super::id::BookId;

/// 新規登録時のステータス
pub const DEFAULT_STATUS: &str = "available";

/// 書籍レコード。Catalogが所有し、Catalogを通じて操作する。
///
/// 永続化キーは `book_id`, `title`, `author`, `year`, `status` の5つ。
/// 未知のキーや欠けたキーを含むレコードは読み込まない。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Book {
    #[serde(rename = "book_id")]
    id: BookId,
    title: String,
    author: String,
    year: i32,
    status: String,
}

impl Book {
    /// statusがNoneなら `DEFAULT_STATUS` になる。
    pub fn new(
        id: BookId,
        title: impl Into<String>,
        author: impl Into<String>,
        year: i32,
        status: Option<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            author: author.into(),
            year,
            status: status.unwrap_or_else(|| DEFAULT_STATUS.to_string()),
        }
    }

    pub fn id(&self) -> BookId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    // --- 内部操作（Catalog経由でのみ呼ばれる） ---

    pub(crate) fn set_status(&mut self, status: String) {
        self.status = status;
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {}, Title: {}, Author: {}, Year: {}, Status: {}",
            self.id, self.title, self.author, self.year, self.status
        )
    }
}
