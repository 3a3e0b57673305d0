use std::collections::BTreeMap;

use super::book::Book;
use super::id::BookId;
use crate::domain::error::DomainError;

/// 検索条件。Noneのフィールドは全件にマッチする。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    /// 部分一致（大文字小文字を区別しない）
    pub title: Option<String>,
    /// 部分一致（大文字小文字を区別しない）
    pub author: Option<String>,
    /// 完全一致
    pub year: Option<i32>,
    /// 完全一致（大文字小文字を区別しない）
    pub status: Option<String>,
}

impl SearchQuery {
    pub fn is_unfiltered(&self) -> bool {
        self.title.is_none()
            && self.author.is_none()
            && self.year.is_none()
            && self.status.is_none()
    }

    pub fn matches(&self, book: &Book) -> bool {
        let contains = |needle: &Option<String>, haystack: &str| match active(needle) {
            Some(n) => haystack.to_lowercase().contains(&n.to_lowercase()),
            None => true,
        };

        contains(&self.title, book.title())
            && contains(&self.author, book.author())
            && self.year.map_or(true, |y| y == book.year())
            && active(&self.status)
                .map_or(true, |s| s.to_lowercase() == book.status().to_lowercase())
    }
}

/// 空文字のフィルタは未指定として扱う。
fn active(filter: &Option<String>) -> Option<&str> {
    filter.as_deref().filter(|s| !s.is_empty())
}

/// Catalog — 集約ルート。全書籍操作はここを経由する。
///
/// `next_id` はこれまでに採番した全IDより常に大きい。削除済みIDは再利用しない。
/// u64の上限まで採番済みなら `next_id` はNoneで、以降の追加は拒否する。
#[derive(Debug, Clone)]
pub struct Catalog {
    books: BTreeMap<BookId, Book>,
    next_id: Option<BookId>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            books: BTreeMap::new(),
            next_id: Some(BookId::FIRST),
        }
    }
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// 永続化済みレコードから復元する。同一IDが重複した場合は後勝ち。
    pub fn from_books(books: impl IntoIterator<Item = Book>) -> Self {
        let mut catalog = Self::new();
        for book in books {
            if catalog.next_id.is_some_and(|next| book.id() >= next) {
                catalog.next_id = book.id().next();
            }
            catalog.books.insert(book.id(), book);
        }
        catalog
    }

    pub fn next_id(&self) -> Option<BookId> {
        self.next_id
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn get(&self, id: BookId) -> Option<&Book> {
        self.books.get(&id)
    }

    /// ID昇順のイテレータ
    pub fn books(&self) -> impl Iterator<Item = &Book> + '_ {
        self.books.values()
    }

    /// 書籍を追加する。検証に失敗した場合はIDを消費しない。
    pub fn add(
        &mut self,
        title: impl Into<String>,
        author: impl Into<String>,
        year: i32,
    ) -> Result<&Book, DomainError> {
        let title = title.into();
        let author = author.into();
        if title.trim().is_empty() {
            return Err(DomainError::EmptyField("title"));
        }
        if author.trim().is_empty() {
            return Err(DomainError::EmptyField("author"));
        }

        let id = self.next_id.ok_or(DomainError::IdSpaceExhausted)?;
        self.next_id = id.next();
        self.books.insert(id, Book::new(id, title, author, year, None));
        Ok(&self.books[&id])
    }

    pub fn remove(&mut self, id: BookId) -> Result<Book, DomainError> {
        self.books.remove(&id).ok_or(DomainError::BookNotFound(id))
    }

    /// statusのみ置き換える。
    pub fn update_status(
        &mut self,
        id: BookId,
        status: impl Into<String>,
    ) -> Result<&Book, DomainError> {
        let book = self
            .books
            .get_mut(&id)
            .ok_or(DomainError::BookNotFound(id))?;
        book.set_status(status.into());
        Ok(&*book)
    }

    /// 条件に一致する書籍のコピーをID昇順で返す。
    pub fn search(&self, query: &SearchQuery) -> Vec<Book> {
        self.books
            .values()
            .filter(|b| query.matches(b))
            .cloned()
            .collect()
    }
}
