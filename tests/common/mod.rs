//! Shared test harness for integration tests.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};

use book_catalog::application::service::{CatalogService, LoadReport};
use book_catalog::domain::model::book::Book;
use book_catalog::domain::model::id::BookId;
use book_catalog::domain::repository::CatalogRepository;

// =============================================================================
// InMemoryRepo — テスト用リポジトリ
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum InMemoryError {
    #[error("in-memory store is corrupted")]
    Corrupted,
    #[error("in-memory store rejected the write")]
    WriteRejected,
}

/// ファイルI/O不要のインメモリリポジトリ。保存はJSON文字列で保持する。
pub struct InMemoryRepo {
    stored: RefCell<Option<String>>,
    fail_saves: Cell<bool>,
    saves: Cell<usize>,
}

impl InMemoryRepo {
    pub fn new() -> Self {
        Self {
            stored: RefCell::new(None),
            fail_saves: Cell::new(false),
            saves: Cell::new(0),
        }
    }

    pub fn with_books(books: &[Book]) -> Self {
        let repo = Self::new();
        *repo.stored.borrow_mut() = Some(serde_json::to_string(books).unwrap());
        repo
    }

    /// 壊れた内容を持つリポジトリ
    pub fn with_raw(content: &str) -> Self {
        let repo = Self::new();
        *repo.stored.borrow_mut() = Some(content.to_string());
        repo
    }

    pub fn fail_saves(&self, fail: bool) {
        self.fail_saves.set(fail);
    }

    /// 成功した保存の回数
    pub fn save_count(&self) -> usize {
        self.saves.get()
    }

    pub fn stored_books(&self) -> Option<Vec<Book>> {
        self.stored
            .borrow()
            .as_ref()
            .map(|json| serde_json::from_str(json).unwrap())
    }
}

impl CatalogRepository for InMemoryRepo {
    type Error = InMemoryError;

    fn load(&self) -> Result<Option<Vec<Book>>, Self::Error> {
        match self.stored.borrow().as_ref() {
            Some(json) => serde_json::from_str(json)
                .map(Some)
                .map_err(|_| InMemoryError::Corrupted),
            None => Ok(None),
        }
    }

    fn save(&self, books: &[Book]) -> Result<(), Self::Error> {
        if self.fail_saves.get() {
            return Err(InMemoryError::WriteRejected);
        }
        let json = serde_json::to_string(books).unwrap();
        *self.stored.borrow_mut() = Some(json);
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }
}

// =============================================================================
// Fixtures
// =============================================================================

/// 標準的なテスト用Catalog:
/// ```text
/// 1. War and Peace / Tolstoy / 1869 / available
/// 2. War Games     / Shaw    / 1983 / checked-out
/// ```
pub fn standard_books() -> Vec<Book> {
    vec![
        Book::new(BookId::new(1), "War and Peace", "Tolstoy", 1869, None),
        Book::new(
            BookId::new(2),
            "War Games",
            "Shaw",
            1983,
            Some("checked-out".into()),
        ),
    ]
}

pub fn standard_service() -> CatalogService<InMemoryRepo> {
    let (service, report) = CatalogService::open(InMemoryRepo::with_books(&standard_books()));
    assert!(report.warning.is_none());
    service
}

pub fn empty_service() -> (CatalogService<InMemoryRepo>, LoadReport) {
    CatalogService::open(InMemoryRepo::new())
}

pub fn ids(books: &[Book]) -> Vec<u64> {
    books.iter().map(|b| b.id().get()).collect()
}

// =============================================================================
// Assertion helpers
// =============================================================================

/// 結果がErrで、メッセージに指定文字列を含むことをassert。
pub fn assert_error_contains<T: std::fmt::Debug>(
    result: Result<T, impl std::fmt::Display>,
    expected: &str,
) {
    match result {
        Err(e) => {
            let msg = e.to_string();
            assert!(
                msg.contains(expected),
                "Expected error containing '{expected}', got: '{msg}'"
            );
        }
        Ok(v) => panic!("Expected error containing '{expected}', got Ok({v:?})"),
    }
}
