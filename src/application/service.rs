use tracing::{debug, info, warn};

use crate::domain::model::book::Book;
use crate::domain::model::catalog::{Catalog, SearchQuery};
use crate::domain::model::id::BookId;
use crate::domain::repository::CatalogRepository;

use super::error::AppError;

/// 起動時の読み込み結果
#[derive(Debug)]
pub struct LoadReport {
    pub loaded: usize,
    /// 保存ファイルが壊れていた場合の警告。Catalogは空で起動する。
    pub warning: Option<AppError>,
}

/// 変更操作の結果。変更はメモリ上で確定済みで、
/// `persist_warning` は保存に失敗したことだけを示す。
#[derive(Debug)]
pub struct Committed<T> {
    pub record: T,
    pub persist_warning: Option<AppError>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Listing {
    Empty,
    Books(Vec<Book>),
}

impl SearchQuery {
    /// シェルの生入力から検索条件を作る。空文字は未指定。
    pub fn from_input(
        title: &str,
        author: &str,
        year_text: &str,
        status: &str,
    ) -> Result<Self, AppError> {
        let text = |s: &str| (!s.is_empty()).then(|| s.to_string());
        let year = match year_text.trim() {
            "" => None,
            _ => Some(parse_year(year_text)?),
        };
        Ok(Self {
            title: text(title),
            author: text(author),
            year,
            status: text(status),
        })
    }
}

/// Catalogに対するユースケース。
/// 起動時にload、変更のたびに全件saveする。
pub struct CatalogService<R: CatalogRepository> {
    repo: R,
    catalog: Catalog,
}

impl<R: CatalogRepository> CatalogService<R> {
    /// 保存ファイルから読み込んで起動する。読み込みに失敗しても空のCatalogで続行する。
    pub fn open(repo: R) -> (Self, LoadReport) {
        let (catalog, warning) = match repo.load() {
            Ok(Some(books)) => (Catalog::from_books(books), None),
            Ok(None) => {
                debug!("no catalog file yet, starting empty");
                (Catalog::new(), None)
            }
            Err(e) => {
                warn!(error = %e, "catalog file is unreadable, starting empty");
                (Catalog::new(), Some(AppError::Load(Box::new(e))))
            }
        };
        info!(loaded = catalog.len(), next_id = ?catalog.next_id(), "catalog loaded");

        let report = LoadReport {
            loaded: catalog.len(),
            warning,
        };
        (Self { repo, catalog }, report)
    }

    /// 読み取り専用ビュー
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    pub fn len(&self) -> usize {
        self.catalog.len()
    }

    pub fn is_empty(&self) -> bool {
        self.catalog.is_empty()
    }

    pub fn next_id(&self) -> Option<BookId> {
        self.catalog.next_id()
    }

    /// 書籍を追加する。年が整数でなければ何も変更しない。
    pub fn add(
        &mut self,
        title: &str,
        author: &str,
        year_text: &str,
    ) -> Result<Committed<Book>, AppError> {
        let year = parse_year(year_text)?;
        let book = self.catalog.add(title, author, year)?.clone();
        debug!(id = %book.id(), "book added");
        Ok(self.commit(book))
    }

    pub fn remove(&mut self, id_text: &str) -> Result<Committed<Book>, AppError> {
        let id = parse_id(id_text)?;
        let book = self.catalog.remove(id)?;
        debug!(%id, "book removed");
        Ok(self.commit(book))
    }

    pub fn update_status(
        &mut self,
        id_text: &str,
        new_status: &str,
    ) -> Result<Committed<Book>, AppError> {
        let id = parse_id(id_text)?;
        let book = self.catalog.update_status(id, new_status)?.clone();
        debug!(%id, status = new_status, "book status updated");
        Ok(self.commit(book))
    }

    pub fn search(&self, query: &SearchQuery) -> Vec<Book> {
        self.catalog.search(query)
    }

    pub fn list_all(&self) -> Listing {
        if self.catalog.is_empty() {
            Listing::Empty
        } else {
            Listing::Books(self.catalog.books().cloned().collect())
        }
    }

    // --- private ---

    fn commit<T>(&self, record: T) -> Committed<T> {
        Committed {
            record,
            persist_warning: self.persist().err(),
        }
    }

    fn persist(&self) -> Result<(), AppError> {
        let books: Vec<Book> = self.catalog.books().cloned().collect();
        match self.repo.save(&books) {
            Ok(()) => {
                debug!(count = books.len(), "catalog saved");
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "catalog could not be saved, keeping in-memory state");
                Err(AppError::Save(Box::new(e)))
            }
        }
    }
}

fn parse_year(input: &str) -> Result<i32, AppError> {
    input.trim().parse().map_err(|_| AppError::InvalidYear {
        input: input.to_string(),
    })
}

fn parse_id(input: &str) -> Result<BookId, AppError> {
    input.parse().map_err(|_| AppError::InvalidId {
        input: input.to_string(),
    })
}
