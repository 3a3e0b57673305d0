use super::model::book::Book;

/// 永続化の抽象。Infra層が実装する。
pub trait CatalogRepository {
    type Error: std::error::Error + Send + Sync + 'static;

    /// 保存先が存在しなければ `Ok(None)`。
    fn load(&self) -> Result<Option<Vec<Book>>, Self::Error>;
    /// 全件を書き直す。
    fn save(&self, books: &[Book]) -> Result<(), Self::Error>;
}
