use super::model::id::BookId;

#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("book not found: {0}")]
    BookNotFound(BookId),

    #[error("{0} must not be empty")]
    EmptyField(&'static str),

    #[error("book id must be positive")]
    ZeroId,

    #[error("no book ids left to assign")]
    IdSpaceExhausted,
}
