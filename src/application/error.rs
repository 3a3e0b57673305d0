use crate::domain::error::DomainError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("year must be an integer, got {input:?}")]
    InvalidYear { input: String },

    #[error("book id must be a non-negative integer, got {input:?}")]
    InvalidId { input: String },

    #[error("catalog file could not be loaded: {0}")]
    Load(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("catalog file could not be saved: {0}")]
    Save(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl AppError {
    /// 入力不正（年・IDの形式、空のタイトル/著者）
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            AppError::InvalidYear { .. }
                | AppError::InvalidId { .. }
                | AppError::Domain(DomainError::EmptyField(_))
        )
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, AppError::Domain(DomainError::BookNotFound(_)))
    }
}
