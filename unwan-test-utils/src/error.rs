use thiserror::Error;

#[derive(Error, Debug)]
pub enum TestError {
    #[error(transparent)]
    UnwanError(#[from] unwan::error::Error),
    #[error(transparent)]
    QnasError(#[from] qnas::Error),
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    #[error(transparent)]
    JsonError(#[from] serde_json::Error),
}
