use thiserror::Error;

use crate::repositories;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid position")]
    InvalidPosition,
    #[error("Invalid search radius")]
    InvalidRadius,
    #[error("Bounding box is invalid")]
    Bbox,
    #[error("Invalid limit")]
    InvalidLimit,
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}
