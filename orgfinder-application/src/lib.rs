#[macro_use]
extern crate log;

mod activity_taxonomy;
mod browse_organizations;
mod search_organizations;

pub mod prelude {
    pub use super::{activity_taxonomy::*, browse_organizations::*, search_organizations::*};
}

pub mod config;
pub mod error;

pub type Result<T> = std::result::Result<T, error::AppError>;

pub(crate) use orgfinder_core::{entities::*, repositories::Pagination, usecases};

#[cfg(test)]
pub(crate) mod tests;

pub(crate) mod sqlite {
    pub use orgfinder_db_sqlite::Connections;
}
