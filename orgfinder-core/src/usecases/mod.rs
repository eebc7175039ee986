use crate::repositories::Pagination;

mod activity_taxonomy;
mod error;
mod expand_activity_tree;
mod list_buildings;
mod list_organizations;
mod organizations_by_activity;
mod search_organizations;

#[cfg(test)]
pub mod tests;

type Result<T> = std::result::Result<T, Error>;

pub use self::{
    activity_taxonomy::*, error::Error, expand_activity_tree::*, list_buildings::*,
    list_organizations::*, organizations_by_activity::*, search_organizations::*,
};

mod prelude {
    pub use crate::{entities::*, repositories::*};

    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
}

pub const DEFAULT_RESULT_LIMIT: u64 = 100;
pub const MAX_RESULT_LIMIT: u64 = 1000;

/// Applies the default limit and rejects limits outside of
/// `1..=MAX_RESULT_LIMIT`. The offset passes through unchanged.
fn validate_pagination(pagination: &Pagination) -> Result<Pagination> {
    let limit = match pagination.limit {
        Some(limit) => {
            if !(1..=MAX_RESULT_LIMIT).contains(&limit) {
                return Err(Error::InvalidLimit);
            }
            limit
        }
        None => {
            log::info!("No limit requested - using default limit {DEFAULT_RESULT_LIMIT} for results");
            DEFAULT_RESULT_LIMIT
        }
    };
    Ok(Pagination {
        offset: pagination.offset,
        limit: Some(limit),
    })
}

/// Trims the requested search text; effectively empty text imposes no
/// constraint.
fn normalized_search_text(text: Option<&str>) -> Option<String> {
    text.map(str::trim)
        .filter(|text| !text.is_empty())
        .map(ToOwned::to_owned)
}
