use super::prelude::*;

pub fn get_organization<R: OrganizationRepo>(
    repo: &R,
    id: OrganizationId,
) -> Result<Organization> {
    Ok(repo.get_organization(id)?)
}

/// Pageable listing of all organizations, optionally narrowed down by a
/// case-insensitive name substring.
pub fn list_organizations<R: OrganizationRepo>(
    repo: &R,
    search_text: Option<&str>,
    pagination: &Pagination,
) -> Result<Vec<Organization>> {
    let pagination = super::validate_pagination(pagination)?;
    let query = OrganizationQuery {
        search_text: super::normalized_search_text(search_text),
        ..Default::default()
    };
    Ok(repo.query_organizations(&query, &pagination)?)
}
