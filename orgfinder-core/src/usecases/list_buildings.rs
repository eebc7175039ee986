use super::prelude::*;

pub fn list_buildings<R: BuildingRepo>(
    repo: &R,
    pagination: &Pagination,
) -> Result<Vec<Building>> {
    let pagination = super::validate_pagination(pagination)?;
    Ok(repo.all_buildings(&pagination)?)
}

/// Organizations housed in one building.
///
/// Fails with `NotFound` if the building does not exist: a building is a
/// concrete entity lookup, not a filter.
pub fn organizations_in_building<R: OrganizationRepo + BuildingRepo>(
    repo: &R,
    building_id: BuildingId,
    pagination: &Pagination,
) -> Result<Vec<Organization>> {
    let pagination = super::validate_pagination(pagination)?;
    let building = repo.get_building(building_id)?;
    Ok(repo.organizations_in_building(building.id, &pagination)?)
}
