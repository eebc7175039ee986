use super::*;

pub fn get_organization(
    connections: &sqlite::Connections,
    id: OrganizationId,
) -> Result<Organization> {
    let db = connections.shared()?;
    Ok(usecases::get_organization(&db, id)?)
}

pub fn list_organizations(
    connections: &sqlite::Connections,
    search_text: Option<&str>,
    pagination: &Pagination,
) -> Result<Vec<Organization>> {
    let db = connections.shared()?;
    Ok(usecases::list_organizations(&db, search_text, pagination)?)
}

pub fn organizations_by_activity(
    connections: &sqlite::Connections,
    activity_id: ActivityId,
    pagination: &Pagination,
) -> Result<Vec<Organization>> {
    let db = connections.shared()?;
    Ok(usecases::organizations_by_activity(&db, activity_id, pagination)?)
}

pub fn organizations_by_activity_tree(
    connections: &sqlite::Connections,
    root_id: ActivityId,
    pagination: &Pagination,
) -> Result<Vec<Organization>> {
    let db = connections.shared()?;
    Ok(usecases::organizations_by_activity_tree(&db, root_id, pagination)?)
}

pub fn list_buildings(
    connections: &sqlite::Connections,
    pagination: &Pagination,
) -> Result<Vec<Building>> {
    let db = connections.shared()?;
    Ok(usecases::list_buildings(&db, pagination)?)
}

pub fn organizations_in_building(
    connections: &sqlite::Connections,
    building_id: BuildingId,
    pagination: &Pagination,
) -> Result<Vec<Organization>> {
    let db = connections.shared()?;
    Ok(usecases::organizations_in_building(&db, building_id, pagination)?)
}
