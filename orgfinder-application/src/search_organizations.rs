use super::*;

pub fn search_by_radius(
    connections: &sqlite::Connections,
    search: usecases::RadiusSearch,
) -> Result<Vec<Organization>> {
    debug!(
        "Searching for organizations within {} around {}",
        search.radius, search.center
    );
    let db = connections.shared()?;
    Ok(usecases::search_by_radius(&db, search)?)
}

pub fn search_by_rectangle(
    connections: &sqlite::Connections,
    search: usecases::BboxSearch,
) -> Result<Vec<Organization>> {
    debug!("Searching for organizations within {}", search.bbox);
    let db = connections.shared()?;
    Ok(usecases::search_by_rectangle(&db, search)?)
}
