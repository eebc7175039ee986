use std::collections::HashSet;

use super::*;

pub fn activity_taxonomy(connections: &sqlite::Connections) -> Result<usecases::ActivityTaxonomy> {
    let db = connections.shared()?;
    Ok(usecases::activity_taxonomy(&db)?)
}

pub fn expand_activity_tree(
    connections: &sqlite::Connections,
    root_id: ActivityId,
) -> Result<HashSet<ActivityId>> {
    let db = connections.shared()?;
    Ok(usecases::expand_activity_tree(&db, root_id)?)
}
