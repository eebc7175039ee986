use crate::repositories::*;

/// Everything a data store has to provide to serve the query engine.
pub trait Db: ActivityRepo + BuildingRepo + OrganizationRepo {}

impl<T> Db for T where T: ActivityRepo + BuildingRepo + OrganizationRepo {}
