use crate::{geo::MapPoint, id::BuildingId};

/// A building that houses organizations.
///
/// Immutable from the query engine's perspective.
#[derive(Debug, Clone, PartialEq)]
pub struct Building {
    pub id: BuildingId,
    pub address: String,
    pub pos: MapPoint,
}
