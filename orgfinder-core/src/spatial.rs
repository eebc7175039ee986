use crate::{entities::*, repositories::SpatialRegion};

pub trait InBbox {
    fn in_bbox(&self, bbox: &MapBbox) -> bool;
}

impl InBbox for Building {
    fn in_bbox(&self, bbox: &MapBbox) -> bool {
        bbox.contains_point(self.pos)
    }
}

/// Inclusive radius membership: the boundary itself is inside.
pub fn in_radius(pos: MapPoint, center: MapPoint, radius: Distance) -> bool {
    MapPoint::distance(pos, center) <= radius
}

pub fn in_region(pos: MapPoint, region: &SpatialRegion) -> bool {
    match region {
        SpatialRegion::Circle { center, radius } => in_radius(pos, *center, *radius),
        SpatialRegion::Bbox(bbox) => bbox.contains_point(pos),
    }
}
