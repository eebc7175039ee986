use std::collections::HashSet;

use super::prelude::*;

/// Parameters of a radius search around a center point.
///
/// `activity_ids` is applied as-is, without taxonomy expansion.
#[derive(Debug, Default, Clone)]
pub struct RadiusSearch {
    pub center: MapPoint,
    pub radius: Distance,
    pub activity_ids: Option<HashSet<ActivityId>>,
    pub search_text: Option<String>,
    pub limit: Option<u64>,
}

/// Parameters of a bounding-rectangle search.
#[derive(Debug, Default, Clone)]
pub struct BboxSearch {
    pub bbox: MapBbox,
    pub activity_ids: Option<HashSet<ActivityId>>,
    pub search_text: Option<String>,
    pub limit: Option<u64>,
}

/// Organizations within the (inclusive) radius, ordered by ascending
/// distance from the center.
pub fn search_by_radius<R: OrganizationRepo>(
    repo: &R,
    search: RadiusSearch,
) -> Result<Vec<Organization>> {
    let RadiusSearch {
        center,
        radius,
        activity_ids,
        search_text,
        limit,
    } = search;
    if !center.is_valid() {
        return Err(Error::InvalidPosition);
    }
    if !radius.is_valid() {
        return Err(Error::InvalidRadius);
    }
    let pagination = super::validate_pagination(&Pagination {
        offset: None,
        limit,
    })?;
    let query = OrganizationQuery {
        activity_ids,
        search_text: super::normalized_search_text(search_text.as_deref()),
        region: Some(SpatialRegion::Circle { center, radius }),
    };
    Ok(repo.query_organizations(&query, &pagination)?)
}

/// Organizations within the (inclusive) bounding rectangle.
pub fn search_by_rectangle<R: OrganizationRepo>(
    repo: &R,
    search: BboxSearch,
) -> Result<Vec<Organization>> {
    let BboxSearch {
        bbox,
        activity_ids,
        search_text,
        limit,
    } = search;
    if !bbox.is_valid() {
        return Err(Error::Bbox);
    }
    let pagination = super::validate_pagination(&Pagination {
        offset: None,
        limit,
    })?;
    let query = OrganizationQuery {
        activity_ids,
        search_text: super::normalized_search_text(search_text.as_deref()),
        region: Some(SpatialRegion::Bbox(bbox)),
    };
    Ok(repo.query_organizations(&query, &pagination)?)
}
