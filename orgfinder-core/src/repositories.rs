// Low-level database access traits.
// Each repository is responsible for a single entity and
// its relationships. Related entities are only referenced
// by their id and never modified or loaded by another
// repository.

use std::{collections::HashSet, io};

use thiserror::Error;

use crate::entities::*;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("The object already exists")]
    AlreadyExists,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

#[derive(Clone, Debug, Copy, Default, PartialEq, Eq, Hash)]
pub struct Pagination {
    pub offset: Option<u64>,
    pub limit: Option<u64>,
}

/// A spatial restriction on the position of an organization's building.
///
/// A query carries at most one region; the enum makes a simultaneous
/// circle-and-rectangle restriction unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpatialRegion {
    Circle { center: MapPoint, radius: Distance },
    Bbox(MapBbox),
}

/// The composed, executable organization query.
///
/// Every criterion is optional and absence imposes no constraint; all
/// present criteria combine with logical AND. `activity_ids` restricts to
/// organizations tagged with at least one of the given ids and performs no
/// taxonomy expansion of its own, so an empty set matches nothing.
#[derive(Debug, Default, Clone)]
pub struct OrganizationQuery {
    pub activity_ids: Option<HashSet<ActivityId>>,
    pub search_text: Option<String>,
    pub region: Option<SpatialRegion>,
}

impl OrganizationQuery {
    pub fn is_empty(&self) -> bool {
        let Self {
            activity_ids,
            search_text,
            region,
        } = self;
        activity_ids.is_none() && search_text.is_none() && region.is_none()
    }
}

pub trait ActivityRepo {
    fn create_activity(&self, activity: Activity) -> Result<()>;

    fn get_activity(&self, id: ActivityId) -> Result<Activity>;
    fn all_activities(&self) -> Result<Vec<Activity>>;

    // Direct children only
    fn activities_by_parent(&self, parent_id: ActivityId) -> Result<Vec<Activity>>;
}

pub trait BuildingRepo {
    fn create_building(&self, building: Building) -> Result<()>;

    fn get_building(&self, id: BuildingId) -> Result<Building>;
    fn all_buildings(&self, pagination: &Pagination) -> Result<Vec<Building>>;
}

pub trait OrganizationRepo {
    fn create_organization(&self, org: Organization) -> Result<()>;

    fn get_organization(&self, id: OrganizationId) -> Result<Organization>;

    fn organizations_in_building(
        &self,
        building_id: BuildingId,
        pagination: &Pagination,
    ) -> Result<Vec<Organization>>;

    /// Executes the composed query and materializes the full page eagerly,
    /// each organization hydrated with its activities and phone numbers.
    ///
    /// Results are ordered by ascending distance from the center (ties
    /// broken by id) when the query region is a circle, and by ascending id
    /// otherwise. The pagination window is applied after ordering.
    fn query_organizations(
        &self,
        query: &OrganizationQuery,
        pagination: &Pagination,
    ) -> Result<Vec<Organization>>;
}
