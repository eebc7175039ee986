use std::cell::RefCell;

use crate::{filter, repositories, spatial, util::page};

use super::prelude::*;

type RepoResult<T> = std::result::Result<T, repositories::Error>;

trait Identified {
    type Id: Copy + PartialEq;
    fn id(&self) -> Self::Id;
}

impl Identified for Activity {
    type Id = ActivityId;
    fn id(&self) -> ActivityId {
        self.id
    }
}

impl Identified for Building {
    type Id = BuildingId;
    fn id(&self) -> BuildingId {
        self.id
    }
}

impl Identified for Organization {
    type Id = OrganizationId;
    fn id(&self) -> OrganizationId {
        self.id
    }
}

fn get<T: Clone + Identified>(objects: &[T], id: T::Id) -> RepoResult<T> {
    match objects.iter().find(|x| x.id() == id) {
        Some(x) => Ok(x.clone()),
        None => Err(repositories::Error::NotFound),
    }
}

fn create<T: Identified>(objects: &mut Vec<T>, e: T) -> RepoResult<()> {
    if objects.iter().any(|x| x.id() == e.id()) {
        return Err(repositories::Error::AlreadyExists);
    }
    objects.push(e);
    Ok(())
}

#[derive(Debug, Default)]
pub struct MockDb {
    pub activities: RefCell<Vec<Activity>>,
    pub buildings: RefCell<Vec<Building>>,
    pub organizations: RefCell<Vec<Organization>>,
}

impl ActivityRepo for MockDb {
    fn create_activity(&self, activity: Activity) -> RepoResult<()> {
        create(&mut self.activities.borrow_mut(), activity)
    }

    fn get_activity(&self, id: ActivityId) -> RepoResult<Activity> {
        get(&self.activities.borrow(), id)
    }

    fn all_activities(&self) -> RepoResult<Vec<Activity>> {
        Ok(self.activities.borrow().clone())
    }

    fn activities_by_parent(&self, parent_id: ActivityId) -> RepoResult<Vec<Activity>> {
        Ok(self
            .activities
            .borrow()
            .iter()
            .filter(|activity| activity.parent_id == Some(parent_id))
            .cloned()
            .collect())
    }
}

impl BuildingRepo for MockDb {
    fn create_building(&self, building: Building) -> RepoResult<()> {
        create(&mut self.buildings.borrow_mut(), building)
    }

    fn get_building(&self, id: BuildingId) -> RepoResult<Building> {
        get(&self.buildings.borrow(), id)
    }

    fn all_buildings(&self, pagination: &Pagination) -> RepoResult<Vec<Building>> {
        let mut buildings = self.buildings.borrow().clone();
        buildings.sort_by_key(|building| building.id);
        Ok(page::paginate(buildings, pagination))
    }
}

impl OrganizationRepo for MockDb {
    fn create_organization(&self, org: Organization) -> RepoResult<()> {
        create(&mut self.organizations.borrow_mut(), org)
    }

    fn get_organization(&self, id: OrganizationId) -> RepoResult<Organization> {
        get(&self.organizations.borrow(), id)
    }

    fn organizations_in_building(
        &self,
        building_id: BuildingId,
        pagination: &Pagination,
    ) -> RepoResult<Vec<Organization>> {
        let mut orgs: Vec<_> = self
            .organizations
            .borrow()
            .iter()
            .filter(|org| org.building_id == building_id)
            .cloned()
            .collect();
        orgs.sort_by_key(|org| org.id);
        Ok(page::paginate(orgs, pagination))
    }

    fn query_organizations(
        &self,
        query: &OrganizationQuery,
        pagination: &Pagination,
    ) -> RepoResult<Vec<Organization>> {
        let organizations = self.organizations.borrow();
        let mut matches = Vec::new();
        for org in organizations.iter() {
            if let Some(ids) = &query.activity_ids {
                if !filter::organizations_by_activity_ids(ids)(org) {
                    continue;
                }
            }
            if let Some(text) = &query.search_text {
                if !filter::organizations_by_search_text(text)(org) {
                    continue;
                }
            }
            let mut distance = Distance::default();
            if let Some(region) = &query.region {
                let building = get(&self.buildings.borrow(), org.building_id)?;
                if !spatial::in_region(building.pos, region) {
                    continue;
                }
                if let SpatialRegion::Circle { center, .. } = region {
                    distance = MapPoint::distance(building.pos, *center);
                }
            }
            matches.push((distance, org.clone()));
        }
        matches.sort_by(|(d1, org1), (d2, org2)| {
            d1.partial_cmp(d2)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| org1.id.cmp(&org2.id))
        });
        Ok(page::paginate(
            matches.into_iter().map(|(_, org)| org),
            pagination,
        ))
    }
}

pub mod fixtures {

    use orgfinder_entities::builders::*;

    use super::*;

    pub fn empty_db() -> MockDb {
        MockDb::default()
    }

    /// The three-level taxonomy used throughout the use-case tests:
    /// `1 -> 4 -> {10, 11}` plus the top-level siblings `2` and `3`.
    pub fn db_with_default_taxonomy() -> MockDb {
        let db = MockDb::default();
        let activities = vec![
            Activity::build().id(1).name("Еда").level(1).finish(),
            Activity::build().id(2).name("Автомобили").level(1).finish(),
            Activity::build().id(3).name("Торговля").level(1).finish(),
            Activity::build()
                .id(4)
                .parent(1)
                .name("Молочная продукция")
                .level(2)
                .finish(),
            Activity::build()
                .id(10)
                .parent(4)
                .name("Сыры")
                .level(3)
                .finish(),
            Activity::build()
                .id(11)
                .parent(4)
                .name("Молоко")
                .level(3)
                .finish(),
        ];
        for activity in activities {
            db.create_activity(activity).unwrap();
        }
        db
    }

    pub fn db_with_default_dataset() -> MockDb {
        let db = db_with_default_taxonomy();

        db.create_building(
            Building::build()
                .id(1)
                .address("г. Москва, ул. Ленина 1, офис 3")
                .pos(MapPoint::from_lat_lng_deg(55.7558, 37.6176))
                .finish(),
        )
        .unwrap();
        db.create_building(
            Building::build()
                .id(2)
                .address("г. Москва, ул. Блюхера 32/1")
                .pos(MapPoint::from_lat_lng_deg(55.0, 37.0))
                .finish(),
        )
        .unwrap();

        db.create_organization(
            Organization::build()
                .id(1)
                .name("ООО Рога и Копыта")
                .building(1)
                .activities(vec![4])
                .phones(vec!["2-222-222", "3-333-333"])
                .finish(),
        )
        .unwrap();
        db.create_organization(
            Organization::build()
                .id(2)
                .name("Магазин Молоко")
                .building(1)
                .activities(vec![10])
                .phones(vec!["8-923-666-13-13"])
                .finish(),
        )
        .unwrap();
        db.create_organization(
            Organization::build()
                .id(3)
                .name("Автосервис Колесо")
                .building(2)
                .activities(vec![2])
                .phones(vec!["8-800-700-08-08"])
                .finish(),
        )
        .unwrap();

        db
    }
}
