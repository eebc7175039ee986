pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{activity_builder::*, building_builder::*, organization_builder::*};

pub mod activity_builder {

    use super::*;
    use crate::{activity::*, id::*};

    #[derive(Debug)]
    pub struct ActivityBuild {
        activity: Activity,
    }

    impl ActivityBuild {
        pub fn id(mut self, id: impl Into<ActivityId>) -> Self {
            self.activity.id = id.into();
            self
        }
        pub fn parent(mut self, parent_id: impl Into<ActivityId>) -> Self {
            self.activity.parent_id = Some(parent_id.into());
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.activity.name = name.into();
            self
        }
        pub fn level(mut self, level: ActivityLevelValue) -> Self {
            self.activity.level = ActivityLevel::try_from(level).unwrap();
            self
        }
        pub fn finish(self) -> Activity {
            self.activity
        }
    }

    impl Builder for Activity {
        type Build = ActivityBuild;
        fn build() -> Self::Build {
            Self::Build {
                activity: Activity {
                    id: Default::default(),
                    parent_id: None,
                    name: "".into(),
                    level: ActivityLevel::MIN,
                },
            }
        }
    }
}

pub mod building_builder {

    use super::*;
    use crate::{building::*, geo::*, id::*};

    #[derive(Debug)]
    pub struct BuildingBuild {
        building: Building,
    }

    impl BuildingBuild {
        pub fn id(mut self, id: impl Into<BuildingId>) -> Self {
            self.building.id = id.into();
            self
        }
        pub fn address(mut self, address: &str) -> Self {
            self.building.address = address.into();
            self
        }
        pub fn pos(mut self, pos: MapPoint) -> Self {
            self.building.pos = pos;
            self
        }
        pub fn finish(self) -> Building {
            self.building
        }
    }

    impl Builder for Building {
        type Build = BuildingBuild;
        fn build() -> Self::Build {
            Self::Build {
                building: Building {
                    id: Default::default(),
                    address: "".into(),
                    pos: MapPoint::default(),
                },
            }
        }
    }
}

pub mod organization_builder {

    use super::*;
    use crate::{id::*, organization::*};

    #[derive(Debug)]
    pub struct OrganizationBuild {
        organization: Organization,
    }

    impl OrganizationBuild {
        pub fn id(mut self, id: impl Into<OrganizationId>) -> Self {
            self.organization.id = id.into();
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.organization.name = name.into();
            self
        }
        pub fn building(mut self, building_id: impl Into<BuildingId>) -> Self {
            self.organization.building_id = building_id.into();
            self
        }
        pub fn activities(mut self, ids: Vec<impl Into<ActivityId>>) -> Self {
            self.organization.activities = ids.into_iter().map(Into::into).collect();
            self
        }
        pub fn phones(mut self, phones: Vec<&str>) -> Self {
            self.organization.phones = phones.into_iter().map(Into::into).collect();
            self
        }
        pub fn finish(self) -> Organization {
            self.organization
        }
    }

    impl Builder for Organization {
        type Build = OrganizationBuild;
        fn build() -> Self::Build {
            Self::Build {
                organization: Organization {
                    id: Default::default(),
                    name: "".into(),
                    building_id: Default::default(),
                    activities: vec![],
                    phones: vec![],
                },
            }
        }
    }
}
