use std::{fmt, num::ParseIntError, str::FromStr};

/// Raw representation of a stored entity id.
///
/// Ids are assigned by the data store at seed/admin time. The query engine
/// only ever reads them.
pub type RawId = i64;

#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct ActivityId(RawId);

impl ActivityId {
    pub const fn new(id: RawId) -> Self {
        Self(id)
    }

    pub const fn value(self) -> RawId {
        self.0
    }
}

impl From<RawId> for ActivityId {
    fn from(from: RawId) -> Self {
        Self(from)
    }
}

impl From<ActivityId> for RawId {
    fn from(from: ActivityId) -> Self {
        from.0
    }
}

impl FromStr for ActivityId {
    type Err = ParseIntError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

impl fmt::Display for ActivityId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct BuildingId(RawId);

impl BuildingId {
    pub const fn new(id: RawId) -> Self {
        Self(id)
    }

    pub const fn value(self) -> RawId {
        self.0
    }
}

impl From<RawId> for BuildingId {
    fn from(from: RawId) -> Self {
        Self(from)
    }
}

impl From<BuildingId> for RawId {
    fn from(from: BuildingId) -> Self {
        from.0
    }
}

impl FromStr for BuildingId {
    type Err = ParseIntError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

impl fmt::Display for BuildingId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct OrganizationId(RawId);

impl OrganizationId {
    pub const fn new(id: RawId) -> Self {
        Self(id)
    }

    pub const fn value(self) -> RawId {
        self.0
    }
}

impl From<RawId> for OrganizationId {
    fn from(from: RawId) -> Self {
        Self(from)
    }
}

impl From<OrganizationId> for RawId {
    fn from(from: OrganizationId) -> Self {
        from.0
    }
}

impl FromStr for OrganizationId {
    type Err = ParseIntError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

impl fmt::Display for OrganizationId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
