use thiserror::Error;

use crate::id::ActivityId;

pub type ActivityLevelValue = u8;

/// Depth of an activity node in the taxonomy forest.
///
/// The taxonomy is limited to three fixed levels: top-level categories (1),
/// their children (2) and grandchildren (3).
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct ActivityLevel(ActivityLevelValue);

#[derive(Debug, Error)]
#[error("Invalid activity level: {0}")]
pub struct InvalidActivityLevel(pub ActivityLevelValue);

impl ActivityLevel {
    pub const MIN: Self = Self(1);
    pub const MAX: Self = Self(3);

    pub const fn value(self) -> ActivityLevelValue {
        self.0
    }

    pub const fn is_root(self) -> bool {
        self.0 == Self::MIN.0
    }

    /// Level of a direct child, or `None` at the deepest level.
    pub fn child(self) -> Option<Self> {
        if self.0 < Self::MAX.0 {
            Some(Self(self.0 + 1))
        } else {
            None
        }
    }
}

impl TryFrom<ActivityLevelValue> for ActivityLevel {
    type Error = InvalidActivityLevel;

    fn try_from(value: ActivityLevelValue) -> Result<Self, Self::Error> {
        if (Self::MIN.0..=Self::MAX.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(InvalidActivityLevel(value))
        }
    }
}

impl From<ActivityLevel> for ActivityLevelValue {
    fn from(from: ActivityLevel) -> Self {
        from.0
    }
}

impl std::fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A node of the activity taxonomy organizations are tagged with.
///
/// The parent/child relation forms an acyclic forest: level-1 nodes have no
/// parent and the level of a child is exactly one below its parent's.
#[derive(Debug, Clone, PartialEq)]
pub struct Activity {
    pub id: ActivityId,
    pub parent_id: Option<ActivityId>,
    pub name: String,
    pub level: ActivityLevel,
}

impl Activity {
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }

    /// Checks the parent/child invariant against the actual parent node.
    pub fn is_child_of(&self, parent: &Activity) -> bool {
        self.parent_id == Some(parent.id) && parent.level.child() == Some(self.level)
    }
}
