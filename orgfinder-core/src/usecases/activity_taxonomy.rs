use itertools::Itertools as _;

use super::prelude::*;

/// All activities of the taxonomy, grouped by hierarchy level.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ActivityTaxonomy {
    pub levels: Vec<TaxonomyLevel>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TaxonomyLevel {
    pub level: ActivityLevel,
    pub activities: Vec<Activity>,
}

/// Overview of the whole taxonomy: levels in ascending order, activities
/// within each level sorted by id.
pub fn activity_taxonomy<R: ActivityRepo>(repo: &R) -> Result<ActivityTaxonomy> {
    let levels = repo
        .all_activities()?
        .into_iter()
        .map(|activity| (activity.level, activity))
        .into_group_map()
        .into_iter()
        .sorted_by_key(|(level, _)| *level)
        .map(|(level, mut activities)| {
            activities.sort_by_key(|activity| activity.id);
            TaxonomyLevel { level, activities }
        })
        .collect();
    Ok(ActivityTaxonomy { levels })
}
