use std::collections::{HashMap, HashSet, VecDeque};

use crate::repositories::Error as RepoError;

use super::prelude::*;

/// Computes the taxonomy closure of an activity: the activity itself plus
/// all of its transitive descendants.
///
/// The whole taxonomy is scanned once and expanded over an in-memory
/// adjacency map, so the store is consulted exactly once per request
/// regardless of the tree depth, and the iterative traversal cannot
/// overflow the stack should the depth limit ever change.
///
/// Fails with `NotFound` if the root id does not exist.
pub fn expand_activity_tree<R: ActivityRepo>(
    repo: &R,
    root_id: ActivityId,
) -> Result<HashSet<ActivityId>> {
    let mut known_ids = HashSet::new();
    let mut children_by_parent: HashMap<ActivityId, Vec<ActivityId>> = HashMap::new();
    for activity in repo.all_activities()? {
        known_ids.insert(activity.id);
        if let Some(parent_id) = activity.parent_id {
            children_by_parent
                .entry(parent_id)
                .or_default()
                .push(activity.id);
        }
    }
    if !known_ids.contains(&root_id) {
        return Err(Error::Repo(RepoError::NotFound));
    }

    let mut expanded = HashSet::new();
    expanded.insert(root_id);
    let mut pending = VecDeque::new();
    pending.push_back(root_id);
    while let Some(next_id) = pending.pop_front() {
        for &child_id in children_by_parent.get(&next_id).into_iter().flatten() {
            if expanded.insert(child_id) {
                pending.push_back(child_id);
            }
        }
    }
    Ok(expanded)
}
