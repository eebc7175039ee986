use super::prelude::*;

/// Organizations directly tagged with exactly the given activity.
///
/// A missing activity id yields an empty page: the listing is a plain
/// filter over the association table, not an entity lookup.
pub fn organizations_by_activity<R: OrganizationRepo>(
    repo: &R,
    activity_id: ActivityId,
    pagination: &Pagination,
) -> Result<Vec<Organization>> {
    let pagination = super::validate_pagination(pagination)?;
    let query = OrganizationQuery {
        activity_ids: Some([activity_id].into()),
        ..Default::default()
    };
    Ok(repo.query_organizations(&query, &pagination)?)
}

/// Organizations tagged with the given activity or any of its descendants.
///
/// The root is expanded to its taxonomy closure first; a missing root
/// fails with `NotFound`.
pub fn organizations_by_activity_tree<R: OrganizationRepo + ActivityRepo>(
    repo: &R,
    root_id: ActivityId,
    pagination: &Pagination,
) -> Result<Vec<Organization>> {
    let pagination = super::validate_pagination(pagination)?;
    let expanded = super::expand_activity_tree(repo, root_id)?;
    let query = OrganizationQuery {
        activity_ids: Some(expanded),
        ..Default::default()
    };
    Ok(repo.query_organizations(&query, &pagination)?)
}

#[cfg(test)]
mod tests {
    use crate::repositories::Error as RepoError;

    use super::{super::tests::fixtures, *};

    #[test]
    fn direct_listing_ignores_descendants() {
        let db = fixtures::db_with_default_dataset();
        // Organization 1 is tagged with activity 4, organization 2 with the
        // deeper activity 10.
        let orgs = organizations_by_activity(&db, 4.into(), &Pagination::default()).unwrap();
        let ids: Vec<OrganizationId> = orgs.iter().map(|org| org.id).collect();
        assert_eq!(ids, vec![1.into()]);

        let orgs = organizations_by_activity(&db, 1.into(), &Pagination::default()).unwrap();
        assert!(orgs.is_empty());
    }

    #[test]
    fn direct_listing_of_a_missing_activity_is_empty() {
        let db = fixtures::db_with_default_dataset();
        let orgs = organizations_by_activity(&db, 999.into(), &Pagination::default()).unwrap();
        assert!(orgs.is_empty());
    }

    #[test]
    fn tree_listing_includes_organizations_of_descendants() {
        let db = fixtures::db_with_default_dataset();
        let orgs = organizations_by_activity_tree(&db, 1.into(), &Pagination::default()).unwrap();
        let ids: Vec<OrganizationId> = orgs.iter().map(|org| org.id).collect();
        assert_eq!(ids, vec![1.into(), 2.into()]);
    }

    #[test]
    fn tree_listing_of_a_missing_root_fails_with_not_found() {
        let db = fixtures::db_with_default_dataset();
        let err =
            organizations_by_activity_tree(&db, 999.into(), &Pagination::default()).unwrap_err();
        assert!(matches!(err, Error::Repo(RepoError::NotFound)));
    }

    #[test]
    fn tree_listing_of_an_untagged_subtree_is_empty() {
        let db = fixtures::db_with_default_dataset();
        let orgs = organizations_by_activity_tree(&db, 3.into(), &Pagination::default()).unwrap();
        assert!(orgs.is_empty());
    }
}
