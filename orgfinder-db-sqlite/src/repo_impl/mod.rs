use anyhow::anyhow;
use diesel::{
    self,
    prelude::{Connection as DieselConnection, *},
    result::{DatabaseErrorKind, Error as DieselError},
};

use orgfinder_core::{
    entities::*,
    filter,
    repositories::{self as repo, *},
    spatial,
    util::page,
};

use super::*;

mod activity;
mod building;
mod org;

type Result<T> = std::result::Result<T, repo::Error>;

pub fn from_diesel_err(err: DieselError) -> repo::Error {
    match err {
        DieselError::NotFound => repo::Error::NotFound,
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            repo::Error::AlreadyExists
        }
        _ => repo::Error::Other(err.into()),
    }
}

fn load_activity(model: models::Activity) -> Result<Activity> {
    let models::Activity {
        id,
        name,
        parent_id,
        level,
    } = model;
    let level = ActivityLevelValue::try_from(level)
        .ok()
        .and_then(|value| ActivityLevel::try_from(value).ok())
        .ok_or_else(|| anyhow!("Invalid activity level: {level}"))?;
    Ok(Activity {
        id: id.into(),
        parent_id: parent_id.map(Into::into),
        name,
        level,
    })
}

fn load_phone_numbers(
    conn: &mut SqliteConnection,
    organization_id: i64,
) -> Result<Vec<PhoneNumber>> {
    use schema::organization_phones::dsl;
    Ok(schema::organization_phones::table
        .filter(dsl::organization_id.eq(organization_id))
        .order(dsl::id.asc())
        .load::<models::OrganizationPhone>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(|models::OrganizationPhone { phone_number, .. }| phone_number.into())
        .collect())
}

fn load_activity_ids(conn: &mut SqliteConnection, organization_id: i64) -> Result<Vec<ActivityId>> {
    use schema::organization_activities::dsl;
    Ok(schema::organization_activities::table
        .filter(dsl::organization_id.eq(organization_id))
        .order(dsl::activity_id.asc())
        .load::<models::OrganizationActivity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(|assoc| assoc.activity_id.into())
        .collect())
}
