#![allow(clippy::extra_unused_lifetimes)]

use super::schema::*;

#[derive(Insertable)]
#[diesel(table_name = activities)]
pub struct NewActivity<'a> {
    pub id: i64,
    pub name: &'a str,
    pub parent_id: Option<i64>,
    pub level: i16,
}

#[derive(Queryable)]
pub struct Activity {
    pub id: i64,
    pub name: String,
    pub parent_id: Option<i64>,
    pub level: i16,
}

#[derive(Insertable)]
#[diesel(table_name = buildings)]
pub struct NewBuilding<'a> {
    pub id: i64,
    pub address: &'a str,
    pub lat: f64,
    pub lng: f64,
}

#[derive(Queryable)]
pub struct Building {
    pub id: i64,
    pub address: String,
    pub lat: f64,
    pub lng: f64,
}

#[derive(Insertable)]
#[diesel(table_name = organizations)]
pub struct NewOrganization<'a> {
    pub id: i64,
    pub name: &'a str,
    pub building_id: i64,
}

#[derive(Queryable)]
pub struct Organization {
    pub id: i64,
    pub name: String,
    pub building_id: i64,
}

#[derive(Insertable)]
#[diesel(table_name = organization_phones)]
pub struct NewOrganizationPhone<'a> {
    pub organization_id: i64,
    pub phone_number: &'a str,
}

#[derive(Queryable)]
pub struct OrganizationPhone {
    pub id: i64,
    pub organization_id: i64,
    pub phone_number: String,
}

#[derive(Insertable)]
#[diesel(table_name = organization_activities)]
pub struct NewOrganizationActivity {
    pub organization_id: i64,
    pub activity_id: i64,
}

#[derive(Queryable)]
pub struct OrganizationActivity {
    pub organization_id: i64,
    pub activity_id: i64,
}

#[derive(Queryable)]
pub struct JoinedOrganization {
    pub id: i64,
    pub name: String,
    pub building_id: i64,
    // Joined columns
    pub lat: f64,
    pub lng: f64,
}
