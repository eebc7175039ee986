use super::*;

impl<'a> OrganizationRepo for DbReadWrite<'a> {
    fn create_organization(&self, org: Organization) -> Result<()> {
        create_organization(&mut self.conn.borrow_mut(), org)
    }
    fn get_organization(&self, id: OrganizationId) -> Result<Organization> {
        get_organization(&mut self.conn.borrow_mut(), id)
    }
    fn organizations_in_building(
        &self,
        building_id: BuildingId,
        pagination: &Pagination,
    ) -> Result<Vec<Organization>> {
        organizations_in_building(&mut self.conn.borrow_mut(), building_id, pagination)
    }
    fn query_organizations(
        &self,
        query: &OrganizationQuery,
        pagination: &Pagination,
    ) -> Result<Vec<Organization>> {
        query_organizations(&mut self.conn.borrow_mut(), query, pagination)
    }
}

impl<'a> OrganizationRepo for DbReadOnly<'a> {
    fn create_organization(&self, _org: Organization) -> Result<()> {
        unreachable!();
    }
    fn get_organization(&self, id: OrganizationId) -> Result<Organization> {
        get_organization(&mut self.conn.borrow_mut(), id)
    }
    fn organizations_in_building(
        &self,
        building_id: BuildingId,
        pagination: &Pagination,
    ) -> Result<Vec<Organization>> {
        organizations_in_building(&mut self.conn.borrow_mut(), building_id, pagination)
    }
    fn query_organizations(
        &self,
        query: &OrganizationQuery,
        pagination: &Pagination,
    ) -> Result<Vec<Organization>> {
        query_organizations(&mut self.conn.borrow_mut(), query, pagination)
    }
}

pub(super) fn create_organization(conn: &mut SqliteConnection, org: Organization) -> Result<()> {
    let Organization {
        id,
        name,
        building_id,
        activities,
        phones,
    } = org;
    let new_org = models::NewOrganization {
        id: id.into(),
        name: &name,
        building_id: building_id.into(),
    };
    conn.transaction::<_, DieselError, _>(|conn| {
        diesel::insert_into(schema::organizations::table)
            .values(&new_org)
            .execute(conn)?;
        for phone in &phones {
            let new_phone = models::NewOrganizationPhone {
                organization_id: id.into(),
                phone_number: phone.as_str(),
            };
            diesel::insert_into(schema::organization_phones::table)
                .values(&new_phone)
                .execute(conn)?;
        }
        for activity_id in &activities {
            let new_assoc = models::NewOrganizationActivity {
                organization_id: id.into(),
                activity_id: (*activity_id).into(),
            };
            diesel::insert_into(schema::organization_activities::table)
                .values(&new_assoc)
                .execute(conn)?;
        }
        Ok(())
    })
    .map_err(from_diesel_err)?;
    Ok(())
}

fn hydrate_organization(
    conn: &mut SqliteConnection,
    model: models::Organization,
) -> Result<Organization> {
    let phones = load_phone_numbers(conn, model.id)?;
    let activities = load_activity_ids(conn, model.id)?;
    Ok(Organization {
        id: model.id.into(),
        name: model.name,
        building_id: model.building_id.into(),
        activities,
        phones,
    })
}

pub(super) fn get_organization(
    conn: &mut SqliteConnection,
    id: OrganizationId,
) -> Result<Organization> {
    use schema::organizations::dsl;
    let model = dsl::organizations
        .filter(dsl::id.eq(RawId::from(id)))
        .first::<models::Organization>(conn)
        .map_err(from_diesel_err)?;
    hydrate_organization(conn, model)
}

pub(super) fn organizations_in_building(
    conn: &mut SqliteConnection,
    building_id: BuildingId,
    pagination: &Pagination,
) -> Result<Vec<Organization>> {
    use schema::organizations::dsl;
    let mut query = dsl::organizations
        .filter(dsl::building_id.eq(RawId::from(building_id)))
        .order(dsl::id.asc())
        .into_boxed();
    if let Some(offset) = pagination.offset {
        query = query.offset(offset as i64);
    }
    if let Some(limit) = pagination.limit {
        query = query.limit(limit as i64);
    }
    query
        .load::<models::Organization>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(|model| hydrate_organization(conn, model))
        .collect()
}

pub(super) fn query_organizations(
    conn: &mut SqliteConnection,
    query: &OrganizationQuery,
    pagination: &Pagination,
) -> Result<Vec<Organization>> {
    use schema::{buildings, organization_activities, organizations};

    let mut sql = organizations::table
        .inner_join(buildings::table)
        .select((
            organizations::id,
            organizations::name,
            organizations::building_id,
            buildings::lat,
            buildings::lng,
        ))
        .into_boxed();

    if let Some(ids) = &query.activity_ids {
        let raw_ids: Vec<RawId> = ids.iter().copied().map(Into::into).collect();
        let tagged = organization_activities::table
            .filter(organization_activities::activity_id.eq_any(raw_ids))
            .select(organization_activities::organization_id);
        sql = sql.filter(organizations::id.eq_any(tagged));
    }

    // An exact bbox prefilter keeps the candidate set small. The circle
    // predicate and Unicode-aware name matching cannot be expressed in
    // SQLite SQL, so those criteria and the final ordering are applied with
    // the shared core predicates below.
    if let Some(SpatialRegion::Bbox(bbox)) = &query.region {
        sql = sql
            .filter(buildings::lat.between(
                bbox.southwest().lat().to_deg(),
                bbox.northeast().lat().to_deg(),
            ))
            .filter(buildings::lng.between(
                bbox.southwest().lng().to_deg(),
                bbox.northeast().lng().to_deg(),
            ));
    }

    let rows = sql
        .load::<models::JoinedOrganization>(conn)
        .map_err(from_diesel_err)?;

    let mut matches = Vec::with_capacity(rows.len());
    for row in rows {
        if let Some(text) = &query.search_text {
            if !filter::name_matches(&row.name, text) {
                continue;
            }
        }
        let mut distance = Distance::default();
        if let Some(region) = &query.region {
            let pos = MapPoint::from_lat_lng_deg(row.lat, row.lng);
            if !spatial::in_region(pos, region) {
                continue;
            }
            if let SpatialRegion::Circle { center, .. } = region {
                distance = MapPoint::distance(pos, *center);
            }
        }
        matches.push((distance, row));
    }
    matches.sort_by(|(d1, row1), (d2, row2)| {
        d1.partial_cmp(d2)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| row1.id.cmp(&row2.id))
    });

    page::paginate(matches.into_iter().map(|(_, row)| row), pagination)
        .into_iter()
        .map(|row| {
            let models::JoinedOrganization {
                id,
                name,
                building_id,
                ..
            } = row;
            hydrate_organization(
                conn,
                models::Organization {
                    id,
                    name,
                    building_id,
                },
            )
        })
        .collect()
}
