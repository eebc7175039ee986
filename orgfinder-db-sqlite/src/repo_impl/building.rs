use super::*;

impl<'a> BuildingRepo for DbReadWrite<'a> {
    fn create_building(&self, building: Building) -> Result<()> {
        create_building(&mut self.conn.borrow_mut(), building)
    }
    fn get_building(&self, id: BuildingId) -> Result<Building> {
        get_building(&mut self.conn.borrow_mut(), id)
    }
    fn all_buildings(&self, pagination: &Pagination) -> Result<Vec<Building>> {
        all_buildings(&mut self.conn.borrow_mut(), pagination)
    }
}

impl<'a> BuildingRepo for DbReadOnly<'a> {
    fn create_building(&self, _building: Building) -> Result<()> {
        unreachable!();
    }
    fn get_building(&self, id: BuildingId) -> Result<Building> {
        get_building(&mut self.conn.borrow_mut(), id)
    }
    fn all_buildings(&self, pagination: &Pagination) -> Result<Vec<Building>> {
        all_buildings(&mut self.conn.borrow_mut(), pagination)
    }
}

fn load_building(model: models::Building) -> Building {
    let models::Building {
        id,
        address,
        lat,
        lng,
    } = model;
    Building {
        id: id.into(),
        address,
        pos: MapPoint::from_lat_lng_deg(lat, lng),
    }
}

pub(super) fn create_building(conn: &mut SqliteConnection, building: Building) -> Result<()> {
    let Building { id, address, pos } = building;
    let new_building = models::NewBuilding {
        id: id.into(),
        address: &address,
        lat: pos.lat().to_deg(),
        lng: pos.lng().to_deg(),
    };
    diesel::insert_into(schema::buildings::table)
        .values(&new_building)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

pub(super) fn get_building(conn: &mut SqliteConnection, id: BuildingId) -> Result<Building> {
    use schema::buildings::dsl;
    let model = dsl::buildings
        .filter(dsl::id.eq(RawId::from(id)))
        .first::<models::Building>(conn)
        .map_err(from_diesel_err)?;
    Ok(load_building(model))
}

pub(super) fn all_buildings(
    conn: &mut SqliteConnection,
    pagination: &Pagination,
) -> Result<Vec<Building>> {
    use schema::buildings::dsl;
    let mut query = dsl::buildings.order(dsl::id.asc()).into_boxed();
    if let Some(offset) = pagination.offset {
        query = query.offset(offset as i64);
    }
    if let Some(limit) = pagination.limit {
        query = query.limit(limit as i64);
    }
    Ok(query
        .load::<models::Building>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(load_building)
        .collect())
}
