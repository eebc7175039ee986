use super::*;

impl<'a> ActivityRepo for DbReadWrite<'a> {
    fn create_activity(&self, activity: Activity) -> Result<()> {
        create_activity(&mut self.conn.borrow_mut(), activity)
    }
    fn get_activity(&self, id: ActivityId) -> Result<Activity> {
        get_activity(&mut self.conn.borrow_mut(), id)
    }
    fn all_activities(&self) -> Result<Vec<Activity>> {
        all_activities(&mut self.conn.borrow_mut())
    }
    fn activities_by_parent(&self, parent_id: ActivityId) -> Result<Vec<Activity>> {
        activities_by_parent(&mut self.conn.borrow_mut(), parent_id)
    }
}

impl<'a> ActivityRepo for DbReadOnly<'a> {
    fn create_activity(&self, _activity: Activity) -> Result<()> {
        unreachable!();
    }
    fn get_activity(&self, id: ActivityId) -> Result<Activity> {
        get_activity(&mut self.conn.borrow_mut(), id)
    }
    fn all_activities(&self) -> Result<Vec<Activity>> {
        all_activities(&mut self.conn.borrow_mut())
    }
    fn activities_by_parent(&self, parent_id: ActivityId) -> Result<Vec<Activity>> {
        activities_by_parent(&mut self.conn.borrow_mut(), parent_id)
    }
}

pub(super) fn create_activity(conn: &mut SqliteConnection, activity: Activity) -> Result<()> {
    let Activity {
        id,
        parent_id,
        name,
        level,
    } = activity;
    let new_activity = models::NewActivity {
        id: id.into(),
        name: &name,
        parent_id: parent_id.map(Into::into),
        level: i16::from(level.value()),
    };
    diesel::insert_into(schema::activities::table)
        .values(&new_activity)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

pub(super) fn get_activity(conn: &mut SqliteConnection, id: ActivityId) -> Result<Activity> {
    use schema::activities::dsl;
    let model = dsl::activities
        .filter(dsl::id.eq(RawId::from(id)))
        .first::<models::Activity>(conn)
        .map_err(from_diesel_err)?;
    load_activity(model)
}

pub(super) fn all_activities(conn: &mut SqliteConnection) -> Result<Vec<Activity>> {
    use schema::activities::dsl;
    dsl::activities
        .order(dsl::id.asc())
        .load::<models::Activity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(load_activity)
        .collect()
}

pub(super) fn activities_by_parent(
    conn: &mut SqliteConnection,
    parent_id: ActivityId,
) -> Result<Vec<Activity>> {
    use schema::activities::dsl;
    dsl::activities
        .filter(dsl::parent_id.eq(RawId::from(parent_id)))
        .order(dsl::id.asc())
        .load::<models::Activity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(load_activity)
        .collect()
}
