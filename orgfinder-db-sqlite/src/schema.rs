///////////////////////////////////////////////////////////////////////
// Activities
///////////////////////////////////////////////////////////////////////

table! {
    activities (id) {
        id -> BigInt,
        name -> Text,
        parent_id -> Nullable<BigInt>,
        level -> SmallInt,
    }
}

///////////////////////////////////////////////////////////////////////
// Buildings
///////////////////////////////////////////////////////////////////////

table! {
    buildings (id) {
        id -> BigInt,
        address -> Text,
        lat -> Double,
        lng -> Double,
    }
}

///////////////////////////////////////////////////////////////////////
// Organizations
///////////////////////////////////////////////////////////////////////

table! {
    organizations (id) {
        id -> BigInt,
        name -> Text,
        building_id -> BigInt,
    }
}

table! {
    organization_phones (id) {
        id -> BigInt,
        organization_id -> BigInt,
        phone_number -> Text,
    }
}

table! {
    organization_activities (organization_id, activity_id) {
        organization_id -> BigInt,
        activity_id -> BigInt,
    }
}

joinable!(organizations -> buildings (building_id));
joinable!(organization_phones -> organizations (organization_id));
joinable!(organization_activities -> organizations (organization_id));
joinable!(organization_activities -> activities (activity_id));

allow_tables_to_appear_in_same_query!(
    activities,
    buildings,
    organizations,
    organization_phones,
    organization_activities,
);
