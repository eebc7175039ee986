
pub mod prelude {

    use orgfinder_entities::builders::*;

    pub use orgfinder_core::{
        entities::*,
        repositories::{
            ActivityRepo as _, BuildingRepo as _, OrganizationRepo as _, Pagination,
        },
        usecases,
    };

    pub use crate::{error::AppError, prelude as flows};

    pub mod sqlite {
        pub use super::super::super::sqlite::*;
    }

    pub fn new_inmemory_connections() -> sqlite::Connections {
        let _ = env_logger::builder().is_test(true).try_init();
        let connections = sqlite::Connections::init(":memory:", 1).unwrap();
        orgfinder_db_sqlite::run_embedded_database_migrations(connections.exclusive().unwrap());
        connections
    }

    /// The shared end-to-end dataset: the taxonomy `1 -> 4 -> {10, 11}`
    /// with the top-level siblings `2` and `3`, two buildings and three
    /// organizations spread over them.
    pub fn seed_default_dataset(connections: &sqlite::Connections) {
        let db = connections.exclusive().unwrap();

        let activities = vec![
            Activity::build().id(1).name("Еда").level(1).finish(),
            Activity::build().id(2).name("Автомобили").level(1).finish(),
            Activity::build().id(3).name("Торговля").level(1).finish(),
            Activity::build()
                .id(4)
                .parent(1)
                .name("Молочная продукция")
                .level(2)
                .finish(),
            Activity::build()
                .id(10)
                .parent(4)
                .name("Сыры")
                .level(3)
                .finish(),
            Activity::build()
                .id(11)
                .parent(4)
                .name("Молоко")
                .level(3)
                .finish(),
        ];
        for activity in activities {
            db.create_activity(activity).unwrap();
        }

        db.create_building(
            Building::build()
                .id(1)
                .address("г. Москва, ул. Ленина 1, офис 3")
                .pos(MapPoint::from_lat_lng_deg(55.7558, 37.6176))
                .finish(),
        )
        .unwrap();
        db.create_building(
            Building::build()
                .id(2)
                .address("г. Москва, ул. Блюхера 32/1")
                .pos(MapPoint::from_lat_lng_deg(55.0, 37.0))
                .finish(),
        )
        .unwrap();

        db.create_organization(
            Organization::build()
                .id(1)
                .name("ООО Рога и Копыта")
                .building(1)
                .activities(vec![4])
                .phones(vec!["2-222-222", "3-333-333"])
                .finish(),
        )
        .unwrap();
        db.create_organization(
            Organization::build()
                .id(2)
                .name("Магазин Молоко")
                .building(1)
                .activities(vec![10])
                .phones(vec!["8-923-666-13-13"])
                .finish(),
        )
        .unwrap();
        db.create_organization(
            Organization::build()
                .id(3)
                .name("Автосервис Колесо")
                .building(2)
                .activities(vec![2])
                .phones(vec!["8-800-700-08-08"])
                .finish(),
        )
        .unwrap();
    }
}
