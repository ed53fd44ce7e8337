//! Common test utilities and fixture helpers.

use std::path::{Path, PathBuf};

use hubnet_lib::{create_schema, Hub, Route, Snapshot};
use rusqlite::{params, Connection};

/// Path to the checked-in JSON network fixture.
#[allow(dead_code)]
pub fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures/sample_network.json")
}

/// Write `snapshot` into a fresh SQLite dataset at `path`.
///
/// Route ids are `route-<index>`.
#[allow(dead_code)]
pub fn write_sqlite_dataset(path: &Path, snapshot: &Snapshot) {
    let connection = Connection::open(path).expect("create dataset");
    create_schema(&connection).expect("create schema");

    for hub in &snapshot.hubs {
        connection
            .execute(
                "INSERT INTO Hubs (hubId, hubCode, hubName, hubCity, isCentral) \
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![hub.id, hub.code, hub.name, hub.city, hub.is_central as i64],
            )
            .expect("insert hub");
    }

    for (index, route) in snapshot.routes.iter().enumerate() {
        let route_id = format!("route-{index}");
        connection
            .execute(
                "INSERT INTO Routes (routeId, routeName, sourceCity, destinationCity) \
                 VALUES (?1, ?2, ?3, ?4)",
                params![route_id, route.name, route.source_city, route.destination_city],
            )
            .expect("insert route");
        for (position, hub_id) in route.hubs.iter().enumerate() {
            connection
                .execute(
                    "INSERT INTO RouteHubs (routeId, position, hubId) VALUES (?1, ?2, ?3)",
                    params![route_id, position as i64, hub_id],
                )
                .expect("insert route hub");
        }
        for (position, city) in route.intermediate_cities.iter().enumerate() {
            connection
                .execute(
                    "INSERT INTO RouteIntermediateCities (routeId, position, city) \
                     VALUES (?1, ?2, ?3)",
                    params![route_id, position as i64, city],
                )
                .expect("insert intermediate city");
        }
    }
}

#[allow(dead_code)]
pub fn hub(name: &str, city: &str, is_central: bool) -> Hub {
    Hub {
        id: name.to_string(),
        code: format!("{}-CODE", name.to_uppercase()),
        name: name.to_string(),
        city: city.to_string(),
        is_central,
    }
}

#[allow(dead_code)]
pub fn route(name: &str, hubs: &[&str]) -> Route {
    Route {
        name: name.to_string(),
        source_city: String::new(),
        destination_city: String::new(),
        intermediate_cities: Vec::new(),
        hubs: hubs.iter().map(|id| id.to_string()).collect(),
    }
}
