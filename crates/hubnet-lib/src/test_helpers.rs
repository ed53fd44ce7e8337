// Test-only helpers for `hubnet-lib` unit tests
use crate::snapshot::{Hub, Route, Snapshot};

/// Non-central hub whose id equals its name.
pub fn hub(name: &str, city: &str) -> Hub {
    Hub {
        id: name.to_string(),
        code: format!("{}-CODE", name.to_uppercase()),
        name: name.to_string(),
        city: city.to_string(),
        is_central: false,
    }
}

/// Central hub whose id equals its name.
pub fn central(name: &str, city: &str) -> Hub {
    Hub {
        is_central: true,
        ..hub(name, city)
    }
}

/// Route over the given hub ids; city labels are placeholders.
pub fn route(name: &str, hubs: &[&str]) -> Route {
    Route {
        name: name.to_string(),
        source_city: String::new(),
        destination_city: String::new(),
        intermediate_cities: Vec::new(),
        hubs: hubs.iter().map(|id| id.to_string()).collect(),
    }
}

/// Hubs `H1(central, CityA)`, `H2(CityA)`, `H3(central, CityB)`, `H4(CityB)`
/// joined by a single route `[H1, H3]`.
pub fn two_city_snapshot() -> Snapshot {
    Snapshot {
        hubs: vec![
            central("H1", "CityA"),
            hub("H2", "CityA"),
            central("H3", "CityB"),
            hub("H4", "CityB"),
        ],
        routes: vec![route("A-B", &["H1", "H3"])],
    }
}
