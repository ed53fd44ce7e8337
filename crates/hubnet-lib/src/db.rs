use std::collections::HashMap;
use std::path::{Path, PathBuf};

use rusqlite::{Connection, Row};
use tracing::debug;

use crate::error::{Error, Result};
use crate::snapshot::{Hub, NetworkFeed, Route, Snapshot};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TableDefinition {
    name: &'static str,
    columns: &'static [&'static str],
}

const HUBS: TableDefinition = TableDefinition {
    name: "Hubs",
    columns: &["hubId", "hubCode", "hubName", "hubCity", "isCentral"],
};

const ROUTES: TableDefinition = TableDefinition {
    name: "Routes",
    columns: &["routeId", "routeName", "sourceCity", "destinationCity"],
};

const ROUTE_HUBS: TableDefinition = TableDefinition {
    name: "RouteHubs",
    columns: &["routeId", "position", "hubId"],
};

const ROUTE_INTERMEDIATE_CITIES: TableDefinition = TableDefinition {
    name: "RouteIntermediateCities",
    columns: &["routeId", "position", "city"],
};

/// Schema used by [`create_schema`]; handy for seeding test datasets.
pub const SCHEMA_SQL: &str = "
    CREATE TABLE Hubs (
        hubId TEXT PRIMARY KEY,
        hubCode TEXT NOT NULL,
        hubName TEXT NOT NULL,
        hubCity TEXT NOT NULL,
        isCentral INTEGER NOT NULL DEFAULT 0
    );
    CREATE TABLE Routes (
        routeId TEXT PRIMARY KEY,
        routeName TEXT NOT NULL,
        sourceCity TEXT NOT NULL,
        destinationCity TEXT NOT NULL
    );
    CREATE TABLE RouteHubs (
        routeId TEXT NOT NULL,
        position INTEGER NOT NULL,
        hubId TEXT NOT NULL
    );
    CREATE TABLE RouteIntermediateCities (
        routeId TEXT NOT NULL,
        position INTEGER NOT NULL,
        city TEXT NOT NULL
    );
";

/// Create the hub/route tables on an empty connection.
pub fn create_schema(connection: &Connection) -> Result<()> {
    connection.execute_batch(SCHEMA_SQL)?;
    Ok(())
}

/// Hub and route feed backed by a SQLite database file.
#[derive(Debug, Clone)]
pub struct SqliteFeed {
    path: PathBuf,
}

impl SqliteFeed {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn open(&self) -> Result<Connection> {
        if !self.path.exists() {
            return Err(Error::DatasetNotFound {
                path: self.path.clone(),
            });
        }
        Ok(Connection::open(&self.path)?)
    }
}

impl NetworkFeed for SqliteFeed {
    fn hubs(&self) -> Result<Vec<Hub>> {
        let connection = self.open()?;
        ensure_table(&connection, HUBS)?;
        load_hubs(&connection)
    }

    fn routes(&self) -> Result<Vec<Route>> {
        let connection = self.open()?;
        ensure_table(&connection, ROUTES)?;
        ensure_table(&connection, ROUTE_HUBS)?;
        load_routes(&connection)
    }

    fn snapshot(&self) -> Result<Snapshot> {
        load_snapshot_sqlite(&self.path)
    }
}

/// Load hubs and routes from a SQLite dataset in one pass.
///
/// The `Hubs`, `Routes` and `RouteHubs` tables are required; the
/// `RouteIntermediateCities` table is optional. Route hub references are
/// returned as stored, including ones that point at deleted hubs.
pub fn load_snapshot_sqlite(db_path: &Path) -> Result<Snapshot> {
    let connection = SqliteFeed::new(db_path).open()?;
    for table in [HUBS, ROUTES, ROUTE_HUBS] {
        ensure_table(&connection, table)?;
    }
    debug!(path = %db_path.display(), "loading hub network");

    let hubs = load_hubs(&connection)?;
    let routes = load_routes(&connection)?;
    debug!(hubs = hubs.len(), routes = routes.len(), "loaded hub network");

    Snapshot::new(hubs, routes)
}

fn load_hubs(connection: &Connection) -> Result<Vec<Hub>> {
    let mut stmt = connection.prepare(
        "SELECT CAST(hubId AS TEXT), hubCode, hubName, hubCity, isCentral \
         FROM Hubs ORDER BY rowid",
    )?;
    let rows = stmt.query_map([], row_to_hub)?;

    let mut hubs = Vec::new();
    for entry in rows {
        hubs.push(entry?);
    }
    Ok(hubs)
}

fn load_routes(connection: &Connection) -> Result<Vec<Route>> {
    let mut hub_refs = load_ordered_column(
        connection,
        "SELECT CAST(routeId AS TEXT), CAST(hubId AS TEXT) FROM RouteHubs \
         ORDER BY routeId, position",
    )?;

    let mut intermediate = if table_exists(connection, ROUTE_INTERMEDIATE_CITIES.name)?
        && table_has_columns(
            connection,
            ROUTE_INTERMEDIATE_CITIES.name,
            ROUTE_INTERMEDIATE_CITIES.columns,
        )? {
        load_ordered_column(
            connection,
            "SELECT CAST(routeId AS TEXT), city FROM RouteIntermediateCities \
             ORDER BY routeId, position",
        )?
    } else {
        HashMap::new()
    };

    let mut stmt = connection.prepare(
        "SELECT CAST(routeId AS TEXT), routeName, sourceCity, destinationCity \
         FROM Routes ORDER BY rowid",
    )?;
    let rows = stmt.query_map([], |row| {
        Ok((
            row.get::<_, String>(0)?,
            row.get::<_, String>(1)?,
            row.get::<_, String>(2)?,
            row.get::<_, String>(3)?,
        ))
    })?;

    let mut routes = Vec::new();
    for entry in rows {
        let (route_id, name, source_city, destination_city) = entry?;
        routes.push(Route {
            name,
            source_city,
            destination_city,
            intermediate_cities: intermediate.remove(&route_id).unwrap_or_default(),
            hubs: hub_refs.remove(&route_id).unwrap_or_default(),
        });
    }
    Ok(routes)
}

/// Collect `(routeId, value)` rows into per-route lists, keeping row order.
fn load_ordered_column(connection: &Connection, sql: &str) -> Result<HashMap<String, Vec<String>>> {
    let mut stmt = connection.prepare(sql)?;
    let rows = stmt.query_map([], |row| {
        Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
    })?;

    let mut grouped: HashMap<String, Vec<String>> = HashMap::new();
    for row in rows {
        let (route_id, value) = row?;
        grouped.entry(route_id).or_default().push(value);
    }
    Ok(grouped)
}

fn row_to_hub(row: &Row<'_>) -> rusqlite::Result<Hub> {
    Ok(Hub {
        id: row.get(0)?,
        code: row.get(1)?,
        name: row.get(2)?,
        city: row.get(3)?,
        is_central: row.get::<_, Option<i64>>(4)?.unwrap_or(0) != 0,
    })
}

fn ensure_table(connection: &Connection, table: TableDefinition) -> Result<()> {
    if table_exists(connection, table.name)?
        && table_has_columns(connection, table.name, table.columns)?
    {
        Ok(())
    } else {
        Err(Error::UnsupportedSchema)
    }
}

fn table_exists(connection: &Connection, table: &str) -> Result<bool> {
    let mut stmt = connection
        .prepare("SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1 LIMIT 1")?;
    let mut rows = stmt.query([table])?;
    Ok(rows.next()?.is_some())
}

fn table_has_columns(connection: &Connection, table: &str, required: &[&str]) -> Result<bool> {
    let pragma = format!("PRAGMA table_info('{table}')");
    let mut stmt = connection.prepare(&pragma)?;
    let mut rows = stmt.query([])?;

    let mut columns = Vec::new();
    while let Some(row) = rows.next()? {
        let name: String = row.get(1)?;
        columns.push(name);
    }

    Ok(required.iter().all(|required| {
        columns
            .iter()
            .any(|column| column.eq_ignore_ascii_case(required))
    }))
}
