use crate::models::{Coordinate, CoordinateRegistry, Junction};

/// Registry of the junctions bundled with the client
#[must_use]
pub fn default_registry() -> CoordinateRegistry {
    CoordinateRegistry::new(parse_junctions(include_str!("../junctions.csv")))
}

/// Parse `id,lat,lng` rows; the first row is a header. Rows that do not parse are skipped.
#[must_use]
pub fn parse_junctions(csv_content: &str) -> Vec<Junction> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(csv_content.as_bytes());

    reader
        .records()
        .filter_map(Result::ok)
        .filter_map(|row| parse_junction(&row))
        .collect()
}

fn parse_junction(row: &csv::StringRecord) -> Option<Junction> {
    let id = row.get(0).filter(|s| !s.is_empty())?;
    let lat = row.get(1)?.parse::<f64>().ok()?;
    let lng = row.get(2)?.parse::<f64>().ok()?;
    Some(Junction::new(id, Coordinate::new(lat, lng)))
}
