use super::{CollaboratorError, GeocodeService, GeocodedPlace};
use geo::Point;
use serde::Deserialize;
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

/// one row of a place lookup table.
#[derive(Deserialize, Clone, Debug)]
pub struct PlaceRecord {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub display_name: String,
}

/// geocode service backed by a CSV place table with name, latitude,
/// longitude, and display_name columns. lookups are case-insensitive on
/// the trimmed place name.
pub struct TableGeocodeService {
    lookup: HashMap<String, GeocodedPlace>,
}

impl TableGeocodeService {
    pub fn new(records: Vec<PlaceRecord>) -> TableGeocodeService {
        let lookup = records
            .into_iter()
            .map(|record| {
                let key = normalize(&record.name);
                let place = GeocodedPlace {
                    coordinate: Point::new(record.longitude, record.latitude),
                    display_name: record.display_name,
                };
                (key, place)
            })
            .collect::<HashMap<_, _>>();
        TableGeocodeService { lookup }
    }

    pub fn from_csv(path: &Path) -> Result<TableGeocodeService, CollaboratorError> {
        let file = std::fs::File::open(path).map_err(|e| {
            CollaboratorError::BuildError(format!(
                "failure opening place table '{}': {e}",
                path.display()
            ))
        })?;
        Self::from_reader(file).map_err(|e| {
            CollaboratorError::BuildError(format!(
                "failure reading place table '{}': {e}",
                path.display()
            ))
        })
    }

    fn from_reader<R: Read>(reader: R) -> Result<TableGeocodeService, String> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let records = csv_reader
            .deserialize()
            .collect::<Result<Vec<PlaceRecord>, _>>()
            .map_err(|e| format!("{e}"))?;
        Ok(Self::new(records))
    }
}

impl GeocodeService for TableGeocodeService {
    fn resolve(&self, place_name: &str) -> Result<Option<GeocodedPlace>, CollaboratorError> {
        Ok(self.lookup.get(&normalize(place_name)).cloned())
    }
}

fn normalize(place_name: &str) -> String {
    place_name.trim().to_lowercase()
}
