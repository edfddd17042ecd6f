use std::path::Path;

use foundation::GeoPoint;
use serde::{Deserialize, Serialize};

/// One selectable place as stored on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceRecord {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug)]
pub enum CatalogError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    DuplicateName(String),
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogError::Io(e) => write!(f, "catalog read error: {e}"),
            CatalogError::Parse(e) => write!(f, "catalog parse error: {e}"),
            CatalogError::DuplicateName(name) => {
                write!(f, "catalog contains duplicate place name: {name}")
            }
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogError::Io(e) => Some(e),
            CatalogError::Parse(e) => Some(e),
            CatalogError::DuplicateName(_) => None,
        }
    }
}

impl From<std::io::Error> for CatalogError {
    fn from(e: std::io::Error) -> Self {
        CatalogError::Io(e)
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(e: serde_json::Error) -> Self {
        CatalogError::Parse(e)
    }
}

/// Static reference list of selectable places.
///
/// Entries keep their load order; names are unique.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Catalog {
    places: Vec<GeoPoint>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<PlaceRecord>) -> Result<Self, CatalogError> {
        let mut catalog = Catalog::new();
        for record in records {
            if catalog.lookup(&record.name).is_some() {
                return Err(CatalogError::DuplicateName(record.name));
            }
            catalog
                .places
                .push(GeoPoint::new(record.name, record.lat, record.lon));
        }
        Ok(catalog)
    }

    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let records: Vec<PlaceRecord> = serde_json::from_str(raw)?;
        Self::from_records(records)
    }

    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    pub fn len(&self) -> usize {
        self.places.len()
    }

    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &GeoPoint> {
        self.places.iter()
    }

    /// Exact lookup by name.
    pub fn lookup(&self, name: &str) -> Option<&GeoPoint> {
        self.places.iter().find(|p| p.name == name)
    }

    /// Case-insensitive substring search in catalog order.
    ///
    /// This is the interface the autocomplete widget consumes.
    pub fn search(&self, query: &str) -> Vec<&GeoPoint> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        self.places
            .iter()
            .filter(|p| p.name.to_lowercase().contains(&needle))
            .collect()
    }
}

/// A built-in demo catalog of German cities for the CLI.
pub fn demo_catalog() -> Catalog {
    let records = vec![
        ("Berlin", 52.520, 13.405),
        ("Hamburg", 53.551, 9.994),
        ("Munich", 48.137, 11.575),
        ("Cologne", 50.937, 6.960),
        ("Frankfurt", 50.110, 8.682),
        ("Stuttgart", 48.775, 9.183),
        ("Leipzig", 51.340, 12.375),
        ("Dresden", 51.050, 13.738),
        ("Hanover", 52.375, 9.732),
        ("Nuremberg", 49.453, 11.077),
        ("Bremen", 53.079, 8.801),
        ("Dortmund", 51.514, 7.466),
    ];
    let records = records
        .into_iter()
        .map(|(name, lat, lon)| PlaceRecord {
            name: name.to_string(),
            lat,
            lon,
        })
        .collect();
    // Static data with unique names; cannot fail.
    Catalog::from_records(records).unwrap_or_default()
}
