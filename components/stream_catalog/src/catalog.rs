// components/stream_catalog/src/catalog.rs
use crate::error::CatalogError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use url::Url;

/// A selectable internet radio station: display name plus stream source URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Station {
    pub name: String,
    pub url: Url,
}

/// Immutable list of stations, built once at startup and shared read-only.
#[derive(Debug, Clone)]
pub struct StreamCatalog {
    stations: Vec<Station>,
}

impl StreamCatalog {
    pub fn new(stations: Vec<Station>) -> Result<Self, CatalogError> {
        if stations.is_empty() {
            return Err(CatalogError::Empty);
        }
        Ok(Self { stations })
    }

    /// The stations the original deployment shipped with.
    pub fn builtin() -> Self {
        let stations = [
            ("Deep Space One", "https://somafm.com/nossl/deepspaceone130.pls"),
            ("Lush", "https://somafm.com/nossl/lush130.pls"),
            ("Metal", "https://somafm.com/metal130.pls"),
            ("Drone Zone", "https://somafm.com/dronezone130.pls"),
            ("Sonic Universe", "https://somafm.com/nossl/sonicuniverse130.pls"),
        ]
        .into_iter()
        .map(|(name, url)| Station {
            name: name.to_string(),
            // Built-in URLs are known-good literals
            url: Url::parse(url).expect("builtin station URL is valid"),
        })
        .collect();

        Self { stations }
    }

    /// Load a catalog from a JSON array of `{"name": ..., "url": ...}` entries.
    pub fn from_file(path: &Path) -> Result<Self, CatalogError> {
        let data = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let stations: Vec<Station> =
            serde_json::from_str(&data).map_err(|source| CatalogError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        Self::new(stations)
    }

    pub fn find(&self, name: &str) -> Option<&Station> {
        self.stations.iter().find(|s| s.name == name)
    }

    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use std::io::Write;

    #[test]
    fn builtin_catalog_has_five_stations() {
        let catalog = StreamCatalog::builtin();
        assert_eq!(catalog.len(), 5);
    }

    #[test]
    fn finds_station_by_name() {
        let catalog = StreamCatalog::builtin();
        let station = catalog.find("Drone Zone").unwrap();
        assert_eq!(station.url.as_str(), "https://somafm.com/dronezone130.pls");
    }

    #[test]
    fn unknown_name_finds_nothing() {
        let catalog = StreamCatalog::builtin();
        assert!(catalog.find("Nonexistent FM").is_none());
    }

    #[test]
    fn rejects_empty_catalog() {
        assert_matches!(StreamCatalog::new(vec![]), Err(CatalogError::Empty));
    }

    #[test]
    fn loads_catalog_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"name": "SomaFM Groove Salad", "url": "https://somafm.com/groovesalad.pls"}}]"#
        )
        .unwrap();

        let catalog = StreamCatalog::from_file(file.path()).unwrap();
        assert_eq!(catalog.len(), 1);
        let station = catalog.find("SomaFM Groove Salad").unwrap();
        assert_eq!(station.url.as_str(), "https://somafm.com/groovesalad.pls");
    }

    #[test]
    fn missing_file_reports_path() {
        let err = StreamCatalog::from_file(Path::new("/no/such/catalog.json")).unwrap_err();
        assert_matches!(err, CatalogError::Io { .. });
    }

    #[test]
    fn malformed_url_fails_to_parse() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"name": "Bad", "url": "not a url"}}]"#).unwrap();

        assert_matches!(
            StreamCatalog::from_file(file.path()),
            Err(CatalogError::Parse { .. })
        );
    }

    #[test]
    fn empty_file_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[]").unwrap();

        assert_matches!(
            StreamCatalog::from_file(file.path()),
            Err(CatalogError::Empty)
        );
    }
}
