//! Reads the bundled product list into a validated [`Catalog`].
//!
//! A catalog source is either a single JSON file holding an array of
//! records, or a directory whose `*.json` files are concatenated in path
//! order.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::types::{Catalog, EquipmentRecord};

#[derive(Debug, Default, Clone, Copy)]
pub struct CatalogLoader;

impl CatalogLoader {
    pub fn new() -> Self {
        Self
    }

    /// Load from a file or a directory, whichever `path` points at.
    pub fn load(&self, path: &Path) -> Result<Catalog> {
        if path.is_dir() {
            self.from_dir(path)
        } else {
            self.from_file(path)
        }
    }

    pub fn from_json_str(&self, json: &str) -> Result<Catalog> {
        let records = parse_records(json, "<inline>")?;
        Catalog::new(records)
    }

    pub fn from_file(&self, path: &Path) -> Result<Catalog> {
        let records = self.read_records(path)?;
        let catalog = Catalog::new(records)?;
        info!(path = %path.display(), records = catalog.len(), categories = catalog.categories().len() - 1, "catalog loaded");
        Ok(catalog)
    }

    pub fn from_dir(&self, dir: &Path) -> Result<Catalog> {
        let files = list_json_files(dir)?;
        if files.is_empty() {
            warn!(dir = %dir.display(), "no .json files found, catalog is empty");
        }
        let mut records = Vec::new();
        for (file_index, file_path) in files.iter().enumerate() {
            debug!(file = %file_path.display(), "reading catalog file {}/{}", file_index + 1, files.len());
            records.extend(self.read_records(file_path)?);
        }
        let catalog = Catalog::new(records)?;
        info!(dir = %dir.display(), files = files.len(), records = catalog.len(), "catalog loaded");
        Ok(catalog)
    }

    fn read_records(&self, path: &Path) -> Result<Vec<EquipmentRecord>> {
        let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        parse_records(&content, &path.display().to_string())
    }
}

fn parse_records(json: &str, origin: &str) -> Result<Vec<EquipmentRecord>> {
    serde_json::from_str(json).map_err(|source| Error::Parse { origin: origin.to_string(), source })
}

fn list_json_files(root: &Path) -> Result<Vec<PathBuf>> {
    if !root.exists() {
        return Err(Error::NotFound(root.display().to_string()));
    }
    let mut json_files = Vec::new();
    for entry in walkdir::WalkDir::new(root).into_iter().filter_map(|e| e.ok()).filter(|e| e.file_type().is_file()) {
        let path = entry.path();
        if path.extension().and_then(|s| s.to_str()) == Some("json") {
            json_files.push(path.to_path_buf());
        }
    }
    json_files.sort();
    Ok(json_files)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_optional_fields_default_to_empty() {
        let catalog = CatalogLoader::new()
            .from_json_str(r#"[{"id": 1, "equipment_name": "Blender", "categories": ["Bar"]}]"#)
            .expect("load");
        let r = &catalog.records()[0];
        assert_eq!(r.technical_specifications, "");
        assert!(r.specifications_object.is_empty());
    }

    #[test]
    fn missing_categories_is_a_parse_error() {
        let err = CatalogLoader::new()
            .from_json_str(r#"[{"id": 1, "equipment_name": "Blender"}]"#)
            .unwrap_err();
        assert!(matches!(err, Error::Parse { .. }), "{err}");
    }

    #[test]
    fn empty_array_is_an_empty_catalog() {
        let catalog = CatalogLoader::new().from_json_str("[]").expect("load");
        assert!(catalog.is_empty());
    }
}
