use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::model::Catalog;

/// Error type for catalog file loading
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// On-disk syllabus file:
///
/// ```toml
/// title = "Winter study plan"
///
/// [[subject]]
/// name = "Math"
/// chapters = ["Chapter 1: Numbers", "Chapter 2: Algebra"]
/// ```
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    title: Option<String>,
    #[serde(default, rename = "subject")]
    subjects: Vec<SubjectEntry>,
}

#[derive(Debug, Deserialize)]
struct SubjectEntry {
    name: String,
    #[serde(default)]
    chapters: Vec<String>,
}

/// A loaded syllabus: the catalog plus its optional display title.
#[derive(Debug)]
pub struct Syllabus {
    pub title: Option<String>,
    pub catalog: Catalog,
}

/// Load a catalog from a TOML syllabus file. Subject order and chapter
/// order in the file define the catalog's natural order.
pub fn load_syllabus(path: &Path) -> Result<Syllabus, CatalogError> {
    let text = fs::read_to_string(path).map_err(|e| CatalogError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;
    let file: CatalogFile = toml::from_str(&text).map_err(|e| CatalogError::ParseError {
        path: path.to_path_buf(),
        source: e,
    })?;

    let entries = file.subjects.into_iter().flat_map(|subject| {
        subject
            .chapters
            .into_iter()
            .map(move |chapter| (subject.name.clone(), chapter))
    });
    Ok(Syllabus {
        title: file.title,
        catalog: Catalog::from_entries(entries),
    })
}
