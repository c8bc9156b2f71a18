use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail, ensure};

use super::record::{Catalog, ServiceRecord};

const EMBEDDED_CATALOG: &str = include_str!("../../assets/services.json");

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CatalogSource {
    Embedded,
    File(PathBuf),
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Embedded => f.write_str("embedded catalog"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

pub fn load_catalog(source: &CatalogSource) -> Result<Catalog> {
    let raw = match source {
        CatalogSource::Embedded => EMBEDDED_CATALOG.to_owned(),
        CatalogSource::File(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read catalog file {}", path.display()))?,
    };

    let catalog = parse_catalog(&raw).with_context(|| format!("invalid catalog in {source}"))?;
    if catalog.is_empty() {
        log::warn!("{source} contains no services");
    } else {
        log::info!("loaded {} services from {source}", catalog.len());
    }
    Ok(catalog)
}

fn parse_catalog(raw: &str) -> Result<Catalog> {
    let records: Vec<ServiceRecord> =
        serde_json::from_str(raw).context("catalog is not a JSON array of services")?;

    let mut seen = HashSet::with_capacity(records.len());
    for (index, record) in records.iter().enumerate() {
        let id = record.id.trim();
        ensure!(!id.is_empty(), "service #{index} has an empty id");
        ensure!(
            !record.title.trim().is_empty(),
            "service {id} has an empty title"
        );
        if !seen.insert(id) {
            bail!("duplicate service id {id}");
        }
    }

    Ok(Catalog::new(records))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Icon;

    #[test]
    fn embedded_catalog_is_valid() {
        let catalog = load_catalog(&CatalogSource::Embedded).unwrap();
        assert!(!catalog.is_empty());
        for record in catalog.records() {
            assert!(!record.description.is_empty(), "empty description for {}", record.id);
            assert!(!record.keywords.is_empty(), "no keywords for {}", record.id);
        }
    }

    #[test]
    fn optional_fields_default_to_none() {
        let catalog = parse_catalog(
            r#"[{"id": "a", "title": "Site web", "description": "d", "icon": "globe"}]"#,
        )
        .unwrap();
        let record = catalog.get(0).unwrap();
        assert!(record.keywords.is_empty());
        assert_eq!(record.price, None);
        assert_eq!(record.duration, None);
        assert_eq!(record.icon, Icon::Globe);
    }

    #[test]
    fn rejects_duplicate_ids() {
        let error = parse_catalog(
            r#"[
                {"id": "a", "title": "One", "description": "", "icon": "globe"},
                {"id": "a", "title": "Two", "description": "", "icon": "cart"}
            ]"#,
        )
        .unwrap_err();
        assert!(error.to_string().contains("duplicate service id a"));
    }

    #[test]
    fn rejects_blank_title() {
        let error = parse_catalog(
            r#"[{"id": "a", "title": "  ", "description": "", "icon": "globe"}]"#,
        )
        .unwrap_err();
        assert!(error.to_string().contains("empty title"));
    }

    #[test]
    fn rejects_unknown_icon() {
        assert!(
            parse_catalog(r#"[{"id": "a", "title": "A", "description": "", "icon": "rocket"}]"#)
                .is_err()
        );
    }

    #[test]
    fn missing_file_reports_path() {
        let source = CatalogSource::File(PathBuf::from("/nonexistent/services.json"));
        let error = load_catalog(&source).unwrap_err();
        assert!(format!("{error:#}").contains("/nonexistent/services.json"));
    }
}
