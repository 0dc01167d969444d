//! JSON input loading for annotations and variant lists.

use chromox_core::{ChromosomeAnnotation, GenomicPos, GenomicRegion, RegionType, VariantMarker};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::{CliError, CliResult};

/// Annotation as written on disk; region keys are free-form until resolved.
#[derive(Debug, Deserialize)]
struct RawAnnotation {
    length: GenomicPos,
    #[serde(default)]
    regions: BTreeMap<String, Vec<GenomicRegion>>,
}

fn read_input(path: &Path) -> CliResult<String> {
    if !path.exists() {
        return Err(CliError::file_not_found(path.to_path_buf()));
    }
    Ok(std::fs::read_to_string(path)?)
}

pub fn parse_annotation(content: &str, source: &str) -> CliResult<ChromosomeAnnotation> {
    let raw: RawAnnotation =
        serde_json::from_str(content).map_err(|e| CliError::parse(source.to_string(), e.to_string()))?;

    let mut annotation = ChromosomeAnnotation::new(raw.length);
    for (key, regions) in raw.regions {
        match RegionType::from_key(&key) {
            Some(region_type) => annotation = annotation.with_regions(region_type, regions),
            None => log::warn!("Skipping {} regions of unknown type '{}' in {}", regions.len(), key, source),
        }
    }
    Ok(annotation)
}

pub fn parse_variants(content: &str, source: &str) -> CliResult<Vec<VariantMarker>> {
    serde_json::from_str(content).map_err(|e| CliError::parse(source.to_string(), e.to_string()))
}

pub fn load_annotation(path: &Path) -> CliResult<ChromosomeAnnotation> {
    let annotation = parse_annotation(&read_input(path)?, &path.display().to_string())?;
    log::info!(
        "Loaded annotation {} (length {}, {} region types)",
        path.display(),
        annotation.length,
        annotation.regions_by_type.len()
    );
    Ok(annotation)
}

/// A missing `--variants` flag means an empty list, not an error.
pub fn load_variants(path: Option<&Path>) -> CliResult<Vec<VariantMarker>> {
    match path {
        Some(path) => {
            let variants = parse_variants(&read_input(path)?, &path.display().to_string())?;
            log::info!("Loaded {} variants from {}", variants.len(), path.display());
            Ok(variants)
        }
        None => Ok(Vec::new()),
    }
}
