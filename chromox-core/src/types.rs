use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

pub type GenomicPos = u64;

/// Structural or functional class of a chromosome interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RegionType {
    Par,
    XDegenerate,
    Xtr,
    Ampliconic,
    Palindrome,
    Heterochromatin,
    Centromere,
    Str,
}

impl RegionType {
    pub const ALL: [RegionType; 8] = [
        RegionType::Par,
        RegionType::XDegenerate,
        RegionType::Xtr,
        RegionType::Ampliconic,
        RegionType::Palindrome,
        RegionType::Heterochromatin,
        RegionType::Centromere,
        RegionType::Str,
    ];

    /// Human readable label used in tooltips and summaries.
    pub fn label(self) -> &'static str {
        match self {
            RegionType::Par => "PAR",
            RegionType::XDegenerate => "X-degenerate",
            RegionType::Xtr => "XTR",
            RegionType::Ampliconic => "Ampliconic",
            RegionType::Palindrome => "Palindrome",
            RegionType::Heterochromatin => "Heterochromatin",
            RegionType::Centromere => "Centromere",
            RegionType::Str => "STR",
        }
    }

    /// Wire name as it appears in JSON input.
    pub fn key(self) -> &'static str {
        match self {
            RegionType::Par => "PAR",
            RegionType::XDegenerate => "X_DEGENERATE",
            RegionType::Xtr => "XTR",
            RegionType::Ampliconic => "AMPLICONIC",
            RegionType::Palindrome => "PALINDROME",
            RegionType::Heterochromatin => "HETEROCHROMATIN",
            RegionType::Centromere => "CENTROMERE",
            RegionType::Str => "STR",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.key().eq_ignore_ascii_case(key))
    }
}

impl fmt::Display for RegionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenomicRegion {
    pub start: GenomicPos,
    pub end: GenomicPos,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl GenomicRegion {
    pub fn new(start: GenomicPos, end: GenomicPos) -> Self {
        Self { start, end, name: None }
    }

    pub fn named<S: Into<String>>(start: GenomicPos, end: GenomicPos, name: S) -> Self {
        Self { start, end, name: Some(name.into()) }
    }
}

/// A linear chromosome with its typed sub-regions.
///
/// Regions keep their input order within a type; the map is ordered by
/// `RegionType` so iteration never depends on hashing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChromosomeAnnotation {
    pub length: GenomicPos,
    #[serde(default, rename = "regions")]
    pub regions_by_type: BTreeMap<RegionType, Vec<GenomicRegion>>,
}

impl ChromosomeAnnotation {
    pub fn new(length: GenomicPos) -> Self {
        Self {
            length,
            regions_by_type: BTreeMap::new(),
        }
    }

    pub fn with_regions(mut self, region_type: RegionType, regions: Vec<GenomicRegion>) -> Self {
        self.regions_by_type.entry(region_type).or_default().extend(regions);
        self
    }

    pub fn regions(&self, region_type: RegionType) -> &[GenomicRegion] {
        self.regions_by_type
            .get(&region_type)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// A type counts as present when the map holds at least one region for it.
    pub fn has_type(&self, region_type: RegionType) -> bool {
        !self.regions(region_type).is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VariantStatus {
    Confirmed,
    Novel,
    Conflict,
    Pending,
}

impl VariantStatus {
    pub const ALL: [VariantStatus; 4] = [
        VariantStatus::Confirmed,
        VariantStatus::Novel,
        VariantStatus::Conflict,
        VariantStatus::Pending,
    ];

    /// Statuses eligible for a marker glyph, in legend order.
    pub const DRAWABLE: [VariantStatus; 3] = [
        VariantStatus::Confirmed,
        VariantStatus::Novel,
        VariantStatus::Conflict,
    ];

    pub fn is_drawable(self) -> bool {
        match self {
            VariantStatus::Confirmed | VariantStatus::Novel | VariantStatus::Conflict => true,
            VariantStatus::Pending => false,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            VariantStatus::Confirmed => "CONFIRMED",
            VariantStatus::Novel => "NOVEL",
            VariantStatus::Conflict => "CONFLICT",
            VariantStatus::Pending => "PENDING",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str().eq_ignore_ascii_case(key))
    }

    pub fn label(self) -> &'static str {
        match self {
            VariantStatus::Confirmed => "Confirmed",
            VariantStatus::Novel => "Novel",
            VariantStatus::Conflict => "Conflict",
            VariantStatus::Pending => "Pending",
        }
    }
}

impl fmt::Display for VariantStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Allele carried by the subject at a marker position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlleleState {
    Derived,
    Ancestral,
    #[default]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantMarker {
    pub position: GenomicPos,
    pub status: VariantStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default)]
    pub allele_state: AlleleState,
}

impl VariantMarker {
    pub fn new(position: GenomicPos, status: VariantStatus) -> Self {
        Self {
            position,
            status,
            label: None,
            allele_state: AlleleState::Unknown,
        }
    }

    pub fn with_label<S: Into<String>>(mut self, label: S) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_allele_state(mut self, state: AlleleState) -> Self {
        self.allele_state = state;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderOptions {
    /// Reserved toggle; every whitelisted layer is drawn regardless.
    #[serde(default = "default_true")]
    pub show_all_regions: bool,

    #[serde(default = "default_title")]
    pub title: String,

    /// Emitted as an XML comment right after the document header.
    #[serde(default)]
    pub provenance_comment: Option<String>,
}

fn default_true() -> bool {
    true
}

fn default_title() -> String {
    "Chromosome Ideogram".to_string()
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            show_all_regions: true,
            title: default_title(),
            provenance_comment: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_keys_round_trip_through_from_key() {
        for t in RegionType::ALL {
            assert_eq!(RegionType::from_key(t.key()), Some(t));
        }
        assert_eq!(RegionType::from_key("x_degenerate"), Some(RegionType::XDegenerate));
        assert_eq!(RegionType::from_key("SATELLITE"), None);
    }

    #[test]
    fn pending_is_not_drawable() {
        assert!(!VariantStatus::Pending.is_drawable());
        assert!(VariantStatus::DRAWABLE.iter().all(|s| s.is_drawable()));
    }

    #[test]
    fn annotation_deserializes_from_json() {
        let json = r#"{
            "length": 57227415,
            "regions": {
                "PAR": [{"start": 10001, "end": 2781479, "name": "PAR1"}],
                "CENTROMERE": [{"start": 10316945, "end": 10544039}]
            }
        }"#;
        let ann: ChromosomeAnnotation = serde_json::from_str(json).unwrap();
        assert_eq!(ann.length, 57_227_415);
        assert_eq!(ann.regions(RegionType::Par)[0].name.as_deref(), Some("PAR1"));
        assert!(ann.has_type(RegionType::Centromere));
        assert!(!ann.has_type(RegionType::Str));
    }

    #[test]
    fn variant_defaults_to_unknown_allele_state() {
        let v: VariantMarker = serde_json::from_str(r#"{"position": 5, "status": "NOVEL"}"#).unwrap();
        assert_eq!(v.allele_state, AlleleState::Unknown);
        assert_eq!(v.status, VariantStatus::Novel);
        assert!(v.label.is_none());
    }
}
