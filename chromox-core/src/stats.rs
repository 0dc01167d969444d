//! Companion summary computed over the same inputs as the ideogram.
//!
//! Counts come straight from the caller's data, so markers hidden by the
//! renderer's declutter pass are still included.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::types::{AlleleState, ChromosomeAnnotation, RegionType, VariantMarker, VariantStatus};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsSummary {
    pub total_variants: usize,
    pub derived: usize,
    pub ancestral: usize,
    pub confirmed: usize,
    pub novel: usize,
    pub conflict: usize,
    pub pending: usize,
    pub regions_by_type: BTreeMap<RegionType, usize>,
}

pub fn summarize(annotation: &ChromosomeAnnotation, variants: &[VariantMarker]) -> StatsSummary {
    let mut summary = StatsSummary {
        total_variants: variants.len(),
        ..Default::default()
    };

    for variant in variants {
        match variant.allele_state {
            AlleleState::Derived => summary.derived += 1,
            AlleleState::Ancestral => summary.ancestral += 1,
            AlleleState::Unknown => {}
        }
        match variant.status {
            VariantStatus::Confirmed => summary.confirmed += 1,
            VariantStatus::Novel => summary.novel += 1,
            VariantStatus::Conflict => summary.conflict += 1,
            VariantStatus::Pending => summary.pending += 1,
        }
    }

    for (region_type, regions) in &annotation.regions_by_type {
        if !regions.is_empty() {
            summary.regions_by_type.insert(*region_type, regions.len());
        }
    }

    log::debug!(
        "Summarized {} variants ({} derived) over {} region types",
        summary.total_variants,
        summary.derived,
        summary.regions_by_type.len()
    );

    summary
}

impl StatsSummary {
    pub fn status_count(&self, status: VariantStatus) -> usize {
        match status {
            VariantStatus::Confirmed => self.confirmed,
            VariantStatus::Novel => self.novel,
            VariantStatus::Conflict => self.conflict,
            VariantStatus::Pending => self.pending,
        }
    }

    pub fn region_count(&self, region_type: RegionType) -> usize {
        self.regions_by_type.get(&region_type).copied().unwrap_or(0)
    }

    /// Small HTML fragment meant to sit next to the embedded diagram.
    pub fn to_html(&self) -> String {
        let mut html = String::from("<div class=\"ideogram-stats\">\n");
        html.push_str(&format!(
            "  <p><b>Derived:</b> {} &middot; <b>Ancestral:</b> {} &middot; <b>Total:</b> {}</p>\n",
            self.derived, self.ancestral, self.total_variants
        ));

        html.push_str("  <p>");
        let statuses: Vec<String> = VariantStatus::DRAWABLE
            .iter()
            .map(|s| format!("<b>{}:</b> {}", s.label(), self.status_count(*s)))
            .collect();
        html.push_str(&statuses.join(" &middot; "));
        html.push_str("</p>\n");

        if !self.regions_by_type.is_empty() {
            html.push_str("  <ul>\n");
            for (region_type, count) in &self.regions_by_type {
                html.push_str(&format!("    <li>{}: {}</li>\n", region_type.label(), count));
            }
            html.push_str("  </ul>\n");
        }

        html.push_str("</div>\n");
        html
    }
}

impl fmt::Display for StatsSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "derived={} ancestral={} confirmed={} novel={} conflict={} pending={}",
            self.derived, self.ancestral, self.confirmed, self.novel, self.conflict, self.pending
        )?;
        for (region_type, count) in &self.regions_by_type {
            write!(f, " {}={}", region_type.key(), count)?;
        }
        Ok(())
    }
}
