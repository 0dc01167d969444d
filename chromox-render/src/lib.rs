/*!
# ChromoX Ideogram Renderer

Turns a chromosome annotation and its classified variants into a
deterministic SVG ideogram.

## Layers

1. **Region layers**: typed sub-region bands in a fixed paint order, clipped to the chromosome silhouette
2. **Variant markers**: filtered, position-sorted and decluttered triangle glyphs
3. **Scale axis**: 10 Mb ticks with megabase labels
4. **Legends**: present region types, plus every drawable variant status

Rendering is a pure function of its inputs and performs no I/O;
identical inputs give byte-identical documents.
*/

pub mod axis;
pub mod ideogram;
pub mod layout;
pub mod legend;
pub mod markers;
pub mod palette;
pub mod regions;

pub use ideogram::{render_ideogram, IdeogramRenderer};
pub use markers::{place_markers, PlacedMarker};

// Re-export important types
pub use chromox_core::{
    ChromosomeAnnotation, GenomicRegion, IdeogramError, RegionType, RenderOptions, VariantMarker, VariantStatus,
};
