use crate::error::{IdeogramError, IdeogramResult};
use crate::types::GenomicPos;

/// Upper bound on accepted chromosome lengths (2^40 bases).
pub const MAX_CHROMOSOME_LENGTH: GenomicPos = 1 << 40;

/// Linear genomic-position to pixel-x transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateMapper {
    chromosome_length: GenomicPos,
    margin: f64,
    drawable_width: f64,
}

impl CoordinateMapper {
    /// Fails fast on a length outside `1..=MAX_CHROMOSOME_LENGTH` or a canvas
    /// narrower than its margins.
    pub fn new(chromosome_length: GenomicPos, total_width: f64, margin: f64) -> IdeogramResult<Self> {
        if chromosome_length == 0 || chromosome_length > MAX_CHROMOSOME_LENGTH {
            return Err(IdeogramError::InvalidLength { length: chromosome_length });
        }
        let drawable_width = total_width - 2.0 * margin;
        if !(drawable_width > 0.0) {
            return Err(IdeogramError::InvalidCanvas { width: total_width, margin });
        }
        Ok(Self {
            chromosome_length,
            margin,
            drawable_width,
        })
    }

    pub fn pos_to_x(&self, position: GenomicPos) -> f64 {
        self.margin + (position as f64 / self.chromosome_length as f64) * self.drawable_width
    }

    pub fn chromosome_length(&self) -> GenomicPos {
        self.chromosome_length
    }

    pub fn left(&self) -> f64 {
        self.margin
    }

    pub fn right(&self) -> f64 {
        self.margin + self.drawable_width
    }

    pub fn drawable_width(&self) -> f64 {
        self.drawable_width
    }
}
