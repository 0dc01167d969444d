use thiserror::Error;

use crate::coords::MAX_CHROMOSOME_LENGTH;
use crate::types::GenomicPos;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum IdeogramError {
    #[error("Invalid chromosome length {length}: must be between 1 and {}", MAX_CHROMOSOME_LENGTH)]
    InvalidLength { length: GenomicPos },

    #[error("Invalid canvas: width {width} leaves no drawable space with margin {margin}")]
    InvalidCanvas { width: f64, margin: f64 },
}

pub type IdeogramResult<T> = Result<T, IdeogramError>;
