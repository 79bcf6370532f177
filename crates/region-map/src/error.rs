//! Region map loading errors.

use thiserror::Error;

use crate::RegionId;

/// Error raised while loading or validating a region map.
///
/// Queries never fail: only building a [`RegionGrid`](crate::RegionGrid)
/// from external data can.
#[derive(Debug, Error)]
pub enum MapError {
    /// IO error reading a map file.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Map file is not valid JSON for the expected schema.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// A run covers no cells.
    #[error("row {row} run {run} has zero length")]
    ZeroRunLength { row: usize, run: usize },

    /// The name table tries to name the reserved unmapped id.
    #[error("region id 0 is reserved and cannot be named")]
    ReservedName,

    /// The name table names the same id twice.
    #[error("duplicate region id {0:?} in name table")]
    DuplicateRegion(RegionId),

    /// A run references an id missing from the name table.
    #[error("row {row} references unknown region {id:?}")]
    UnknownRegion { row: usize, id: RegionId },

    /// A row's runs extend past the grid width.
    #[error("row {row} spans {span} cells, grid is {width} wide")]
    RowTooWide { row: usize, span: u64, width: u32 },
}

/// Result type for map loading.
pub type MapResult<T> = Result<T, MapError>;
