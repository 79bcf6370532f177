//! Run-length encoded region grid over the galactic x-z plane.
//!
//! Each row covers one quantized z slice and lists `(length, region)` runs
//! from the low-x edge. A cell past the last run belongs to no region.
//!
//! ```text
//!   pz = 0   [ 2048:0 ]
//!   pz = 1   [ 900:0 | 40:23 | 60:24 | 1048:0 ]
//!   ...
//! ```

use std::{borrow::Cow, collections::HashSet, fs, path::Path, sync::OnceLock};

use serde::Deserialize;
use tracing::{debug, trace};

use crate::{
    Region, RegionId,
    boxel::{X0, Z0},
    data,
    error::{MapError, MapResult},
};

/// Grid cells per light year along x and z.
const CELLS_PER_LY: f64 = 83.0 / 4096.0;

/// A run of identical cells within one grid row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Run {
    /// Number of cells covered, always non-zero.
    pub len: u16,
    /// Region owning every cell of the run.
    pub region: RegionId,
}

impl Run {
    /// Create a new run.
    #[must_use]
    pub const fn new(len: u16, region: RegionId) -> Self {
        Self { len, region }
    }
}

/// Quantized grid coordinates of a point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: u32,
    pub z: u32,
}

/// Region map file schema.
#[derive(Debug, Deserialize)]
struct MapFile {
    width: u32,
    regions: Vec<NamedRegion>,
    rows: Vec<Vec<(u16, RegionId)>>,
}

#[derive(Debug, Deserialize)]
struct NamedRegion {
    id: RegionId,
    name: String,
}

/// A static spatial index classifying galactic positions into regions.
///
/// The y coordinate plays no part: regions are columns through the disc.
#[derive(Debug, Clone)]
pub struct RegionGrid {
    /// Column count the rows are meant to span.
    width: u32,
    /// Names indexed by region id; `None` for id 0 and unnamed gaps.
    names: Vec<Option<Cow<'static, str>>>,
    /// RLE rows indexed by quantized z.
    rows: Vec<Cow<'static, [Run]>>,
}

impl RegionGrid {
    /// Get the region map compiled into this crate.
    ///
    /// Built once on first access from the generated static tables; the row
    /// data itself is borrowed, not copied.
    pub fn embedded() -> &'static RegionGrid {
        static INSTANCE: OnceLock<RegionGrid> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let names = data::REGION_NAMES
                .iter()
                .map(|&(id, name)| (id, Cow::Borrowed(name)));
            let rows = data::REGION_ROWS.iter().map(|&row| Cow::Borrowed(row)).collect();
            let grid = Self::from_parts(data::REGION_MAP_WIDTH, names, rows);

            debug!(
                width = grid.width,
                rows = grid.rows.len(),
                regions = data::REGION_NAMES.len(),
                "loaded embedded region map"
            );
            grid
        })
    }

    /// Build a grid from owned data, validating it.
    ///
    /// Rejects zero-length runs, a name for id 0, duplicate names, runs that
    /// reference an unnamed region, and rows wider than `width`.
    pub fn new(
        width: u32,
        names: impl IntoIterator<Item = (RegionId, String)>,
        rows: Vec<Vec<Run>>,
    ) -> MapResult<Self> {
        let mut seen = HashSet::new();
        let mut named = Vec::new();
        for (id, name) in names {
            if id.is_unmapped() {
                return Err(MapError::ReservedName);
            }
            if !seen.insert(id) {
                return Err(MapError::DuplicateRegion(id));
            }
            named.push((id, Cow::Owned(name)));
        }

        for (z, row) in rows.iter().enumerate() {
            let mut span = 0u64;
            for (i, run) in row.iter().enumerate() {
                if run.len == 0 {
                    return Err(MapError::ZeroRunLength { row: z, run: i });
                }
                if !run.region.is_unmapped() && !seen.contains(&run.region) {
                    return Err(MapError::UnknownRegion {
                        row: z,
                        id: run.region,
                    });
                }
                span += u64::from(run.len);
            }
            if span > u64::from(width) {
                return Err(MapError::RowTooWide {
                    row: z,
                    span,
                    width,
                });
            }
        }

        let rows = rows.into_iter().map(Cow::Owned).collect();
        Ok(Self::from_parts(width, named, rows))
    }

    /// Parse a grid from the JSON map format used by the embedded data.
    pub fn from_json(json: &str) -> MapResult<Self> {
        let file: MapFile = serde_json::from_str(json)?;
        let rows: Vec<Vec<Run>> = file
            .rows
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .map(|(len, region)| Run::new(len, region))
                    .collect()
            })
            .collect();
        let names = file.regions.into_iter().map(|r| (r.id, r.name));

        let grid = Self::new(file.width, names, rows)?;
        debug!(
            width = grid.width,
            rows = grid.rows.len(),
            "loaded region map"
        );
        Ok(grid)
    }

    /// Load a grid from a JSON map file.
    pub fn from_path(path: impl AsRef<Path>) -> MapResult<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    fn from_parts(
        width: u32,
        names: impl IntoIterator<Item = (RegionId, Cow<'static, str>)>,
        rows: Vec<Cow<'static, [Run]>>,
    ) -> Self {
        let mut table: Vec<Option<Cow<'static, str>>> = Vec::new();
        for (id, name) in names {
            let index = usize::from(id.get());
            if table.len() <= index {
                table.resize(index + 1, None);
            }
            table[index] = Some(name);
        }

        Self {
            width,
            names: table,
            rows,
        }
    }

    /// Column count the rows are meant to span.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows (quantized z slices).
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Get the runs of a row.
    #[must_use]
    pub fn row(&self, z: usize) -> Option<&[Run]> {
        self.rows.get(z).map(|row| &**row)
    }

    /// Look up a region by id in the name table.
    #[must_use]
    pub fn region(&self, id: RegionId) -> Option<Region<'_>> {
        let name = self.names.get(usize::from(id.get()))?.as_deref()?;
        Some(Region { id, name })
    }

    /// Iterate the name table in id order.
    pub fn regions(&self) -> impl Iterator<Item = Region<'_>> {
        self.names.iter().enumerate().filter_map(|(id, name)| {
            Some(Region {
                id: RegionId(id as u16),
                name: name.as_deref()?,
            })
        })
    }

    /// Quantize a position to grid coordinates.
    ///
    /// Returns `None` below either grid edge, past the last row, or for
    /// non-finite input. Cells past the right edge are still returned; they
    /// simply fall outside every run.
    #[must_use]
    pub fn cell_of(&self, x: f64, z: f64) -> Option<Cell> {
        let px = ((x - X0) * CELLS_PER_LY).floor();
        let pz = ((z - Z0) * CELLS_PER_LY).floor();

        if !px.is_finite() || !pz.is_finite() {
            return None;
        }
        if px < 0.0 || pz < 0.0 || pz >= self.rows.len() as f64 {
            return None;
        }

        Some(Cell {
            x: px.min(f64::from(u32::MAX)) as u32,
            z: pz as u32,
        })
    }

    /// Region id owning a cell, [`RegionId::UNMAPPED`] if no run covers it.
    #[must_use]
    pub fn region_at(&self, cell: Cell) -> RegionId {
        let Some(row) = self.rows.get(cell.z as usize) else {
            return RegionId::UNMAPPED;
        };

        let mut start = 0u64;
        for run in row.iter() {
            let end = start + u64::from(run.len);
            if u64::from(cell.x) < end {
                return run.region;
            }
            start = end;
        }
        RegionId::UNMAPPED
    }

    /// Find the region containing a galactic position.
    ///
    /// Positions outside the grid and unmapped cells both yield `None`.
    ///
    /// # Panics
    ///
    /// Panics if the grid names a region id that its name table lacks. Grids
    /// from [`RegionGrid::new`] and the embedded map are validated against
    /// this, so it only fires on corrupted static data.
    #[must_use]
    pub fn find_region(&self, x: f64, _y: f64, z: f64) -> Option<Region<'_>> {
        let cell = self.cell_of(x, z)?;
        let id = self.region_at(cell);
        trace!(x, z, px = cell.x, pz = cell.z, region = id.get(), "region lookup");

        if id.is_unmapped() {
            return None;
        }
        let region = self
            .region(id)
            .unwrap_or_else(|| panic!("region {id} missing from name table"));
        Some(region)
    }
}
