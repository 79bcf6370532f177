//! Boxel classification: decode an id64 and place its origin on the map.

use serde::Serialize;
use tracing::trace;

use crate::{
    Origin, Region, RegionGrid,
    boxel::{decode_boxel, masscode},
};

/// A decoded boxel origin and the region containing it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Classification<'a> {
    pub origin: Origin,
    /// `None` when the origin lies off the map or in an unmapped cell.
    pub region: Option<Region<'a>>,
}

impl RegionGrid {
    /// Decode `id` and find the region of its boxel origin.
    #[must_use]
    pub fn classify(&self, id: u64) -> Classification<'_> {
        let origin = decode_boxel(id);
        trace!(id, masscode = masscode(id), ?origin, "decoded boxel");

        let region = self.find_region(origin.x, origin.y, origin.z);
        Classification { origin, region }
    }
}
