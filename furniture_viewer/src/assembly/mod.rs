//! Furniture assemblies: the pedestal and slab table models and the cut list.

mod parts;
mod slab_table;
mod table;

pub use parts::{Part, PartGroup, PART_CATALOG, find_group, render_catalog};
pub use slab_table::{SlabTableSpecs, SLAB_TABLE_HEIGHT, SPANNER_HEIGHT, TOP_SPLIT};
pub use table::{TableSpecs, TablePart, TABLE_THICKNESS, PEDESTAL_HEIGHT, TABLE_COLOR};
