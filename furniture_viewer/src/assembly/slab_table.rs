/// Slab table model.
///
/// A top (one slab, or two halves split along the length) on two legs.
/// Each leg is a board standing on a wider leg base, and a spanner joins
/// the legs along the center line. Like the pedestal table the model is
/// built upside down: the top occupies `z ∈ [0, thickness]` and everything
/// else stands on it.

use glam::Vec3;
use crate::error::Result;
use crate::scene::{AABB, Scene, SceneNodeKey};
use super::table::{add_parts, TablePart, TABLE_THICKNESS};

/// Overall height of the slab table
pub const SLAB_TABLE_HEIGHT: f32 = 30.0;
/// Gap between the two halves of a split top
pub const TOP_SPLIT: f32 = 0.5;
/// Height of the spanner board
pub const SPANNER_HEIGHT: f32 = 6.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlabTableSpecs {
    pub width: f32,
    pub length: f32,
    /// Distance from a long edge to the near face of a leg
    pub leg_width_inset: f32,
    /// Distance from a short edge to the center of a leg
    pub leg_length_inset: f32,
    /// How far a leg base overhangs its leg across the table
    pub leg_base_width_over: f32,
    /// How far a leg base overhangs its leg along the table
    pub leg_base_length_over: f32,
    /// Build the top as two halves separated by `TOP_SPLIT`
    pub split_top: bool,
    /// Board thickness shared by every part
    pub thickness: f32,
    pub height: f32,
}

impl Default for SlabTableSpecs {
    fn default() -> Self {
        Self {
            width: 42.0,
            length: 95.0,
            leg_width_inset: 8.0,
            leg_length_inset: 24.0,
            leg_base_width_over: 3.0,
            leg_base_length_over: 1.5,
            split_top: true,
            thickness: TABLE_THICKNESS,
            height: SLAB_TABLE_HEIGHT,
        }
    }
}

fn part(name: impl Into<String>, origin: Vec3, size: Vec3) -> TablePart {
    TablePart { name: name.into(), bounds: AABB::new(origin, origin + size) }
}

impl SlabTableSpecs {
    /// Width of a leg board, across the table.
    pub fn leg_width(&self) -> f32 {
        self.width - self.leg_width_inset * 2.0
    }

    /// Distance from a short edge to the near face of a leg base.
    pub fn leg_base_inset(&self) -> f32 {
        self.leg_length_inset - self.thickness / 2.0 - self.leg_base_length_over / 2.0
    }

    /// Top (one part, or "top 0"/"top 1" when split), then "leg base 0",
    /// "leg 0", "leg base 1", "leg 1", and the "spanner".
    pub fn parts(&self) -> Vec<TablePart> {
        let t = self.thickness;
        let mut parts = Vec::with_capacity(8);

        if self.split_top {
            let half = Vec3::new(self.length, self.width / 2.0 - TOP_SPLIT / 2.0, t);
            parts.push(part("top 0", Vec3::ZERO, half));
            parts.push(part("top 1", Vec3::new(0.0, self.width / 2.0 + TOP_SPLIT / 2.0, 0.0), half));
        } else {
            parts.push(part("top", Vec3::ZERO, Vec3::new(self.length, self.width, t)));
        }

        let base_size = Vec3::new(
            t + self.leg_base_length_over * 2.0,
            self.leg_width() + self.leg_base_width_over * 2.0,
            t,
        );
        let leg_size = Vec3::new(t, self.leg_width(), self.height - t * 3.0);
        let leg_offset = Vec3::new(self.leg_base_length_over, self.leg_base_width_over, t);

        let base_y = self.leg_width_inset - self.leg_base_width_over;
        let base_xs = [
            self.leg_base_inset(),
            self.length - self.leg_base_inset() - t - self.leg_base_length_over * 2.0,
        ];
        for (i, x) in base_xs.into_iter().enumerate() {
            let base_origin = Vec3::new(x, base_y, t);
            parts.push(part(format!("leg base {}", i), base_origin, base_size));
            parts.push(part(format!("leg {}", i), base_origin + leg_offset, leg_size));
        }

        // Runs between the leg centers, standing on the leg bases
        parts.push(part(
            "spanner",
            Vec3::new(self.leg_length_inset + t / 2.0, self.width / 2.0 - t / 2.0, t * 2.0),
            Vec3::new(self.length - self.leg_length_inset * 2.0 - t, t, SPANNER_HEIGHT),
        ));
        parts
    }

    /// Add every part to `scene` as a cuboid mesh.
    ///
    /// # Errors
    ///
    /// `InvalidGeometry` if a dimension is not finite; nothing is added then.
    pub fn populate_scene(&self, scene: &mut Scene) -> Result<Vec<SceneNodeKey>> {
        add_parts(scene, self.parts())
    }
}

#[cfg(test)]
#[path = "slab_table_tests.rs"]
mod tests;
