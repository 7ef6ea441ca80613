/// Pedestal table model.
///
/// A slab top resting on four pedestals, two near each short end. The two
/// pedestals of a pair sit on either side of the long center line, split
/// by `pedestal_gap`. Z is up; the top occupies `z ∈ [0, top_thickness]`
/// and the pedestals stand on it (the model is upside down).

use glam::Vec3;
use crate::error::Result;
use crate::scene::{AABB, Geometry, Material, Scene, SceneNodeKey};

/// Top thickness
pub const TABLE_THICKNESS: f32 = 1.5;
/// Pedestal height
pub const PEDESTAL_HEIGHT: f32 = 28.5;
/// Material color used for all table parts
pub const TABLE_COLOR: u32 = 0xa5a5a5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableSpecs {
    pub width: f32,
    pub length: f32,
    /// Distance from a short edge to the near face of its pedestals
    pub pedestal_inset: f32,
    pub pedestal_width: f32,
    pub pedestal_thickness: f32,
    /// Gap between the two pedestals of a pair
    pub pedestal_gap: f32,
    pub top_thickness: f32,
    pub pedestal_height: f32,
}

impl Default for TableSpecs {
    fn default() -> Self {
        Self {
            width: 40.0,
            length: 96.0,
            pedestal_inset: 16.0,
            pedestal_width: 12.0,
            pedestal_thickness: 3.0,
            pedestal_gap: 0.5,
            top_thickness: TABLE_THICKNESS,
            pedestal_height: PEDESTAL_HEIGHT,
        }
    }
}

/// One named box of the assembly.
#[derive(Debug, Clone, PartialEq)]
pub struct TablePart {
    pub name: String,
    pub bounds: AABB,
}

impl TableSpecs {
    /// The top followed by pedestals 0..4.
    ///
    /// Pedestals 0 and 1 are at the near end, 2 and 3 at the far end;
    /// even indices are on the +Y side of the gap.
    pub fn parts(&self) -> Vec<TablePart> {
        let mut parts = Vec::with_capacity(5);
        parts.push(TablePart {
            name: "top".to_string(),
            bounds: AABB::new(Vec3::ZERO, Vec3::new(self.length, self.width, self.top_thickness)),
        });

        let pedestal_size = Vec3::new(self.pedestal_thickness, self.pedestal_width, self.pedestal_height);
        for i in 0..4 {
            let x = if i < 2 {
                self.pedestal_inset
            } else {
                self.length - self.pedestal_inset - self.pedestal_thickness
            };
            let y = if i % 2 == 0 {
                (self.width + self.pedestal_gap) / 2.0
            } else {
                (self.width - self.pedestal_gap) / 2.0 - self.pedestal_width
            };
            let origin = Vec3::new(x, y, self.top_thickness);
            parts.push(TablePart {
                name: format!("pedestal {}", i),
                bounds: AABB::new(origin, origin + pedestal_size),
            });
        }
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

/// Build every part's geometry first, then add them all.
pub(crate) fn add_parts(scene: &mut Scene, parts: Vec<TablePart>) -> Result<Vec<SceneNodeKey>> {
    let meshes = parts
        .into_iter()
        .map(|part| Geometry::cuboid(part.bounds.min, part.bounds.max).map(|g| (part.name, g)))
        .collect::<Result<Vec<_>>>()?;

    Ok(meshes
        .into_iter()
        .map(|(name, geometry)| scene.add_mesh(&name, geometry, Material::from_hex(TABLE_COLOR)))
        .collect())
}

#[cfg(test)]
#[path = "table_tests.rs"]
mod tests;
