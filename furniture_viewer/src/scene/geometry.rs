/// Geometry — vertex positions of a loaded or generated model.
///
/// Only positions are kept; the viewer needs them for bounds, and the
/// external renderer owns everything else (normals, indices, GPU buffers).

use glam::Vec3;
use crate::error::{Error, Result};
use super::bounds::AABB;

/// Vertex positions in scene space. Never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Geometry {
    positions: Vec<[f32; 3]>,
}

impl Geometry {
    /// Build from a flat `x, y, z, x, y, z, ...` buffer.
    ///
    /// # Errors
    ///
    /// `InvalidGeometry` if the buffer is empty, its length is not a
    /// multiple of 3, or it contains NaN/infinite values.
    pub fn from_positions(flat: &[f32]) -> Result<Self> {
        let triples: &[[f32; 3]] = bytemuck::try_cast_slice(flat).map_err(|_| {
            Error::InvalidGeometry(format!(
                "position buffer of {} floats is not a multiple of 3",
                flat.len()
            ))
        })?;
        Self::from_vertices(triples.to_vec())
    }

    /// Build from vertex triples.
    pub fn from_vertices(positions: Vec<[f32; 3]>) -> Result<Self> {
        if positions.is_empty() {
            return Err(Error::InvalidGeometry("geometry has no vertices".to_string()));
        }
        if let Some(index) = positions.iter().position(|p| !Vec3::from_array(*p).is_finite()) {
            return Err(Error::InvalidGeometry(format!("vertex {} is not finite", index)));
        }
        Ok(Self { positions })
    }

    /// The 8 corners of an axis-aligned box.
    ///
    /// # Errors
    ///
    /// `InvalidGeometry` if a corner has a NaN/infinite component.
    pub fn cuboid(min: Vec3, max: Vec3) -> Result<Self> {
        // Checked before ordering: component-wise min/max drops NaN silently
        if !min.is_finite() || !max.is_finite() {
            return Err(Error::InvalidGeometry(format!(
                "cuboid corners {} and {} are not finite",
                min, max
            )));
        }
        let aabb = AABB::new(min, max);
        let (lo, hi) = (aabb.min, aabb.max);
        let positions = (0..8)
            .map(|i| {
                [
                    if i & 1 == 0 { lo.x } else { hi.x },
                    if i & 2 == 0 { lo.y } else { hi.y },
                    if i & 4 == 0 { lo.z } else { hi.z },
                ]
            })
            .collect();
        Self::from_vertices(positions)
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn positions(&self) -> &[[f32; 3]] {
        &self.positions
    }

    /// Flat view for upload by an external renderer.
    pub fn as_flat(&self) -> &[f32] {
        bytemuck::cast_slice(&self.positions)
    }

    /// Tight box around all vertices.
    pub fn compute_bounding_box(&self) -> AABB {
        let mut min = Vec3::from_array(self.positions[0]);
        let mut max = min;
        for p in &self.positions[1..] {
            let v = Vec3::from_array(*p);
            min = min.min(v);
            max = max.max(v);
        }
        AABB { min, max }
    }
}

#[cfg(test)]
#[path = "geometry_tests.rs"]
mod tests;
