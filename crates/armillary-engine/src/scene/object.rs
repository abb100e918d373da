use anyhow::{Result, bail};

use crate::paint::Color;

use super::DrawMode;

/// A single renderable object: one color, one vertex list, one mode.
///
/// Positions are clip-space coordinate triples. Storing them as `[f32; 3]`
/// makes "coordinate count divisible by 3" hold by construction; flat input
/// goes through [`from_flat`](Self::from_flat), which checks it.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneObject {
    pub color: Color,
    pub positions: Vec<[f32; 3]>,
    pub mode: DrawMode,
}

impl SceneObject {
    #[inline]
    pub fn new(color: Color, positions: Vec<[f32; 3]>, mode: DrawMode) -> Self {
        Self { color, positions, mode }
    }

    /// Builds an object from a flat coordinate list (`x0 y0 z0 x1 y1 z1 ...`).
    ///
    /// Errors if the length is not a multiple of 3.
    pub fn from_flat(color: Color, flat: &[f32], mode: DrawMode) -> Result<Self> {
        if flat.len() % 3 != 0 {
            bail!(
                "flat coordinate list has {} values, expected a multiple of 3",
                flat.len()
            );
        }

        let positions = flat
            .chunks_exact(3)
            .map(|c| [c[0], c[1], c[2]])
            .collect();

        Ok(Self { color, positions, mode })
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Vertices actually drawn, after dropping any incomplete tail primitive.
    #[inline]
    pub fn drawn_vertex_count(&self) -> usize {
        self.mode.complete_count(self.positions.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_flat_groups_triples_in_order() {
        let obj = SceneObject::from_flat(
            Color::rgb(1.0, 0.0, 0.0),
            &[0.0, 1.0, 2.0, 3.0, 4.0, 5.0],
            DrawMode::Lines,
        )
        .unwrap();

        assert_eq!(obj.positions, vec![[0.0, 1.0, 2.0], [3.0, 4.0, 5.0]]);
    }

    #[test]
    fn from_flat_rejects_non_multiple_of_three() {
        let err = SceneObject::from_flat(
            Color::rgb(1.0, 0.0, 0.0),
            &[0.0, 1.0, 2.0, 3.0],
            DrawMode::Lines,
        );
        assert!(err.is_err());
    }

    #[test]
    fn from_flat_accepts_empty_input() {
        let obj =
            SceneObject::from_flat(Color::rgb(0.0, 0.0, 0.0), &[], DrawMode::Triangles).unwrap();
        assert_eq!(obj.vertex_count(), 0);
    }

    #[test]
    fn drawn_vertex_count_truncates_to_mode_arity() {
        let obj = SceneObject::new(
            Color::rgb(0.0, 1.0, 0.0),
            vec![[0.0; 3]; 7],
            DrawMode::Triangles,
        );
        assert_eq!(obj.drawn_vertex_count(), 6);
    }
}
