use crate::geometry::IndexedMesh;
use crate::paint::Color;

use super::{DrawMode, SceneObject};

/// Ordered list of objects to draw.
///
/// Objects render in insertion order; with the depth test enabled, draw order
/// only matters for coplanar geometry. The list is built once for a static
/// scene and handed to the renderer for upload.
#[derive(Debug, Default, Clone)]
pub struct Scene {
    objects: Vec<SceneObject>,
}

impl Scene {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    #[inline]
    pub fn clear(&mut self) {
        self.objects.clear();
    }

    #[inline]
    pub fn push(&mut self, object: SceneObject) {
        self.objects.push(object);
    }

    /// Records independent line segments (vertex pairs).
    #[inline]
    pub fn push_lines(&mut self, color: Color, positions: &[[f32; 3]]) {
        self.push(SceneObject::new(color, positions.to_vec(), DrawMode::Lines));
    }

    /// Records a closed outline through the given vertices.
    #[inline]
    pub fn push_line_loop(&mut self, color: Color, positions: &[[f32; 3]]) {
        self.push(SceneObject::new(color, positions.to_vec(), DrawMode::LineLoop));
    }

    /// Records independent solid triangles (vertex triples).
    #[inline]
    pub fn push_triangles(&mut self, color: Color, positions: &[[f32; 3]]) {
        self.push(SceneObject::new(color, positions.to_vec(), DrawMode::Triangles));
    }

    /// Records an indexed mesh as a wireframe (one segment per face edge).
    #[inline]
    pub fn push_wireframe(&mut self, color: Color, mesh: &IndexedMesh) {
        self.push(SceneObject::new(color, mesh.to_line_list(), DrawMode::Lines));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_preserves_insertion_order() {
        let mut scene = Scene::new();
        scene.push_lines(Color::rgb(1.0, 0.0, 0.0), &[[0.0; 3], [1.0, 0.0, 0.0]]);
        scene.push_triangles(Color::rgb(0.0, 1.0, 0.0), &[[0.0; 3]; 3]);

        assert_eq!(scene.len(), 2);
        assert_eq!(scene.objects()[0].mode, DrawMode::Lines);
        assert_eq!(scene.objects()[1].mode, DrawMode::Triangles);
    }

    #[test]
    fn push_helpers_copy_positions_verbatim() {
        let mut scene = Scene::new();
        let quad = [
            [-1.0, -1.0, 0.75],
            [-1.0, -0.1, -1.0],
            [-0.1, -0.1, -1.0],
            [-0.1, -1.0, 0.75],
        ];
        scene.push_line_loop(Color::rgb(0.5, 0.5, 0.5), &quad);

        let obj = &scene.objects()[0];
        assert_eq!(obj.mode, DrawMode::LineLoop);
        assert_eq!(obj.positions, quad.to_vec());
    }

    #[test]
    fn push_wireframe_expands_face_edges() {
        let mesh = IndexedMesh {
            positions: vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
            faces: vec![[0, 1, 2]],
        };

        let mut scene = Scene::new();
        scene.push_wireframe(Color::rgb(1.0, 0.5, 0.0), &mesh);

        let obj = &scene.objects()[0];
        assert_eq!(obj.mode, DrawMode::Lines);
        // One triangle contributes three segments, six endpoints.
        assert_eq!(obj.vertex_count(), 6);
    }

    #[test]
    fn clear_empties_the_list() {
        let mut scene = Scene::new();
        scene.push_lines(Color::rgb(0.0, 0.0, 0.5), &[[0.0; 3], [0.0, 0.0, 1.0]]);
        scene.clear();
        assert!(scene.is_empty());
    }
}
