/// Indexed triangle mesh.
///
/// `faces` index into `positions`; every face is a vertex triple. The mesh is
/// CPU-side only; renderable vertex lists come from the expansion methods.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexedMesh {
    pub positions: Vec<[f32; 3]>,
    pub faces: Vec<[u16; 3]>,
}

impl IndexedMesh {
    /// Expands faces into an independent-triangle vertex list.
    pub fn to_triangle_list(&self) -> Vec<[f32; 3]> {
        let mut out = Vec::with_capacity(self.faces.len() * 3);
        for face in &self.faces {
            for &idx in face {
                out.push(self.positions[idx as usize]);
            }
        }
        out
    }

    /// Expands faces into a line-segment vertex list, one segment per face
    /// edge.
    ///
    /// Edges shared by two faces are emitted twice, once per face. That is
    /// the intended wireframe behavior: expansion stays a pure per-face
    /// operation and needs no adjacency bookkeeping.
    pub fn to_line_list(&self) -> Vec<[f32; 3]> {
        let mut out = Vec::with_capacity(self.faces.len() * 6);
        for &[a, b, c] in &self.faces {
            for (from, to) in [(a, b), (b, c), (c, a)] {
                out.push(self.positions[from as usize]);
                out.push(self.positions[to as usize]);
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_triangle() -> IndexedMesh {
        IndexedMesh {
            positions: vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
            faces: vec![[0, 1, 2]],
        }
    }

    #[test]
    fn triangle_list_follows_face_order() {
        let mesh = unit_triangle();
        assert_eq!(
            mesh.to_triangle_list(),
            vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]]
        );
    }

    #[test]
    fn line_list_walks_each_edge_of_each_face() {
        let mesh = unit_triangle();
        let lines = mesh.to_line_list();

        // Edges (0,1), (1,2), (2,0) as endpoint pairs.
        assert_eq!(
            lines,
            vec![
                [0.0, 0.0, 0.0],
                [1.0, 0.0, 0.0],
                [1.0, 0.0, 0.0],
                [0.0, 1.0, 0.0],
                [0.0, 1.0, 0.0],
                [0.0, 0.0, 0.0],
            ]
        );
    }

    #[test]
    fn shared_edges_are_emitted_once_per_face() {
        // Two triangles sharing edge (1, 2).
        let mesh = IndexedMesh {
            positions: vec![
                [0.0, 0.0, 0.0],
                [1.0, 0.0, 0.0],
                [0.0, 1.0, 0.0],
                [1.0, 1.0, 0.0],
            ],
            faces: vec![[0, 1, 2], [1, 3, 2]],
        };

        let lines = mesh.to_line_list();
        assert_eq!(lines.len(), 12);

        let shared = lines
            .chunks_exact(2)
            .filter(|seg| {
                let ends = [seg[0], seg[1]];
                ends.contains(&[1.0, 0.0, 0.0]) && ends.contains(&[0.0, 1.0, 0.0])
            })
            .count();
        assert_eq!(shared, 2);
    }

    #[test]
    fn empty_mesh_expands_to_nothing() {
        let mesh = IndexedMesh { positions: vec![], faces: vec![] };
        assert!(mesh.to_triangle_list().is_empty());
        assert!(mesh.to_line_list().is_empty());
    }
}
