use super::IndexedMesh;

// Golden-ratio construction: vertices are the corners of three mutually
// orthogonal golden rectangles, normalized so every vertex lies on the unit
// sphere (X^2 + Z^2 = 1).
const X: f32 = 0.525_731_1;
const Z: f32 = 0.850_650_8;

const POSITIONS: [[f32; 3]; 12] = [
    [-X, 0.0, Z],
    [X, 0.0, Z],
    [-X, 0.0, -Z],
    [X, 0.0, -Z],
    [0.0, Z, X],
    [0.0, Z, -X],
    [0.0, -Z, X],
    [0.0, -Z, -X],
    [Z, X, 0.0],
    [-Z, X, 0.0],
    [Z, -X, 0.0],
    [-Z, -X, 0.0],
];

const FACES: [[u16; 3]; 20] = [
    [1, 4, 0],
    [4, 9, 0],
    [4, 5, 9],
    [8, 5, 4],
    [1, 8, 4],
    [1, 10, 8],
    [10, 3, 8],
    [8, 3, 5],
    [3, 2, 5],
    [3, 7, 2],
    [3, 10, 7],
    [10, 6, 7],
    [6, 11, 7],
    [6, 0, 11],
    [6, 1, 0],
    [10, 1, 6],
    [11, 0, 9],
    [2, 11, 9],
    [5, 2, 9],
    [11, 2, 7],
];

/// Regular icosahedron inscribed in the unit sphere, centered at the origin.
pub fn icosahedron() -> IndexedMesh {
    IndexedMesh {
        positions: POSITIONS.to_vec(),
        faces: FACES.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn has_twelve_vertices_and_twenty_faces() {
        let mesh = icosahedron();
        assert_eq!(mesh.positions.len(), 12);
        assert_eq!(mesh.faces.len(), 20);
    }

    #[test]
    fn vertices_lie_on_the_unit_sphere() {
        for p in icosahedron().positions {
            let norm_sq = p[0] * p[0] + p[1] * p[1] + p[2] * p[2];
            assert!((norm_sq - 1.0).abs() < 1e-5, "vertex {p:?} is off the sphere");
        }
    }

    #[test]
    fn faces_index_valid_vertices() {
        let mesh = icosahedron();
        for face in &mesh.faces {
            for &idx in face {
                assert!((idx as usize) < mesh.positions.len());
            }
        }
    }

    #[test]
    fn every_edge_is_shared_by_exactly_two_faces() {
        // A closed triangular surface: 30 unique edges, each used twice.
        let mut edge_uses: HashMap<(u16, u16), usize> = HashMap::new();
        for &[a, b, c] in &icosahedron().faces {
            for (from, to) in [(a, b), (b, c), (c, a)] {
                let key = (from.min(to), from.max(to));
                *edge_uses.entry(key).or_default() += 1;
            }
        }

        assert_eq!(edge_uses.len(), 30);
        assert!(edge_uses.values().all(|&n| n == 2));
    }

    #[test]
    fn wireframe_expansion_yields_sixty_segments() {
        let mesh = icosahedron();
        assert_eq!(mesh.to_line_list().len(), 120);
        assert_eq!(mesh.to_triangle_list().len(), 60);
    }
}
