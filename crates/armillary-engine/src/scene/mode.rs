/// Primitive assembly mode for a scene object.
///
/// Mirrors the classic GL vocabulary. The render layer decides how each mode
/// maps onto the GPU's topology set.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum DrawMode {
    /// Independent segments; every pair of vertices is one line.
    Lines,
    /// A closed outline; each vertex connects to the next, and the last
    /// connects back to the first.
    LineLoop,
    /// Independent triangles; every triple of vertices is one triangle.
    Triangles,
}

impl DrawMode {
    /// Number of vertices drawn from an object with `count` vertices.
    ///
    /// Incomplete trailing primitives are ignored, matching `drawArrays`
    /// semantics: five vertices in `Lines` mode draw two segments, a single
    /// vertex in `LineLoop` mode draws nothing.
    #[inline]
    pub fn complete_count(self, count: usize) -> usize {
        match self {
            DrawMode::Lines => count - count % 2,
            DrawMode::Triangles => count - count % 3,
            DrawMode::LineLoop => {
                if count >= 2 {
                    count
                } else {
                    0
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_drop_odd_tail() {
        assert_eq!(DrawMode::Lines.complete_count(5), 4);
        assert_eq!(DrawMode::Lines.complete_count(6), 6);
    }

    #[test]
    fn triangles_drop_partial_tail() {
        assert_eq!(DrawMode::Triangles.complete_count(7), 6);
        assert_eq!(DrawMode::Triangles.complete_count(3), 3);
    }

    #[test]
    fn loop_needs_at_least_two_vertices() {
        assert_eq!(DrawMode::LineLoop.complete_count(0), 0);
        assert_eq!(DrawMode::LineLoop.complete_count(1), 0);
        assert_eq!(DrawMode::LineLoop.complete_count(2), 2);
        assert_eq!(DrawMode::LineLoop.complete_count(4), 4);
    }
}
