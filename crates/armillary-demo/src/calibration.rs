use armillary_engine::geometry;
use armillary_engine::paint::Color;
use armillary_engine::scene::Scene;

/// Builds the fixed calibration scene.
///
/// All coordinates are authored directly in clip space. Each axis indicator
/// is three segments: two arrowhead ticks at the positive end plus the axis
/// line itself.
pub fn calibration_scene() -> Scene {
    let mut scene = Scene::new();

    // Axis indicators for x, y, and z.
    scene.push_lines(
        Color::rgb(0.5, 0.0, 0.0),
        &[
            [1.0, 0.0, 0.0],
            [0.9, 0.1, 0.0],
            [1.0, 0.0, 0.0],
            [0.9, -0.1, 0.0],
            [1.0, 0.0, 0.0],
            [-1.0, 0.0, 0.0],
        ],
    );

    scene.push_lines(
        Color::rgb(0.0, 0.5, 0.0),
        &[
            [0.0, 1.0, 0.0],
            [-0.1, 0.9, 0.0],
            [0.0, 1.0, 0.0],
            [0.1, 0.9, 0.0],
            [0.0, 1.0, 0.0],
            [0.0, -1.0, 0.0],
        ],
    );

    scene.push_lines(
        Color::rgb(0.0, 0.0, 0.5),
        &[
            [0.0, 0.0, 1.0],
            [0.0, 0.1, 0.9],
            [0.0, 0.0, 1.0],
            [0.0, -0.1, 0.9],
            [0.0, 0.0, 1.0],
            [0.0, 0.0, -1.0],
        ],
    );

    // Three solid triangles at different depths.
    scene.push_triangles(
        Color::rgb(1.0, 0.0, 1.0),
        &[[0.0, 0.0, 0.0], [0.5, 0.0, -0.75], [0.0, 0.5, 0.0]],
    );

    scene.push_triangles(
        Color::rgb(1.0, 1.0, 0.0),
        &[[0.25, 0.0, -0.5], [0.75, 0.0, -0.5], [0.25, 0.5, -0.5]],
    );

    scene.push_triangles(
        Color::rgb(0.0, 1.0, 1.0),
        &[[-0.25, 0.0, 0.5], [0.5, 0.0, 0.5], [-0.25, 0.5, 0.5]],
    );

    // A quadrilateral outline.
    scene.push_line_loop(
        Color::rgb(0.5, 0.5, 0.5),
        &[
            [-1.0, -1.0, 0.75],
            [-1.0, -0.1, -1.0],
            [-0.1, -0.1, -1.0],
            [-0.1, -1.0, 0.75],
        ],
    );

    // Shape library demonstration.
    scene.push_wireframe(Color::rgb(1.0, 0.5, 0.0), &geometry::icosahedron());

    scene
}

#[cfg(test)]
mod tests {
    use armillary_engine::scene::DrawMode;

    use super::*;

    #[test]
    fn scene_has_eight_objects() {
        assert_eq!(calibration_scene().len(), 8);
    }

    #[test]
    fn axis_indicators_are_dim_primary_lines() {
        let scene = calibration_scene();

        let expected = [
            Color::rgb(0.5, 0.0, 0.0),
            Color::rgb(0.0, 0.5, 0.0),
            Color::rgb(0.0, 0.0, 0.5),
        ];

        for (object, color) in scene.objects()[..3].iter().zip(expected) {
            assert_eq!(object.mode, DrawMode::Lines);
            assert_eq!(object.color, color);
            assert_eq!(object.vertex_count(), 6);
        }
    }

    #[test]
    fn x_axis_geometry_is_preserved_verbatim() {
        let scene = calibration_scene();
        let x_axis = &scene.objects()[0];

        assert_eq!(x_axis.positions[0], [1.0, 0.0, 0.0]);
        assert_eq!(x_axis.positions[5], [-1.0, 0.0, 0.0]);
    }

    #[test]
    fn triangles_carry_their_depths() {
        let scene = calibration_scene();

        let magenta = &scene.objects()[3];
        assert_eq!(magenta.mode, DrawMode::Triangles);
        assert_eq!(magenta.color, Color::rgb(1.0, 0.0, 1.0));
        assert_eq!(
            magenta.positions,
            vec![[0.0, 0.0, 0.0], [0.5, 0.0, -0.75], [0.0, 0.5, 0.0]]
        );

        let yellow = &scene.objects()[4];
        assert!(yellow.positions.iter().all(|p| p[2] == -0.5));
    }

    #[test]
    fn quadrilateral_is_a_four_vertex_loop() {
        let scene = calibration_scene();
        let quad = &scene.objects()[6];

        assert_eq!(quad.mode, DrawMode::LineLoop);
        assert_eq!(quad.color, Color::rgb(0.5, 0.5, 0.5));
        assert_eq!(quad.vertex_count(), 4);
    }

    #[test]
    fn wireframe_object_is_the_expanded_icosahedron() {
        let scene = calibration_scene();
        let wireframe = &scene.objects()[7];

        assert_eq!(wireframe.mode, DrawMode::Lines);
        assert_eq!(wireframe.color, Color::rgb(1.0, 0.5, 0.0));
        // 20 faces, three edges each, two endpoints per edge.
        assert_eq!(wireframe.vertex_count(), 120);
    }
}
