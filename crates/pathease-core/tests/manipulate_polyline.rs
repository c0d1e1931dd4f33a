use pathease_core::{
    manipulate_polyline, GeometryError, ManipulationParameters, PathBuilder, Point,
};

fn example_params() -> ManipulationParameters {
    ManipulationParameters {
        start_shift: 1.0,
        end_shift: 0.0,
        start_extend: 2.0,
        end_extend: 2.0,
        start_extend_height: 5.0,
        end_extend_height: 5.0,
        start_pushthrough_inset: 1.0,
        end_pushthrough_inset: 1.0,
        start_pushthrough_z: -2.0,
        end_pushthrough_z: -1.0,
    }
}

#[test]
fn test_straight_line_end_to_end() {
    let path = manipulate_polyline(&[(0.0, 0.0), (10.0, 0.0)], &example_params()).unwrap();

    assert_eq!(
        path,
        vec![
            Point::new(-2.0, 0.0, 5.0),
            Point::new(-1.0, 0.0, 0.0),
            Point::new(0.0, 0.0, -2.0),
            Point::new(9.0, 0.0, -1.0),
            Point::new(10.0, 0.0, 0.0),
            Point::new(12.0, 0.0, 5.0),
        ]
    );

    // Everything between the two dips stays within the pushthrough depths.
    for vertex in &path[2..4] {
        assert!(vertex.z >= -2.0 && vertex.z <= -1.0);
    }
}

#[test]
fn test_crossing_shifts_skip_pushthrough() {
    let params = ManipulationParameters {
        start_shift: -6.0,
        end_shift: -6.0,
        ..example_params()
    };
    let manipulation = PathBuilder::new(params)
        .build(&[(0.0, 0.0), (10.0, 0.0)])
        .unwrap();

    assert!(manipulation.pushthrough_skipped);
    assert_eq!(
        manipulation.path,
        vec![
            Point::new(-2.0, 0.0, 5.0),
            Point::new(5.0, 0.0, 0.0),
            Point::new(12.0, 0.0, 5.0),
        ]
    );
}

#[test]
fn test_overlapping_insets_drop_the_body() {
    let params = ManipulationParameters {
        start_shift: 0.0,
        start_pushthrough_inset: 6.0,
        end_pushthrough_inset: 6.0,
        ..example_params()
    };
    let manipulation = PathBuilder::new(params)
        .build(&[(0.0, 0.0), (10.0, 0.0)])
        .unwrap();

    assert!(!manipulation.pushthrough_skipped);
    assert_eq!(
        manipulation.path,
        vec![
            Point::new(-2.0, 0.0, 5.0),
            Point::new(0.0, 0.0, 0.0),
            Point::new(5.0, 0.0, -2.0),
            Point::new(5.0, 0.0, -1.0),
            Point::new(10.0, 0.0, 0.0),
            Point::new(12.0, 0.0, 5.0),
        ]
    );
}

#[test]
fn test_duplicate_input_vertices_are_culled() {
    let params = example_params();
    let clean = manipulate_polyline(&[(0.0, 0.0), (5.0, 0.0), (10.0, 0.0)], &params).unwrap();
    let noisy = manipulate_polyline(
        &[(0.0, 0.0), (0.0, 0.0), (5.0, 0.0), (5.0, 0.0), (10.0, 0.0)],
        &params,
    )
    .unwrap();
    assert_eq!(clean, noisy);
}

#[test]
fn test_cull_tolerance_absorbs_near_duplicates() {
    let poly = [(0.0, 0.0), (1e-9, 0.0), (10.0, 0.0)];
    let params = ManipulationParameters {
        start_shift: 0.0,
        ..example_params()
    };

    let exact = PathBuilder::new(params).build(&poly).unwrap();
    let tolerant = PathBuilder::new(params)
        .with_cull_tolerance(1e-6)
        .build(&poly)
        .unwrap();

    assert_eq!(exact.path.len(), tolerant.path.len() + 1);
    assert_eq!(tolerant.path[0], Point::new(-2.0, 0.0, 5.0));
}

#[test]
fn test_zero_insets_plunge_vertically() {
    let params = ManipulationParameters {
        start_shift: 0.0,
        start_pushthrough_inset: 0.0,
        end_pushthrough_inset: 0.0,
        ..example_params()
    };
    let path = manipulate_polyline(&[(0.0, 0.0), (10.0, 0.0)], &params).unwrap();
    assert_eq!(
        path,
        vec![
            Point::new(-2.0, 0.0, 5.0),
            Point::new(0.0, 0.0, 0.0),
            Point::new(0.0, 0.0, -2.0),
            Point::new(10.0, 0.0, -1.0),
            Point::new(10.0, 0.0, 0.0),
            Point::new(12.0, 0.0, 5.0),
        ]
    );
}

#[test]
fn test_single_vertex_input_is_rejected() {
    let result = manipulate_polyline(&[(1.0, 1.0), (1.0, 1.0)], &example_params());
    assert!(matches!(result, Err(GeometryError::DegenerateInput { .. })));
}

#[test]
fn test_negative_inset_is_rejected() {
    let params = ManipulationParameters {
        end_pushthrough_inset: -1.0,
        ..example_params()
    };
    let result = manipulate_polyline(&[(0.0, 0.0), (10.0, 0.0)], &params);
    assert!(matches!(result, Err(GeometryError::InvalidDistance { .. })));
}
