// Host-side tests for the camera transform builder.

use amphora_web::core::*;
use glam::{Mat4, Vec3, Vec4};

#[test]
fn build_matrix_is_deterministic() {
    let state = TransformState {
        translation: Vec3::new(12.5, -4.0, 3.0),
        rotation: Vec3::new(0.3, -1.2, 2.7),
        scale: Vec3::new(80.0, 80.0, 80.0),
        depth: 750.0,
    };
    let a = build_matrix(&state, 1280.0, 720.0);
    let b = build_matrix(&state, 1280.0, 720.0);
    assert_eq!(a.to_cols_array().map(f32::to_bits), b.to_cols_array().map(f32::to_bits));
}

#[test]
fn identity_rotation_and_scale_leave_projection_times_translation() {
    let state = TransformState {
        translation: Vec3::new(5.0, 0.0, 0.0),
        rotation: Vec3::ZERO,
        scale: Vec3::ONE,
        depth: 1000.0,
    };
    let m = build_matrix(&state, 100.0, 100.0);
    let expected = projection(100.0, 100.0, 1000.0) * translation(Vec3::new(5.0, 0.0, 0.0));
    assert_eq!(m, expected);
}

#[test]
fn projection_columns_are_laid_out_column_major() {
    let p = projection(100.0, 50.0, 1000.0).to_cols_array();
    assert_eq!(p[0], 2.0 / 100.0);
    assert_eq!(p[5], -2.0 / 50.0);
    assert_eq!(p[10], 2.0 / 1000.0);
    assert_eq!(&p[12..16], &[-1.0, 1.0, 0.0, 1.0]);
}

#[test]
fn translation_is_applied_before_rotation_in_screen_space() {
    // A quarter turn about Z applied after translation keeps the translated
    // origin where the translation put it.
    let state = TransformState {
        translation: Vec3::new(64.0, 32.0, 0.0),
        rotation: Vec3::new(0.0, 0.0, std::f32::consts::FRAC_PI_2),
        scale: Vec3::ONE,
        depth: 256.0,
    };
    let m = build_matrix(&state, 128.0, 64.0);
    let origin = m * Vec4::new(0.0, 0.0, 0.0, 1.0);
    assert_eq!(origin, Vec4::new(0.0, 0.0, 0.0, 1.0));

    // +x in model space becomes +y (down the screen) after the turn.
    let px = m * Vec4::new(1.0, 0.0, 0.0, 1.0);
    assert!(px.x.abs() < 1e-6);
    assert!(px.y < 0.0);
}

#[test]
fn scale_is_applied_last() {
    let state = TransformState {
        translation: Vec3::ZERO,
        rotation: Vec3::new(0.4, 0.0, 0.0),
        scale: Vec3::new(2.0, 3.0, 4.0),
        depth: 100.0,
    };
    let m = build_matrix(&state, 100.0, 100.0);
    let expected = projection(100.0, 100.0, 100.0)
        * Mat4::from_rotation_x(0.4)
        * scaling(Vec3::new(2.0, 3.0, 4.0));
    assert!(m.abs_diff_eq(expected, 1e-6), "{m:?} != {expected:?}");
}

#[test]
fn zero_viewport_does_not_produce_infinities() {
    let m = build_matrix(&TransformState::default(), 0.0, 0.0);
    assert!(m.is_finite());
}

#[test]
fn non_positive_depth_is_floored() {
    let floored = build_matrix(
        &TransformState {
            depth: MIN_DEPTH,
            ..TransformState::default()
        },
        640.0,
        480.0,
    );
    for depth in [0.0, -5.0, f32::NAN] {
        let state = TransformState {
            depth,
            ..TransformState::default()
        };
        let m = build_matrix(&state, 640.0, 480.0);
        assert!(m.is_finite(), "depth {depth}");
        assert_eq!(m, floored);
        let z = (m * Vec4::new(0.0, 0.0, 0.01, 1.0)).z;
        assert!(!z.is_nan());
    }
}
