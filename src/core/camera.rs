use crate::core::constants::MIN_DEPTH;
use crate::core::state::TransformState;
use glam::{Mat4, Vec3, Vec4};

/// Pixel-space to clip-space projection with Y flipped so row 0 is the top
/// of the screen. `depth` spans the visible Z range.
#[inline]
pub fn projection(width: f32, height: f32, depth: f32) -> Mat4 {
    Mat4::from_cols(
        Vec4::new(2.0 / width, 0.0, 0.0, 0.0),
        Vec4::new(0.0, -2.0 / height, 0.0, 0.0),
        Vec4::new(0.0, 0.0, 2.0 / depth, 0.0),
        Vec4::new(-1.0, 1.0, 0.0, 1.0),
    )
}

#[inline]
pub fn translation(t: Vec3) -> Mat4 {
    Mat4::from_translation(t)
}

#[inline]
pub fn scaling(s: Vec3) -> Mat4 {
    Mat4::from_scale(s)
}

/// Compose the per-frame camera matrix.
///
/// Order is fixed: projection, translation, rotation X, Y, Z, then scale,
/// each right-multiplied. Zero-sized viewports are treated as one pixel and
/// depth is floored at `MIN_DEPTH`.
pub fn build_matrix(state: &TransformState, viewport_width: f32, viewport_height: f32) -> Mat4 {
    let w = viewport_width.max(1.0);
    let h = viewport_height.max(1.0);
    projection(w, h, state.depth.max(MIN_DEPTH))
        * translation(state.translation)
        * Mat4::from_rotation_x(state.rotation.x)
        * Mat4::from_rotation_y(state.rotation.y)
        * Mat4::from_rotation_z(state.rotation.z)
        * scaling(state.scale)
}
