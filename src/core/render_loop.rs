//! One render tick, independent of the drawing backend.

use crate::core::camera::build_matrix;
use crate::core::constants::CLEAR_COLOR;
use crate::core::error::ViewerError;
use crate::core::points::{Palette, PointCloudStore, PointSetKey};
use crate::core::state::TransformState;
use glam::Mat4;

/// Drawing backend for point sets. The page implements this on top of wgpu.
pub trait PointSurface {
    fn begin_frame(&mut self, clear_color: [f32; 4]);
    /// `points` is a flat `x, y, z` buffer with at least one point.
    fn draw_points(&mut self, key: PointSetKey, color: [f32; 4], matrix: &Mat4, points: &[f32]);
    fn end_frame(&mut self) -> Result<(), ViewerError>;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickStats {
    pub sets_drawn: usize,
    pub vertices_drawn: usize,
}

/// Clear, build the camera matrix once, draw every non-empty set in store
/// order with its palette color, then present.
pub fn render_tick(
    surface: &mut impl PointSurface,
    state: &TransformState,
    store: &PointCloudStore,
    viewport: (f32, f32),
    palette: &Palette,
) -> Result<TickStats, ViewerError> {
    surface.begin_frame(CLEAR_COLOR);
    let matrix = build_matrix(state, viewport.0, viewport.1);
    let mut stats = TickStats::default();
    for (key, set) in store.iter() {
        if set.is_empty() {
            continue;
        }
        surface.draw_points(key, palette.color(key), &matrix, set.as_slice());
        stats.sets_drawn += 1;
        stats.vertices_drawn += set.point_count();
    }
    surface.end_frame()?;
    Ok(stats)
}
