use crate::core::{
    render_tick, InteractionState, Palette, PointCloudStore, TickStats, UpdateQueue,
};
use crate::render;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub interaction: Rc<RefCell<InteractionState>>,
    pub store: PointCloudStore,
    pub updates: UpdateQueue,
    pub palette: Palette,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: render::GpuState<'a>,
    pub last_stats: TickStats,
}

impl<'a> FrameContext<'a> {
    /// One render tick. Never waits on the network: whatever data is
    /// resident after draining the queue is what gets drawn.
    pub fn frame(&mut self) {
        let applied = self.updates.drain_into(&mut self.store);
        if applied > 0 {
            log::debug!("[frame] applied {} store update(s)", applied);
        }

        let w = self.canvas.width();
        let h = self.canvas.height();
        self.gpu.resize_if_needed(w, h);

        let transform = self.interaction.borrow().transform;
        match render_tick(
            &mut self.gpu,
            &transform,
            &self.store,
            (w as f32, h as f32),
            &self.palette,
        ) {
            Ok(stats) => {
                if stats != self.last_stats {
                    log::debug!(
                        "[frame] drawing {} set(s), {} points",
                        stats.sets_drawn,
                        stats.vertices_drawn
                    );
                }
                self.last_stats = stats;
            }
            Err(e) => log::warn!("[frame] render error: {}", e),
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> anyhow::Result<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    render::GpuState::new(leaked_canvas).await
}

/// Arm the fixed-interval redraw timer. Each tick runs to completion, so
/// ticks never overlap.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>, interval_ms: u32) {
    let tick = Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
    }) as Box<dyn FnMut()>);
    match web::window() {
        Some(w) => {
            if let Err(e) = w.set_interval_with_callback_and_timeout_and_arguments_0(
                tick.as_ref().unchecked_ref(),
                interval_ms as i32,
            ) {
                log::error!("[frame] setInterval failed: {:?}", e);
            }
        }
        None => log::error!("[frame] no window to drive the render loop"),
    }
    tick.forget();
}
