pub mod core;

#[cfg(target_arch = "wasm32")]
mod constants;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod events;
#[cfg(target_arch = "wasm32")]
mod frame;
#[cfg(target_arch = "wasm32")]
mod net;
#[cfg(target_arch = "wasm32")]
mod render;

#[cfg(target_arch = "wasm32")]
pub use web_entry::start;

#[cfg(target_arch = "wasm32")]
mod web_entry {
    use crate::constants::{
        PHONE_SELECTOR_ID, RESET_BUTTON_ID, SAMPLE_BUTTON_ID, SIMULATE_BUTTON_ID,
    };
    use crate::core::{
        fallback_button_selector, InteractionState, Palette, PointCloudStore, SimulationClient,
        SimulationParams, TickStats, TransformState, UpdateQueue, ViewerConfig, DEFAULT_CANVAS_ID,
    };
    use crate::{dom, events, frame, net};
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::spawn_local;
    use web_sys as web;

    type Client = Rc<SimulationClient<net::GlooTransport>>;

    fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
        dom::sync_canvas_backing_size(canvas);
        let canvas_resize = canvas.clone();
        let resize_closure = Closure::wrap(Box::new(move || {
            dom::sync_canvas_backing_size(&canvas_resize);
        }) as Box<dyn FnMut()>);
        if let Some(window) = web::window() {
            _ = window
                .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
        }
        resize_closure.forget();
    }

    fn wire_simulate_button(document: &web::Document, client: &Client, updates: &UpdateQueue) {
        let client = client.clone();
        let updates = updates.clone();
        let form_doc = document.clone();
        let on_click = move || {
            let params = SimulationParams::from_form(&dom::DocumentForm::new(form_doc.clone()));
            log::info!("[sim] requesting {:?}", params);
            let client = client.clone();
            let updates = updates.clone();
            // Fire-and-forget; overlapping requests race and the last to resolve wins.
            spawn_local(async move {
                if let Err(e) = client.request_simulation(&params, &updates).await {
                    log::warn!("[sim] simulation request failed: {}", e);
                }
            });
        };
        if document.get_element_by_id(SIMULATE_BUTTON_ID).is_some() {
            dom::add_click_listener(document, SIMULATE_BUTTON_ID, on_click);
            return;
        }
        // Older pages have a single unlabelled button.
        let fallback = fallback_button_selector(&[SAMPLE_BUTTON_ID, RESET_BUTTON_ID]);
        if let Ok(Some(button)) = document.query_selector(&fallback) {
            let closure = Closure::wrap(Box::new(move || on_click()) as Box<dyn FnMut()>);
            _ = button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_sample(client: &Client, updates: &UpdateQueue, count: u32) {
        let client = client.clone();
        let updates = updates.clone();
        spawn_local(async move {
            match client.request_vertices(count, &updates).await {
                Ok(n) => log::info!("[sim] sample preview with {} points", n),
                Err(e) => log::warn!("[sim] vertices request failed: {}", e),
            }
        });
    }

    fn wire_sample_button(document: &web::Document, client: &Client, updates: &UpdateQueue) {
        let client = client.clone();
        let updates = updates.clone();
        dom::add_click_listener(document, SAMPLE_BUTTON_ID, move || {
            let count = client.config().sample_vertex_count.max(1);
            request_sample(&client, &updates, count);
        });
    }

    fn wire_reset_button(
        document: &web::Document,
        canvas: &web::HtmlCanvasElement,
        interaction: &Rc<RefCell<InteractionState>>,
    ) {
        let canvas = canvas.clone();
        let interaction = interaction.clone();
        dom::add_click_listener(document, RESET_BUTTON_ID, move || {
            interaction
                .borrow_mut()
                .reset(canvas.width() as f32, canvas.height() as f32);
            log::info!("[input] view reset");
        });
    }

    fn load_phone_catalogue(document: &web::Document, client: &Client) {
        let document = document.clone();
        let client = client.clone();
        spawn_local(async move {
            match client.fetch_phones().await {
                Ok(phones) => {
                    log::info!("[sim] {} phone model(s) available", phones.len());
                    dom::fill_phone_selector(&document, PHONE_SELECTOR_ID, &phones);
                }
                Err(e) => log::warn!("[sim] phone catalogue unavailable: {}", e),
            }
        });
    }

    fn wire_phone_details(document: &web::Document, client: &Client) {
        let client = client.clone();
        let form = dom::DocumentForm::new(document.clone());
        dom::add_change_listener(document, PHONE_SELECTOR_ID, move || {
            let Some(model) = crate::core::FormSource::value(&form, PHONE_SELECTOR_ID) else {
                return;
            };
            let client = client.clone();
            spawn_local(async move {
                match client.fetch_phone(&model).await {
                    Ok(d) => log::info!(
                        "[sim] {}: {}x{}x{} speaker {}x{} @ {}",
                        model,
                        d.width,
                        d.length,
                        d.height,
                        d.speaker.width,
                        d.speaker.height,
                        d.speaker.center
                    ),
                    Err(e) => log::warn!("[sim] phone {} lookup failed: {}", model, e),
                }
            });
        });
    }

    #[wasm_bindgen(start)]
    pub fn start() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).ok();
        log::info!("amphora-web starting");

        spawn_local(async move {
            if let Err(e) = init().await {
                dom::alert(&format!("Unable to start the viewer: {}", e));
            }
        });
        Ok(())
    }

    async fn init() -> anyhow::Result<()> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| anyhow::anyhow!("no document"))?;

        let canvas: web::HtmlCanvasElement = document
            .get_element_by_id(DEFAULT_CANVAS_ID)
            .ok_or_else(|| anyhow::anyhow!("missing #{}", DEFAULT_CANVAS_ID))?
            .dyn_into::<web::HtmlCanvasElement>()
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
        let config = ViewerConfig::from_attributes(|name| canvas.get_attribute(name));
        log::info!("[config] {:?}", config);

        // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
        wire_canvas_resize(&canvas);

        let gpu = frame::init_gpu(&canvas)
            .await
            .map_err(|e| anyhow::anyhow!("WebGPU is not available: {}", e))?;

        let interaction = Rc::new(RefCell::new(InteractionState::new(
            TransformState::centered(canvas.width() as f32, canvas.height() as f32),
        )));
        let updates = UpdateQueue::new();
        let client: Client = Rc::new(SimulationClient::new(net::GlooTransport, config.clone()));

        events::wire_input_handlers(events::InputWiring {
            canvas: canvas.clone(),
            interaction: interaction.clone(),
        });
        wire_simulate_button(&document, &client, &updates);
        wire_sample_button(&document, &client, &updates);
        wire_reset_button(&document, &canvas, &interaction);
        wire_phone_details(&document, &client);
        load_phone_catalogue(&document, &client);
        if config.sample_vertex_count > 0 {
            request_sample(&client, &updates, config.sample_vertex_count);
        }

        let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
            interaction,
            store: PointCloudStore::new(),
            updates,
            palette: Palette::default(),
            canvas,
            gpu,
            last_stats: TickStats::default(),
        }));
        frame::start_loop(frame_ctx, config.tick_interval_ms);
        Ok(())
    }
}
