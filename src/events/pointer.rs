use crate::core::{wheel_delta, InputHandler, InteractionState, PointerButton};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::{Closure, WasmClosure};
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub interaction: Rc<RefCell<InteractionState>>,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_pointerdown(&w);
    wire_pointerup(&w);
    wire_pointermove(&w);
    wire_pointerleave(&w);
    wire_wheel(&w);
    suppress_context_menu(&w.canvas);
}

fn listen<E: 'static>(
    target: &web::HtmlCanvasElement,
    event: &str,
    handler: impl FnMut(E) + 'static,
) where
    dyn FnMut(E): WasmClosure,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointerdown(w: &InputWiring) {
    let interaction = w.interaction.clone();
    listen(&w.canvas, "pointerdown", move |ev: web::PointerEvent| {
        if let Some(button) = PointerButton::from_dom(ev.button()) {
            interaction.borrow_mut().on_pointer_down(button);
            log::debug!("[input] down {:?}", button);
        }
    });
}

fn wire_pointerup(w: &InputWiring) {
    let interaction = w.interaction.clone();
    listen(&w.canvas, "pointerup", move |ev: web::PointerEvent| {
        if let Some(button) = PointerButton::from_dom(ev.button()) {
            interaction.borrow_mut().on_pointer_up(button);
        }
    });
}

fn wire_pointermove(w: &InputWiring) {
    let interaction = w.interaction.clone();
    listen(&w.canvas, "pointermove", move |ev: web::PointerEvent| {
        let ratio = web::window().map_or(1.0, |w| w.device_pixel_ratio()) as f32;
        let mut state = interaction.borrow_mut();
        state.set_pixel_ratio(ratio);
        state.on_pointer_move(
            ev.movement_x() as f32,
            ev.movement_y() as f32,
            ev.shift_key(),
        );
    });
}

fn wire_pointerleave(w: &InputWiring) {
    let interaction = w.interaction.clone();
    listen(&w.canvas, "pointerleave", move |_ev: web::PointerEvent| {
        interaction.borrow_mut().on_pointer_leave();
    });
}

fn wire_wheel(w: &InputWiring) {
    let interaction = w.interaction.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::WheelEvent| {
        let modifier = ev.shift_key();
        let delta = wheel_delta(ev.delta_x() as f32, ev.delta_y() as f32, modifier);
        let outcome = interaction.borrow_mut().on_wheel(delta, modifier);
        if outcome.consumed {
            ev.prevent_default();
        }
    }) as Box<dyn FnMut(_)>);
    // Non-passive so the modifier branch may cancel scrolling.
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(false);
    _ = w
        .canvas
        .add_event_listener_with_callback_and_add_event_listener_options(
            "wheel",
            closure.as_ref().unchecked_ref(),
            &opts,
        );
    closure.forget();
}

fn suppress_context_menu(canvas: &web::HtmlCanvasElement) {
    listen(canvas, "contextmenu", |ev: web::MouseEvent| ev.prevent_default());
}
