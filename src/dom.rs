use crate::core::{FormSource, PhoneOption};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

#[inline]
pub fn add_change_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        _ = el.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

/// Blocking user-facing report for unrecoverable setup failures.
pub fn alert(message: &str) {
    log::error!("{}", message);
    if let Some(w) = web::window() {
        _ = w.alert_with_message(message);
    }
}

/// Reads `<input>` / `<select>` values by element id.
pub struct DocumentForm {
    document: web::Document,
}

impl DocumentForm {
    pub fn new(document: web::Document) -> Self {
        Self { document }
    }
}

impl FormSource for DocumentForm {
    fn value(&self, id: &str) -> Option<String> {
        let el = self.document.get_element_by_id(id)?;
        if let Some(input) = el.dyn_ref::<web::HtmlInputElement>() {
            return Some(input.value());
        }
        if let Some(select) = el.dyn_ref::<web::HtmlSelectElement>() {
            return Some(select.value());
        }
        None
    }
}

/// Replace the options of a `<select>` with the phone catalogue.
pub fn fill_phone_selector(document: &web::Document, select_id: &str, phones: &[PhoneOption]) {
    let Some(select) = document
        .get_element_by_id(select_id)
        .and_then(|el| el.dyn_into::<web::HtmlSelectElement>().ok())
    else {
        log::warn!("[dom] missing #{}", select_id);
        return;
    };
    select.set_inner_html("");
    for phone in phones {
        match web::HtmlOptionElement::new_with_text_and_value(&phone.name, &phone.filename) {
            Ok(opt) => {
                opt.set_id(&phone.name);
                _ = select.add_with_html_option_element(&opt);
            }
            Err(e) => log::warn!("[dom] option for {}: {:?}", phone.name, e),
        }
    }
}
