use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn html_by_id(document: &web::Document, id: &str) -> Option<web::HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

#[inline]
pub fn html_by_selector(document: &web::Document, selector: &str) -> Option<web::HtmlElement> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

/// Every element matching `selector` that is an `HtmlElement`, in document order.
pub fn html_all_by_selector(document: &web::Document, selector: &str) -> Vec<web::HtmlElement> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web::HtmlElement>().ok())
        .collect()
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

/// Run `f` once after `delay_ms`. Ignored without a window.
pub fn set_timeout(delay_ms: i32, f: impl FnOnce() + 'static) {
    if let Some(w) = web::window() {
        let closure = Closure::once(f);
        _ = w.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            delay_ms,
        );
        closure.forget();
    }
}

/// Match the canvas backing store to its CSS size times devicePixelRatio.
/// Returns the new backing size in pixels.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) -> (u32, u32) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = ((rect.width() * dpr) as u32).max(1);
        let h_px = ((rect.height() * dpr) as u32).max(1);
        canvas.set_width(w_px);
        canvas.set_height(h_px);
    }
    (canvas.width(), canvas.height())
}
