use crate::core::InputQueue;
use crate::dom;
use crate::input;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub document: web::Document,
    /// Click target; NDC is computed over its bounding rect.
    pub container: web::HtmlElement,
    pub queue: Rc<RefCell<InputQueue>>,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_mousemove(&w);
    wire_click(&w);
}

fn wire_mousemove(w: &InputWiring) {
    let w = w.clone();
    let target = w.document.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        w.queue
            .borrow_mut()
            .pointer_moved(input::pointer_client_px(&ev));
    }) as Box<dyn FnMut(_)>);

    _ = target.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_click(w: &InputWiring) {
    let w = w.clone();
    let container_for_listener = w.container.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        match input::pointer_ndc(&ev, &w.container) {
            Some(ndc) => w.queue.borrow_mut().click(ndc),
            None => log::debug!("[click] container has no size; dropped"),
        }
    }) as Box<dyn FnMut(_)>);

    _ = container_for_listener
        .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Pin the custom cursor element to the pointer. Independent of the orb.
pub fn wire_cursor_follow(document: &web::Document, cursor: web::HtmlElement) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let pos = input::pointer_client_px(&ev);
        dom::set_style(&cursor, "left", &format!("{}px", pos.x));
        dom::set_style(&cursor, "top", &format!("{}px", pos.y));
    }) as Box<dyn FnMut(_)>);
    _ = document.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
    closure.forget();
}
