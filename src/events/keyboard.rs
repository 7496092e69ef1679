use crate::core::{KeyAction, Terminal};
use crate::overlay::TerminalView;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn apply_key_action(action: KeyAction, view: &TerminalView) {
    match action {
        KeyAction::Open => {
            view.show();
            log::info!("[term] opened");
        }
        KeyAction::Close => {
            view.hide();
            log::info!("[term] closed");
        }
        KeyAction::Ignore => {}
    }
}

pub fn handle_global_keydown(
    ev: &web::KeyboardEvent,
    terminal: &RefCell<Terminal>,
    view: &TerminalView,
) {
    let action = terminal.borrow_mut().on_key(&ev.key());
    if action == KeyAction::Open {
        // Keep the opening key out of the freshly focused input.
        ev.prevent_default();
    }
    apply_key_action(action, view);
}

pub fn wire_global_keydown(
    document: &web::Document,
    terminal: Rc<RefCell<Terminal>>,
    view: TerminalView,
) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        handle_global_keydown(&ev, &terminal, &view);
    }) as Box<dyn FnMut(_)>);
    _ = document.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Enter in the terminal input submits the line.
pub fn wire_terminal_submit(terminal: Rc<RefCell<Terminal>>, view: TerminalView) {
    let input = view.input.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        if ev.key() != "Enter" {
            return;
        }
        let line = view.input.value();
        let reply = terminal.borrow_mut().submit(&line);
        log::debug!("[term] {:?}", reply.echo);
        view.apply(&reply);
    }) as Box<dyn FnMut(_)>);
    _ = input.add_event_listener_with_callback("keypress", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// A click on the overlay itself (not its children) closes it.
pub fn wire_backdrop_click(terminal: Rc<RefCell<Terminal>>, view: TerminalView) {
    let overlay = view.overlay.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let overlay_node: &web::Node = view.overlay.as_ref();
        let on_backdrop = ev
            .target()
            .and_then(|t| t.dyn_into::<web::Node>().ok())
            .is_some_and(|node| node.is_same_node(Some(overlay_node)));
        if on_backdrop {
            let action = terminal.borrow_mut().on_backdrop_click();
            apply_key_action(action, &view);
        }
    }) as Box<dyn FnMut(_)>);
    _ = overlay.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}
