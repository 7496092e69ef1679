use crate::constants::{
    COLOR_OK, LOADER_FADE_DELAY_MS, LOADER_ID, LOADER_REMOVE_DELAY_MS, TERMINAL_INPUT_ID,
    TERMINAL_OUTPUT_ID, TERMINAL_OVERLAY_ID,
};
use crate::core::TerminalReply;
use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

/// The terminal overlay and its two children.
#[derive(Clone)]
pub struct TerminalView {
    pub overlay: web::HtmlElement,
    pub input: web::HtmlInputElement,
    pub output: web::HtmlElement,
}

impl TerminalView {
    /// `None` when the page has no terminal markup; the feature is then off.
    pub fn find(document: &web::Document) -> Option<Self> {
        let overlay = dom::html_by_id(document, TERMINAL_OVERLAY_ID)?;
        let input = document
            .get_element_by_id(TERMINAL_INPUT_ID)?
            .dyn_into::<web::HtmlInputElement>()
            .ok()?;
        let output = dom::html_by_id(document, TERMINAL_OUTPUT_ID)?;
        Some(Self {
            overlay,
            input,
            output,
        })
    }

    #[inline]
    pub fn show(&self) {
        dom::set_style(&self.overlay, "display", "flex");
        _ = self.input.focus();
    }

    #[inline]
    pub fn hide(&self) {
        dom::set_style(&self.overlay, "display", "none");
    }

    /// Render a submitted line: echo, optional response, then clear/close.
    pub fn apply(&self, reply: &TerminalReply) {
        self.append_line(&reply.echo, None);
        if reply.clear {
            self.output.set_inner_html("");
        }
        if let Some(text) = &reply.response {
            self.append_line(text, Some(COLOR_OK));
        }
        if reply.close {
            self.hide();
        }
        self.input.set_value("");
        self.output.set_scroll_top(self.output.scroll_height());
    }

    fn append_line(&self, text: &str, color: Option<&str>) {
        let Some(document) = self.output.owner_document() else {
            return;
        };
        let Ok(p) = document.create_element("p") else {
            return;
        };
        p.set_text_content(Some(text));
        if let (Some(color), Some(el)) = (color, p.dyn_ref::<web::HtmlElement>()) {
            dom::set_style(el, "color", color);
        }
        _ = self.output.append_child(&p);
    }
}

/// Fade the loader out once the page has settled, then take it out of layout.
pub fn schedule_loader_fade(document: &web::Document) {
    let Some(loader) = dom::html_by_id(document, LOADER_ID) else {
        return;
    };
    dom::set_timeout(LOADER_FADE_DELAY_MS, move || {
        dom::set_style(&loader, "opacity", "0");
        dom::set_timeout(LOADER_REMOVE_DELAY_MS, move || {
            dom::set_style(&loader, "display", "none");
        });
    });
}
