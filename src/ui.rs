use crate::constants::{
    COLOR_CRITICAL, COLOR_OK, DOWNLOAD_LINK_ID, HEALTH_BAR_ID, INSTRUCTION_SELECTOR, REVEAL_TEXT,
};
use crate::core::Visuals;
use crate::dom;
use web_sys as web;

/// HUD elements looked up once at startup. Any of them may be absent.
pub struct Hud {
    health_bar: Option<web::HtmlElement>,
    instruction: Option<web::HtmlElement>,
    download_link: Option<web::HtmlElement>,
    last_percent: f32,
    last_critical: Option<bool>,
}

impl Hud {
    pub fn find(document: &web::Document) -> Self {
        let hud = Self {
            health_bar: dom::html_by_id(document, HEALTH_BAR_ID),
            instruction: dom::html_by_selector(document, INSTRUCTION_SELECTOR),
            download_link: dom::html_by_id(document, DOWNLOAD_LINK_ID),
            last_percent: f32::NAN,
            last_critical: None,
        };
        if hud.download_link.is_none() {
            log::warn!("[orb] #{} missing; downloads will be skipped", DOWNLOAD_LINK_ID);
        }
        hud
    }

    /// Health bar width and colour. Writes only when something changed.
    pub fn sync(&mut self, visuals: &Visuals) {
        let Some(bar) = &self.health_bar else {
            return;
        };
        if visuals.health_percent != self.last_percent {
            dom::set_style(bar, "width", &format!("{}%", visuals.health_percent));
            self.last_percent = visuals.health_percent;
        }
        if self.last_critical != Some(visuals.health_critical) {
            let color = if visuals.health_critical {
                COLOR_CRITICAL
            } else {
                COLOR_OK
            };
            dom::set_style(bar, "background-color", color);
            self.last_critical = Some(visuals.health_critical);
        }
    }

    pub fn show_revealed(&self) {
        if let Some(label) = &self.instruction {
            label.set_inner_text(REVEAL_TEXT);
            dom::set_style(label, "color", COLOR_CRITICAL);
        }
    }

    /// Activate the hidden download link.
    pub fn trigger_download(&self) {
        if let Some(link) = &self.download_link {
            link.click();
            log::info!("[click] download triggered");
        }
    }
}
