#![cfg(target_arch = "wasm32")]
use crate::constants::{
    CANVAS_CONTAINER_ID, CONTACT_ATTR, CURSOR_SELECTOR, PROMPT_ATTR, VARIANT_ATTR,
};
use crate::core::{
    Camera, ConfigError, CoreHitVolume, InputQueue, OrbConfig, OrbState, Terminal, TerminalConfig,
};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod input;
mod overlay;
mod page;
mod render;
mod ui;

fn read_orb_config(container: &web::HtmlElement) -> Result<OrbConfig, ConfigError> {
    let variant = container.get_attribute(VARIANT_ATTR).unwrap_or_default();
    let config =
        OrbConfig::from_variant(&variant).ok_or_else(|| ConfigError::UnknownVariant(variant))?;
    config.validate()?;
    Ok(config)
}

fn read_terminal_config(overlay: &web::HtmlElement) -> TerminalConfig {
    let mut config = TerminalConfig::default();
    if let Some(prompt) = overlay.get_attribute(PROMPT_ATTR) {
        config.prompt = prompt;
    }
    if let Some(contact) = overlay.get_attribute(CONTACT_ATTR) {
        config.contact = contact;
    }
    config
}

fn create_canvas(
    document: &web::Document,
    container: &web::HtmlElement,
) -> anyhow::Result<web::HtmlCanvasElement> {
    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    dom::set_style(&canvas, "width", "100%");
    dom::set_style(&canvas, "height", "100%");
    dom::set_style(&canvas, "display", "block");
    container
        .append_child(&canvas)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(canvas)
}

fn texture_seed() -> u64 {
    let mut buf = [0u8; 8];
    match getrandom::getrandom(&mut buf) {
        Ok(()) => u64::from_le_bytes(buf),
        Err(e) => {
            log::warn!("[orb] no entropy ({e}); using a fixed texture seed");
            0x6f72_625f_6761_73
        }
    }
}

fn wire_terminal(document: &web::Document) {
    let Some(view) = overlay::TerminalView::find(document) else {
        log::info!("[term] no terminal markup; overlay disabled");
        return;
    };
    let terminal = Rc::new(RefCell::new(Terminal::new(read_terminal_config(
        &view.overlay,
    ))));
    events::wire_global_keydown(document, terminal.clone(), view.clone());
    events::wire_terminal_submit(terminal.clone(), view.clone());
    events::wire_backdrop_click(terminal, view);
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("orb-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    // Page chrome works without the orb.
    overlay::schedule_loader_fade(&document);
    page::start_hero_fade_in(&document);
    page::wire_card_tilt(&document);
    wire_terminal(&document);
    if let Some(cursor) = dom::html_by_selector(&document, CURSOR_SELECTOR) {
        events::wire_cursor_follow(&document, cursor);
    }

    let container = dom::html_by_id(&document, CANVAS_CONTAINER_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_CONTAINER_ID))?;
    let config = read_orb_config(&container)?;
    log::info!("[orb] config {:?}", config.reveal);

    let canvas = create_canvas(&document, &container)?;
    frame::wire_canvas_resize(&canvas);

    let gpu = render::GpuState::new(&canvas, texture_seed()).await?;

    let queue = Rc::new(RefCell::new(InputQueue::new()));
    events::wire_input_handlers(events::InputWiring {
        document: document.clone(),
        container: container.clone(),
        queue: queue.clone(),
    });

    let aspect = canvas.width().max(1) as f32 / canvas.height().max(1) as f32;
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        state: OrbState::new(&config),
        config,
        camera: Camera::looking_at_orb(aspect),
        hit_volume: CoreHitVolume::default(),
        queue,
        canvas,
        gpu,
        hud: ui::Hud::find(&document),
        last_instant: Instant::now(),
    }));
    frame::start_loop(frame_ctx);

    Ok(())
}
