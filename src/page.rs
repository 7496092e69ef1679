use crate::constants::{FADE_IN_SELECTOR, PROJECT_CARD_SELECTOR, TILT_EASING, TILT_GLARE_CLASS};
use crate::core::{card_tilt, StaggeredFade, TiltConfig, TiltPose};
use crate::dom;
use crate::input;
use glam::Vec2;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Fade the hero elements in one after another, rising into place.
pub fn start_hero_fade_in(document: &web::Document) {
    let elements = dom::html_all_by_selector(document, FADE_IN_SELECTOR);
    if elements.is_empty() {
        return;
    }
    let mut fade = StaggeredFade::hero(elements.len());
    apply_fade(&elements, &fade);

    let mut last = Instant::now();
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let now = Instant::now();
        fade.advance((now - last).as_secs_f32());
        last = now;
        apply_fade(&elements, &fade);
        if fade.is_finished() {
            log::debug!("[page] hero fade-in done");
            return;
        }
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn apply_fade(elements: &[web::HtmlElement], fade: &StaggeredFade) {
    for (el, frame) in elements.iter().zip(fade.frames()) {
        dom::set_style(el, "opacity", &format!("{:.3}", frame.opacity));
        dom::set_style(el, "transform", &format!("translateY({:.2}px)", frame.offset_px));
    }
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

/// Tilt each project card toward the pointer, with a glare that brightens
/// toward the bottom edge.
pub fn wire_card_tilt(document: &web::Document) {
    let cards = dom::html_all_by_selector(document, PROJECT_CARD_SELECTOR);
    let config = TiltConfig::default();
    for card in cards {
        let glare = create_glare(document, &card);
        let transition = format!("transform {}ms {}", config.speed_ms, TILT_EASING);
        dom::set_style(&card, "transition", &transition);
        dom::set_style(&card, "transform-style", "preserve-3d");
        wire_card(card, glare, config);
    }
}

fn create_glare(document: &web::Document, card: &web::HtmlElement) -> Option<web::HtmlElement> {
    let glare = document
        .create_element("div")
        .ok()?
        .dyn_into::<web::HtmlElement>()
        .ok()?;
    glare.set_class_name(TILT_GLARE_CLASS);
    for (property, value) in [
        ("position", "absolute"),
        ("inset", "0"),
        ("pointer-events", "none"),
        ("border-radius", "inherit"),
        ("opacity", "0"),
    ] {
        dom::set_style(&glare, property, value);
    }
    if card.style().get_property_value("position").unwrap_or_default().is_empty() {
        dom::set_style(card, "position", "relative");
    }
    card.append_child(&glare).ok()?;
    Some(glare)
}

fn apply_tilt(
    card: &web::HtmlElement,
    glare: Option<&web::HtmlElement>,
    pose: &TiltPose,
    config: &TiltConfig,
) {
    dom::set_style(card, "transform", &pose.css_transform(config.perspective_px));
    if let Some(glare) = glare {
        dom::set_style(glare, "opacity", &format!("{:.3}", pose.glare_opacity));
        dom::set_style(
            glare,
            "background",
            &format!(
                "linear-gradient({:.1}deg, rgba(255,255,255,0) 0%, rgba(255,255,255,1) 100%)",
                pose.glare_angle_deg
            ),
        );
    }
}

fn wire_card(card: web::HtmlElement, glare: Option<web::HtmlElement>, config: TiltConfig) {
    let card_move = card.clone();
    let glare_move = glare.clone();
    let on_move = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let rect = card_move.get_bounding_client_rect();
        let origin = Vec2::new(rect.left() as f32, rect.top() as f32);
        let size = Vec2::new(rect.width() as f32, rect.height() as f32);
        if let Some(pose) = card_tilt(&config, input::pointer_client_px(&ev), origin, size) {
            apply_tilt(&card_move, glare_move.as_ref(), &pose, &config);
        }
    }) as Box<dyn FnMut(_)>);
    _ = card.add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref());
    on_move.forget();

    let card_leave = card.clone();
    let on_leave = Closure::wrap(Box::new(move |_ev: web::MouseEvent| {
        apply_tilt(&card_leave, glare.as_ref(), &TiltPose::REST, &config);
    }) as Box<dyn FnMut(_)>);
    _ = card.add_event_listener_with_callback("mouseleave", on_leave.as_ref().unchecked_ref());
    on_leave.forget();
}
