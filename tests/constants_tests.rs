// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so the page constants are included directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use orb_core::*;

fn parse_hex(css: &str) -> [f32; 3] {
    assert!(css.len() == 7 && css.starts_with('#'), "bad colour {css}");
    let byte = |i: usize| u8::from_str_radix(&css[i..i + 2], 16).expect("hex digit") as f32 / 255.0;
    [byte(1), byte(3), byte(5)]
}

#[test]
fn hud_colours_match_scene_palette() {
    let ok = parse_hex(COLOR_OK);
    for (a, b) in ok.iter().zip(CYAN.iter()) {
        assert!((a - b).abs() < 0.01);
    }
    let critical = parse_hex(COLOR_CRITICAL);
    assert!(critical[0] > 0.9 && critical[1] < 0.2);
}

#[test]
fn dom_hooks_are_bare_ids_or_class_selectors() {
    for id in [
        CANVAS_CONTAINER_ID,
        HEALTH_BAR_ID,
        DOWNLOAD_LINK_ID,
        LOADER_ID,
        TERMINAL_OVERLAY_ID,
        TERMINAL_INPUT_ID,
        TERMINAL_OUTPUT_ID,
    ] {
        assert!(!id.is_empty() && !id.starts_with('#') && !id.starts_with('.'));
    }
    for sel in [
        INSTRUCTION_SELECTOR,
        CURSOR_SELECTOR,
        FADE_IN_SELECTOR,
        PROJECT_CARD_SELECTOR,
    ] {
        assert!(sel.starts_with('.'));
    }
    for attr in [VARIANT_ATTR, PROMPT_ATTR, CONTACT_ATTR] {
        assert!(attr.starts_with("data-"));
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn shells_nest_inside_each_other() {
    assert!(CORE_RADIUS < CAGE_RADIUS);
    assert!(CAGE_RADIUS < GAS_RADIUS);
    assert!(GAS_RADIUS < GAS_OUTER_RADIUS);
    assert!(GAS_OUTER_RADIUS < AURA_RADIUS);
    assert!(AURA_RADIUS < CAMERA_Z);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn health_bands_do_not_overlap() {
    assert!(REGEN_BELOW < DRAIN_ABOVE);
    assert!(HEALTH_CRITICAL > 0.0 && HEALTH_CRITICAL < HEALTH_MAX);
    assert!(CORE_HIDDEN_SCALE < 1.0 && CORE_PULSE_SCALE > 1.0);
    assert!(FRICTION > 0.0 && FRICTION < 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn loader_timings_are_positive() {
    assert!(LOADER_FADE_DELAY_MS > 0);
    assert!(LOADER_REMOVE_DELAY_MS > 0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn hero_fade_finishes_within_a_few_seconds() {
    let mut fade = StaggeredFade::hero(5);
    fade.advance(FADE_IN_DELAY_SECS + 4.0 * FADE_IN_STAGGER_SECS + FADE_IN_SECS + 0.01);
    assert!(fade.is_finished());
    assert!(TILT_MAX_GLARE > 0.0 && TILT_MAX_GLARE <= 1.0);
    assert!(TILT_EASING.starts_with("cubic-bezier("));
}
