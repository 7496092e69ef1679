use crate::core::click_to_ndc;
use glam::Vec2;
use web_sys as web;

/// Pointer position in CSS pixels relative to the viewport. Spin is driven by
/// these raw deltas, so no canvas scaling is applied.
#[inline]
pub fn pointer_client_px(ev: &web::MouseEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

/// Click position as NDC over `surface`'s bounding rect. `None` while the
/// element has no layout size.
#[inline]
pub fn pointer_ndc(ev: &web::MouseEvent, surface: &web::Element) -> Option<Vec2> {
    let rect = surface.get_bounding_client_rect();
    click_to_ndc(
        pointer_client_px(ev),
        Vec2::new(rect.left() as f32, rect.top() as f32),
        Vec2::new(rect.width() as f32, rect.height() as f32),
    )
}
