use glam::Vec2;
use showroom_core::Viewport;
use web_sys as web;

/// Pointer position relative to the canvas' top-left corner, in CSS pixels.
#[inline]
pub fn pointer_canvas_css(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    client_to_local(
        Vec2::new(ev.client_x() as f32, ev.client_y() as f32),
        Vec2::new(rect.left() as f32, rect.top() as f32),
    )
}

/// Canvas size as laid out by CSS; picking and overlay offsets both work in
/// this space so they stay independent of devicePixelRatio.
#[inline]
pub fn canvas_viewport(canvas: &web::HtmlCanvasElement) -> Viewport {
    let rect = canvas.get_bounding_client_rect();
    viewport_from_css(rect.width(), rect.height())
}

#[inline]
pub fn client_to_local(client: Vec2, rect_origin: Vec2) -> Vec2 {
    client - rect_origin
}

#[inline]
pub fn viewport_from_css(width: f64, height: f64) -> Viewport {
    Viewport::new(width.max(1.0) as f32, height.max(1.0) as f32)
}
