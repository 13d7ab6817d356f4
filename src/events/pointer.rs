use super::InputWiring;
use crate::input;
use wasm_bindgen::JsCast;
use web_sys as web;

pub(super) fn wire_click(w: &InputWiring) {
    let w = w.clone();
    let target = w.canvas.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let pos = input::pointer_canvas_css(&ev, &w.canvas);
        let mut showroom = w.showroom.borrow_mut();
        let picked = showroom.on_pointer_click(pos);
        log::debug!(
            "[pick] click ({:.0},{:.0}) -> {:?}",
            pos.x,
            pos.y,
            picked.and_then(|id| showroom.state().registry.get(id).map(|o| o.name.clone()))
        );
    }) as Box<dyn FnMut(_)>);
    _ = target.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}
