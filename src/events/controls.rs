use super::InputWiring;
use crate::constants::RETURN_BUTTON_ID;
use crate::dom;

pub(super) fn wire_return_button(w: &InputWiring) {
    let showroom = w.showroom.clone();
    let wired = dom::add_click_listener(&w.document, RETURN_BUTTON_ID, move || {
        log::info!("[select] return to overview");
        showroom.borrow_mut().reset();
    });
    if !wired {
        log::warn!("#{} not found; reset is unavailable", RETURN_BUTTON_ID);
    }
}
