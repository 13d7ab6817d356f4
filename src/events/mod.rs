mod controls;
mod pointer;

use showroom_core::Showroom;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub document: web::Document,
    pub canvas: web::HtmlCanvasElement,
    pub showroom: Rc<RefCell<Showroom>>,
}

pub fn wire_input_handlers(w: InputWiring) {
    pointer::wire_click(&w);
    controls::wire_return_button(&w);
}
