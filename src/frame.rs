use crate::overlay::DomPresenter;
use instant::Instant;
use showroom_core::{Presenter, Showroom};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

// Long stalls (background tabs) are folded into one bounded step.
const MAX_FRAME_STEP: Duration = Duration::from_millis(250);

pub struct FrameContext {
    pub showroom: Rc<RefCell<Showroom>>,
    pub presenter: DomPresenter,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn new(showroom: Rc<RefCell<Showroom>>, presenter: DomPresenter) -> Self {
        Self {
            showroom,
            presenter,
            last_instant: Instant::now(),
        }
    }

    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = (now - self.last_instant).min(MAX_FRAME_STEP);
        self.last_instant = now;

        let output = self.showroom.borrow_mut().tick(dt);
        self.presenter.present(&output);
    }
}

fn request_frame(callback: &Closure<dyn FnMut()>) {
    if let Some(w) = web::window() {
        _ = w.request_animation_frame(callback.as_ref().unchecked_ref());
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        if let Some(cb) = tick_clone.borrow().as_ref() {
            request_frame(cb);
        }
    }) as Box<dyn FnMut()>));
    if let Some(cb) = tick.borrow().as_ref() {
        request_frame(cb);
    }
}
