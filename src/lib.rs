#![cfg(target_arch = "wasm32")]
use showroom_core::{load_catalog, Showroom, ShowroomConfig};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod catalog;
mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod overlay;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement, showroom: Rc<RefCell<Showroom>>) {
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        showroom
            .borrow_mut()
            .resize(input::canvas_viewport(&canvas_resize));
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

async fn load_assets(showroom: Rc<RefCell<Showroom>>) {
    for (name, placement, model) in catalog::shelving() {
        if let Err(e) = showroom.borrow_mut().add_static(&name, placement, &model) {
            log::error!("[assets] {}: {}", name, e);
        }
    }

    let entries = catalog::phone_entries();
    let results = load_catalog(&catalog::ProxyLoader, &entries).await;

    let mut showroom = showroom.borrow_mut();
    let mut installed = 0;
    for (entry, result) in results {
        match result.and_then(|model| showroom.install_model(&entry, &model)) {
            Ok(_) => installed += 1,
            Err(e) => log::error!("[assets] {} skipped: {}", entry.name, e),
        }
    }
    log::info!("[assets] {}/{} models installed", installed, entries.len());
    showroom.on_assets_loaded();
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("showroom-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas = document
        .get_element_by_id(constants::CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("#{} not found", constants::CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|_| anyhow::anyhow!("#{} is not a canvas", constants::CANVAS_ID))?;

    let viewport = input::canvas_viewport(&canvas);
    let showroom = Rc::new(RefCell::new(Showroom::new(
        ShowroomConfig::default(),
        viewport,
    )));
    {
        let mut s = showroom.borrow_mut();
        for (id, anchor) in catalog::marker_specs() {
            s.add_marker(&id, anchor);
        }
    }

    wire_canvas_resize(&canvas, showroom.clone());
    events::wire_input_handlers(events::InputWiring {
        document: document.clone(),
        canvas,
        showroom: showroom.clone(),
    });

    spawn_local(load_assets(showroom.clone()));

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(
        showroom,
        overlay::DomPresenter::new(document),
    )));
    frame::start_loop(frame_ctx);
    Ok(())
}
