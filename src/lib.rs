#![cfg(target_arch = "wasm32")]
use instant::Instant;
use prank_core::{AmbientField, Director, ShowConfig};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

mod audio;
mod constants;
mod dom;
mod events;
mod frame;
mod render;
mod show;
mod view;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("prank-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let started = Instant::now();
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let (canvas, ctx) = dom::canvas_by_id(&document, constants::AMBIENT_CANVAS_ID)?;
    let ambient_layer = render::Layer { canvas, ctx };
    let (canvas, ctx) = dom::canvas_by_id(&document, constants::CONFETTI_CANVAS_ID)?;
    let confetti_layer = render::Layer { canvas, ctx };
    dom::fit_canvas_to_viewport(&ambient_layer.canvas);
    let (width, height) = dom::fit_canvas_to_viewport(&confetti_layer.canvas);

    let view = view::View::bind(&document);
    let cfg = ShowConfig {
        checkboxes: view.checkbox_count(),
        error_items: view.error_item_count(),
        seed: rand::random(),
        ..ShowConfig::default()
    };
    log::info!(
        "[init] {} checkboxes, {} error items, canvas {}x{}",
        cfg.checkboxes,
        cfg.error_items,
        width,
        height
    );
    let mut director = Director::new(cfg)?;
    director.set_canvas_size(width, height);

    let show = Rc::new(RefCell::new(show::Show::new(director)));
    let ambient = Rc::new(RefCell::new(AmbientField::new(
        width,
        height,
        rand::random(),
    )));

    let wiring = events::EventWiring::new(
        &document,
        &show,
        &ambient,
        [&ambient_layer, &confetti_layer],
    );
    events::wire_all(&wiring, view.checkboxes());

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        show,
        ambient,
        ambient_layer,
        confetti_layer,
        view,
        confetti_dirty: false,
    }));
    frame::start_loop(frame_ctx);
    log::info!("[init] ready in {} ms", started.elapsed().as_millis());
    Ok(())
}
