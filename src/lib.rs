#![cfg(target_arch = "wasm32")]
use crate::constants::*;
use crate::core::{Layers, Scene, Show, ShowConfig, Surface, WallClock};
use crate::frame::FrameContext;
use crate::render::CanvasSurface;
use crate::stage::DomStage;
use rand::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod audio;
mod constants;
mod core;
mod dom;
mod frame;
mod overlay;
mod render;
mod stage;

fn canvas_layer(
    document: &web::Document,
    id: &str,
    size: (f64, f64),
) -> anyhow::Result<CanvasSurface> {
    let canvas = dom::element_by_id::<web::HtmlCanvasElement>(document, id)?;
    let mut surface = CanvasSurface::new(canvas)?;
    surface.resize(size.0, size.1);
    Ok(surface)
}

fn wire_resize(frame_ctx: &Rc<RefCell<FrameContext>>) {
    let ctx = frame_ctx.clone();
    dom::add_resize_listener(move |width, height| {
        ctx.borrow_mut().resize(width, height);
    });
}

fn wire_start_prompt(document: &web::Document, frame_ctx: &Rc<RefCell<FrameContext>>) {
    let ctx = frame_ctx.clone();
    dom::add_click_listener(document, START_PROMPT_ID, move || {
        let mut ctx = ctx.borrow_mut();
        if ctx.stage.start_prompt_hidden() {
            return;
        }
        ctx.start();
    });
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("starlit starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let viewport = dom::viewport_size(&window);
    let layers = Layers {
        stars: canvas_layer(&document, STARS_CANVAS_ID, viewport)?,
        nebula: canvas_layer(&document, NEBULA_CANVAS_ID, viewport)?,
        swirl: canvas_layer(&document, SWIRL_CANVAS_ID, viewport)?,
    };
    let scene = Scene::new(layers, StdRng::from_entropy());
    let stage = DomStage::new(window, document.clone())?;
    log::info!(
        "[scene] {} stars, {} nebula blobs on {:.0}x{:.0}",
        scene.stars.len(),
        scene.nebula.len(),
        viewport.0,
        viewport.1
    );

    let frame_ctx = Rc::new(RefCell::new(FrameContext {
        scene,
        show: Show::new(ShowConfig::default()),
        stage,
        clock: WallClock::new(),
    }));

    wire_resize(&frame_ctx);
    wire_start_prompt(&document, &frame_ctx);

    // The star field animates from page load; the show waits for the prompt.
    frame::start_loop(frame_ctx);
    Ok(())
}
