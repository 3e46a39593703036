//! Browser entry points
//!
//! Wires the gesture tracker and frame playback to the page: mouse listeners
//! on the document, `fetch` for the shot collaborators and a timer for the
//! frames. The hosting page calls `start()` (or `startWithConfig(json)`) once
//! the DOM is ready.

pub mod console;
pub mod dom;
pub mod fetch;

pub use dom::{DomFrames, DomScene};
pub use fetch::{FetchClient, LocalSpawner, LocationNavigator};

use crate::animation::{FrameCycler, FrameTick, PageKind};
use crate::config::ShotConfig;
use crate::gesture::GestureTracker;
use crate::input::types::{PointerEventKind, PointerSample};
use crate::shot::{FollowUpProbe, HttpVelocityReporter, ShotDispatcher, ShotError, ShotResult};
use gloo_events::EventListener;
use gloo_timers::callback::Interval;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, MouseEvent};

pub(crate) fn js_error(context: &str, value: JsValue) -> ShotError {
    ShotError::Platform(format!("{}: {:?}", context, value))
}

/// Start with the stock page configuration
#[wasm_bindgen]
pub fn start() -> Result<(), JsValue> {
    setup();
    launch(ShotConfig::default())
}

/// Start with a JSON configuration overriding any of the defaults
#[wasm_bindgen(js_name = startWithConfig)]
pub fn start_with_config(json: &str) -> Result<(), JsValue> {
    setup();
    let config = ShotConfig::from_json(json).map_err(|e| {
        tracing::error!("Invalid configuration: {}", e);
        JsValue::from_str(&e.to_string())
    })?;
    launch(config)
}

fn setup() {
    console_error_panic_hook::set_once();
    crate::init_tracing();
}

fn launch(config: ShotConfig) -> Result<(), JsValue> {
    boot(&config).map_err(|e| {
        tracing::error!("Failed to start: {}", e);
        JsValue::from_str(&e.to_string())
    })
}

fn boot(config: &ShotConfig) -> ShotResult<()> {
    let window =
        web_sys::window().ok_or_else(|| ShotError::Platform("no global window".to_string()))?;
    let document = window
        .document()
        .ok_or_else(|| ShotError::Platform("window has no document".to_string()))?;
    let pathname = window
        .location()
        .pathname()
        .map_err(|e| js_error("read location", e))?;

    let page = PageKind::classify(&pathname, &config.follow_up_path);
    page.log_loaded(&config.follow_up_path);

    start_playback(&document, config, page)?;

    match attach_gesture(&document, config) {
        Ok(()) => Ok(()),
        // The playback page is not required to carry a table
        Err(e) if page == PageKind::Animation => {
            tracing::warn!("Aiming disabled on {}: {}", pathname, e);
            Ok(())
        }
        Err(e) => Err(e),
    }
}

fn start_playback(document: &Document, config: &ShotConfig, page: PageKind) -> ShotResult<()> {
    let mut frames = DomFrames::query(document, &config.frame_selector)?;
    let mut cycler = match FrameCycler::for_surface(&frames) {
        Ok(cycler) => cycler,
        Err(ShotError::EmptyFrameSequence) => {
            if page.expects_frames() {
                tracing::warn!("No frames match {}", config.frame_selector);
            } else {
                tracing::debug!("No frames on this page");
            }
            return Ok(());
        }
        Err(e) => return Err(e),
    };

    cycler.start(&mut frames)?;
    tracing::debug!(
        "Playing {} frames every {}ms",
        cycler.frame_count(),
        config.frame_interval_ms
    );

    let handle: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));
    let handle_for_tick = Rc::clone(&handle);
    let interval = Interval::new(config.frame_interval_ms, move || {
        let done = match cycler.tick(&mut frames) {
            Ok(FrameTick::Showing(_)) => false,
            Ok(FrameTick::Finished) => true,
            Err(e) => {
                tracing::warn!("Stopping playback: {}", e);
                true
            }
        };

        if done {
            // Drop outside the running callback; dropping clears the timer
            if let Some(interval) = handle_for_tick.borrow_mut().take() {
                wasm_bindgen_futures::spawn_local(async move { drop(interval) });
            }
        }
    });
    *handle.borrow_mut() = Some(interval);

    Ok(())
}

fn attach_gesture(document: &Document, config: &ShotConfig) -> ShotResult<()> {
    let scene = DomScene::new(document.clone(), config)?;
    let dispatcher = ShotDispatcher::new(
        Rc::new(HttpVelocityReporter::new(
            FetchClient,
            config.send_endpoint.clone(),
        )),
        Rc::new(FollowUpProbe::new(
            FetchClient,
            LocationNavigator,
            config.follow_up_path.clone(),
        )),
        Rc::new(LocalSpawner),
    );
    let tracker = Rc::new(RefCell::new(GestureTracker::new(scene, config, dispatcher)?));

    let bindings = [
        ("mousedown", PointerEventKind::Down),
        ("mousemove", PointerEventKind::Move),
        ("mouseup", PointerEventKind::Up),
    ];
    for (event_type, kind) in bindings {
        let tracker = Rc::clone(&tracker);
        EventListener::new(document, event_type, move |event: &Event| {
            let Some(event) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            let sample = PointerSample::new(kind, f64::from(event.page_x()), f64::from(event.page_y()));
            if let Err(e) = tracker.borrow_mut().handle(sample) {
                tracing::warn!("Ignoring {}: {}", event_type, e);
            }
        })
        .forget();
    }

    tracing::info!("Aiming enabled");
    Ok(())
}
