use crate::constants::*;
use crate::dom;
use crate::render::Layer;
use crate::show::Show;
use prank_core::{Action, AmbientField};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct EventWiring {
    pub document: web::Document,
    pub show: Rc<RefCell<Show>>,
    pub ambient: Rc<RefCell<AmbientField>>,
    pub canvases: [web::HtmlCanvasElement; 2],
}

impl EventWiring {
    pub fn new(
        document: &web::Document,
        show: &Rc<RefCell<Show>>,
        ambient: &Rc<RefCell<AmbientField>>,
        layers: [&Layer; 2],
    ) -> Self {
        Self {
            document: document.clone(),
            show: show.clone(),
            ambient: ambient.clone(),
            canvases: layers.map(|l| l.canvas.clone()),
        }
    }
}

pub fn wire_all(w: &EventWiring, checkboxes: &[web::HtmlInputElement]) {
    wire_start_gesture(w);
    wire_buttons(w);
    wire_checkboxes(w, checkboxes);
    wire_resize(w);
}

/// Any tap on the page starts the show while the tap hint is up.
fn wire_start_gesture(w: &EventWiring) {
    let target: &web::EventTarget = w.document.as_ref();
    for event in ["click", "touchstart"] {
        let show = w.show.clone();
        let document = w.document.clone();
        dom::add_listener(target, event, move |_| {
            let mut show = show.borrow_mut();
            if !show.director.stage().tap_hint_visible {
                return;
            }
            dom::request_fullscreen_portrait(&document);
            show.synth.init();
            _ = show.dispatch(Action::Start);
        });
    }
}

fn wire_buttons(w: &EventWiring) {
    let buttons = [
        (RETRY1_BUTTON_ID, Action::Retry1),
        (RETRY2_BUTTON_ID, Action::Retry2),
        (CONFIRM_BUTTON_ID, Action::Confirm),
        (ACCEPT_BUTTON_ID, Action::Accept),
        (TICKET_ID, Action::Ticket),
    ];
    for (id, action) in buttons {
        let show = w.show.clone();
        dom::add_click_listener(&w.document, id, move || {
            _ = show.borrow_mut().dispatch(action);
        });
    }

    // Replay puts the tap hint back; keep the click from reaching the
    // start gesture on the document.
    match w.document.get_element_by_id(REPLAY_BUTTON_ID) {
        Some(el) => {
            let show = w.show.clone();
            dom::add_listener(el.as_ref(), "click", move |ev| {
                ev.stop_propagation();
                _ = show.borrow_mut().dispatch(Action::Replay);
            });
        }
        None => log::warn!("[events] missing #{}", REPLAY_BUTTON_ID),
    }
}

fn wire_checkboxes(w: &EventWiring, checkboxes: &[web::HtmlInputElement]) {
    for (index, input) in checkboxes.iter().enumerate() {
        let show = w.show.clone();
        let input_cb = input.clone();
        dom::add_listener(input.as_ref(), "change", move |_| {
            let mut show = show.borrow_mut();
            let checked = input_cb.checked();
            if show.dispatch(Action::SetCheck { index, checked }).is_err() {
                // Put the box back to what the gate holds.
                let held = show
                    .director
                    .stage()
                    .gate
                    .flags()
                    .get(index)
                    .copied()
                    .unwrap_or(false);
                input_cb.set_checked(held);
            }
        });
    }
}

fn wire_resize(w: &EventWiring) {
    let Some(window) = web::window() else {
        return;
    };
    let w = w.clone();
    dom::add_listener(window.unchecked_ref(), "resize", move |_| {
        let mut size = (0.0, 0.0);
        for canvas in &w.canvases {
            size = dom::fit_canvas_to_viewport(canvas);
        }
        let (width, height) = size;
        w.ambient.borrow_mut().resize(width, height);
        w.show.borrow_mut().director.set_canvas_size(width, height);
        log::debug!("[events] resized to {}x{}", width, height);
    });
}
