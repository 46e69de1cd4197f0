use crate::constants::*;
use crate::dom;
use prank_core::{Screen, Stage};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Handles to every element the show touches, plus the last stage written
/// to them. Only fields that changed since the previous sync hit the DOM.
pub struct View {
    screens: Vec<(Screen, web::Element)>,
    tap_hint: Option<web::Element>,
    terminal_container: Option<web::Element>,
    terminal_output: Option<web::Element>,
    progress_fill: Option<web::HtmlElement>,
    progress_text: Option<web::Element>,
    loading_status: Option<web::Element>,
    error_items: Vec<web::Element>,
    checkboxes: Vec<web::HtmlInputElement>,
    accept: Option<web::HtmlButtonElement>,
    spotlight: Option<web::Element>,
    teaser: Option<web::Element>,
    header: Option<web::Element>,
    ticket: Option<web::Element>,
    footer: Option<web::Element>,
    toast: Option<web::Element>,
    glitch_overlay: Option<web::Element>,
    glitch_targets: Vec<web::Element>,
    last: Option<Stage>,
}

impl View {
    pub fn bind(document: &web::Document) -> Self {
        let by_id = |id: &str| document.get_element_by_id(id);
        let screens = Screen::ALL
            .iter()
            .filter_map(|s| match by_id(s.element_id()) {
                Some(el) => Some((*s, el)),
                None => {
                    log::warn!("[view] missing #{}", s.element_id());
                    None
                }
            })
            .collect();
        Self {
            screens,
            tap_hint: by_id(TAP_HINT_ID),
            terminal_container: dom::query_one(document, TERMINAL_CONTAINER_SELECTOR),
            terminal_output: by_id(TERMINAL_OUTPUT_ID),
            progress_fill: by_id(PROGRESS_FILL_ID).and_then(|e| e.dyn_into().ok()),
            progress_text: by_id(PROGRESS_TEXT_ID),
            loading_status: by_id(LOADING_STATUS_ID),
            error_items: dom::query_all(document, ERROR_ITEM_SELECTOR),
            checkboxes: dom::query_all(document, CHECKBOX_SELECTOR)
                .into_iter()
                .filter_map(|e| e.dyn_into().ok())
                .collect(),
            accept: by_id(ACCEPT_BUTTON_ID).and_then(|e| e.dyn_into().ok()),
            spotlight: by_id(SPOTLIGHT_ID),
            teaser: by_id(TEASER_ID),
            header: dom::query_one(document, HEADER_SELECTOR),
            ticket: by_id(TICKET_ID),
            footer: dom::query_one(document, FOOTER_SELECTOR),
            toast: by_id(TOAST_ID),
            glitch_overlay: by_id(GLITCH_OVERLAY_ID),
            glitch_targets: dom::query_all(document, GLITCH_SELECTOR),
            last: None,
        }
    }

    pub fn checkbox_count(&self) -> usize {
        self.checkboxes.len()
    }

    pub fn error_item_count(&self) -> usize {
        self.error_items.len()
    }

    pub fn checkboxes(&self) -> &[web::HtmlInputElement] {
        &self.checkboxes
    }

    pub fn sync(&mut self, stage: &Stage) {
        if self.last.as_ref() == Some(stage) {
            return;
        }
        let last = self.last.take();
        let last = last.as_ref();

        if changed(last, stage, |s| (s.active, s.fading)) {
            for (screen, el) in &self.screens {
                let on = stage.active == Some(*screen);
                dom::set_class(el, CLASS_ACTIVE, on);
                dom::set_class(el, CLASS_FADE_IN, on);
                dom::set_class(el, CLASS_FADE_OUT, stage.fading == Some(*screen));
            }
        }

        if changed(last, stage, |s| s.tap_hint_visible) {
            toggle(&self.tap_hint, CLASS_HIDDEN, !stage.tap_hint_visible);
        }
        if changed(last, stage, |s| s.terminal_visible) {
            toggle(&self.terminal_container, CLASS_VISIBLE, stage.terminal_visible);
        }
        if last.map_or(true, |l| l.terminal != stage.terminal) {
            if let Some(out) = &self.terminal_output {
                out.set_inner_html(&stage.terminal.to_html());
            }
        }

        if changed(last, stage, |s| s.progress) {
            if let Some(fill) = &self.progress_fill {
                _ = fill
                    .style()
                    .set_property("width", &format!("{}%", stage.progress));
            }
            if let Some(text) = &self.progress_text {
                text.set_text_content(Some(&stage.progress_text()));
            }
        }
        if changed(last, stage, |s| s.status) {
            if let Some(status) = &self.loading_status {
                status.set_text_content(Some(stage.status));
            }
        }

        for (i, el) in self.error_items.iter().enumerate() {
            let on = stage.error_items.get(i).copied().unwrap_or(false);
            if last.map_or(true, |l| l.error_items.get(i).copied() != Some(on)) {
                dom::set_class(el, CLASS_VISIBLE, on);
            }
        }

        if last.map_or(true, |l| l.gate != stage.gate) {
            for (cb, on) in self.checkboxes.iter().zip(stage.gate.flags()) {
                if cb.checked() != *on {
                    cb.set_checked(*on);
                }
            }
            if let Some(accept) = &self.accept {
                accept.set_disabled(!stage.accept_enabled());
            }
        }

        if changed(last, stage, |s| s.reveal) {
            let r = stage.reveal;
            toggle(&self.spotlight, CLASS_ACTIVE, r.spotlight);
            toggle(&self.teaser, CLASS_VISIBLE, r.teaser);
            toggle(&self.header, CLASS_VISIBLE, r.header);
            toggle(&self.ticket, CLASS_VISIBLE, r.ticket);
            toggle(&self.footer, CLASS_VISIBLE, r.footer);
        }
        if changed(last, stage, |s| s.toast_visible) {
            toggle(&self.toast, CLASS_VISIBLE, stage.toast_visible);
        }

        if changed(last, stage, |s| s.glitch_active) {
            toggle(&self.glitch_overlay, CLASS_ACTIVE, stage.glitch_active);
            for el in &self.glitch_targets {
                dom::set_class(el, CLASS_ACTIVE, stage.glitch_active);
            }
        }

        self.last = Some(stage.clone());
    }
}

fn changed<T: PartialEq>(
    last: Option<&Stage>,
    stage: &Stage,
    field: impl Fn(&Stage) -> T,
) -> bool {
    last.map_or(true, |l| field(l) != field(stage))
}

fn toggle(el: &Option<web::Element>, class: &str, on: bool) {
    if let Some(el) = el {
        dom::set_class(el, class, on);
    }
}
