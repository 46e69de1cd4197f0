// Host-side checks on the markup hooks used by the web front-end.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use std::collections::HashSet;

const IDS: [&str; 19] = [
    AMBIENT_CANVAS_ID,
    CONFETTI_CANVAS_ID,
    TAP_HINT_ID,
    TERMINAL_OUTPUT_ID,
    PROGRESS_FILL_ID,
    PROGRESS_TEXT_ID,
    LOADING_STATUS_ID,
    RETRY1_BUTTON_ID,
    RETRY2_BUTTON_ID,
    CONFIRM_BUTTON_ID,
    ACCEPT_BUTTON_ID,
    SPOTLIGHT_ID,
    TEASER_ID,
    TICKET_ID,
    TOAST_ID,
    REPLAY_BUTTON_ID,
    GLITCH_OVERLAY_ID,
    // screens share the namespace
    "screen-intro",
    "screen-reveal",
];

const SELECTORS: [&str; 6] = [
    TERMINAL_CONTAINER_SELECTOR,
    ERROR_ITEM_SELECTOR,
    CHECKBOX_SELECTOR,
    HEADER_SELECTOR,
    FOOTER_SELECTOR,
    GLITCH_SELECTOR,
];

#[test]
fn element_ids_are_unique_and_bare() {
    let unique: HashSet<_> = IDS.iter().collect();
    assert_eq!(unique.len(), IDS.len());
    for id in IDS {
        assert!(!id.is_empty());
        assert!(!id.starts_with('#') && !id.starts_with('.'), "{id}");
        assert!(!id.contains(' '), "{id}");
    }
}

#[test]
fn selectors_are_class_selectors() {
    for sel in SELECTORS {
        assert!(sel.starts_with('.'), "{sel}");
        assert!(sel.len() > 1);
    }
}

#[test]
fn state_classes_are_distinct() {
    let classes = [
        CLASS_ACTIVE,
        CLASS_FADE_IN,
        CLASS_FADE_OUT,
        CLASS_VISIBLE,
        CLASS_HIDDEN,
    ];
    let unique: HashSet<_> = classes.iter().collect();
    assert_eq!(unique.len(), classes.len());
}

#[test]
fn canvases_are_separate_layers() {
    assert_ne!(AMBIENT_CANVAS_ID, CONFETTI_CANVAS_ID);
}
