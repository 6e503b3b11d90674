#![cfg(target_arch = "wasm32")]

use game_panel_core::{Enemy, GameState, Level, PanelConfig, PanelError, Surface};
use game_panel_wasm::{query_value, DomSurface};
use wasm_bindgen_test::*;
use web_sys::Document;

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window()
        .expect("no window")
        .document()
        .expect("no document")
}

fn mount(document: &Document, log_id: &str, state_id: &str) -> PanelConfig {
    let body = document.body().expect("no body");
    for id in [log_id, state_id] {
        let element = document.create_element("div").expect("create div");
        element.set_id(id);
        body.append_child(&element).expect("append div");
    }
    PanelConfig {
        log_element: log_id.to_string(),
        state_element: state_id.to_string(),
        ..PanelConfig::default()
    }
}

#[wasm_bindgen_test]
fn attach_fails_when_region_is_missing() {
    let config = PanelConfig {
        log_element: "no-such-log".to_string(),
        ..PanelConfig::default()
    };
    let result = DomSurface::attach(&document(), &config);
    assert!(matches!(result, Err(PanelError::Dom(_))));
}

#[wasm_bindgen_test]
fn show_state_replaces_region_markup() {
    let document = document();
    let config = mount(&document, "log-a", "state-a");
    let surface = DomSurface::attach(&document, &config).expect("attach");

    surface.show_state(&GameState {
        theme: "dark".to_string(),
        level: Level::from("3"),
        background: "cave".to_string(),
        enemies: vec![Enemy {
            kind: "goblin".to_string(),
            skin: "green".to_string(),
            hp: 5.into(),
            atk: None,
        }],
    });
    surface.show_state(&GameState {
        theme: "scifi".to_string(),
        level: Level::from(2),
        background: "station".to_string(),
        enemies: vec![],
    });

    let text = document
        .get_element_by_id("state-a")
        .expect("state region")
        .text_content()
        .unwrap_or_default();
    assert!(text.contains("scifi"));
    assert!(text.contains("—"));
    assert!(!text.contains("goblin"));
}

#[wasm_bindgen_test]
fn show_log_sets_plain_text() {
    let document = document();
    let config = mount(&document, "log-b", "state-b");
    let surface = DomSurface::attach(&document, &config).expect("attach");

    surface.show_log("10:00:00: <b>ok</b>\n ");

    let log = document.get_element_by_id("log-b").expect("log region");
    assert_eq!(log.child_element_count(), 0);
    assert!(log.text_content().unwrap_or_default().contains("<b>ok</b>"));
}

#[wasm_bindgen_test]
fn query_value_reads_named_parameter() {
    assert_eq!(
        query_value("?debug=1&api=http%3A%2F%2Flocalhost%3A5000", "api").as_deref(),
        Some("http%3A%2F%2Flocalhost%3A5000")
    );
    assert_eq!(query_value("?api=", "api"), None);
    assert_eq!(query_value("", "api"), None);
}
