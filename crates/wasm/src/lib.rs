//! Game panel WASM frontend
//! 
//! Browser-side controller for the game-state dashboard. Each exported action
//! is scheduled on the browser event loop and routed through the shared
//! dispatcher, which logs the backend's message and re-renders the state panel.

#![cfg(target_arch = "wasm32")]

mod dom;
mod http_client;
mod location;

use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;

use game_panel_core::{ActionOutcome, Dispatcher, PanelError, Result};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

pub use dom::DomSurface;
pub use http_client::FetchBackend;
pub use location::{config_from_location, query_value};

type PanelDispatcher = Dispatcher<FetchBackend, DomSurface>;

thread_local! {
    static DISPATCHER: RefCell<Option<Rc<PanelDispatcher>>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() {
    // Set up panic hook for better error messages
    console_error_panic_hook::set_once();
    
    // Initialize tracing for WASM
    tracing_wasm::set_as_global_default();
    
    match init() {
        Ok(()) => load_state(),
        Err(err) => tracing::error!("Game panel failed to start: {}", err),
    }
}

fn init() -> Result<()> {
    let config = config_from_location();
    config.validate()?;
    
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| PanelError::Dom("no document".to_string()))?;
    let surface = DomSurface::attach(&document, &config)?;
    tracing::info!("Game panel talking to {}", config.endpoint("/"));
    let backend = FetchBackend::new(config);
    
    let dispatcher = Rc::new(Dispatcher::new(backend, surface));
    DISPATCHER.with(|slot| *slot.borrow_mut() = Some(dispatcher));
    Ok(())
}

/// Schedule an action; overlapping calls are allowed
fn run<F, Fut>(action: F)
where
    F: FnOnce(Rc<PanelDispatcher>) -> Fut + 'static,
    Fut: Future<Output = ActionOutcome> + 'static,
{
    let Some(dispatcher) = DISPATCHER.with(|slot| slot.borrow().clone()) else {
        tracing::error!("Game panel is not initialised");
        return;
    };
    
    spawn_local(async move {
        let outcome = action(dispatcher).await;
        tracing::debug!(?outcome, "action finished");
    });
}

// ============================================================================
// Exports
// ============================================================================

#[wasm_bindgen(js_name = loadState)]
pub fn load_state() {
    run(|dispatcher| async move { dispatcher.load_state().await });
}

#[wasm_bindgen(js_name = setTheme)]
pub fn set_theme(theme: String) {
    run(move |dispatcher| async move { dispatcher.set_theme(&theme).await });
}

#[wasm_bindgen(js_name = resetGame)]
pub fn reset_game() {
    run(|dispatcher| async move { dispatcher.reset_game().await });
}

#[wasm_bindgen(js_name = buildLevel)]
pub fn build_level() {
    run(|dispatcher| async move { dispatcher.build_level().await });
}

#[wasm_bindgen]
pub fn spawn(kind: String) {
    run(move |dispatcher| async move { dispatcher.spawn(&kind).await });
}
