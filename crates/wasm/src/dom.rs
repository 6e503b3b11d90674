//! DOM surface: the `log` and `state` regions of the host page

use game_panel_core::{render_state, GameState, PanelConfig, PanelError, Result, Surface};
use web_sys::{Document, Element};

pub struct DomSurface {
    log: Element,
    state: Element,
}

impl DomSurface {
    /// Resolve both regions up front so a misconfigured page fails at start-up
    pub fn attach(document: &Document, config: &PanelConfig) -> Result<Self> {
        let log = find_element(document, &config.log_element)?;
        let state = find_element(document, &config.state_element)?;
        Ok(Self { log, state })
    }
}

fn find_element(document: &Document, id: &str) -> Result<Element> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| PanelError::Dom(format!("missing element #{}", id)))
}

impl Surface for DomSurface {
    fn show_log(&self, text: &str) {
        self.log.set_text_content(Some(text));
    }
    
    fn show_state(&self, state: &GameState) {
        self.state.set_inner_html(&render_state(state));
    }
}
