//! Client action dispatcher
//! 
//! Sends one action to the backend, then routes the reply: the message goes to
//! the activity log and the state replaces the rendered view. The dispatcher
//! owns the latest `GameState`; the surface only ever shows a projection of it.
//!
//! Actions may overlap. Each one takes a sequence number when it starts and its
//! state is only rendered if nothing newer has been applied in the meantime.

use std::cell::{Cell, RefCell};

use crate::actions::Action;
use crate::backend::{Backend, Surface};
use crate::error::{PanelError, Result};
use crate::activity_log::ActivityLog;
use crate::models::{ActionResponse, GameState};

/// What happened to a dispatched action
#[derive(Debug, Clone, PartialEq)]
pub enum ActionOutcome {
    /// The reply's state is now the current state
    Applied,
    /// A newer action's state was applied first; this reply's state was dropped
    Stale,
    /// The request failed; the previous state is still shown
    Failed(PanelError),
}

impl ActionOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, ActionOutcome::Applied)
    }
}

pub struct Dispatcher<B, S> {
    backend: B,
    surface: S,
    state: RefCell<Option<GameState>>,
    log: RefCell<ActivityLog>,
    next_seq: Cell<u64>,
    applied_seq: Cell<u64>,
}

impl<B: Backend, S: Surface> Dispatcher<B, S> {
    pub fn new(backend: B, surface: S) -> Self {
        Self {
            backend,
            surface,
            state: RefCell::new(None),
            log: RefCell::new(ActivityLog::new()),
            next_seq: Cell::new(0),
            applied_seq: Cell::new(0),
        }
    }
    
    // ------------------------------------------------------------------------
    // Actions
    // ------------------------------------------------------------------------
    
    pub async fn load_state(&self) -> ActionOutcome {
        self.dispatch(Action::LoadState).await
    }
    
    pub async fn set_theme(&self, theme: &str) -> ActionOutcome {
        self.dispatch(Action::set_theme(theme)).await
    }
    
    pub async fn reset_game(&self) -> ActionOutcome {
        self.dispatch(Action::Reset).await
    }
    
    pub async fn build_level(&self) -> ActionOutcome {
        self.dispatch(Action::BuildLevel).await
    }
    
    pub async fn spawn(&self, kind: &str) -> ActionOutcome {
        self.dispatch(Action::spawn(kind)).await
    }
    
    /// Run one full request/response/render cycle
    pub async fn dispatch(&self, action: Action) -> ActionOutcome {
        let seq = self.next_seq.get() + 1;
        self.next_seq.set(seq);
        tracing::debug!(seq, action = %action.label(), "dispatching");
        
        match self.fetch(&action).await {
            Ok((message, state)) => self.apply(seq, message, state),
            Err(err) => {
                tracing::warn!(seq, action = %action.label(), "request failed: {}", err);
                self.log(&format!("Request failed ({}): {}", action.label(), err));
                ActionOutcome::Failed(err)
            }
        }
    }
    
    // ------------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------------
    
    /// Latest applied state, if any action has succeeded yet
    pub fn state(&self) -> Option<GameState> {
        self.state.borrow().clone()
    }
    
    pub fn log_text(&self) -> String {
        self.log.borrow().text().to_string()
    }
    
    /// Snapshot of the activity log
    pub fn activity_log(&self) -> ActivityLog {
        self.log.borrow().clone()
    }
    
    pub fn backend(&self) -> &B {
        &self.backend
    }
    
    pub fn surface(&self) -> &S {
        &self.surface
    }
    
    // ------------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------------
    
    async fn fetch(&self, action: &Action) -> Result<(Option<String>, GameState)> {
        let request = action.to_request();
        let response = self.backend.execute(&request).await?;
        
        if !response.is_success() {
            return Err(PanelError::Status {
                status: response.status,
                body: response.body,
            });
        }
        
        if action.returns_message() {
            let reply: ActionResponse = serde_json::from_str(&response.body)?;
            Ok((Some(reply.message), reply.state))
        } else {
            let state: GameState = serde_json::from_str(&response.body)?;
            Ok((None, state))
        }
    }
    
    fn apply(&self, seq: u64, message: Option<String>, state: GameState) -> ActionOutcome {
        // The backend did act on the request, so its message is logged even when
        // the accompanying state has been superseded.
        if let Some(message) = message {
            self.log(&message);
        }
        
        if seq <= self.applied_seq.get() {
            tracing::debug!(seq, applied = self.applied_seq.get(), "discarding stale state");
            return ActionOutcome::Stale;
        }
        
        self.applied_seq.set(seq);
        self.surface.show_state(&state);
        tracing::info!(seq, theme = %state.theme, level = %state.level, enemies = state.enemies.len(), "state applied");
        *self.state.borrow_mut() = Some(state);
        ActionOutcome::Applied
    }
    
    fn log(&self, message: &str) {
        let mut log = self.log.borrow_mut();
        let text = log.log(message);
        self.surface.show_log(text);
    }
}
