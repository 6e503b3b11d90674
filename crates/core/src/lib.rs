//! Core shared types and traits for the game panel
//! 
//! This crate contains:
//! - Data models returned by the game backend
//! - The fixed set of panel actions and their HTTP shape
//! - Error types
//! - The state renderer and the activity log
//! - The action dispatcher, generic over `Backend` and `Surface`

pub mod models;
pub mod actions;
pub mod error;
pub mod config;
pub mod render;
pub mod activity_log;
pub mod backend;
pub mod dispatcher;

pub use models::*;
pub use actions::*;
pub use error::*;
pub use config::*;
pub use render::*;
pub use activity_log::*;
pub use backend::*;
pub use dispatcher::*;
