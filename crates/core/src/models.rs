//! Data models returned by the game backend

use serde::{Deserialize, Serialize};
use serde_json::Number;
use std::fmt;

/// Snapshot of the backend's game state, always replaced wholesale
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub theme: String,
    pub level: Level,
    pub background: String,
    #[serde(default)]
    pub enemies: Vec<Enemy>,
}

/// Level is a number on the stock backend but may arrive as a string.
/// Any JSON number is accepted; integers display without a decimal point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Level {
    Number(Number),
    Name(String),
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Number(n) => write!(f, "{}", n),
            Level::Name(name) => f.write_str(name),
        }
    }
}

impl From<i64> for Level {
    fn from(n: i64) -> Self {
        Level::Number(n.into())
    }
}

impl From<&str> for Level {
    fn from(name: &str) -> Self {
        Level::Name(name.to_string())
    }
}

/// An enemy in the current wave
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub kind: String,
    #[serde(default)]
    pub skin: String,
    pub hp: Number,
    /// Attack power; sent by the backend but not shown on the panel
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub atk: Option<Number>,
}

impl Enemy {
    /// One-line summary, e.g. `goblin (green, hp 5)`
    pub fn summary(&self) -> String {
        format!("{} ({}, hp {})", self.kind, self.skin, self.hp)
    }
}

/// Reply to every mutating action
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionResponse {
    pub message: String,
    pub state: GameState,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_backend_state_with_numeric_level() {
        let json = r#"{
            "theme": "fantasy",
            "level": 1,
            "background": "Enchanted forest",
            "enemies": [{"kind": "orc", "hp": 20, "atk": 4, "skin": "moss green"}]
        }"#;
        let state: GameState = serde_json::from_str(json).unwrap();
        assert_eq!(state.level, Level::from(1));
        assert_eq!(state.level.to_string(), "1");
        assert_eq!(state.enemies[0].atk, Some(4.into()));
        assert_eq!(state.enemies[0].summary(), "orc (moss green, hp 20)");
    }

    #[test]
    fn decodes_string_level_and_missing_skin() {
        let json = r#"{"theme":"scifi","level":"3","background":"","enemies":[{"kind":"drone","hp":18}]}"#;
        let state: GameState = serde_json::from_str(json).unwrap();
        assert_eq!(state.level.to_string(), "3");
        assert_eq!(state.enemies[0].skin, "");
        assert_eq!(state.enemies[0].atk, None);
    }

    #[test]
    fn decodes_fractional_level() {
        let json = r#"{"theme":"t","level":2.5,"background":"","enemies":[]}"#;
        let state: GameState = serde_json::from_str(json).unwrap();
        assert!(matches!(state.level, Level::Number(_)));
        assert_eq!(state.level.to_string(), "2.5");
    }

    #[test]
    fn decodes_fractional_hp() {
        let json = r#"{"theme":"t","level":1,"background":"","enemies":[{"kind":"goblin","skin":"lime","hp":12.5}]}"#;
        let state: GameState = serde_json::from_str(json).unwrap();
        assert_eq!(state.enemies[0].summary(), "goblin (lime, hp 12.5)");
    }

    #[test]
    fn rejects_response_without_state() {
        let result = serde_json::from_str::<ActionResponse>(r#"{"message":"ok"}"#);
        assert!(result.is_err());
    }
}
