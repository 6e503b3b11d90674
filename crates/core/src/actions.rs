//! Panel actions and the HTTP requests they map to

/// Themes the stock backend knows about. Not enforced on the client.
pub const KNOWN_THEMES: [&str; 2] = ["fantasy", "scifi"];

/// Enemy kinds the stock backend has prototypes for. Not enforced on the client;
/// the backend answers unknown kinds with an explanatory message.
pub const KNOWN_ENEMIES: [&str; 6] = ["orc", "dragon", "goblin", "drone", "android", "alien"];

/// A single request/response/render cycle the panel can trigger
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Fetch the current state on start-up
    LoadState,
    
    /// Switch the backend theme
    SetTheme { theme: String },
    
    /// Clear all enemies
    Reset,
    
    /// Build the next level for the current theme
    BuildLevel,
    
    /// Spawn one enemy of the given kind
    Spawn { kind: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

/// Transport-neutral description of one HTTP call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Method,
    /// Path relative to the backend base URL, always starting with `/`
    pub path: String,
    /// JSON body, if any
    pub body: Option<String>,
}

/// Status and raw body of a completed HTTP call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn ok(body: impl Into<String>) -> Self {
        Self { status: 200, body: body.into() }
    }
    
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

impl Action {
    pub fn set_theme(theme: impl Into<String>) -> Self {
        Action::SetTheme { theme: theme.into() }
    }
    
    pub fn spawn(kind: impl Into<String>) -> Self {
        Action::Spawn { kind: kind.into() }
    }
    
    /// Short human label used in failure lines and diagnostics
    pub fn label(&self) -> String {
        match self {
            Action::LoadState => "load state".to_string(),
            Action::SetTheme { theme } => format!("set theme {}", theme),
            Action::Reset => "reset".to_string(),
            Action::BuildLevel => "build level".to_string(),
            Action::Spawn { kind } => format!("spawn {}", kind),
        }
    }
    
    pub fn method(&self) -> Method {
        match self {
            Action::LoadState => Method::Get,
            _ => Method::Post,
        }
    }
    
    pub fn path(&self) -> String {
        match self {
            Action::LoadState => "/state".to_string(),
            Action::SetTheme { .. } => "/set-theme".to_string(),
            Action::Reset => "/reset".to_string(),
            Action::BuildLevel => "/build-level".to_string(),
            Action::Spawn { kind } => format!("/spawn/{}", urlencoding::encode(kind)),
        }
    }
    
    /// Whether the reply is a `{message, state}` envelope rather than a bare state
    pub fn returns_message(&self) -> bool {
        !matches!(self, Action::LoadState)
    }
    
    pub fn to_request(&self) -> HttpRequest {
        let body = match self {
            Action::SetTheme { theme } => Some(serde_json::json!({ "theme": theme }).to_string()),
            _ => None,
        };
        
        HttpRequest {
            method: self.method(),
            path: self.path(),
            body,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_theme_posts_json_body() {
        let request = Action::set_theme("dark").to_request();
        assert_eq!(request.method, Method::Post);
        assert_eq!(request.path, "/set-theme");
        assert_eq!(request.body.as_deref(), Some(r#"{"theme":"dark"}"#));
    }

    #[test]
    fn set_theme_body_escapes_json_special_characters() {
        let request = Action::set_theme("dark \"night\"").to_request();
        let body: serde_json::Value = serde_json::from_str(request.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, serde_json::json!({ "theme": "dark \"night\"" }));
    }

    #[test]
    fn spawn_uses_templated_path_without_body() {
        let request = Action::spawn("goblin").to_request();
        assert_eq!(request.method, Method::Post);
        assert_eq!(request.path, "/spawn/goblin");
        assert_eq!(request.body, None);
    }

    #[test]
    fn spawn_kind_is_a_single_path_segment() {
        assert_eq!(Action::spawn("../reset").path(), "/spawn/..%2Freset");
    }

    #[test]
    fn load_state_is_a_bodyless_get() {
        let request = Action::LoadState.to_request();
        assert_eq!(request.method, Method::Get);
        assert_eq!(request.path, "/state");
        assert_eq!(request.body, None);
        assert!(!Action::LoadState.returns_message());
    }

    #[test]
    fn reset_and_build_level_post_without_body() {
        for (action, path) in [(Action::Reset, "/reset"), (Action::BuildLevel, "/build-level")] {
            let request = action.to_request();
            assert_eq!(request.method, Method::Post);
            assert_eq!(request.path, path);
            assert!(request.body.is_none());
            assert!(action.returns_message());
        }
    }
}
