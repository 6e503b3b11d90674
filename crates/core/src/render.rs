//! State renderer: pure projections of a `GameState`

use std::fmt::Write;

use crate::models::{Enemy, GameState};

/// Shown in place of the enemy list when there are none
pub const EMPTY_PLACEHOLDER: &str = "—";

/// Comma-joined enemy summaries in server order, or the placeholder
pub fn enemy_summary(enemies: &[Enemy]) -> String {
    if enemies.is_empty() {
        return EMPTY_PLACEHOLDER.to_string();
    }
    enemies
        .iter()
        .map(Enemy::summary)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Escape text for inclusion in HTML element content
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Markup for the state region. Replaces the region's content in full.
pub fn render_state(state: &GameState) -> String {
    let mut html = String::new();
    let _ = writeln!(
        html,
        r#"<div><span class="tag">Theme:</span> <strong>{}</strong></div>"#,
        escape_html(&state.theme)
    );
    let _ = writeln!(
        html,
        r#"<div><span class="tag">Level:</span> <strong>{}</strong></div>"#,
        escape_html(&state.level.to_string())
    );
    let _ = writeln!(
        html,
        r#"<div><span class="tag">Background:</span> {}</div>"#,
        escape_html(&state.background)
    );
    let _ = writeln!(
        html,
        r#"<div><span class="tag">Enemies:</span> {}</div>"#,
        escape_html(&enemy_summary(&state.enemies))
    );
    html
}

/// Plain-text rendering for terminals
pub fn render_text(state: &GameState) -> String {
    format!(
        "Theme:      {}\nLevel:      {}\nBackground: {}\nEnemies:    {}\n",
        state.theme,
        state.level,
        state.background,
        enemy_summary(&state.enemies),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Level;

    fn enemy(kind: &str, skin: &str, hp: i64) -> Enemy {
        Enemy { kind: kind.to_string(), skin: skin.to_string(), hp: hp.into(), atk: None }
    }

    fn state(enemies: Vec<Enemy>) -> GameState {
        GameState {
            theme: "fantasy".to_string(),
            level: Level::from(2),
            background: "Enchanted forest".to_string(),
            enemies,
        }
    }

    #[test]
    fn renders_theme_level_and_enemies_in_order() {
        let html = render_state(&state(vec![
            enemy("orc", "moss", 20),
            enemy("goblin", "lime", 12),
        ]));
        assert!(html.contains("<strong>fantasy</strong>"));
        assert!(html.contains("<strong>2</strong>"));
        assert!(html.contains("Enchanted forest"));
        assert!(html.contains("orc (moss, hp 20), goblin (lime, hp 12)"));
        assert!(!html.contains(EMPTY_PLACEHOLDER));
    }

    #[test]
    fn empty_enemy_list_shows_placeholder() {
        let html = render_state(&state(vec![]));
        assert!(html.contains(EMPTY_PLACEHOLDER));
        assert!(!html.contains("hp "));
    }

    #[test]
    fn backend_text_is_escaped() {
        let mut s = state(vec![enemy("<b>orc</b>", "red & black", 1)]);
        s.background = "<script>".to_string();
        let html = render_state(&s);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("&lt;b&gt;orc&lt;/b&gt; (red &amp; black, hp 1)"));
    }

    #[test]
    fn text_rendering_has_one_row_per_field() {
        let text = render_text(&state(vec![enemy("dragon", "crimson", 60)]));
        let rows: Vec<&str> = text.lines().collect();
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[3], "Enemies:    dragon (crimson, hp 60)");
    }
}
