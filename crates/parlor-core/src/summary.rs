use parlor_models::{Language, Session};
use serde::Serialize;

/// Glyph shown for any language without its own flag.
pub const FALLBACK_GLYPH: &str = "🇺🇸";

/// Display-ready view of one session. Carries data only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSummary {
    pub id: String,
    /// Whether the record carries a roster at all, even an empty one.
    pub has_players: bool,
    /// Lobby link to the game page.
    pub href: String,
    pub member_names: Vec<String>,
    pub mode_label: String,
    pub language_glyph: &'static str,
    pub started: bool,
}

impl SessionSummary {
    pub fn members_display(&self) -> String {
        self.member_names.join(", ")
    }
}

pub fn project(session: &Session) -> SessionSummary {
    let member_names = session
        .players
        .iter()
        .flat_map(|players| players.values())
        .map(|player| player.name.clone())
        .collect();
    let options = session.options.as_ref();

    SessionSummary {
        id: session.id.clone(),
        has_players: session.players.is_some(),
        href: format!("/{}", session.id),
        member_names,
        mode_label: options
            .and_then(|o| o.mode.as_ref())
            .map(|mode| mode.as_str().to_string())
            .unwrap_or_default(),
        language_glyph: language_glyph(options.and_then(|o| o.language.as_ref())),
        started: session.is_started(),
    }
}

pub fn language_glyph(language: Option<&Language>) -> &'static str {
    match language {
        Some(Language::En) => "🇬🇧",
        Some(Language::Fr) => "🇫🇷",
        Some(Language::De) => "🇩🇪",
        Some(Language::Es) => "🇪🇸",
        _ => FALLBACK_GLYPH,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn session(value: serde_json::Value) -> Session {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn projects_a_running_game() {
        let summary = project(&session(json!({
            "id": "quiet-fox",
            "createdAt": 100,
            "players": { "b": { "name": "Bo" }, "a": { "name": "Al" }, "c": { "name": "Cy" } },
            "turns": [{}, {}],
            "options": { "mode": "duet", "language": "de", "private": "public" },
        })));

        assert_eq!(summary.id, "quiet-fox");
        assert!(summary.has_players);
        assert_eq!(summary.href, "/quiet-fox");
        assert_eq!(summary.member_names, ["Bo", "Al", "Cy"]);
        assert_eq!(summary.members_display(), "Bo, Al, Cy");
        assert_eq!(summary.mode_label, "duet");
        assert_eq!(summary.language_glyph, "🇩🇪");
        assert!(summary.started);
    }

    #[test]
    fn bare_session_falls_back_everywhere() {
        let summary = project(&session(json!({ "id": "bare" })));
        assert!(!summary.has_players);
        assert!(summary.member_names.is_empty());
        assert_eq!(summary.members_display(), "");
        assert_eq!(summary.mode_label, "");
        assert_eq!(summary.language_glyph, FALLBACK_GLYPH);
        assert!(!summary.started);
    }

    #[test]
    fn empty_roster_is_still_a_roster() {
        let summary = project(&session(json!({ "id": "x", "players": {} })));
        assert!(summary.has_players);
        assert!(summary.member_names.is_empty());
    }

    #[test]
    fn unknown_modes_pass_through() {
        let summary = project(&session(json!({
            "id": "x",
            "options": { "mode": "speed" },
        })));
        assert_eq!(summary.mode_label, "speed");
    }

    #[test]
    fn glyph_table() {
        assert_eq!(language_glyph(Some(&Language::En)), "🇬🇧");
        assert_eq!(language_glyph(Some(&Language::Fr)), "🇫🇷");
        assert_eq!(language_glyph(Some(&Language::De)), "🇩🇪");
        assert_eq!(language_glyph(Some(&Language::Es)), "🇪🇸");
    }

    #[test]
    fn unsupported_language_uses_the_absent_fallback() {
        let italian = Language::from("it".to_string());
        assert_eq!(language_glyph(Some(&italian)), language_glyph(None));
    }

    #[test]
    fn serializes_camel_case() {
        let value = serde_json::to_value(project(&session(json!({ "id": "x" })))).unwrap();
        assert_eq!(value["memberNames"], json!([]));
        assert_eq!(value["languageGlyph"], FALLBACK_GLYPH);
        assert_eq!(value["started"], false);
    }
}
