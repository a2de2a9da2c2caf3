use serde::{Deserialize, Deserializer, Serialize};

use crate::options::GameOptions;
use crate::player::Players;

/// One game instance as stored by the game service.
///
/// `players` and `options` are optional because records written by older
/// clients (or half-created games) may lack them. Such sessions are never
/// listed in the lobby.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: String,
    /// Creation time in epoch milliseconds. Any JSON number is accepted.
    #[serde(default)]
    pub created_at: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub players: Option<Players>,
    #[serde(default)]
    pub turns: Turns,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<GameOptions>,
}

impl Session {
    pub fn turn_count(&self) -> usize {
        self.turns.len()
    }

    /// A session is started once its first turn has been played.
    pub fn is_started(&self) -> bool {
        self.turn_count() > 0
    }

    pub fn player_count(&self) -> usize {
        self.players.as_ref().map_or(0, |players| players.len())
    }
}

/// Turn events of a session. Only the count matters to the lobby.
///
/// Accepts a JSON array, an object (values taken in document order, as written by
/// the realtime store when it converts sparse arrays) or `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Turns(pub Vec<serde_json::Value>);

impl Turns {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'de> Deserialize<'de> for Turns {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<serde_json::Value>::deserialize(deserializer)? {
            None | Some(serde_json::Value::Null) => Ok(Turns::default()),
            Some(serde_json::Value::Array(items)) => Ok(Turns(items)),
            Some(serde_json::Value::Object(map)) => Ok(Turns(map.into_iter().map(|(_, v)| v).collect())),
            Some(other) => Err(serde::de::Error::custom(format!(
                "expected turns as an array or object, got {other}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{GameMode, Visibility};

    #[test]
    fn decodes_full_record() {
        let session: Session = serde_json::from_str(
            r#"{
                "id": "brave-otter",
                "createdAt": 1588000000000,
                "players": {"p2": {"name": "Zoe"}, "p1": {"name": "Al"}},
                "turns": [{"type": "hint"}],
                "options": {"mode": "classic", "language": "en", "private": "public"}
            }"#,
        )
        .unwrap();

        assert_eq!(session.id, "brave-otter");
        assert_eq!(session.turn_count(), 1);
        assert!(session.is_started());
        assert_eq!(session.player_count(), 2);
        let names: Vec<_> = session
            .players
            .as_ref()
            .unwrap()
            .values()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, ["Zoe", "Al"]);
        let options = session.options.as_ref().unwrap();
        assert_eq!(options.mode, Some(GameMode::Classic));
        assert_eq!(options.visibility, Some(Visibility::Public));
        assert_eq!(session.created_at, 1_588_000_000_000.0);
    }

    #[test]
    fn missing_optional_parts_decode_to_empty() {
        let session: Session = serde_json::from_str(r#"{"id": "x"}"#).unwrap();
        assert_eq!(session.created_at, 0.0);
        assert!(session.players.is_none());
        assert!(session.options.is_none());
        assert!(!session.is_started());
        assert_eq!(session.player_count(), 0);
    }

    #[test]
    fn turns_accept_object_and_null() {
        let session: Session =
            serde_json::from_str(r#"{"id": "x", "turns": {"0": {}, "1": {}, "2": {}}}"#).unwrap();
        assert_eq!(session.turn_count(), 3);

        let session: Session = serde_json::from_str(r#"{"id": "x", "turns": null}"#).unwrap();
        assert!(session.turns.is_empty());
    }

    #[test]
    fn fractional_created_at_decodes() {
        let session: Session =
            serde_json::from_str(r#"{"id": "x", "createdAt": 1588000000000.5}"#).unwrap();
        assert_eq!(session.created_at, 1_588_000_000_000.5);
    }

    #[test]
    fn scalar_turns_are_rejected() {
        let result = serde_json::from_str::<Session>(r#"{"id": "x", "turns": 4}"#);
        assert!(result.is_err());
    }

    #[test]
    fn record_without_id_is_rejected() {
        let result = serde_json::from_str::<Session>(r#"{"createdAt": 1}"#);
        assert!(result.is_err());
    }
}
