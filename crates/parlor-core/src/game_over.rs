use std::collections::HashSet;

use parlor_models::Session;

/// Viewer id used for lobby-level checks. The lobby never personalises the
/// game-over state for a particular player.
pub const LOBBY_VIEWER: &str = "";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GameOver {
    pub over: bool,
}

/// Decides whether a session has ended, as seen by `viewer_id`.
///
/// The rules live with the game engine; the lobby only consumes the verdict.
pub trait GameOverCheck {
    fn check(&self, viewer_id: &str, session: &Session) -> GameOver;
}

impl<F> GameOverCheck for F
where
    F: Fn(&str, &Session) -> GameOver,
{
    fn check(&self, viewer_id: &str, session: &Session) -> GameOver {
        self(viewer_id, session)
    }
}

/// Reports every session as still running.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeverOver;

impl GameOverCheck for NeverOver {
    fn check(&self, _viewer_id: &str, _session: &Session) -> GameOver {
        GameOver { over: false }
    }
}

/// Reports a fixed set of session ids as ended.
#[derive(Debug, Clone, Default)]
pub struct EndedSessions {
    ids: HashSet<String>,
}

impl EndedSessions {
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ids: ids.into_iter().map(Into::into).collect(),
        }
    }
}

impl GameOverCheck for EndedSessions {
    fn check(&self, _viewer_id: &str, session: &Session) -> GameOver {
        GameOver {
            over: self.ids.contains(&session.id),
        }
    }
}
