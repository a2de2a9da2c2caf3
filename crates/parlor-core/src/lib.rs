pub mod error;
pub mod game_over;
pub mod lobby;
pub mod snapshot;
pub mod summary;

pub use error::CoreError;
pub use game_over::{EndedSessions, GameOver, GameOverCheck, NeverOver, LOBBY_VIEWER};
pub use lobby::{is_eligible, list_sessions, rank};
pub use summary::{language_glyph, project, SessionSummary};
