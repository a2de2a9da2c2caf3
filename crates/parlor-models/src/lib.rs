pub mod options;
pub mod player;
pub mod session;

pub use options::{GameMode, GameOptions, Language, Visibility};
pub use player::{Player, Players};
pub use session::{Session, Turns};
