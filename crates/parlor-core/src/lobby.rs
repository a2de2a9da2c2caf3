//! Which sessions the public lobby shows, and in what order.

use parlor_models::Session;

use crate::game_over::{GameOverCheck, LOBBY_VIEWER};

/// Whether `session` may appear in the lobby.
///
/// Requires at least one player, options that mark the game public (or the
/// admin override), and a game that is not over. Sessions missing their
/// options are never eligible, override or not.
pub fn is_eligible<G>(session: &Session, admin_override: bool, game_over: &G) -> bool
where
    G: GameOverCheck + ?Sized,
{
    if session.player_count() == 0 {
        return false;
    }
    let Some(options) = session.options.as_ref() else {
        return false;
    };
    if !(options.is_public() || admin_override) {
        return false;
    }
    !game_over.check(LOBBY_VIEWER, session).over
}

/// Unstarted games first (fewest turns), then most recently created.
/// The sort is stable, so exact ties keep their input order.
pub fn rank(sessions: &mut [&Session]) {
    sessions.sort_by(|a, b| {
        a.turn_count()
            .cmp(&b.turn_count())
            .then_with(|| b.created_at.total_cmp(&a.created_at))
    });
}

/// Filter and rank a snapshot for display. Recomputed from scratch on every call.
pub fn list_sessions<'a, G>(
    sessions: &'a [Session],
    admin_override: bool,
    game_over: &G,
) -> Vec<&'a Session>
where
    G: GameOverCheck + ?Sized,
{
    let mut listed: Vec<&Session> = sessions
        .iter()
        .filter(|s| is_eligible(s, admin_override, game_over))
        .collect();
    rank(&mut listed);
    tracing::debug!(
        total = sessions.len(),
        listed = listed.len(),
        admin_override,
        "lobby listing computed"
    );
    listed
}
