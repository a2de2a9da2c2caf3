use chrono::{DateTime, Utc};
use parlor_core::SessionSummary;
use serde::Serialize;

pub const EMPTY_LOBBY: &str =
    "There are currently no public games. Create one and invite friends!";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingReport<'a> {
    pub generated_at: DateTime<Utc>,
    /// Sessions in the snapshot, before filtering.
    pub total: usize,
    pub listed: usize,
    pub games: &'a [SessionSummary],
}

/// One block per game, blank line between games.
pub fn text(rows: &[SessionSummary]) -> String {
    if rows.is_empty() {
        return EMPTY_LOBBY.to_string();
    }
    rows.iter().map(row).collect::<Vec<_>>().join("\n\n")
}

fn row(summary: &SessionSummary) -> String {
    let mut out = format!("{}  {}", summary.id, summary.href);
    if summary.has_players {
        out.push_str(&format!("\n👤 {}", summary.members_display()));
    }
    out.push_str(&format!("\n{} {}", summary.mode_label, summary.language_glyph));
    if summary.started {
        out.push_str("  started");
    }
    out
}

pub fn json(total: usize, rows: &[SessionSummary], generated_at: DateTime<Utc>) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&ListingReport {
        generated_at,
        total,
        listed: rows.len(),
        games: rows,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(id: &str, names: &[&str], started: bool) -> SessionSummary {
        SessionSummary {
            id: id.to_string(),
            has_players: !names.is_empty(),
            href: format!("/{id}"),
            member_names: names.iter().map(|n| n.to_string()).collect(),
            mode_label: "classic".into(),
            language_glyph: "🇬🇧",
            started,
        }
    }

    #[test]
    fn empty_lobby_message() {
        assert_eq!(text(&[]), EMPTY_LOBBY);
    }

    #[test]
    fn renders_rows() {
        let out = text(&[summary("a", &["Al", "Bo"], false), summary("b", &[], true)]);
        assert_eq!(
            out,
            "a  /a\n👤 Al, Bo\nclassic 🇬🇧\n\nb  /b\nclassic 🇬🇧  started"
        );
    }

    #[test]
    fn empty_roster_still_shows_the_player_line() {
        let mut row = summary("c", &[], false);
        row.has_players = true;
        assert_eq!(text(&[row]), "c  /c\n👤 \nclassic 🇬🇧");
    }

    #[test]
    fn json_report_counts() {
        let generated_at = DateTime::from_timestamp(1_600_000_000, 0).unwrap();
        let rows = [summary("a", &["Al"], true)];
        let value: serde_json::Value =
            serde_json::from_str(&json(4, &rows, generated_at).unwrap()).unwrap();

        assert_eq!(value["total"], 4);
        assert_eq!(value["listed"], 1);
        assert_eq!(value["generatedAt"], "2020-09-13T12:26:40Z");
        assert_eq!(value["games"][0]["memberNames"][0], "Al");
        assert_eq!(value["games"][0]["href"], "/a");
    }
}
