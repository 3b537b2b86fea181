use std::sync::Arc;

use serde_json::Value;
use thiserror::Error;
use tokio::sync::RwLock;

use crate::dto::{
    player_dto::{Player, PlayerEntry, PositionInput},
    squad_dto::{SaveSummary, SeasonProgress, SeasonSquads, SquadData, TeamEntryForm, TeamSquad},
};

pub const MIN_ENTRY_ROWS: usize = 11;
pub const EXPORT_FILE_NAME: &str = "premier_league_squads.json";

/// Squads collected through the entry form since startup.
pub type SharedEntryState = Arc<RwLock<SquadData>>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EntryError {
    #[error("Please enter a team name")]
    MissingTeamName,
    #[error("Please enter at least 11 players (got {0})")]
    TooFewPlayers(usize),
}

/// Folds one submitted team into `data` and returns the new document.
///
/// The row count check runs on the raw rows; nameless rows are dropped
/// afterwards. `data` itself is never modified.
pub fn save_team(data: &SquadData, form: TeamEntryForm) -> Result<(SquadData, SaveSummary), EntryError> {
    let team_name = form.team_name.trim().to_string();
    if team_name.is_empty() {
        return Err(EntryError::MissingTeamName);
    }
    if form.players.len() < MIN_ENTRY_ROWS {
        return Err(EntryError::TooFewPlayers(form.players.len()));
    }

    let players: Vec<Player> = form
        .players
        .into_iter()
        .map(clean_entry)
        .filter(|p| !p.full_name.is_empty())
        .collect();
    let players_saved = players.len();

    let mut next = data.clone();
    let season = match next.seasons.iter().position(|s| s.season == form.season) {
        Some(i) => &mut next.seasons[i],
        None => {
            next.seasons.push(SeasonSquads { season: form.season, teams: vec![] });
            let last = next.seasons.len() - 1;
            &mut next.seasons[last]
        }
    };

    season.teams.push(TeamSquad { team_name: team_name.clone(), players });

    let summary = SaveSummary {
        team_name,
        season: form.season,
        players_saved,
        teams_in_season: season.teams.len(),
    };

    Ok((next, summary))
}

pub fn progress(data: &SquadData) -> Vec<SeasonProgress> {
    data.seasons
        .iter()
        .map(|s| SeasonProgress {
            season: s.season,
            team_count: s.teams.len(),
            team_names: s.teams.iter().map(|t| t.team_name.clone()).collect(),
        })
        .collect()
}

/// Pretty JSON (two-space indent) of a snapshot of the document.
pub fn export(data: &SquadData) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(data)
}

fn clean_entry(entry: PlayerEntry) -> Player {
    Player {
        full_name: entry.full_name.trim().to_string(),
        positions: split_positions(entry.position),
        kit_number: parse_count(&entry.kit_number),
        minutes_played: parse_count(&entry.minutes_played),
    }
}

fn split_positions(input: PositionInput) -> Vec<String> {
    let raw = match input {
        PositionInput::Codes(codes) => codes,
        PositionInput::Text(text) => text.split(',').map(str::to_string).collect(),
    };

    raw.iter()
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}

/// Leading integer of a form value, 0 for anything else or anything negative.
/// Values past `u32::MAX` saturate.
fn parse_count(value: &Value) -> u32 {
    match value {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f >= 0.0).map(|f| f.trunc() as u64))
            .map(|n| u32::try_from(n).unwrap_or(u32::MAX))
            .unwrap_or(0),
        Value::String(s) => match leading_digits(s.trim()) {
            "" => 0,
            digits => digits.parse().unwrap_or(u32::MAX),
        },
        _ => 0,
    }
}

fn leading_digits(s: &str) -> &str {
    let s = s.strip_prefix('+').unwrap_or(s);
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    &s[..end]
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn entry(name: &str, position: &str, kit: Value, minutes: Value) -> PlayerEntry {
        PlayerEntry {
            full_name: name.to_string(),
            position: PositionInput::Text(position.to_string()),
            kit_number: kit,
            minutes_played: minutes,
        }
    }

    fn form(season: i32, team_name: &str, rows: usize) -> TeamEntryForm {
        TeamEntryForm {
            season,
            team_name: team_name.to_string(),
            players: (0..rows)
                .map(|i| entry(&format!("Player {i}"), "CM", json!(i), json!("900")))
                .collect(),
        }
    }

    #[test]
    fn rejects_blank_team_name() {
        let result = save_team(&SquadData::default(), form(2023, "   ", 11));
        assert_eq!(result.unwrap_err(), EntryError::MissingTeamName);
    }

    #[test]
    fn rejects_fewer_than_eleven_rows() {
        let result = save_team(&SquadData::default(), form(2023, "Liverpool", 10));
        assert_eq!(result.unwrap_err(), EntryError::TooFewPlayers(10));
    }

    #[test]
    fn row_count_is_checked_before_dropping_nameless_rows() {
        let mut submitted = form(2023, "Liverpool", 11);
        submitted.players[3].full_name = String::new();

        let (data, summary) = save_team(&SquadData::default(), submitted).unwrap();
        assert_eq!(summary.players_saved, 10);
        assert_eq!(data.roster("Liverpool", 2023).unwrap().len(), 10);
    }

    #[test]
    fn cleans_positions_and_numbers() {
        let mut submitted = form(2024, "Arsenal", 11);
        submitted.players[0] = entry("Bukayo Saka", " RW, RM ,, ", json!("7"), json!("2,860"));
        submitted.players[1] = entry("Declan Rice", "CDM", json!("abc"), json!(-5));
        submitted.players[2] = PlayerEntry {
            full_name: "Martin Odegaard".to_string(),
            position: PositionInput::Codes(vec!["CAM".into(), " ".into(), "CM".into()]),
            kit_number: json!(8.9),
            minutes_played: Value::Null,
        };

        let (data, _) = save_team(&SquadData::default(), submitted).unwrap();
        let roster = data.roster("Arsenal", 2024).unwrap();

        assert_eq!(roster[0].positions, vec!["RW", "RM"]);
        assert_eq!(roster[0].kit_number, 7);
        assert_eq!(roster[0].minutes_played, 2);
        assert_eq!(roster[1].kit_number, 0);
        assert_eq!(roster[1].minutes_played, 0);
        assert_eq!(roster[2].positions, vec!["CAM", "CM"]);
        assert_eq!(roster[2].kit_number, 8);
        assert_eq!(roster[2].minutes_played, 0);
    }

    #[test]
    fn oversized_numbers_saturate() {
        assert_eq!(parse_count(&json!("99999999999")), u32::MAX);
        assert_eq!(parse_count(&json!("4294967295")), u32::MAX);
        assert_eq!(parse_count(&json!("4294967294 mins")), 4_294_967_294);
        assert_eq!(parse_count(&json!(5_000_000_000u64)), u32::MAX);
        assert_eq!(parse_count(&json!(1e12)), u32::MAX);
        assert_eq!(parse_count(&json!("")), 0);
    }

    #[test]
    fn appends_to_existing_season_and_creates_new_ones() {
        let (data, first) = save_team(&SquadData::default(), form(2023, "Liverpool", 11)).unwrap();
        let (data, second) = save_team(&data, form(2023, "Chelsea", 12)).unwrap();
        let (data, third) = save_team(&data, form(2025, "Fulham", 11)).unwrap();

        assert_eq!(first.teams_in_season, 1);
        assert_eq!(second.teams_in_season, 2);
        assert_eq!(third.teams_in_season, 1);
        assert_eq!(data.seasons.len(), 2);

        let overview = progress(&data);
        assert_eq!(overview[0].season, 2023);
        assert_eq!(overview[0].team_names, vec!["Liverpool", "Chelsea"]);
        assert_eq!(overview[1].team_count, 1);
    }

    #[test]
    fn input_document_is_left_untouched() {
        let (before, _) = save_team(&SquadData::default(), form(2023, "Liverpool", 11)).unwrap();
        let snapshot = before.clone();

        let _ = save_team(&before, form(2023, "Everton", 11)).unwrap();
        assert_eq!(before, snapshot);
    }

    #[test]
    fn export_is_two_space_json_that_reads_back() {
        let (data, _) = save_team(&SquadData::default(), form(2023, "Liverpool", 11)).unwrap();
        let text = export(&data).unwrap();

        assert!(text.starts_with("{\n  \"seasons\": ["));
        assert!(text.contains("\"teamName\": \"Liverpool\""));
        assert!(text.contains("\"minutesPlayed\": 900"));

        let parsed: SquadData = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, data);
    }
}
