use serde::{Deserialize, Serialize};

use crate::dto::player_dto::{Player, PlayerEntry};

/// The squads document: bundled with the app and produced by the entry tool.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct SquadData {
    pub seasons: Vec<SeasonSquads>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct SeasonSquads {
    pub season: i32,
    pub teams: Vec<TeamSquad>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct TeamSquad {
    pub team_name: String,
    pub players: Vec<Player>,
}

impl SquadData {
    pub fn season(&self, season: i32) -> Option<&SeasonSquads> {
        self.seasons.iter().find(|s| s.season == season)
    }

    /// The roster recorded for a team in a season, if there is one.
    pub fn roster(&self, team_name: &str, season: i32) -> Option<&[Player]> {
        self.season(season)?
            .teams
            .iter()
            .find(|t| t.team_name == team_name)
            .map(|t| t.players.as_slice())
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamEntryForm {
    pub season: i32,
    #[serde(default)]
    pub team_name: String,
    #[serde(default)]
    pub players: Vec<PlayerEntry>,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SaveSummary {
    pub team_name: String,
    pub season: i32,
    pub players_saved: usize,
    pub teams_in_season: usize,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SeasonProgress {
    pub season: i32,
    pub team_count: usize,
    pub team_names: Vec<String>,
}
