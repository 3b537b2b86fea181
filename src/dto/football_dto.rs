use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// Shapes returned by football-data.org v4. Only the fields the app reads.

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Competition {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub plan: Option<String>,
    #[serde(default)]
    pub emblem: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CompetitionsResponse {
    #[serde(default)]
    pub competitions: Vec<Competition>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TeamSummary {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub short_name: Option<String>,
    #[serde(default)]
    pub tla: Option<String>,
    #[serde(default)]
    pub crest: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct TeamsResponse {
    #[serde(default)]
    pub teams: Vec<TeamSummary>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SquadMember {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub date_of_birth: Option<String>,
    #[serde(default)]
    pub nationality: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TeamInfo {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub crest: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub venue: Option<String>,
    #[serde(default)]
    pub founded: Option<i32>,
    #[serde(default)]
    pub squad: Vec<SquadMember>,
}

#[derive(Debug, Deserialize)]
pub struct MatchesResponse {
    #[serde(default)]
    pub matches: Vec<Match>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub id: i64,
    #[serde(default)]
    pub utc_date: Option<DateTime<Utc>>,
    pub competition: NamedRef,
    pub home_team: NamedRef,
    pub away_team: NamedRef,
    #[serde(default)]
    pub score: Score,
}

#[derive(Debug, Deserialize, Clone)]
pub struct NamedRef {
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct Score {
    #[serde(default)]
    pub full_time: ScoreLine,
}

#[derive(Debug, Deserialize, Clone, Copy, Default)]
pub struct ScoreLine {
    pub home: Option<u32>,
    pub away: Option<u32>,
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    HomeWin,
    AwayWin,
    Draw,
    Pending,
}

/// A fixture row as the club page shows it.
#[derive(Debug, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct FixtureView {
    pub id: i64,
    pub competition: String,
    pub kickoff: Option<DateTime<Utc>>,
    pub home_team: String,
    pub away_team: String,
    pub home_score: Option<u32>,
    pub away_score: Option<u32>,
    pub outcome: Outcome,
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct SeasonOption {
    pub season: i32,
    pub label: String,
}
