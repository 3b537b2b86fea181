use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{error, info};

use crate::{
    config::AppConfig,
    dto::football_dto::{
        Competition, CompetitionsResponse, Match, MatchesResponse, SquadMember, TeamInfo,
        TeamSummary, TeamsResponse,
    },
    error::{ApiError, ApiResult},
};

/// League codes offered on the home page.
pub const MAIN_LEAGUES: [&str; 5] = ["PL", "PD", "SA", "BL1", "FL1"];

/// Thin client for the football-data.org v4 API.
#[derive(Debug, Clone)]
pub struct FootballDataClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl FootballDataClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.football_data_base_url.trim_end_matches('/').to_string(),
            api_key: config.football_data_api_key.clone(),
        }
    }

    async fn get<T: DeserializeOwned>(&self, path: &str, what: &'static str) -> ApiResult<T> {
        let url = format!("{}{}", self.base_url, path);
        info!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .header("X-Auth-Token", &self.api_key)
            .send()
            .await?;

        if !response.status().is_success() {
            error!("{}: upstream answered {}", what, response.status());
            return Err(ApiError::Upstream(what.to_string()));
        }

        Ok(response.json::<T>().await?)
    }

    pub async fn fetch_leagues(&self) -> ApiResult<Vec<Competition>> {
        let data: CompetitionsResponse = self.get("/competitions", "Failed to fetch leagues").await?;
        Ok(data.competitions.into_iter().filter(is_league).collect())
    }

    pub async fn fetch_main_leagues(&self) -> ApiResult<Vec<Competition>> {
        let leagues = self.fetch_leagues().await?;
        Ok(leagues.into_iter().filter(is_main_league).collect())
    }

    pub async fn fetch_teams_by_league(&self, league_code: &str) -> ApiResult<Vec<TeamSummary>> {
        let data: TeamsResponse = self
            .get(&format!("/competitions/{}/teams", league_code), "Failed to fetch teams")
            .await?;
        Ok(data.teams)
    }

    pub async fn fetch_team_matches(&self, team_id: i64, season: i32) -> ApiResult<Vec<Match>> {
        let data: MatchesResponse = self
            .get(
                &format!("/teams/{}/matches?season={}", team_id, season),
                "Failed to fetch team matches",
            )
            .await?;
        Ok(data.matches)
    }

    pub async fn fetch_team_info(&self, team_id: i64) -> ApiResult<TeamInfo> {
        self.get(&format!("/teams/{}", team_id), "Failed to fetch team info").await
    }

    pub async fn fetch_team_squad(&self, team_id: i64) -> ApiResult<Vec<SquadMember>> {
        let team: TeamInfo = self
            .get(&format!("/teams/{}", team_id), "Failed to fetch team squad")
            .await?;
        Ok(team.squad)
    }
}

fn is_league(competition: &Competition) -> bool {
    competition.plan.as_deref() == Some("TIER_ONE") || competition.kind.as_deref() == Some("LEAGUE")
}

fn is_main_league(competition: &Competition) -> bool {
    competition
        .code
        .as_deref()
        .is_some_and(|code| MAIN_LEAGUES.contains(&code))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn competition(code: &str, kind: &str, plan: &str) -> Competition {
        Competition {
            id: 1,
            name: code.to_string(),
            code: Some(code.to_string()),
            kind: Some(kind.to_string()),
            plan: Some(plan.to_string()),
            emblem: None,
        }
    }

    #[test]
    fn league_filter_keeps_tier_one_or_league_type() {
        assert!(is_league(&competition("CL", "CUP", "TIER_ONE")));
        assert!(is_league(&competition("ELC", "LEAGUE", "TIER_TWO")));
        assert!(!is_league(&competition("FAC", "CUP", "TIER_FOUR")));
    }

    #[test]
    fn main_leagues_are_the_big_five() {
        assert!(is_main_league(&competition("PL", "LEAGUE", "TIER_ONE")));
        assert!(is_main_league(&competition("BL1", "LEAGUE", "TIER_ONE")));
        assert!(!is_main_league(&competition("DED", "LEAGUE", "TIER_ONE")));
    }

    #[test]
    fn competitions_parse_with_missing_fields() {
        let data: CompetitionsResponse = serde_json::from_str(
            r#"{ "competitions": [ { "id": 2021, "name": "Premier League", "code": "PL",
                 "type": "LEAGUE", "plan": "TIER_ONE" }, { "id": 7, "name": "Odd" } ] }"#,
        )
        .unwrap();

        let leagues: Vec<Competition> = data.competitions.into_iter().filter(is_league).collect();
        assert_eq!(leagues.len(), 1);
        assert_eq!(leagues[0].code.as_deref(), Some("PL"));
    }

    #[test]
    fn base_url_trailing_slash_is_dropped() {
        let config = AppConfig {
            football_data_base_url: "https://api.football-data.org/v4/".to_string(),
            ..AppConfig::default()
        };
        let client = FootballDataClient::new(&config);
        assert_eq!(client.base_url, "https://api.football-data.org/v4");
    }
}
