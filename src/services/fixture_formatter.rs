use crate::{
    dto::football_dto::{FixtureView, Match, Outcome, ScoreLine, SeasonOption},
    error::{ApiError, ApiResult},
};

/// Number of seasons offered by the season selector.
pub const SEASON_CHOICES: i32 = 3;

/// Starting years accepted in season paths and queries.
pub const MIN_SEASON: i32 = 1850;
pub const MAX_SEASON: i32 = 2999;

fn outcome(score: ScoreLine) -> Outcome {
    match (score.home, score.away) {
        (Some(home), Some(away)) if home > away => Outcome::HomeWin,
        (Some(home), Some(away)) if away > home => Outcome::AwayWin,
        (Some(_), Some(_)) => Outcome::Draw,
        _ => Outcome::Pending,
    }
}

pub fn season_label(season: i32) -> String {
    format!("{}/{}", season, season.saturating_add(1))
}

/// Rejects starting years outside `MIN_SEASON..=MAX_SEASON`.
pub fn check_season(season: i32) -> ApiResult<i32> {
    if (MIN_SEASON..=MAX_SEASON).contains(&season) {
        Ok(season)
    } else {
        Err(ApiError::BadRequest(format!(
            "Season must be between {} and {} (got {})",
            MIN_SEASON, MAX_SEASON, season
        )))
    }
}

/// Most recent first, ending `SEASON_CHOICES` seasons back.
pub fn season_options(latest: i32) -> Vec<SeasonOption> {
    (0..SEASON_CHOICES)
        .map(|i| latest.saturating_sub(i))
        .map(|season| SeasonOption { season, label: season_label(season) })
        .collect()
}

pub fn format_matches(matches: Vec<Match>) -> Vec<FixtureView> {
    matches
        .into_iter()
        .map(|m| {
            let score = m.score.full_time;
            FixtureView {
                id: m.id,
                competition: m.competition.name,
                kickoff: m.utc_date,
                home_team: m.home_team.name,
                away_team: m.away_team.name,
                home_score: score.home,
                away_score: score.away,
                outcome: outcome(score),
            }
        })
        .collect()
}
