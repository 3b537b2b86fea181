use axum::{
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tracing::info;

use crate::{
    config::AppConfig,
    error::ApiResult,
    services::{fixture_formatter, football_data::FootballDataClient},
};

#[derive(Debug, Deserialize)]
pub struct SeasonQuery {
    pub season: i32,
}

/**
 * GET a club's header info and squad.
 */
pub async fn get_team(
    Extension(client): Extension<FootballDataClient>,
    Path(team_id): Path<i64>,
) -> ApiResult<impl IntoResponse> {
    info!("Fetching team {}.", team_id);

    let team = client.fetch_team_info(team_id).await?;
    info!("Team loaded: {}", team.name);
    Ok((StatusCode::OK, Json(team)))
}

/**
 * GET only the squad list of a club.
 */
pub async fn get_team_squad(
    Extension(client): Extension<FootballDataClient>,
    Path(team_id): Path<i64>,
) -> ApiResult<impl IntoResponse> {
    let squad = client.fetch_team_squad(team_id).await?;
    Ok((StatusCode::OK, Json(squad)))
}

/**
 * GET a club's fixtures for one season.
 */
pub async fn get_team_matches(
    Extension(client): Extension<FootballDataClient>,
    Path(team_id): Path<i64>,
    Query(query): Query<SeasonQuery>,
) -> ApiResult<impl IntoResponse> {
    let season = fixture_formatter::check_season(query.season)?;
    info!(
        "Fetching matches for team {} in {}.",
        team_id,
        fixture_formatter::season_label(season)
    );

    let matches = client.fetch_team_matches(team_id, season).await?;
    info!("Loaded {} matches.", matches.len());

    Ok((StatusCode::OK, Json(fixture_formatter::format_matches(matches))))
}

/**
 * GET the seasons the season selector offers.
 */
pub async fn get_seasons(Extension(config): Extension<AppConfig>) -> impl IntoResponse {
    (StatusCode::OK, Json(fixture_formatter::season_options(config.latest_season)))
}
