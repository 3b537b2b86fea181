use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tracing::info;

use crate::{error::ApiResult, services::football_data::FootballDataClient};

/**
 * GET the main leagues for the league selector.
 */
pub async fn get_leagues(
    Extension(client): Extension<FootballDataClient>,
) -> ApiResult<impl IntoResponse> {
    info!("Fetching leagues.");

    let leagues = client.fetch_main_leagues().await?;
    Ok((StatusCode::OK, Json(leagues)))
}

/**
 * GET the teams playing in a league.
 */
pub async fn get_league_teams(
    Extension(client): Extension<FootballDataClient>,
    Path(league_code): Path<String>,
) -> ApiResult<impl IntoResponse> {
    info!("Fetching teams for league {}.", league_code);

    let teams = client.fetch_teams_by_league(&league_code).await?;
    Ok((StatusCode::OK, Json(teams)))
}
