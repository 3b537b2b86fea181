use axum::{
    extract::{Extension, Json},
    http::{header, StatusCode},
    response::IntoResponse,
};
use tracing::info;

use crate::{
    dto::squad_dto::TeamEntryForm,
    error::ApiResult,
    services::squad_entry::{self, SharedEntryState, EXPORT_FILE_NAME},
};

/**
 * GET what has been entered so far, per season.
 */
pub async fn get_progress(Extension(state): Extension<SharedEntryState>) -> impl IntoResponse {
    let guard = state.read().await;
    (StatusCode::OK, Json(squad_entry::progress(&guard)))
}

/**
 * POST one team's squad into the entry document.
 */
pub async fn save_team_entry(
    Extension(state): Extension<SharedEntryState>,
    Json(form): Json<TeamEntryForm>,
) -> ApiResult<impl IntoResponse> {
    info!("Saving squad of {} for {}.", form.team_name, form.season);

    let summary = {
        let mut guard = state.write().await;
        let (next, summary) = squad_entry::save_team(&guard, form)?;
        *guard = next;
        summary
    };

    info!(
        "{} saved! Total teams in {}: {}",
        summary.team_name, summary.season, summary.teams_in_season
    );

    Ok((StatusCode::OK, Json(summary)))
}

/**
 * GET the entry document as a JSON file download.
 */
pub async fn export_squads(
    Extension(state): Extension<SharedEntryState>,
) -> ApiResult<impl IntoResponse> {
    let snapshot = state.read().await.clone();
    let body = squad_entry::export(&snapshot)?;

    info!("Exporting {} seasons.", snapshot.seasons.len());

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "application/json".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", EXPORT_FILE_NAME),
            ),
        ],
        body,
    ))
}
