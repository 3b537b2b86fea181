use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tracing::info;

use crate::{
    dto::formation_dto::{LineupView, Slot},
    error::{ApiError, ApiResult},
    services::{
        fixture_formatter::{check_season, season_label},
        formation_selector::select_formation,
        squad_store::SharedSquadData,
    },
};

/**
 * GET the teams that have a recorded squad for a season.
 */
pub async fn get_lineup_teams(
    Extension(squads): Extension<SharedSquadData>,
    Path(season): Path<i32>,
) -> ApiResult<impl IntoResponse> {
    let season = check_season(season)?;
    let teams: Vec<String> = squads
        .season(season)
        .map(|s| s.teams.iter().map(|t| t.team_name.clone()).collect())
        .unwrap_or_default();

    Ok((StatusCode::OK, Json(teams)))
}

/**
 * GET the most-used starting eleven of a team in a season.
 * A recorded squad too thin to fill the formation answers with a null formation.
 */
pub async fn get_lineup(
    Extension(squads): Extension<SharedSquadData>,
    Path((season, team_name)): Path<(i32, String)>,
) -> ApiResult<impl IntoResponse> {
    let season = check_season(season)?;
    info!("Selecting lineup for {} in {}.", team_name, season_label(season));

    let roster = squads.roster(&team_name, season).ok_or_else(|| {
        ApiError::NotFound(format!(
            "No squad recorded for {} in {}",
            team_name,
            season_label(season)
        ))
    })?;

    let formation = select_formation(roster);
    match &formation {
        Some(f) => info!("Lineup built around {}.", f.player(Slot::AttackingMid).full_name),
        None => info!("Squad of {} is too thin for a full lineup.", team_name),
    }

    Ok((
        StatusCode::OK,
        Json(LineupView { team_name, season, formation }),
    ))
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
        Router,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::{build_router, config::AppConfig, dto::squad_dto::SquadData};

    fn squads() -> SquadData {
        let player = |name: &str, position: &str, minutes: u32| {
            json!({ "fullName": name, "position": [position], "kitNumber": 1, "minutesPlayed": minutes })
        };

        serde_json::from_value(json!({
            "seasons": [ {
                "season": 2023,
                "teams": [
                    { "teamName": "Liverpool", "players": [
                        player("Alisson", "GK", 2700),
                        player("Van Dijk", "CB", 3000),
                        player("Konate", "CB", 1800),
                        player("Robertson", "LB", 1500),
                        player("Alexander-Arnold", "RB", 2000),
                        player("Szoboszlai", "CAM", 2100),
                        player("Mac Allister", "CM", 2600),
                        player("Jones", "CM", 1700),
                        player("Diaz", "LW", 2400),
                        player("Nunez", "ST", 2200),
                        player("Salah", "RW", 2900)
                    ] },
                    { "teamName": "Short Squad", "players": [ player("Only Keeper", "GK", 90) ] }
                ]
            } ]
        }))
        .unwrap()
    }

    fn app() -> Router {
        build_router(&AppConfig::default(), squads())
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
        let resp = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = resp.status();
        let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&body).unwrap_or(Value::Null))
    }

    #[tokio::test]
    async fn full_squad_returns_eleven_slots() {
        let (status, json) = get_json(app(), "/lineups/2023/Liverpool").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["teamName"], "Liverpool");
        assert_eq!(json["season"], 2023);

        let slots = json["formation"].as_array().unwrap();
        assert_eq!(slots.len(), 11);
        assert_eq!(slots[0]["slot"], "LW");
        assert_eq!(slots[4]["slot"], "CAM");
        assert_eq!(slots[4]["player"]["fullName"], "Szoboszlai");
        assert_eq!(slots[10]["player"]["fullName"], "Alisson");
    }

    #[tokio::test]
    async fn thin_squad_returns_null_formation() {
        let (status, json) = get_json(app(), "/lineups/2023/Short%20Squad").await;

        assert_eq!(status, StatusCode::OK);
        assert!(json["formation"].is_null());
    }

    #[tokio::test]
    async fn unknown_key_is_not_found() {
        let (status, json) = get_json(app(), "/lineups/2024/Liverpool").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["error"], "No squad recorded for Liverpool in 2024/2025");
    }

    #[tokio::test]
    async fn lists_teams_with_squads() {
        let (status, json) = get_json(app(), "/lineups/2023").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json, json!(["Liverpool", "Short Squad"]));

        let (_, json) = get_json(app(), "/lineups/2019").await;
        assert_eq!(json, json!([]));
    }

    #[tokio::test]
    async fn out_of_range_season_is_a_bad_request() {
        let (status, json) = get_json(app(), "/lineups/2147483647/Liverpool").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "Season must be between 1850 and 2999 (got 2147483647)");

        let (status, _) = get_json(app(), "/lineups/2147483647").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = get_json(app(), "/lineups/-2147483648").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
