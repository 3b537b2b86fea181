use std::sync::Arc;

use axum::{
    extract::Extension,
    routing::{get, post},
    Router,
};
use tokio::sync::RwLock;
use tower_http::cors::{Any, CorsLayer};

pub mod config;
pub mod error;

pub mod dto {
    pub mod football_dto;
    pub mod formation_dto;
    pub mod player_dto;
    pub mod squad_dto;
}

pub mod routes {
    pub mod entry;
    pub mod leagues;
    pub mod lineups;
    pub mod teams;
}

pub mod services {
    pub mod fixture_formatter;
    pub mod football_data;
    pub mod formation_selector;
    pub mod squad_collector;
    pub mod squad_entry;
    pub mod squad_store;
}

pub use config::AppConfig;
pub use dto::squad_dto::SquadData;
use services::{football_data::FootballDataClient, squad_entry::SharedEntryState, squad_store::SharedSquadData};

/// All routes with their shared state attached.
pub fn build_router(config: &AppConfig, squads: SquadData) -> Router {
    let client = FootballDataClient::new(config);
    let squads: SharedSquadData = Arc::new(squads);
    let entry: SharedEntryState = Arc::new(RwLock::new(SquadData::default()));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/leagues", get(routes::leagues::get_leagues))
        .route("/leagues/{code}/teams", get(routes::leagues::get_league_teams))
        .route("/teams/{id}", get(routes::teams::get_team))
        .route("/teams/{id}/squad", get(routes::teams::get_team_squad))
        .route("/teams/{id}/matches", get(routes::teams::get_team_matches))
        .route("/seasons", get(routes::teams::get_seasons))
        .route("/lineups/{season}", get(routes::lineups::get_lineup_teams))
        .route("/lineups/{season}/{team_name}", get(routes::lineups::get_lineup))
        .route("/entry", get(routes::entry::get_progress))
        .route("/entry/teams", post(routes::entry::save_team_entry))
        .route("/entry/export", get(routes::entry::export_squads))
        .layer(Extension(client))
        .layer(Extension(squads))
        .layer(Extension(entry))
        .layer(Extension(config.clone()))
        .layer(cors)
}
