use std::{io::ErrorKind, path::Path, sync::Arc};

use thiserror::Error;
use tracing::{info, warn};

use crate::dto::squad_dto::SquadData;

/// Bundled squads, read once at startup and never written.
pub type SharedSquadData = Arc<SquadData>;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("could not read squads file: {0}")]
    Io(#[from] std::io::Error),
    #[error("squads file is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Loads the squads document. A missing file means no rosters; a malformed
/// one is an error.
pub async fn load_squads(path: &Path) -> Result<SquadData, LoadError> {
    let text = match tokio::fs::read_to_string(path).await {
        Ok(text) => text,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            warn!("No squads file at {}, lineups are unavailable.", path.display());
            return Ok(SquadData::default());
        }
        Err(e) => return Err(e.into()),
    };

    let data: SquadData = serde_json::from_str(&text)?;

    let teams: usize = data.seasons.iter().map(|s| s.teams.len()).sum();
    info!("Loaded {} team squads across {} seasons.", teams, data.seasons.len());

    Ok(data)
}
