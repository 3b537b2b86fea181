//! Scrapes Transfermarkt squad minutes into a squads file the server can load.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use lineup_backend::services::{
    squad_collector::{CLUBS, Club, SEASONS, SquadCollector, TRANSFERMARKT_URL},
    squad_entry,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "collect")]
#[command(about = "Collect squad minutes from Transfermarkt", long_about = None)]
struct Cli {
    /// Output squads file
    #[arg(long, default_value = "data/squads.json")]
    out: PathBuf,

    /// Starting year of a season to collect (repeatable, defaults to 2023-2025)
    #[arg(long)]
    season: Vec<i32>,

    /// Club to collect (repeatable, defaults to every known club)
    #[arg(long)]
    team: Vec<String>,

    /// Transfermarkt base URL
    #[arg(long, default_value = TRANSFERMARKT_URL)]
    base_url: String,
}

fn pick_clubs(names: &[String]) -> Result<Vec<Club>> {
    if names.is_empty() {
        return Ok(CLUBS.to_vec());
    }

    names
        .iter()
        .map(|name| match CLUBS.iter().find(|c| c.name.eq_ignore_ascii_case(name)) {
            Some(club) => Ok(*club),
            None => bail!("Unknown club {:?}", name),
        })
        .collect()
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let clubs = pick_clubs(&cli.team)?;
    let seasons = if cli.season.is_empty() { SEASONS.to_vec() } else { cli.season };

    let collector = SquadCollector::new(&cli.base_url)?;
    let data = collector.collect(&clubs, &seasons).await;

    if let Some(parent) = cli.out.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .with_context(|| format!("creating {}", parent.display()))?;
    }

    let text = squad_entry::export(&data)?;
    tokio::fs::write(&cli.out, text)
        .await
        .with_context(|| format!("writing {}", cli.out.display()))?;

    let teams: usize = data.seasons.iter().map(|s| s.teams.len()).sum();
    info!("Wrote {} team squads to {}", teams, cli.out.display());
    Ok(())
}
