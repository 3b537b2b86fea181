use reqwest::Client;
use scraper::{ElementRef, Html, Selector};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::{
    dto::{
        player_dto::Player,
        squad_dto::{SeasonSquads, SquadData, TeamSquad},
    },
    services::{fixture_formatter::season_label, formation_selector::select_formation},
};

pub const TRANSFERMARKT_URL: &str = "https://www.transfermarkt.com";
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64)";

/// Starting years scraped when no season is asked for.
pub const SEASONS: [i32; 3] = [2023, 2024, 2025];

/// A club and its Transfermarkt ("verein") id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Club {
    pub name: &'static str,
    pub id: u32,
}

const fn club(name: &'static str, id: u32) -> Club {
    Club { name, id }
}

pub const CLUBS: [Club; 20] = [
    club("Arsenal", 11),
    club("Aston Villa", 405),
    club("Chelsea", 631),
    club("Everton", 29),
    club("Fulham", 320),
    club("Liverpool", 31),
    club("Manchester City", 281),
    club("Manchester United", 985),
    club("Newcastle United", 762),
    club("Sunderland", 975),
    club("Tottenham Hotspur", 148),
    club("Wolverhampton", 543),
    club("Burnley", 483),
    club("Leeds United", 341),
    club("Nottingham Forest", 703),
    club("Crystal Palace", 873),
    club("Brighton & Hove Albion", 1311),
    club("Brentford", 1277),
    club("West Ham United", 379),
    club("Bournemouth", 883),
];

// Cell layout of a squad performance row: position, name, .., minutes.
const POSITION_CELL: usize = 0;
const NAME_CELL: usize = 1;
const MINUTES_CELL: usize = 5;

#[derive(Debug, Error)]
pub enum CollectError {
    #[error("Transfermarkt request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("bad selector {0}")]
    Selector(String),
}

/// Position code for a Transfermarkt position label, if it has one.
pub fn position_code(label: &str) -> Option<&'static str> {
    let code = match label.trim() {
        "Goalkeeper" => "GK",
        "Centre-Back" => "CB",
        "Right-Back" => "RB",
        "Left-Back" => "LB",
        "Defensive Midfield" => "CDM",
        "Central Midfield" => "CM",
        "Attacking Midfield" => "CAM",
        "Left Midfield" => "LM",
        "Right Midfield" => "RM",
        "Left Winger" => "LW",
        "Right Winger" => "RW",
        "Second Striker" => "ST",
        "Centre-Forward" => "CF",
        other => {
            debug!("Unmapped position label {:?}", other);
            return None;
        }
    };
    Some(code)
}

/// Minutes as printed in the table, "2.860'" with a thousands dot. A dash
/// means none.
pub fn parse_minutes(text: &str) -> u32 {
    let digits: String = text.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        0
    } else {
        digits.parse().unwrap_or(u32::MAX)
    }
}

fn selector(css: &'static str) -> Result<Selector, CollectError> {
    Selector::parse(css).map_err(|e| CollectError::Selector(format!("{css}: {e}")))
}

fn cell_text(cell: &ElementRef) -> String {
    cell.text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}

fn parse_row(cells: &[ElementRef]) -> Option<Player> {
    if cells.len() <= MINUTES_CELL {
        return None;
    }

    let full_name = cell_text(&cells[NAME_CELL]);
    if full_name.is_empty() {
        return None;
    }

    let positions = cell_text(&cells[POSITION_CELL])
        .split('/')
        .filter_map(position_code)
        .map(str::to_string)
        .collect();

    Some(Player {
        full_name,
        positions,
        kit_number: 0,
        minutes_played: parse_minutes(&cell_text(&cells[MINUTES_CELL])),
    })
}

/// Players of a squad performance page, in table order. A page without
/// the squad table yields no players.
pub fn parse_squad_table(html: &str) -> Result<Vec<Player>, CollectError> {
    let document = Html::parse_document(html);
    let table_selector = selector("table.items")?;
    let row_selector = selector("tbody > tr")?;
    let cell_selector = selector("td")?;

    let Some(table) = document.select(&table_selector).next() else {
        return Ok(vec![]);
    };

    let players = table
        .select(&row_selector)
        .filter(|row| row.parent().and_then(|body| body.parent()).map(|t| t.id()) == Some(table.id()))
        .filter_map(|row| {
            let cells: Vec<ElementRef> = row.select(&cell_selector).collect();
            parse_row(&cells)
        })
        .collect();

    Ok(players)
}

/// Scrapes squad minutes from Transfermarkt into a squads document.
#[derive(Debug, Clone)]
pub struct SquadCollector {
    client: Client,
    base_url: String,
}

impl SquadCollector {
    pub fn new(base_url: &str) -> Result<Self, CollectError> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn squad_url(&self, club: &Club, season: i32) -> String {
        format!(
            "{}/verein/leistungsdaten/verein/{}/plus/0?saison_id={}",
            self.base_url, club.id, season
        )
    }

    pub async fn fetch_squad(&self, club: &Club, season: i32) -> Result<Vec<Player>, CollectError> {
        let url = self.squad_url(club, season);
        info!("GET {}", url);

        let html = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        parse_squad_table(&html)
    }

    /// Every club for every season. Clubs that fail or have no table are
    /// left out of that season.
    pub async fn collect(&self, clubs: &[Club], seasons: &[i32]) -> SquadData {
        let mut data = SquadData::default();

        for &season in seasons {
            let mut teams = vec![];

            for club in clubs {
                info!("Scraping {} for season {}", club.name, season_label(season));
                let players = match self.fetch_squad(club, season).await {
                    Ok(players) if players.is_empty() => {
                        warn!("No data for {} in {}", club.name, season);
                        continue;
                    }
                    Ok(players) => players,
                    Err(e) => {
                        warn!("Skipping {} in {}: {}", club.name, season, e);
                        continue;
                    }
                };

                match select_formation(&players) {
                    Some(_) => debug!("{} {}: full eleven available", club.name, season),
                    None => warn!("{} {}: not enough players for a full eleven", club.name, season),
                }

                teams.push(TeamSquad { team_name: club.name.to_string(), players });
            }

            if !teams.is_empty() {
                data.seasons.push(SeasonSquads { season, teams });
            }
        }

        data
    }
}
