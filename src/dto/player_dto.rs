use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Treats an explicit `null` like an absent field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A squad player as stored in the squads document and exported by the entry tool.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct Player {
    #[serde(deserialize_with = "null_as_default")]
    pub full_name: String,

    #[serde(rename = "position", alias = "positions", deserialize_with = "null_as_default")]
    pub positions: Vec<String>,

    #[serde(deserialize_with = "null_as_default")]
    pub kit_number: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub minutes_played: u32,
}

/// One row of the squad entry form, before any cleanup.
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct PlayerEntry {
    pub full_name: String,
    pub position: PositionInput,
    pub kit_number: Value,
    pub minutes_played: Value,
}

/// Positions arrive either already split or as the raw "CB, RB" text.
#[derive(Debug, Deserialize, Clone)]
#[serde(untagged)]
pub enum PositionInput {
    Codes(Vec<String>),
    Text(String),
}

impl Default for PositionInput {
    fn default() -> Self {
        PositionInput::Codes(vec![])
    }
}
