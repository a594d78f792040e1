use serde::{Deserialize, Serialize};

/// One catalog record: a playable character in a specific edition.
///
/// The on-disk file carries everything except `edition`, which the loader
/// fills in from the owning edition's friendly name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entry {
    pub name: String,
    #[serde(default)]
    pub edition: String,
    pub class: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub affinity: Option<String>,
    pub level: u32,
    pub base_stats: StatBlock,
    pub growth_rates: StatBlock,
}

/// Named integer stats, shared between base values and growth rates.
///
/// Which of the optional fields are present is decided by the owning
/// edition's family, never per file; absent fields are omitted from the
/// serialized form entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatBlock {
    pub hp: u32,
    #[serde(rename = "str")]
    pub strength: u32,
    #[serde(rename = "mag")]
    pub magic: u32,
    #[serde(rename = "skl")]
    pub skill: u32,
    #[serde(rename = "spd")]
    pub speed: u32,
    #[serde(rename = "lck")]
    pub luck: u32,
    #[serde(rename = "def")]
    pub defense: u32,
    #[serde(rename = "res")]
    pub resistance: u32,
    #[serde(rename = "mov", skip_serializing_if = "Option::is_none")]
    pub movement: Option<u32>,
    #[serde(rename = "wgt", skip_serializing_if = "Option::is_none")]
    pub weight: Option<u32>,
    #[serde(rename = "bld", skip_serializing_if = "Option::is_none")]
    pub build: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authority: Option<u32>,
}

/// Listing row for `/editions/{edition}/entries`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntrySummary {
    pub name: String,
    pub edition: String,
}
