use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::model::{matches::MatchSummary, player::PlayerSummary};

/// Landing page summary served by `GET /home`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeSummary {
    #[serde(default, alias = "matches")]
    pub upcoming_matches: Vec<MatchSummary>,
    #[serde(default)]
    pub comments: Vec<Value>,
    #[serde(default)]
    pub player_count: u64,
    #[serde(default)]
    pub team_count: u64,
    #[serde(default)]
    pub top_rated_player: Option<PlayerSummary>,
}
