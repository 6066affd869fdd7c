use serde::{Deserialize, Serialize};

use crate::model::matches::TeamRef;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerSummary {
    pub id: i64,
    #[serde(default, alias = "firstName")]
    pub ad: Option<String>,
    #[serde(default, alias = "lastName")]
    pub soyad: Option<String>,
    #[serde(default, rename = "fullName")]
    pub full_name: Option<String>,
    #[serde(default, alias = "position")]
    pub pozisyon: Option<String>,
    #[serde(default, alias = "team")]
    pub takim: Option<TeamRef>,
    #[serde(default, rename = "averageRating")]
    pub average_rating: Option<f64>,
    #[serde(default, rename = "ratingCount")]
    pub rating_count: Option<u64>,
}

impl PlayerSummary {
    pub fn display_name(&self) -> String {
        if let Some(full_name) = &self.full_name {
            return full_name.clone();
        }

        match (&self.ad, &self.soyad) {
            (Some(ad), Some(soyad)) => format!("{} {}", ad, soyad),
            (Some(ad), None) => ad.clone(),
            (None, Some(soyad)) => soyad.clone(),
            (None, None) => format!("Oyuncu #{}", self.id),
        }
    }

    pub fn team_name(&self) -> &str {
        self.takim
            .as_ref()
            .map(|t| t.name_or("Takım bilgisi yok"))
            .unwrap_or("Takım bilgisi yok")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerRating {
    pub score: u8,
    pub comment: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerComment {
    pub comment: String,
}
