use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: i64,
    #[serde(default)]
    pub baslik: Option<String>,
    #[serde(default)]
    pub mesaj: Option<String>,
    #[serde(default)]
    pub bildirim_tipi: Option<String>,
    #[serde(default)]
    pub okundu: bool,
    #[serde(default)]
    pub hedef_url: Option<String>,
    #[serde(default)]
    pub olusturma_tarihi: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UnreadCount {
    #[serde(default)]
    pub count: u64,
}

/// Number of notifications not yet read.
pub fn unread(notifications: &[Notification]) -> usize {
    notifications.iter().filter(|n| !n.okundu).count()
}
