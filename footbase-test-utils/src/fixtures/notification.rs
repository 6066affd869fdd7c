use serde_json::{json, Value};

/// Notification record.
pub fn notification(id: i64, baslik: &str, okundu: bool) -> Value {
    json!({
        "id": id,
        "baslik": baslik,
        "mesaj": format!("{} detayları", baslik),
        "bildirimTipi": "MAC_ONAY",
        "okundu": okundu,
        "hedefUrl": "/app/matches/1",
        "olusturmaTarihi": "2025-05-17T18:30:00",
    })
}

/// Body of `GET /notifications/unread/count`.
pub fn unread_count(count: u64) -> Value {
    json!({ "count": count })
}
