use serde_json::{json, Value};

/// Match record as listed by `GET /matches`.
pub fn match_summary(id: i64, home: &str, away: &str, durum: &str) -> Value {
    json!({
        "id": id,
        "evSahibiTakim": { "id": id * 10, "ad": home },
        "deplasmanTakim": { "id": id * 10 + 1, "ad": away },
        "evSahibiSkor": 0,
        "deplasmanSkor": 0,
        "tarih": "2025-05-17",
        "saat": "19:00",
        "durum": durum,
    })
}

/// Result of a score/finish/undo command.
pub fn command_result(islem_tipi: &str) -> Value {
    json!({
        "basarili": true,
        "mesaj": "İşlem başarılı",
        "islemTipi": islem_tipi,
    })
}

/// Command history listing as returned by the `history` endpoints.
pub fn command_history(entries: &[&str]) -> Value {
    let gecmis: Vec<Value> = entries
        .iter()
        .map(|aciklama| json!({ "aciklama": aciklama }))
        .collect();

    json!({ "gecmis": gecmis })
}
