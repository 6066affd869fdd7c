use serde_json::{json, Value};

/// Login/register response with a bearer token and the user under `kullanici`.
pub fn login_response(token: &str, role: &str) -> Value {
    json!({
        "token": token,
        "kullanici": {
            "id": 7,
            "kullaniciAdi": "tester",
            "email": "tester@footbase.test",
            "rol": role,
        }
    })
}

/// Error body using the backend's primary `hata` field.
pub fn error_body(hata: &str) -> Value {
    json!({ "hata": hata })
}
