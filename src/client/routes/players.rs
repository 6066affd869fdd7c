use dioxus::document::Title;
use dioxus::prelude::*;
use dioxus_logger::tracing;
use serde_json::Value;

use crate::{
    client::{
        api::ApiClient,
        components::{api_error, ErrorAlert, Loading, Page, SuccessAlert},
        router::Route,
        store::user::UserState,
        util::json::{field_text, list, path_text},
    },
    model::player::PlayerSummary,
};

/// Lowest and highest rating a player can be given.
const RATING_RANGE: std::ops::RangeInclusive<u8> = 1..=10;

#[component]
pub fn Players() -> Element {
    let api = use_context::<ApiClient>();
    let mut search = use_signal(String::new);

    let players = use_resource(move || {
        let api = api.clone();
        async move { api.players().list().await }
    });

    rsx!(
        Title { "Oyuncular | FootBase" }
        Page { class: "flex flex-col gap-4",
            h1 { class: "text-2xl font-bold", "Oyuncular" }
            input {
                class: "input max-w-96",
                placeholder: "Oyuncu veya takım ara",
                value: "{search}",
                oninput: move |e| search.set(e.value()),
            }
            match &*players.read() {
                Some(Ok(list)) => {
                    let term = search().to_lowercase();
                    let filtered: Vec<PlayerSummary> = list
                        .iter()
                        .filter(|p| {
                            p.display_name().to_lowercase().contains(&term)
                                || p.team_name().to_lowercase().contains(&term)
                        })
                        .cloned()
                        .collect();

                    rsx!(PlayerTable { players: filtered })
                }
                Some(Err(err)) => api_error(err, "Oyuncular yüklenemedi."),
                None => rsx!(Loading {}),
            }
        }
    )
}

#[component]
pub fn PlayerTable(players: Vec<PlayerSummary>) -> Element {
    rsx!(
        div { class: "overflow-x-auto",
            table { class: "table table-md",
                thead {
                    tr {
                        th { "Oyuncu" }
                        th { "Pozisyon" }
                        th { "Takım" }
                    }
                }
                tbody {
                    for p in players {
                        tr { key: "{p.id}",
                            td {
                                Link { to: Route::PlayerDetail { id: p.id }, class: "link", {p.display_name()} }
                            }
                            td { {p.pozisyon.clone().unwrap_or_default()} }
                            td { "{p.team_name()}" }
                        }
                    }
                }
            }
        }
    )
}

#[component]
pub fn PlayerDetail(id: i64) -> Element {
    let api = use_context::<ApiClient>();
    let user_state = use_context::<Signal<UserState>>();

    let load_api = api.clone();
    let mut detail = use_resource(use_reactive!(|id| {
        let api = load_api.clone();
        async move {
            let players = api.players();
            let player = players.get(id).await?;

            let mut sections = Vec::new();
            for (title, result) in [
                ("Puan", players.score(id).await),
                ("İstatistikler", players.statistics(id).await),
                ("Değerlendirmeler", players.ratings(id).await),
                ("Yorumlar", players.comments(id).await),
                ("Medya", players.media(id).await),
            ] {
                match result {
                    Ok(value) => sections.push((title, value)),
                    Err(e) => tracing::warn!("Failed to load {} for player {}: {}", title, id, e),
                }
            }

            Ok::<_, crate::client::error::ApiError>((player, sections))
        }
    }));

    let mut score = use_signal(|| 7u8);
    let mut comment = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut success = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);

    let rate = move |_: MouseEvent| {
        let api = api.clone();
        let comment_value = comment().trim().to_string();
        spawn(async move {
            submitting.set(true);
            match api.players().rate(id, score(), &comment_value).await {
                Ok(_) => {
                    comment.set(String::new());
                    error.set(None);
                    success.set(Some("Değerlendirmen kaydedildi.".to_string()));
                    detail.restart();
                }
                Err(e) => error.set(Some(e.display_message("Değerlendirme eklenemedi. Lütfen tekrar deneyin."))),
            }
            submitting.set(false);
        });
    };

    let authenticated = user_state.read().authenticated;

    rsx!(
        Title { "Oyuncu Detayı | FootBase" }
        Page { class: "flex flex-col gap-4",
            h1 { class: "text-2xl font-bold", "Oyuncu Detayı" }
            match &*detail.read() {
                Some(Ok((player, sections))) if !player.is_null() => rsx!(
                    PlayerHeader { player: player.clone() }
                    div { class: "grid md:grid-cols-2 gap-4",
                        for (title, value) in sections.iter().cloned() {
                            ValueCard { title, value }
                        }
                    }
                ),
                Some(Ok(_)) => rsx!(ErrorAlert { message: "Kayıt bulunamadı" }),
                Some(Err(err)) => api_error(err, "Veri yüklenemedi. Lütfen tekrar deneyin."),
                None => rsx!(Loading {}),
            }
            if authenticated {
                div { class: "card shadow-sm",
                    div { class: "card-body flex flex-col gap-2",
                        h2 { class: "card-title", "Oyuncuyu Değerlendir" }
                        if let Some(message) = error() {
                            ErrorAlert { message }
                        }
                        if let Some(message) = success() {
                            SuccessAlert { message }
                        }
                        select {
                            class: "select w-32",
                            value: "{score}",
                            onchange: move |e| {
                                if let Ok(value) = e.value().parse::<u8>() {
                                    score.set(value);
                                }
                            },
                            for value in RATING_RANGE {
                                option { value: "{value}", selected: value == score(), "{value}" }
                            }
                        }
                        textarea {
                            class: "textarea w-full",
                            placeholder: "Yorum (isteğe bağlı)",
                            value: "{comment}",
                            oninput: move |e| comment.set(e.value()),
                        }
                        button {
                            class: "btn btn-primary btn-sm w-fit",
                            disabled: submitting(),
                            onclick: rate,
                            "Gönder"
                        }
                    }
                }
            }
        }
    )
}

#[component]
fn PlayerHeader(player: Value) -> Element {
    let name = field_text(&player, &["fullName"])
        .or_else(|| {
            let first = field_text(&player, &["ad"])?;
            let last = field_text(&player, &["soyad"]).unwrap_or_default();
            Some(format!("{} {}", first, last).trim().to_string())
        })
        .unwrap_or_else(|| "İsimsiz".to_string());
    let team = field_text(&player, &["team"])
        .or_else(|| path_text(&player, &["takim", "ad"]))
        .unwrap_or_else(|| "Takım bilgisi yok".to_string());
    let position = field_text(&player, &["pozisyon", "position"]).unwrap_or_default();
    let image = field_text(&player, &["imageUrl", "fotograf"]);

    rsx!(
        div { class: "card card-side shadow-sm",
            if let Some(image) = image {
                figure { class: "w-40",
                    img { src: "{image}", alt: "{name}" }
                }
            }
            div { class: "card-body",
                h2 { class: "card-title", "{name}" }
                p { "{team}" }
                p { class: "opacity-60", "{position}" }
            }
        }
    )
}

/// Card listing a loosely typed section: arrays one entry per line, objects one
/// field per line.
#[component]
pub fn ValueCard(title: &'static str, value: Value) -> Element {
    let lines: Vec<String> = match &value {
        Value::Array(_) => list(&value).iter().map(describe).collect(),
        Value::Object(map) => map
            .iter()
            .filter(|(_, v)| !v.is_object() && !v.is_array() && !v.is_null())
            .map(|(k, v)| format!("{}: {}", k, scalar_text(v)))
            .collect(),
        Value::Null => Vec::new(),
        other => vec![scalar_text(other)],
    };

    rsx!(
        div { class: "card shadow-sm",
            div { class: "card-body",
                h2 { class: "card-title text-base", "{title}" }
                if lines.is_empty() {
                    p { class: "opacity-60 text-sm", "Kayıt yok." }
                }
                for line in lines {
                    p { class: "text-sm", "{line}" }
                }
            }
        }
    )
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn describe(item: &Value) -> String {
    let score = field_text(item, &["puan", "score"]).map(|p| format!("{}/10", p));
    let text = field_text(item, &["yorum", "comment", "message", "mesaj", "baslik", "url"]);
    let author = field_text(item, &["author", "kullaniciAdi"])
        .or_else(|| path_text(item, &["kullanici", "kullaniciAdi"]));

    let parts: Vec<String> = [score, text, author].into_iter().flatten().collect();
    if parts.is_empty() {
        scalar_text(item)
    } else {
        parts.join(" · ")
    }
}
