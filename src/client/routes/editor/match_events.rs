use dioxus::document::Title;
use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        api::ApiClient,
        components::{api_error, ErrorAlert, Guarded, Loading, Page, SuccessAlert},
        error::ApiError,
        guard::Access,
        util::json::{field_text, list, path_text},
    },
    model::{
        matches::{EventKind, IdRef, MatchEvent, MatchSummary, ScoreUpdate},
        player::PlayerSummary,
    },
};

#[component]
pub fn EditorMatchEvents(id: i64) -> Element {
    rsx!(
        Title { "Maç Yönetimi | FootBase" }
        Guarded { access: Access::Editor,
            Page { class: "flex flex-col gap-4",
                h1 { class: "text-2xl font-bold", "Maç Yönetimi" }
                MatchConsole { id }
            }
        }
    )
}

async fn load_match(api: &ApiClient, id: i64) -> Result<(MatchSummary, Vec<PlayerSummary>), ApiError> {
    let value = api.matches().get(id).await?;
    let summary: MatchSummary = serde_json::from_value(value).map_err(ApiError::Decode)?;

    let mut players = Vec::new();
    for team in [&summary.ev_sahibi_takim, &summary.deplasman_takim] {
        let Some(team_id) = team.as_ref().and_then(|t| t.id) else {
            continue;
        };
        match api.teams().players(team_id).await {
            Ok(list) => players.extend(list),
            Err(e) => tracing::warn!("Failed to load players of team {}: {}", team_id, e),
        }
    }

    Ok((summary, players))
}

#[component]
fn MatchConsole(id: i64) -> Element {
    let api = use_context::<ApiClient>();

    let mut error = use_signal(|| None::<String>);
    let mut success = use_signal(|| None::<String>);
    let mut home_score = use_signal(|| 0i32);
    let mut away_score = use_signal(|| 0i32);
    let mut player_id = use_signal(|| None::<i64>);
    let mut minute = use_signal(String::new);
    let mut kind = use_signal(|| EventKind::Gol);

    let match_api = api.clone();
    let mut detail = use_resource(use_reactive!(|id| {
        let api = match_api.clone();
        async move {
            let loaded = load_match(&api, id).await;
            if let Ok((summary, _)) = &loaded {
                home_score.set(summary.ev_sahibi_skor.unwrap_or(0));
                away_score.set(summary.deplasman_skor.unwrap_or(0));
            }
            loaded
        }
    }));

    let events_api = api.clone();
    let mut events = use_resource(use_reactive!(|id| {
        let api = events_api.clone();
        async move {
            match api.matches().events(id).await {
                Ok(value) => list(&value),
                Err(e) => {
                    tracing::error!("Failed to load events of match {}: {}", id, e);
                    Vec::new()
                }
            }
        }
    }));

    let score_api = api.clone();
    let update_score = move |_: MouseEvent| {
        let api = score_api.clone();
        let score = ScoreUpdate {
            ev_sahibi_skor: home_score(),
            deplasman_skor: away_score(),
        };
        spawn(async move {
            match api.editor().update_score(id, &score).await {
                Ok(_) => {
                    error.set(None);
                    success.set(Some("Skor başarıyla güncellendi!".to_string()));
                    detail.restart();
                }
                Err(e) => error.set(Some(e.display_message("Skor güncellenirken bir hata oluştu"))),
            }
        });
    };

    let event_api = api.clone();
    let add_event = move |_: MouseEvent| {
        let api = event_api.clone();
        let (Some(player), Ok(dakika)) = (player_id(), minute().trim().parse::<u32>()) else {
            error.set(Some("Lütfen oyuncu ve dakika seçin".to_string()));
            return;
        };
        let event = MatchEvent {
            oyuncu: IdRef { id: player },
            olay_tipi: kind(),
            dakika,
        };
        spawn(async move {
            match api.editor().add_match_event(id, &event).await {
                Ok(_) => {
                    error.set(None);
                    success.set(Some("Olay başarıyla eklendi!".to_string()));
                    player_id.set(None);
                    minute.set(String::new());
                    events.restart();
                }
                Err(e) => error.set(Some(e.display_message("Olay eklenirken bir hata oluştu"))),
            }
        });
    };

    let start_api = api.clone();
    let start = move |_: MouseEvent| {
        let api = start_api.clone();
        spawn(async move {
            match api.editor().start_match(id).await {
                Ok(_) => {
                    success.set(Some("Maç başlatıldı.".to_string()));
                    detail.restart();
                }
                Err(e) => error.set(Some(e.display_message("Maç başlatılamadı"))),
            }
        });
    };

    let finish = move |_: MouseEvent| {
        let api = api.clone();
        spawn(async move {
            match api.editor().finish_match(id).await {
                Ok(_) => {
                    success.set(Some("Maç sonlandırıldı.".to_string()));
                    detail.restart();
                }
                Err(e) => error.set(Some(e.display_message("Maç sonlandırılamadı"))),
            }
        });
    };

    let (summary, players) = match &*detail.read() {
        Some(Ok((summary, players))) => (summary.clone(), players.clone()),
        Some(Err(err)) => return api_error(err, "Maç bilgileri yüklenirken bir hata oluştu"),
        None => return rsx!(Loading {}),
    };
    let event_list = events.read().clone().unwrap_or_default();

    rsx!(
        if let Some(message) = error() {
            ErrorAlert { message }
        }
        if let Some(message) = success() {
            SuccessAlert { message }
        }
        div { class: "card shadow-sm",
            div { class: "card-body flex flex-col gap-2",
                div { class: "match-row text-xl",
                    span { class: "home", "{summary.home_name()}" }
                    span { class: "score", "{summary.score_line()}" }
                    span { "{summary.away_name()}" }
                }
                div { class: "flex justify-center gap-2",
                    span { class: "badge", "{summary.status()}" }
                    button { class: "btn btn-outline btn-xs", onclick: start, "Maçı Başlat" }
                    button { class: "btn btn-outline btn-xs", onclick: finish, "Maçı Bitir" }
                }
            }
        }
        div { class: "card shadow-sm",
            div { class: "card-body flex flex-row flex-wrap items-end gap-2",
                label { class: "flex flex-col text-sm",
                    "{summary.home_name()} Skor"
                    input {
                        class: "input w-24",
                        r#type: "number",
                        min: "0",
                        value: "{home_score}",
                        oninput: move |e| home_score.set(e.value().parse().unwrap_or(0)),
                    }
                }
                label { class: "flex flex-col text-sm",
                    "{summary.away_name()} Skor"
                    input {
                        class: "input w-24",
                        r#type: "number",
                        min: "0",
                        value: "{away_score}",
                        oninput: move |e| away_score.set(e.value().parse().unwrap_or(0)),
                    }
                }
                button { class: "btn btn-primary", onclick: update_score, "Skoru Güncelle" }
            }
        }
        div { class: "card shadow-sm",
            div { class: "card-body flex flex-col gap-2",
                h2 { class: "card-title", "Olay Ekle" }
                div { class: "flex flex-wrap gap-2",
                    select {
                        class: "select",
                        onchange: move |e| {
                            if let Some(selected) = EventKind::from_code(&e.value()) {
                                kind.set(selected);
                            }
                        },
                        for option_kind in EventKind::ALL {
                            option {
                                value: option_kind.code(),
                                selected: kind() == option_kind,
                                {option_kind.label()}
                            }
                        }
                    }
                    select {
                        class: "select",
                        onchange: move |e| player_id.set(e.value().parse().ok()),
                        option { value: "", selected: player_id().is_none(), "Oyuncu seçin" }
                        for p in players {
                            option {
                                value: "{p.id}",
                                selected: player_id() == Some(p.id),
                                {p.display_name()}
                            }
                        }
                    }
                    input {
                        class: "input w-24",
                        r#type: "number",
                        min: "1",
                        placeholder: "Dakika",
                        value: "{minute}",
                        oninput: move |e| minute.set(e.value()),
                    }
                    button { class: "btn btn-primary", onclick: add_event, "Ekle" }
                }
                ul { class: "flex flex-col gap-1",
                    if event_list.is_empty() {
                        li { class: "opacity-60 text-sm", "Henüz olay yok." }
                    }
                    for event in event_list {
                        li { class: "text-sm", {describe_event(&event)} }
                    }
                }
            }
        }
    )
}

fn describe_event(event: &serde_json::Value) -> String {
    let minute = field_text(event, &["dakika"]).unwrap_or_else(|| "?".to_string());
    let kind = field_text(event, &["olayTuru", "olayTipi"])
        .and_then(|code| EventKind::from_code(&code))
        .map(|kind| kind.label().to_string())
        .unwrap_or_else(|| "Olay".to_string());
    let player = path_text(event, &["oyuncu", "ad"]).unwrap_or_default();

    format!("{}' {} {}", minute, kind, player).trim().to_string()
}
