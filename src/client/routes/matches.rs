use dioxus::document::Title;
use dioxus::prelude::*;
use dioxus_logger::tracing;
use serde_json::Value;

use crate::{
    client::{
        api::ApiClient,
        components::{api_error, ErrorAlert, Loading, MatchRow, Page},
        store::user::UserState,
        util::json::{field_text, id_of, list, path_text},
    },
    model::matches::{split_by_kickoff, MatchSummary},
};

const STATUS_FILTERS: [(Option<&str>, &str); 4] = [
    (None, "Tümü"),
    (Some("PLANLI"), "Planlı"),
    (Some("BITTI"), "Bitti"),
    (Some("SCHEDULED"), "Takvim"),
];

#[component]
pub fn Matches() -> Element {
    let api = use_context::<ApiClient>();
    let mut search = use_signal(String::new);
    let mut status = use_signal(|| None::<&'static str>);

    let matches = use_resource(move || {
        let api = api.clone();
        async move { api.matches().list(&[]).await }
    });

    rsx!(
        Title { "Maçlar | FootBase" }
        Page { class: "flex flex-col gap-4",
            h1 { class: "text-2xl font-bold", "Haftanın Maçları" }
            div { class: "flex flex-wrap gap-2 items-center",
                input {
                    class: "input",
                    placeholder: "Takım veya maç ara",
                    value: "{search}",
                    oninput: move |e| search.set(e.value()),
                }
                for (key, label) in STATUS_FILTERS {
                    button {
                        class: if status() == key { "btn btn-sm btn-primary" } else { "btn btn-sm btn-outline" },
                        onclick: move |_| status.set(key),
                        "{label}"
                    }
                }
            }
            match &*matches.read() {
                Some(Ok(list)) => {
                    let filtered: Vec<MatchSummary> = list
                        .iter()
                        .filter(|m| m.matches_filter(&search(), status()))
                        .cloned()
                        .collect();
                    let (upcoming, past) = split_by_kickoff(filtered, chrono::Local::now().naive_local());

                    rsx!(
                        MatchSection { title: "Yaklaşan Maçlar", matches: upcoming }
                        MatchSection { title: "Geçmiş Maçlar", matches: past }
                    )
                }
                Some(Err(err)) => api_error(err, "Maç listesi alınamadı. Lütfen daha sonra tekrar deneyin."),
                None => rsx!(Loading {}),
            }
        }
    )
}

#[component]
fn MatchSection(title: &'static str, matches: Vec<MatchSummary>) -> Element {
    rsx!(
        div { class: "card shadow-sm",
            div { class: "card-body",
                h2 { class: "card-title", "{title} ({matches.len()})" }
                if matches.is_empty() {
                    p { class: "opacity-60", "Maç bulunamadı." }
                }
                for m in matches {
                    MatchRow { key: "{m.id}", summary: m }
                }
            }
        }
    )
}

#[component]
pub fn MatchDetail(id: i64) -> Element {
    let api = use_context::<ApiClient>();

    let detail = use_resource(use_reactive!(|id| {
        let api = api.clone();
        async move { api.matches().get(id).await }
    }));

    rsx!(
        Title { "Maç Detayı | FootBase" }
        Page { class: "flex flex-col gap-4",
            h1 { class: "text-2xl font-bold", "Maç Detayı" }
            match &*detail.read() {
                Some(Ok(data)) if !data.is_null() => rsx!(
                    MatchHeader { data: data.clone() }
                    MatchExtras { id }
                    MatchComments { id }
                ),
                Some(Ok(_)) => rsx!(ErrorAlert { message: "Kayıt bulunamadı" }),
                Some(Err(err)) => api_error(err, "Veri yüklenemedi. Lütfen tekrar deneyin."),
                None => rsx!(Loading {}),
            }
        }
    )
}

#[component]
fn MatchHeader(data: Value) -> Element {
    let summary: Option<MatchSummary> = serde_json::from_value(data.clone()).ok();

    let Some(summary) = summary else {
        return rsx!(pre { class: "text-xs", "{data}" });
    };

    rsx!(
        div { class: "card shadow-sm",
            div { class: "card-body",
                div { class: "match-row text-xl",
                    span { class: "home", "{summary.home_name()}" }
                    span { class: "score", "{summary.score_line()}" }
                    span { "{summary.away_name()}" }
                }
                div { class: "flex justify-center gap-2",
                    span { class: "badge", "{summary.status()}" }
                    if let Some(kickoff) = summary.kickoff() {
                        span { class: "badge badge-outline", {kickoff.format("%d.%m.%Y %H:%M").to_string()} }
                    }
                }
            }
        }
    )
}

/// Events, media and state history. Each list loads on its own and a failure
/// only hides that list.
#[component]
fn MatchExtras(id: i64) -> Element {
    let api = use_context::<ApiClient>();

    let extras = use_resource(use_reactive!(|id| {
        let api = api.clone();
        async move {
            let matches = api.matches();
            let mut lists = Vec::new();
            for (title, result) in [
                ("Maç Olayları", matches.events(id).await),
                ("Medya", matches.media(id).await),
                ("Durum Geçmişi", matches.status_history(id).await),
            ] {
                match result {
                    Ok(value) => lists.push((title, list(&value))),
                    Err(e) => tracing::warn!("Failed to load {} for match {}: {}", title, id, e),
                }
            }
            lists
        }
    }));

    let Some(lists) = extras.read().clone() else {
        return rsx!(Loading {});
    };

    rsx!(
        div { class: "grid md:grid-cols-3 gap-4",
            for (title, items) in lists {
                div { class: "card shadow-sm",
                    div { class: "card-body",
                        h2 { class: "card-title text-base", "{title}" }
                        if items.is_empty() {
                            p { class: "opacity-60 text-sm", "Kayıt yok." }
                        }
                        for item in items {
                            p { class: "text-sm", {describe_item(&item)} }
                        }
                    }
                }
            }
        }
    )
}

fn describe_item(item: &Value) -> String {
    let minute = field_text(item, &["dakika"]).map(|d| format!("{}' ", d)).unwrap_or_default();
    let kind = field_text(item, &["olayTuru", "olayTipi", "durum", "medyaTipi"]).unwrap_or_default();
    let player = path_text(item, &["oyuncu", "ad"]).unwrap_or_default();
    let detail = field_text(item, &["aciklama", "url", "baslik"]).unwrap_or_default();

    [format!("{}{}", minute, kind), player, detail]
        .into_iter()
        .filter(|part| !part.trim().is_empty())
        .collect::<Vec<_>>()
        .join(" · ")
}

#[component]
fn MatchComments(id: i64) -> Element {
    let api = use_context::<ApiClient>();
    let user_state = use_context::<Signal<UserState>>();

    let mut text = use_signal(String::new);
    let mut editing = use_signal(|| None::<i64>);
    let mut error = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);

    let load_api = api.clone();
    let mut comments = use_resource(use_reactive!(|id| {
        let api = load_api.clone();
        async move {
            match api.matches().comments(id).await {
                Ok(value) => list(&value),
                Err(e) => {
                    tracing::error!("Failed to load comments for match {}: {}", id, e);
                    Vec::new()
                }
            }
        }
    }));

    let submit_api = api.clone();
    let submit = move |_: MouseEvent| {
        let api = submit_api.clone();
        let message = text().trim().to_string();
        if message.is_empty() {
            return;
        }

        spawn(async move {
            submitting.set(true);
            let result = match editing() {
                Some(comment_id) => api.matches().update_comment(comment_id, &message).await,
                None => api.matches().add_comment(id, &message).await,
            };

            match result {
                Ok(_) => {
                    text.set(String::new());
                    editing.set(None);
                    error.set(None);
                    comments.restart();
                }
                Err(e) => error.set(Some(e.display_message("Yorum kaydedilemedi. Lütfen tekrar deneyin."))),
            }
            submitting.set(false);
        });
    };

    let items = comments.read().clone().unwrap_or_default();
    let authenticated = user_state.read().authenticated;

    rsx!(
        div { class: "card shadow-sm",
            div { class: "card-body flex flex-col gap-2",
                h2 { class: "card-title", "Yorumlar" }
                if let Some(message) = error() {
                    ErrorAlert { message }
                }
                for comment in items {
                    CommentItem {
                        comment: comment.clone(),
                        on_edit: move |(comment_id, message): (i64, String)| {
                            editing.set(Some(comment_id));
                            text.set(message);
                        },
                        on_changed: move |_| comments.restart(),
                        on_error: move |message: String| error.set(Some(message)),
                    }
                }
                if authenticated {
                    textarea {
                        class: "textarea w-full",
                        placeholder: "Yorumunu yaz",
                        value: "{text}",
                        oninput: move |e| text.set(e.value()),
                    }
                    div { class: "flex gap-2",
                        button {
                            class: "btn btn-primary btn-sm",
                            disabled: submitting(),
                            onclick: submit,
                            if editing().is_some() { "Güncelle" } else { "Gönder" }
                        }
                        if editing().is_some() {
                            button {
                                class: "btn btn-ghost btn-sm",
                                onclick: move |_| {
                                    editing.set(None);
                                    text.set(String::new());
                                },
                                "Vazgeç"
                            }
                        }
                    }
                } else {
                    p { class: "text-sm opacity-60", "Yorum yapmak için giriş yapmalısın." }
                }
            }
        }
    )
}

#[component]
fn CommentItem(
    comment: Value,
    on_edit: EventHandler<(i64, String)>,
    on_changed: EventHandler<()>,
    on_error: EventHandler<String>,
) -> Element {
    let api = use_context::<ApiClient>();
    let user_state = use_context::<Signal<UserState>>();

    let comment_id = id_of(&comment, &["yorum_id"]);
    let message = field_text(&comment, &["message", "mesaj", "icerik"]).unwrap_or_default();
    let author = field_text(&comment, &["author", "kullaniciAdi"])
        .or_else(|| path_text(&comment, &["kullanici", "kullaniciAdi"]))
        .unwrap_or_else(|| "Anonim".to_string());
    let likes = field_text(&comment, &["likeCount", "begeniSayisi"]).unwrap_or_else(|| "0".to_string());
    let authenticated = user_state.read().authenticated;

    let like_api = api.clone();
    let like = move |_: MouseEvent| {
        let api = like_api.clone();
        let Some(comment_id) = comment_id else { return };
        spawn(async move {
            match api.matches().like_comment(comment_id).await {
                Ok(_) => on_changed.call(()),
                Err(e) => on_error.call(e.display_message("Beğeni kaydedilemedi.")),
            }
        });
    };

    let delete = move |_: MouseEvent| {
        let api = api.clone();
        let Some(comment_id) = comment_id else { return };
        spawn(async move {
            match api.matches().delete_comment(comment_id).await {
                Ok(_) => on_changed.call(()),
                Err(e) => on_error.call(e.display_message("Yorum silinemedi.")),
            }
        });
    };

    let edit_message = message.clone();

    rsx!(
        div { class: "border-b border-base-300 py-2",
            p { "{message}" }
            div { class: "flex gap-2 items-center text-xs",
                span { class: "opacity-60", "{author}" }
                span { "♥ {likes}" }
                if authenticated && comment_id.is_some() {
                    button { class: "btn btn-ghost btn-xs", onclick: like, "Beğen" }
                    button {
                        class: "btn btn-ghost btn-xs",
                        onclick: move |_| {
                            if let Some(comment_id) = comment_id {
                                on_edit.call((comment_id, edit_message.clone()));
                            }
                        },
                        "Düzenle"
                    }
                    button { class: "btn btn-ghost btn-xs", onclick: delete, "Sil" }
                }
            }
        }
    )
}
