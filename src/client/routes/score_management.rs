//! Score entry, match finishing and undo through the backend's command log.
//!
//! Admins and editors share the page; [`CommandScope`] picks the endpoints.

use dioxus::document::Title;
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaClockRotateLeft, FaRotateLeft};
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;
use serde_json::Value;

use crate::{
    client::{
        api::{ApiClient, CommandScope},
        components::{api_error, ErrorAlert, Guarded, Loading, Page, SuccessAlert},
        error::ApiError,
        guard::Access,
        util::json::field_text,
    },
    model::matches::{FinishCommand, MatchSummary, ScoreCommand},
};

#[component]
pub fn AdminScoreManagement() -> Element {
    rsx!(
        Title { "Skor Yönetimi | FootBase" }
        Guarded { access: Access::Admin,
            ScoreManagement { scope: CommandScope::Admin }
        }
    )
}

#[component]
pub fn EditorScoreManagement() -> Element {
    rsx!(
        Title { "Skor Yönetimi | FootBase" }
        Guarded { access: Access::Editor,
            ScoreManagement { scope: CommandScope::Editor }
        }
    )
}

/// Published matches the scope may score: every match for admins, the editor's
/// own submissions for editors.
async fn published_matches(api: &ApiClient, scope: CommandScope) -> Result<Vec<MatchSummary>, ApiError> {
    let matches = match scope {
        CommandScope::Admin => api.matches().list(&[]).await?,
        CommandScope::Editor => api.editor().my_matches().await?,
    };

    Ok(matches.into_iter().filter(MatchSummary::is_published).collect())
}

#[derive(Debug, Clone, PartialEq)]
enum Pending {
    Finish(MatchSummary),
    Undo,
}

#[component]
fn ScoreManagement(scope: CommandScope) -> Element {
    let api = use_context::<ApiClient>();

    let mut error = use_signal(|| None::<String>);
    let mut success = use_signal(|| None::<String>);
    let mut processing = use_signal(|| false);
    let mut selected = use_signal(|| None::<MatchSummary>);
    let mut home_score = use_signal(|| 0i32);
    let mut away_score = use_signal(|| 0i32);
    let mut confirm = use_signal(|| None::<Pending>);
    let mut show_history = use_signal(|| false);

    let matches_api = api.clone();
    let mut matches = use_resource(move || {
        let api = matches_api.clone();
        async move { published_matches(&api, scope).await }
    });

    let history_api = api.clone();
    let mut history = use_resource(move || {
        let api = history_api.clone();
        async move {
            match api.score_commands(scope).history().await {
                Ok(history) => history.gecmis,
                Err(e) => {
                    tracing::error!("Failed to load command history: {}", e);
                    Vec::new()
                }
            }
        }
    });

    let run = use_callback(move |action: Action| {
        let api = api.clone();
        spawn(async move {
            processing.set(true);
            error.set(None);
            confirm.set(None);

            let commands = api.score_commands(scope);
            let outcome = match &action {
                Action::Score(command) => commands
                    .update_score(command)
                    .await
                    .map_err(|e| e.display_message("Skor güncellenirken bir hata oluştu"))
                    .and_then(|r| r.check("Skor güncellenemedi"))
                    .map(|_| {
                        format!(
                            "Skor başarıyla güncellendi! ({}-{})",
                            command.ev_sahibi_skor, command.deplasman_skor
                        )
                    }),
                Action::Finish(command) => commands
                    .finish_match(command)
                    .await
                    .map_err(|e| e.display_message("Maç sonlandırılırken bir hata oluştu"))
                    .and_then(|r| r.check("Maç sonlandırılamadı"))
                    .map(|r| {
                        format!(
                            "Maç başarıyla sonlandırıldı! Sonuç: {}-{} ({})",
                            command.ev_sahibi_skor,
                            command.deplasman_skor,
                            r.sonuc.unwrap_or_default()
                        )
                    }),
                Action::Undo => commands
                    .undo_last()
                    .await
                    .map_err(|e| e.display_message("İşlem geri alınırken bir hata oluştu"))
                    .and_then(|r| r.check("İşlem geri alınamadı"))
                    .map(|r| format!("İşlem geri alındı! ({})", r.islem_tipi.unwrap_or_default())),
            };

            match outcome {
                Ok(message) => {
                    success.set(Some(message));
                    selected.set(None);
                    matches.restart();
                    history.restart();
                }
                Err(message) => error.set(Some(message)),
            }
            processing.set(false);
        });
    });

    let history_len = history.read().as_ref().map(Vec::len).unwrap_or(0);

    rsx!(
        Page { class: "flex flex-col gap-4",
            h1 { class: "text-2xl font-bold", "Maç Skor Yönetimi" }
            div { class: "flex gap-2",
                button {
                    class: "btn btn-outline btn-warning btn-sm",
                    disabled: processing() || history_len == 0,
                    onclick: move |_| confirm.set(Some(Pending::Undo)),
                    Icon { width: 14, height: 14, icon: FaRotateLeft }
                    "Geri Al"
                }
                button {
                    class: "btn btn-outline btn-info btn-sm",
                    onclick: move |_| show_history.toggle(),
                    Icon { width: 14, height: 14, icon: FaClockRotateLeft }
                    "İşlem Geçmişi ({history_len})"
                }
            }
            if let Some(message) = error() {
                ErrorAlert { message }
            }
            if let Some(message) = success() {
                SuccessAlert { message }
            }
            if let Some(pending) = confirm() {
                ConfirmBar {
                    pending: pending.clone(),
                    home_score: home_score(),
                    away_score: away_score(),
                    disabled: processing(),
                    on_confirm: {
                        let pending = pending.clone();
                        move |_| match &pending {
                            Pending::Finish(m) => run.call(Action::Finish(FinishCommand::new(m.id, home_score(), away_score()))),
                            Pending::Undo => run.call(Action::Undo),
                        }
                    },
                    on_cancel: move |_| confirm.set(None),
                }
            }
            if show_history() {
                HistoryList { entries: history.read().clone().unwrap_or_default() }
            }
            if let Some(m) = selected() {
                div { class: "card shadow-sm",
                    div { class: "card-body flex flex-row flex-wrap items-end gap-2",
                        label { class: "flex flex-col text-sm",
                            "{m.home_name()}"
                            input {
                                class: "input w-24",
                                r#type: "number",
                                min: "0",
                                value: "{home_score}",
                                oninput: move |e| home_score.set(e.value().parse().unwrap_or(0)),
                            }
                        }
                        label { class: "flex flex-col text-sm",
                            "{m.away_name()}"
                            input {
                                class: "input w-24",
                                r#type: "number",
                                min: "0",
                                value: "{away_score}",
                                oninput: move |e| away_score.set(e.value().parse().unwrap_or(0)),
                            }
                        }
                        button {
                            class: "btn btn-primary btn-sm",
                            disabled: processing(),
                            onclick: {
                                let id = m.id;
                                move |_| run.call(Action::Score(ScoreCommand::new(id, home_score(), away_score())))
                            },
                            "Skoru Kaydet"
                        }
                        button {
                            class: "btn btn-error btn-sm",
                            disabled: processing(),
                            onclick: {
                                let m = m.clone();
                                move |_| confirm.set(Some(Pending::Finish(m.clone())))
                            },
                            "Maçı Bitir"
                        }
                        button {
                            class: "btn btn-ghost btn-sm",
                            onclick: move |_| selected.set(None),
                            "Kapat"
                        }
                    }
                }
            }
            match &*matches.read() {
                Some(Ok(list)) if list.is_empty() => rsx!(
                    p { class: "opacity-60", "Skor girilebilecek yayında maç yok." }
                ),
                Some(Ok(list)) => rsx!(
                    div { class: "overflow-x-auto",
                        table { class: "table table-md",
                            thead {
                                tr {
                                    th { "Maç" }
                                    th { "Skor" }
                                    th { "Durum" }
                                    th { "" }
                                }
                            }
                            tbody {
                                for m in list.iter().cloned() {
                                    ScoreRow {
                                        key: "{m.id}",
                                        summary: m,
                                        on_select: move |m: MatchSummary| {
                                            home_score.set(m.ev_sahibi_skor.unwrap_or(0));
                                            away_score.set(m.deplasman_skor.unwrap_or(0));
                                            selected.set(Some(m));
                                        },
                                    }
                                }
                            }
                        }
                    }
                ),
                Some(Err(err)) => api_error(err, "Maçlar yüklenirken bir hata oluştu"),
                None => rsx!(Loading {}),
            }
        }
    )
}

#[derive(Debug, Clone, PartialEq)]
enum Action {
    Score(ScoreCommand),
    Finish(FinishCommand),
    Undo,
}

#[component]
fn ScoreRow(summary: MatchSummary, on_select: EventHandler<MatchSummary>) -> Element {
    let finished = summary.is_finished();
    let row = summary.clone();

    rsx!(
        tr {
            td { "{summary.home_name()} - {summary.away_name()}" }
            td { "{summary.score_line()}" }
            td { span { class: "badge badge-sm", "{summary.status()}" } }
            td {
                button {
                    class: "btn btn-primary btn-xs",
                    disabled: finished,
                    onclick: move |_| on_select.call(row.clone()),
                    "Skor Gir"
                }
            }
        }
    )
}

#[component]
fn ConfirmBar(
    pending: Pending,
    home_score: i32,
    away_score: i32,
    disabled: bool,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    let question = match &pending {
        Pending::Finish(m) => format!(
            "{} {} - {} {}: maçı sonlandırmak istediğinize emin misiniz?",
            m.home_name(),
            home_score,
            away_score,
            m.away_name()
        ),
        Pending::Undo => "Son işlemi geri almak istediğinize emin misiniz?".to_string(),
    };

    rsx!(
        div { role: "alert", class: "alert alert-warning flex justify-between",
            span { "{question}" }
            div { class: "flex gap-2",
                button { class: "btn btn-sm", disabled, onclick: move |_| on_confirm.call(()), "Evet" }
                button { class: "btn btn-ghost btn-sm", onclick: move |_| on_cancel.call(()), "Vazgeç" }
            }
        }
    )
}

#[component]
fn HistoryList(entries: Vec<Value>) -> Element {
    rsx!(
        div { class: "card shadow-sm",
            div { class: "card-body",
                h2 { class: "card-title text-base", "İşlem Geçmişi" }
                if entries.is_empty() {
                    p { class: "opacity-60 text-sm", "Henüz işlem yok." }
                }
                ul { class: "flex flex-col gap-1",
                    for (description, meta) in entries.iter().rev().map(history_line) {
                        li { class: "text-sm",
                            "{description}"
                            span { class: "opacity-60", " · {meta}" }
                        }
                    }
                }
            }
        }
    )
}

/// Description and `kind time` of a history entry.
fn history_line(entry: &Value) -> (String, String) {
    let description = field_text(entry, &["aciklama"]).unwrap_or_else(|| entry.to_string());
    let meta = [
        field_text(entry, &["tip", "islemTipi"]),
        field_text(entry, &["zaman"]),
    ]
    .into_iter()
    .flatten()
    .collect::<Vec<_>>()
    .join(" ");

    (description, meta)
}
