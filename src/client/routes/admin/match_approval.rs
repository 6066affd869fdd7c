use dioxus::document::Title;
use dioxus::prelude::*;

use crate::{
    client::{
        api::ApiClient,
        components::{api_error, ErrorAlert, Guarded, Loading, Page, SuccessAlert},
        guard::Access,
        router::Route,
    },
    model::matches::MatchSummary,
};

#[component]
pub fn AdminMatchApproval() -> Element {
    rsx!(
        Title { "Maç Onayları | FootBase" }
        Guarded { access: Access::Admin,
            Page { class: "flex flex-col gap-4",
                div { class: "flex justify-between items-center",
                    h1 { class: "text-2xl font-bold", "Maç Onayları" }
                    Link { to: Route::AdminScoreManagement {}, class: "btn btn-outline btn-sm", "Skor Yönetimi" }
                }
                PendingMatches {}
            }
        }
    )
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Decision {
    Approve,
    Reject,
}

#[component]
fn PendingMatches() -> Element {
    let api = use_context::<ApiClient>();

    let mut error = use_signal(|| None::<String>);
    let mut success = use_signal(|| None::<String>);
    let mut busy = use_signal(|| None::<i64>);

    let load_api = api.clone();
    let mut pending = use_resource(move || {
        let api = load_api.clone();
        async move { api.admin().pending_matches().await }
    });

    let decide = use_callback(move |(id, decision): (i64, Decision)| {
        let api = api.clone();
        spawn(async move {
            busy.set(Some(id));
            error.set(None);

            let result = match decision {
                Decision::Approve => api.admin().approve_match(id).await,
                Decision::Reject => api.admin().reject_match(id).await,
            };

            match (result, decision) {
                (Ok(_), Decision::Approve) => success.set(Some("Maç onaylandı ve yayına alındı.".to_string())),
                (Ok(_), Decision::Reject) => success.set(Some("Maç reddedildi.".to_string())),
                (Err(e), Decision::Approve) => error.set(Some(e.display_message("Maç onaylanırken bir hata oluştu"))),
                (Err(e), Decision::Reject) => error.set(Some(e.display_message("Maç reddedilirken bir hata oluştu"))),
            }

            busy.set(None);
            pending.restart();
        });
    });

    rsx!(
        if let Some(message) = error() {
            ErrorAlert { message }
        }
        if let Some(message) = success() {
            SuccessAlert { message }
        }
        match &*pending.read() {
            Some(Ok(list)) if list.is_empty() => rsx!(
                p { class: "opacity-60", "Onay bekleyen maç yok." }
            ),
            Some(Ok(list)) => rsx!(
                div { class: "overflow-x-auto",
                    table { class: "table table-md",
                        thead {
                            tr {
                                th { "Maç" }
                                th { "Tarih" }
                                th { "Saat" }
                                th { "İşlemler" }
                            }
                        }
                        tbody {
                            for m in list.iter().cloned() {
                                PendingRow {
                                    key: "{m.id}",
                                    disabled: busy() == Some(m.id),
                                    on_decide: decide,
                                    summary: m,
                                }
                            }
                        }
                    }
                }
            ),
            Some(Err(err)) => api_error(err, "Bekleyen maçlar yüklenemedi."),
            None => rsx!(Loading {}),
        }
    )
}

#[component]
fn PendingRow(
    summary: MatchSummary,
    disabled: bool,
    on_decide: EventHandler<(i64, Decision)>,
) -> Element {
    let id = summary.id;

    rsx!(
        tr {
            td { "{summary.home_name()} - {summary.away_name()}" }
            td { {summary.tarih.clone().unwrap_or_else(|| "-".to_string())} }
            td { {summary.saat.clone().unwrap_or_else(|| "-".to_string())} }
            td { class: "flex gap-2",
                button {
                    class: "btn btn-success btn-xs",
                    disabled,
                    onclick: move |_| on_decide.call((id, Decision::Approve)),
                    "Onayla"
                }
                button {
                    class: "btn btn-error btn-xs",
                    disabled,
                    onclick: move |_| on_decide.call((id, Decision::Reject)),
                    "Reddet"
                }
            }
        }
    )
}
