use dioxus::document::Title;
use dioxus::prelude::*;

use crate::{
    client::{
        api::ApiClient,
        components::{api_error, ErrorAlert, Guarded, Loading, Page, SuccessAlert},
        guard::Access,
        router::Route,
    },
    model::matches::{MatchForm, MatchSummary, TeamRef},
};

#[component]
pub fn EditorMatchAdd() -> Element {
    rsx!(
        Title { "Maç Ekle | FootBase" }
        Guarded { access: Access::Editor,
            Page { class: "flex flex-col gap-4",
                div { class: "flex justify-between items-center",
                    h1 { class: "text-2xl font-bold", "Maç Ekle" }
                    Link { to: Route::EditorScoreManagement {}, class: "btn btn-outline btn-sm", "Skor Yönetimi" }
                }
                MatchSubmitForm {}
            }
        }
    )
}

#[component]
fn MatchSubmitForm() -> Element {
    let api = use_context::<ApiClient>();

    let mut form = use_signal(MatchForm::default);
    let mut error = use_signal(|| None::<String>);
    let mut success = use_signal(|| false);
    let mut submitting = use_signal(|| false);

    let teams_api = api.clone();
    let teams = use_resource(move || {
        let api = teams_api.clone();
        async move { api.teams().list().await }
    });

    let mine_api = api.clone();
    let mut my_matches = use_resource(move || {
        let api = mine_api.clone();
        async move { api.editor().my_matches().await }
    });

    let submit = move |_: MouseEvent| {
        let api = api.clone();
        let new_match = match form.read().validate() {
            Ok(new_match) => new_match,
            Err(message) => {
                error.set(Some(message.to_string()));
                success.set(false);
                return;
            }
        };

        spawn(async move {
            submitting.set(true);
            error.set(None);

            match api.editor().create_match(&new_match).await {
                Ok(_) => {
                    success.set(true);
                    form.set(MatchForm::default());
                    my_matches.restart();
                }
                Err(e) => {
                    success.set(false);
                    error.set(Some(e.display_message("Maç eklenirken bir hata oluştu")));
                }
            }
            submitting.set(false);
        });
    };

    let team_options: Vec<TeamRef> = match &*teams.read() {
        Some(Ok(list)) => list.iter().filter(|t| t.id.is_some()).cloned().collect(),
        _ => Vec::new(),
    };

    rsx!(
        div { class: "card shadow-sm",
            div { class: "card-body flex flex-col gap-2",
                if let Some(Err(err)) = &*teams.read() {
                    {api_error(err, "Takımlar yüklenemedi. Lütfen sayfayı yenileyin.")}
                }
                if let Some(message) = error() {
                    ErrorAlert { message }
                }
                if success() {
                    SuccessAlert { message: "Maç onaya gönderildi." }
                }
                TeamSelect {
                    label: "Ev Sahibi",
                    teams: team_options.clone(),
                    selected: form.read().home_team_id,
                    on_select: move |id| form.write().home_team_id = id,
                }
                TeamSelect {
                    label: "Deplasman",
                    teams: team_options,
                    selected: form.read().away_team_id,
                    on_select: move |id| form.write().away_team_id = id,
                }
                input {
                    class: "input",
                    r#type: "date",
                    value: "{form.read().tarih}",
                    oninput: move |e| form.write().tarih = e.value(),
                }
                input {
                    class: "input",
                    r#type: "time",
                    value: "{form.read().saat}",
                    oninput: move |e| form.write().saat = e.value(),
                }
                input {
                    class: "input",
                    r#type: "number",
                    placeholder: "Hakem ID (isteğe bağlı)",
                    value: form.read().hakem_id.map(|id| id.to_string()).unwrap_or_default(),
                    oninput: move |e| form.write().hakem_id = e.value().parse().ok(),
                }
                div { class: "flex gap-2",
                    button {
                        class: "btn btn-primary",
                        disabled: submitting(),
                        onclick: submit,
                        if submitting() { "Ekleniyor..." } else { "Maç Ekle" }
                    }
                    Link { to: Route::Matches {}, class: "btn btn-ghost", "İptal" }
                }
            }
        }
        div { class: "card shadow-sm",
            div { class: "card-body",
                h2 { class: "card-title", "Eklediğim Maçlar" }
                match &*my_matches.read() {
                    Some(Ok(list)) if list.is_empty() => rsx!(
                        p { class: "opacity-60", "Henüz maç eklemediniz veya tüm maçlarınız onaylandı." }
                    ),
                    Some(Ok(list)) => rsx!(MyMatchesTable { matches: list.clone() }),
                    Some(Err(err)) => api_error(err, "Maçlarınız yüklenemedi."),
                    None => rsx!(Loading {}),
                }
            }
        }
    )
}

#[component]
fn TeamSelect(
    label: &'static str,
    teams: Vec<TeamRef>,
    selected: Option<i64>,
    on_select: EventHandler<Option<i64>>,
) -> Element {
    rsx!(
        select {
            class: "select w-full",
            onchange: move |e| on_select.call(e.value().parse().ok()),
            option { value: "", selected: selected.is_none(), "{label} seçin" }
            for team in teams {
                if let Some(id) = team.id {
                    option {
                        value: "{id}",
                        selected: selected == Some(id),
                        {team.name_or("İsimsiz").to_string()}
                    }
                }
            }
        }
    )
}

#[component]
fn MyMatchesTable(matches: Vec<MatchSummary>) -> Element {
    let now = chrono::Local::now().naive_local();

    rsx!(
        div { class: "overflow-x-auto",
            table { class: "table table-md",
                thead {
                    tr {
                        th { "Ev Sahibi" }
                        th { "Deplasman" }
                        th { "Tarih" }
                        th { "Saat" }
                        th { "Durum" }
                        th { "İşlemler" }
                    }
                }
                tbody {
                    for m in matches {
                        tr { key: "{m.id}",
                            td { "{m.home_name()}" }
                            td { "{m.away_name()}" }
                            td { {m.tarih.clone().unwrap_or_else(|| "-".to_string())} }
                            td { {m.saat.clone().unwrap_or_else(|| "-".to_string())} }
                            td { span { class: "badge badge-sm", "{m.approval_label()}" } }
                            td {
                                if m.can_manage(now) {
                                    Link {
                                        to: Route::EditorMatchEvents { id: m.id },
                                        class: "btn btn-primary btn-xs",
                                        "Gol Gir / Yönet"
                                    }
                                } else {
                                    button { class: "btn btn-xs", disabled: true, "Maç Başlamadı" }
                                }
                            }
                        }
                    }
                }
            }
        }
    )
}
