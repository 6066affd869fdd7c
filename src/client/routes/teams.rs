use dioxus::document::Title;
use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        api::ApiClient,
        components::{api_error, ErrorAlert, Loading, MatchRow, Page},
        router::Route,
        routes::players::{PlayerTable, ValueCard},
        util::json::{field_text, path_text},
    },
    model::{matches::TeamRef, player::PlayerSummary},
};

#[component]
pub fn Teams() -> Element {
    let api = use_context::<ApiClient>();

    let teams = use_resource(move || {
        let api = api.clone();
        async move { api.teams().list().await }
    });

    rsx!(
        Title { "Takımlar | FootBase" }
        Page { class: "flex flex-col gap-4",
            h1 { class: "text-2xl font-bold", "Takımlar" }
            match &*teams.read() {
                Some(Ok(list)) => rsx!(
                    div { class: "grid sm:grid-cols-2 md:grid-cols-3 gap-4",
                        for team in list.iter().filter(|t| t.id.is_some()).cloned() {
                            TeamCard { team }
                        }
                    }
                ),
                Some(Err(err)) => api_error(err, "Takımlar yüklenemedi."),
                None => rsx!(Loading {}),
            }
        }
    )
}

#[component]
fn TeamCard(team: TeamRef) -> Element {
    let Some(id) = team.id else {
        return rsx!();
    };
    let name = team.name_or("İsimsiz").to_string();

    rsx!(
        Link { to: Route::TeamDetail { id },
            div { class: "card shadow-sm hover:bg-base-200",
                div { class: "card-body flex-row items-center gap-4",
                    if let Some(logo) = &team.logo {
                        img { class: "w-12 h-12 object-contain", src: "{logo}", alt: "{name}" }
                    }
                    h2 { class: "card-title", "{name}" }
                }
            }
        }
    )
}

#[component]
pub fn TeamDetail(id: i64) -> Element {
    let api = use_context::<ApiClient>();

    let detail = use_resource(use_reactive!(|id| {
        let api = api.clone();
        async move {
            let teams = api.teams();
            let team = teams.get(id).await?;

            let players = teams.players(id).await.unwrap_or_else(|e| {
                tracing::warn!("Failed to load players of team {}: {}", id, e);
                Vec::new()
            });
            let matches = teams.matches(id).await.unwrap_or_else(|e| {
                tracing::warn!("Failed to load matches of team {}: {}", id, e);
                Vec::new()
            });
            let statistics = teams.statistics(id).await.unwrap_or_else(|e| {
                tracing::warn!("Failed to load statistics of team {}: {}", id, e);
                serde_json::Value::Null
            });

            Ok::<_, crate::client::error::ApiError>((team, players, matches, statistics))
        }
    }));

    rsx!(
        Title { "Takım Detayı | FootBase" }
        Page { class: "flex flex-col gap-4",
            match &*detail.read() {
                Some(Ok((team, players, matches, statistics))) if !team.is_null() => {
                    let name = field_text(team, &["ad", "name"]).unwrap_or_else(|| "İsimsiz".to_string());
                    let city = field_text(team, &["sehir", "city"]).unwrap_or_default();
                    let stadium = field_text(team, &["stadyum", "stadium"])
                        .or_else(|| path_text(team, &["stadyum", "ad"]))
                        .unwrap_or_default();
                    let players: Vec<PlayerSummary> = players.clone();

                    rsx!(
                        h1 { class: "text-2xl font-bold", "{name}" }
                        p { class: "opacity-60", "{city} {stadium}" }
                        ValueCard { title: "İstatistikler", value: statistics.clone() }
                        div { class: "card shadow-sm",
                            div { class: "card-body",
                                h2 { class: "card-title", "Kadro" }
                                PlayerTable { players }
                            }
                        }
                        div { class: "card shadow-sm",
                            div { class: "card-body",
                                h2 { class: "card-title", "Maçlar" }
                                for m in matches.iter().cloned() {
                                    MatchRow { key: "{m.id}", summary: m }
                                }
                            }
                        }
                    )
                }
                Some(Ok(_)) => rsx!(ErrorAlert { message: "Kayıt bulunamadı" }),
                Some(Err(err)) => api_error(err, "Veri yüklenemedi. Lütfen tekrar deneyin."),
                None => rsx!(Loading {}),
            }
        }
    )
}
