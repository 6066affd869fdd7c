use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use serde_json::Value;

use crate::{
    client::{
        api::ApiClient,
        components::{api_error, Loading, MatchRow, Page},
        router::Route,
        util::json::field_text,
    },
    model::{home::HomeSummary, player::PlayerSummary},
};

#[component]
pub fn Home() -> Element {
    let api = use_context::<ApiClient>();

    let summary = use_resource(move || {
        let api = api.clone();
        async move { api.home().await }
    });

    rsx!(
        Title { "FootBase" }
        Meta {
            name: "description",
            content: "Maç programları, skorlar, oyuncu profilleri ve topluluk yorumları."
        }
        Page { class: "flex flex-col gap-4",
            div { class: "rounded-box bg-primary text-primary-content p-6 flex flex-col gap-2",
                p { class: "text-2xl font-bold", "FootBase: Türkiye futbolunun canlı veritabanı" }
                p { "Maç programları, skorlar, oyuncu profilleri ve topluluk yorumlarını tek ekranda takip et." }
                ul { class: "flex flex-wrap gap-2",
                    li { Link { to: Route::Matches {}, class: "btn btn-secondary", "Maçları Gör" } }
                    li { Link { to: Route::Players {}, class: "btn btn-outline", "Oyuncuları Keşfet" } }
                    li { Link { to: Route::Teams {}, class: "btn btn-outline", "Takımlar" } }
                }
            }
            match &*summary.read() {
                Some(Ok(summary)) => rsx!(HomeContent { summary: summary.clone() }),
                Some(Err(err)) => api_error(err, "Veri yüklenemedi. Lütfen tekrar deneyin."),
                None => rsx!(Loading {}),
            }
        }
    )
}

#[component]
fn HomeContent(summary: HomeSummary) -> Element {
    rsx!(
        div { class: "stats shadow",
            div { class: "stat",
                div { class: "stat-title", "Oyuncu sayısı" }
                div { class: "stat-value", "{summary.player_count}" }
            }
            div { class: "stat",
                div { class: "stat-title", "Takım sayısı" }
                div { class: "stat-value", "{summary.team_count}" }
            }
            if let Some(player) = &summary.top_rated_player {
                TopPlayer { player: player.clone() }
            }
        }
        div { class: "grid md:grid-cols-2 gap-4",
            div { class: "card shadow-sm",
                div { class: "card-body",
                    h2 { class: "card-title", "Yaklaşan maçlar" }
                    if summary.upcoming_matches.is_empty() {
                        p { class: "opacity-60", "Planlanmış maç yok." }
                    }
                    for m in summary.upcoming_matches.iter().cloned() {
                        MatchRow { key: "{m.id}", summary: m }
                    }
                }
            }
            div { class: "card shadow-sm",
                div { class: "card-body",
                    h2 { class: "card-title", "Son yorumlar" }
                    if summary.comments.is_empty() {
                        p { class: "opacity-60", "Henüz yorum yok." }
                    }
                    for comment in summary.comments.iter() {
                        CommentLine { comment: comment.clone() }
                    }
                }
            }
        }
    )
}

#[component]
fn TopPlayer(player: PlayerSummary) -> Element {
    let rating = format!("{:.1}", player.average_rating.unwrap_or(0.0));
    let count = player.rating_count.unwrap_or(0);

    rsx!(
        div { class: "stat",
            div { class: "stat-title", "En yüksek puanlı oyuncu" }
            div { class: "stat-value text-lg", {player.display_name()} }
            div { class: "stat-desc", "{player.team_name()} · {rating} ({count})" }
        }
    )
}

#[component]
fn CommentLine(comment: Value) -> Element {
    let message = field_text(&comment, &["message", "mesaj"]).unwrap_or_else(|| "Yeni yorum".to_string());
    let author = field_text(&comment, &["author"]).unwrap_or_else(|| "Anonim".to_string());
    let context = field_text(&comment, &["macBilgisi"]);

    rsx!(
        div { class: "border-b border-base-300 py-2",
            p { "{message}" }
            p { class: "text-xs opacity-60",
                "{author}"
                if let Some(context) = context {
                    " · Maç: {context}"
                }
            }
        }
    )
}
