use dioxus::prelude::*;

use crate::{client::router::Route, model::matches::MatchSummary};

/// One line of a match list linking to the match detail page.
#[component]
pub fn MatchRow(summary: MatchSummary) -> Element {
    let kickoff = match (&summary.tarih, &summary.saat) {
        (Some(tarih), Some(saat)) => format!("{} {}", tarih, saat),
        (Some(tarih), None) => tarih.clone(),
        _ => String::new(),
    };

    rsx!(
        Link { to: Route::MatchDetail { id: summary.id },
            div { class: "match-row py-1",
                span { class: "home", "{summary.home_name()}" }
                span { class: "score", "{summary.score_line()}" }
                span { "{summary.away_name()}" }
            }
            div { class: "flex justify-between text-xs opacity-60",
                span { "{kickoff}" }
                span { class: "badge badge-sm", "{summary.status()}" }
            }
        }
    )
}
