use dioxus::document::Title;
use dioxus::prelude::*;

use crate::{
    client::{
        api::ApiClient,
        components::{api_error, ErrorAlert, Guarded, Loading, Page},
        guard::Access,
        router::Route,
    },
    model::user::{ProfileComment, UserProfile},
};

#[component]
pub fn Profile() -> Element {
    rsx!(
        Title { "Profilim | FootBase" }
        Guarded { access: Access::Authenticated,
            ProfileContent {}
        }
    )
}

#[component]
fn ProfileContent() -> Element {
    let api = use_context::<ApiClient>();

    let profile = use_resource(move || {
        let api = api.clone();
        async move { api.users().me().await }
    });

    rsx!(
        Page { class: "flex flex-col gap-4",
            h1 { class: "text-2xl font-bold", "Profilim" }
            match &*profile.read() {
                Some(Ok(Some(profile))) => rsx!(ProfileCard { profile: profile.clone() }),
                Some(Ok(None)) => rsx!(ErrorAlert { message: "Profil bulunamadı" }),
                Some(Err(err)) => api_error(err, "Profil bilgileri alınamadı. Lütfen tekrar deneyin."),
                None => rsx!(Loading {}),
            }
        }
    )
}

#[component]
fn ProfileCard(profile: UserProfile) -> Element {
    let joined = profile
        .created_at
        .as_deref()
        .and_then(|at| at.get(..10))
        .unwrap_or("-")
        .to_string();

    rsx!(
        div { class: "card shadow-sm",
            div { class: "card-body",
                h2 { class: "card-title", {profile.display_name.clone().unwrap_or_default()} }
                p { class: "opacity-60", {profile.email.clone().unwrap_or_default()} }
                p { class: "opacity-60", "Üyelik tarihi: {joined}" }
                div { class: "flex gap-2",
                    span { class: "badge", "Takipçi: {profile.followers_count}" }
                    span { class: "badge", "Takip: {profile.following_count}" }
                }
            }
        }
        h2 { class: "text-lg font-bold", "Son Yorumlarım" }
        if profile.recent_comments.is_empty() {
            p { class: "opacity-60", "Henüz yorumunuz yok." }
        }
        for comment in profile.recent_comments.iter().cloned() {
            RecentComment { comment }
        }
    )
}

#[component]
fn RecentComment(comment: ProfileComment) -> Element {
    rsx!(
        div { class: "card shadow-sm",
            div { class: "card-body gap-1",
                div { class: "flex justify-between items-center",
                    p { class: "font-bold", {comment.match_title.clone().unwrap_or_else(|| "Yorum".to_string())} }
                    if let Some(id) = comment.match_id {
                        Link { to: Route::MatchDetail { id }, class: "btn btn-ghost btn-xs", "Maça Git" }
                    }
                    if let Some(id) = comment.player_id {
                        Link { to: Route::PlayerDetail { id }, class: "btn btn-ghost btn-xs", "Oyuncuya Git" }
                    }
                }
                p { {comment.message.clone().unwrap_or_default()} }
                p { class: "text-xs opacity-60", {comment.created_at.clone().unwrap_or_default()} }
            }
        }
    )
}
