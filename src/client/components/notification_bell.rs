use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaBell;
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;

use crate::client::{
    api::{notifications::DEFAULT_RECENT_LIMIT, ApiClient},
    router::Route,
    store::user::UserState,
    util::time::format_relative_time,
};

/// Navbar bell with the unread count and the most recent notifications.
#[component]
pub fn NotificationBell() -> Element {
    let api = use_context::<ApiClient>();
    let user_state = use_context::<Signal<UserState>>();
    let mut open = use_signal(|| false);

    let count_api = api.clone();
    let unread = use_resource(move || {
        let api = count_api.clone();
        // Refetch after login/logout.
        let _ = user_state.read();
        async move { api.notifications().unread_count().await }
    });

    let recent = use_resource(move || {
        let api = api.clone();
        let open = open();
        async move {
            if !open {
                return Ok(Vec::new());
            }
            api.notifications().recent(DEFAULT_RECENT_LIMIT).await
        }
    });

    let count = match &*unread.read() {
        Some(Ok(count)) => *count,
        Some(Err(err)) => {
            tracing::debug!("Failed to fetch unread notification count: {}", err);
            0
        }
        None => 0,
    };

    let items = match &*recent.read() {
        Some(Ok(list)) => list.clone(),
        _ => Vec::new(),
    };

    rsx! {
        div { class: "relative",
            button {
                class: "btn btn-ghost btn-circle",
                onclick: move |_| open.toggle(),
                div { class: "indicator",
                    Icon { width: 20, height: 20, icon: FaBell }
                    if count > 0 {
                        span { class: "badge badge-sm badge-primary indicator-item", "{count}" }
                    }
                }
            }
            if open() {
                ul { class: "menu absolute right-0 w-80 bg-base-100 shadow rounded-box",
                    if items.is_empty() {
                        li { class: "p-2 text-sm", "Bildirim yok" }
                    }
                    for notification in items {
                        li { key: "{notification.id}",
                            class: if notification.okundu { "" } else { "font-bold" },
                            div { class: "flex flex-col items-start",
                                span { {notification.baslik.clone().unwrap_or_default()} }
                                if let Some(created) = notification.olusturma_tarihi {
                                    span { class: "text-xs opacity-60", {format_relative_time(&created)} }
                                }
                            }
                        }
                    }
                    li {
                        Link { to: Route::Notifications {}, onclick: move |_| open.set(false), "Tümünü gör" }
                    }
                }
            }
        }
    }
}
