use dioxus::document::Title;
use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        api::ApiClient,
        components::{api_error, Guarded, Loading, Page},
        guard::Access,
        util::time::format_relative_time,
    },
    model::notification::{unread, Notification},
};

#[component]
pub fn Notifications() -> Element {
    rsx!(
        Title { "Bildirimler | FootBase" }
        Guarded { access: Access::Authenticated,
            NotificationList {}
        }
    )
}

#[component]
fn NotificationList() -> Element {
    let api = use_context::<ApiClient>();

    let load_api = api.clone();
    let mut notifications = use_resource(move || {
        let api = load_api.clone();
        async move { api.notifications().all().await }
    });

    let mark_all = move |_: MouseEvent| {
        let api = api.clone();
        spawn(async move {
            if let Err(e) = api.notifications().mark_all_as_read().await {
                tracing::error!("Failed to mark notifications as read: {}", e);
            }
            notifications.restart();
        });
    };

    rsx!(
        Page { class: "flex flex-col gap-4",
            div { class: "flex justify-between items-center",
                h1 { class: "text-2xl font-bold", "Bildirimler" }
                button { class: "btn btn-outline btn-sm", onclick: mark_all, "Tümünü okundu işaretle" }
            }
            match &*notifications.read() {
                Some(Ok(list)) => rsx!(
                    p { class: "opacity-60", "{unread(list)} okunmamış bildirim" }
                    ul { class: "flex flex-col gap-2",
                        for notification in list.iter().cloned() {
                            NotificationItem {
                                key: "{notification.id}",
                                notification,
                                on_changed: move |_| notifications.restart(),
                            }
                        }
                    }
                ),
                Some(Err(err)) => api_error(err, "Bildirimler yüklenirken bir hata oluştu"),
                None => rsx!(Loading {}),
            }
        }
    )
}

#[component]
fn NotificationItem(notification: Notification, on_changed: EventHandler<()>) -> Element {
    let api = use_context::<ApiClient>();
    let navigator = navigator();

    let id = notification.id;
    let read = notification.okundu;
    let target = notification.hedef_url.clone();

    let open_api = api.clone();
    let open = move |_: MouseEvent| {
        let api = open_api.clone();
        let target = target.clone();
        spawn(async move {
            if !read {
                if let Err(e) = api.notifications().mark_as_read(id).await {
                    tracing::error!("Failed to mark notification {} as read: {}", id, e);
                }
            }
            if let Some(target) = target {
                navigator.push(target.as_str());
            }
            on_changed.call(());
        });
    };

    let delete = move |e: MouseEvent| {
        e.stop_propagation();
        let api = api.clone();
        spawn(async move {
            if let Err(e) = api.notifications().delete(id).await {
                tracing::error!("Failed to delete notification {}: {}", id, e);
            }
            on_changed.call(());
        });
    };

    rsx!(
        li {
            class: if read { "card bg-base-100 shadow-sm cursor-pointer" } else { "card bg-base-200 shadow-sm cursor-pointer" },
            onclick: open,
            div { class: "card-body p-4 flex-row justify-between items-start",
                div { class: "flex flex-col gap-1",
                    p { class: if read { "" } else { "font-bold" },
                        {notification.baslik.clone().unwrap_or_default()}
                    }
                    p { class: "text-sm", {notification.mesaj.clone().unwrap_or_default()} }
                    div { class: "flex gap-2 text-xs opacity-60",
                        if let Some(kind) = &notification.bildirim_tipi {
                            span { class: "badge badge-sm", "{kind}" }
                        }
                        if let Some(created) = notification.olusturma_tarihi {
                            span { {format_relative_time(&created)} }
                        }
                    }
                }
                button { class: "btn btn-ghost btn-xs", onclick: delete, "Sil" }
            }
        }
    )
}
