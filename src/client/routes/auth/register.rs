use dioxus::document::Title;
use dioxus::prelude::*;

use crate::{
    client::{
        components::{ErrorAlert, Page},
        router::Route,
        session::AuthService,
        store::user::UserState,
    },
    model::user::RegisterRequest,
};

#[component]
pub fn Register() -> Element {
    let auth = use_context::<AuthService>();
    let mut user_state = use_context::<Signal<UserState>>();
    let navigator = navigator();

    let mut username = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut loading = use_signal(|| false);

    let submit = move |_: MouseEvent| {
        let auth = auth.clone();
        let request = match RegisterRequest::from_form(&username(), &email(), &password(), &confirm()) {
            Ok(request) => request,
            Err(message) => {
                error.set(Some(message.to_string()));
                return;
            }
        };

        spawn(async move {
            loading.set(true);
            error.set(None);

            match auth.register(&request).await {
                Ok(_) => {
                    user_state.set(UserState::from_session(auth.session()));
                    navigator.push(Route::Home {});
                }
                Err(e) => error.set(Some(e.display_message("Kayıt başarısız. Lütfen tekrar deneyin."))),
            }

            loading.set(false);
        });
    };

    rsx!(
        Title { "Kayıt Ol | FootBase" }
        Page { class: "flex justify-center",
            div { class: "card shadow-sm w-full max-w-96 h-fit",
                div { class: "card-body flex flex-col gap-2",
                    h2 { class: "card-title", "Kayıt Ol" }
                    if let Some(message) = error() {
                        ErrorAlert { message }
                    }
                    input {
                        class: "input w-full",
                        placeholder: "Kullanıcı adı",
                        value: "{username}",
                        oninput: move |e| username.set(e.value()),
                    }
                    input {
                        class: "input w-full",
                        r#type: "email",
                        placeholder: "E-posta",
                        value: "{email}",
                        oninput: move |e| email.set(e.value()),
                    }
                    input {
                        class: "input w-full",
                        r#type: "password",
                        placeholder: "Şifre",
                        value: "{password}",
                        oninput: move |e| password.set(e.value()),
                    }
                    input {
                        class: "input w-full",
                        r#type: "password",
                        placeholder: "Şifre (tekrar)",
                        value: "{confirm}",
                        oninput: move |e| confirm.set(e.value()),
                    }
                    button {
                        class: "btn btn-primary",
                        disabled: loading(),
                        onclick: submit,
                        if loading() { "Kaydediliyor..." } else { "Kayıt Ol" }
                    }
                    p { class: "text-sm",
                        "Zaten hesabın var mı? "
                        Link { to: Route::Login {}, class: "link", "Giriş yap" }
                    }
                }
            }
        }
    )
}
