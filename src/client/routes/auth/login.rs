use dioxus::document::Title;
use dioxus::prelude::*;

use crate::client::{
    components::{ErrorAlert, Page},
    router::Route,
    session::AuthService,
    store::user::UserState,
};

#[component]
pub fn Login() -> Element {
    let auth = use_context::<AuthService>();
    let mut user_state = use_context::<Signal<UserState>>();
    let navigator = navigator();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut loading = use_signal(|| false);

    let submit = move |_: MouseEvent| {
        let auth = auth.clone();
        let email_value = email().trim().to_string();
        let password_value = password();

        if email_value.is_empty() || password_value.trim().is_empty() {
            error.set(Some("E-posta ve şifre gereklidir.".to_string()));
            return;
        }

        spawn(async move {
            loading.set(true);
            error.set(None);

            match auth.login(&email_value, &password_value).await {
                Ok(_) => {
                    user_state.set(UserState::from_session(auth.session()));
                    navigator.push(Route::Home {});
                }
                Err(e) => error.set(Some(e.display_message("Giriş başarısız. Lütfen tekrar deneyin."))),
            }

            loading.set(false);
        });
    };

    rsx!(
        Title { "Giriş Yap | FootBase" }
        Page { class: "flex justify-center",
            div { class: "card shadow-sm w-full max-w-96 h-fit",
                div { class: "card-body flex flex-col gap-2",
                    h2 { class: "card-title", "Giriş Yap" }
                    if let Some(message) = error() {
                        ErrorAlert { message }
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
                    button {
                        class: "btn btn-primary",
                        disabled: loading(),
                        onclick: submit,
                        if loading() { "Giriş yapılıyor..." } else { "Giriş Yap" }
                    }
                    p { class: "text-sm",
                        "Hesabın yok mu? "
                        Link { to: Route::Register {}, class: "link", "Kayıt ol" }
                    }
                }
            }
        }
    )
}
