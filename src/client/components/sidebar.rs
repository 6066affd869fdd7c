use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{
    FaCircleCheck, FaCirclePlus, FaFutbol, FaHouse, FaRightToBracket, FaUser, FaUsers,
};
use dioxus_free_icons::Icon;

use crate::client::{menu::menu, session::Session, store::user::UserState};

#[component]
pub fn Sidebar() -> Element {
    let session = use_context::<Session>();
    let user_state = use_context::<Signal<UserState>>();

    // Rebuilt on every render; reading the snapshot re-renders on login/logout.
    let _ = user_state.read();
    let group = menu(&session);

    rsx! {
        aside { class: "w-56 min-h-screen bg-base-100 border-r border-base-300 p-2",
            div { class: "flex items-center gap-2 px-3 py-2 font-bold",
                MenuIcon { name: group.icon }
                "{group.name}"
            }
            ul { class: "menu w-full",
                for entry in group.children {
                    li { key: "{entry.key}",
                        Link { to: entry.link,
                            MenuIcon { name: entry.icon }
                            "{entry.name}"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn MenuIcon(name: &'static str) -> Element {
    match name {
        "home" => rsx!(Icon { width: 16, height: 16, icon: FaHouse }),
        "football" => rsx!(Icon { width: 16, height: 16, icon: FaFutbol }),
        "people" => rsx!(Icon { width: 16, height: 16, icon: FaUsers }),
        "person" => rsx!(Icon { width: 16, height: 16, icon: FaUser }),
        "log-in" => rsx!(Icon { width: 16, height: 16, icon: FaRightToBracket }),
        "add-circle" => rsx!(Icon { width: 16, height: 16, icon: FaCirclePlus }),
        "checkmark-circle" => rsx!(Icon { width: 16, height: 16, icon: FaCircleCheck }),
        _ => rsx!(),
    }
}
