use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaFutbol;
use dioxus_free_icons::Icon;

use crate::client::router::Route;

#[component]
pub fn FootbaseTitleButton() -> Element {
    rsx!(
        Link {
            to: Route::Home {},
            div { class: "flex items-center gap-2",
                Icon {
                    width: 22,
                    height: 22,
                    icon: FaFutbol
                }
                p { class: "text-xl",
                    "FootBase"
                }
            }
        }
    )
}
