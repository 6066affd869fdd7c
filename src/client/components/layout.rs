use dioxus::prelude::*;

use crate::client::{
    components::{Navbar, Sidebar},
    router::Route,
};

#[component]
pub fn AppLayout() -> Element {
    rsx! {
        Navbar {}
        div { class: "flex pt-[64px]",
            Sidebar {}
            main { class: "flex-1 flex justify-center",
                Outlet::<Route> {}
            }
        }
    }
}
