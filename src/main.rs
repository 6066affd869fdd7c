#![allow(non_snake_case)]

fn main() {
    dioxus::launch(footbase::client::App);
}
