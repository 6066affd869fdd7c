use dioxus::prelude::*;

use crate::client::{
    components::AppLayout,
    routes::{
        admin::AdminMatchApproval,
        auth::{Login, Register},
        editor::{EditorMatchAdd, EditorMatchEvents},
        score_management::{AdminScoreManagement, EditorScoreManagement},
        Home, MatchDetail, Matches, NotFound, Notifications, PlayerDetail, Players, Profile,
        TeamDetail, Teams,
    },
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[redirect("/", || Route::Matches {})]
    #[redirect("/login", || Route::Login {})]
    #[redirect("/register", || Route::Register {})]

    #[nest("/app")]

        #[layout(AppLayout)]

        #[route("/")]
        Home {},

        #[route("/matches")]
        Matches {},

        #[route("/matches/:id")]
        MatchDetail { id: i64 },

        #[route("/players")]
        Players {},

        #[route("/players/:id")]
        PlayerDetail { id: i64 },

        #[route("/teams")]
        Teams {},

        #[route("/teams/:id")]
        TeamDetail { id: i64 },

        #[route("/login")]
        Login {},

        #[route("/register")]
        Register {},

        #[route("/profile")]
        Profile {},

        #[route("/notifications")]
        Notifications {},

        #[route("/editor/match/add")]
        EditorMatchAdd {},

        #[route("/editor/matches/:id/events")]
        EditorMatchEvents { id: i64 },

        #[route("/editor/matches/score")]
        EditorScoreManagement {},

        #[route("/admin/matches/approval")]
        AdminMatchApproval {},

        #[route("/admin/matches/score")]
        AdminScoreManagement {},

        #[route("/:..segments", NotFound)]
        AppNotFound { segments: Vec<String> },

        #[end_layout]

    #[end_nest]

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
