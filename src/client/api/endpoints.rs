//! Backend endpoint paths, relative to the configured API base URL.

pub mod auth {
    pub const LOGIN: &str = "/auth/login";
    pub const REGISTER: &str = "/auth/register";
    pub const RESET_PASSWORD: &str = "/auth/reset-password";
}

pub mod matches {
    pub const LIST: &str = "/matches";

    pub fn get(id: i64) -> String {
        format!("/matches/{}", id)
    }

    pub fn predictions(id: i64) -> String {
        format!("/matches/{}/predictions", id)
    }

    pub fn comments(id: i64) -> String {
        format!("/matches/{}/comments", id)
    }

    pub fn comment(comment_id: i64) -> String {
        format!("/matches/comments/{}", comment_id)
    }

    pub fn like_comment(comment_id: i64) -> String {
        format!("/matches/comments/{}/like", comment_id)
    }

    pub fn teams(id: i64) -> String {
        format!("/matches/{}/teams", id)
    }

    pub fn events(id: i64) -> String {
        format!("/matches/{}/events", id)
    }

    pub fn media(id: i64) -> String {
        format!("/matches/{}/media", id)
    }

    pub fn status_history(id: i64) -> String {
        format!("/matches/{}/status-history", id)
    }
}

pub mod players {
    pub const LIST: &str = "/players";

    pub fn get(id: i64) -> String {
        format!("/players/{}", id)
    }

    pub fn ratings(id: i64) -> String {
        format!("/players/{}/ratings", id)
    }

    pub fn score(id: i64) -> String {
        format!("/players/{}/score", id)
    }

    pub fn media(id: i64) -> String {
        format!("/players/{}/media", id)
    }

    pub fn statistics(id: i64) -> String {
        format!("/players/{}/statistics", id)
    }

    pub fn comments(id: i64) -> String {
        format!("/players/{}/comments", id)
    }
}

pub mod teams {
    pub const LIST: &str = "/teams";

    pub fn get(id: i64) -> String {
        format!("/teams/{}", id)
    }

    pub fn players(id: i64) -> String {
        format!("/teams/{}/players", id)
    }

    pub fn matches(id: i64) -> String {
        format!("/teams/{}/matches", id)
    }

    pub fn statistics(id: i64) -> String {
        format!("/teams/{}/statistics", id)
    }
}

pub mod users {
    pub const ME: &str = "/users/me";
    pub const FEED: &str = "/feed";
    pub const HOME: &str = "/home";

    pub fn profile(id: i64) -> String {
        format!("/users/{}", id)
    }

    pub fn follow(id: i64) -> String {
        format!("/users/{}/follow", id)
    }
}

pub mod editor {
    pub const MATCHES: &str = "/editor/matches";
    pub const MY_MATCHES: &str = "/editor/matches/my-matches";
    pub const SCORE_COMMAND: &str = "/editor/matches/score-command";
    pub const FINISH_COMMAND: &str = "/editor/matches/finish-command";
    pub const UNDO: &str = "/editor/matches/undo";
    pub const HISTORY: &str = "/editor/matches/history";

    pub fn score(id: i64) -> String {
        format!("/editor/matches/{}/score", id)
    }

    pub fn events(id: i64) -> String {
        format!("/editor/matches/{}/events", id)
    }

    pub fn start(id: i64) -> String {
        format!("/editor/matches/{}/start", id)
    }

    pub fn finish(id: i64) -> String {
        format!("/editor/matches/{}/finish", id)
    }
}

pub mod admin {
    pub const MATCHES: &str = "/admin/matches";
    pub const PENDING_MATCHES: &str = "/admin/matches/pending";
    pub const SCORE: &str = "/admin/matches/score";
    pub const FINISH: &str = "/admin/matches/finish";
    pub const UNDO: &str = "/admin/matches/undo";
    pub const HISTORY: &str = "/admin/matches/history";
    pub const TEAMS: &str = "/admin/teams";
    pub const PLAYERS: &str = "/admin/players";

    pub fn match_(id: i64) -> String {
        format!("/admin/matches/{}", id)
    }

    pub fn approve(id: i64) -> String {
        format!("/admin/matches/{}/approve", id)
    }

    pub fn reject(id: i64) -> String {
        format!("/admin/matches/{}/reject", id)
    }

    pub fn team(id: i64) -> String {
        format!("/admin/teams/{}", id)
    }

    pub fn player(id: i64) -> String {
        format!("/admin/players/{}", id)
    }
}

pub mod notifications {
    pub const LIST: &str = "/notifications";
    pub const UNREAD: &str = "/notifications/unread";
    pub const UNREAD_COUNT: &str = "/notifications/unread/count";
    pub const RECENT: &str = "/notifications/recent";
    pub const MARK_ALL_READ: &str = "/notifications/read-all";

    pub fn mark_read(id: i64) -> String {
        format!("/notifications/{}/read", id)
    }

    pub fn delete(id: i64) -> String {
        format!("/notifications/{}", id)
    }
}
