use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Match approval state meaning the match is published.
pub const PUBLISHED: &str = "YAYINDA";

/// Approval state of a submitted match awaiting an admin.
pub const AWAITING_APPROVAL: &str = "ONAY_BEKLIYOR";

/// Approval state of a match an admin turned down.
pub const REJECTED: &str = "REDDEDILDI";

/// Match state before kickoff, also shown when the backend sends no state.
pub const PLANNED: &str = "PLANLI";

/// Match state meaning the match has been finished.
pub const FINISHED: &str = "BITTI";

/// Team as embedded in a match. Some endpoints send only the team name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "TeamRefRepr")]
pub struct TeamRef {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default, alias = "name")]
    pub ad: Option<String>,
    #[serde(default)]
    pub logo: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TeamRefRepr {
    Name(String),
    Full {
        #[serde(default)]
        id: Option<i64>,
        #[serde(default, alias = "name")]
        ad: Option<String>,
        #[serde(default)]
        logo: Option<String>,
    },
}

impl From<TeamRefRepr> for TeamRef {
    fn from(repr: TeamRefRepr) -> Self {
        match repr {
            TeamRefRepr::Name(name) => TeamRef {
                id: None,
                ad: Some(name),
                logo: None,
            },
            TeamRefRepr::Full { id, ad, logo } => TeamRef { id, ad, logo },
        }
    }
}

impl TeamRef {
    pub fn name_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.ad.as_deref().unwrap_or(fallback)
    }
}

/// Match as listed by the backend.
///
/// The backend has served both Turkish and English field names over time, so
/// the English spellings are accepted as aliases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchSummary {
    pub id: i64,
    #[serde(default, alias = "homeTeam")]
    pub ev_sahibi_takim: Option<TeamRef>,
    #[serde(default, alias = "awayTeam")]
    pub deplasman_takim: Option<TeamRef>,
    #[serde(default, alias = "homeScore")]
    pub ev_sahibi_skor: Option<i32>,
    #[serde(default, alias = "awayScore")]
    pub deplasman_skor: Option<i32>,
    #[serde(default)]
    pub tarih: Option<String>,
    #[serde(default)]
    pub saat: Option<String>,
    #[serde(default)]
    pub kickoff_at: Option<String>,
    #[serde(default, alias = "status")]
    pub durum: Option<String>,
    #[serde(default)]
    pub onay_durumu: Option<String>,
}

impl MatchSummary {
    pub fn home_name(&self) -> &str {
        self.ev_sahibi_takim
            .as_ref()
            .map(|t| t.name_or("Ev Sahibi"))
            .unwrap_or("Ev Sahibi")
    }

    pub fn away_name(&self) -> &str {
        self.deplasman_takim
            .as_ref()
            .map(|t| t.name_or("Deplasman"))
            .unwrap_or("Deplasman")
    }

    /// Score line such as `2 - 1`, or `-` when no score has been entered.
    pub fn score_line(&self) -> String {
        match (self.ev_sahibi_skor, self.deplasman_skor) {
            (Some(home), Some(away)) => format!("{} - {}", home, away),
            _ => "-".to_string(),
        }
    }

    /// Whether either the match state or its approval state marks it as published.
    pub fn is_published(&self) -> bool {
        self.durum.as_deref() == Some(PUBLISHED) || self.onay_durumu.as_deref() == Some(PUBLISHED)
    }

    pub fn status(&self) -> &str {
        self.durum.as_deref().unwrap_or(PLANNED)
    }

    pub fn is_finished(&self) -> bool {
        self.durum.as_deref() == Some(FINISHED)
    }

    /// Kickoff time from `kickoffAt`, else `tarih` and `saat`, else midnight of `tarih`.
    /// An unparsable `kickoffAt` falls through to the date fields.
    pub fn kickoff(&self) -> Option<NaiveDateTime> {
        let parsed = self.kickoff_at.as_deref().and_then(|at| {
            at.parse::<NaiveDateTime>()
                .ok()
                .or_else(|| NaiveDateTime::parse_from_str(at, "%Y-%m-%dT%H:%M").ok())
        });
        if parsed.is_some() {
            return parsed;
        }

        let date = NaiveDate::parse_from_str(self.tarih.as_deref()?, "%Y-%m-%d").ok()?;
        let time = self
            .saat
            .as_deref()
            .and_then(|saat| {
                NaiveTime::parse_from_str(saat, "%H:%M:%S")
                    .or_else(|_| NaiveTime::parse_from_str(saat, "%H:%M"))
                    .ok()
            })
            .unwrap_or(NaiveTime::MIN);

        Some(date.and_time(time))
    }

    /// Label of the approval state shown to the submitting editor.
    pub fn approval_label(&self) -> &str {
        match self.onay_durumu.as_deref() {
            Some(AWAITING_APPROVAL) => "Onay Bekliyor",
            Some(REJECTED) => "Reddedildi",
            Some(PUBLISHED) => "Onaylandı",
            Some(other) => other,
            None => "-",
        }
    }

    /// An editor manages a match once it is approved and has kicked off.
    pub fn can_manage(&self, now: NaiveDateTime) -> bool {
        self.onay_durumu.as_deref() == Some(PUBLISHED)
            && self.kickoff().is_some_and(|kickoff| kickoff <= now)
    }

    /// Whether either team name contains `term` (case-insensitive) and the state
    /// equals `status` when one is given.
    pub fn matches_filter(&self, term: &str, status: Option<&str>) -> bool {
        if let Some(status) = status {
            let current = self.durum.as_deref().unwrap_or_default().to_uppercase();
            if current != status {
                return false;
            }
        }

        let term = term.to_lowercase();
        self.home_name().to_lowercase().contains(&term)
            || self.away_name().to_lowercase().contains(&term)
    }
}

/// Split matches into those kicking off after `now` and the rest, keeping order.
pub fn split_by_kickoff(
    matches: Vec<MatchSummary>,
    now: NaiveDateTime,
) -> (Vec<MatchSummary>, Vec<MatchSummary>) {
    matches
        .into_iter()
        .partition(|m| m.kickoff().is_some_and(|kickoff| kickoff > now))
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdRef {
    pub id: i64,
}

/// Match submitted by an editor for admin approval.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMatch {
    pub ev_sahibi_takim: IdRef,
    pub deplasman_takim: IdRef,
    pub tarih: String,
    pub saat: String,
    pub hakem: Option<IdRef>,
}

/// Unvalidated input of the match submission form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatchForm {
    pub home_team_id: Option<i64>,
    pub away_team_id: Option<i64>,
    pub tarih: String,
    pub saat: String,
    pub hakem_id: Option<i64>,
}

impl MatchForm {
    /// Check the form and build the submission, or return the message to show.
    pub fn validate(&self) -> Result<NewMatch, &'static str> {
        let (home, away) = match (self.home_team_id, self.away_team_id) {
            (Some(home), Some(away)) => (home, away),
            _ => return Err("Lütfen ev sahibi ve deplasman takımını seçin"),
        };

        if home == away {
            return Err("Ev sahibi ve deplasman takımı aynı olamaz");
        }
        if self.tarih.trim().is_empty() {
            return Err("Lütfen maç tarihini girin");
        }
        if self.saat.trim().is_empty() {
            return Err("Lütfen maç saatini girin");
        }

        Ok(NewMatch {
            ev_sahibi_takim: IdRef { id: home },
            deplasman_takim: IdRef { id: away },
            tarih: self.tarih.trim().to_string(),
            saat: self.saat.trim().to_string(),
            hakem: self.hakem_id.map(|id| IdRef { id }),
        })
    }
}

/// Direct score overwrite by an editor, not undoable.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreUpdate {
    pub ev_sahibi_skor: i32,
    pub deplasman_skor: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventKind {
    Gol,
    SariKart,
    KirmiziKart,
}

impl EventKind {
    pub const ALL: [EventKind; 3] = [EventKind::Gol, EventKind::SariKart, EventKind::KirmiziKart];

    pub fn code(&self) -> &'static str {
        match self {
            EventKind::Gol => "GOL",
            EventKind::SariKart => "SARI_KART",
            EventKind::KirmiziKart => "KIRMIZI_KART",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.code() == code)
    }

    pub fn label(&self) -> &'static str {
        match self {
            EventKind::Gol => "Gol",
            EventKind::SariKart => "Sarı Kart",
            EventKind::KirmiziKart => "Kırmızı Kart",
        }
    }
}

/// Goal or card recorded by an editor during a match.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchEvent {
    pub oyuncu: IdRef,
    pub olay_tipi: EventKind,
    pub dakika: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prediction {
    pub home_score: i32,
    pub away_score: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentRequest {
    pub message: String,
}

/// Reversible score update, executed as a command by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreCommand {
    pub mac_id: i64,
    pub ev_sahibi_skor: i32,
    pub deplasman_skor: i32,
    pub aciklama: String,
}

impl ScoreCommand {
    pub fn new(mac_id: i64, ev_sahibi_skor: i32, deplasman_skor: i32) -> Self {
        Self {
            mac_id,
            ev_sahibi_skor,
            deplasman_skor,
            aciklama: format!("Skor güncellendi: {}-{}", ev_sahibi_skor, deplasman_skor),
        }
    }
}

/// Reversible match finish, executed as a command by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinishCommand {
    pub mac_id: i64,
    pub ev_sahibi_skor: i32,
    pub deplasman_skor: i32,
    pub durum: String,
    pub aciklama: String,
}

impl FinishCommand {
    pub fn new(mac_id: i64, ev_sahibi_skor: i32, deplasman_skor: i32) -> Self {
        Self {
            mac_id,
            ev_sahibi_skor,
            deplasman_skor,
            durum: FINISHED.to_string(),
            aciklama: "Maç sonlandırıldı".to_string(),
        }
    }
}

/// Outcome of a score, finish or undo command.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandResult {
    #[serde(default)]
    pub basarili: bool,
    #[serde(default)]
    pub mesaj: Option<String>,
    #[serde(default)]
    pub islem_tipi: Option<String>,
    #[serde(default)]
    pub sonuc: Option<String>,
}

impl CommandResult {
    /// The result when the backend executed the command, its message otherwise.
    pub fn check(self, fallback: &str) -> Result<Self, String> {
        if self.basarili {
            Ok(self)
        } else {
            Err(self
                .mesaj
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| fallback.to_string()))
        }
    }
}

/// Executed commands, newest last. Entries are opaque to the client.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CommandHistory {
    #[serde(default)]
    pub gecmis: Vec<Value>,
}

impl CommandHistory {
    pub fn len(&self) -> usize {
        self.gecmis.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gecmis.is_empty()
    }
}
