//! Core value types used by Meeplebox state.

/// Supported player counts for a game.
///
/// Both bounds default to 0 when the feed omits them; a zero bound means
/// "unknown" and still participates in range overlap checks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PlayerRange {
    /// Minimum supported player count.
    #[serde(default)]
    pub min: u32,
    /// Maximum supported player count.
    #[serde(default)]
    pub max: u32,
}

/// One board game as delivered by the catalog feed.
///
/// Every field except `title` may be absent in the feed; absence is mapped to
/// a neutral value (empty string, zero, or `None`) at load time so the query
/// engine and the UI never have to special-case missing data.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GameRecord {
    /// Feed-unique identifier, used for featured-game lookup and selection tracking.
    #[serde(default)]
    pub id: i64,
    /// Display title; records without one are dropped at load time.
    pub title: String,
    /// One-paragraph description shown on cards and in the detail view.
    #[serde(default)]
    pub description: String,
    /// Longer rules text shown in the detail view when present.
    #[serde(default)]
    pub rules: String,
    /// Genre label; `None` when the feed omits it (distinct from an empty string).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    /// Supported player counts.
    #[serde(default)]
    pub players: PlayerRange,
    /// Playtime in minutes; `None` when absent or non-numeric in the feed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub playtime: Option<f64>,
    /// Community rating; `None` when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    /// Physical shelf label, display-only.
    #[serde(default)]
    pub shelf: String,
    /// Difficulty label, display-only.
    #[serde(default)]
    pub difficulty: String,
    /// Poster image URL, display-only.
    #[serde(default)]
    pub image: String,
}

/// Sorting key for the visible result list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    /// Keep the filtered order, which equals original catalog order.
    #[default]
    Unsorted,
    /// Title ascending, case-folded.
    Title,
    /// Playtime descending; missing playtime sorts as 0.
    Playtime,
    /// Rating descending; missing rating sorts as 0.
    Rating,
}

impl SortKey {
    /// Return the string key used in settings files for this sort key.
    ///
    /// Inputs: none
    ///
    /// Output: Static config key string.
    #[must_use]
    pub const fn as_config_key(self) -> &'static str {
        match self {
            Self::Unsorted => "none",
            Self::Title => "title",
            Self::Playtime => "playtime",
            Self::Rating => "rating",
        }
    }

    /// Parse a sort key from its settings string or accepted aliases.
    ///
    /// Inputs: `s` config string (case-insensitive).
    ///
    /// Output: `Some(SortKey)` on a recognized value; `None` otherwise.
    #[must_use]
    pub fn from_config_key(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "none" | "unsorted" => Some(Self::Unsorted),
            "title" | "name" => Some(Self::Title),
            "playtime" | "time" => Some(Self::Playtime),
            "rating" | "score" => Some(Self::Rating),
            _ => None,
        }
    }

    /// Advance to the next sort key in menu order, wrapping around.
    ///
    /// Inputs: none
    ///
    /// Output: The sort key following `self` in the cycle
    /// Unsorted → Title → Playtime → Rating → Unsorted.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Unsorted => Self::Title,
            Self::Title => Self::Playtime,
            Self::Playtime => Self::Rating,
            Self::Rating => Self::Unsorted,
        }
    }
}

/// The set of active filter and sort parameters, rebuilt from input state on
/// every interaction and handed to the query engine as a value.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Criteria {
    /// Free search text matched case-insensitively against title and description.
    pub search: String,
    /// Selected genre; `None` is the "all genres" sentinel.
    pub genre: Option<String>,
    /// Lower bound of the requested player-count range; 0 means unset.
    pub players_from: u32,
    /// Upper bound of the requested player-count range; `None` means unbounded.
    pub players_to: Option<u32>,
    /// Lower bound of the requested playtime range in minutes; 0 means unset.
    pub playtime_from: u32,
    /// Upper bound of the requested playtime range in minutes; `None` means unbounded.
    pub playtime_to: Option<u32>,
    /// Active sort key.
    pub sort: SortKey,
}

impl Criteria {
    /// Whether the player-count filter participates in the conjunction.
    ///
    /// A lower bound of 0 alone never activates the filter; only a positive
    /// `from` or a finite `to` does. This mirrors the feed site's behavior
    /// where 0 is treated as "unset" rather than as a valid lower bound.
    #[must_use]
    pub const fn players_active(&self) -> bool {
        self.players_from > 0 || self.players_to.is_some()
    }

    /// Whether the playtime filter participates in the conjunction.
    #[must_use]
    pub const fn playtime_active(&self) -> bool {
        self.playtime_from > 0 || self.playtime_to.is_some()
    }
}

/// Which input field currently owns keystrokes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Focus {
    /// Free-text search box.
    #[default]
    Search,
    /// Player-range lower bound.
    PlayersFrom,
    /// Player-range upper bound.
    PlayersTo,
    /// Playtime-range lower bound.
    PlaytimeFrom,
    /// Playtime-range upper bound.
    PlaytimeTo,
}

impl Focus {
    /// Next field in Tab order, wrapping around.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Search => Self::PlayersFrom,
            Self::PlayersFrom => Self::PlayersTo,
            Self::PlayersTo => Self::PlaytimeFrom,
            Self::PlaytimeFrom => Self::PlaytimeTo,
            Self::PlaytimeTo => Self::Search,
        }
    }

    /// Previous field in Tab order, wrapping around.
    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            Self::Search => Self::PlaytimeTo,
            Self::PlayersFrom => Self::Search,
            Self::PlayersTo => Self::PlayersFrom,
            Self::PlaytimeFrom => Self::PlayersTo,
            Self::PlaytimeTo => Self::PlaytimeFrom,
        }
    }
}
