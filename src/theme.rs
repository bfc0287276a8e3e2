//! Theme palette, user settings, and config-directory resolution.
//!
//! Colors are grouped into neutrals (base/mantle/surfaces), muted overlays,
//! and accents for highlighting and semantic states. Settings come from a
//! plain `key = value` file in the Meeplebox config directory and fall back
//! to defaults when missing or invalid.

use std::env;
use std::fs;
use std::path::PathBuf;

use ratatui::style::Color;

use crate::state::SortKey;

/// Feed the catalog is loaded from when neither settings nor CLI override it.
pub const DEFAULT_FEED_URL: &str =
    "https://raw.githubusercontent.com/cederdorff/race/refs/heads/master/data/games.json";

/// Featured-game id used when the settings file does not name one.
pub const DEFAULT_FEATURED_ID: i64 = 20;

/// Application theme palette used by rendering code.
///
/// All colors are provided as [`ratatui::style::Color`] and are suitable for
/// direct use with widgets and styles.
pub struct Theme {
    /// Primary background color for the canvas.
    pub base: Color,
    /// Slightly lighter background layer used behind panels.
    pub mantle: Color,
    /// Subtle surface color for component backgrounds.
    pub surface1: Color,
    /// Muted overlay line/border color.
    pub overlay1: Color,
    /// Primary foreground text color.
    pub text: Color,
    /// Secondary text for less prominent content.
    pub subtext0: Color,
    /// Accent color for selection and interactive highlights.
    pub sapphire: Color,
    /// Accent color for emphasized headings.
    pub mauve: Color,
    /// Positive state color (ratings, counts).
    pub green: Color,
    /// Attention color (featured badge, active filters).
    pub yellow: Color,
    /// Error/danger state color.
    pub red: Color,
    /// Accent color for subtle emphasis and borders.
    pub lavender: Color,
}

/// Construct a [`Color::Rgb`] from an 8-bit RGB triplet.
const fn hex(rgb: (u8, u8, u8)) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

/// Return the application's default theme palette.
#[must_use]
pub const fn theme() -> Theme {
    Theme {
        base: hex((0x1e, 0x1e, 0x2e)),
        mantle: hex((0x18, 0x18, 0x25)),
        surface1: hex((0x45, 0x47, 0x5a)),
        overlay1: hex((0x7f, 0x84, 0x9c)),
        text: hex((0xcd, 0xd6, 0xf4)),
        subtext0: hex((0xa6, 0xad, 0xc8)),
        sapphire: hex((0x74, 0xc7, 0xec)),
        mauve: hex((0xcb, 0xa6, 0xf7)),
        green: hex((0xa6, 0xe3, 0xa1)),
        yellow: hex((0xf9, 0xe2, 0xaf)),
        red: hex((0xf3, 0x8b, 0xa8)),
        lavender: hex((0xb4, 0xbe, 0xfe)),
    }
}

/// User-tunable settings loaded at startup.
#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    /// Catalog feed URL.
    pub feed_url: String,
    /// Id of the record shown in the featured banner.
    pub featured_game_id: i64,
    /// Badge text rendered next to the featured game.
    pub featured_badge: String,
    /// Sort key applied on startup.
    pub sort_key: SortKey,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            feed_url: DEFAULT_FEED_URL.to_string(),
            featured_game_id: DEFAULT_FEATURED_ID,
            featured_badge: "Game of the Week".to_string(),
            sort_key: SortKey::Unsorted,
        }
    }
}

/// What: Strip an inline `#` comment from a settings value.
///
/// Inputs:
/// - `val`: Raw value text after the `=` sign.
///
/// Output:
/// - The value with any trailing comment and whitespace removed.
fn strip_inline_comment(val: &str) -> &str {
    val.split('#').next().unwrap_or("").trim()
}

/// What: Parse settings file content into a [`Settings`] value.
///
/// Inputs:
/// - `content`: Full text of a `key = value` settings file.
///
/// Output:
/// - Settings with every recognized key applied over the defaults. Unknown
///   keys and malformed lines are ignored.
#[must_use]
pub fn parse_settings(content: &str) -> Settings {
    let mut out = Settings::default();
    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with("//") {
            continue;
        }
        let Some((raw_key, raw_val)) = trimmed.split_once('=') else {
            continue;
        };
        let key = raw_key.trim().to_lowercase().replace(['.', '-', ' '], "_");
        let val = strip_inline_comment(raw_val);
        match key.as_str() {
            "feed_url" => {
                if !val.is_empty() {
                    out.feed_url = val.to_string();
                }
            }
            "featured_game_id" | "featured_id" => {
                if let Ok(v) = val.parse::<i64>() {
                    out.featured_game_id = v;
                }
            }
            "featured_badge" => {
                if !val.is_empty() {
                    out.featured_badge = val.to_string();
                }
            }
            "sort_key" | "sort" => {
                if let Some(k) = SortKey::from_config_key(val) {
                    out.sort_key = k;
                }
            }
            _ => {}
        }
    }
    out
}

/// What: Load user settings from `meeplebox.conf` in the config directory.
///
/// Inputs: none
///
/// Output:
/// - Parsed settings, or `Settings::default()` when the file is missing or
///   unreadable.
#[must_use]
pub fn settings() -> Settings {
    let path = config_dir().join("meeplebox.conf");
    match fs::read_to_string(&path) {
        Ok(content) => parse_settings(&content),
        Err(_) => Settings::default(),
    }
}

/// What: Resolve the Meeplebox config directory, creating it if needed.
///
/// Inputs: none
///
/// Output:
/// - `$XDG_CONFIG_HOME/meeplebox` when set, else `$HOME/.config/meeplebox`,
///   else `./.meeplebox` as a last resort.
#[must_use]
pub fn config_dir() -> PathBuf {
    let base = env::var("XDG_CONFIG_HOME")
        .ok()
        .filter(|p| !p.trim().is_empty())
        .map(PathBuf::from)
        .or_else(|| {
            env::var("HOME")
                .ok()
                .map(|h| PathBuf::from(h).join(".config"))
        });
    let dir = base.map_or_else(|| PathBuf::from(".meeplebox"), |b| b.join("meeplebox"));
    let _ = fs::create_dir_all(&dir);
    dir
}

/// What: Resolve the log directory under the config directory, creating it.
///
/// Inputs: none
///
/// Output: `<config_dir>/logs`.
#[must_use]
pub fn logs_dir() -> PathBuf {
    let dir = config_dir().join("logs");
    let _ = fs::create_dir_all(&dir);
    dir
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Settings parsing applies known keys over defaults
    ///
    /// - Input: File content with every supported key, comments, and junk
    /// - Output: All values applied; junk ignored
    fn theme_parse_settings_full_file() {
        let content = "\
# Meeplebox settings
feed_url = https://example.net/games.json
featured-game-id = 7   # weekly pick
featured_badge = Ugens Spil!
sort = rating
nonsense line
unknown_key = 3
";
        let s = parse_settings(content);
        assert_eq!(s.feed_url, "https://example.net/games.json");
        assert_eq!(s.featured_game_id, 7);
        assert_eq!(s.featured_badge, "Ugens Spil!");
        assert_eq!(s.sort_key, SortKey::Rating);
    }

    #[test]
    /// What: Empty or invalid content falls back to defaults
    ///
    /// - Input: Empty string and values that fail to parse
    /// - Output: `Settings::default()` in both cases
    fn theme_parse_settings_defaults() {
        assert_eq!(parse_settings(""), Settings::default());
        let s = parse_settings("featured_game_id = twenty\nsort = shuffled\nfeed_url =");
        assert_eq!(s, Settings::default());
    }

    #[test]
    /// What: Settings survive a write/read roundtrip through a real file
    ///
    /// - Input: Temp file with one override
    /// - Output: Parsed settings reflect the override
    fn theme_settings_file_roundtrip() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("meeplebox.conf");
        std::fs::write(&path, "featured_game_id = 3\n").expect("write conf");
        let content = std::fs::read_to_string(&path).expect("read conf");
        assert_eq!(parse_settings(&content).featured_game_id, 3);
    }
}
