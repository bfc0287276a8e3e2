//! Catalog feed fetcher and lenient record conversion.
//!
//! The feed is a single JSON array of game objects. Conversion is deliberately
//! forgiving: a record missing any field other than the title still loads,
//! with the gaps mapped to neutral values. The public entry point degrades
//! every failure to an empty catalog so callers never observe an error.

use serde_json::Value;
use tracing::{info, warn};

use crate::state::{GameRecord, PlayerRange};
use crate::util::{i64_of, s, u32_of};

/// Result type alias for feed operations.
type Result<T> = super::Result<T>;

/// What: Convert one feed object into a [`GameRecord`], tolerating missing fields.
///
/// Inputs:
/// - `v`: JSON value for a single game.
///
/// Output:
/// - `Some(GameRecord)` when the object carries a non-empty title; `None` otherwise.
///
/// Details:
/// - `genre` stays `None` when absent, which the genre menu treats differently
///   from an empty string.
/// - `playtime` and `rating` accept JSON numbers only; a string like `"long"`
///   (or `"90"`) becomes `None`, so an active playtime filter excludes the record.
/// - Player bounds accept numbers or numeric strings and default to 0.
#[must_use]
pub fn record_from_value(v: &Value) -> Option<GameRecord> {
    let title = s(v, "title");
    if title.is_empty() {
        return None;
    }
    let players = v.get("players").map_or_else(PlayerRange::default, |p| {
        PlayerRange {
            min: u32_of(p, "min").unwrap_or(0),
            max: u32_of(p, "max").unwrap_or(0),
        }
    });
    Some(GameRecord {
        id: i64_of(v, "id").unwrap_or(0),
        title,
        description: s(v, "description"),
        rules: s(v, "rules"),
        genre: v
            .get("genre")
            .and_then(Value::as_str)
            .map(ToOwned::to_owned),
        players,
        playtime: v.get("playtime").and_then(Value::as_f64),
        rating: v.get("rating").and_then(Value::as_f64),
        shelf: s(v, "shelf"),
        difficulty: s(v, "difficulty"),
        image: s(v, "image"),
    })
}

/// What: Fetch the catalog feed and convert it into game records.
///
/// Inputs:
/// - `url`: Feed URL returning a JSON array of game objects.
///
/// Output:
/// - `Ok(Vec<GameRecord>)` in feed order on success; `Err` on network, status,
///   or parse failure.
///
/// # Errors
/// - Network fetch failures
/// - Non-success HTTP status
/// - Payloads that are not a JSON array
pub async fn fetch_feed(url: &str) -> Result<Vec<GameRecord>> {
    let resp = reqwest::get(url).await?;
    let status = resp.status();
    let body = resp.text().await?;
    info!(
        status = status.as_u16(),
        bytes = body.len(),
        "fetched catalog feed"
    );
    if !status.is_success() {
        return Err(format!("catalog feed status {status}").into());
    }
    let v: Value = serde_json::from_str(&body)?;
    let Some(arr) = v.as_array() else {
        return Err("catalog feed is not a JSON array".into());
    };
    let games: Vec<GameRecord> = arr.iter().filter_map(record_from_value).collect();
    let skipped = arr.len() - games.len();
    if skipped > 0 {
        warn!(skipped, "dropped feed entries without a title");
    }
    Ok(games)
}

/// What: Load the catalog once, degrading any failure to an empty collection.
///
/// Inputs:
/// - `url`: Feed URL.
///
/// Output:
/// - The loaded records, or an empty vector when the fetch or parse failed.
///   The failure is logged, never surfaced; the UI renders a harmless empty
///   state instead.
pub async fn load_catalog(url: &str) -> Vec<GameRecord> {
    match fetch_feed(url).await {
        Ok(games) => {
            info!(count = games.len(), "catalog loaded");
            games
        }
        Err(e) => {
            warn!(error = %e, url, "could not load catalog; starting empty");
            Vec::new()
        }
    }
}
