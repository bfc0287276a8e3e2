//! Stable sorting of the visible result set.

use std::cmp::Ordering;

use crate::state::{GameRecord, SortKey};

/// Descending comparison over optional numeric fields, missing treated as 0.
fn cmp_desc(a: Option<f64>, b: Option<f64>) -> Ordering {
    let (a, b) = (a.unwrap_or(0.0), b.unwrap_or(0.0));
    b.partial_cmp(&a).unwrap_or(Ordering::Equal)
}

/// What: Sort games in place according to the given sort key.
///
/// Inputs:
/// - `games`: Slice to reorder, normally the freshly filtered result set.
/// - `key`: Active sort key.
///
/// Output:
/// - `Unsorted` leaves the slice untouched; `Title` sorts ascending with
///   case folding; `Playtime` and `Rating` sort descending with missing
///   values treated as 0.
///
/// Details:
/// - Uses the standard library's stable sort, so records comparing equal keep
///   their relative (filtered, i.e. original catalog) order.
pub fn sort_games(games: &mut [GameRecord], key: SortKey) {
    match key {
        SortKey::Unsorted => {}
        SortKey::Title => {
            games.sort_by(|a, b| a.title.to_lowercase().cmp(&b.title.to_lowercase()));
        }
        SortKey::Playtime => games.sort_by(|a, b| cmp_desc(a.playtime, b.playtime)),
        SortKey::Rating => games.sort_by(|a, b| cmp_desc(a.rating, b.rating)),
    }
}
