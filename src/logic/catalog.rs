//! Pure lookups derived from the loaded catalog.

use std::collections::BTreeSet;

use crate::state::GameRecord;

/// What: Resolve the featured game for a configured id.
///
/// Inputs:
/// - `games`: The loaded catalog in feed order.
/// - `id`: Configured featured-game id.
///
/// Output:
/// - The first record whose id matches, else the first record of a non-empty
///   catalog, else `None`.
#[must_use]
pub fn featured_game(games: &[GameRecord], id: i64) -> Option<&GameRecord> {
    games.iter().find(|g| g.id == id).or_else(|| games.first())
}

/// What: Collect every non-empty genre value, deduplicated and sorted.
///
/// Inputs:
/// - `games`: The loaded catalog.
///
/// Output:
/// - Sorted, duplicate-free genre names for stable menu presentation. Absent
///   and empty genres contribute nothing.
#[must_use]
pub fn distinct_genres(games: &[GameRecord]) -> Vec<String> {
    let set: BTreeSet<&str> = games
        .iter()
        .filter_map(|g| g.genre.as_deref())
        .filter(|g| !g.is_empty())
        .collect();
    set.into_iter().map(ToOwned::to_owned).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn g(id: i64, title: &str, genre: Option<&str>) -> GameRecord {
        GameRecord {
            id,
            title: title.to_string(),
            genre: genre.map(ToOwned::to_owned),
            ..Default::default()
        }
    }

    #[test]
    /// What: Featured lookup prefers the exact id and falls back to the first record
    ///
    /// - Input: Catalog with ids 1 and 20; queries for 20, 99, and on an empty catalog
    /// - Output: Id 20 record, then the first record, then None
    fn catalog_featured_lookup_fallback_chain() {
        let games = vec![g(1, "Opener", None), g(20, "Weekly Pick", None)];
        assert_eq!(featured_game(&games, 20).map(|x| x.id), Some(20));
        assert_eq!(featured_game(&games, 99).map(|x| x.id), Some(1));
        assert_eq!(featured_game(&[], 20), None);
    }

    #[test]
    /// What: Duplicate ids resolve to the first occurrence
    ///
    /// - Input: Two records sharing an id
    /// - Output: The earlier record wins
    fn catalog_featured_first_match_wins() {
        let games = vec![g(5, "Original", None), g(5, "Reprint", None)];
        assert_eq!(
            featured_game(&games, 5).map(|x| x.title.as_str()),
            Some("Original")
        );
    }

    #[test]
    /// What: Genre collection deduplicates, sorts, and skips empties
    ///
    /// - Input: Mixed genres with a duplicate, an empty string, and an absent genre
    /// - Output: Sorted unique non-empty genre names
    fn catalog_distinct_genres_sorted_unique() {
        let games = vec![
            g(1, "A", Some("Strategy")),
            g(2, "B", Some("Party")),
            g(3, "C", Some("Strategy")),
            g(4, "D", Some("")),
            g(5, "E", None),
        ];
        assert_eq!(distinct_genres(&games), vec!["Party", "Strategy"]);
        assert!(distinct_genres(&[]).is_empty());
    }
}
