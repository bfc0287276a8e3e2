//! Integration tests for the catalog query pipeline.
//!
//! These exercise the public library API end-to-end: lenient feed parsing,
//! the pure filter/sort engine, and the catalog lookups, using small
//! hand-built shelves with known answers.

use serde_json::json;

use meeplebox::logic::{apply, distinct_genres, featured_game};
use meeplebox::sources::record_from_value;
use meeplebox::state::{Criteria, GameRecord, PlayerRange, SortKey};

fn shelf() -> Vec<GameRecord> {
    vec![
        GameRecord {
            id: 1,
            title: "Catan".into(),
            description: "Trade and build settlements.".into(),
            genre: Some("Strategy".into()),
            players: PlayerRange { min: 3, max: 4 },
            playtime: Some(90.0),
            rating: Some(4.0),
            ..Default::default()
        },
        GameRecord {
            id: 2,
            title: "Codenames".into(),
            description: "Guess the secret words.".into(),
            genre: Some("Party".into()),
            players: PlayerRange { min: 2, max: 8 },
            playtime: Some(20.0),
            rating: Some(5.0),
            ..Default::default()
        },
    ]
}

fn titles(games: &[GameRecord]) -> Vec<&str> {
    games.iter().map(|g| g.title.as_str()).collect()
}

/// What: Fully inactive criteria return the catalog unchanged
///
/// - Input: Two-game shelf, default criteria
/// - Output: Identical titles in identical order
#[test]
fn pipeline_identity_law() {
    let games = shelf();
    let out = apply(&games, &Criteria::default());
    assert_eq!(titles(&out), titles(&games));
}

/// What: Genre criteria produce exactly the matching record
///
/// - Input: Shelf with genre filter "Party"
/// - Output: Only Codenames
#[test]
fn pipeline_genre_filter_exact() {
    let out = apply(
        &shelf(),
        &Criteria {
            genre: Some("Party".into()),
            ..Default::default()
        },
    );
    assert_eq!(titles(&out), vec!["Codenames"]);
}

/// What: Rating sort without filters reorders the whole shelf
///
/// - Input: Sort key rating only
/// - Output: Codenames (5) before Catan (4)
#[test]
fn pipeline_rating_sort_end_to_end() {
    let out = apply(
        &shelf(),
        &Criteria {
            sort: SortKey::Rating,
            ..Default::default()
        },
    );
    assert_eq!(titles(&out), vec!["Codenames", "Catan"]);
}

/// What: Player range 5-6 keeps only the game whose interval overlaps it
///
/// - Input: Catan 3-4 and Codenames 2-8 against range 5-6
/// - Output: Codenames only (8 >= 5 and 2 <= 6); Catan's max 4 < 5
#[test]
fn pipeline_players_overlap_worked_example() {
    let out = apply(
        &shelf(),
        &Criteria {
            players_from: 5,
            players_to: Some(6),
            ..Default::default()
        },
    );
    assert_eq!(titles(&out), vec!["Codenames"]);
}

/// What: A range above every game's maximum excludes the whole shelf
///
/// - Input: Range 10-20 over games maxing out at 8 players
/// - Output: Empty result, not an error
#[test]
fn pipeline_players_range_above_all() {
    let out = apply(
        &shelf(),
        &Criteria {
            players_from: 10,
            players_to: Some(20),
            ..Default::default()
        },
    );
    assert!(out.is_empty());
}

/// What: Every returned record satisfies all active predicates, and every
/// satisfying record is returned (conjunction soundness and completeness)
///
/// - Input: A larger shelf and a mixed criteria set
/// - Output: The engine's output equals a straight reference scan
#[test]
fn pipeline_conjunction_matches_reference_scan() {
    let mut games = shelf();
    games.push(GameRecord {
        id: 3,
        title: "Azul Party Edition".into(),
        genre: Some("Party".into()),
        players: PlayerRange { min: 2, max: 4 },
        playtime: None,
        rating: Some(4.5),
        ..Default::default()
    });
    let c = Criteria {
        genre: Some("Party".into()),
        playtime_to: Some(30),
        ..Default::default()
    };
    let out = apply(&games, &c);

    let reference: Vec<&GameRecord> = games
        .iter()
        .filter(|g| g.genre.as_deref() == Some("Party"))
        .filter(|g| g.playtime.is_some_and(|t| t <= 30.0))
        .collect();
    assert_eq!(
        titles(&out),
        reference.iter().map(|g| g.title.as_str()).collect::<Vec<_>>()
    );
    // The untimed Party game was excluded by the active playtime filter.
    assert_eq!(titles(&out), vec!["Codenames"]);
}

/// What: Stable sorting keeps equal-keyed records in filtered order
///
/// - Input: Three games, two sharing a rating
/// - Output: The tied pair keeps its original relative order
#[test]
fn pipeline_sort_stability() {
    let games = vec![
        GameRecord {
            id: 1,
            title: "First".into(),
            rating: Some(4.0),
            ..Default::default()
        },
        GameRecord {
            id: 2,
            title: "Top".into(),
            rating: Some(5.0),
            ..Default::default()
        },
        GameRecord {
            id: 3,
            title: "Second".into(),
            rating: Some(4.0),
            ..Default::default()
        },
    ];
    let out = apply(
        &games,
        &Criteria {
            sort: SortKey::Rating,
            ..Default::default()
        },
    );
    assert_eq!(titles(&out), vec!["Top", "First", "Second"]);
}

/// What: Featured lookup follows the id, first-record, empty chain
///
/// - Input: Shelf queried for a present id, a missing id, and an empty shelf
/// - Output: Exact match, then first record, then None
#[test]
fn pipeline_featured_fallback_chain() {
    let games = shelf();
    assert_eq!(featured_game(&games, 2).map(|g| g.id), Some(2));
    assert_eq!(featured_game(&games, 42).map(|g| g.id), Some(1));
    assert_eq!(featured_game(&[], 42), None);
}

/// What: Feed parsing and the engine compose over a raw JSON payload
///
/// - Input: JSON array with a sparse record and a titleless record
/// - Output: Titleless entry dropped at parse time; filters treat the sparse
///   record's missing fields as neutral values
#[test]
fn pipeline_from_raw_feed_json() {
    let feed = json!([
        {"id": 1, "title": "Catan", "genre": "Strategy",
         "players": {"min": 3, "max": 4}, "playtime": 90, "rating": 4},
        {"id": 2, "title": "Mystery Box"},
        {"id": 3, "description": "no title, dropped"}
    ]);
    let games: Vec<GameRecord> = feed
        .as_array()
        .expect("array")
        .iter()
        .filter_map(record_from_value)
        .collect();
    assert_eq!(games.len(), 2);
    assert_eq!(distinct_genres(&games), vec!["Strategy"]);

    // The sparse record has no playtime, so an active playtime filter drops it.
    let out = apply(
        &games,
        &Criteria {
            playtime_from: 10,
            ..Default::default()
        },
    );
    assert_eq!(titles(&out), vec!["Catan"]);

    // With no criteria it is kept, in feed order.
    let out = apply(&games, &Criteria::default());
    assert_eq!(titles(&out), vec!["Catan", "Mystery Box"]);
}
