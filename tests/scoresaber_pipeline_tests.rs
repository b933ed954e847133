// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! ScoreSaber lookup pipeline against a mock upstream.

use axum::http::{Method, StatusCode};
use rhythm_stats::error::{LookupError, Stage};
use rhythm_stats::format::NONE_PLACEHOLDER;
use rhythm_stats::models::Reply;
use rhythm_stats::services::ScoreSaberLookup;
use serde_json::json;

mod common;
use common::{fixture, MockUpstream};

const PLAYER_ID: &str = "76561198000000042";

fn alice_upstream() -> MockUpstream {
    let mock = MockUpstream::new();
    mock.get("/api/players", fixture("scoresaber_search.json"))
        .get(
            &format!("/api/player/{}/full", PLAYER_ID),
            fixture("scoresaber_player.json"),
        )
        .get(
            &format!("/api/player/{}/scores", PLAYER_ID),
            fixture("scoresaber_scores.json"),
        );
    mock
}

fn lookup(base_url: &str) -> ScoreSaberLookup {
    ScoreSaberLookup::new(format!("{}/api", base_url))
}

#[tokio::test]
async fn test_full_pipeline() {
    let mock = alice_upstream();
    let base = mock.start().await;

    let profile = lookup(&base).lookup("Alice Smith").await.unwrap();

    assert_eq!(profile.player.id, PLAYER_ID);
    assert!(profile
        .recent_fields()
        .iter()
        .all(|f| f.value != NONE_PLACEHOLDER));

    let card = profile.to_card();
    assert_eq!(card.title, "ScoreSaber profile of Alice Smith");
    assert_eq!(
        card.thumbnail.as_deref(),
        Some("https://cdn.scoresaber.com/avatars/76561198000000042.jpg")
    );
    assert_eq!(card.field("International rank"), Some("#512"));
    assert_eq!(card.field("National rank in FR"), Some("#12"));
    assert_eq!(card.field("Total score"), Some("1,234,567,890"));
    assert_eq!(card.field("Total score in Ranked"), Some("987,654,321"));
    assert_eq!(card.field("Number of times played"), Some("4321"));
    assert_eq!(card.field("Number of times played in Ranked"), Some("1234"));
    assert_eq!(card.field("Points of Performance (PP)"), Some("10234.56"));
    assert_eq!(card.field("Last Played Map"), Some("Song"));
    assert_eq!(card.field("Creator of the Map"), Some("Bob"));
    assert_eq!(card.field("Difficulty"), Some("Expert+"));
    assert_eq!(card.field("Score"), Some("1,234,567"));
}

#[tokio::test]
async fn test_request_sequence_and_encoding() {
    let mock = alice_upstream();
    let base = mock.start().await;

    lookup(&base).lookup("Alice Smith").await.unwrap();

    let requests = mock.requests();
    assert_eq!(requests.len(), 3);

    assert_eq!(requests[0].path, "/api/players");
    assert_eq!(requests[0].query.as_deref(), Some("search=Alice%20Smith"));

    assert_eq!(requests[1].path, format!("/api/player/{}/full", PLAYER_ID));

    assert_eq!(requests[2].path, format!("/api/player/{}/scores", PLAYER_ID));
    assert_eq!(requests[2].query.as_deref(), Some("sort=recent&limit=1"));

    assert!(requests.iter().all(|r| r.authorization.is_none()));
}

#[tokio::test]
async fn test_no_matching_players() {
    let mock = alice_upstream();
    mock.get("/api/players", json!({ "players": [], "metadata": { "total": 0 } }));
    let base = mock.start().await;
    let lookup = lookup(&base);

    let err = lookup.lookup("Nobody").await.unwrap_err();
    assert!(matches!(err, LookupError::UserNotFound { .. }));

    let reply = lookup.run("Nobody").await;
    assert_eq!(reply, Reply::text("No users found with this nickname."));
    assert!(mock.paths().iter().all(|p| p == "/api/players"));
}

#[tokio::test]
async fn test_search_without_players_key() {
    let mock = alice_upstream();
    mock.get("/api/players", json!({}));
    let base = mock.start().await;

    let reply = lookup(&base).run("Nobody").await;
    assert_eq!(reply, Reply::text("No users found with this nickname."));
}

#[tokio::test]
async fn test_search_request_failure() {
    let mock = alice_upstream();
    mock.on(
        Method::GET,
        "/api/players",
        StatusCode::INTERNAL_SERVER_ERROR,
        json!({ "message": "Internal server error" }),
    );
    let base = mock.start().await;

    let reply = lookup(&base).run("Alice").await;

    assert_eq!(
        reply,
        Reply::text("An error occurred while searching for the user. Check the nickname.")
    );
    assert_eq!(mock.requests().len(), 1);
}

#[tokio::test]
async fn test_profile_not_found_stops_pipeline() {
    let mock = alice_upstream();
    mock.on(
        Method::GET,
        &format!("/api/player/{}/full", PLAYER_ID),
        StatusCode::NOT_FOUND,
        json!({ "errorMessage": "Player not found" }),
    );
    let base = mock.start().await;
    let lookup = lookup(&base);

    let err = lookup.lookup("Alice Smith").await.unwrap_err();
    assert_eq!(err.stage(), Some(Stage::Statistics));

    let reply = lookup.run("Alice Smith").await;
    assert_eq!(
        reply,
        Reply::text("An error occurred while retrieving profile data.")
    );
    assert!(!mock.called(&format!("/api/player/{}/scores", PLAYER_ID)));
}

#[tokio::test]
async fn test_no_recent_scores() {
    let mock = alice_upstream();
    mock.get(
        &format!("/api/player/{}/scores", PLAYER_ID),
        json!({ "playerScores": [], "metadata": { "total": 0 } }),
    );
    let base = mock.start().await;

    let profile = lookup(&base).lookup("Alice Smith").await.unwrap();

    assert!(!profile.recent.is_present());
    let recent_fields = profile.recent_fields();
    assert_eq!(recent_fields.len(), 4);
    assert!(recent_fields.iter().all(|f| f.value == NONE_PLACEHOLDER));

    let card = profile.to_card();
    assert_eq!(card.field("International rank"), Some("#512"));
    assert_eq!(card.field("Last Played Map"), None);
    assert_eq!(card.field("Difficulty"), None);
}

#[tokio::test]
async fn test_failed_recent_scores_degrade_to_absent() {
    let mock = alice_upstream();
    mock.on(
        Method::GET,
        &format!("/api/player/{}/scores", PLAYER_ID),
        StatusCode::INTERNAL_SERVER_ERROR,
        json!({}),
    );
    let base = mock.start().await;

    let reply = lookup(&base).run("Alice Smith").await;

    match reply {
        Reply::Card { card } => {
            assert_eq!(card.field("Total score"), Some("1,234,567,890"));
            assert_eq!(card.field("Last Played Map"), None);
        }
        other => panic!("expected card, got {:?}", other),
    }
}

#[tokio::test]
async fn test_unknown_difficulty_code() {
    let mock = alice_upstream();
    let mut scores = fixture("scoresaber_scores.json");
    scores["playerScores"][0]["leaderboard"]["difficulty"]["difficulty"] = json!(4);
    mock.get(&format!("/api/player/{}/scores", PLAYER_ID), scores);
    let base = mock.start().await;

    let card = lookup(&base).lookup("Alice Smith").await.unwrap().to_card();

    assert_eq!(card.field("Difficulty"), Some("Unknown"));
}

#[tokio::test]
async fn test_profile_missing_field() {
    let mock = alice_upstream();
    let mut player = fixture("scoresaber_player.json");
    player.as_object_mut().unwrap().remove("scoreStats");
    mock.get(&format!("/api/player/{}/full", PLAYER_ID), player);
    let base = mock.start().await;

    let reply = lookup(&base).run("Alice Smith").await;

    assert_eq!(
        reply,
        Reply::text("Unable to retrieve certain information for this user.")
    );
}
