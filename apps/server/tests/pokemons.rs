mod support;

use axum::http::StatusCode;
use pokefilter_pokeapi::PokeApiError;
use serde_json::json;
use support::{build_test_router, default_stub, get};

#[tokio::test]
async fn returns_names_matching_the_type_in_request_order() {
    let app = build_test_router(default_stub());

    let (status, body) = get(&app, "/api/v1/pokemons?id=6,1,4&type=fire").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "pokemons": ["charizard", "charmander"] }));
}

#[tokio::test]
async fn type_is_matched_case_insensitively() {
    let app = build_test_router(default_stub());

    let (status, body) = get(&app, "/api/v1/pokemons?id=1&type=POISON").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "pokemons": ["bulbasaur"] }));
}

#[tokio::test]
async fn no_match_is_an_empty_list() {
    let app = build_test_router(default_stub());

    let (status, body) = get(&app, "/api/v1/pokemons?id=25&type=water").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "pokemons": [] }));
}

#[tokio::test]
async fn invalid_id_is_bad_request() {
    let app = build_test_router(default_stub());

    let (status, body) = get(&app, "/api/v1/pokemons?id=1,abc&type=fire").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({
            "message": "Invalid Pokemon ID at position 2: \"abc\". Must be a whole number."
        })
    );
}

#[tokio::test]
async fn missing_parameters_are_bad_request() {
    let app = build_test_router(default_stub());

    let (status, body) = get(&app, "/api/v1/pokemons?id=1").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "message": "The \"type\" parameter is required" }));

    let (status, body) = get(&app, "/api/v1/pokemons?type=fire").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "message": "No valid Pokemon IDs provided" }));
}

#[tokio::test]
async fn too_many_ids_is_bad_request() {
    let app = build_test_router(default_stub());

    let (status, body) = get(&app, "/api/v1/pokemons?id=1,2,3,4,5,6,7,8,9,10,11&type=fire").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "message": "Maximum 10 Pokemon IDs are allowed" }));
}

#[tokio::test]
async fn all_missing_is_not_found() {
    let app = build_test_router(default_stub());

    let (status, body) = get(&app, "/api/v1/pokemons?id=900,901&type=fire").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "message": "All requested Pokemon not found" }));
}

#[tokio::test]
async fn all_failed_with_upstream_errors_is_unavailable() {
    let stub = default_stub().with_error(
        500,
        PokeApiError::from_status(500, 500, Some("boom")),
    );
    let app = build_test_router(stub);

    let (status, body) = get(&app, "/api/v1/pokemons?id=500,901&type=fire").await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(
        body,
        json!({ "message": "Could not retrieve any of the requested Pokemon." })
    );
}

#[tokio::test]
async fn partial_failure_still_returns_matches() {
    let stub = default_stub().with_error(7, PokeApiError::network());
    let app = build_test_router(stub);

    let (status, body) = get(&app, "/api/v1/pokemons?id=4,7,900&type=fire").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "pokemons": ["charmander"] }));
}

#[tokio::test]
async fn first_occurrence_of_a_repeated_key_wins() {
    let app = build_test_router(default_stub());

    let (status, body) = get(&app, "/api/v1/pokemons?id=4&type=fire&id=25&type=electric").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "pokemons": ["charmander"] }));
}

#[tokio::test]
async fn duplicate_ids_are_reported_once() {
    let app = build_test_router(default_stub());

    let (status, body) = get(&app, "/api/v1/pokemons?id=4,%204,6,4&type=Fire").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "pokemons": ["charmander", "charizard"] }));
}

#[tokio::test]
async fn type_is_trimmed_before_validation() {
    let app = build_test_router(default_stub());

    let (status, body) = get(&app, "/api/v1/pokemons?id=4&type=%20Fire%20").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "pokemons": ["charmander"] }));
}

#[tokio::test]
async fn ids_beyond_32_bits_fail_on_their_own() {
    let app = build_test_router(default_stub());

    let (status, body) = get(&app, "/api/v1/pokemons?id=4,4294967296&type=fire").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "pokemons": ["charmander"] }));
}
