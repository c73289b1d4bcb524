use super::*;

fn test_client(base_url: &str) -> PlacesClient {
    PlacesClient::with_base_url("test-key", 30, "sitescout-test/0.1", base_url)
        .expect("client construction should not fail")
}

#[test]
fn build_url_puts_key_first() {
    let client = test_client("https://maps.googleapis.com/maps/api");
    let url = client.build_url(
        &client.nearby_url,
        &[("location", "33.749,-84.388"), ("radius", "10000")],
    );
    assert_eq!(
        url.as_str(),
        "https://maps.googleapis.com/maps/api/place/nearbysearch/json?key=test-key&location=33.749%2C-84.388&radius=10000"
    );
}

#[test]
fn geocode_url_joins_onto_base_with_trailing_slash() {
    let client = test_client("https://maps.googleapis.com/maps/api/");
    let url = client.build_url(&client.geocode_url, &[("place_id", "abc123")]);
    assert_eq!(
        url.as_str(),
        "https://maps.googleapis.com/maps/api/geocode/json?key=test-key&place_id=abc123"
    );
}

#[test]
fn build_url_encodes_keyword() {
    let client = test_client("https://maps.googleapis.com/maps/api");
    let url = client.build_url(&client.nearby_url, &[("keyword", "Waffle House & Co")]);
    assert!(
        url.as_str().contains("keyword=Waffle+House+%26+Co"),
        "keyword should be percent-encoded: {url}"
    );
}

#[test]
fn invalid_base_url_is_rejected() {
    let result = PlacesClient::with_base_url("k", 30, "ua", "not a url");
    assert!(matches!(result, Err(PlacesError::InvalidBaseUrl { .. })));
}

#[test]
fn check_status_accepts_ok_zero_results_and_missing() {
    for body in [
        serde_json::json!({ "status": "OK" }),
        serde_json::json!({ "status": "ZERO_RESULTS" }),
        serde_json::json!({ "results": [] }),
    ] {
        assert!(check_status(&body, "nearbysearch", false).is_ok());
    }
}

#[test]
fn check_status_invalid_request_with_token_is_not_ready() {
    let body = serde_json::json!({ "status": "INVALID_REQUEST" });
    assert!(matches!(
        check_status(&body, "nearbysearch", true),
        Err(PlacesError::TokenNotReady)
    ));
}

#[test]
fn check_status_invalid_request_without_token_is_api_error() {
    let body = serde_json::json!({ "status": "INVALID_REQUEST" });
    assert!(matches!(
        check_status(&body, "nearbysearch", false),
        Err(PlacesError::Api { ref status, .. }) if status == "INVALID_REQUEST"
    ));
}

#[test]
fn check_status_carries_error_message() {
    let body = serde_json::json!({
        "status": "REQUEST_DENIED",
        "error_message": "The provided API key is invalid."
    });
    let err = check_status(&body, "geocode", false).unwrap_err();
    assert!(err.to_string().contains("REQUEST_DENIED"));
    assert!(err.to_string().contains("API key is invalid"));
}

#[test]
fn check_status_geocode_not_found_is_empty() {
    let body = serde_json::json!({ "status": "NOT_FOUND", "results": [] });
    assert!(check_status(&body, GEOCODE_ENDPOINT, false).is_ok());
}

#[test]
fn check_status_nearby_not_found_is_api_error() {
    let body = serde_json::json!({ "status": "NOT_FOUND" });
    assert!(matches!(
        check_status(&body, NEARBY_ENDPOINT, false),
        Err(PlacesError::Api { ref status, .. }) if status == "NOT_FOUND"
    ));
}
