// GET /api/properties with query filters
use crate::router::{handle, serve};
use crate::tests::utils::{body_json, get, ids, sample_state};
use pretty_assertions::assert_eq;

#[test]
fn unfiltered_lists_everything() {
    let state = sample_state();

    let mut resp = handle(get("/api/properties"), &state).unwrap();

    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap(),
        "application/json"
    );
    let body = body_json(&mut resp);
    assert_eq!(body["count"], 3);
    assert_eq!(ids(&body), vec![1, 2, 3]);
}

#[test]
fn min_price_filters() {
    let state = sample_state();

    let mut resp = handle(get("/api/properties?minPrice=400000"), &state).unwrap();

    let body = body_json(&mut resp);
    assert_eq!(body["count"], 2);
    assert_eq!(ids(&body), vec![1, 3]);
}

#[test]
fn price_range_and_bedrooms_combine() {
    let state = sample_state();

    let mut resp = handle(
        get("/api/properties?minPrice=250000&maxPrice=600000&bedrooms=3"),
        &state,
    )
    .unwrap();

    assert_eq!(ids(&body_json(&mut resp)), vec![1]);
}

#[test]
fn inverted_range_is_empty_not_error() {
    let state = sample_state();

    let mut resp = handle(get("/api/properties?minPrice=900000&maxPrice=100"), &state).unwrap();

    assert_eq!(resp.status(), 200);
    let body = body_json(&mut resp);
    assert_eq!(body["count"], 0);
    assert_eq!(ids(&body), Vec::<i64>::new());
}

#[test]
fn malformed_numbers_are_ignored() {
    let state = sample_state();

    let mut resp = handle(
        get("/api/properties?bedrooms=abc&minPrice=cheap&maxPrice="),
        &state,
    )
    .unwrap();

    assert_eq!(body_json(&mut resp)["count"], 3);
}

#[test]
fn zero_bedrooms_is_no_filter() {
    let state = sample_state();

    let mut resp = handle(get("/api/properties?bedrooms=0"), &state).unwrap();

    assert_eq!(body_json(&mut resp)["count"], 3);
}

#[test]
fn string_filters_ignore_case() {
    let state = sample_state();

    let mut upper = handle(get("/api/properties?type=HOUSE"), &state).unwrap();
    let mut lower = handle(get("/api/properties?type=house"), &state).unwrap();

    assert_eq!(body_json(&mut upper), body_json(&mut lower));

    let mut by_state = handle(get("/api/properties?state=vic"), &state).unwrap();
    assert_eq!(ids(&body_json(&mut by_state)), vec![2]);
}

#[test]
fn encoded_city_is_decoded() {
    let state = sample_state();

    let mut plus = handle(get("/api/properties?city=gold+coast"), &state).unwrap();
    let mut pct = handle(get("/api/properties?city=Gold%20Coast"), &state).unwrap();

    assert_eq!(ids(&body_json(&mut plus)), vec![3]);
    assert_eq!(ids(&body_json(&mut pct)), vec![3]);
}

#[test]
fn unknown_city_filter_is_empty_list() {
    let state = sample_state();

    let mut resp = serve(get("/api/properties?city=perth"), &state);

    assert_eq!(resp.status(), 200);
    assert_eq!(body_json(&mut resp)["count"], 0);
}

#[test]
fn trailing_slash_is_tolerated() {
    let state = sample_state();

    let mut resp = handle(get("/api/properties/?type=apartment"), &state).unwrap();

    assert_eq!(ids(&body_json(&mut resp)), vec![2]);
}

#[test]
fn hex_bedrooms_filters() {
    let state = sample_state();

    let mut resp = serve(get("/api/properties?bedrooms=0x4"), &state);

    let body = body_json(&mut resp);
    assert_eq!(body["count"], 1);
    assert_eq!(ids(&body), vec![3]);
}

#[test]
fn uppercase_route_is_served() {
    let state = sample_state();

    let mut resp = serve(get("/API/Properties?type=apartment"), &state);

    assert_eq!(resp.status(), 200);
    assert_eq!(ids(&body_json(&mut resp)), vec![2]);
}
