// Index, unknown routes and fault handling
use crate::config::Environment;
use crate::router::{handle, serve};
use crate::tests::utils::{body_json, get, request, sample_state};
use http::Method;
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn index_lists_endpoints() {
    let state = sample_state();

    let mut resp = handle(get("/"), &state).unwrap();

    assert_eq!(resp.status(), 200);
    let body = body_json(&mut resp);
    assert_eq!(body["message"], "Welcome to Australian Property Listings API");
    assert_eq!(body["endpoints"].as_object().unwrap().len(), 5);
}

#[test]
fn unknown_route_is_404() {
    let state = sample_state();

    let mut resp = serve(get("/api/houses?x=1"), &state);

    assert_eq!(resp.status(), 404);
    assert_eq!(
        body_json(&mut resp),
        json!({ "error": "Route not found", "message": "Cannot GET /api/houses?x=1" })
    );
}

#[test]
fn too_deep_route_is_404() {
    let state = sample_state();

    let mut resp = serve(get("/api/properties/city/sydney/extra"), &state);

    assert_eq!(resp.status(), 404);
    assert_eq!(body_json(&mut resp)["error"], "Route not found");
}

#[test]
fn non_get_is_404() {
    let state = sample_state();

    let mut resp = serve(request(Method::POST, "/api/properties"), &state);

    assert_eq!(resp.status(), 404);
    assert_eq!(body_json(&mut resp)["message"], "Cannot POST /api/properties");
}

#[test]
fn head_is_answered_like_get() {
    let state = sample_state();

    let resp = serve(request(Method::HEAD, "/api/properties/1"), &state);

    assert_eq!(resp.status(), 200);
}

#[test]
fn undecodable_param_is_500() {
    let state = sample_state();

    let mut resp = serve(get("/api/properties/city/%FF"), &state);

    assert_eq!(resp.status(), 500);
    assert_eq!(body_json(&mut resp)["error"], "Internal server error");
}

#[test]
fn production_hides_fault_detail() {
    let mut state = sample_state();
    state.environment = Environment::Production;

    let mut resp = serve(get("/api/properties/type/%C3%28"), &state);

    assert_eq!(resp.status(), 500);
    assert_eq!(body_json(&mut resp)["message"], "An error occurred");
}
