use crate::config::Environment;
use crate::domain::FilterCriteria;
use crate::engine::Catalog;
use crate::errors::{ResultResp, ServerError};
use crate::responses::{error_to_response, json_response, PropertyList};
use astra::{Request, Response};
use percent_encoding::percent_decode_str;
use serde_json::json;
use std::borrow::Cow;
use std::collections::HashMap;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::time::Instant;
use tracing::{debug, info};

/// Everything a request handler can see. Built once in `main` and shared
/// read-only across the worker pool.
#[derive(Debug)]
pub struct AppState {
    pub catalog: Catalog,
    pub environment: Environment,
}

/// Entry point for the server loop: routes the request, turns any error
/// (or panic) into a JSON response and logs the outcome.
pub fn serve(req: Request, state: &AppState) -> Response {
    let started = Instant::now();
    let method = req.method().to_string();
    let path = req.uri().path().to_string();

    let resp = match guarded(|| handle(req, state)) {
        Ok(resp) => resp,
        Err(err) => error_to_response(err, state.environment),
    };

    info!(
        %method,
        %path,
        status = resp.status().as_u16(),
        elapsed_us = started.elapsed().as_micros() as u64,
        "request"
    );
    resp
}

/// Runs a handler, turning a panic into an internal error.
fn guarded(f: impl FnOnce() -> ResultResp) -> ResultResp {
    catch_unwind(AssertUnwindSafe(f))
        .unwrap_or_else(|panic| Err(ServerError::Internal(panic_message(panic.as_ref()))))
}

pub fn handle(req: Request, state: &AppState) -> ResultResp {
    let method = req.method().as_str();
    let uri = req.uri();
    let segments = path_segments(uri.path());

    // fixed route segments match case-insensitively, parameters keep their case
    let lowered: Vec<String> = segments.iter().map(|s| s.to_ascii_lowercase()).collect();
    let shape: Vec<&str> = lowered.iter().map(String::as_str).collect();
    let param = |i: usize| segments.get(i).copied().filter(|p| !p.is_empty());

    match (method, shape.as_slice()) {
        ("GET" | "HEAD", [""]) => index(),
        ("GET" | "HEAD", ["api", "properties"]) => {
            let criteria = FilterCriteria::from_query(&parse_query(&req));
            list_properties(&state.catalog, &criteria)
        }
        ("GET" | "HEAD", ["api", "properties", "city", _]) if param(3).is_some() => {
            properties_by_city(&state.catalog, &decode_param(segments[3])?)
        }
        ("GET" | "HEAD", ["api", "properties", "state", _]) if param(3).is_some() => {
            properties_by_state(&state.catalog, &decode_param(segments[3])?)
        }
        ("GET" | "HEAD", ["api", "properties", "type", _]) if param(3).is_some() => {
            properties_by_type(&state.catalog, &decode_param(segments[3])?)
        }
        ("GET" | "HEAD", ["api", "properties", _]) if param(2).is_some() => {
            property_by_id(&state.catalog, &decode_param(segments[2])?)
        }
        _ => Err(ServerError::RouteNotFound {
            method: method.to_string(),
            url: uri
                .path_and_query()
                .map(|pq| pq.as_str().to_string())
                .unwrap_or_else(|| uri.path().to_string()),
        }),
    }
}

fn index() -> ResultResp {
    json_response(
        200,
        &json!({
            "message": "Welcome to Australian Property Listings API",
            "version": env!("CARGO_PKG_VERSION"),
            "endpoints": {
                "GET /api/properties": "Get all properties (supports filtering)",
                "GET /api/properties/:id": "Get a specific property by ID",
                "GET /api/properties/city/:city": "Get properties by city",
                "GET /api/properties/state/:state": "Get properties by state",
                "GET /api/properties/type/:type": "Get properties by type"
            }
        }),
    )
}

fn list_properties(catalog: &Catalog, criteria: &FilterCriteria) -> ResultResp {
    let matches = catalog.filter(criteria);
    if !criteria.is_empty() {
        debug!(?criteria, count = matches.len(), "filtered listings");
    }
    json_response(200, &PropertyList::new(matches))
}

fn property_by_id(catalog: &Catalog, raw_id: &str) -> ResultResp {
    let id = crate::domain::criteria::parse_leading_int(raw_id);

    match id.and_then(|id| catalog.find_by_id(id)) {
        Some(record) => json_response(200, record),
        None => Err(ServerError::PropertyNotFound(
            id.map_or_else(|| "NaN".to_string(), |id| id.to_string()),
        )),
    }
}

fn properties_by_city(catalog: &Catalog, city: &str) -> ResultResp {
    let matches = catalog
        .find_by_city(city)
        .ok_or_else(|| ServerError::NoProperties(format!("No properties found in {city}")))?;

    let mut list = PropertyList::new(matches);
    list.city = Some(city);
    json_response(200, &list)
}

fn properties_by_state(catalog: &Catalog, state: &str) -> ResultResp {
    let state = state.to_uppercase();
    let matches = catalog.find_by_state(&state).ok_or_else(|| {
        ServerError::NoProperties(format!("No properties found in state {state}"))
    })?;

    let mut list = PropertyList::new(matches);
    list.state = Some(&state);
    json_response(200, &list)
}

fn properties_by_type(catalog: &Catalog, kind: &str) -> ResultResp {
    let matches = catalog
        .find_by_type(kind)
        .ok_or_else(|| ServerError::NoProperties(format!("No properties found of type {kind}")))?;

    let mut list = PropertyList::new(matches);
    list.kind = Some(kind);
    json_response(200, &list)
}

/// Split a path into segments, tolerating a single trailing slash.
fn path_segments(path: &str) -> Vec<&str> {
    let trimmed = match path.strip_suffix('/') {
        Some(rest) if !rest.is_empty() => rest,
        _ => path,
    };
    trimmed.trim_start_matches('/').split('/').collect()
}

fn decode_param(raw: &str) -> Result<Cow<'_, str>, ServerError> {
    percent_decode_str(raw)
        .decode_utf8()
        .map_err(|e| ServerError::Internal(format!("Failed to decode param '{raw}': {e}")))
}

/// Decoded query parameters. A repeated key keeps its first value.
fn parse_query(req: &Request) -> HashMap<String, String> {
    let mut map = HashMap::new();

    if let Some(q) = req.uri().query() {
        for (k, v) in url::form_urlencoded::parse(q.as_bytes()) {
            map.entry(k.into_owned()).or_insert_with(|| v.into_owned());
        }
    }

    map
}

fn panic_message(panic: &(dyn std::any::Any + Send)) -> String {
    panic
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| panic.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "handler panicked".to_string())
}
