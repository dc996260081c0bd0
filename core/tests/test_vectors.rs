//! Verify build/parse against JSON test vectors stored in `test-vectors/`.
//!
//! Routes are looked up by their catalog name, so the vectors stay usable by
//! any host that shares the same route table. Comparing parsed JSON (not raw
//! strings) avoids false negatives from field-ordering differences.

use pretty_assertions::assert_eq;
use printful_core::{routes, Call, HttpMethod, HttpResponse, PrintfulClient, Query, ResourceId};
use serde_json::Value;

const BASE_URL: &str = "http://localhost:3000";

/// Parse the method string from test vectors into `HttpMethod`.
fn parse_method(s: &str) -> HttpMethod {
    match s {
        "GET" => HttpMethod::Get,
        "POST" => HttpMethod::Post,
        "PUT" => HttpMethod::Put,
        "DELETE" => HttpMethod::Delete,
        other => panic!("unknown method: {other}"),
    }
}

fn route(case: &Value) -> &'static routes::Route {
    let name = case["route"].as_str().unwrap();
    routes::by_name(name).unwrap_or_else(|| panic!("unknown route: {name}"))
}

/// Assemble the `Call` a case describes.
fn call(case: &Value) -> Call {
    let mut call = Call::new(route(case));
    match &case["id"] {
        Value::Number(n) => call = call.id(n.as_u64().unwrap()),
        Value::String(s) => call = call.id(ResourceId::from(s.as_str())),
        _ => {}
    }
    if let Some(pairs) = case["query"].as_array() {
        let query = pairs.iter().fold(Query::new(), |q, pair| {
            q.push(pair[0].as_str().unwrap(), pair[1].as_str().unwrap())
        });
        call = call.query(query);
    }
    if let Some(paging) = case.get("paging") {
        call = call.paging(paging["offset"].as_u64().unwrap(), paging["limit"].as_u64().unwrap());
    }
    if let Some(body) = case.get("body") {
        call = call.json(body).unwrap();
    }
    call
}

#[test]
fn request_test_vectors() {
    let raw = include_str!("../../test-vectors/requests.json");
    let vectors: Value = serde_json::from_str(raw).unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let token = match case.get("token") {
            Some(Value::Null) => None,
            _ => Some("test-token"),
        };
        let client = PrintfulClient::with_base_url(BASE_URL, token);
        let expected = &case["expected_request"];

        let req = client.build(&call(case)).unwrap();
        assert_eq!(req.method, parse_method(expected["method"].as_str().unwrap()), "{name}: method");
        assert_eq!(req.url, format!("{BASE_URL}{}", expected["path"].as_str().unwrap()), "{name}: url");

        let expected_headers: Vec<(String, String)> = expected["headers"]
            .as_array()
            .unwrap()
            .iter()
            .map(|h| {
                let arr = h.as_array().unwrap();
                (arr[0].as_str().unwrap().to_string(), arr[1].as_str().unwrap().to_string())
            })
            .collect();
        assert_eq!(req.headers, expected_headers, "{name}: headers");

        let body = req
            .body
            .as_deref()
            .map(|b| serde_json::from_str::<Value>(b).unwrap())
            .unwrap_or(Value::Null);
        assert_eq!(body, expected["body"], "{name}: body");
    }
}

#[test]
fn normalize_test_vectors() {
    let raw = include_str!("../../test-vectors/normalize.json");
    let vectors: Value = serde_json::from_str(raw).unwrap();
    let client = PrintfulClient::with_base_url(BASE_URL, Some("test-token"));

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let response = HttpResponse {
            status: case["status"].as_u64().unwrap() as u16,
            headers: Vec::new(),
            body: case["body"].to_string(),
        };

        let normalized = client.parse(&call(case), response).unwrap();
        assert_eq!(normalized.to_value(), case["expected"], "{name}");
        assert_eq!(
            normalized.is_error(),
            case["expected"]["error"] != serde_json::json!({}),
            "{name}: is_error"
        );
    }
}

#[test]
fn non_json_body_is_an_error() {
    let client = PrintfulClient::with_base_url(BASE_URL, Some("test-token"));
    let call = Call::new(&routes::countries::GET_COUNTRIES);
    for body in ["", "<html>502 Bad Gateway</html>", "{\"code\": 200,"] {
        let response = HttpResponse {
            status: 502,
            headers: Vec::new(),
            body: body.to_string(),
        };
        assert!(client.parse(&call, response).is_err(), "{body:?} should not parse");
    }
}
