//! Verify build/parse methods against JSON test vectors stored in `test-vectors/`.
//!
//! Each vector file describes inputs, expected requests, simulated responses,
//! and either an expected parse result or an expected error variant.
//! Comparing decoded values (not raw strings) avoids false negatives from
//! field-ordering differences.

use catalog_core::{ApiError, HttpRequest, HttpResponse, Product, ProductClient};

const BASE_URL: &str = "http://localhost:3000/api";

fn client() -> ProductClient {
    ProductClient::new(BASE_URL)
}

fn check_request(name: &str, req: &HttpRequest, expected: &serde_json::Value) {
    assert_eq!(expected["method"], "GET", "{name}: only GET is supported");
    assert_eq!(
        req.url.as_str(),
        format!("{BASE_URL}{}", expected["path"].as_str().unwrap()),
        "{name}: url"
    );

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
}

fn simulated_response(case: &serde_json::Value) -> HttpResponse {
    let sim = &case["simulated_response"];
    HttpResponse::new(
        sim["status"].as_u64().unwrap() as u16,
        sim["body"].as_str().unwrap(),
    )
}

fn check_error(name: &str, err: &ApiError, expected: &str) {
    match expected {
        "InvalidResponse" => assert!(
            matches!(err, ApiError::InvalidResponse { .. }),
            "{name}: expected InvalidResponse, got {err:?}"
        ),
        "DecodingError" => assert!(
            matches!(err, ApiError::DecodingError(_)),
            "{name}: expected DecodingError, got {err:?}"
        ),
        other => panic!("{name}: unknown expected_error: {other}"),
    }
}

// ---------------------------------------------------------------------------
// List
// ---------------------------------------------------------------------------

#[test]
fn list_test_vectors() {
    let raw = include_str!("../../test-vectors/list.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    let c = client();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();

        let req = c.build_list_products().unwrap();
        check_request(name, &req, &case["expected_request"]);

        let result = c.parse_list_products(simulated_response(case));
        if let Some(expected_error) = case.get("expected_error") {
            check_error(name, &result.unwrap_err(), expected_error.as_str().unwrap());
        } else {
            let products = result.unwrap();
            let expected: Vec<Product> =
                serde_json::from_value(case["expected_result"].clone()).unwrap();
            assert_eq!(products, expected, "{name}: parsed result");
        }
    }
}

// ---------------------------------------------------------------------------
// Get
// ---------------------------------------------------------------------------

#[test]
fn get_test_vectors() {
    let raw = include_str!("../../test-vectors/get.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    let c = client();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let id = case["input_id"].as_i64().unwrap();

        let req = c.build_get_product(id).unwrap();
        check_request(name, &req, &case["expected_request"]);

        let result = c.parse_get_product(simulated_response(case));
        if let Some(expected_error) = case.get("expected_error") {
            check_error(name, &result.unwrap_err(), expected_error.as_str().unwrap());
        } else {
            let product = result.unwrap();
            let expected: Product =
                serde_json::from_value(case["expected_result"].clone()).unwrap();
            assert_eq!(product, expected, "{name}: parsed result");
        }
    }
}
