//! Integration tests for `ZoningResolver` against a wiremock reinfolib.

use std::time::Duration;

use minpaku_zoning::{ZoningConfig, ZoningResolver};
use serde_json::{json, Value};
use wiremock::matchers::{any, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const LAT: f64 = 35.6938;
const LON: f64 = 139.7029;

fn config(base_url: &str, api_key: Option<&str>) -> ZoningConfig {
    ZoningConfig {
        api_key: api_key.map(str::to_owned),
        timeout: Duration::from_secs(5),
        user_agent: "minpaku-check-test/0.1".to_owned(),
        base_url: base_url.to_owned(),
    }
}

fn resolver(server: &MockServer) -> ZoningResolver {
    ZoningResolver::new(&config(&server.uri(), Some("test-key"))).expect("resolver")
}

/// A square polygon feature `[lon_min, lat_min]`–`[lon_max, lat_max]`.
fn feature(lon: (f64, f64), lat: (f64, f64), properties: Value) -> Value {
    json!({
        "type": "Feature",
        "geometry": {
            "type": "Polygon",
            "coordinates": [[
                [lon.0, lat.0], [lon.1, lat.0], [lon.1, lat.1], [lon.0, lat.1], [lon.0, lat.0]
            ]]
        },
        "properties": properties
    })
}

fn collection(features: Vec<Value>) -> Value {
    json!({ "type": "FeatureCollection", "features": features })
}

fn containing(properties: Value) -> Value {
    feature((139.70, 139.71), (35.69, 35.70), properties)
}

fn elsewhere(properties: Value) -> Value {
    feature((139.60, 139.61), (35.60, 35.61), properties)
}

#[tokio::test]
async fn resolves_containing_polygon() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ex-api/external/XKT002"))
        .and(query_param("response_format", "geojson"))
        .and(query_param("z", "15"))
        .and(query_param("x", "29100"))
        .and(query_param("y", "12901"))
        .and(header("Ocp-Apim-Subscription-Key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(collection(vec![
            elsewhere(json!({ "use_area_ja": "工業地域" })),
            containing(json!({
                "use_area_ja": "商業地域",
                "u_floor_area_ratio_ja": "800%",
                "u_building_coverage_ratio_ja": "80%"
            })),
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let result = resolver(&server).resolve_zoning(LAT, LON).await;

    assert!(result.detected);
    assert_eq!(result.zoning.map(|z| z.code), Some("SYG"));
    assert_eq!(result.raw_zoning_name.as_deref(), Some("商業地域"));
    assert_eq!(result.floor_area_ratio.as_deref(), Some("800%"));
    assert_eq!(result.building_coverage_ratio.as_deref(), Some("80%"));
    assert_eq!(result.source, "reinfolib");
    assert_eq!(
        result.external_map_url,
        "https://cityzone.mapexpert.net/?ll=35.6938,139.7029&z=16"
    );
}

#[tokio::test]
async fn falls_back_to_first_feature_when_none_contains_point() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ex-api/external/XKT002"))
        .respond_with(ResponseTemplate::new(200).set_body_json(collection(vec![
            elsewhere(json!({ "use_area_ja": "第1種住居地域", "u_floor_area_ratio_ja": "" })),
            elsewhere(json!({ "use_area_ja": "工業地域" })),
        ])))
        .mount(&server)
        .await;

    let result = resolver(&server).resolve_zoning(LAT, LON).await;

    assert!(result.detected);
    assert_eq!(result.zoning.map(|z| z.code), Some("1JR"));
    assert_eq!(result.raw_zoning_name.as_deref(), Some("第1種住居地域"));
    assert_eq!(result.floor_area_ratio, None);
}

#[tokio::test]
async fn null_properties_do_not_spoil_the_tile() {
    let server = MockServer::start().await;
    let mut bare = elsewhere(json!({}));
    bare["properties"] = Value::Null;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(collection(vec![
            bare,
            containing(json!({ "use_area_ja": "商業地域" })),
        ])))
        .mount(&server)
        .await;

    let result = resolver(&server).resolve_zoning(LAT, LON).await;

    assert!(result.detected);
    assert_eq!(result.zoning.map(|z| z.code), Some("SYG"));
    assert_eq!(result.raw_zoning_name.as_deref(), Some("商業地域"));
}

#[tokio::test]
async fn unmatched_name_keeps_raw_fields() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(collection(vec![containing(
            json!({
                "use_area_ja": "市街化調整区域",
                "u_floor_area_ratio_ja": "200%"
            }),
        )])))
        .mount(&server)
        .await;

    let result = resolver(&server).resolve_zoning(LAT, LON).await;

    assert!(!result.detected);
    assert!(result.zoning.is_none());
    assert_eq!(result.raw_zoning_name.as_deref(), Some("市街化調整区域"));
    assert_eq!(result.floor_area_ratio.as_deref(), Some("200%"));
}

#[tokio::test]
async fn empty_tile_is_not_detected() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(collection(vec![])))
        .mount(&server)
        .await;

    let result = resolver(&server).resolve_zoning(LAT, LON).await;

    assert!(!result.detected);
    assert!(result.raw_zoning_name.is_none());
    assert!(result.external_map_url.contains("ll=35.6938,139.7029"));
}

#[tokio::test]
async fn missing_key_skips_network() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    for key in [None, Some(""), Some("   ")] {
        let resolver = ZoningResolver::new(&config(&server.uri(), key)).expect("resolver");
        assert!(!resolver.is_configured());
        let result = resolver.resolve_zoning(LAT, LON).await;
        assert!(!result.detected);
        assert_eq!(
            result.external_map_url,
            "https://cityzone.mapexpert.net/?ll=35.6938,139.7029&z=16"
        );
    }
}

#[tokio::test]
async fn error_status_is_not_detected() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401).set_body_string("unauthorized"))
        .expect(1)
        .mount(&server)
        .await;

    let result = resolver(&server).resolve_zoning(LAT, LON).await;
    assert!(!result.detected);
    assert!(result.zoning.is_none());
}

#[tokio::test]
async fn malformed_body_is_not_detected() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let result = resolver(&server).resolve_zoning(LAT, LON).await;
    assert!(!result.detected);
}

#[tokio::test]
async fn timeout_is_not_detected() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(collection(vec![containing(json!({ "use_area_ja": "商業地域" }))]))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let mut cfg = config(&server.uri(), Some("test-key"));
    cfg.timeout = Duration::from_millis(200);
    let result = ZoningResolver::new(&cfg)
        .expect("resolver")
        .resolve_zoning(LAT, LON)
        .await;

    assert!(!result.detected);
}

#[tokio::test]
async fn unreachable_host_is_not_detected() {
    let resolver =
        ZoningResolver::new(&config("http://127.0.0.1:1", Some("test-key"))).expect("resolver");
    let result = resolver.resolve_zoning(LAT, LON).await;
    assert!(!result.detected);
}

#[test]
fn invalid_base_url_is_rejected() {
    let err = ZoningResolver::new(&config("not a url", Some("k")))
        .err()
        .expect("should fail");
    assert!(err.to_string().contains("invalid base URL"));
}
