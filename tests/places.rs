mod common;

use serde_json::{json, Value};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

fn feature(name: Option<&str>, categories: &[&str], lat: f64, lon: f64) -> Value {
    json!({
        "type": "Feature",
        "properties": {
            "name": name,
            "address_line1": "Somewhere in Goa",
            "categories": categories,
            "lat": lat,
            "lon": lon,
        },
        "geometry": { "type": "Point", "coordinates": [lon, lat] },
    })
}

#[tokio::test]
async fn geocode_returns_the_first_match() {
    let app = common::spawn_app().await;
    let token = app.sign_in("ana@example.com").await;
    Mock::given(method("GET"))
        .and(path("/v1/geocode/search"))
        .and(query_param("text", "Eiffel Tower"))
        .and(query_param("apiKey", "geo-test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [
                { "lat": 48.8584, "lon": 2.2945 },
                { "lat": 36.1125, "lon": -115.1728 },
            ]
        })))
        .mount(&app.mapping)
        .await;

    let response = app
        .post(&token, "/api/places/geocode", json!({ "query": "Eiffel Tower" }))
        .await;
    assert_eq!(response.status().as_u16(), 200);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "latitude": 48.8584, "longitude": 2.2945 }));
}

#[tokio::test]
async fn geocode_without_results_is_not_found() {
    let app = common::spawn_app().await;
    let token = app.sign_in("ana@example.com").await;
    Mock::given(method("GET"))
        .and(path("/v1/geocode/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "results": [] })))
        .mount(&app.mapping)
        .await;

    let response = app
        .post(&token, "/api/places/geocode", json!({ "query": "Atlantis" }))
        .await;
    assert_eq!(response.status().as_u16(), 404);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["kind"], "not_found");
}

#[tokio::test]
async fn geocode_requires_a_query() {
    let app = common::spawn_app().await;
    let token = app.sign_in("ana@example.com").await;

    let response = app
        .post(&token, "/api/places/geocode", json!({ "query": "" }))
        .await;
    assert_eq!(response.status().as_u16(), 400);
}

#[tokio::test]
async fn nearby_annotates_places_with_distance_and_images() {
    let app = common::spawn_app().await;
    let token = app.sign_in("ana@example.com").await;

    Mock::given(method("GET"))
        .and(path("/v2/places"))
        .and(query_param(
            "categories",
            "catering.restaurant,tourism.attraction,tourism.sights,leisure.park",
        ))
        .and(query_param("filter", "circle:73.8278,15.4909,2000"))
        .and(query_param("limit", "8"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "type": "FeatureCollection",
            "features": [
                feature(Some("Fort Aguada"), &["tourism", "tourism.sights"], 15.4920, 73.7737),
                feature(Some("Fisherman's Wharf"), &["catering.restaurant"], 15.4990, 73.8280),
                feature(None, &[], 15.4910, 73.8278),
            ]
        })))
        .mount(&app.mapping)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/rest_v1/page/summary/Fort_Aguada"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "title": "Fort Aguada",
            "thumbnail": { "source": "https://upload.wikimedia.org/fort_aguada.jpg" },
        })))
        .mount(&app.images)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .and(query_param("query", "restaurant"))
        .and(header("Authorization", "pexels-test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "photos": [{ "src": { "medium": "https://images.pexels.com/restaurant.jpg" } }]
        })))
        .mount(&app.images)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .and(query_param("query", "place"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&app.images)
        .await;

    let response = app
        .post(
            &token,
            "/api/places/nearby",
            json!({ "latitude": 15.4909, "longitude": 73.8278 }),
        )
        .await;
    assert_eq!(response.status().as_u16(), 200);

    let places: Value = response.json().await.unwrap();
    let places = places.as_array().unwrap();
    assert_eq!(places.len(), 3);

    assert_eq!(places[0]["name"], "Fort Aguada");
    assert_eq!(places[0]["category"], "tourist attraction");
    assert_eq!(places[0]["image"], "https://upload.wikimedia.org/fort_aguada.jpg");
    assert!(places[0]["distance_km"].as_f64().unwrap() > 5.0);

    assert_eq!(places[1]["category"], "restaurant");
    assert_eq!(places[1]["image"], "https://images.pexels.com/restaurant.jpg");

    // no name, no categories, and both image lookups fail
    assert_eq!(places[2]["name"], "Somewhere in Goa");
    assert_eq!(places[2]["category"], "place");
    assert_eq!(places[2]["image"], Value::Null);
    assert_eq!(places[2]["distance_km"], 0.01);
}

#[tokio::test]
async fn nearby_returns_at_most_eight_places() {
    let app = common::spawn_app().await;
    let token = app.sign_in("ana@example.com").await;
    let features: Vec<Value> = (0..12)
        .map(|i| feature(Some(&format!("Park {}", i)), &["leisure.park"], 15.49, 73.82))
        .collect();
    Mock::given(method("GET"))
        .and(path("/v2/places"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "features": features })))
        .mount(&app.mapping)
        .await;

    let places: Value = app
        .post(
            &token,
            "/api/places/nearby",
            json!({ "latitude": 15.49, "longitude": 73.82 }),
        )
        .await
        .json()
        .await
        .unwrap();
    assert_eq!(places.as_array().unwrap().len(), 8);
}

#[tokio::test]
async fn nearby_provider_failure_is_a_bad_gateway() {
    let app = common::spawn_app().await;
    let token = app.sign_in("ana@example.com").await;
    Mock::given(method("GET"))
        .and(path("/v2/places"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&app.mapping)
        .await;

    let response = app
        .post(
            &token,
            "/api/places/nearby",
            json!({ "latitude": 15.49, "longitude": 73.82 }),
        )
        .await;
    assert_eq!(response.status().as_u16(), 502);
}

#[tokio::test]
async fn nearby_rejects_coordinates_off_the_globe() {
    let app = common::spawn_app().await;
    let token = app.sign_in("ana@example.com").await;

    let response = app
        .post(
            &token,
            "/api/places/nearby",
            json!({ "latitude": 91.0, "longitude": 73.82 }),
        )
        .await;
    assert_eq!(response.status().as_u16(), 400);

    let response = app
        .post(&token, "/api/places/nearby", json!({ "latitude": 15.49 }))
        .await;
    assert_eq!(response.status().as_u16(), 400);
}
