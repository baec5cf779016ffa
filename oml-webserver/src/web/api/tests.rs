use super::*;

pub mod prelude {
    use crate::web::{self, api, sqlite};

    pub use crate::web::tests::prelude::*;

    pub fn setup() -> (Client, sqlite::Connections) {
        web::tests::rocket_test_setup(vec![("/", api::routes())])
    }

    pub fn test_json(r: &LocalResponse) {
        assert_eq!(
            r.headers().get("Content-Type").collect::<Vec<_>>()[0],
            "application/json"
        );
    }

    pub fn auth(token: &str) -> Header<'static> {
        Header::new("Authorization", format!("Bearer {token}"))
    }

    pub fn create_map(client: &Client, token: &str, title: &str) -> crate::adapters::json::Map {
        let body = format!(
            r#"{{"title":"{title}","short_description":"A short description","body":"A longer body text"}}"#
        );
        let response = client
            .post("/maps")
            .header(ContentType::JSON)
            .header(auth(token))
            .body(body)
            .dispatch();
        assert_eq!(Status::Ok, response.status());
        serde_json::from_str(&response.into_string().unwrap()).unwrap()
    }

    pub fn submit_location(
        client: &Client,
        token: &str,
        map_id: &str,
        name: &str,
        source_url: &str,
    ) -> crate::adapters::json::Location {
        let body = format!(r#"{{"name":"{name}","source_url":"{source_url}"}}"#);
        let response = client
            .post(format!("/maps/{map_id}/locations"))
            .header(ContentType::JSON)
            .header(auth(token))
            .body(body)
            .dispatch();
        assert_eq!(Status::Ok, response.status());
        serde_json::from_str(&response.into_string().unwrap()).unwrap()
    }
}

use self::prelude::*;

#[test]
fn check_slug_without_parameter_is_a_bad_request() {
    let (client, _db) = setup();
    let response = client.get("/check-slug").dispatch();
    assert_eq!(Status::BadRequest, response.status());
}

#[test]
fn check_slug_availability() {
    let (client, _db) = setup();
    let response = client.get("/check-slug?slug=city-parks").dispatch();
    assert_eq!(Status::Ok, response.status());
    test_json(&response);
    let availability: json::SlugAvailability =
        serde_json::from_str(&response.into_string().unwrap()).unwrap();
    assert!(availability.available);

    create_map(&client, "alice-token", "City Parks");

    let response = client.get("/check-slug?slug=city-parks").dispatch();
    let availability: json::SlugAvailability =
        serde_json::from_str(&response.into_string().unwrap()).unwrap();
    assert!(!availability.available);
}

#[test]
fn create_map_requires_authentication() {
    let (client, _db) = setup();
    let response = client
        .post("/maps")
        .header(ContentType::JSON)
        .body(r#"{"title":"City Parks","short_description":"s","body":"b"}"#)
        .dispatch();
    assert_eq!(Status::Unauthorized, response.status());

    let response = client
        .post("/maps")
        .header(ContentType::JSON)
        .header(auth("no-such-token"))
        .body(r#"{"title":"City Parks","short_description":"s","body":"b"}"#)
        .dispatch();
    assert_eq!(Status::Unauthorized, response.status());
}

#[test]
fn create_map_with_missing_title_is_a_bad_request() {
    let (client, _db) = setup();
    let response = client
        .post("/maps")
        .header(ContentType::JSON)
        .header(auth("alice-token"))
        .body(r#"{"title":"  ","short_description":"s","body":"b"}"#)
        .dispatch();
    assert_eq!(Status::BadRequest, response.status());
}

#[test]
fn create_a_map_and_fetch_it_by_slug() {
    let (client, _db) = setup();
    let map = create_map(&client, "alice-token", "Cafes With Wifi");
    assert_eq!("cafes-with-wifi", map.slug);

    let response = client.get("/maps/by-slug/cafes-with-wifi").dispatch();
    assert_eq!(Status::Ok, response.status());
    test_json(&response);
    let fetched: json::Map = serde_json::from_str(&response.into_string().unwrap()).unwrap();
    assert_eq!(map.id, fetched.id);

    let response = client.get("/maps/by-slug/no-such-slug").dispatch();
    assert_eq!(Status::NotFound, response.status());
}

#[test]
fn colliding_titles_get_numbered_slugs() {
    let (client, _db) = setup();
    let first = create_map(&client, "alice-token", "City Parks");
    let second = create_map(&client, "bob-token", "City Parks");
    assert_eq!("city-parks", first.slug);
    assert_eq!("city-parks-1", second.slug);
}

#[test]
fn list_maps_with_pagination() {
    let (client, _db) = setup();
    create_map(&client, "alice-token", "First");
    create_map(&client, "alice-token", "Second");
    create_map(&client, "alice-token", "Third");

    let response = client.get("/maps?limit=2").dispatch();
    assert_eq!(Status::Ok, response.status());
    let listing: json::MapListing =
        serde_json::from_str(&response.into_string().unwrap()).unwrap();
    assert_eq!(2, listing.items.len());
    assert_eq!(3, listing.total);

    let response = client.get("/maps?limit=0").dispatch();
    assert_eq!(Status::BadRequest, response.status());
}

#[test]
fn update_a_map_regenerates_the_slug() {
    let (client, _db) = setup();
    let map = create_map(&client, "alice-token", "City Parks");

    let response = client
        .put(format!("/maps/{}", map.id))
        .header(ContentType::JSON)
        .header(auth("alice-token"))
        .body(r#"{"title":"Hidden Gardens","short_description":"s","body":"b"}"#)
        .dispatch();
    assert_eq!(Status::Ok, response.status());
    let map_ref: json::MapRef = serde_json::from_str(&response.into_string().unwrap()).unwrap();
    assert_eq!(map.id, map_ref.id);
    assert_eq!("hidden-gardens", map_ref.slug);

    assert_eq!(
        Status::NotFound,
        client.get("/maps/by-slug/city-parks").dispatch().status()
    );
}

#[test]
fn only_the_owner_may_update_a_map() {
    let (client, _db) = setup();
    let map = create_map(&client, "alice-token", "City Parks");
    let response = client
        .put(format!("/maps/{}", map.id))
        .header(ContentType::JSON)
        .header(auth("bob-token"))
        .body(r#"{"title":"Hijacked","short_description":"s","body":"b"}"#)
        .dispatch();
    assert_eq!(Status::Forbidden, response.status());
}

#[test]
fn updating_an_unknown_map_is_not_found() {
    let (client, _db) = setup();
    let response = client
        .put("/maps/no-such-id")
        .header(ContentType::JSON)
        .header(auth("alice-token"))
        .body(r#"{"title":"T","short_description":"s","body":"b"}"#)
        .dispatch();
    assert_eq!(Status::NotFound, response.status());
}

#[test]
fn submitted_locations_stay_hidden_until_approved() {
    let (client, _db) = setup();
    let map = create_map(&client, "alice-token", "City Parks");
    let location = submit_location(
        &client,
        "bob-token",
        &map.id,
        "Rose Garden",
        "https://maps.example.com/place/Rose+Garden/@52.52,13.405,14z",
    );
    assert_eq!(json::ModerationStatus::Pending, location.status);
    assert!(!location.is_approved);

    let response = client.get(format!("/maps/{}/locations", map.id)).dispatch();
    assert_eq!(Status::Ok, response.status());
    let visible: Vec<json::Location> =
        serde_json::from_str(&response.into_string().unwrap()).unwrap();
    assert!(visible.is_empty());

    // Owner-only pending listing with submitter profile
    assert_eq!(
        Status::Unauthorized,
        client
            .get(format!("/maps/{}/locations/pending", map.id))
            .dispatch()
            .status()
    );
    assert_eq!(
        Status::Forbidden,
        client
            .get(format!("/maps/{}/locations/pending", map.id))
            .header(auth("bob-token"))
            .dispatch()
            .status()
    );
    let response = client
        .get(format!("/maps/{}/locations/pending", map.id))
        .header(auth("alice-token"))
        .dispatch();
    assert_eq!(Status::Ok, response.status());
    let pending: Vec<json::PendingLocation> =
        serde_json::from_str(&response.into_string().unwrap()).unwrap();
    assert_eq!(1, pending.len());
    assert_eq!("Bob", pending[0].submitter.first_name);

    // Approve and check public visibility
    let response = client
        .post(format!("/locations/{}/review", location.id))
        .header(ContentType::JSON)
        .header(auth("alice-token"))
        .body(r#"{"status":"approved"}"#)
        .dispatch();
    assert_eq!(Status::Ok, response.status());
    let reviewed: json::Location =
        serde_json::from_str(&response.into_string().unwrap()).unwrap();
    assert!(reviewed.is_approved);

    let response = client.get(format!("/maps/{}/locations", map.id)).dispatch();
    let visible: Vec<json::Location> =
        serde_json::from_str(&response.into_string().unwrap()).unwrap();
    assert_eq!(1, visible.len());
    assert_eq!("Rose Garden", visible[0].name);
}

#[test]
fn reject_a_previously_approved_location() {
    let (client, _db) = setup();
    let map = create_map(&client, "alice-token", "City Parks");
    let location = submit_location(
        &client,
        "bob-token",
        &map.id,
        "Rose Garden",
        "https://maps.example.com/place/@52.52,13.405,14z",
    );
    for (status, approved) in [("approved", true), ("rejected", false)] {
        let response = client
            .post(format!("/locations/{}/review", location.id))
            .header(ContentType::JSON)
            .header(auth("alice-token"))
            .body(format!(r#"{{"status":"{status}"}}"#))
            .dispatch();
        assert_eq!(Status::Ok, response.status());
        let reviewed: json::Location =
            serde_json::from_str(&response.into_string().unwrap()).unwrap();
        assert_eq!(approved, reviewed.is_approved);
    }
    let response = client.get(format!("/maps/{}/locations", map.id)).dispatch();
    let visible: Vec<json::Location> =
        serde_json::from_str(&response.into_string().unwrap()).unwrap();
    assert!(visible.is_empty());
}

#[test]
fn only_the_map_owner_may_review_or_delete() {
    let (client, _db) = setup();
    let map = create_map(&client, "alice-token", "City Parks");
    let location = submit_location(
        &client,
        "bob-token",
        &map.id,
        "Rose Garden",
        "https://maps.example.com/place/@52.52,13.405,14z",
    );
    assert_eq!(
        Status::Forbidden,
        client
            .post(format!("/locations/{}/review", location.id))
            .header(ContentType::JSON)
            .header(auth("bob-token"))
            .body(r#"{"status":"approved"}"#)
            .dispatch()
            .status()
    );
    assert_eq!(
        Status::Forbidden,
        client
            .delete(format!("/locations/{}", location.id))
            .header(auth("bob-token"))
            .dispatch()
            .status()
    );
    assert_eq!(
        Status::Ok,
        client
            .delete(format!("/locations/{}", location.id))
            .header(auth("alice-token"))
            .dispatch()
            .status()
    );
    assert_eq!(
        Status::NotFound,
        client
            .delete(format!("/locations/{}", location.id))
            .header(auth("alice-token"))
            .dispatch()
            .status()
    );
}

#[test]
fn submit_location_without_extractable_coordinates_is_a_bad_request() {
    let (client, _db) = setup();
    let map = create_map(&client, "alice-token", "City Parks");
    let response = client
        .post(format!("/maps/{}/locations", map.id))
        .header(ContentType::JSON)
        .header(auth("bob-token"))
        .body(r#"{"name":"Rose Garden","source_url":"https://maps.example.com/no-coords"}"#)
        .dispatch();
    assert_eq!(Status::BadRequest, response.status());
}

#[test]
fn submit_location_with_place_query() {
    let (client, _db) = setup();
    let map = create_map(&client, "alice-token", "City Parks");
    let response = client
        .post(format!("/maps/{}/locations", map.id))
        .header(ContentType::JSON)
        .header(auth("bob-token"))
        .body(
            r#"{"name":"Rose Garden","source_url":"https://maps.example.com/no-coords","query":"Rose Garden, Berlin"}"#,
        )
        .dispatch();
    assert_eq!(Status::Ok, response.status());
    let location: json::Location =
        serde_json::from_str(&response.into_string().unwrap()).unwrap();
    assert!((location.lat - 52.52).abs() < f64::EPSILON);

    // Unresolvable place queries are rejected
    let response = client
        .post(format!("/maps/{}/locations", map.id))
        .header(ContentType::JSON)
        .header(auth("bob-token"))
        .body(
            r#"{"name":"Nowhere","source_url":"https://maps.example.com/no-coords","query":"Nowhere"}"#,
        )
        .dispatch();
    assert_eq!(Status::BadRequest, response.status());
}

#[test]
fn list_locations_near_a_position() {
    let (client, _db) = setup();
    let map = create_map(&client, "alice-token", "City Parks");
    let berlin = submit_location(
        &client,
        "bob-token",
        &map.id,
        "Berlin Garden",
        "https://maps.example.com/place/@52.52,13.405,14z",
    );
    let munich = submit_location(
        &client,
        "bob-token",
        &map.id,
        "Munich Garden",
        "https://maps.example.com/place/@48.1351,11.582,14z",
    );
    for id in [&berlin.id, &munich.id] {
        client
            .post(format!("/locations/{id}/review"))
            .header(ContentType::JSON)
            .header(auth("alice-token"))
            .body(r#"{"status":"approved"}"#)
            .dispatch();
    }

    // Close to Munich, so Munich comes first
    let response = client
        .get(format!("/maps/{}/locations?near=48.2,11.6", map.id))
        .dispatch();
    assert_eq!(Status::Ok, response.status());
    let near: Vec<json::Location> =
        serde_json::from_str(&response.into_string().unwrap()).unwrap();
    assert_eq!(2, near.len());
    assert_eq!("Munich Garden", near[0].name);
    assert!(near[0].distance.as_deref().unwrap().ends_with("km"));

    let response = client
        .get(format!("/maps/{}/locations?near=not-a-position", map.id))
        .dispatch();
    assert_eq!(Status::BadRequest, response.status());
}

#[test]
fn voting_twice_counts_once() {
    let (client, db) = setup();
    let map = create_map(&client, "alice-token", "City Parks");
    assert_eq!(
        Status::Unauthorized,
        client
            .post(format!("/maps/{}/votes", map.id))
            .dispatch()
            .status()
    );
    for _ in 0..2 {
        assert_eq!(
            Status::Ok,
            client
                .post(format!("/maps/{}/votes", map.id))
                .header(auth("bob-token"))
                .dispatch()
                .status()
        );
    }
    let count = {
        let conn = db.shared().unwrap();
        usecases::count_votes_of_map(&conn, &map.id).unwrap()
    };
    assert_eq!(1, count);
}

#[test]
fn vote_status_is_all_false_for_anonymous_requests() {
    let (client, _db) = setup();
    let map = create_map(&client, "alice-token", "City Parks");
    client
        .post(format!("/maps/{}/votes", map.id))
        .header(auth("bob-token"))
        .dispatch();

    let body = format!(r#"{{"map_ids":["{}"]}}"#, map.id);
    let response = client
        .post("/votes/status")
        .header(ContentType::JSON)
        .body(&body)
        .dispatch();
    assert_eq!(Status::Ok, response.status());
    let status: std::collections::HashMap<String, bool> =
        serde_json::from_str(&response.into_string().unwrap()).unwrap();
    assert_eq!(Some(&false), status.get(map.id.as_str()));

    let response = client
        .post("/votes/status")
        .header(ContentType::JSON)
        .header(auth("bob-token"))
        .body(&body)
        .dispatch();
    let status: std::collections::HashMap<String, bool> =
        serde_json::from_str(&response.into_string().unwrap()).unwrap();
    assert_eq!(Some(&true), status.get(map.id.as_str()));
}

#[test]
fn vote_status_with_an_empty_id_list_is_a_bad_request() {
    let (client, _db) = setup();
    let response = client
        .post("/votes/status")
        .header(ContentType::JSON)
        .body(r#"{"map_ids":[]}"#)
        .dispatch();
    assert_eq!(Status::BadRequest, response.status());
}

#[test]
fn current_user_is_resolved_on_first_sight() {
    let (client, _db) = setup();
    assert_eq!(
        Status::Unauthorized,
        client.get("/users/current").dispatch().status()
    );

    let response = client
        .get("/users/current")
        .header(auth("alice-token"))
        .dispatch();
    assert_eq!(Status::Ok, response.status());
    let current: json::CurrentUser =
        serde_json::from_str(&response.into_string().unwrap()).unwrap();
    assert!(current.is_new);
    assert_eq!("Alice", current.user.first_name);
    assert_eq!("Archer", current.user.last_name);

    let response = client
        .get("/users/current")
        .header(auth("alice-token"))
        .dispatch();
    let current: json::CurrentUser =
        serde_json::from_str(&response.into_string().unwrap()).unwrap();
    assert!(!current.is_new);
}

#[test]
fn upload_an_image() {
    let (client, _db) = setup();
    assert_eq!(
        Status::Unauthorized,
        client
            .post("/images")
            .header(ContentType::PNG)
            .body(&b"not really a png"[..])
            .dispatch()
            .status()
    );

    let response = client
        .post("/images")
        .header(ContentType::PNG)
        .header(auth("alice-token"))
        .body(&b"not really a png"[..])
        .dispatch();
    assert_eq!(Status::Ok, response.status());
    let stored: json::StoredImage =
        serde_json::from_str(&response.into_string().unwrap()).unwrap();
    assert_eq!("/media/dummy.png", stored.url);
}
