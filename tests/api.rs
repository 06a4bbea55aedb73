use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use mergington::database::ActivityStore;
use mergington::models::Activity;
use mergington::web;

fn app(store: &ActivityStore) -> Router {
    web::router(store.clone(), "static")
}

async fn send(store: &ActivityStore, method: &str, uri: &str) -> (StatusCode, Value) {
    let resp = app(store)
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let status = resp.status();
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

async fn signup(store: &ActivityStore, activity: &str, email: &str) -> (StatusCode, Value) {
    send(
        store,
        "POST",
        &format!("/activities/{}/signup?email={}", activity, email),
    )
    .await
}

#[tokio::test]
async fn lists_activities() {
    let store = ActivityStore::seeded();
    let (status, body) = send(&store, "GET", "/activities").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["Chess Club"]["participants"].is_array());
    for (name, activity) in body.as_object().unwrap() {
        let participants = activity["participants"].as_array().unwrap();
        let max = activity["max_participants"].as_u64().unwrap();
        assert!(participants.len() as u64 <= max, "{name}");
    }
}

#[tokio::test]
async fn signup_success_shows_in_listing() {
    let store = ActivityStore::seeded();
    let email = "test_student@mergington.edu";

    let (status, body) = signup(&store, "Swimming%20Club", email).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["message"].as_str().unwrap().contains("Signed up"));

    let (_, listing) = send(&store, "GET", "/activities").await;
    let participants = listing["Swimming Club"]["participants"].as_array().unwrap();
    assert!(participants.iter().any(|p| p == email));
}

#[tokio::test]
async fn duplicate_signup_is_rejected_once_admitted() {
    let store = ActivityStore::seeded();
    let email = "duplicate@mergington.edu";

    let (first, _) = signup(&store, "Science%20Olympiad", email).await;
    assert_eq!(first, StatusCode::OK);

    let (second, body) = signup(&store, "Science%20Olympiad", email).await;
    assert_eq!(second, StatusCode::BAD_REQUEST);
    assert_eq!(body["detail"], "Student is already signed up");

    let participants = store.get("Science Olympiad").unwrap().participants;
    assert_eq!(participants.iter().filter(|p| *p == email).count(), 1);
}

#[tokio::test]
async fn unknown_activity_is_not_found() {
    let store = ActivityStore::seeded();
    for email in ["abc@x.com", "michael@mergington.edu", "not-an-email"] {
        let (status, body) = signup(&store, "ThisActivityDoesNotExist", email).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["detail"], "Activity not found");
    }
}

#[tokio::test]
async fn full_activity_rejects_new_email() {
    let store = ActivityStore::seeded();
    store.insert(
        "Tiny Club",
        Activity::new("Tiny", "Now", 1).with_participants(["one@mergington.edu"]),
    );

    let (status, body) = signup(&store, "Tiny%20Club", "new@x.com").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["detail"], "Activity is full");
    assert_eq!(store.get("Tiny Club").unwrap().participants.len(), 1);
}

#[tokio::test]
async fn missing_email_is_a_client_error() {
    let store = ActivityStore::seeded();
    let before = store.snapshot();

    let (status, body) = send(&store, "POST", "/activities/Chess%20Club/signup").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.is_object());
    assert!(body["detail"].as_str().unwrap().contains("email"));
    assert_eq!(store.snapshot(), before);
}

#[tokio::test]
async fn root_redirects_to_front_end() {
    let store = ActivityStore::seeded();
    let resp = app(&store)
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert!(resp.status().is_redirection());
    assert_eq!(resp.headers()["location"], "/static/index.html");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_signups_fill_exactly_to_capacity() {
    let store = ActivityStore::default();
    store.insert("Duo Club", Activity::new("Pairs", "Weekends", 2));

    let tasks: Vec<_> = (0..10)
        .map(|i| {
            let store = store.clone();
            tokio::spawn(async move {
                signup(&store, "Duo%20Club", &format!("s{}@mergington.edu", i))
                    .await
                    .0
            })
        })
        .collect();

    let mut ok = 0;
    for task in tasks {
        if task.await.unwrap() == StatusCode::OK {
            ok += 1;
        }
    }

    assert_eq!(ok, 2);
    assert_eq!(store.get("Duo Club").unwrap().participants.len(), 2);
}
