//! Query hooks and mutation invalidation against a mock course API.

use std::sync::Arc;
use std::time::Duration;

use lec_api::ApiClient;
use lec_auth::StaticSession;
use lec_config::ApiConfig;
use lec_core::payloads::CreateReview;
use lec_core::responses::ApiResponse;
use lec_query::{BufferedNotifier, NotificationKind, QueryCache, QueryClient, QueryKey};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

struct Harness {
    client: QueryClient,
    notifier: Arc<BufferedNotifier>,
}

fn harness(server: &MockServer) -> Harness {
    let config = ApiConfig {
        base_url: format!("{}/api", server.uri()),
        ..ApiConfig::default()
    };
    let api = ApiClient::new(&config, Arc::new(StaticSession::signed_in("abc123", "u1"))).unwrap();
    let notifier = Arc::new(BufferedNotifier::new());
    let cache = QueryCache::new(Duration::from_secs(60), Duration::from_secs(300));
    Harness {
        client: QueryClient::new(api, cache, notifier.clone()),
        notifier,
    }
}

fn review_json() -> serde_json::Value {
    json!({
        "id": "r1",
        "courseId": "c1",
        "userId": "u1",
        "rating": 4,
        "comment": "Solid",
        "status": "PENDING",
        "createdAt": "2026-01-01T00:00:00Z",
        "updatedAt": "2026-01-01T00:00:00Z"
    })
}

async fn mount_get(server: &MockServer, route: &str, body: serde_json::Value, times: u64) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(times)
        .mount(server)
        .await;
}

#[tokio::test]
async fn missing_id_disables_query_without_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let h = harness(&server);
    assert!(h.client.course(None).await.is_disabled());
    assert!(h.client.course(Some("")).await.is_disabled());
    assert!(h.client.module_progress(Some("   ")).await.is_disabled());
    assert!(h.client.course_enrollment(None).await.is_disabled());
    assert!(h.client.module_lessons(None).await.is_disabled());
    assert!(h.client.cache().is_empty());
}

#[tokio::test]
async fn fresh_reads_are_served_from_cache() {
    let server = MockServer::start().await;
    mount_get(&server, "/api/reviews/r1", json!({ "data": review_json() }), 1).await;

    let h = harness(&server);
    let first = h.client.review(Some("r1")).await.into_result().unwrap().unwrap();
    let second = h.client.review(Some("r1")).await.into_result().unwrap().unwrap();
    assert!(Arc::ptr_eq(&first, &second));
}

#[tokio::test]
async fn add_review_stales_its_keys_and_notifies() {
    let server = MockServer::start().await;
    mount_get(&server, "/api/reviews", json!({ "data": [] }), 2).await;
    mount_get(&server, "/api/reviews/course/c1", json!({ "data": [] }), 2).await;
    mount_get(
        &server,
        "/api/reviews/check/u1/c1",
        json!({ "data": { "hasReviewed": false, "review": null } }),
        2,
    )
    .await;
    // Untouched by the mutation: fetched once, then served from cache.
    mount_get(&server, "/api/announcements", json!({ "data": [] }), 1).await;
    Mock::given(method("POST"))
        .and(path("/api/reviews"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "data": review_json() })))
        .expect(1)
        .mount(&server)
        .await;

    let h = harness(&server);
    h.client.reviews().await;
    h.client.course_reviews(Some("c1")).await;
    h.client.check_user_review(Some("c1")).await;
    h.client.announcements().await;

    let created = h
        .client
        .add_review(&CreateReview {
            course_id: "c1".into(),
            rating: 4,
            comment: Some("Solid".into()),
        })
        .await
        .expect("review created");
    assert_eq!(created.id, "r1");

    let cache = h.client.cache();
    assert!(cache.is_stale(&QueryKey::reviews()));
    assert!(cache.is_stale(&QueryKey::course_reviews("c1")));
    assert!(cache.is_stale(&QueryKey::check_user_review("c1", "u1")));
    assert!(cache.is_fresh(&QueryKey::announcements()));

    // Next reads refetch.
    h.client.reviews().await;
    h.client.course_reviews(Some("c1")).await;
    let check = h.client.check_user_review(Some("c1")).await;
    assert!(check.error.is_none());
    h.client.announcements().await;

    let notes = h.notifier.drain();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].kind, NotificationKind::Success);
    assert_eq!(notes[0].title, "Review submitted");
}

#[tokio::test]
async fn failed_mutation_is_swallowed_and_reported() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/enrollments"))
        .respond_with(
            ResponseTemplate::new(409)
                .set_body_json(json!({ "success": false, "message": "Already enrolled" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let h = harness(&server);
    h.client
        .cache()
        .set(QueryKey::enrollment("c1"), Arc::new(None::<lec_core::entities::Enrollment>));

    assert!(h.client.enroll("c1").await.is_none());
    assert!(
        h.client.cache().is_fresh(&QueryKey::enrollment("c1")),
        "a failed mutation invalidates nothing"
    );

    let notes = h.notifier.drain();
    assert_eq!(notes.len(), 1);
    assert!(notes[0].is_error());
    assert_eq!(notes[0].title, "Could not enroll");
    assert!(notes[0].detail.as_deref().unwrap().contains("Already enrolled"));
}

#[tokio::test]
async fn invalid_review_is_rejected_before_sending() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    let h = harness(&server);
    let result = h
        .client
        .add_review(&CreateReview {
            course_id: "c1".into(),
            rating: 9,
            comment: None,
        })
        .await;
    assert!(result.is_none());
    assert!(h.notifier.drain()[0].detail.as_deref().unwrap().contains("rating"));
}

#[tokio::test]
async fn read_failure_is_exposed_with_previous_snapshot() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/lessons/module/m1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": [] })))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/lessons/module/m1"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({ "message": "db down" })))
        .expect(1)
        .mount(&server)
        .await;

    let h = harness(&server);
    assert!(h.client.module_lessons(Some("m1")).await.error.is_none());
    h.client.cache().invalidate(&QueryKey::module_lessons("m1"));

    let result = h.client.module_lessons(Some("m1")).await;
    assert_eq!(result.error.as_ref().and_then(lec_api::ApiError::status), Some(500));
    assert_eq!(result.data.as_deref(), Some(&Vec::new()));
    assert!(h.notifier.drain().is_empty(), "reads never notify");
}

#[tokio::test]
async fn later_fetch_supersedes_slower_earlier_one() {
    let server = MockServer::start().await;
    let h = harness(&server);
    let key = QueryKey::course("c1");

    let slow = h.client.query(key.clone(), async {
        tokio::time::sleep(Duration::from_millis(100)).await;
        Ok(ApiResponse {
            success: true,
            message: None,
            data: "old",
        })
    });
    let fast = h.client.query(key.clone(), async {
        Ok(ApiResponse {
            success: true,
            message: None,
            data: "new",
        })
    });
    let (slow, fast) = tokio::join!(slow, fast);

    // Both complete; only the newest write lands.
    assert_eq!(slow.data.as_deref(), Some(&"old"));
    assert_eq!(fast.data.as_deref(), Some(&"new"));
    assert_eq!(h.client.cache().get::<&str>(&key).as_deref(), Some(&"new"));
    assert!(!h.client.cache().is_fetching(&key));
}

#[tokio::test]
async fn read_overlapping_a_write_is_refetched() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/reviews"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "data": [] }))
                .set_delay(Duration::from_millis(300)),
        )
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/reviews"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "data": review_json() })))
        .expect(1)
        .mount(&server)
        .await;

    let h = harness(&server);
    let payload = CreateReview {
        course_id: "c1".into(),
        rating: 4,
        comment: None,
    };
    let (read, created) = tokio::join!(h.client.reviews(), async {
        tokio::time::sleep(Duration::from_millis(50)).await;
        h.client.add_review(&payload).await
    });

    // The list was read before the review existed on the server.
    assert!(read.error.is_none());
    assert!(created.is_some());
    assert!(h.client.cache().is_stale(&QueryKey::reviews()));

    // Served again from the network, not from the pre-write snapshot.
    assert!(h.client.reviews().await.error.is_none());
    assert!(h.client.cache().is_fresh(&QueryKey::reviews()));
}

#[rstest::rstest]
#[case::update_review("review")]
#[case::delete_review("review-delete")]
#[case::moderate_review("moderate")]
#[case::cancel_enrollment("cancel")]
#[case::confirm_payment("payment")]
#[case::complete_module("module")]
#[case::complete_lesson("lesson")]
#[tokio::test]
async fn blank_course_id_rejects_mutation_without_request(#[case] action: &str) {
    use lec_core::enums::ReviewStatus;
    use lec_core::payloads::{ModerateReview, PaymentConfirmation, UpdateReview};

    let server = MockServer::start().await;
    Mock::given(wiremock::matchers::any())
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": null })))
        .expect(0)
        .mount(&server)
        .await;

    let h = harness(&server);
    let q = &h.client;
    let sent = match action {
        "review" => {
            let payload = UpdateReview {
                rating: Some(5),
                comment: None,
            };
            q.update_review("r1", " ", &payload).await.is_some()
        }
        "review-delete" => q.delete_review("r1", "").await,
        "moderate" => {
            let payload = ModerateReview {
                status: ReviewStatus::Approved,
                reason: None,
            };
            q.moderate_review("r1", "", &payload).await.is_some()
        }
        "cancel" => q.cancel_enrollment("e1", "").await.is_some(),
        "payment" => {
            let payload = PaymentConfirmation {
                payment_reference: "pay_1".into(),
            };
            q.confirm_payment("e1", "", &payload).await.is_some()
        }
        "module" => q.complete_module("", "m1").await.is_some(),
        "lesson" => q.complete_lesson("", "m1", "l1").await.is_some(),
        other => unreachable!("unknown action {other}"),
    };

    assert!(!sent);
    let notes = h.notifier.drain();
    assert_eq!(notes.len(), 1);
    assert!(notes[0].is_error());
    assert_eq!(notes[0].detail.as_deref(), Some("course id is required"));
}
