use crate::backend::ApiError;
use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{
    ad, body_string, get, location, test_app, version, FakeBackend, SESSION_COOKIE,
};

#[test]
fn home_lists_current_version_of_each_ad() {
    let app = test_app(FakeBackend {
        public_ads: vec![ad(
            1,
            vec![
                version(1, 1, "Old bike", "approved"),
                version(2, 2, "Shiny bike", "approved"),
            ],
        )],
        ..FakeBackend::default()
    });

    let resp = handle(get("/", None), &app).expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Shiny bike"));
    assert!(!body.contains("Old bike"));
    assert!(body.contains("$150.00"));
    assert!(body.contains("Lyon, France"));
    assert!(body.contains("Sign in"));
}

#[test]
fn home_without_ads_invites_visitor_to_sign_in_and_post() {
    let app = test_app(FakeBackend::default());

    let body = body_string(handle(get("/", None), &app).expect("Handler failed"));

    assert!(body.contains("No ads available"));
    assert!(body.contains("Post Your First Ad"));
    assert!(body.contains(r#"href="/auth/signin?callbackUrl=%2Fads%2Fcreate""#));
}

#[test]
fn home_shows_backend_failure_inline() {
    let app = test_app(FakeBackend {
        ad_error: Some(ApiError::Network("connection refused".into())),
        ..FakeBackend::default()
    });

    let resp = handle(get("/", None), &app).expect("Handler failed");
    assert_eq!(resp.status(), 200);
    assert!(body_string(resp).contains("Error loading ads: "));
}

#[test]
fn ad_without_versions_is_shown_as_unavailable() {
    let app = test_app(FakeBackend {
        public_ads: vec![ad(3, vec![])],
        ..FakeBackend::default()
    });

    let body = body_string(handle(get("/", None), &app).expect("Handler failed"));
    assert!(body.contains("This ad's content is currently unavailable."));
}

#[test]
fn my_ads_redirects_anonymous_visitor_to_sign_in() {
    let app = test_app(FakeBackend::default());

    let resp = handle(get("/my-ads", None), &app).expect("Handler failed");

    assert_eq!(resp.status(), 302);
    assert_eq!(location(&resp), "/auth/signin?callbackUrl=%2Fmy-ads");
}

#[test]
fn my_ads_marks_current_version_and_shows_rejection() {
    let app = test_app(FakeBackend {
        my_ads: vec![ad(
            7,
            vec![
                version(70, 1, "First draft", "approved"),
                version(71, 2, "Second draft", "rejected"),
            ],
        )],
        ..FakeBackend::signed_in()
    });

    let resp = handle(get("/my-ads?success=created", Some(SESSION_COOKIE)), &app)
        .expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Second draft"));
    assert!(body.contains("(current)"));
    assert!(body.contains("v1: "));
    assert!(body.contains("v2: "));
    assert!(body.contains("Photos are missing"));
    assert!(body.contains("created successfully and is pending approval"));
}

#[test]
fn my_ads_empty_state() {
    let app = test_app(FakeBackend::signed_in());

    let body = body_string(
        handle(get("/my-ads", Some(SESSION_COOKIE)), &app).expect("Handler failed"),
    );

    assert!(body.contains("posted any ads yet"));
    assert!(!body.contains("pending approval"));
}

#[test]
fn ad_detail_history_tab_lists_versions() {
    let app = test_app(FakeBackend {
        my_ads: vec![ad(
            7,
            vec![
                version(70, 1, "First draft", "approved"),
                version(71, 2, "Second draft", "pending"),
            ],
        )],
        ..FakeBackend::signed_in()
    });

    let resp = handle(get("/ads/7?tab=history", Some(SESSION_COOKIE)), &app)
        .expect("Handler failed");
    let body = body_string(resp);

    assert!(body.contains("Ad Version History"));
    assert!(body.contains("First draft"));
    assert!(body.contains("Second draft"));
}

#[test]
fn ad_detail_for_missing_ad() {
    let app = test_app(FakeBackend::signed_in());

    let body = body_string(
        handle(get("/ads/99", Some(SESSION_COOKIE)), &app).expect("Handler failed"),
    );

    assert!(body.contains("Ad not found"));
}

#[test]
fn malformed_ad_id_is_a_bad_request() {
    let app = test_app(FakeBackend::signed_in());

    let err = handle(get("/ads/abc", Some(SESSION_COOKIE)), &app).unwrap_err();
    assert!(matches!(err, ServerError::BadRequest(_)));
}

#[test]
fn unknown_route_is_not_found() {
    let app = test_app(FakeBackend::default());

    let err = handle(get("/nope", None), &app).unwrap_err();
    assert!(matches!(err, ServerError::NotFound));
}

#[test]
fn ad_detail_shows_posted_date_without_time() {
    let app = test_app(FakeBackend {
        my_ads: vec![ad(7, vec![version(70, 1, "Desk lamp", "approved")])],
        ..FakeBackend::signed_in()
    });

    let body = body_string(
        handle(get("/ads/7", Some(SESSION_COOKIE)), &app).expect("Handler failed"),
    );

    assert!(body.contains("Posted on Mar 1, 2025<"));
}
