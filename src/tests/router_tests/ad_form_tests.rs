use crate::backend::ApiError;
use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{
    ad, body_string, get, location, post_form, test_app, version, FakeBackend, SESSION_COOKIE,
};
use rust_decimal::Decimal;

const VALID_AD: &str = "title=Red+bike&description=Barely+used&price=120.50\
&categoryId=1&subcategoryId=11&countryId=1&cityId=101";

#[test]
fn create_form_requires_sign_in() {
    let app = test_app(FakeBackend::default());

    let resp = handle(get("/ads/create", None), &app).expect("Handler failed");

    assert_eq!(resp.status(), 302);
    assert_eq!(location(&resp), "/auth/signin?callbackUrl=%2Fads%2Fcreate");
}

#[test]
fn create_form_lists_categories_and_countries() {
    let app = test_app(FakeBackend::signed_in());

    let resp = handle(get("/ads/create", Some(SESSION_COOKIE)), &app).expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Post a New Ad"));
    assert!(body.contains("Vehicles"));
    assert!(body.contains("France"));
    assert!(body.contains(r#"hx-get="/ads/create/subcategories""#));
    // no category picked yet, so no subcategory options
    assert!(!body.contains("Cars"));
}

#[test]
fn invalid_submission_is_rejected_before_reaching_backend() {
    let backend = FakeBackend::signed_in();
    let calls = backend.calls.clone();
    let app = test_app(backend);

    let resp = handle(
        post_form("/ads/create", "title=&description=&price=-5", Some(SESSION_COOKIE)),
        &app,
    )
    .expect("Handler failed");

    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(body.contains("Title is required"));
    assert!(body.contains("Price must be a non-negative number"));
    assert!(body.contains("Category is required"));
    assert!(body.contains("City is required"));
    assert!(calls.created.lock().unwrap().is_empty());
}

#[test]
fn valid_submission_creates_ad_and_redirects() {
    let backend = FakeBackend::signed_in();
    let calls = backend.calls.clone();
    let app = test_app(backend);

    let resp = handle(post_form("/ads/create", VALID_AD, Some(SESSION_COOKIE)), &app)
        .expect("Handler failed");

    assert_eq!(resp.status(), 302);
    assert_eq!(location(&resp), "/my-ads?success=created");

    let created = calls.created.lock().unwrap();
    assert_eq!(created.len(), 1);
    assert_eq!(created[0].title, "Red bike");
    assert_eq!(created[0].price, Decimal::new(12050, 2));
    assert_eq!(created[0].subcategory_id, Some(11));
    assert_eq!(created[0].city_id, 101);
}

#[test]
fn stale_subcategory_is_dropped_on_submit() {
    let backend = FakeBackend::signed_in();
    let calls = backend.calls.clone();
    let app = test_app(backend);

    // subcategory 11 belongs to Vehicles, not Furniture
    let form = "title=Sofa&description=Grey&price=0&categoryId=2&subcategoryId=11\
&countryId=1&cityId=100";
    let resp = handle(post_form("/ads/create", form, Some(SESSION_COOKIE)), &app)
        .expect("Handler failed");

    assert_eq!(resp.status(), 302);
    let created = calls.created.lock().unwrap();
    assert_eq!(created[0].category_id, 2);
    assert_eq!(created[0].subcategory_id, None);
    assert_eq!(created[0].price, Decimal::ZERO);
}

#[test]
fn city_from_another_country_is_required_again() {
    let backend = FakeBackend::signed_in();
    let calls = backend.calls.clone();
    let app = test_app(backend);

    let form = "title=Sofa&description=Grey&price=10&categoryId=2&countryId=2&cityId=100";
    let resp = handle(post_form("/ads/create", form, Some(SESSION_COOKIE)), &app)
        .expect("Handler failed");

    assert_eq!(resp.status(), 200);
    assert!(body_string(resp).contains("City is required"));
    assert!(calls.created.lock().unwrap().is_empty());
}

#[test]
fn backend_failure_on_create_keeps_form_values() {
    let app = test_app(FakeBackend {
        ad_error: Some(ApiError::Status {
            status: 400,
            message: "title too long".into(),
        }),
        ..FakeBackend::signed_in()
    });

    let resp = handle(post_form("/ads/create", VALID_AD, Some(SESSION_COOKIE)), &app)
        .expect("Handler failed");
    let body = body_string(resp);

    assert!(body.contains("Error creating ad: "));
    assert!(body.contains("title too long"));
    assert!(body.contains(r#"value="Red bike""#));
}

#[test]
fn subcategory_partial_follows_selected_category() {
    let app = test_app(FakeBackend::signed_in());

    let resp = handle(
        get(
            "/ads/create/subcategories?categoryId=1&subcategoryId=11",
            Some(SESSION_COOKIE),
        ),
        &app,
    )
    .expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(!body.contains("<html"));
    assert!(body.contains(r#"id="subcategoryId-field""#));
    assert!(body.contains("Cars"));
    assert!(body.contains(r#"<option value="11" selected>"#));
}

#[test]
fn subcategory_partial_clears_selection_of_previous_category() {
    let app = test_app(FakeBackend::signed_in());

    let body = body_string(
        handle(
            get(
                "/ads/create/subcategories?categoryId=2&subcategoryId=11",
                Some(SESSION_COOKIE),
            ),
            &app,
        )
        .expect("Handler failed"),
    );

    assert!(body.contains("Sofas"));
    assert!(!body.contains("Bikes"));
    assert!(body.contains(r#"<option value="" selected>"#));
}

#[test]
fn city_partial_for_unknown_country_is_empty_and_disabled() {
    let app = test_app(FakeBackend::signed_in());

    let body = body_string(
        handle(get("/ads/create/cities?countryId=42", Some(SESSION_COOKIE)), &app)
            .expect("Handler failed"),
    );

    assert!(body.contains(r#"id="cityId-field""#));
    assert!(body.contains("disabled"));
    assert!(!body.contains("Lyon"));
}

#[test]
fn edit_form_is_prefilled_from_current_version() {
    let app = test_app(FakeBackend {
        my_ads: vec![ad(
            5,
            vec![
                version(50, 1, "Old title", "approved"),
                version(51, 2, "New title", "rejected"),
            ],
        )],
        ..FakeBackend::signed_in()
    });

    let resp = handle(get("/ads/5/edit", Some(SESSION_COOKIE)), &app).expect("Handler failed");
    let body = body_string(resp);

    assert!(body.contains("Edit Ad"));
    assert!(body.contains(r#"value="New title""#));
    assert!(body.contains("Photos are missing"));
    assert!(body.contains(r#"action="/ads/5/edit""#));
}

#[test]
fn edit_form_for_someone_elses_ad_is_not_authorized() {
    let app = test_app(FakeBackend {
        ad_error: Some(ApiError::Forbidden),
        ..FakeBackend::signed_in()
    });

    let body = body_string(
        handle(get("/ads/5/edit", Some(SESSION_COOKIE)), &app).expect("Handler failed"),
    );

    assert!(body.contains("You are not authorized to edit this ad."));
    assert!(body.contains("Go to My Ads"));
}

#[test]
fn update_sends_edit_and_redirects() {
    let backend = FakeBackend {
        my_ads: vec![ad(5, vec![version(50, 1, "Old title", "approved")])],
        ..FakeBackend::signed_in()
    };
    let calls = backend.calls.clone();
    let app = test_app(backend);

    let resp = handle(
        post_form(
            "/ads/5/edit",
            "title=Fresh+title&description=Now+with+lights&price=99",
            Some(SESSION_COOKIE),
        ),
        &app,
    )
    .expect("Handler failed");

    assert_eq!(resp.status(), 302);
    assert_eq!(location(&resp), "/my-ads?success=updated");

    let updated = calls.updated.lock().unwrap();
    assert_eq!(updated.len(), 1);
    assert_eq!(updated[0].0, 5);
    assert_eq!(updated[0].1.title, "Fresh title");
    assert_eq!(updated[0].1.price, Decimal::from(99));
}

#[test]
fn invalid_update_rerenders_edit_form() {
    let backend = FakeBackend {
        my_ads: vec![ad(5, vec![version(50, 1, "Old title", "approved")])],
        ..FakeBackend::signed_in()
    };
    let calls = backend.calls.clone();
    let app = test_app(backend);

    let resp = handle(
        post_form("/ads/5/edit", "title=&description=x&price=", Some(SESSION_COOKIE)),
        &app,
    )
    .expect("Handler failed");
    let body = body_string(resp);

    assert!(body.contains("Title is required"));
    assert!(body.contains("Price is required"));
    assert!(calls.updated.lock().unwrap().is_empty());
}

#[test]
fn rejected_update_shows_not_authorized_view() {
    let app = test_app(FakeBackend {
        my_ads: vec![ad(5, vec![version(50, 1, "Old title", "approved")])],
        update_error: Some(ApiError::Forbidden),
        ..FakeBackend::signed_in()
    });

    let resp = handle(
        post_form(
            "/ads/5/edit",
            "title=Fresh+title&description=Lights&price=99",
            Some(SESSION_COOKIE),
        ),
        &app,
    )
    .expect("Handler failed");

    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(body.contains("You are not authorized to edit this ad."));
    assert!(!body.contains("Update Ad"));
}

#[test]
fn failed_update_rerenders_form_with_error() {
    let app = test_app(FakeBackend {
        my_ads: vec![ad(5, vec![version(50, 1, "Old title", "approved")])],
        update_error: Some(ApiError::Status {
            status: 500,
            message: "database offline".into(),
        }),
        ..FakeBackend::signed_in()
    });

    let resp = handle(
        post_form(
            "/ads/5/edit",
            "title=Fresh+title&description=Lights&price=99",
            Some(SESSION_COOKIE),
        ),
        &app,
    )
    .expect("Handler failed");

    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(body.contains("Error updating ad: "));
    assert!(body.contains("database offline"));
    assert!(body.contains(r#"value="Fresh title""#));
}

#[test]
fn oversized_form_is_refused_without_creating_ad() {
    let backend = FakeBackend::signed_in();
    let calls = backend.calls.clone();
    let app = test_app(backend);

    let form = format!(
        "title=Bike&price=10&categoryId=1&countryId=1&cityId=100&description={}",
        "a".repeat(70 * 1024)
    );
    let err = handle(post_form("/ads/create", &form, Some(SESSION_COOKIE)), &app).unwrap_err();

    assert!(matches!(err, ServerError::PayloadTooLarge));
    assert_eq!(err.status(), 413);
    assert!(calls.created.lock().unwrap().is_empty());
}

#[test]
fn form_at_size_limit_is_accepted() {
    let backend = FakeBackend::signed_in();
    let calls = backend.calls.clone();
    let app = test_app(backend);

    let prefix = "title=Bike&price=10&categoryId=1&countryId=1&cityId=100&description=";
    let form = format!("{prefix}{}", "a".repeat(64 * 1024 - prefix.len()));
    let resp = handle(post_form("/ads/create", &form, Some(SESSION_COOKIE)), &app)
        .expect("Handler failed");

    assert_eq!(resp.status(), 302);
    let created = calls.created.lock().unwrap();
    assert_eq!(created[0].description.len(), 64 * 1024 - prefix.len());
}
