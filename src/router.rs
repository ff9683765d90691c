use crate::app::App;
use crate::errors::ServerError;
use crate::handlers::{ad_form, auth, listing};
use crate::responses::{error_to_response, ResultResp};
use astra::{Request, Response};
use std::time::Instant;

pub fn handle(req: Request, app: &App) -> ResultResp {
    let method = req.method().as_str().to_owned();
    let path = req.uri().path().to_owned();
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    match (method.as_str(), segments.as_slice()) {
        ("GET", []) => listing::home(&req, app),
        ("GET", ["my-ads"]) => listing::my_ads(&req, app),

        ("GET", ["ads", "create"]) => ad_form::new_ad(&req, app),
        ("POST", ["ads", "create"]) => ad_form::create_ad(req, app),
        ("GET", ["ads", "create", "subcategories"]) => ad_form::subcategory_options(&req, app),
        ("GET", ["ads", "create", "cities"]) => ad_form::city_options(&req, app),

        ("GET", ["ads", id]) => listing::ad_detail(&req, app, parse_ad_id(id)?),
        ("GET", ["ads", id, "edit"]) => ad_form::edit_ad(&req, app, parse_ad_id(id)?),
        ("POST", ["ads", id, "edit"]) => {
            let id = parse_ad_id(id)?;
            ad_form::update_ad(req, app, id)
        }

        ("POST", ["auth", "logout"]) => auth::logout(&req, app),

        _ => Err(ServerError::NotFound),
    }
}

/// Entry point for the server: never fails, logs every request.
pub fn respond(req: Request, app: &App) -> Response {
    let started = Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_owned();

    let response = match handle(req, app) {
        Ok(resp) => resp,
        Err(err) => {
            if matches!(err, ServerError::InternalError) {
                tracing::error!(%method, %path, "request failed");
            }
            error_to_response(err)
        }
    };

    tracing::info!(
        %method,
        %path,
        status = response.status().as_u16(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "handled request"
    );

    response
}

fn parse_ad_id(raw: &str) -> Result<i64, ServerError> {
    raw.parse()
        .map_err(|_| ServerError::BadRequest(format!("invalid ad id: {raw}")))
}
