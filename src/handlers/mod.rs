use crate::errors::ServerError;
use astra::Request;
use std::collections::HashMap;
use std::io::Read;
use url::form_urlencoded;

pub mod ad_form;
pub mod auth;
pub mod listing;

const MAX_FORM_BYTES: u64 = 64 * 1024;

pub fn query_params(req: &Request) -> HashMap<String, String> {
    req.uri()
        .query()
        .map(|q| form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default()
}

/// Decodes an `application/x-www-form-urlencoded` body. Bodies over
/// `MAX_FORM_BYTES` are refused rather than cut short.
pub fn form_fields(mut req: Request) -> Result<HashMap<String, String>, ServerError> {
    let mut body = Vec::new();
    req.body_mut()
        .reader()
        .take(MAX_FORM_BYTES + 1)
        .read_to_end(&mut body)
        .map_err(|e| ServerError::BadRequest(format!("unreadable form body: {e}")))?;

    if body.len() as u64 > MAX_FORM_BYTES {
        return Err(ServerError::PayloadTooLarge);
    }

    Ok(form_urlencoded::parse(&body).into_owned().collect())
}
