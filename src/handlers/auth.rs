use crate::app::App;
use crate::responses::{redirect_with_cookies, ResultResp};
use crate::session::credentials_from;
use astra::Request;

/// Signs out on the backend and relays its cookie changes to the browser.
/// The visitor lands on the home page even if the backend call fails.
pub fn logout(req: &Request, app: &App) -> ResultResp {
    let creds = credentials_from(req);

    let cookies = match app.backend().logout(&creds) {
        Ok(cookies) => cookies,
        Err(e) => {
            tracing::warn!(error = %e, "logout failed");
            Vec::new()
        }
    };

    redirect_with_cookies("/", &cookies)
}
