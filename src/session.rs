use crate::backend::models::User;
use crate::backend::{ApiError, Backend, Credentials};
use astra::Request;

/// Who is browsing, resolved once per request and handed to every page.
#[derive(Debug, Clone, Default)]
pub struct Session {
    credentials: Credentials,
    user: Option<User>,
}

impl Session {
    pub fn new(credentials: Credentials, user: Option<User>) -> Self {
        Self { credentials, user }
    }

    /// Asks the backend who owns the forwarded cookie. A visitor the backend
    /// does not know, or a backend that cannot answer, browses anonymously.
    pub fn load(credentials: Credentials, backend: &dyn Backend) -> Self {
        if credentials.cookie().is_none() {
            return Self::new(credentials, None);
        }

        let user = match backend.current_user(&credentials) {
            Ok(user) => Some(user),
            Err(ApiError::Unauthorized | ApiError::Forbidden) => None,
            Err(e) => {
                tracing::warn!(error = %e, "failed to load current user");
                None
            }
        };

        Self::new(credentials, user)
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }
}

/// Cookies the browser sent, joined the way a single `Cookie` header carries them.
pub fn credentials_from(req: &Request) -> Credentials {
    let cookies: Vec<&str> = req
        .headers()
        .get_all("Cookie")
        .iter()
        .filter_map(|value| value.to_str().ok())
        .collect();

    if cookies.is_empty() {
        Credentials::anonymous()
    } else {
        Credentials::new(Some(cookies.join("; ")))
    }
}
