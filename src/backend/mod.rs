mod backend_error;
mod client;
pub mod models;

pub use backend_error::ApiError;
pub use client::HttpBackend;

use models::{Ad, AdEdit, Category, Country, NewAd, User};

/// What the browser handed us to prove who it is; relayed to the backend as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    cookie: Option<String>,
}

impl Credentials {
    pub fn new(cookie: Option<String>) -> Self {
        Self {
            cookie: cookie.filter(|c| !c.trim().is_empty()),
        }
    }

    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn cookie(&self) -> Option<&str> {
        self.cookie.as_deref()
    }
}

/// The classifieds REST API.
pub trait Backend: Send + Sync {
    /// `GET /users/me`
    fn current_user(&self, creds: &Credentials) -> Result<User, ApiError>;
    /// `GET /ads/public`
    fn public_ads(&self, creds: &Credentials) -> Result<Vec<Ad>, ApiError>;
    /// `GET /ads/my`
    fn my_ads(&self, creds: &Credentials) -> Result<Vec<Ad>, ApiError>;
    /// `GET /ads/my/{id}`
    fn my_ad(&self, creds: &Credentials, id: i64) -> Result<Ad, ApiError>;
    /// `POST /ads`
    fn create_ad(&self, creds: &Credentials, ad: &NewAd) -> Result<(), ApiError>;
    /// `PATCH /ads/{id}`
    fn update_ad(&self, creds: &Credentials, id: i64, edit: &AdEdit) -> Result<(), ApiError>;
    /// `GET /categories`
    fn categories(&self, creds: &Credentials) -> Result<Vec<Category>, ApiError>;
    /// `GET /locations/countries`
    fn countries(&self, creds: &Credentials) -> Result<Vec<Country>, ApiError>;
    /// `POST /auth/logout`, returning the `Set-Cookie` values to relay.
    fn logout(&self, creds: &Credentials) -> Result<Vec<String>, ApiError>;
}
