use crate::app::App;
use crate::backend::models::{Ad, AdEdit, Category, Country, NewAd, User};
use crate::backend::{ApiError, Backend, Credentials};
use crate::config::AppConfig;
use astra::{Body, Request, Response};
use http::Method;
use serde_json::{json, Value};
use std::io::Read;
use std::sync::{Arc, Mutex};

pub const SESSION_COOKIE: &str = "session=abc123";

/// What the fake backend was asked to write.
#[derive(Debug, Default)]
pub struct Calls {
    pub created: Mutex<Vec<NewAd>>,
    pub updated: Mutex<Vec<(i64, AdEdit)>>,
    pub logouts: Mutex<Vec<Credentials>>,
}

/// In-memory stand-in for the REST API.
#[derive(Default)]
pub struct FakeBackend {
    pub user: Option<User>,
    pub public_ads: Vec<Ad>,
    pub my_ads: Vec<Ad>,
    pub categories: Vec<Category>,
    pub countries: Vec<Country>,
    /// Returned by ad listing, lookup and creation when set.
    pub ad_error: Option<ApiError>,
    /// Returned by `PATCH /ads/{id}` only, so the ad itself still loads.
    pub update_error: Option<ApiError>,
    pub options_error: Option<ApiError>,
    pub logout_cookies: Vec<String>,
    pub logout_error: Option<ApiError>,
    pub calls: Arc<Calls>,
}

impl FakeBackend {
    pub fn signed_in() -> Self {
        Self {
            user: Some(user()),
            categories: categories(),
            countries: countries(),
            ..Self::default()
        }
    }

    fn fail_ads(&self) -> Result<(), ApiError> {
        match &self.ad_error {
            Some(e) => Err(e.clone()),
            None => Ok(()),
        }
    }

    fn fail_options(&self) -> Result<(), ApiError> {
        match &self.options_error {
            Some(e) => Err(e.clone()),
            None => Ok(()),
        }
    }
}

impl Backend for FakeBackend {
    fn current_user(&self, creds: &Credentials) -> Result<User, ApiError> {
        match (creds.cookie(), &self.user) {
            (Some(_), Some(user)) => Ok(user.clone()),
            _ => Err(ApiError::Unauthorized),
        }
    }

    fn public_ads(&self, _creds: &Credentials) -> Result<Vec<Ad>, ApiError> {
        self.fail_ads()?;
        Ok(self.public_ads.clone())
    }

    fn my_ads(&self, _creds: &Credentials) -> Result<Vec<Ad>, ApiError> {
        self.fail_ads()?;
        Ok(self.my_ads.clone())
    }

    fn my_ad(&self, _creds: &Credentials, id: i64) -> Result<Ad, ApiError> {
        self.fail_ads()?;
        self.my_ads
            .iter()
            .find(|ad| ad.id == id)
            .cloned()
            .ok_or(ApiError::NotFound)
    }

    fn create_ad(&self, _creds: &Credentials, ad: &NewAd) -> Result<(), ApiError> {
        self.fail_ads()?;
        self.calls.created.lock().unwrap().push(ad.clone());
        Ok(())
    }

    fn update_ad(&self, _creds: &Credentials, id: i64, edit: &AdEdit) -> Result<(), ApiError> {
        if let Some(e) = &self.update_error {
            return Err(e.clone());
        }
        self.calls.updated.lock().unwrap().push((id, edit.clone()));
        Ok(())
    }

    fn categories(&self, _creds: &Credentials) -> Result<Vec<Category>, ApiError> {
        self.fail_options()?;
        Ok(self.categories.clone())
    }

    fn countries(&self, _creds: &Credentials) -> Result<Vec<Country>, ApiError> {
        self.fail_options()?;
        Ok(self.countries.clone())
    }

    fn logout(&self, creds: &Credentials) -> Result<Vec<String>, ApiError> {
        self.calls.logouts.lock().unwrap().push(creds.clone());
        if let Some(e) = &self.logout_error {
            return Err(e.clone());
        }
        Ok(self.logout_cookies.clone())
    }
}

pub fn test_app(backend: FakeBackend) -> App {
    let config = AppConfig::from_lookup(|_| None).expect("default config");
    App::new(config, backend)
}

pub fn user() -> User {
    serde_json::from_value(json!({
        "id": "u-1",
        "firstName": "Ada",
        "lastName": "Lovelace",
        "email": "ada@example.com",
        "isActive": true,
        "role": { "name": "user" }
    }))
    .unwrap()
}

pub fn categories() -> Vec<Category> {
    serde_json::from_value(json!([
        { "id": 1, "name": "Vehicles", "subcategories": [
            { "id": 10, "name": "Cars" },
            { "id": 11, "name": "Bikes" }
        ]},
        { "id": 2, "name": "Furniture", "subcategories": [
            { "id": 20, "name": "Sofas" }
        ]}
    ]))
    .unwrap()
}

pub fn countries() -> Vec<Country> {
    serde_json::from_value(json!([
        { "id": 1, "name": "France", "code": "FR", "cities": [
            { "id": 100, "name": "Lyon" },
            { "id": 101, "name": "Paris" }
        ]},
        { "id": 2, "name": "Spain", "code": "ES", "cities": [
            { "id": 200, "name": "Madrid" }
        ]}
    ]))
    .unwrap()
}

pub fn version(id: i64, number: u32, title: &str, status: &str) -> Value {
    json!({
        "id": id,
        "versionNumber": number,
        "title": title,
        "description": format!("{title} description"),
        "price": "150.00",
        "status": status,
        "rejectionReason": if status == "rejected" { json!("Photos are missing") } else { Value::Null },
        "createdAt": "2025-03-01T09:30:00Z"
    })
}

pub fn ad(id: i64, versions: Vec<Value>) -> Ad {
    serde_json::from_value(json!({
        "id": id,
        "user": { "firstName": "Ada", "lastName": "Lovelace" },
        "category": { "id": 1, "name": "Vehicles" },
        "subcategory": { "id": 10, "name": "Cars" },
        "city": { "id": 100, "name": "Lyon", "country": { "id": 1, "name": "France" } },
        "createdAt": "2025-03-01T09:30:00Z",
        "versions": versions
    }))
    .unwrap()
}

pub fn get(uri: &str, cookie: Option<&str>) -> Request {
    let mut builder = http::Request::builder().method(Method::GET).uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header("Cookie", cookie);
    }
    builder.body(Body::empty()).unwrap()
}

pub fn post_form(uri: &str, form: &str, cookie: Option<&str>) -> Request {
    let mut builder = http::Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("Content-Type", "application/x-www-form-urlencoded");
    if let Some(cookie) = cookie {
        builder = builder.header("Cookie", cookie);
    }
    builder.body(Body::from(form.as_bytes().to_vec())).unwrap()
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}

pub fn location(resp: &Response) -> &str {
    resp.headers()
        .get("Location")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
}
