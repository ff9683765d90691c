use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// ad
//  ├── user            (owner, absent on some feeds)
//  ├── category
//  ├── subcategory     (optional)
//  ├── city
//  │    └── country
//  └── versions[]
//       ├── versionNumber
//       ├── title / description / price
//       └── status (+ rejectionReason)

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ad {
    pub id: i64,
    #[serde(default)]
    pub user: Option<AdOwner>,
    pub category: CategoryRef,
    #[serde(default)]
    pub subcategory: Option<SubcategoryRef>,
    pub city: CityRef,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub versions: Vec<AdVersion>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdVersion {
    pub id: i64,
    pub version_number: u32,
    pub title: String,
    pub description: String,
    pub price: Decimal,
    pub status: ModerationStatus,
    #[serde(default)]
    pub rejection_reason: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl AdVersion {
    /// Rejection reason, only when the version is actually rejected.
    pub fn rejection(&self) -> Option<&str> {
        match self.status {
            ModerationStatus::Rejected => self
                .rejection_reason
                .as_deref()
                .filter(|reason| !reason.trim().is_empty()),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModerationStatus {
    Pending,
    Approved,
    Rejected,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdOwner {
    pub first_name: String,
    pub last_name: String,
}

impl AdOwner {
    pub fn initials(&self) -> String {
        self.first_name
            .chars()
            .take(1)
            .chain(self.last_name.chars().take(1))
            .collect()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CategoryRef {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SubcategoryRef {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CityRef {
    pub id: i64,
    pub name: String,
    pub country: CountryRef,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CountryRef {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub subcategories: Vec<Subcategory>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Subcategory {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Country {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub cities: Vec<City>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct City {
    pub id: i64,
    pub name: String,
}

/// Body of `POST /ads`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAd {
    pub title: String,
    pub description: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub category_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subcategory_id: Option<i64>,
    pub city_id: i64,
}

/// Body of `PATCH /ads/{id}`. Editing content sends the ad back to moderation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdEdit {
    pub title: String,
    pub description: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
}
