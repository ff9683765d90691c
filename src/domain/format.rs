// src/domain/format.rs

use crate::backend::models::{Ad, ModerationStatus};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// `Jan 5, 2025`
pub fn format_date(at: &DateTime<Utc>) -> String {
    at.format("%b %-d, %Y").to_string()
}

/// `Jan 5, 2025, 09:30 AM`
pub fn format_date_time(at: &DateTime<Utc>) -> String {
    at.format("%b %-d, %Y, %I:%M %p").to_string()
}

pub fn format_price(price: &Decimal) -> String {
    format!("${price}")
}

pub fn status_label(status: ModerationStatus) -> &'static str {
    match status {
        ModerationStatus::Pending => "Pending",
        ModerationStatus::Approved => "Approved",
        ModerationStatus::Rejected => "Rejected",
        ModerationStatus::Unknown => "Unknown",
    }
}

/// `City, Country`
pub fn location(ad: &Ad) -> String {
    format!("{}, {}", ad.city.name, ad.city.country.name)
}

/// `Category` or `Category > Subcategory`
pub fn category_path(ad: &Ad) -> String {
    match &ad.subcategory {
        Some(sub) => format!("{} > {}", ad.category.name, sub.name),
        None => ad.category.name.clone(),
    }
}
