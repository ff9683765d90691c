// src/domain/validation.rs

use crate::backend::models::{AdEdit, NewAd};
use rust_decimal::Decimal;
use std::collections::{BTreeMap, HashMap};
use std::str::FromStr;

pub const TITLE: &str = "title";
pub const DESCRIPTION: &str = "description";
pub const PRICE: &str = "price";
pub const CATEGORY_ID: &str = "categoryId";
pub const SUBCATEGORY_ID: &str = "subcategoryId";
pub const COUNTRY_ID: &str = "countryId";
pub const CITY_ID: &str = "cityId";

/// Raw ad form input, exactly as the browser sent it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdForm {
    pub title: String,
    pub description: String,
    pub price: String,
    pub category_id: String,
    pub subcategory_id: String,
    pub country_id: String,
    pub city_id: String,
}

impl AdForm {
    pub fn from_fields(fields: &HashMap<String, String>) -> Self {
        let get = |key: &str| fields.get(key).cloned().unwrap_or_default();

        Self {
            title: get(TITLE),
            description: get(DESCRIPTION),
            price: get(PRICE),
            category_id: get(CATEGORY_ID),
            subcategory_id: get(SUBCATEGORY_ID),
            country_id: get(COUNTRY_ID),
            city_id: get(CITY_ID),
        }
    }
}

/// Validation messages keyed by form field name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldErrors(BTreeMap<&'static str, String>);

impl FieldErrors {
    pub fn insert(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

/// Parses a price field. Zero is a valid price.
pub fn parse_price(raw: &str) -> Result<Decimal, &'static str> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err("Price is required");
    }

    // Number-input notation only; `Decimal` would also take digit separators.
    let plain = raw
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | '+' | '-' | 'e' | 'E'));
    if !plain {
        return Err("Price must be a non-negative number");
    }

    match Decimal::from_str(raw) {
        Ok(price) if price >= Decimal::ZERO => Ok(price),
        _ => Err("Price must be a non-negative number"),
    }
}

/// Parses a select value into an id. Empty or garbled values count as missing.
pub fn parse_id(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}

fn required_text(
    errors: &mut FieldErrors,
    field: &'static str,
    raw: &str,
    message: &str,
) -> String {
    if raw.trim().is_empty() {
        errors.insert(field, message);
    }
    raw.to_string()
}

fn required_id(errors: &mut FieldErrors, field: &'static str, raw: &str, message: &str) -> i64 {
    parse_id(raw).unwrap_or_else(|| {
        errors.insert(field, message);
        0
    })
}

/// Validates the content fields shared by create and edit.
fn validate_content(form: &AdForm, errors: &mut FieldErrors) -> (String, String, Decimal) {
    let title = required_text(errors, TITLE, &form.title, "Title is required");
    let description = required_text(
        errors,
        DESCRIPTION,
        &form.description,
        "Description is required",
    );
    let price = parse_price(&form.price).unwrap_or_else(|msg| {
        errors.insert(PRICE, msg);
        Decimal::ZERO
    });

    (title, description, price)
}

pub fn validate_new_ad(form: &AdForm) -> Result<NewAd, FieldErrors> {
    let mut errors = FieldErrors::default();

    let (title, description, price) = validate_content(form, &mut errors);
    let category_id = required_id(
        &mut errors,
        CATEGORY_ID,
        &form.category_id,
        "Category is required",
    );
    // Country is not sent, the city implies it; the form still insists on one.
    required_id(
        &mut errors,
        COUNTRY_ID,
        &form.country_id,
        "Country is required",
    );
    let city_id = required_id(&mut errors, CITY_ID, &form.city_id, "City is required");

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(NewAd {
        title,
        description,
        price,
        category_id,
        subcategory_id: parse_id(&form.subcategory_id),
        city_id,
    })
}

pub fn validate_ad_edit(form: &AdForm) -> Result<AdEdit, FieldErrors> {
    let mut errors = FieldErrors::default();
    let (title, description, price) = validate_content(form, &mut errors);

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(AdEdit {
        title,
        description,
        price,
    })
}
