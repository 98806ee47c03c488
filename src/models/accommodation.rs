// src/models/accommodation.rs
// DOCUMENTATION: Lodging records
// PURPOSE: Stored shape plus create/update DTOs for the accommodations collection

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::Coordinates;
use crate::db::Entity;

pub const ACCOMMODATION_IMAGE_PLACEHOLDER: &str = "/placeholder.svg?height=200&width=300";

/// Nested contact block
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactInfo {
    pub phone: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub whatsapp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
}

/// A lodging, loosely associated with a site through `site_id`
/// DOCUMENTATION: `site_id` is never checked against the sites collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Accommodation {
    pub id: String,
    pub name: String,

    /// Hôtel, Auberge, Villa, ...
    #[serde(rename = "type")]
    pub kind: String,

    pub location: String,
    pub address: String,
    pub rating: f64,
    pub price_per_night: f64,
    pub capacity: u32,
    pub amenities: Vec<String>,
    pub description: String,
    pub images: Vec<String>,

    /// Whether the lodging currently takes bookings
    pub availability: bool,

    pub owner: String,
    pub contact: String,

    /// YYYY-MM-DD
    pub created_date: String,

    pub site_id: String,
    pub contact_info: ContactInfo,
    pub coordinates: Coordinates,
    pub check_in_time: String,
    pub check_out_time: String,
    pub cancellation_policy: String,
    pub languages: Vec<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Default for Accommodation {
    fn default() -> Self {
        Accommodation {
            id: String::new(),
            name: String::new(),
            kind: String::new(),
            location: String::new(),
            address: String::new(),
            rating: 0.0,
            price_per_night: 0.0,
            capacity: 1,
            amenities: Vec::new(),
            description: String::new(),
            images: Vec::new(),
            availability: true,
            owner: String::new(),
            contact: String::new(),
            created_date: String::new(),
            site_id: String::new(),
            contact_info: ContactInfo::default(),
            coordinates: Coordinates::default(),
            check_in_time: default_check_in(),
            check_out_time: default_check_out(),
            cancellation_policy: String::new(),
            languages: Vec::new(),
            created_at: None,
            updated_at: None,
        }
    }
}

impl Entity for Accommodation {
    const COLLECTION: &'static str = "accommodations";
}

fn default_check_in() -> String {
    "15:00".to_string()
}

fn default_check_out() -> String {
    "11:00".to_string()
}

fn default_capacity() -> u32 {
    1
}

/// Request DTO for creating a new accommodation
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateAccommodationRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: String,

    #[serde(rename = "type")]
    #[validate(length(min = 1, max = 100))]
    pub kind: String,

    #[validate(length(min = 1, max = 255))]
    pub location: String,

    #[serde(default)]
    pub address: String,

    #[serde(default)]
    pub price_per_night: f64,

    #[serde(default = "default_capacity")]
    #[validate(range(min = 1))]
    pub capacity: u32,

    #[serde(default)]
    pub amenities: Vec<String>,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub owner: String,

    #[serde(default)]
    pub contact: String,

    #[serde(default)]
    pub site_id: String,

    #[serde(default)]
    pub contact_info: ContactInfo,

    #[serde(default)]
    pub coordinates: Coordinates,

    #[serde(default = "default_check_in")]
    pub check_in_time: String,

    #[serde(default = "default_check_out")]
    pub check_out_time: String,

    #[serde(default)]
    pub cancellation_policy: String,

    #[serde(default)]
    pub languages: Vec<String>,
}

/// Request DTO for updating an existing accommodation
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAccommodationRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 100))]
    pub kind: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 255))]
    pub location: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0.0, max = 5.0))]
    pub rating: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_per_night: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1))]
    pub capacity: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub amenities: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_info: Option<ContactInfo>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_in_time: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_out_time: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancellation_policy: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub languages: Option<Vec<String>>,
}
