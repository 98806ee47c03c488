// src/models/site.rs
// DOCUMENTATION: Tourist site records
// PURPOSE: Stored shape plus create/update DTOs for the sites collection

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::Coordinates;
use crate::db::Entity;

/// A tourist attraction
/// DOCUMENTATION: Maps directly to a document of the `sites` collection.
/// Missing fields decode to their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Site {
    /// Store-generated identifier
    pub id: String,

    pub name: String,

    /// Town or region label shown in listings
    pub location: String,

    pub description: String,

    /// Rating from 0 to 5
    pub rating: f64,

    pub image_id: String,

    /// Entry price in GNF
    pub entry_price: f64,

    /// Recommended visit duration in hours
    pub recommended_duration: f64,

    pub best_period: String,

    /// Difficulty from 1 (easy) to 5
    pub difficulty_level: u8,

    pub opening_hours: String,
    pub contact: String,
    pub website: String,
    pub address: String,
    pub services: Vec<String>,

    /// Dashboard category (Nature, Montagne, ...)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// Administrative region id (haute-guinee, ...)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,

    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Default for Site {
    fn default() -> Self {
        Site {
            id: String::new(),
            name: String::new(),
            location: String::new(),
            description: String::new(),
            rating: 0.0,
            image_id: String::new(),
            entry_price: 0.0,
            recommended_duration: 0.0,
            best_period: String::new(),
            difficulty_level: 1,
            opening_hours: String::new(),
            contact: String::new(),
            website: String::new(),
            address: String::new(),
            services: Vec::new(),
            category: None,
            region: None,
            coordinates: None,
            created_at: None,
            updated_at: None,
        }
    }
}

impl Entity for Site {
    const COLLECTION: &'static str = "sites";
}

/// Request DTO for creating a new site
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateSiteRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: String,

    #[validate(length(min = 1, max = 255))]
    pub location: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    #[validate(range(min = 0.0, max = 5.0))]
    pub rating: f64,

    #[serde(default)]
    pub image_id: String,

    #[serde(default)]
    pub entry_price: f64,

    #[serde(default)]
    pub recommended_duration: f64,

    #[serde(default)]
    pub best_period: String,

    #[serde(default = "default_difficulty")]
    pub difficulty_level: u8,

    #[serde(default)]
    pub opening_hours: String,

    #[serde(default)]
    pub contact: String,

    #[serde(default)]
    pub website: String,

    #[serde(default)]
    pub address: String,

    #[serde(default)]
    pub services: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
}

fn default_difficulty() -> u8 {
    1
}

/// Request DTO for updating an existing site
/// All fields are optional - only provided fields are updated
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSiteRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 255))]
    pub location: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0.0, max = 5.0))]
    pub rating: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry_price: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommended_duration: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub best_period: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty_level: Option<u8>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub opening_hours: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub services: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
}
