// src/models/guide.rs
// DOCUMENTATION: Tour guide records
// PURPOSE: Stored shape plus create/update DTOs for the guides collection

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::db::Entity;

pub const GUIDE_AVATAR_PLACEHOLDER: &str = "/placeholder.svg";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityStatus {
    #[default]
    Active,
    Inactive,
}

impl ActivityStatus {
    pub fn toggled(self) -> Self {
        match self {
            ActivityStatus::Active => ActivityStatus::Inactive,
            ActivityStatus::Inactive => ActivityStatus::Active,
        }
    }
}

/// A tour-guide professional
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Guide {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,

    /// Region or theme the guide covers
    pub specialty: String,

    /// Years of experience
    pub experience: u32,

    pub rating: f64,

    /// Number of reviews behind the rating
    pub reviews: u32,

    /// Daily price in GNF
    pub price: f64,

    pub languages: Vec<String>,
    pub services: Vec<String>,
    pub description: String,
    pub avatar: String,
    pub status: ActivityStatus,
    pub certifications: Vec<String>,
    pub availability: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Entity for Guide {
    const COLLECTION: &'static str = "guides";
}

/// Request DTO for creating a new guide
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateGuideRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: String,

    #[validate(email)]
    pub email: String,

    #[serde(default)]
    pub phone: String,

    #[validate(length(min = 1, max = 255))]
    pub specialty: String,

    #[serde(default)]
    pub experience: u32,

    #[serde(default)]
    pub languages: Vec<String>,

    #[serde(default)]
    pub services: Vec<String>,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub price: f64,

    #[serde(default)]
    pub certifications: Vec<String>,

    #[serde(default)]
    pub availability: String,
}

/// Request DTO for updating an existing guide
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateGuideRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(email)]
    pub email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 255))]
    pub specialty: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0.0, max = 5.0))]
    pub rating: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub languages: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub services: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ActivityStatus>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub certifications: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability: Option<String>,
}
