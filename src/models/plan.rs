// src/models/plan.rs
// DOCUMENTATION: Subscription plans and per-user subscriptions
// PURPOSE: Fixed plan catalogue joined against the planSubscriptions collection

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::db::Entity;

/// A subscription tier definition
#[derive(Debug, Clone, Serialize)]
pub struct Plan {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,

    /// Monthly price in `currency`
    pub price: u64,

    pub currency: &'static str,
    pub period: &'static str,
    pub color: &'static str,
    pub features: &'static [&'static str],
}

pub const PLANS: [Plan; 2] = [
    Plan {
        id: "basic",
        name: "Plan Standard",
        description: "Accès aux fonctionnalités essentielles pour découvrir la Guinée",
        price: 0,
        currency: "GNF",
        period: "mois",
        color: "#4CAF50",
        features: &[
            "Accès aux sites touristiques",
            "Informations de base",
            "Carte interactive",
            "Support communautaire",
        ],
    },
    Plan {
        id: "premium",
        name: "Plan Premium",
        description: "Expérience complète avec guide personnel et services exclusifs",
        price: 500_000,
        currency: "GNF",
        period: "mois",
        color: "#2196F3",
        features: &[
            "Tout du plan Standard",
            "Guide personnel",
            "Réservations prioritaires",
            "Support 24/7",
            "Accès aux événements exclusifs",
            "Photos HD des sites",
        ],
    },
];

pub fn find_plan(id: &str) -> Option<&'static Plan> {
    PLANS.iter().find(|plan| plan.id == id)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionStatus {
    #[default]
    Active,
    Expired,
    Cancelled,
}

/// A user's enrollment in a plan
/// DOCUMENTATION: `user_id` is not checked against the users collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Subscription {
    pub id: String,
    pub user_id: String,
    pub user_name: String,
    pub user_email: String,
    pub plan_id: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub status: SubscriptionStatus,
    pub auto_renew: bool,
    pub payment_method: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Entity for Subscription {
    const COLLECTION: &'static str = "planSubscriptions";
}

/// Request DTO for enrolling a user in a plan
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateSubscriptionRequest {
    #[validate(length(min = 1))]
    pub user_id: String,

    #[serde(default)]
    pub user_name: String,

    #[validate(email)]
    pub user_email: String,

    #[validate(length(min = 1))]
    pub plan_id: String,

    pub start_date: NaiveDate,
    pub end_date: NaiveDate,

    #[serde(default)]
    pub status: SubscriptionStatus,

    #[serde(default)]
    pub auto_renew: bool,

    #[serde(default)]
    pub payment_method: String,
}

/// Request DTO for updating a subscription
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSubscriptionRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1))]
    pub plan_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<SubscriptionStatus>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_renew: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,
}

/// Per-plan figures for the plans tab
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanStats {
    pub plan_id: &'static str,
    pub name: &'static str,
    pub price: u64,
    pub total_subscriptions: u64,
    pub active_subscriptions: u64,

    /// active_subscriptions x price
    pub monthly_revenue: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_plan() {
        assert_eq!(find_plan("premium").map(|p| p.price), Some(500_000));
        assert!(find_plan("gold").is_none());
    }

    #[test]
    fn test_subscription_decodes_iso_dates() {
        let sub: Subscription = serde_json::from_str(
            r#"{"id":"1","planId":"premium","startDate":"2024-01-15","endDate":"2024-12-15","status":"expired"}"#,
        )
        .unwrap();
        assert_eq!(sub.start_date, NaiveDate::from_ymd_opt(2024, 1, 15));
        assert_eq!(sub.status, SubscriptionStatus::Expired);
        assert!(!sub.auto_renew);
    }
}
