// src/handlers/mod.rs
// DOCUMENTATION: Handlers module organization
// PURPOSE: Re-export handler components

pub mod accommodations;
pub mod admin;
pub mod auth;
pub mod guides;
pub mod health;
pub mod public;
pub mod sites;
pub mod subscriptions;
pub mod users;

pub use admin::config as admin_config;
pub use auth::config as auth_config;
pub use health::config as health_config;
pub use public::config as public_config;
