// src/services/mod.rs
// DOCUMENTATION: Services module organization
// PURPOSE: Re-export service components

pub mod accommodation_service;
pub mod auth_service;
pub mod guide_service;
pub mod identity_client;
pub mod map_service;
pub mod metrics_source;
pub mod search;
pub mod session_store;
pub mod site_service;
pub mod stats_service;
pub mod subscription_service;
pub mod user_service;

pub use accommodation_service::*;
pub use auth_service::*;
pub use guide_service::*;
pub use identity_client::*;
pub use map_service::*;
pub use metrics_source::*;
pub use session_store::*;
pub use site_service::*;
pub use stats_service::*;
pub use subscription_service::*;
pub use user_service::*;
