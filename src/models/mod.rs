// src/models/mod.rs
// DOCUMENTATION: Models module organization
// PURPOSE: Re-export model components

pub mod accommodation;
pub mod common;
pub mod guide;
pub mod plan;
pub mod site;
pub mod user;

pub use accommodation::*;
pub use common::*;
pub use guide::*;
pub use plan::*;
pub use site::*;
pub use user::*;
