// src/db/mod.rs
// DOCUMENTATION: Database module organization
// PURPOSE: Re-export database components

pub mod document_store;
pub mod memory_store;
pub mod pg_store;
pub mod repository;

pub use document_store::*;
pub use memory_store::*;
pub use pg_store::*;
pub use repository::*;
