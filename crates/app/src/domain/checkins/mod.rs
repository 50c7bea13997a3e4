//! Check-ins

pub mod data;
pub mod errors;
pub mod records;
mod repository;
pub mod service;

pub use errors::CheckInsServiceError;
pub use service::*;
