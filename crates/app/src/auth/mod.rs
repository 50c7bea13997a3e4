//! Admin authentication

mod errors;
mod models;
mod permissions;
mod repository;
mod service;
mod token;

pub use errors::*;
pub use models::*;
pub use permissions::*;
pub use service::*;
pub use token::*;
