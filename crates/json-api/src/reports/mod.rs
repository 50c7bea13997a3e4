//! Reports

mod errors;
mod export;
mod handlers;

pub(crate) use handlers::*;
