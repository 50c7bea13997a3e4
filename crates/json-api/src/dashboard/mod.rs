//! Dashboard

pub(crate) mod handler;
