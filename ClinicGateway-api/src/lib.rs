// ClinicGateway-api lib.rs
//
// Library for the clinic query gateway: router, handlers and the
// public response entities.

// Public modules
pub mod api;
pub mod config;
pub mod entities;
pub mod openapi;

pub use api::{create_application, AppState};
