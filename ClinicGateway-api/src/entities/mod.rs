// Public entities for the clinic gateway API
// These are the JSON shapes returned to clients

// Patient rows
pub mod patient;

// Provider rows
pub mod provider;

// Error and message bodies
pub mod common;
