// Clinic Gateway Data
// This crate handles configuration and read access to the clinic database

// Database configuration and connection pool
pub mod database;

// Repository traits and implementations for data access
pub mod repository;

// Row models for the patients and providers tables
pub mod models;
