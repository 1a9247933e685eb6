pub mod app;
pub mod config;
pub mod error;
pub mod handlers;
pub mod identity;
pub mod model;
pub mod pending;
pub mod repository;
pub mod service;
pub mod urgency;
