pub mod asset;
pub mod health;
pub mod maintenance;
