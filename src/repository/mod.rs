pub mod asset_repo;
pub mod maintenance_repo;

pub use asset_repo::AssetRepository;
pub use maintenance_repo::MaintenanceRepository;
