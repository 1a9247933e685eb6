pub mod asset_service;
pub mod maintenance_service;

/// Column width for asset names and service descriptions, in characters.
pub const MAX_LABEL_CHARS: usize = 255;

pub use asset_service::AssetService;
pub use maintenance_service::MaintenanceService;
