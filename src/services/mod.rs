pub mod alert_service;
pub mod dashboard_service;
pub mod reconcile_service;
pub mod status_service;
pub mod subscription_service;

pub use alert_service::*;
pub use dashboard_service::*;
pub use reconcile_service::*;
pub use status_service::*;
pub use subscription_service::*;
