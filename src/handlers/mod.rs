pub mod alert;
pub mod dashboard;
pub mod subscription;

pub use alert::alert_config;
pub use dashboard::dashboard_config;
pub use subscription::subscription_config;
