pub mod alerts;
pub mod subscriptions;

pub use alerts::AlertType;
pub use subscriptions::{FrequencyBand, SubscriptionStatus, Technology};

pub use alerts as alert_entity;
pub use subscriptions as subscription_entity;
