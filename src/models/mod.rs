pub mod alert;
pub mod common;
pub mod dashboard;
pub mod subscription;

pub use alert::*;
pub use common::*;
pub use dashboard::*;
pub use subscription::*;
