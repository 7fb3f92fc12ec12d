pub mod jwt;
pub mod lifecycle;
pub mod phone;

pub use jwt::*;
pub use lifecycle::*;
pub use phone::*;
