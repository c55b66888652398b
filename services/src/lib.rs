pub mod analytics_service;
pub mod credentials;
pub mod error;
pub mod essay_service;
pub mod policy;
pub mod review_service;
pub mod token;
pub mod user_service;

pub use error::ServiceError;
