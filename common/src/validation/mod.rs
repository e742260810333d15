pub mod auth;

pub use auth::{AuthField, ValidationError, validate_login, validate_registration};
