pub mod check_session;
pub mod config;
pub mod login;
pub mod rotate_key;
pub mod validate_key;

pub use check_session::CheckSessionUseCase;
pub use login::{LoginInput, LoginOutput, LoginUseCase};
pub use rotate_key::RotateApiKeyUseCase;
pub use validate_key::{ApiKeyValidation, InvalidKeyReason, ValidateApiKeyUseCase};
