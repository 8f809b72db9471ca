pub mod gate;
pub mod repository;
pub mod route;
pub mod session;
pub mod settings;
