//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cookie construction and extraction
//! - Cryptographic utilities (secure randomness, Base64, constant-time compare)

pub mod cookie;
pub mod crypto;
