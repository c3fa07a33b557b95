//! Core notas library (login gate, grade tracker, navigation, config).

pub mod auth;
pub mod config;
pub mod grades;
pub mod nav;
pub mod notify;
