//! Shared helpers used across screens and notifications.

pub mod render_utils;
pub mod text;

pub use text::{mask, truncate_start_with_ellipsis, truncate_with_ellipsis};
