//! Page generation modules for different view types
//!
//! Each module renders one kind of page (wiki article, generated home
//! page, not-found page) on top of the shared layout components.

pub mod home;
pub mod not_found;
pub mod wiki;
