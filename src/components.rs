//! Reusable HTML components for page generation
//!
//! Maud component functions shared by every page type: the document
//! wrapper and layout shell, the top navigation bar, the page list and the
//! footer.

pub mod footer;
pub mod layout;
pub mod page_list;
pub mod top_nav;
