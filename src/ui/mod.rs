//! # UI Module
//!
//! User interface components and styling for the portfolio application.
//!
//! ## Organization
//! - `panels`: one view function per tab panel
//! - `styles`: shared widget styling utilities
//! - `theme`: light/dark color palette

pub mod panels;
pub mod styles;
pub mod theme;
