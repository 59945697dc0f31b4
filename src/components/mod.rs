//! Views shared between pages.
//!
//! - [`HeaderView`] - logo plus the controls a page asks for
//! - [`CatalogGrid`] / [`CatalogCard`] - the home game grid
//! - [`CategoryFilterBar`] - genre buttons above the grid
//! - [`FieldErrors`] - inline validation messages under a form

pub mod hooks;
pub mod ui;

mod catalog;
mod category_bar;
mod field_errors;
mod header;

pub use catalog::*;
pub use category_bar::*;
pub use field_errors::*;
pub use header::*;
