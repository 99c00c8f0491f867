//! Embedded default stubs
//!
//! A project overrides any of these by placing a file with the same
//! [`TemplateId::file_name`](super::TemplateId::file_name) under its stubs
//! directory.

mod php;
mod views;

pub use php::*;
pub use views::*;
