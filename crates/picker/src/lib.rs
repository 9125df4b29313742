//! Cascading area → country → node picker.
//!
//! The controller ([`NodePicker`]) talks to the page through [`PickerView`]
//! and to the server through [`Transport`], so the browser binding only has
//! to provide those two.

pub mod api;
pub mod area;
pub mod cascade;
pub mod config;
pub mod error;
pub mod generation;
pub mod option;
pub mod submit;
pub mod view;

#[cfg(test)]
mod test_support;

pub use api::*;
pub use area::*;
pub use cascade::*;
pub use config::*;
pub use error::*;
pub use generation::*;
pub use option::*;
pub use submit::*;
pub use view::*;
