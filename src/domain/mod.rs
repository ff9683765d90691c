pub mod cascade;
pub mod format;
pub mod validation;
pub mod version;

pub use cascade::Cascade;
pub use validation::{AdForm, FieldErrors};
pub use version::current_version;
