/// Fireside shared library.
///
/// Content models, SQLite repositories, and the page-composition helpers
/// used by the API server and the channel sync tool.
pub mod assets;
pub mod dates;
pub mod db;
pub mod errors;
pub mod models;
pub mod ordering;
pub mod pages;
pub mod slug;
pub mod validate;

pub use errors::{CmsError, CmsResult};
