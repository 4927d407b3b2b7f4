//! Catalog query handlers.
//!
//! - `ListPageHandler` - paginated listing with count-then-scan
//! - `FindOneHandler` - exact lookup by slug
//! - `SampleOneHandler` - uniform random document

mod find_one;
mod list_page;
mod sample_one;

pub use find_one::{FindOneHandler, FindOneQuery};
pub use list_page::{ListPageHandler, ListPageQuery};
pub use sample_one::SampleOneHandler;
