//! Search module.
//!
//! Contains the catalog listing query and pagination.

mod query;
mod results;

pub use query::{Listing, ProductQuery};
pub use results::{paginate, Page, Pagination, DEFAULT_PAGE_SIZE};
