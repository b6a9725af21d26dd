mod catalog_browse;
mod status_get;

pub use self::{catalog_browse::catalog_browse, status_get::status_get};
