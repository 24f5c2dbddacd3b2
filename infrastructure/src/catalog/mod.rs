//! Question catalog adapters

#[cfg(feature = "remote-catalog")]
mod http;
mod json_file;
pub mod wire;

#[cfg(feature = "remote-catalog")]
pub use http::HttpCatalogSource;
pub use json_file::JsonFileCatalogSource;
pub use wire::parse_catalog;

use crate::config::CatalogLocation;
use iqtest_application::{CatalogError, CatalogSource};
use std::sync::Arc;

/// Build the catalog adapter for a configured location
pub fn catalog_source(location: &CatalogLocation) -> Result<Arc<dyn CatalogSource>, CatalogError> {
    match location {
        CatalogLocation::File(path) => Ok(Arc::new(JsonFileCatalogSource::new(path))),
        #[cfg(feature = "remote-catalog")]
        CatalogLocation::Remote(url) => Ok(Arc::new(HttpCatalogSource::new(url.clone())?)),
        #[cfg(not(feature = "remote-catalog"))]
        CatalogLocation::Remote(url) => Err(CatalogError::Unavailable(format!(
            "{}: remote catalogs need the remote-catalog feature",
            url
        ))),
    }
}
