//! Tests for CatalogService.

mod academic;
mod read;
mod taxonomy;
