//! Output generation for the AGE-PRO catalog.

pub mod data_module;
pub mod summary;

pub use data_module::{
    DATA_CONSTANT, GENERATED_HEADER, parse_data_module, render_data_module, write_data_module,
};
pub use summary::CatalogSummary;
