//! Data model for the AGE-PRO catalog builder.

pub mod catalog;
pub mod record;
pub mod size;

pub use catalog::{DATA_ROOT, HEADER_TOKEN, MIN_FIELDS, MOLECULE_CO, MOLECULE_CO_ALIAS};
pub use record::{Record, filename_from_url, target_dir};
pub use size::SizeMb;
