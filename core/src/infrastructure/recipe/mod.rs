pub mod static_catalog;

pub use static_catalog::{StaticRecipeCatalog, default_templates};
