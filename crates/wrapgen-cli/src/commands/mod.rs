//! Command implementations.
//!
//! - [`generate`] - run the pipeline and write the modules
//! - [`schema`] - print the config JSON schema

pub mod generate;
pub mod schema;

pub use generate::execute as generate_execute;
pub use schema::execute as schema_execute;
