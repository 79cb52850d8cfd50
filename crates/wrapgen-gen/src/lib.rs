//! TypeScript wrapper generation for SDK client packages
//!
//! Turns the model recovered by `wrapgen-scan` into source text. Each package
//! becomes one module made of four fragments, always in this order:
//!
//! 1. **Head** - generated-code marker and imports
//! 2. **Client wrapper** - an Effect `Context.Tag` around the SDK client and a
//!    `make` function dispatching any operation by key
//! 3. **Error taxonomy** - the package error class, its discriminants and the
//!    declared error union of every operation
//! 4. **Operations** - the operation type map and the dispatch table
//!
//! [`generate_index`] combines the per-package modules into one entry module
//! and [`generate_support`] emits the helper module they share.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use wrapgen_gen::{GenerateOptions, TypeNames, generate};
//! use wrapgen_scan::{Conventions, InMemorySource, ModelCache, Scanner};
//!
//! let source = InMemorySource::new().with_file(
//!     "s3",
//!     "index.d.ts",
//!     r#"
//!         export declare class S3Client {}
//!         export declare class S3ServiceException extends __ServiceException {}
//!         export interface S3ClientConfig {}
//!         export declare class ListBucketsCommand extends ListBucketsCommand_base {}
//!     "#,
//! );
//! let package = Scanner::new(Arc::new(source), Conventions::default()).scan("s3")?;
//! let cache = ModelCache::new();
//! let names = TypeNames::for_package(&package)?;
//!
//! let module = generate(
//!     &package,
//!     &cache.commands(&package),
//!     &cache.exceptions(&package),
//!     &names,
//!     &GenerateOptions::default(),
//! )?;
//!
//! assert_eq!(module.path().to_str(), Some("s3.ts"));
//! assert!(module.render().contains("list_buckets: ListBucketsCommand,"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod aggregate;
pub mod error;
pub mod format;
pub mod fragments;
pub mod ident;
pub mod module;
pub mod support;
pub mod type_names;

pub use aggregate::{INDEX_PATH, PackageSummary, generate_index};
pub use error::{GenError, Result};
pub use format::{IndentStyle, SourceWriter};
pub use fragments::operation_errors;
pub use module::{
    DEFAULT_PACKAGE_PREFIX, Fragment, FragmentKind, GENERATED_MARKER, GenerateOptions,
    GeneratedModule, ModuleContext, generate,
};
pub use support::{SUPPORT_PATH, generate_support};
pub use type_names::TypeNames;
