//! Declaration scanning for SDK client packages.
//!
//! This crate reads the TypeScript declaration files of a client package and
//! recovers the conventional shape every package in the family shares: one
//! client class, one service exception base class, one client configuration
//! interface, and many command classes.
//!
//! # Pipeline
//!
//! - [`parser`] turns a single `.d.ts` file into a [`DeclarationFile`] using OXC.
//! - [`source`] locates the declaration files of a package ([`NodeModulesSource`])
//!   or serves them from memory ([`InMemorySource`]).
//! - [`scanner`] collects every declaration of a package and locates the anchors.
//! - [`commands`] and [`exceptions`] derive the operation and exception model.
//! - [`cache`] memoizes both per package name.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use wrapgen_scan::{Conventions, InMemorySource, ModelCache, Scanner};
//!
//! let source = InMemorySource::new().with_file(
//!     "s3",
//!     "dist-types/index.d.ts",
//!     r#"
//!         export declare class S3Client {}
//!         export declare class S3ServiceException extends __ServiceException {}
//!         export interface S3ClientConfig {}
//!         /** @throws {@link NoSuchKey} (client fault) */
//!         export declare class GetObjectCommand extends GetObjectCommand_base {}
//!         export declare class NoSuchKey extends S3ServiceException {
//!             readonly name: "NoSuchKey";
//!         }
//!     "#,
//! );
//!
//! let scanner = Scanner::new(Arc::new(source), Conventions::default());
//! let package = scanner.scan("s3")?;
//! let cache = ModelCache::new();
//!
//! let commands = cache.commands(&package);
//! assert_eq!(commands[0].method_name, "get_object");
//! assert_eq!(commands[0].declared_exception_names, vec!["NoSuchKey"]);
//! # Ok::<(), wrapgen_scan::ScanError>(())
//! ```

pub mod cache;
pub mod commands;
pub mod declarations;
pub mod error;
pub mod exceptions;
pub mod names;
pub mod parser;
pub mod scanner;
pub mod source;

pub use cache::ModelCache;
pub use commands::{Command, extract_commands};
pub use declarations::{ClassDecl, DeclarationFile, InterfaceDecl, PropertyDecl, PropertyType};
pub use error::{Result, ScanError};
pub use exceptions::{ExceptionDescriptor, extract_exceptions};
pub use names::{package_alias, pretty_operation_name, snake_to_pascal, to_proper_case, to_snake_case};
pub use parser::parse_declarations;
pub use scanner::{Conventions, ScannedPackage, Scanner};
pub use source::{DeclarationSource, InMemorySource, NodeModulesSource};
