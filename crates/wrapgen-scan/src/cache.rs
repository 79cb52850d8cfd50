//! Per-package memoization of the extracted model.

use std::sync::Arc;

use dashmap::DashMap;
use tracing::trace;

use crate::commands::{Command, extract_commands};
use crate::exceptions::{ExceptionDescriptor, extract_exceptions};
use crate::scanner::ScannedPackage;

/// Caches commands and exceptions by package name for the life of the cache.
///
/// Entries are never invalidated: a package is scanned at most once per run.
/// Population goes through `DashMap::entry`, which holds the shard lock while
/// the value is computed, so concurrent callers for the same package compute
/// it once and all receive the same `Arc`.
#[derive(Debug, Default)]
pub struct ModelCache {
    commands: DashMap<String, Arc<[Command]>>,
    exceptions: DashMap<String, Arc<[ExceptionDescriptor]>>,
}

impl ModelCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sorted, deduplicated commands of `package`.
    pub fn commands(&self, package: &ScannedPackage) -> Arc<[Command]> {
        let entry = self
            .commands
            .entry(package.package_name.clone())
            .or_insert_with(|| {
                trace!(package = %package.package_name, "extracting commands");
                extract_commands(&package.classes, &package.conventions.command_suffix).into()
            });
        Arc::clone(entry.value())
    }

    /// Deduplicated exceptions of `package`.
    pub fn exceptions(&self, package: &ScannedPackage) -> Arc<[ExceptionDescriptor]> {
        let entry = self
            .exceptions
            .entry(package.package_name.clone())
            .or_insert_with(|| {
                trace!(package = %package.package_name, "extracting exceptions");
                extract_exceptions(
                    &package.classes,
                    &package.conventions.service_exception_suffix,
                )
                .into()
            });
        Arc::clone(entry.value())
    }

    /// Whether both models of `package_name` are cached.
    pub fn contains(&self, package_name: &str) -> bool {
        self.commands.contains_key(package_name) && self.exceptions.contains_key(package_name)
    }

    /// Number of packages with cached commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::declarations::{ClassDecl, InterfaceDecl};
    use crate::scanner::Conventions;

    fn package(name: &str, command: &str) -> ScannedPackage {
        package_with(name, command, "BoomException")
    }

    fn package_with(name: &str, command: &str, exception: &str) -> ScannedPackage {
        ScannedPackage::from_declarations(
            name,
            vec![
                ClassDecl::named("FooClient"),
                ClassDecl::named("FooServiceException"),
                ClassDecl::named(command),
                ClassDecl {
                    extends: Some("FooServiceException".into()),
                    ..ClassDecl::named(exception)
                },
            ],
            vec![InterfaceDecl::named("FooClientConfig")],
            Conventions::default(),
        )
        .unwrap()
    }

    #[test]
    fn second_call_returns_the_same_allocation() {
        let cache = ModelCache::new();
        let pkg = package("foo", "DoThingCommand");

        let first = cache.commands(&pkg);
        let second = cache.commands(&pkg);
        assert!(Arc::ptr_eq(&first, &second));

        let first = cache.exceptions(&pkg);
        let second = cache.exceptions(&pkg);
        assert!(Arc::ptr_eq(&first, &second));
        assert!(cache.contains("foo"));
    }

    #[test]
    fn cache_is_keyed_by_package_name() {
        let cache = ModelCache::new();
        let original = package("foo", "DoThingCommand");
        let cached = cache.commands(&original);

        // Same name, different content: the cached value is returned.
        let renamed = package("foo", "OtherThingCommand");
        assert!(Arc::ptr_eq(&cached, &cache.commands(&renamed)));

        // Fresh name: recomputed.
        let fresh = package("bar", "OtherThingCommand");
        let recomputed = cache.commands(&fresh);
        assert!(!Arc::ptr_eq(&cached, &recomputed));
        assert_eq!(recomputed[0].method_name, "other_thing");
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn exceptions_are_keyed_by_package_name() {
        let cache = ModelCache::new();
        let cached = cache.exceptions(&package_with("foo", "DoThingCommand", "BoomException"));

        let renamed = package_with("foo", "DoThingCommand", "BustException");
        assert!(Arc::ptr_eq(&cached, &cache.exceptions(&renamed)));

        let fresh = package_with("bar", "DoThingCommand", "BustException");
        let recomputed = cache.exceptions(&fresh);
        assert!(!Arc::ptr_eq(&cached, &recomputed));
        assert_eq!(recomputed.len(), 1);
        assert_eq!(recomputed[0].class_name, "BustException");
        assert_eq!(cached[0].class_name, "BoomException");
    }
}
