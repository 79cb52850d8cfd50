//! The four fragments of a package module, in emission order.

mod client;
mod head;
mod operations;
mod taxonomy;

pub use client::client_wrapper;
pub use head::head;
pub use operations::operations;
pub use taxonomy::{error_taxonomy, operation_errors};

use crate::error::Result;
use crate::ident::{ensure_binding_name, ensure_identifier_name};
use crate::module::ModuleContext;

/// Reject names that cannot be emitted where the fragments place them.
pub(crate) fn validate(cx: &ModuleContext<'_>) -> Result<()> {
    ensure_binding_name(cx.package.client_class_name())?;
    ensure_binding_name(cx.package.exception_base_class_name())?;
    ensure_identifier_name(cx.package.config_interface_name())?;

    for command in cx.commands {
        ensure_identifier_name(&command.method_name)?;
        ensure_binding_name(&command.class_name)?;
        ensure_identifier_name(&command.input_type_name)?;
    }
    for exception in cx.exceptions {
        ensure_identifier_name(&exception.class_name)?;
    }
    Ok(())
}
