//! Signal patch helpers.
//!
//! Narrow, fail-fast edits applied to an imported catalog before the
//! identifier assignment runs: renaming a signal's value-type label, or
//! replacing the value-type definition outright. A missing message or
//! signal name is fatal — these patches target known entities, and a
//! miss means the catalog and the patch list have drifted apart.

use crate::error::{CatalogError, CatalogResult};
use crate::model::{NodeInterface, Signal, SignalType};

/// Rename the value-type label of one signal.
pub fn rename_signal_type(
    interface: &mut NodeInterface,
    message_name: &str,
    signal_name: &str,
    new_type_name: &str,
) -> CatalogResult<()> {
    let signal = lookup_signal_mut(interface, message_name, signal_name)?;
    signal.ty_mut().set_name(new_type_name);
    Ok(())
}

/// Replace the value-type definition of one signal outright.
pub fn replace_signal_type(
    interface: &mut NodeInterface,
    message_name: &str,
    signal_name: &str,
    ty: SignalType,
) -> CatalogResult<()> {
    let signal = lookup_signal_mut(interface, message_name, signal_name)?;
    signal.set_ty(ty);
    Ok(())
}

fn lookup_signal_mut<'a>(
    interface: &'a mut NodeInterface,
    message_name: &str,
    signal_name: &str,
) -> CatalogResult<&'a mut Signal> {
    let node_name = interface.name().to_string();
    let message = interface
        .message_mut(message_name)
        .ok_or_else(|| CatalogError::MessageNotFound {
            node: node_name,
            message: message_name.to_string(),
        })?;
    message
        .signal_mut(signal_name)
        .ok_or_else(|| CatalogError::SignalNotFound {
            message: message_name.to_string(),
            signal: signal_name.to_string(),
        })
}
