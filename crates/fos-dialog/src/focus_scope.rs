//! Focus-Scope Manager
//!
//! Builds the focus trap a dialog activates while open.

use std::rc::Rc;

use fos_a11y::{DomFocusTrap, FocusTrap, FocusTrapOptions};
use fos_dom::{DocumentHandle, NodeId};

/// Creates a focus trap for a container. Lets hosts and tests swap in
/// their own trap implementation.
pub type FocusTrapFactory = Box<dyn Fn(&DocumentHandle, NodeId, FocusTrapOptions) -> Box<dyn FocusTrap>>;

/// Trap options a dialog uses: Escape is left to the dialog's own policy.
pub fn dialog_trap_options(initial_focus: Option<NodeId>) -> FocusTrapOptions {
    FocusTrapOptions {
        initial_focus,
        escape_deactivates: false,
        click_outside_deactivates: true,
    }
}

pub fn default_focus_trap(document: &DocumentHandle, container: NodeId, options: FocusTrapOptions) -> Box<dyn FocusTrap> {
    Box::new(DomFocusTrap::new(Rc::clone(document), container, options))
}

/// Build the trap for `container`, through `factory` when one is given.
pub fn create_focus_trap(
    document: &DocumentHandle,
    container: NodeId,
    factory: Option<&FocusTrapFactory>,
    initial_focus: Option<NodeId>,
) -> Box<dyn FocusTrap> {
    let options = dialog_trap_options(initial_focus);
    match factory {
        Some(factory) => factory(document, container, options),
        None => default_focus_trap(document, container, options),
    }
}
