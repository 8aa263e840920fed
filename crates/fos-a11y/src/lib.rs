//! fOS Accessibility
//!
//! Focus management for fOS components:
//! - Tab index parsing and tabbable detection
//! - Focus traps scoped to a container

pub mod focus;

pub use focus::{is_tabbable, tabbable_descendants, DomFocusTrap, FocusTrap, FocusTrapOptions, TabIndex};
