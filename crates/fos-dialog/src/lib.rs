//! fOS Dialog
//!
//! Modal dialog component for fOS documents.
//!
//! A `Dialog` attaches to `.mdc-dialog` markup, keeps focus inside the
//! dialog while it is open, closes on Escape, scrim clicks and action
//! buttons, stacks its buttons when they wrap and reports every transition
//! as `MDCDialog:*` events on the root.
//!
//! # Example
//!
//! ```rust,ignore
//! use fos_dialog::Dialog;
//!
//! let dialog = Dialog::attach_to(&document, root)?;
//! dialog.open();
//! dialog.close(Some("accept"));
//! ```

pub mod adapter;
pub mod buttons;
pub mod component;
pub mod config;
pub mod constants;
pub mod error;
pub mod focus_scope;
pub mod foundation;
pub mod interaction;
pub mod ripple;

pub use adapter::{action_detail, DialogAdapter, DialogElements, DomDialogAdapter};
pub use buttons::{are_tops_misaligned, ButtonRegistry, MISALIGNMENT_TOLERANCE_PX};
pub use component::{Dialog, LifecycleState};
pub use config::{DialogConfig, DialogOptions};
pub use error::{DialogError, DialogResult};
pub use focus_scope::{create_focus_trap, dialog_trap_options, FocusTrapFactory};
pub use foundation::DialogFoundation;
pub use interaction::{action_from_target, target_matches};
pub use ripple::Ripple;
