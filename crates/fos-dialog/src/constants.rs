//! Markup contract: selectors, attributes, event names and CSS classes

// Structure
pub const CONTAINER_SELECTOR: &str = ".mdc-dialog__container";
pub const CONTENT_SELECTOR: &str = ".mdc-dialog__content";
pub const BUTTON_SELECTOR: &str = ".mdc-dialog__button";
pub const DEFAULT_BUTTON_SELECTOR: &str = ".mdc-dialog__button--default";
pub const SCRIM_SELECTOR: &str = ".mdc-dialog__scrim";
/// Targets on which Enter must not press the default button
pub const SUPPRESS_DEFAULT_PRESS_SELECTOR: &str = "textarea, .mdc-menu .mdc-list-item";

/// Marks action-bearing elements and carries the action string
pub const ACTION_ATTRIBUTE: &str = "data-mdc-dialog-action";

// Actions
pub const CLOSE_ACTION: &str = "close";
pub const DESTROY_ACTION: &str = "destroy";

// Events emitted on the root
pub const OPENING_EVENT: &str = "MDCDialog:opening";
pub const OPENED_EVENT: &str = "MDCDialog:opened";
pub const CLOSING_EVENT: &str = "MDCDialog:closing";
pub const CLOSED_EVENT: &str = "MDCDialog:closed";
/// Detail key for the close action
pub const ACTION_DETAIL_KEY: &str = "action";

pub mod css_classes {
    pub const OPEN: &str = "mdc-dialog--open";
    pub const OPENING: &str = "mdc-dialog--opening";
    pub const CLOSING: &str = "mdc-dialog--closing";
    pub const SCROLLABLE: &str = "mdc-dialog--scrollable";
    pub const STACKED: &str = "mdc-dialog--stacked";
    /// Added to `<body>` while any dialog is open
    pub const SCROLL_LOCK: &str = "mdc-dialog-scroll-lock";
}
