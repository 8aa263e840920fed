//! Dialog errors

use crate::component::LifecycleState;

/// Dialog lifecycle errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DialogError {
    /// Required container element is absent from the root's subtree
    #[error("dialog component requires a {selector} container element")]
    MissingContainer { selector: &'static str },

    /// Lifecycle step called out of order
    #[error("cannot {operation} a dialog in the {state:?} state")]
    InvalidState {
        operation: &'static str,
        state: LifecycleState,
    },
}

pub type DialogResult<T> = Result<T, DialogError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::CONTAINER_SELECTOR;

    #[test]
    fn test_missing_container_message() {
        let err = DialogError::MissingContainer {
            selector: CONTAINER_SELECTOR,
        };
        assert_eq!(
            err.to_string(),
            "dialog component requires a .mdc-dialog__container container element"
        );
    }
}
