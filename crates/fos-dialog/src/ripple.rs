//! Button ripple handles
//!
//! A ripple marks its surface as upgraded while attached. The visual
//! effect itself belongs to the renderer.

use fos_dom::{DomTree, NodeId};

/// Class present on a surface while a ripple is attached
pub const RIPPLE_UPGRADED: &str = "mdc-ripple-upgraded";

#[derive(Debug, PartialEq, Eq)]
pub struct Ripple {
    surface: NodeId,
    attached: bool,
}

impl Ripple {
    pub fn attach_to(tree: &mut DomTree, surface: NodeId) -> Self {
        let attached = tree.add_class(surface, RIPPLE_UPGRADED).is_ok();
        Self { surface, attached }
    }

    pub fn surface(&self) -> NodeId {
        self.surface
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Detach from the surface. Safe to call more than once.
    pub fn destroy(&mut self, tree: &mut DomTree) {
        if !self.attached {
            return;
        }
        self.attached = false;
        if let Err(err) = tree.remove_class(self.surface, RIPPLE_UPGRADED) {
            tracing::warn!("ripple surface vanished: {}", err);
        }
    }
}
