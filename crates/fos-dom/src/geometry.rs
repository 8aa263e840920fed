//! Geometry APIs
//!
//! Offset, client and scroll metrics. Layout writes them, components
//! read them.

/// Element geometry state
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ElementGeometry {
    // Offset properties (relative to offsetParent)
    pub offset_top: f64,
    pub offset_left: f64,
    pub offset_width: f64,
    pub offset_height: f64,

    // Client properties (content + padding, no scrollbar)
    pub client_width: f64,
    pub client_height: f64,

    // Scroll properties
    pub scroll_top: f64,
    pub scroll_width: f64,
    pub scroll_height: f64,
}

impl ElementGeometry {
    /// Content taller than the visible box
    pub fn overflows_vertically(&self) -> bool {
        self.scroll_height > self.client_height
    }
}
