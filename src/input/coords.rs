//! Coordinate conversion between page space and surface-local space.
//!
//! Centralizes the offset walk and the scale/translate formula so the state
//! machine and the public accessors compute `x`/`y` the same way.

use crate::host::LayoutSource;
use crate::profile_scope;
use crate::types::SurfaceId;

/// Top-left corner of a surface relative to the page.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Offset {
    pub x: f64,
    pub y: f64,
}

/// Scale and translation applied to local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub scale_x: f64,
    pub scale_y: f64,
    pub translate_x: f64,
    pub translate_y: f64,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            scale_x: 1.0,
            scale_y: 1.0,
            translate_x: 0.0,
            translate_y: 0.0,
        }
    }
}

pub struct CoordinateConverter;

impl CoordinateConverter {
    /// Absolute page offset of `surface`.
    ///
    /// Walks the offset-parent chain accumulating offsets and border widths,
    /// then the containing-node chain subtracting scroll offsets up to (not
    /// including) the body. Zero when there is no surface, the id is not an
    /// element, or its style cannot be read.
    pub fn resolve_offset(layout: &dyn LayoutSource, surface: Option<SurfaceId>) -> Offset {
        profile_scope!("resolve_offset");

        let Some(surface) = surface else {
            return Offset::default();
        };
        if !layout.is_element(surface) {
            return Offset::default();
        }
        let Some(style) = layout.box_style(surface) else {
            return Offset::default();
        };

        let mut x = -style.border_left;
        let mut y = -style.border_top;

        let mut current = surface;
        while let Some(offset_parent) = layout.offset_parent(current) {
            let border = layout.box_style(current).unwrap_or_default();
            let (left, top) = layout.offset(current);
            x += left + border.border_left;
            y += top + border.border_top;
            current = offset_parent;
        }

        let mut current = surface;
        while let Some(parent) = layout.parent(current) {
            if layout.is_body(current) {
                break;
            }
            let (scroll_left, scroll_top) = layout.scroll(current);
            x -= scroll_left;
            y -= scroll_top;
            current = parent;
        }

        Offset { x, y }
    }

    /// Convert a page position to surface-local coordinates
    #[inline]
    pub fn to_local(page_x: f64, page_y: f64, offset: Offset, transform: &Transform) -> (f64, f64) {
        (
            (page_x - offset.x) * transform.scale_x + transform.translate_x,
            (page_y - offset.y) * transform.scale_y + transform.translate_y,
        )
    }

    /// Scale a page-space delta (translation does not apply to deltas)
    #[inline]
    pub fn scale_delta(dx: f64, dy: f64, transform: &Transform) -> (f64, f64) {
        (dx * transform.scale_x, dy * transform.scale_y)
    }
}
