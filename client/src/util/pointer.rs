//! Mouse event mapping for the editor and the gallery preview.

#[cfg(test)]
#[path = "pointer_test.rs"]
mod pointer_test;

use editor::camera::Offset;

/// Parse a `data-vertex` attribute value into a vertex index.
pub fn vertex_index(attr: Option<&str>) -> Option<usize> {
    attr.and_then(|raw| raw.trim().parse().ok())
}

/// Map a client-space position into the unscaled local space of an element
/// whose bounding box starts at `origin` and is scaled by `zoom`.
pub fn to_local(client: Offset, origin: Offset, zoom: f64) -> Offset {
    let zoom = if zoom.is_finite() && zoom > 0.0 { zoom } else { 1.0 };
    Offset::new((client.x - origin.x) / zoom, (client.y - origin.y) / zoom)
}

/// Map a client-space position to absolute-positioning coordinates inside an
/// unscaled scroll container whose box starts at `origin` and is scrolled by
/// `scroll`.
pub fn to_anchor(client: Offset, origin: Offset, scroll: Offset) -> Offset {
    Offset::new(client.x - origin.x + scroll.x, client.y - origin.y + scroll.y)
}

#[cfg(feature = "csr")]
mod dom {
    use editor::camera::Offset;
    use editor::input::PointerTarget;
    use editor::render::HANDLE_INDEX_ATTR;
    use wasm_bindgen::JsCast;

    use super::{to_anchor, to_local, vertex_index};

    /// What the event landed on: a vertex handle or the canvas.
    pub fn pointer_target(ev: &leptos::ev::MouseEvent) -> PointerTarget {
        let index = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
            .and_then(|el| el.closest(&format!("[{HANDLE_INDEX_ATTR}]")).ok().flatten())
            .and_then(|el| vertex_index(el.get_attribute(HANDLE_INDEX_ATTR).as_deref()));
        index.map_or(PointerTarget::Canvas, PointerTarget::Handle)
    }

    pub fn client_point(ev: &leptos::ev::MouseEvent) -> Offset {
        Offset::new(f64::from(ev.client_x()), f64::from(ev.client_y()))
    }

    pub fn movement(ev: &leptos::ev::MouseEvent) -> Offset {
        Offset::new(f64::from(ev.movement_x()), f64::from(ev.movement_y()))
    }

    /// Event position in `element`'s unscaled local pixels.
    pub fn local_point(ev: &leptos::ev::MouseEvent, element: &web_sys::Element, zoom: f64) -> Offset {
        let rect = element.get_bounding_client_rect();
        to_local(client_point(ev), Offset::new(rect.left(), rect.top()), zoom)
    }

    /// Event position as an anchor for content absolutely positioned inside
    /// the scrollable `element`.
    pub fn anchor_point(ev: &leptos::ev::MouseEvent, element: &web_sys::Element) -> Offset {
        let rect = element.get_bounding_client_rect();
        let scroll = Offset::new(f64::from(element.scroll_left()), f64::from(element.scroll_top()));
        to_anchor(client_point(ev), Offset::new(rect.left(), rect.top()), scroll)
    }
}

#[cfg(feature = "csr")]
pub use dom::{anchor_point, client_point, local_point, movement, pointer_target};
