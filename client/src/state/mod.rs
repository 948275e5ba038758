//! Page state modules.
//!
//! DESIGN
//! ======
//! State types are plain data with no browser dependencies so they can be
//! unit tested natively. Pages wrap them in `RwSignal`s and provide them
//! through context.

pub mod gallery;
