//! Polygon clip-path editing engine.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! interactive part of the clip-path builder: translating raw pointer events
//! on an image into polygon edits, converting pixel positions into
//! zoom-independent percentages, deriving the SVG outline and CSS clip-path
//! of a polygon, and patching the dragged vertex directly in the DOM while a
//! drag is in flight. The host UI layer is responsible only for wiring DOM
//! events to the engine and handing committed point lists back down through
//! [`engine::Action::PointsChanged`].
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Browser-free [`engine::Engine`] state machine and its [`engine::Action`]s |
//! | [`polygon`] | Percent-space points, path and clip-path derivation, vertex edits |
//! | [`camera`] | Zoom, image metrics, and pixel-to-percent conversions |
//! | [`input`] | Pointer event types and the gesture state machine |
//! | [`hit`] | Hit-testing of saved regions on the preview image |
//! | [`menu`] | Generic floating context-menu model |
//! | [`render`] | View model for the editor and live-drag DOM patching |
//! | [`geom`] | Rounding and percent helpers |
//! | [`config`] | Editor configuration and validation |
//! | [`consts`] | Shared numeric constants (zoom floor, handle size, etc.) |

pub mod camera;
pub mod config;
pub mod consts;
pub mod engine;
pub mod geom;
pub mod hit;
pub mod input;
pub mod menu;
pub mod polygon;
pub mod render;
