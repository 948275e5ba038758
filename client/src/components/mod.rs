//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the polygon editor and its menus. Editing semantics live
//! in the `editor` crate; these modules only bind DOM events and draw the
//! engine's view model.

pub mod clip_path_builder;
pub mod menu;
