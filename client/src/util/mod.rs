//! Shared UI helpers.

pub mod pointer;
