//! folio-ui - View components and browser helpers for the portfolio page
//!
//! Components are props-based and render from `folio-common` state. The
//! `wasm_utils` and `storage` modules hold the few places that touch the DOM
//! directly.

pub mod components;
pub mod storage;
pub mod wasm_utils;

pub use components::*;
