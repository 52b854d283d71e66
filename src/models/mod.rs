//! Core data types: symbol parameters, module grid, colors

/// RGB colors for rendering
pub mod color;
/// Module grid and per-module state
pub mod matrix;
/// Version, error correction level, mask pattern and finished symbol
pub mod qr_code;

pub use color::Color;
pub use matrix::{Module, ModuleGrid};
pub use qr_code::{ECLevel, MaskPattern, Symbol, Version};
