//! # hcl-transfer
//!
//! The two nonlinear transfer functions used by the HCL conversion chain.
//!
//! Both are piecewise: a power curve over most of the range with a linear
//! segment near zero that avoids an infinite-slope singularity.
//!
//! | Module | Transfer | Used Between |
//! |--------|----------|--------------|
//! | [`srgb`] | sRGB gamma (IEC 61966-2-1) | linear light <-> display sRGB |
//! | [`lstar`] | CIE L* cube/cube-root | XYZ <-> LAB |
//!
//! # Usage
//!
//! ```rust
//! use hcl_transfer::{lstar, srgb};
//!
//! // Decode a display value to linear light
//! let linear = srgb::eotf(0.5);
//!
//! // CIE forward transfer of a normalized tristimulus value
//! let f = lstar::forward(0.18);
//! ```
//!
//! # Used By
//!
//! - `hcl-color` - Full HCL <-> RGB conversion

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod lstar;
pub mod srgb;

// Re-export common functions
pub use lstar::{forward as lstar_forward, inverse as lstar_inverse};
pub use srgb::{eotf as srgb_eotf, oetf as srgb_oetf};
