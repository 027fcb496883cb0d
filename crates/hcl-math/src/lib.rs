//! # hcl-math
//!
//! Minimal vector and matrix math for color space conversion.
//!
//! Color triplets (RGB, XYZ) travel through the conversion pipeline as
//! [`Vec3`]; the fixed sRGB/XYZ conversion step is a [`Mat3`] multiply.
//! Only the operations the pipeline needs are provided; this is not a
//! general-purpose linear algebra crate.
//!
//! # Usage
//!
//! ```rust
//! use hcl_math::{Mat3, Vec3};
//!
//! let m = Mat3::from_rows([
//!     [0.4124564, 0.3575761, 0.1804375],
//!     [0.2126729, 0.7151522, 0.0721750],
//!     [0.0193339, 0.1191920, 0.9503041],
//! ]);
//! let xyz = m * Vec3::new(1.0, 0.0, 0.0);
//! assert!((xyz.x - 0.4124564).abs() < 1e-6);
//! ```
//!
//! # Used By
//!
//! - `hcl-color` - XYZ <-> linear sRGB conversion

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod mat3;
pub mod vec3;

pub use mat3::Mat3;
pub use vec3::Vec3;
