//! # hcl-color
//!
//! Color conversion between cylindrical HCL, device sRGB, and hex strings,
//! plus perceptually uniform mixing of multiple colors.
//!
//! HCL is CIELAB expressed in polar coordinates: hue is the angle in the
//! a/b plane, chroma the radius, lightness the L* axis. Conversion to and
//! from device RGB runs through the full chain:
//!
//! ```text
//! HCL <-> LAB <-> XYZ (D65) <-> linear sRGB <-> sRGB <-> hex
//! ```
//!
//! Every step is a pure function; no conversion keeps state between calls.
//! RGB output is clamped to [0, 255], HCL output has hue normalized into
//! [0, 360) and chroma/lightness clamped to [0, 100], each rounded to the
//! nearest integer. Round trips are therefore lossy by up to the rounding
//! step, by design.
//!
//! # Usage
//!
//! ```rust
//! use hcl_color::{mix, Hcl};
//!
//! let teal = Hcl::new(180.0, 40.0, 60.0);
//! let rgb = teal.to_rgb();
//! let hex = teal.to_hex();
//!
//! let back = rgb.to_hcl();
//!
//! // Average two colors in LAB space
//! let blend = mix(&[teal, Hcl::new(300.0, 40.0, 40.0)]);
//! ```
//!
//! # Feature Flags
//!
//! - `serde` - Serialize/Deserialize for [`Hcl`] and [`Rgb`]
//!
//! # Dependencies
//!
//! - [`hcl-math`] - Vec3/Mat3 for the XYZ matrix step
//! - [`hcl-transfer`] - sRGB gamma and CIE L* transfer functions

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod hcl;
mod hex;
mod lab;
pub mod mix;
pub mod rgb;
mod xyz;

pub use error::HexParseError;
pub use hcl::Hcl;
pub use mix::mix;
pub use rgb::Rgb;
