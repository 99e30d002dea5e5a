//! Extractor for semicolon-delimited `key value; key value; ...`
//! lines, as produced by simple sensor and telemetry firmware.
//!
//! Provides a field extractor that is designed not to do any extra
//! allocation, like allocating maps or Strings, and do the minimal
//! stuff to locate the requested field in the input data.  Values are
//! returned as plain text; interpreting them (numeric conversion and
//! so on) is up to the caller.
//!
//! This is an example of decoding an attitude/light telemetry line:
//!
//! ```
//! use fieldext::extract;
//!
//! let line = "x 123; y 456; lux 0.50; roll 1.20; yaw 0.30; pitch 0.10; left 0; right 1;";
//!
//! let mut lux = 0.0f64;
//! let mut roll = 0.0f64;
//!
//! if let Some(v) = extract("lux", line) {
//!     lux = v.parse().unwrap();
//! }
//!
//! if let Some(v) = extract("roll", line) {
//!     roll = v.parse().unwrap();
//! }
//!
//! println!("lux={lux} roll={roll}");
//! ```
//!
//! For callers that own a fixed buffer, [extract_into] copies the
//! value into it with truncation and NUL termination instead of
//! borrowing from the line.
mod extract;
mod fields;

pub use crate::extract::{extract, extract_into};
pub use crate::fields::{fields, Fields};
