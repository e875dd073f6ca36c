#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![warn(clippy::all, clippy::cargo, clippy::nursery, missing_docs)]
#![doc = include_str!("../README.md")]

/// Physical constants used by the field-strength laws.
pub mod constants;
/// Shared numerical aliases and vector helpers.
pub mod math;
/// Field vectors and the electric and magnetic samples built on them.
pub mod fields;
/// Fixed demonstration scenario and its report writer.
pub mod scenario;
/// Error types shared across the crate.
pub mod errors;

/// Common exports for downstream crates.
pub mod prelude;
