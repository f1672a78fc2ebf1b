// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Tests compare exact floats and unwrap fixtures
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::float_cmp))]

//! Follow camera with named targets and per-tick pose smoothing.
//!
//! A [`camera::rig::TargetCamera`] keeps a registry of named follow targets.
//! Each target names an object to track, an offset in that object's local
//! axes, an optional extra rotation, and a stiffness. Once per frame the
//! host calls `update`; the rig works out the ideal pose for the selected
//! target and moves part of the way there.
//!
//! # Key entry points
//!
//! - [`camera::rig::TargetCamera`] - the rig: `add`, `select`, `update`
//! - [`target::TargetSettings`] - builder for a target descriptor
//! - [`camera::transform::SharedTransform`] - a host-owned object to follow
//! - [`options::RigOptions`] - TOML presets for projection and targets
//! - [`solver`] - the stateless ideal-pose and blending math

pub mod camera;
pub mod error;
pub mod options;
pub mod solver;
pub mod target;

pub use camera::rig::TargetCamera;
pub use camera::transform::{SharedTransform, TrackedObject, Transform};
pub use error::RigError;
pub use target::{EulerAngles, EulerOrder, RotationInput, TargetSettings};
