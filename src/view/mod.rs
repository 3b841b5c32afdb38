//! # Word-Length View
//!
//! The public entry point: one view owns one length index and fills it from a
//! single word source.
//!
//! ## Acquisition modes
//!
//! - **Words**: an in-memory list, indexed during construction
//! - **Deferred**: a future resolving to a list, indexed when it resolves
//! - **Producer**: a caller function that pushes words through a `WordSink`,
//!   optionally through a transform
//!
//! All three feed the same `Readiness` signal. Queries never block; before
//! readiness resolves they see whatever has been inserted so far.

mod errors;
mod readiness;
mod source;
#[allow(clippy::module_inception)]
mod view;

pub use errors::{AcquisitionError, AcquisitionResult, BoxError};
pub use readiness::{PopulationState, Readiness};
pub use source::{Producer, Transform, WordSink, WordSource};
pub use view::WordLengthView;
