//! Difference classifier for baseline comparison.
//!
//! Given the differing fragments of a baseline and a target text, decides
//! what kind of data the difference is (an integer counter, a decimal, a
//! regenerated GUID, or plain text) and how far its position may drift in a
//! later comparison while still being treated as the same difference.
//!
//! # Key Types
//!
//! - [`PositionalDifference`] -- One classified difference with its leeway
//! - [`DifferenceDatatype`] -- Closed taxonomy of difference kinds
//! - [`ClassifyError`] -- Failure to rehydrate a persisted difference

pub mod datatype;
pub mod detect;
pub mod difference;
pub mod error;

pub use datatype::DifferenceDatatype;
pub use detect::{almost_guid_padding, classify};
pub use difference::{differences_from_json, differences_to_json, PositionalDifference};
pub use error::{ClassifyError, ClassifyResult};
