//! The classified difference record and its persisted form.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::datatype::DifferenceDatatype;
use crate::detect;
use crate::error::{ClassifyError, ClassifyResult};

/// One classified discrepancy between a baseline and a target text.
///
/// A difference is either built fresh from two differing spans, in which case
/// its classification and leeway are detected, or rehydrated from a previous
/// run with [`PositionalDifference::from_parts`], in which case they are taken
/// as given. Fields never change after construction.
///
/// The location leeway is how far the start of a later difference of the same
/// datatype may drift and still count as the same difference. If a baseline
/// run saw `65432` against `69999`, the diff starts after the shared `6`; a
/// later run comparing `65432` with `12345` starts one character earlier.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "DifferenceRecord", into = "DifferenceRecord")]
pub struct PositionalDifference {
    baseline_start_position: usize,
    baseline_data: String,
    target_start_position: usize,
    target_data: String,
    classification: DifferenceDatatype,
    location_leeway: usize,
}

impl PositionalDifference {
    /// Classify a pair of differing spans.
    pub fn new(
        baseline_start: usize,
        baseline_data: impl Into<String>,
        target_start: usize,
        target_data: impl Into<String>,
    ) -> Self {
        let baseline_data = baseline_data.into();
        let target_data = target_data.into();
        let (classification, location_leeway) = detect::classify(&baseline_data, &target_data);
        debug!(
            baseline_start,
            target_start,
            %classification,
            location_leeway,
            "classified difference"
        );

        Self {
            baseline_start_position: baseline_start,
            baseline_data,
            target_start_position: target_start,
            target_data,
            classification,
            location_leeway,
        }
    }

    /// Rebuild a previously classified difference without re-running detection.
    pub fn from_parts(
        baseline_start: usize,
        baseline_data: impl Into<String>,
        target_start: usize,
        target_data: impl Into<String>,
        classification: DifferenceDatatype,
        location_leeway: usize,
    ) -> Self {
        Self {
            baseline_start_position: baseline_start,
            baseline_data: baseline_data.into(),
            target_start_position: target_start,
            target_data: target_data.into(),
            classification,
            location_leeway,
        }
    }

    pub fn baseline_start_position(&self) -> usize {
        self.baseline_start_position
    }

    pub fn baseline_data(&self) -> &str {
        &self.baseline_data
    }

    pub fn target_start_position(&self) -> usize {
        self.target_start_position
    }

    pub fn target_data(&self) -> &str {
        &self.target_data
    }

    pub fn classification(&self) -> DifferenceDatatype {
        self.classification
    }

    pub fn location_leeway(&self) -> usize {
        self.location_leeway
    }

    /// Returns `true` if `candidate` is the same kind of difference starting
    /// within this difference's leeway on both sides.
    pub fn tolerates(&self, candidate: &PositionalDifference) -> bool {
        self.classification == candidate.classification
            && self
                .baseline_start_position
                .abs_diff(candidate.baseline_start_position)
                <= self.location_leeway
            && self
                .target_start_position
                .abs_diff(candidate.target_start_position)
                <= self.location_leeway
    }

    /// Serialize to the JSON interchange form.
    pub fn to_json(&self) -> ClassifyResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Rehydrate from the JSON interchange form.
    pub fn from_json(json: &str) -> ClassifyResult<Self> {
        let record: DifferenceRecord = serde_json::from_str(json)?;
        record.try_into()
    }

    /// Print the diagnostic dump to stdout.
    pub fn console_debug(&self) {
        println!("{self}");
    }
}

impl fmt::Display for PositionalDifference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Baseline start: {} | {}",
            self.baseline_start_position, self.baseline_data
        )?;
        writeln!(
            f,
            "Target start: {} | {}",
            self.target_start_position, self.target_data
        )?;
        writeln!(f, "\tDatatype: {}", self.classification)?;
        write!(f, "\tLeeway: {}", self.location_leeway)
    }
}

/// Serialize a list of differences as a JSON array.
pub fn differences_to_json(differences: &[PositionalDifference]) -> ClassifyResult<String> {
    Ok(serde_json::to_string_pretty(differences)?)
}

/// Rehydrate a JSON array of differences.
///
/// Decoding goes through the persisted record directly so that an unknown
/// classification surfaces as [`ClassifyError::UnknownClassification`].
pub fn differences_from_json(json: &str) -> ClassifyResult<Vec<PositionalDifference>> {
    let records: Vec<DifferenceRecord> = serde_json::from_str(json)?;
    records
        .into_iter()
        .map(PositionalDifference::try_from)
        .collect()
}

/// Persisted shape of a [`PositionalDifference`]. The classification travels
/// by name only.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct DifferenceRecord {
    baseline_start_position: usize,
    baseline_data: String,
    target_start_position: usize,
    target_data: String,
    location_leeway: usize,
    classification_string: String,
}

impl From<PositionalDifference> for DifferenceRecord {
    fn from(diff: PositionalDifference) -> Self {
        Self {
            baseline_start_position: diff.baseline_start_position,
            baseline_data: diff.baseline_data,
            target_start_position: diff.target_start_position,
            target_data: diff.target_data,
            location_leeway: diff.location_leeway,
            classification_string: diff.classification.to_string(),
        }
    }
}

impl TryFrom<DifferenceRecord> for PositionalDifference {
    type Error = ClassifyError;

    fn try_from(record: DifferenceRecord) -> Result<Self, Self::Error> {
        let classification = record.classification_string.parse()?;
        Ok(Self::from_parts(
            record.baseline_start_position,
            record.baseline_data,
            record.target_start_position,
            record.target_data,
            classification,
            record.location_leeway,
        ))
    }
}
