//! On-disk model artifact format.
//!
//! The artifact is a JSON document produced by the training pipeline and
//! loaded exactly once at startup. It carries the fitted regression
//! parameters, the fitted min-max scaler, and the schema version the model
//! was trained against. Its internals are validated eagerly at load time so
//! that every later prediction runs against known-good parameters.
//!
//! # Format
//!
//! ```json
//! {
//!   "format_version": 1,
//!   "schema_version": 1,
//!   "scaler": { "columns": [0, 2], "min": [18.0, 0.0], "max": [100.0, 200.0] },
//!   "model": { "kind": "linear", "coefficients": [ ... ], "intercept": 4500.0 }
//! }
//! ```

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::schema::EncodingSchema;

// =============================================================================
// Constants
// =============================================================================

/// Current artifact format version.
pub const FORMAT_VERSION: u32 = 1;

// =============================================================================
// Errors
// =============================================================================

/// Failure to load or validate a model artifact.
///
/// Any of these means the model is unavailable: they are produced at startup
/// and are not retried.
#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed artifact JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported artifact format version {found} (expected {expected})")]
    FormatVersion { found: u32, expected: u32 },

    #[error("artifact fitted against schema version {found}, encoder uses {expected}")]
    SchemaVersion { found: u32, expected: u32 },

    #[error("coefficient count {got} does not match schema width {expected}")]
    CoefficientCount { got: usize, expected: usize },

    #[error(
        "scaler arrays have inconsistent lengths: {columns} columns, {min} mins, {max} maxes"
    )]
    ScalerShape {
        columns: usize,
        min: usize,
        max: usize,
    },

    #[error("scaler column {column} out of range for width {width}")]
    ScalerColumn { column: usize, width: usize },

    #[error("scaler column {column} has an empty range (min {min}, max {max})")]
    ScalerRange { column: usize, min: f32, max: f32 },

    #[error("non-finite parameter in artifact: {0}")]
    NonFinite(&'static str),
}

// =============================================================================
// Artifact types
// =============================================================================

/// Fitted min-max scaler parameters.
///
/// Only the listed columns are scaled; all other columns pass through.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScalerParams {
    /// Feature-column indices the scaler applies to.
    pub columns: Vec<usize>,
    /// Fitted minimum per listed column.
    pub min: Vec<f32>,
    /// Fitted maximum per listed column.
    pub max: Vec<f32>,
}

/// Fitted regression parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ModelParams {
    /// Plain linear regression: `y = coefficients · x + intercept`.
    Linear {
        coefficients: Vec<f32>,
        intercept: f32,
    },
}

/// A parsed (not yet validated) premium model artifact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PremiumArtifact {
    pub format_version: u32,
    pub schema_version: u32,
    pub scaler: ScalerParams,
    pub model: ModelParams,
}

impl PremiumArtifact {
    /// Read and parse an artifact from a file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ArtifactError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Parse an artifact from a reader.
    pub fn from_reader(reader: impl Read) -> Result<Self, ArtifactError> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Parse an artifact from an in-memory JSON string.
    pub fn from_json(json: &str) -> Result<Self, ArtifactError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Validate the artifact against the compiled-in schema.
    pub fn validate(&self, schema: &EncodingSchema) -> Result<(), ArtifactError> {
        if self.format_version != FORMAT_VERSION {
            return Err(ArtifactError::FormatVersion {
                found: self.format_version,
                expected: FORMAT_VERSION,
            });
        }
        if self.schema_version != schema.version() {
            return Err(ArtifactError::SchemaVersion {
                found: self.schema_version,
                expected: schema.version(),
            });
        }

        let ModelParams::Linear {
            coefficients,
            intercept,
        } = &self.model;

        if coefficients.len() != schema.width() {
            return Err(ArtifactError::CoefficientCount {
                got: coefficients.len(),
                expected: schema.width(),
            });
        }
        if coefficients.iter().any(|c| !c.is_finite()) {
            return Err(ArtifactError::NonFinite("coefficients"));
        }
        if !intercept.is_finite() {
            return Err(ArtifactError::NonFinite("intercept"));
        }

        self.validate_scaler(schema.width())
    }

    fn validate_scaler(&self, width: usize) -> Result<(), ArtifactError> {
        let scaler = &self.scaler;
        if scaler.min.len() != scaler.columns.len() || scaler.max.len() != scaler.columns.len() {
            return Err(ArtifactError::ScalerShape {
                columns: scaler.columns.len(),
                min: scaler.min.len(),
                max: scaler.max.len(),
            });
        }

        for (i, &column) in scaler.columns.iter().enumerate() {
            if column >= width {
                return Err(ArtifactError::ScalerColumn { column, width });
            }
            let (min, max) = (scaler.min[i], scaler.max[i]);
            if !min.is_finite() || !max.is_finite() {
                return Err(ArtifactError::NonFinite("scaler bounds"));
            }
            if max <= min {
                return Err(ArtifactError::ScalerRange { column, min, max });
            }
        }
        Ok(())
    }
}
