//! In-memory regression model: fitted scaler plus linear coefficients.
//!
//! A [`PremiumModel`] is built from a validated artifact and is immutable
//! thereafter. Scoring applies the fitted min-max scaler to its columns and
//! takes a dot product with the coefficients; it never mutates the model, so
//! a model can be shared read-only across callers.

use ndarray::Array1;

use crate::artifact::{ArtifactError, ModelParams, PremiumArtifact, ScalerParams};
use crate::encode::FeatureVector;
use crate::schema::EncodingSchema;

// =============================================================================
// Errors
// =============================================================================

/// Failure inside the scoring routine itself.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScoringError {
    #[error("feature vector has {got} columns, model expects {expected}")]
    WidthMismatch { got: usize, expected: usize },

    #[error("model produced a non-finite score")]
    NonFinite,
}

// =============================================================================
// Scaler
// =============================================================================

/// Fitted min-max scaler over a subset of feature columns.
#[derive(Debug, Clone, PartialEq)]
pub struct MinMaxScaler {
    columns: Vec<usize>,
    min: Vec<f32>,
    inv_range: Vec<f32>,
}

impl MinMaxScaler {
    /// Build from validated artifact parameters.
    fn from_params(params: &ScalerParams) -> Self {
        let inv_range = params
            .min
            .iter()
            .zip(&params.max)
            .map(|(min, max)| 1.0 / (max - min))
            .collect();
        Self {
            columns: params.columns.clone(),
            min: params.min.clone(),
            inv_range,
        }
    }

    /// Scale the listed columns in place: `x' = (x - min) / (max - min)`.
    pub fn transform(&self, features: &mut Array1<f32>) {
        for (i, &column) in self.columns.iter().enumerate() {
            features[column] = (features[column] - self.min[i]) * self.inv_range[i];
        }
    }

    /// Columns this scaler touches.
    pub fn columns(&self) -> &[usize] {
        &self.columns
    }
}

// =============================================================================
// Model
// =============================================================================

/// Loaded, immutable premium regression model.
#[derive(Debug, Clone)]
pub struct PremiumModel {
    scaler: MinMaxScaler,
    coefficients: Array1<f32>,
    intercept: f32,
}

impl PremiumModel {
    /// Build a model from an artifact, validating it against the schema.
    pub fn from_artifact(
        artifact: &PremiumArtifact,
        schema: &EncodingSchema,
    ) -> Result<Self, ArtifactError> {
        artifact.validate(schema)?;

        let ModelParams::Linear {
            coefficients,
            intercept,
        } = &artifact.model;

        Ok(Self {
            scaler: MinMaxScaler::from_params(&artifact.scaler),
            coefficients: Array1::from_vec(coefficients.clone()),
            intercept: *intercept,
        })
    }

    /// Number of feature columns the model expects.
    #[inline]
    pub fn num_features(&self) -> usize {
        self.coefficients.len()
    }

    /// Score a feature vector: scale, then `coefficients · x + intercept`.
    pub fn score(&self, features: &FeatureVector) -> Result<f32, ScoringError> {
        if features.len() != self.num_features() {
            return Err(ScoringError::WidthMismatch {
                got: features.len(),
                expected: self.num_features(),
            });
        }

        let mut scaled = features.values().clone();
        self.scaler.transform(&mut scaled);

        let score = self.coefficients.dot(&scaled) + self.intercept;
        if !score.is_finite() {
            return Err(ScoringError::NonFinite);
        }
        Ok(score)
    }
}
