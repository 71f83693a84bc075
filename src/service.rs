//! Prediction service: the single entry point the presentation layer calls.
//!
//! The service owns the loaded model and the matching encoder. It is
//! constructed once per process, is immutable afterwards, and can be shared
//! by reference across threads since nothing is mutated after load.

use std::path::Path;

use log::{debug, info};

use crate::artifact::{ArtifactError, PremiumArtifact};
use crate::encode::{Encoder, EncodingError};
use crate::input::RawInput;
use crate::model::{PremiumModel, ScoringError};
use crate::schema::EncodingSchema;

/// Failure of a single prediction call.
///
/// Artifact failures are not represented here: they surface from
/// [`PremiumService::load`], before a service exists.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PredictError {
    #[error(transparent)]
    Encoding(#[from] EncodingError),

    #[error(transparent)]
    Scoring(#[from] ScoringError),
}

/// Stateless-per-call wrapper around an immutable loaded model.
#[derive(Debug, Clone)]
pub struct PremiumService {
    encoder: Encoder,
    model: PremiumModel,
}

impl PremiumService {
    /// Load the model artifact from disk and build the service.
    ///
    /// Called once at startup; every load failure means the model is
    /// unavailable and is not retried.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ArtifactError> {
        let path = path.as_ref();
        let artifact = PremiumArtifact::load(path)?;
        let service = Self::from_artifact(&artifact)?;
        info!(
            "loaded premium model from {} (schema v{}, {} features)",
            path.display(),
            artifact.schema_version,
            service.model.num_features(),
        );
        Ok(service)
    }

    /// Build the service from an already parsed artifact.
    pub fn from_artifact(artifact: &PremiumArtifact) -> Result<Self, ArtifactError> {
        let schema = EncodingSchema::v1();
        let model = PremiumModel::from_artifact(artifact, &schema)?;
        Ok(Self {
            encoder: Encoder::new(schema),
            model,
        })
    }

    /// The encoder (and through it, the schema) this service validates with.
    pub fn encoder(&self) -> &Encoder {
        &self.encoder
    }

    /// Estimate the premium for one raw input.
    ///
    /// Encodes, scores, and floors the result at zero; a premium is never
    /// negative even for degenerate model parameters.
    pub fn predict(&self, raw: &RawInput) -> Result<f32, PredictError> {
        let features = self.encoder.encode(raw)?;
        let score = self.model.score(&features)?;
        let premium = score.max(0.0);
        debug!("predicted premium {premium:.2}");
        Ok(premium)
    }
}
