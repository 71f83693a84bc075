//! Feature encoder: raw form fields → fixed-order numeric feature vector.
//!
//! Encoding is a pure function of the input and the schema. The encoder
//! validates every field before writing a single column: unknown fields,
//! missing fields, out-of-range numerics, and out-of-enumeration categoricals
//! are all hard errors, never silent coercions.

use ndarray::Array1;

use crate::input::{RawInput, RawValue};
use crate::schema::{EncodingSchema, FieldKind};

// =============================================================================
// FeatureVector
// =============================================================================

/// Fully numeric, fixed-order model input.
///
/// Width and column order are fixed by the [`EncodingSchema`] the encoder was
/// built with; only the encoder constructs these.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    values: Array1<f32>,
}

impl FeatureVector {
    pub(crate) fn new(values: Array1<f32>) -> Self {
        Self { values }
    }

    /// Number of columns.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the vector has no columns.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Borrow the underlying array.
    #[inline]
    pub fn values(&self) -> &Array1<f32> {
        &self.values
    }

    /// Borrow the columns as a slice.
    pub fn as_slice(&self) -> &[f32] {
        self.values.as_slice().unwrap_or(&[])
    }
}

// =============================================================================
// Errors
// =============================================================================

/// Validation failure while encoding a [`RawInput`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EncodingError {
    #[error("missing required field: {0}")]
    MissingField(String),

    #[error("unknown field: {0}")]
    UnknownField(String),

    #[error("field {field} expects a {expected} value")]
    TypeMismatch {
        field: String,
        expected: &'static str,
    },

    #[error("field {field}: value {value} outside allowed range {min}..={max}")]
    OutOfRange {
        field: String,
        value: i64,
        min: i64,
        max: i64,
    },

    #[error("field {field}: {value:?} is not in the allowed set")]
    UnknownCategory { field: String, value: String },
}

// =============================================================================
// Encoder
// =============================================================================

/// Schema-driven encoder.
#[derive(Debug, Clone)]
pub struct Encoder {
    schema: EncodingSchema,
}

impl Encoder {
    /// Encoder for the current schema version.
    pub fn v1() -> Self {
        Self::new(EncodingSchema::v1())
    }

    /// Encoder for an explicit schema.
    pub fn new(schema: EncodingSchema) -> Self {
        Self { schema }
    }

    /// The schema this encoder writes columns for.
    pub fn schema(&self) -> &EncodingSchema {
        &self.schema
    }

    /// Encode a raw input into a feature vector of exactly
    /// [`EncodingSchema::width`] columns.
    pub fn encode(&self, raw: &RawInput) -> Result<FeatureVector, EncodingError> {
        // Reject fields the schema does not know before touching any value.
        for (name, _) in raw.iter() {
            if self.schema.field(name).is_none() {
                return Err(EncodingError::UnknownField(name.to_string()));
            }
        }

        let mut columns = Vec::with_capacity(self.schema.width());
        for field in self.schema.fields() {
            let value = raw
                .get(field.name)
                .ok_or_else(|| EncodingError::MissingField(field.name.to_string()))?;
            encode_field(field.name, &field.kind, value, &mut columns)?;
        }

        debug_assert_eq!(columns.len(), self.schema.width());
        Ok(FeatureVector::new(Array1::from_vec(columns)))
    }
}

/// Encode one field's value into its column span.
fn encode_field(
    name: &str,
    kind: &FieldKind,
    value: &RawValue,
    columns: &mut Vec<f32>,
) -> Result<(), EncodingError> {
    match kind {
        FieldKind::Numeric { min, max } => {
            let n = expect_int(name, value)?;
            if n < *min || n > *max {
                return Err(EncodingError::OutOfRange {
                    field: name.to_string(),
                    value: n,
                    min: *min,
                    max: *max,
                });
            }
            columns.push(n as f32);
        }

        FieldKind::Ordinal { levels } => {
            let text = expect_text(name, value)?;
            let code = levels
                .iter()
                .find(|(level, _)| *level == text)
                .map(|(_, code)| *code)
                .ok_or_else(|| unknown_category(name, text))?;
            columns.push(code);
        }

        FieldKind::DerivedRisk { scores, max_score } => {
            let text = expect_text(name, value)?;
            let score = scores
                .iter()
                .find(|(variant, _)| *variant == text)
                .map(|(_, score)| *score)
                .ok_or_else(|| unknown_category(name, text))?;
            columns.push(score / max_score);
        }

        FieldKind::OneHot { variants, baseline } => {
            let text = expect_text(name, value)?;
            if !variants.contains(&text) {
                return Err(unknown_category(name, text));
            }
            for variant in variants.iter().filter(|v| *v != baseline) {
                columns.push(if *variant == text { 1.0 } else { 0.0 });
            }
        }
    }
    Ok(())
}

fn expect_int(field: &str, value: &RawValue) -> Result<i64, EncodingError> {
    match value {
        RawValue::Int(n) => Ok(*n),
        RawValue::Text(_) => Err(EncodingError::TypeMismatch {
            field: field.to_string(),
            expected: "numeric",
        }),
    }
}

fn expect_text<'a>(field: &str, value: &'a RawValue) -> Result<&'a str, EncodingError> {
    match value {
        RawValue::Text(s) => Ok(s.as_str()),
        RawValue::Int(_) => Err(EncodingError::TypeMismatch {
            field: field.to_string(),
            expected: "categorical",
        }),
    }
}

fn unknown_category(field: &str, value: &str) -> EncodingError {
    EncodingError::UnknownCategory {
        field: field.to_string(),
        value: value.to_string(),
    }
}
