//! Versioned feature-encoding schema.
//!
//! The schema is the single source of truth for how raw form fields map onto
//! model columns: which fields exist, what values they admit, and the exact
//! column order the regression model was fitted on. It is data checked into
//! the codebase; the model artifact records the schema version it was fitted
//! against so encoder and artifact cannot drift apart silently.

// =============================================================================
// Version
// =============================================================================

/// Version of the compiled-in encoding schema.
///
/// Bump whenever the field set, an enumeration, an encoding, or the column
/// order changes. Artifacts carry the version they were fitted against.
pub const SCHEMA_VERSION: u32 = 1;

// =============================================================================
// Field names
// =============================================================================

/// Canonical field names, as supplied by the presentation boundary.
pub mod fields {
    pub const AGE: &str = "Age";
    pub const DEPENDANTS: &str = "Number of Dependants";
    pub const INCOME: &str = "Income in Lakhs";
    pub const INSURANCE_PLAN: &str = "Insurance Plan";
    pub const GENETICAL_RISK: &str = "Genetical Risk";
    pub const MEDICAL_HISTORY: &str = "Medical History";
    pub const GENDER: &str = "Gender";
    pub const REGION: &str = "Region";
    pub const MARITAL_STATUS: &str = "Marital Status";
    pub const BMI_CATEGORY: &str = "BMI Category";
    pub const SMOKING_STATUS: &str = "Smoking Status";
    pub const EMPLOYMENT_STATUS: &str = "Employment Status";
}

// =============================================================================
// Field specification
// =============================================================================

/// How a single raw field is validated and encoded.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    /// Bounded integer passed through as a single column.
    Numeric { min: i64, max: i64 },

    /// Categorical field mapped to a single ordinal code.
    Ordinal { levels: &'static [(&'static str, f32)] },

    /// Categorical field expanded to one column per non-baseline variant.
    ///
    /// The baseline variant encodes as all-zeros (dropped column), matching
    /// how the training pipeline dummy-encoded with the first level removed.
    OneHot {
        variants: &'static [&'static str],
        baseline: &'static str,
    },

    /// Categorical field collapsed to a single derived risk column.
    ///
    /// Each variant carries a raw risk score; the encoded value is the score
    /// divided by `max_score`, giving a value in `[0, 1]`.
    DerivedRisk {
        scores: &'static [(&'static str, f32)],
        max_score: f32,
    },
}

impl FieldKind {
    /// Number of feature columns this field occupies.
    pub fn num_columns(&self) -> usize {
        match self {
            FieldKind::Numeric { .. } => 1,
            FieldKind::Ordinal { .. } => 1,
            FieldKind::DerivedRisk { .. } => 1,
            FieldKind::OneHot { variants, .. } => variants.len() - 1,
        }
    }

    /// Whether `value` belongs to this field's enumeration.
    ///
    /// Always false for numeric fields, which carry no enumeration.
    pub fn contains_variant(&self, value: &str) -> bool {
        match self {
            FieldKind::Numeric { .. } => false,
            FieldKind::Ordinal { levels } => levels.iter().any(|(name, _)| *name == value),
            FieldKind::OneHot { variants, .. } => variants.contains(&value),
            FieldKind::DerivedRisk { scores, .. } => {
                scores.iter().any(|(name, _)| *name == value)
            }
        }
    }
}

/// A single field in the schema: its canonical name and encoding.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
}

// =============================================================================
// Schema
// =============================================================================

/// Ordered field layout for one schema version.
///
/// Field order fixes column order: columns are assigned by walking the fields
/// in declaration order and expanding one-hot fields into their non-baseline
/// variants.
#[derive(Debug, Clone, PartialEq)]
pub struct EncodingSchema {
    version: u32,
    fields: Vec<FieldSpec>,
    width: usize,
}

impl EncodingSchema {
    /// Schema version 1: the layout the shipped regression model was fit on.
    pub fn v1() -> Self {
        let fields = vec![
            FieldSpec {
                name: fields::AGE,
                kind: FieldKind::Numeric { min: 18, max: 100 },
            },
            FieldSpec {
                name: fields::DEPENDANTS,
                kind: FieldKind::Numeric { min: 0, max: 20 },
            },
            FieldSpec {
                name: fields::INCOME,
                kind: FieldKind::Numeric { min: 0, max: 200 },
            },
            FieldSpec {
                name: fields::INSURANCE_PLAN,
                kind: FieldKind::Ordinal {
                    levels: &[("Bronze", 1.0), ("Silver", 2.0), ("Gold", 3.0)],
                },
            },
            FieldSpec {
                name: fields::GENETICAL_RISK,
                kind: FieldKind::Numeric { min: 0, max: 5 },
            },
            FieldSpec {
                name: fields::MEDICAL_HISTORY,
                kind: FieldKind::DerivedRisk {
                    scores: MEDICAL_RISK_SCORES,
                    max_score: MAX_MEDICAL_RISK,
                },
            },
            FieldSpec {
                name: fields::GENDER,
                kind: FieldKind::OneHot {
                    variants: &["Female", "Male"],
                    baseline: "Female",
                },
            },
            FieldSpec {
                name: fields::REGION,
                kind: FieldKind::OneHot {
                    variants: &["Northeast", "Northwest", "Southeast", "Southwest"],
                    baseline: "Northeast",
                },
            },
            FieldSpec {
                name: fields::MARITAL_STATUS,
                kind: FieldKind::OneHot {
                    variants: &["Married", "Unmarried"],
                    baseline: "Married",
                },
            },
            FieldSpec {
                name: fields::BMI_CATEGORY,
                kind: FieldKind::OneHot {
                    variants: &["Normal", "Obesity", "Overweight", "Underweight"],
                    baseline: "Normal",
                },
            },
            FieldSpec {
                name: fields::SMOKING_STATUS,
                kind: FieldKind::OneHot {
                    variants: &["No Smoking", "Occasional", "Regular"],
                    baseline: "No Smoking",
                },
            },
            FieldSpec {
                name: fields::EMPLOYMENT_STATUS,
                kind: FieldKind::OneHot {
                    variants: &["Freelancer", "Salaried", "Self-Employed"],
                    baseline: "Freelancer",
                },
            },
        ];

        Self::new(SCHEMA_VERSION, fields)
    }

    fn new(version: u32, fields: Vec<FieldSpec>) -> Self {
        let width = fields.iter().map(|f| f.kind.num_columns()).sum();
        Self {
            version,
            fields,
            width,
        }
    }

    /// Schema version.
    #[inline]
    pub fn version(&self) -> u32 {
        self.version
    }

    /// Total number of feature columns.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Fields in column order.
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// Look up a field by its canonical name.
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Expanded column names, one per feature column.
    ///
    /// One-hot columns are named `<field>=<variant>`; single-column fields
    /// use the field name itself.
    pub fn column_names(&self) -> Vec<String> {
        let mut names = Vec::with_capacity(self.width);
        for field in &self.fields {
            match &field.kind {
                FieldKind::Numeric { .. }
                | FieldKind::Ordinal { .. }
                | FieldKind::DerivedRisk { .. } => names.push(field.name.to_string()),
                FieldKind::OneHot { variants, baseline } => {
                    for variant in variants.iter().filter(|v| *v != baseline) {
                        names.push(format!("{}={}", field.name, variant));
                    }
                }
            }
        }
        names
    }
}

// =============================================================================
// Medical risk table
// =============================================================================

/// Total risk score per medical-history variant.
///
/// Component conditions score diabetes 6, heart disease 8, high blood
/// pressure 6, thyroid 5; combined variants sum their components.
const MEDICAL_RISK_SCORES: &[(&str, f32)] = &[
    ("No Disease", 0.0),
    ("Diabetes", 6.0),
    ("High Blood Pressure", 6.0),
    ("Diabetes & High BP", 12.0),
    ("Thyroid", 5.0),
    ("Heart Disease", 8.0),
    ("BP & Heart Disease", 14.0),
    ("Diabetes & Thyroid", 11.0),
    ("Diabetes & Heart Disease", 14.0),
];

/// Largest attainable total risk score (diabetes & heart disease).
const MAX_MEDICAL_RISK: f32 = 14.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn v1_width_is_fixed() {
        let schema = EncodingSchema::v1();
        assert_eq!(schema.width(), 18);
        assert_eq!(schema.version(), SCHEMA_VERSION);
    }

    #[test]
    fn v1_column_order() {
        let schema = EncodingSchema::v1();
        let names = schema.column_names();
        assert_eq!(names.len(), schema.width());

        assert_eq!(names[0], "Age");
        assert_eq!(names[3], "Insurance Plan");
        assert_eq!(names[5], "Medical History");
        assert_eq!(names[6], "Gender=Male");
        assert_eq!(names[7], "Region=Northwest");
        assert_eq!(names[9], "Region=Southwest");
        assert_eq!(names[10], "Marital Status=Unmarried");
        assert_eq!(names[14], "Smoking Status=Occasional");
        assert_eq!(names[17], "Employment Status=Self-Employed");
    }

    #[test]
    fn field_lookup() {
        let schema = EncodingSchema::v1();
        assert!(schema.field(fields::AGE).is_some());
        assert!(schema.field(fields::MEDICAL_HISTORY).is_some());
        assert!(schema.field("Shoe Size").is_none());
    }

    #[test]
    fn enumeration_membership() {
        let schema = EncodingSchema::v1();

        let region = schema.field(fields::REGION).unwrap();
        assert!(region.kind.contains_variant("Southeast"));
        assert!(!region.kind.contains_variant("Midwest"));

        let history = schema.field(fields::MEDICAL_HISTORY).unwrap();
        assert!(history.kind.contains_variant("Diabetes & Thyroid"));
        assert!(!history.kind.contains_variant("Unknown Disease"));

        let plan = schema.field(fields::INSURANCE_PLAN).unwrap();
        assert!(plan.kind.contains_variant("Gold"));
        assert!(!plan.kind.contains_variant("Platinum"));
    }

    #[test]
    fn one_hot_column_counts() {
        let schema = EncodingSchema::v1();
        let region = schema.field(fields::REGION).unwrap();
        assert_eq!(region.kind.num_columns(), 3);

        let gender = schema.field(fields::GENDER).unwrap();
        assert_eq!(gender.kind.num_columns(), 1);
    }

    #[test]
    fn risk_scores_are_normalizable() {
        for (name, score) in MEDICAL_RISK_SCORES {
            assert!(
                *score >= 0.0 && *score <= MAX_MEDICAL_RISK,
                "score for {name} outside [0, {MAX_MEDICAL_RISK}]"
            );
        }
    }
}
