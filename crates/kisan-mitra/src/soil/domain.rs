use serde::{Deserialize, Serialize};

/// Laboratory or field readings for a single soil sample.
///
/// Construction never validates: negative or out-of-range readings are scored
/// like any other value. Call [`SoilSample::validate`] to opt into range checks.
/// Missing JSON fields read as `0`, matching blank form inputs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SoilSample {
    pub ph: f64,
    /// mg/kg
    pub nitrogen: f64,
    /// mg/kg
    pub phosphorus: f64,
    /// mg/kg
    pub potassium: f64,
    /// Percent.
    #[serde(alias = "organicMatter")]
    pub organic_matter: f64,
    /// Percent.
    pub moisture: f64,
    /// Degrees Celsius. Carried through but never scored.
    pub temperature: f64,
}

impl SoilSample {
    /// Readings produced by the simulated soil-report upload.
    pub const fn mock_upload() -> Self {
        Self {
            ph: 6.5,
            nitrogen: 45.0,
            phosphorus: 25.0,
            potassium: 180.0,
            organic_matter: 3.2,
            moisture: 22.0,
            temperature: 18.0,
        }
    }

    pub fn value(&self, parameter: SoilParameter) -> f64 {
        match parameter {
            SoilParameter::Ph => self.ph,
            SoilParameter::Nitrogen => self.nitrogen,
            SoilParameter::Phosphorus => self.phosphorus,
            SoilParameter::Potassium => self.potassium,
            SoilParameter::OrganicMatter => self.organic_matter,
            SoilParameter::Moisture => self.moisture,
            SoilParameter::Temperature => self.temperature,
        }
    }

    /// Check every reading against its physical domain.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for parameter in SoilParameter::ALL {
            let value = self.value(parameter);
            if !value.is_finite() {
                return Err(ValidationError::NotFinite { parameter });
            }

            if let Some((min, max)) = parameter.domain() {
                if value < min || value > max {
                    return Err(ValidationError::OutOfRange {
                        parameter,
                        value,
                        min,
                        max,
                    });
                }
            }
        }

        Ok(())
    }
}

/// Named field of a [`SoilSample`], used by the rule tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SoilParameter {
    Ph,
    Nitrogen,
    Phosphorus,
    Potassium,
    OrganicMatter,
    Moisture,
    Temperature,
}

impl SoilParameter {
    pub const ALL: [SoilParameter; 7] = [
        SoilParameter::Ph,
        SoilParameter::Nitrogen,
        SoilParameter::Phosphorus,
        SoilParameter::Potassium,
        SoilParameter::OrganicMatter,
        SoilParameter::Moisture,
        SoilParameter::Temperature,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Ph => "pH Level",
            Self::Nitrogen => "Nitrogen",
            Self::Phosphorus => "Phosphorus",
            Self::Potassium => "Potassium",
            Self::OrganicMatter => "Organic Matter",
            Self::Moisture => "Moisture",
            Self::Temperature => "Temperature",
        }
    }

    pub const fn unit(self) -> Option<&'static str> {
        match self {
            Self::Ph => None,
            Self::Nitrogen | Self::Phosphorus | Self::Potassium => Some("mg/kg"),
            Self::OrganicMatter | Self::Moisture => Some("%"),
            Self::Temperature => Some("°C"),
        }
    }

    /// Inclusive bounds enforced by [`SoilSample::validate`]. Temperature is unbounded.
    const fn domain(self) -> Option<(f64, f64)> {
        match self {
            Self::Ph => Some((0.0, 14.0)),
            Self::Moisture => Some((0.0, 100.0)),
            Self::Nitrogen | Self::Phosphorus | Self::Potassium | Self::OrganicMatter => {
                Some((0.0, f64::INFINITY))
            }
            Self::Temperature => None,
        }
    }
}

/// Rejection raised by opt-in sample validation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("{} reading is not a finite number", .parameter.label())]
    NotFinite { parameter: SoilParameter },
    #[error("{} reading {value} outside accepted range {min}..={max}", .parameter.label())]
    OutOfRange {
        parameter: SoilParameter,
        value: f64,
        min: f64,
        max: f64,
    },
}

/// Classification attached to each scored factor of the health index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FactorStatus {
    Optimal,
    Acidic,
    Alkaline,
    Sufficient,
    Deficient,
}

impl FactorStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Optimal => "Optimal",
            Self::Acidic => "Acidic",
            Self::Alkaline => "Alkaline",
            Self::Sufficient => "Sufficient",
            Self::Deficient => "Deficient",
        }
    }
}

/// Coarse health label derived from a score. Cut-offs differ per rule set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthBand {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl HealthBand {
    /// Cut-offs used by the fertilizer advisory (90 / 75 / 60).
    pub fn from_advisory_score(score: i32) -> Self {
        if score >= 90 {
            Self::Excellent
        } else if score >= 75 {
            Self::Good
        } else if score >= 60 {
            Self::Fair
        } else {
            Self::Poor
        }
    }

    /// Cut-offs used by the soil health index (80 / 60 / 40).
    pub fn from_index_score(score: u8) -> Self {
        if score >= 80 {
            Self::Excellent
        } else if score >= 60 {
            Self::Good
        } else if score >= 40 {
            Self::Fair
        } else {
            Self::Poor
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Fair => "fair",
            Self::Poor => "poor",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent soil health with optimal nutrient levels",
            Self::Good => "Good soil health with minor improvements needed",
            Self::Fair => "Fair soil health requiring attention",
            Self::Poor => "Poor soil health needing immediate intervention",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningKind {
    Warning,
    Alert,
}

impl WarningKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Warning => "warning",
            Self::Alert => "alert",
        }
    }
}
