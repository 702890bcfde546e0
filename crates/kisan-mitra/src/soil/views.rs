use super::domain::{FactorStatus, HealthBand, Priority, SoilParameter, WarningKind};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NutrientFactor {
    pub name: &'static str,
    pub parameter: SoilParameter,
    pub value: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<&'static str>,
    pub status: FactorStatus,
    pub display_value: String,
}

impl NutrientFactor {
    pub(crate) fn new(parameter: SoilParameter, value: f64, status: FactorStatus) -> Self {
        let unit = parameter.unit();
        let display_value = match unit {
            Some(unit) => format!("{value} {unit}"),
            None => value.to_string(),
        };

        Self {
            name: parameter.label(),
            parameter,
            value,
            unit,
            status,
            display_value,
        }
    }
}

/// Rupee-costed remediation step produced by the health index rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub priority: Priority,
    pub title: &'static str,
    pub description: &'static str,
    pub cost: &'static str,
}

/// Product-level fertilizer advice produced by the advisory rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FertilizerRecommendation {
    pub fertilizer: &'static str,
    pub amount: &'static str,
    pub timing: &'static str,
    pub method: &'static str,
    pub cost: &'static str,
    pub priority: Priority,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FertilizerPlanItem {
    pub name: &'static str,
    pub quantity: &'static str,
    pub timing: &'static str,
    pub cost: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanTier {
    Primary,
    Secondary,
    Micronutrient,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FertilizerPlan {
    pub primary: Vec<FertilizerPlanItem>,
    pub secondary: Vec<FertilizerPlanItem>,
    pub micronutrients: Vec<FertilizerPlanItem>,
}

impl FertilizerPlan {
    pub(crate) fn push(&mut self, tier: PlanTier, item: FertilizerPlanItem) {
        match tier {
            PlanTier::Primary => self.primary.push(item),
            PlanTier::Secondary => self.secondary.push(item),
            PlanTier::Micronutrient => self.micronutrients.push(item),
        }
    }

    pub fn len(&self) -> usize {
        self.primary.len() + self.secondary.len() + self.micronutrients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Warning {
    pub kind: WarningKind,
    pub message: &'static str,
}

/// Accumulated score from the soil health index rule set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HealthIndex {
    pub score: u8,
    pub band: HealthBand,
    pub factors: Vec<NutrientFactor>,
}

/// Deduction score and product advice from the fertilizer advisory rule set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FertilizerAdvisory {
    pub health_score: u8,
    pub overall_health: HealthBand,
    pub strengths: Vec<&'static str>,
    pub issues: Vec<&'static str>,
    pub recommendations: Vec<FertilizerRecommendation>,
}

impl FertilizerAdvisory {
    pub fn summary(&self) -> String {
        match self.recommendations.len() {
            0 => "Your soil parameters are within optimal ranges. Continue with regular monitoring."
                .to_string(),
            1 => "1 fertilizer action recommended".to_string(),
            count => format!("{count} fertilizer actions recommended"),
        }
    }
}

/// Advisory score as carried inside an [`Assessment`]; strengths and issues are
/// lifted to the assessment itself.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdvisorySummary {
    pub health_score: u8,
    pub overall_health: HealthBand,
    pub summary: String,
    pub recommendations: Vec<FertilizerRecommendation>,
}

/// Everything the presentation layer needs for one sample.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assessment {
    pub health_score: u8,
    pub health_band: HealthBand,
    pub factors: Vec<NutrientFactor>,
    pub strengths: Vec<&'static str>,
    pub issues: Vec<&'static str>,
    pub advisory: AdvisorySummary,
    pub recommendations: Vec<Recommendation>,
    pub fertilizer_plan: FertilizerPlan,
    pub warnings: Vec<Warning>,
}
