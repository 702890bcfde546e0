use super::{
    AdvisoryBranch, AdvisoryRule, IndexBand, IndexGrade, IndexRule, PlanRule, RecommendationRule,
    Threshold, Trigger, WarningRule,
};
use crate::soil::domain::{FactorStatus, Priority, SoilParameter, WarningKind};
use crate::soil::views::{FertilizerPlanItem, FertilizerRecommendation, PlanTier, Recommendation};

const fn when(parameter: SoilParameter, threshold: Threshold) -> Trigger {
    Trigger::When {
        parameter,
        threshold,
    }
}

const fn below(limit: f64) -> Threshold {
    Threshold::Below { limit }
}

const fn above(limit: f64) -> Threshold {
    Threshold::Above { limit }
}

const fn at_least(limit: f64) -> Threshold {
    Threshold::AtLeast { limit }
}

const fn grade(points: u8, status: FactorStatus) -> IndexGrade {
    IndexGrade { points, status }
}

// Fertilizer advisory: deduct from 100.

pub const ADVISORY_RULES: [AdvisoryRule; 5] = [
    AdvisoryRule {
        parameter: SoilParameter::Ph,
        branches: &[
            AdvisoryBranch {
                threshold: below(6.0),
                issue: "Soil is too acidic (pH < 6.0)",
                penalty: 15,
                treatment: Some(FertilizerRecommendation {
                    fertilizer: "Lime (CaCO₃)",
                    amount: "2-3 tons/hectare",
                    timing: "Before planting season",
                    method: "Broadcast and incorporate",
                    cost: "$150-200/hectare",
                    priority: Priority::High,
                }),
            },
            AdvisoryBranch {
                threshold: above(8.0),
                issue: "Soil is too alkaline (pH > 8.0)",
                penalty: 15,
                treatment: Some(FertilizerRecommendation {
                    fertilizer: "Sulfur",
                    amount: "200-300 kg/hectare",
                    timing: "2-3 months before planting",
                    method: "Broadcast and incorporate",
                    cost: "$80-120/hectare",
                    priority: Priority::High,
                }),
            },
        ],
        strength: "pH level is optimal for most crops",
    },
    AdvisoryRule {
        parameter: SoilParameter::Nitrogen,
        branches: &[
            AdvisoryBranch {
                threshold: below(30.0),
                issue: "Low nitrogen content",
                penalty: 20,
                treatment: Some(FertilizerRecommendation {
                    fertilizer: "Urea (46-0-0)",
                    amount: "100-150 kg/hectare",
                    timing: "Split application: 50% at planting, 50% at tillering",
                    method: "Side dress or broadcast",
                    cost: "$60-90/hectare",
                    priority: Priority::High,
                }),
            },
            AdvisoryBranch {
                threshold: above(80.0),
                issue: "Excess nitrogen - risk of lodging and delayed maturity",
                penalty: 10,
                treatment: None,
            },
        ],
        strength: "Adequate nitrogen levels",
    },
    AdvisoryRule {
        parameter: SoilParameter::Phosphorus,
        branches: &[AdvisoryBranch {
            threshold: below(15.0),
            issue: "Low phosphorus content",
            penalty: 15,
            treatment: Some(FertilizerRecommendation {
                fertilizer: "DAP (18-46-0)",
                amount: "75-100 kg/hectare",
                timing: "At planting time",
                method: "Band placement near seed",
                cost: "$45-60/hectare",
                priority: Priority::Medium,
            }),
        }],
        strength: "Good phosphorus availability",
    },
    AdvisoryRule {
        parameter: SoilParameter::Potassium,
        branches: &[AdvisoryBranch {
            threshold: below(120.0),
            issue: "Low potassium content",
            penalty: 15,
            treatment: Some(FertilizerRecommendation {
                fertilizer: "Muriate of Potash (0-0-60)",
                amount: "50-75 kg/hectare",
                timing: "Before planting",
                method: "Broadcast and incorporate",
                cost: "$35-50/hectare",
                priority: Priority::Medium,
            }),
        }],
        strength: "Sufficient potassium levels",
    },
    AdvisoryRule {
        parameter: SoilParameter::OrganicMatter,
        branches: &[AdvisoryBranch {
            threshold: below(2.0),
            issue: "Low organic matter content",
            penalty: 10,
            treatment: Some(FertilizerRecommendation {
                fertilizer: "Compost or FYM",
                amount: "5-10 tons/hectare",
                timing: "Before land preparation",
                method: "Broadcast and incorporate",
                cost: "$100-150/hectare",
                priority: Priority::Low,
            }),
        }],
        strength: "Good organic matter content",
    },
];

// Soil health index: accumulate to 100.

pub const HEALTH_INDEX_RULES: [IndexRule; 4] = [
    IndexRule {
        parameter: SoilParameter::Ph,
        bands: &[
            IndexBand {
                threshold: Threshold::Within { min: 6.0, max: 7.5 },
                grade: grade(25, FactorStatus::Optimal),
            },
            IndexBand {
                threshold: below(6.0),
                grade: grade(15, FactorStatus::Acidic),
            },
        ],
        otherwise: grade(10, FactorStatus::Alkaline),
    },
    IndexRule {
        parameter: SoilParameter::Nitrogen,
        bands: &[IndexBand {
            threshold: at_least(100.0),
            grade: grade(25, FactorStatus::Sufficient),
        }],
        otherwise: grade(10, FactorStatus::Deficient),
    },
    IndexRule {
        parameter: SoilParameter::Phosphorus,
        bands: &[IndexBand {
            threshold: at_least(20.0),
            grade: grade(25, FactorStatus::Sufficient),
        }],
        otherwise: grade(10, FactorStatus::Deficient),
    },
    IndexRule {
        parameter: SoilParameter::Potassium,
        bands: &[IndexBand {
            threshold: at_least(150.0),
            grade: grade(25, FactorStatus::Sufficient),
        }],
        otherwise: grade(10, FactorStatus::Deficient),
    },
];

pub const RECOMMENDATION_RULES: [RecommendationRule; 4] = [
    RecommendationRule {
        trigger: when(SoilParameter::Ph, below(6.0)),
        recommendation: Recommendation {
            priority: Priority::High,
            title: "Soil pH Correction",
            description:
                "Apply lime to increase soil pH. Recommended: 2-3 tons/hectare of agricultural lime.",
            cost: "₹8,000 - ₹12,000 per hectare",
        },
    },
    RecommendationRule {
        trigger: when(SoilParameter::Nitrogen, below(100.0)),
        recommendation: Recommendation {
            priority: Priority::High,
            title: "Nitrogen Supplementation",
            description: "Apply nitrogen-rich fertilizers. Recommended: Urea 150-200 kg/hectare.",
            cost: "₹3,000 - ₹4,000 per hectare",
        },
    },
    RecommendationRule {
        trigger: when(SoilParameter::Phosphorus, below(20.0)),
        recommendation: Recommendation {
            priority: Priority::Medium,
            title: "Phosphorus Enhancement",
            description: "Apply DAP or SSP fertilizer. Recommended: 100-150 kg/hectare.",
            cost: "₹2,500 - ₹3,500 per hectare",
        },
    },
    RecommendationRule {
        trigger: when(SoilParameter::OrganicMatter, below(2.0)),
        recommendation: Recommendation {
            priority: Priority::Medium,
            title: "Organic Matter Improvement",
            description: "Add compost or farmyard manure. Recommended: 5-10 tons/hectare.",
            cost: "₹5,000 - ₹8,000 per hectare",
        },
    },
];

pub const FERTILIZER_PLAN_RULES: [PlanRule; 5] = [
    PlanRule {
        tier: PlanTier::Primary,
        trigger: when(SoilParameter::Nitrogen, below(100.0)),
        item: FertilizerPlanItem {
            name: "Urea (46% N)",
            quantity: "150-200 kg/hectare",
            timing: "Split application: 50% at sowing, 25% at tillering, 25% at flowering",
            cost: "₹3,000 - ₹4,000",
        },
    },
    PlanRule {
        tier: PlanTier::Primary,
        trigger: when(SoilParameter::Phosphorus, below(20.0)),
        item: FertilizerPlanItem {
            name: "DAP (18-46-0)",
            quantity: "100-150 kg/hectare",
            timing: "Full dose at sowing",
            cost: "₹2,500 - ₹3,500",
        },
    },
    PlanRule {
        tier: PlanTier::Primary,
        trigger: when(SoilParameter::Potassium, below(150.0)),
        item: FertilizerPlanItem {
            name: "MOP (60% K2O)",
            quantity: "50-75 kg/hectare",
            timing: "Full dose at sowing",
            cost: "₹1,500 - ₹2,000",
        },
    },
    PlanRule {
        tier: PlanTier::Secondary,
        trigger: Trigger::Always,
        item: FertilizerPlanItem {
            name: "Gypsum (Calcium Sulfate)",
            quantity: "200-300 kg/hectare",
            timing: "Apply before sowing",
            cost: "₹1,000 - ₹1,500",
        },
    },
    PlanRule {
        tier: PlanTier::Micronutrient,
        trigger: Trigger::Always,
        item: FertilizerPlanItem {
            name: "Zinc Sulfate",
            quantity: "25 kg/hectare",
            timing: "Soil application or foliar spray",
            cost: "₹500 - ₹750",
        },
    },
];

pub const WARNING_RULES: [WarningRule; 3] = [
    WarningRule {
        trigger: when(SoilParameter::Ph, above(8.5)),
        kind: WarningKind::Warning,
        message: "High alkalinity may cause nutrient lockup. Consider sulfur application.",
    },
    WarningRule {
        trigger: when(SoilParameter::Moisture, below(10.0)),
        kind: WarningKind::Alert,
        message:
            "Low soil moisture detected. Ensure adequate irrigation before fertilizer application.",
    },
    WarningRule {
        trigger: when(SoilParameter::OrganicMatter, below(1.0)),
        kind: WarningKind::Warning,
        message: "Very low organic matter. Soil structure and water retention may be poor.",
    },
];
