use super::common::*;
use crate::soil::domain::{Priority, SoilSample, WarningKind};
use crate::soil::{build_fertilizer_plan, recommend, warnings};

#[test]
fn mock_upload_only_needs_nitrogen() {
    let recommendations = recommend(&mock_upload());

    assert_eq!(recommendations.len(), 1);
    let nitrogen = recommendations[0];
    assert_eq!(nitrogen.title, "Nitrogen Supplementation");
    assert_eq!(nitrogen.priority, Priority::High);
    assert_eq!(nitrogen.cost, "₹3,000 - ₹4,000 per hectare");
}

#[test]
fn all_zero_sample_triggers_every_recommendation_in_order() {
    let titles: Vec<_> = recommend(&all_zero())
        .iter()
        .map(|rec| (rec.title, rec.priority))
        .collect();

    assert_eq!(
        titles,
        vec![
            ("Soil pH Correction", Priority::High),
            ("Nitrogen Supplementation", Priority::High),
            ("Phosphorus Enhancement", Priority::Medium),
            ("Organic Matter Improvement", Priority::Medium),
        ]
    );
}

#[test]
fn healthy_sample_needs_no_remediation() {
    assert!(recommend(&healthy_sample()).is_empty());
    assert!(warnings(&healthy_sample()).is_empty());
}

#[test]
fn plan_always_carries_gypsum_and_zinc() {
    let plan = build_fertilizer_plan(&healthy_sample());

    assert!(plan.primary.is_empty());
    assert_eq!(plan.secondary.len(), 1);
    assert_eq!(plan.secondary[0].name, "Gypsum (Calcium Sulfate)");
    assert_eq!(plan.micronutrients.len(), 1);
    assert_eq!(plan.micronutrients[0].name, "Zinc Sulfate");
    assert_eq!(plan.micronutrients[0].quantity, "25 kg/hectare");
    assert_eq!(plan.len(), 2);
}

#[test]
fn plan_adds_primary_nutrients_below_index_thresholds() {
    let mock_plan = build_fertilizer_plan(&mock_upload());
    let names: Vec<_> = mock_plan.primary.iter().map(|item| item.name).collect();
    assert_eq!(names, vec!["Urea (46% N)"]);
    assert_eq!(
        mock_plan.primary[0].timing,
        "Split application: 50% at sowing, 25% at tillering, 25% at flowering"
    );

    let depleted = build_fertilizer_plan(&all_zero());
    let names: Vec<_> = depleted.primary.iter().map(|item| item.name).collect();
    assert_eq!(names, vec!["Urea (46% N)", "DAP (18-46-0)", "MOP (60% K2O)"]);
    assert_eq!(depleted.len(), 5);
}

#[test]
fn low_moisture_always_raises_an_alert() {
    for base in [healthy_sample(), mock_upload(), all_zero()] {
        let sample = SoilSample {
            moisture: 5.0,
            ..base
        };
        let raised = warnings(&sample);
        assert!(
            raised.iter().any(|warning| warning.kind == WarningKind::Alert
                && warning.message.starts_with("Low soil moisture detected")),
            "missing moisture alert for {sample:?}"
        );
    }
}

#[test]
fn warnings_follow_table_order() {
    let sample = SoilSample {
        ph: 9.0,
        moisture: 4.0,
        organic_matter: 0.5,
        ..healthy_sample()
    };

    let kinds: Vec<_> = warnings(&sample).iter().map(|warning| warning.kind).collect();
    assert_eq!(
        kinds,
        vec![WarningKind::Warning, WarningKind::Alert, WarningKind::Warning]
    );
    assert!(warnings(&sample)[0].message.contains("nutrient lockup"));
}

#[test]
fn alkalinity_warning_starts_above_eight_and_a_half() {
    let borderline = SoilSample {
        ph: 8.5,
        ..healthy_sample()
    };
    assert!(warnings(&borderline).is_empty());
}

#[test]
fn moisture_and_organic_matter_warnings_are_strict_thresholds() {
    let at_moisture_limit = SoilSample {
        moisture: 10.0,
        ..healthy_sample()
    };
    assert!(warnings(&at_moisture_limit).is_empty());

    let at_organic_limit = SoilSample {
        organic_matter: 1.0,
        ..healthy_sample()
    };
    assert!(warnings(&at_organic_limit).is_empty());

    let just_below = SoilSample {
        moisture: 9.99,
        organic_matter: 0.99,
        ..healthy_sample()
    };
    let kinds: Vec<_> = warnings(&just_below).iter().map(|warning| warning.kind).collect();
    assert_eq!(kinds, vec![WarningKind::Alert, WarningKind::Warning]);
}
