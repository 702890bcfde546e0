use clap::Args;
use kisan_mitra::config::EngineConfig;
use kisan_mitra::error::AppError;
use kisan_mitra::soil::{assess, Assessment, SoilReportImporter, SoilSample};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Print the assessments as JSON instead of a text report.
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct SoilAssessArgs {
    /// Soil pH (0-14)
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub(crate) ph: f64,
    /// Nitrogen in mg/kg
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub(crate) nitrogen: f64,
    /// Phosphorus in mg/kg
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub(crate) phosphorus: f64,
    /// Potassium in mg/kg
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub(crate) potassium: f64,
    /// Organic matter in percent
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub(crate) organic_matter: f64,
    /// Moisture in percent
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub(crate) moisture: f64,
    /// Temperature in degrees Celsius
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub(crate) temperature: f64,
    /// Reject readings outside their physical range (also enabled by SOIL_STRICT_VALIDATION)
    #[arg(long)]
    pub(crate) strict: bool,
    /// Print the assessment as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

impl SoilAssessArgs {
    pub(crate) fn sample(&self) -> SoilSample {
        SoilSample {
            ph: self.ph,
            nitrogen: self.nitrogen,
            phosphorus: self.phosphorus,
            potassium: self.potassium,
            organic_matter: self.organic_matter,
            moisture: self.moisture,
            temperature: self.temperature,
        }
    }
}

#[derive(Args, Debug)]
pub(crate) struct SoilImportArgs {
    /// Soil-lab CSV export to assess row by row
    #[arg(long)]
    pub(crate) csv: PathBuf,
    /// Reject rows with readings outside their physical range
    #[arg(long)]
    pub(crate) strict: bool,
    /// Print the assessments as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Debug, Serialize)]
struct LabelledAssessment<'a> {
    label: &'a str,
    sample: SoilSample,
    assessment: Assessment,
}

pub(crate) fn run_soil_assess(args: SoilAssessArgs) -> Result<(), AppError> {
    let sample = args.sample();
    if strict_validation(args.strict)? {
        sample.validate()?;
    }

    let assessment = assess(&sample);
    if args.json {
        print_json(&LabelledAssessment {
            label: "command line",
            sample,
            assessment,
        })?;
    } else {
        render_assessment("command line", &sample, &assessment);
    }
    Ok(())
}

pub(crate) fn run_soil_import(args: SoilImportArgs) -> Result<(), AppError> {
    let strict = strict_validation(args.strict)?;
    let imported = SoilReportImporter::from_path(&args.csv)?;

    let mut rows = Vec::with_capacity(imported.len());
    for row in &imported {
        if strict {
            row.sample.validate()?;
        }
        rows.push(LabelledAssessment {
            label: &row.label,
            sample: row.sample,
            assessment: assess(&row.sample),
        });
    }

    if args.json {
        print_json(&rows)?;
    } else {
        println!("Soil report: {} ({} samples)", args.csv.display(), rows.len());
        for row in &rows {
            println!();
            render_assessment(row.label, &row.sample, &row.assessment);
        }
    }
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let scenarios = [
        ("Simulated report upload", SoilSample::mock_upload()),
        ("Blank form submission", SoilSample::default()),
    ];

    if args.json {
        let rows: Vec<_> = scenarios
            .iter()
            .map(|(label, sample)| LabelledAssessment {
                label: *label,
                sample: *sample,
                assessment: assess(sample),
            })
            .collect();
        return print_json(&rows);
    }

    println!("Kisan Mitra soil health demo");
    for (label, sample) in &scenarios {
        println!();
        render_assessment(label, sample, &assess(sample));
    }
    Ok(())
}

/// The flag forces strict mode on; otherwise `SOIL_STRICT_VALIDATION` decides.
fn strict_validation(flag: bool) -> Result<bool, AppError> {
    if flag {
        return Ok(true);
    }
    Ok(EngineConfig::load()?.strict_validation)
}

fn print_json<T: Serialize>(value: &T) -> Result<(), AppError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub(crate) fn render_assessment(label: &str, sample: &SoilSample, assessment: &Assessment) {
    println!("Soil assessment: {label}");
    println!(
        "Readings: pH {} | N {} mg/kg | P {} mg/kg | K {} mg/kg | OM {}% | moisture {}% | {} °C",
        sample.ph,
        sample.nitrogen,
        sample.phosphorus,
        sample.potassium,
        sample.organic_matter,
        sample.moisture,
        sample.temperature
    );

    println!(
        "\nSoil health index: {}/100 ({})",
        assessment.health_score,
        assessment.health_band.label()
    );
    println!("{}", assessment.health_band.description());
    for factor in &assessment.factors {
        println!(
            "- {}: {} ({})",
            factor.name,
            factor.display_value,
            factor.status.label()
        );
    }

    println!(
        "\nFertilizer advisory: {}/100 ({})",
        assessment.advisory.health_score,
        assessment.advisory.overall_health.label()
    );
    println!("{}", assessment.advisory.summary);

    if !assessment.strengths.is_empty() {
        println!("\nStrengths");
        for strength in &assessment.strengths {
            println!("- {}", strength);
        }
    }

    if !assessment.issues.is_empty() {
        println!("\nIssues");
        for issue in &assessment.issues {
            println!("- {}", issue);
        }
    }

    if !assessment.advisory.recommendations.is_empty() {
        println!("\nFertilizer actions");
        for action in &assessment.advisory.recommendations {
            println!(
                "- [{}] {}: {} | {} | {} | {}",
                action.priority.label(),
                action.fertilizer,
                action.amount,
                action.timing,
                action.method,
                action.cost
            );
        }
    }

    if assessment.recommendations.is_empty() {
        println!("\nRecommendations: none");
    } else {
        println!("\nRecommendations");
        for recommendation in &assessment.recommendations {
            println!(
                "- [{}] {}: {} ({})",
                recommendation.priority.label(),
                recommendation.title,
                recommendation.description,
                recommendation.cost
            );
        }
    }

    let plan = &assessment.fertilizer_plan;
    println!("\nFertilizer plan");
    for (tier, items) in [
        ("Primary", &plan.primary),
        ("Secondary", &plan.secondary),
        ("Micronutrients", &plan.micronutrients),
    ] {
        for item in items {
            println!(
                "- {}: {} | {} | {} | {}",
                tier, item.name, item.quantity, item.timing, item.cost
            );
        }
    }

    if assessment.warnings.is_empty() {
        println!("\nWarnings: none");
    } else {
        println!("\nWarnings");
        for warning in &assessment.warnings {
            println!("- [{}] {}", warning.kind.label(), warning.message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(ph: f64, strict: bool) -> SoilAssessArgs {
        SoilAssessArgs {
            ph,
            nitrogen: 45.0,
            phosphorus: 25.0,
            potassium: 180.0,
            organic_matter: 3.2,
            moisture: 22.0,
            temperature: 18.0,
            strict,
            json: false,
        }
    }

    #[test]
    fn assess_args_build_the_sample() {
        assert_eq!(args(6.5, false).sample(), SoilSample::mock_upload());
    }

    #[test]
    fn strict_assess_rejects_out_of_scale_ph() {
        let err = run_soil_assess(args(15.0, true)).expect_err("pH above 14");
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn strict_flag_short_circuits_environment() {
        assert!(strict_validation(true).expect("flag wins"));
    }

    #[test]
    fn import_reports_missing_files() {
        let err = run_soil_import(SoilImportArgs {
            csv: PathBuf::from("/nonexistent/soil-report.csv"),
            strict: true,
            json: false,
        })
        .expect_err("file missing");
        assert!(matches!(err, AppError::Import(_)));
    }

    #[test]
    fn strict_lookup_ignores_broken_server_settings() {
        std::env::set_var("APP_PORT", "eighty");
        std::env::remove_var("SOIL_STRICT_VALIDATION");
        let strict = strict_validation(false);
        std::env::remove_var("APP_PORT");

        assert!(!strict.expect("engine switches load"));
    }

    #[test]
    fn json_encoding_failures_are_reported() {
        let mut unencodable = std::collections::BTreeMap::new();
        unencodable.insert(vec![1_u8], "reading");

        let err = print_json(&unencodable).expect_err("non-string keys rejected");
        assert!(matches!(err, AppError::Encode(_)));
    }

    #[test]
    fn render_assessment_handles_blank_samples() {
        let sample = SoilSample::default();
        render_assessment("blank", &sample, &assess(&sample));
    }
}
