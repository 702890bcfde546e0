use super::domain::SoilSample;
use serde::{Deserialize, Deserializer};
use std::io::Read;
use std::path::Path;

#[derive(Debug)]
pub enum SoilReportImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    NoSamples,
}

impl std::fmt::Display for SoilReportImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SoilReportImportError::Io(err) => write!(f, "failed to read soil report: {}", err),
            SoilReportImportError::Csv(err) => write!(f, "invalid soil report CSV data: {}", err),
            SoilReportImportError::NoSamples => write!(f, "soil report contains no samples"),
        }
    }
}

impl std::error::Error for SoilReportImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SoilReportImportError::Io(err) => Some(err),
            SoilReportImportError::Csv(err) => Some(err),
            SoilReportImportError::NoSamples => None,
        }
    }
}

impl From<std::io::Error> for SoilReportImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for SoilReportImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// One row of a soil-lab export.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportedSample {
    pub label: String,
    pub sample: SoilSample,
}

/// Reads soil-lab CSV exports into samples ready for assessment.
pub struct SoilReportImporter;

impl SoilReportImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<ImportedSample>, SoilReportImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<ImportedSample>, SoilReportImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut samples = Vec::new();

        for (index, record) in csv_reader.deserialize::<SoilReportRow>().enumerate() {
            let row = record?;
            samples.push(row.into_imported(index + 1));
        }

        if samples.is_empty() {
            return Err(SoilReportImportError::NoSamples);
        }

        Ok(samples)
    }
}

#[derive(Debug, Deserialize)]
struct SoilReportRow {
    #[serde(
        rename = "Sample ID",
        alias = "sample_id",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    sample_id: Option<String>,
    #[serde(rename = "pH", alias = "ph", deserialize_with = "blank_as_zero")]
    ph: f64,
    #[serde(
        rename = "Nitrogen",
        alias = "nitrogen",
        deserialize_with = "blank_as_zero"
    )]
    nitrogen: f64,
    #[serde(
        rename = "Phosphorus",
        alias = "phosphorus",
        deserialize_with = "blank_as_zero"
    )]
    phosphorus: f64,
    #[serde(
        rename = "Potassium",
        alias = "potassium",
        deserialize_with = "blank_as_zero"
    )]
    potassium: f64,
    #[serde(
        rename = "Organic Matter",
        alias = "organic_matter",
        alias = "organicMatter",
        deserialize_with = "blank_as_zero"
    )]
    organic_matter: f64,
    #[serde(
        rename = "Moisture",
        alias = "moisture",
        deserialize_with = "blank_as_zero"
    )]
    moisture: f64,
    #[serde(
        rename = "Temperature",
        alias = "temperature",
        deserialize_with = "blank_as_zero"
    )]
    temperature: f64,
}

impl SoilReportRow {
    fn into_imported(self, row_number: usize) -> ImportedSample {
        let label = self
            .sample_id
            .unwrap_or_else(|| format!("row-{row_number}"));

        ImportedSample {
            label,
            sample: SoilSample {
                ph: self.ph,
                nitrogen: self.nitrogen,
                phosphorus: self.phosphorus,
                potassium: self.potassium,
                organic_matter: self.organic_matter,
                moisture: self.moisture,
                temperature: self.temperature,
            },
        }
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

fn blank_as_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match empty_string_as_none(deserializer)? {
        Some(raw) => raw
            .trim()
            .parse::<f64>()
            .map_err(|err| serde::de::Error::custom(format!("'{raw}' is not a number ({err})"))),
        None => Ok(0.0),
    }
}
