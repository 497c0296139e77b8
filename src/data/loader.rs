use std::fs::File;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::model::{Dataset, Record, Sex, Species};

// ---------------------------------------------------------------------------
// Error taxonomy
// ---------------------------------------------------------------------------

/// The dataset could not be produced. Startup-fatal: the caller logs it and
/// exits non-zero.
#[derive(Debug, Error)]
pub enum DataUnavailable {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed csv: {0}")]
    Csv(#[from] csv::Error),
    #[error("malformed json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("missing column '{0}'")]
    MissingColumn(&'static str),
    #[error("row {row}: {message}")]
    Row { row: usize, message: String },
    #[error("unsupported file extension: .{0}")]
    UnsupportedExtension(String),
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Default location of the committed sample table.
pub const DEFAULT_PATH: &str = "data/penguins.csv";

/// Path to load from: `PENGUIN_DATA` if set, otherwise [`DEFAULT_PATH`].
pub fn default_path() -> PathBuf {
    std::env::var_os("PENGUIN_DATA")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_PATH))
}

/// Load the dataset once at startup.
pub fn load_default() -> Result<Dataset, DataUnavailable> {
    load(&default_path())
}

/// Load a penguin dataset from a file. Dispatch by extension.
///
/// Supported formats:
/// * `.csv`  – header row with the eight penguin columns, `NA` or empty
///             cells for missing values
/// * `.json` – records-oriented array of row objects
pub fn load(path: &Path) -> Result<Dataset, DataUnavailable> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => load_csv(path),
        "json" => load_json(path),
        other => Err(DataUnavailable::UnsupportedExtension(other.to_string())),
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

fn open(path: &Path) -> Result<File, DataUnavailable> {
    File::open(path).map_err(|source| DataUnavailable::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn load_csv(path: &Path) -> Result<Dataset, DataUnavailable> {
    let mut reader = csv::Reader::from_reader(open(path)?);
    let headers: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();

    let index_of = |name: &'static str| -> Result<usize, DataUnavailable> {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or(DataUnavailable::MissingColumn(name))
    };

    let species_idx = index_of("species")?;
    let island_idx = index_of("island")?;
    let bill_length_idx = index_of("bill_length_mm")?;
    let bill_depth_idx = index_of("bill_depth_mm")?;
    let flipper_idx = index_of("flipper_length_mm")?;
    let mass_idx = index_of("body_mass_g")?;
    let sex_idx = index_of("sex")?;
    let year_idx = index_of("year")?;

    let mut records = Vec::new();

    for (row_no, result) in reader.records().enumerate() {
        let record = result?;
        let cell = |idx: usize| record.get(idx).unwrap_or("").trim();

        let species = Species::parse(cell(species_idx)).ok_or_else(|| DataUnavailable::Row {
            row: row_no,
            message: format!("unknown species '{}'", cell(species_idx)),
        })?;

        records.push(Record {
            species,
            island: cell(island_idx).to_string(),
            bill_length_mm: parse_optional_f64(cell(bill_length_idx), row_no, "bill_length_mm")?,
            bill_depth_mm: parse_optional_f64(cell(bill_depth_idx), row_no, "bill_depth_mm")?,
            flipper_length_mm: parse_optional_f64(cell(flipper_idx), row_no, "flipper_length_mm")?,
            body_mass_g: parse_optional_f64(cell(mass_idx), row_no, "body_mass_g")?,
            sex: parse_optional_sex(cell(sex_idx), row_no)?,
            year: cell(year_idx)
                .parse::<i32>()
                .map_err(|_| DataUnavailable::Row {
                    row: row_no,
                    message: format!("year '{}' is not an integer", cell(year_idx)),
                })?,
        });
    }

    Ok(Dataset::from_records(records))
}

/// `NA` and empty cells are the missing-value markers; anything else must
/// parse as a number.
fn parse_optional_f64(s: &str, row: usize, col: &str) -> Result<Option<f64>, DataUnavailable> {
    if s.is_empty() || s == "NA" {
        return Ok(None);
    }
    s.parse::<f64>().map(Some).map_err(|_| DataUnavailable::Row {
        row,
        message: format!("{col} '{s}' is not a number"),
    })
}

fn parse_optional_sex(s: &str, row: usize) -> Result<Option<Sex>, DataUnavailable> {
    if s.is_empty() || s == "NA" {
        return Ok(None);
    }
    Sex::parse(s).map(Some).ok_or_else(|| DataUnavailable::Row {
        row,
        message: format!("sex '{s}' is not male/female"),
    })
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented):
///
/// ```json
/// [
///   {
///     "species": "Adelie",
///     "island": "Torgersen",
///     "bill_length_mm": 39.1,
///     "bill_depth_mm": 18.7,
///     "flipper_length_mm": 181.0,
///     "body_mass_g": 3750.0,
///     "sex": "male",
///     "year": 2007
///   },
///   ...
/// ]
/// ```
///
/// Missing values are `null`.
fn load_json(path: &Path) -> Result<Dataset, DataUnavailable> {
    let text = std::fs::read_to_string(path).map_err(|source| DataUnavailable::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let records: Vec<Record> = serde_json::from_str(&text)?;
    Ok(Dataset::from_records(records))
}
