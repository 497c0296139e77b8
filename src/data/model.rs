use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Species – the fixed enumeration the dashboard groups and colours by
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Species {
    Adelie,
    Gentoo,
    Chinstrap,
}

impl Species {
    pub const ALL: [Species; 3] = [Species::Adelie, Species::Gentoo, Species::Chinstrap];

    pub fn parse(s: &str) -> Option<Species> {
        match s.trim() {
            "Adelie" => Some(Species::Adelie),
            "Gentoo" => Some(Species::Gentoo),
            "Chinstrap" => Some(Species::Chinstrap),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Species::Adelie => "Adelie",
            Species::Gentoo => "Gentoo",
            Species::Chinstrap => "Chinstrap",
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Sex – optional on every record
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    pub fn parse(s: &str) -> Option<Sex> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("male") {
            Some(Sex::Male)
        } else if s.eq_ignore_ascii_case("female") {
            Some(Sex::Female)
        } else {
            None
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sex::Male => f.write_str("male"),
            Sex::Female => f.write_str("female"),
        }
    }
}

// ---------------------------------------------------------------------------
// Attribute – the four numeric measurement columns offered in the sidebar
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Attribute {
    BillLengthMm,
    BillDepthMm,
    FlipperLengthMm,
    BodyMassG,
}

impl Attribute {
    pub const ALL: [Attribute; 4] = [
        Attribute::BillLengthMm,
        Attribute::BillDepthMm,
        Attribute::FlipperLengthMm,
        Attribute::BodyMassG,
    ];

    /// Column name as it appears in the source table header.
    pub fn column_name(&self) -> &'static str {
        match self {
            Attribute::BillLengthMm => "bill_length_mm",
            Attribute::BillDepthMm => "bill_depth_mm",
            Attribute::FlipperLengthMm => "flipper_length_mm",
            Attribute::BodyMassG => "body_mass_g",
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column_name())
    }
}

// ---------------------------------------------------------------------------
// Column – every field of a record, for presence checks and table headers
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Species,
    Island,
    BillLengthMm,
    BillDepthMm,
    FlipperLengthMm,
    BodyMassG,
    Sex,
    Year,
}

impl Column {
    pub const ALL: [Column; 8] = [
        Column::Species,
        Column::Island,
        Column::BillLengthMm,
        Column::BillDepthMm,
        Column::FlipperLengthMm,
        Column::BodyMassG,
        Column::Sex,
        Column::Year,
    ];

    pub fn header(&self) -> &'static str {
        match self {
            Column::Species => "species",
            Column::Island => "island",
            Column::BillLengthMm => "bill_length_mm",
            Column::BillDepthMm => "bill_depth_mm",
            Column::FlipperLengthMm => "flipper_length_mm",
            Column::BodyMassG => "body_mass_g",
            Column::Sex => "sex",
            Column::Year => "year",
        }
    }
}

// ---------------------------------------------------------------------------
// Record – one penguin observation (one row of the source table)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub species: Species,
    pub island: String,
    pub bill_length_mm: Option<f64>,
    pub bill_depth_mm: Option<f64>,
    pub flipper_length_mm: Option<f64>,
    pub body_mass_g: Option<f64>,
    pub sex: Option<Sex>,
    pub year: i32,
}

impl Record {
    /// Whether the record carries a value for the given column.
    pub fn has(&self, column: Column) -> bool {
        match column {
            Column::Species | Column::Island | Column::Year => true,
            Column::BillLengthMm => self.bill_length_mm.is_some(),
            Column::BillDepthMm => self.bill_depth_mm.is_some(),
            Column::FlipperLengthMm => self.flipper_length_mm.is_some(),
            Column::BodyMassG => self.body_mass_g.is_some(),
            Column::Sex => self.sex.is_some(),
        }
    }

    /// Numeric value of a measurement attribute, if present.
    pub fn measurement(&self, attr: Attribute) -> Option<f64> {
        match attr {
            Attribute::BillLengthMm => self.bill_length_mm,
            Attribute::BillDepthMm => self.bill_depth_mm,
            Attribute::FlipperLengthMm => self.flipper_length_mm,
            Attribute::BodyMassG => self.body_mass_g,
        }
    }

    /// Cell text for table rendering. Missing values display as "NA",
    /// the source table's own marker.
    pub fn cell(&self, column: Column) -> String {
        fn num(v: Option<f64>) -> String {
            match v {
                Some(x) if x.fract() == 0.0 => format!("{x:.0}"),
                Some(x) => format!("{x:.1}"),
                None => "NA".to_string(),
            }
        }
        match column {
            Column::Species => self.species.to_string(),
            Column::Island => self.island.clone(),
            Column::BillLengthMm => num(self.bill_length_mm),
            Column::BillDepthMm => num(self.bill_depth_mm),
            Column::FlipperLengthMm => num(self.flipper_length_mm),
            Column::BodyMassG => num(self.body_mass_g),
            Column::Sex => self
                .sex
                .map(|s| s.to_string())
                .unwrap_or_else(|| "NA".to_string()),
            Column::Year => self.year.to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded table, immutable after construction
// ---------------------------------------------------------------------------

/// Ordered sequence of records. Built once by the loader; there is no
/// mutating API, so an `Arc<Dataset>` can be shared freely.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    pub fn from_records(records: Vec<Record>) -> Self {
        Dataset { records }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
