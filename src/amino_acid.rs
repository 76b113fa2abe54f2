use serde::{Deserialize, Serialize};
use std::fmt;

/// The fifteen enzyme commands. Each is produced by one codon and acts on
/// the unit a running enzyme is bound to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AminoAcid {
    /// Sever the strand right of the bound unit.
    Cut,
    /// Remove the bound unit, rebinding to its right neighbor.
    Del,
    /// Switch binding to the complementary unit.
    Swi,
    /// Move one unit to the right.
    Mvr,
    /// Move one unit to the left.
    Mvl,
    /// Turn copy mode on.
    Cop,
    /// Turn copy mode off.
    Off,
    /// Insert an A to the right.
    Ina,
    /// Insert a C to the right.
    Inc,
    /// Insert a G to the right.
    Ing,
    /// Insert a T to the right.
    Int,
    /// Search rightwards for a pyrimidine.
    Rpy,
    /// Search rightwards for a purine.
    Rpu,
    /// Search leftwards for a pyrimidine.
    Lpy,
    /// Search leftwards for a purine.
    Lpu,
}

impl AminoAcid {
    pub fn name(self) -> &'static str {
        match self {
            AminoAcid::Cut => "cut",
            AminoAcid::Del => "del",
            AminoAcid::Swi => "swi",
            AminoAcid::Mvr => "mvr",
            AminoAcid::Mvl => "mvl",
            AminoAcid::Cop => "cop",
            AminoAcid::Off => "off",
            AminoAcid::Ina => "ina",
            AminoAcid::Inc => "inc",
            AminoAcid::Ing => "ing",
            AminoAcid::Int => "int",
            AminoAcid::Rpy => "rpy",
            AminoAcid::Rpu => "rpu",
            AminoAcid::Lpy => "lpy",
            AminoAcid::Lpu => "lpu",
        }
    }
}

impl fmt::Display for AminoAcid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
