use crate::nucleotide::Nucleotide;
use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An ordered, immutable sequence of bases. This is the at-rest form of a
/// strand; all editing happens on the expanded unit graph, never here.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Strand(Vec<Nucleotide>);

impl Strand {
    pub fn new(bases: Vec<Nucleotide>) -> Self {
        Strand(bases)
    }

    /// Parses strand text, rejecting anything outside ACGT (case-insensitive).
    /// A bad letter fails the whole parse; no partial strand is constructed.
    pub fn from_text(text: &str) -> Result<Self> {
        text.bytes()
            .map(|letter| {
                Nucleotide::from_letter(letter)
                    .ok_or_else(|| anyhow!("Invalid base '{}' in strand", letter as char))
            })
            .collect::<Result<Vec<_>>>()
            .map(Strand)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn bases(&self) -> &[Nucleotide] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Nucleotide> {
        self.0.iter()
    }
}

impl FromStr for Strand {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Strand::from_text(s)
    }
}

impl fmt::Display for Strand {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for base in &self.0 {
            write!(f, "{base}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        let strand = Strand::from_text("ACGT").unwrap();
        assert_eq!(strand.len(), 4);
        assert_eq!(strand.to_string(), "ACGT");
        assert_eq!(
            strand.bases(),
            &[Nucleotide::A, Nucleotide::C, Nucleotide::G, Nucleotide::T]
        );
    }

    #[test]
    fn test_parse_lowercase() {
        let strand = Strand::from_text("acgt").unwrap();
        assert_eq!(strand.to_string(), "ACGT");
    }

    #[test]
    fn test_parse_empty() {
        let strand = Strand::from_text("").unwrap();
        assert!(strand.is_empty());
        assert_eq!(strand.to_string(), "");
    }

    #[test]
    fn test_parse_rejects_bad_letters() {
        assert!(Strand::from_text("ACGU").is_err());
        assert!(Strand::from_text("ACG T").is_err());
        assert!(Strand::from_text("X").is_err());
    }

    #[test]
    fn test_structural_equality() {
        let a = Strand::from_text("GATTACA").unwrap();
        let b = "GATTACA".parse::<Strand>().unwrap();
        assert_eq!(a, b);
    }
}
