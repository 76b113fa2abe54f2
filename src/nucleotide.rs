use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four bases a strand position can carry.
///
/// The ordinal values matter: the purine/pyrimidine split is the parity of
/// the ordinal, and the complement is its reflection around 3.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Nucleotide {
    A = 0,
    C = 1,
    G = 2,
    T = 3,
}

impl Nucleotide {
    #[inline(always)]
    pub fn is_pyrimidine(self) -> bool {
        // C = 1, T = 3
        (self as u8) % 2 == 1
    }

    #[inline(always)]
    pub fn is_purine(self) -> bool {
        // A = 0, G = 2
        (self as u8) % 2 == 0
    }

    /// Base-pairing partner: A<->T, C<->G.
    #[inline(always)]
    pub fn complement(self) -> Self {
        match self {
            Nucleotide::A => Nucleotide::T,
            Nucleotide::C => Nucleotide::G,
            Nucleotide::G => Nucleotide::C,
            Nucleotide::T => Nucleotide::A,
        }
    }

    #[inline(always)]
    pub fn from_letter(letter: u8) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            b'A' => Some(Nucleotide::A),
            b'C' => Some(Nucleotide::C),
            b'G' => Some(Nucleotide::G),
            b'T' => Some(Nucleotide::T),
            _ => None,
        }
    }

    #[inline(always)]
    pub fn to_letter(self) -> char {
        match self {
            Nucleotide::A => 'A',
            Nucleotide::C => 'C',
            Nucleotide::G => 'G',
            Nucleotide::T => 'T',
        }
    }
}

impl fmt::Display for Nucleotide {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_letter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Nucleotide; 4] = [Nucleotide::A, Nucleotide::C, Nucleotide::G, Nucleotide::T];

    #[test]
    fn test_complement_involutive() {
        for n in ALL {
            assert_eq!(n.complement().complement(), n);
            assert_ne!(n.complement(), n);
        }
    }

    #[test]
    fn test_complement_pairs() {
        assert_eq!(Nucleotide::A.complement(), Nucleotide::T);
        assert_eq!(Nucleotide::C.complement(), Nucleotide::G);
        assert_eq!(Nucleotide::G.complement(), Nucleotide::C);
        assert_eq!(Nucleotide::T.complement(), Nucleotide::A);
    }

    #[test]
    fn test_classes_are_disjoint() {
        for n in ALL {
            assert_ne!(n.is_purine(), n.is_pyrimidine());
        }
        assert!(Nucleotide::A.is_purine());
        assert!(Nucleotide::G.is_purine());
        assert!(Nucleotide::C.is_pyrimidine());
        assert!(Nucleotide::T.is_pyrimidine());
    }

    #[test]
    fn test_from_letter() {
        assert_eq!(Nucleotide::from_letter(b'a'), Some(Nucleotide::A));
        assert_eq!(Nucleotide::from_letter(b'G'), Some(Nucleotide::G));
        assert_eq!(Nucleotide::from_letter(b'N'), None);
        assert_eq!(Nucleotide::from_letter(b' '), None);
    }
}
