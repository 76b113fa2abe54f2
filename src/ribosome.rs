use crate::amino_acid::AminoAcid;
use crate::enzyme::Enzyme;
use crate::nucleotide::Nucleotide;
use crate::strand::Strand;

/// Rotational bias a codon contributes when its command is folded into a
/// growing enzyme. Left is +90 degrees, Right is -90.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnDirection {
    Straight,
    Left,
    Right,
}

impl TurnDirection {
    #[inline(always)]
    fn turn(self) -> i32 {
        match self {
            TurnDirection::Straight => 0,
            TurnDirection::Left => 1,
            TurnDirection::Right => -1,
        }
    }
}

enum CodonEntry {
    /// Closes the enzyme under construction.
    Punctuation,
    Command(AminoAcid, TurnDirection),
}

/// The fixed 16-codon translation table (FIG. 87 in GEB).
fn codon_entry(first: Nucleotide, second: Nucleotide) -> CodonEntry {
    use AminoAcid::*;
    use Nucleotide::*;
    use TurnDirection::*;
    match (first, second) {
        (A, A) => CodonEntry::Punctuation,
        (A, C) => CodonEntry::Command(Cut, Straight),
        (A, G) => CodonEntry::Command(Del, Straight),
        (A, T) => CodonEntry::Command(Swi, Right),
        (C, A) => CodonEntry::Command(Mvr, Straight),
        (C, C) => CodonEntry::Command(Mvl, Straight),
        (C, G) => CodonEntry::Command(Cop, Right),
        (C, T) => CodonEntry::Command(Off, Left),
        (G, A) => CodonEntry::Command(Ina, Straight),
        (G, C) => CodonEntry::Command(Inc, Right),
        (G, G) => CodonEntry::Command(Ing, Right),
        (G, T) => CodonEntry::Command(Int, Left),
        (T, A) => CodonEntry::Command(Rpy, Right),
        (T, C) => CodonEntry::Command(Rpu, Left),
        (T, G) => CodonEntry::Command(Lpy, Left),
        (T, T) => CodonEntry::Command(Lpu, Left),
    }
}

/// Net turn (mod 4) to initial binding base. Two quarter-turns land on T,
/// three (one net right turn) on G.
const TURN_TO_BINDING: [Nucleotide; 4] =
    [Nucleotide::A, Nucleotide::C, Nucleotide::T, Nucleotide::G];

/// Reads a strand two bases at a time and builds the enzymes it encodes.
///
/// Punctuation codons and the end of the strand close the enzyme under
/// construction; a trailing unpaired base is ignored. The binding base
/// comes from the summed turns of all commands except the first and (for
/// programs longer than one command) the last.
pub fn translate(strand: &Strand) -> Vec<Enzyme> {
    let mut enzymes = vec![];
    let mut commands: Vec<AminoAcid> = vec![];
    let mut turn_total = 0i32;
    let mut last_turn = 0i32;
    for codon in strand.bases().chunks_exact(2) {
        match codon_entry(codon[0], codon[1]) {
            CodonEntry::Punctuation => {
                close_enzyme(&mut enzymes, &mut commands, &mut turn_total, &mut last_turn);
            }
            CodonEntry::Command(amino_acid, direction) => {
                last_turn = direction.turn();
                if !commands.is_empty() {
                    turn_total += last_turn;
                }
                commands.push(amino_acid);
            }
        }
    }
    close_enzyme(&mut enzymes, &mut commands, &mut turn_total, &mut last_turn);
    enzymes
}

fn close_enzyme(
    enzymes: &mut Vec<Enzyme>,
    commands: &mut Vec<AminoAcid>,
    turn_total: &mut i32,
    last_turn: &mut i32,
) {
    if !commands.is_empty() {
        if commands.len() > 1 {
            *turn_total -= *last_turn;
        }
        let binding = TURN_TO_BINDING[turn_total.rem_euclid(4) as usize];
        enzymes.push(Enzyme::new(binding, std::mem::take(commands)));
    }
    *turn_total = 0;
    *last_turn = 0;
}
