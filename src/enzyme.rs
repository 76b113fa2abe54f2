use crate::amino_acid::AminoAcid;
use crate::binding::BindingSelector;
use crate::nucleotide::Nucleotide;
use crate::strand::Strand;
use crate::unit_arena::{UnitArena, UnitId};
use itertools::Itertools;
use std::fmt;

/// An enzyme program: the base it initially binds to plus its command
/// sequence. Immutable once built (usually by the ribosome) and reusable
/// across any number of `process` runs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Enzyme {
    binding: Nucleotide,
    commands: Vec<AminoAcid>,
    name: String,
}

impl Enzyme {
    pub fn new(binding: Nucleotide, commands: Vec<AminoAcid>) -> Self {
        let name = format!("{}:{}", binding, commands.iter().map(|c| c.name()).join("-"));
        Enzyme {
            binding,
            commands,
            name,
        }
    }

    pub fn binding(&self) -> Nucleotide {
        self.binding
    }

    pub fn commands(&self) -> &[AminoAcid] {
        &self.commands
    }

    /// Display identity, e.g. `"C:rpy-ina-cop"`. Presentation only, never
    /// parsed back.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Runs this enzyme against a strand and returns every strand left over
    /// afterwards. Each call is an independent run with its own unit graph;
    /// no state survives between calls. With no unit matching the binding
    /// base the run is a no-op that returns the input strand unchanged.
    pub fn process(&self, strand: &Strand, selector: BindingSelector) -> Vec<Strand> {
        let mut run = EnzymeRun::start(strand, self.binding, selector);
        for &command in &self.commands {
            if run.finished {
                break;
            }
            run.execute(command);
        }
        run.arena.harvest()
    }
}

impl fmt::Display for Enzyme {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Transient state of one run: the working unit graph, the currently bound
/// unit, the copy-mode flag and the finished flag. Once `finished` is set
/// no further command executes.
struct EnzymeRun {
    arena: UnitArena,
    bound: Option<UnitId>,
    copy_mode: bool,
    finished: bool,
}

impl EnzymeRun {
    fn start(strand: &Strand, binding: Nucleotide, selector: BindingSelector) -> Self {
        let arena = UnitArena::from_strand(strand);
        let mut run = EnzymeRun {
            arena,
            bound: None,
            copy_mode: false,
            finished: false,
        };
        let candidates = run.arena.candidates(binding);
        match candidates.len() {
            0 => run.finished = true,
            1 => run.bound = Some(candidates[0]),
            n => run.bound = Some(candidates[selector.choose(n)]),
        }
        run
    }

    fn execute(&mut self, command: AminoAcid) {
        match command {
            AminoAcid::Cut => self.cut(),
            AminoAcid::Del => self.delete(),
            AminoAcid::Swi => self.switch(),
            AminoAcid::Mvr => self.move_right(),
            AminoAcid::Mvl => self.move_left(),
            AminoAcid::Cop => self.copy_on(),
            AminoAcid::Off => self.copy_mode = false,
            AminoAcid::Ina => self.insert(Nucleotide::A),
            AminoAcid::Inc => self.insert(Nucleotide::C),
            AminoAcid::Ing => self.insert(Nucleotide::G),
            AminoAcid::Int => self.insert(Nucleotide::T),
            AminoAcid::Rpy => self.search_right(Nucleotide::is_pyrimidine),
            AminoAcid::Rpu => self.search_right(Nucleotide::is_purine),
            AminoAcid::Lpy => self.search_left(Nucleotide::is_pyrimidine),
            AminoAcid::Lpu => self.search_left(Nucleotide::is_purine),
        }
    }

    fn move_right(&mut self) {
        let Some(bound) = self.bound else { return };
        match self.arena.unit(bound).right {
            None => self.finished = true,
            Some(right) => {
                self.bound = Some(right);
                if self.copy_mode {
                    self.copy();
                }
            }
        }
    }

    fn move_left(&mut self) {
        let Some(bound) = self.bound else { return };
        match self.arena.unit(bound).left {
            None => self.finished = true,
            Some(left) => {
                self.bound = Some(left);
                if self.copy_mode {
                    self.copy();
                }
            }
        }
    }

    fn insert(&mut self, base: Nucleotide) {
        let Some(bound) = self.bound else { return };
        let right = match self.arena.unit(bound).right {
            Some(right) => right,
            None => {
                let unit = self.arena.alloc(base);
                self.arena.unit_mut(bound).right = Some(unit);
                self.arena.unit_mut(unit).left = Some(bound);
                // One-directional on purpose: the target keeps whatever
                // complementary pointer it already had.
                let across = self
                    .arena
                    .unit(bound)
                    .complementary
                    .and_then(|comp| self.arena.unit(comp).left);
                self.arena.unit_mut(unit).complementary = across;
                unit
            }
        };
        self.arena.unit_mut(right).base = base;
        self.move_right();
    }

    fn delete(&mut self) {
        let Some(bound) = self.bound else { return };
        let right = self.arena.unit(bound).right;
        if let Some(left) = self.arena.unit(bound).left {
            self.arena.unit_mut(left).right = None;
        }
        if let Some(right) = right {
            self.arena.unit_mut(right).left = None;
        }
        // Only the partner's back-pointer is cleared; a non-mutual link
        // from an Insert clears the partner's pointer to someone else.
        if let Some(comp) = self.arena.unit(bound).complementary {
            self.arena.unit_mut(comp).complementary = None;
        }
        self.arena.release(bound);
        match right {
            None => self.finished = true,
            Some(right) => {
                self.bound = Some(right);
                if self.copy_mode {
                    self.copy();
                }
            }
        }
    }

    fn cut(&mut self) {
        let Some(bound) = self.bound else { return };
        if let Some(right) = self.arena.unit(bound).right {
            self.arena.unit_mut(right).left = None;
            self.arena.unit_mut(bound).right = None;
        }
        // A paired strand breaks at the mirrored offset, which on the
        // antiparallel chain is the complementary unit's left side.
        if let Some(comp) = self.arena.unit(bound).complementary {
            if let Some(comp_left) = self.arena.unit(comp).left {
                self.arena.unit_mut(comp_left).right = None;
                self.arena.unit_mut(comp).left = None;
            }
        }
    }

    fn switch(&mut self) {
        let Some(bound) = self.bound else { return };
        match self.arena.unit(bound).complementary {
            None => self.finished = true,
            Some(comp) => self.bound = Some(comp),
        }
    }

    fn search_right(&mut self, wanted: fn(Nucleotide) -> bool) {
        loop {
            self.move_right();
            if self.finished {
                return;
            }
            let Some(bound) = self.bound else { return };
            if wanted(self.arena.unit(bound).base) {
                return;
            }
        }
    }

    fn search_left(&mut self, wanted: fn(Nucleotide) -> bool) {
        loop {
            self.move_left();
            if self.finished {
                return;
            }
            let Some(bound) = self.bound else { return };
            if wanted(self.arena.unit(bound).base) {
                return;
            }
        }
    }

    fn copy_on(&mut self) {
        self.copy_mode = true;
        self.copy();
    }

    /// Ensures the bound unit has a complementary unit and refreshes that
    /// unit's base. The refresh runs even for a pre-existing partner
    /// because Insert can change a base after the partner was created.
    fn copy(&mut self) {
        let Some(bound) = self.bound else { return };
        let comp = match self.arena.unit(bound).complementary {
            Some(comp) => comp,
            None => {
                let base = self.arena.unit(bound).base;
                let comp = self.arena.alloc(base.complement());
                self.arena.unit_mut(bound).complementary = Some(comp);
                self.arena.unit_mut(comp).complementary = Some(bound);
                // Splice into a complementary chain already grown next door.
                // The chains are antiparallel, so the left neighbor's
                // partner sits to the new unit's right and vice versa.
                if let Some(left) = self.arena.unit(bound).left {
                    if let Some(left_comp) = self.arena.unit(left).complementary {
                        self.arena.unit_mut(comp).right = Some(left_comp);
                        self.arena.unit_mut(left_comp).left = Some(comp);
                    }
                }
                if let Some(right) = self.arena.unit(bound).right {
                    if let Some(right_comp) = self.arena.unit(right).complementary {
                        self.arena.unit_mut(comp).left = Some(right_comp);
                        self.arena.unit_mut(right_comp).right = Some(comp);
                    }
                }
                comp
            }
        };
        let base = self.arena.unit(bound).base;
        self.arena.unit_mut(comp).base = base.complement();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(strand: &str, binding: Nucleotide, commands: &[AminoAcid]) -> Vec<String> {
        run_with(strand, binding, commands, BindingSelector::AlwaysFirst)
    }

    fn run_with(
        strand: &str,
        binding: Nucleotide,
        commands: &[AminoAcid],
        selector: BindingSelector,
    ) -> Vec<String> {
        let enzyme = Enzyme::new(binding, commands.to_vec());
        let strand = Strand::from_text(strand).unwrap();
        let mut out: Vec<String> = enzyme
            .process(&strand, selector)
            .iter()
            .map(|s| s.to_string())
            .collect();
        out.sort();
        out
    }

    #[test]
    fn test_name_format() {
        let enzyme = Enzyme::new(Nucleotide::C, vec![AminoAcid::Rpy, AminoAcid::Ina]);
        assert_eq!(enzyme.name(), "C:rpy-ina");
        assert_eq!(enzyme.to_string(), "C:rpy-ina");
    }

    #[test]
    fn test_no_binding_site_is_a_noop() {
        let out = run("AC", Nucleotide::G, &[AminoAcid::Mvr, AminoAcid::Del]);
        assert_eq!(out, vec!["AC"]);
    }

    #[test]
    fn test_empty_strand_yields_nothing() {
        let out = run("", Nucleotide::A, &[AminoAcid::Mvr]);
        assert!(out.is_empty());
    }

    #[test]
    fn test_cut_produces_two_strands() {
        let out = run("AAGA", Nucleotide::G, &[AminoAcid::Cut]);
        assert_eq!(out, vec!["A", "AAG"]);
    }

    #[test]
    fn test_cut_at_right_end_does_nothing() {
        let out = run("AAG", Nucleotide::G, &[AminoAcid::Cut]);
        assert_eq!(out, vec!["AAG"]);
    }

    #[test]
    fn test_copy_then_cut_releases_reverse_complement() {
        // Copies ACG while walking right, then cuts off the T. The
        // complementary chain reads CGT: the reversed complement of ACG.
        let out = run(
            "ACGT",
            Nucleotide::A,
            &[
                AminoAcid::Cop,
                AminoAcid::Mvr,
                AminoAcid::Mvr,
                AminoAcid::Off,
                AminoAcid::Cut,
            ],
        );
        assert_eq!(out, vec!["ACG", "CGT", "T"]);
    }

    #[test]
    fn test_harvest_is_lossless() {
        let enzyme = Enzyme::new(
            Nucleotide::A,
            vec![
                AminoAcid::Cop,
                AminoAcid::Mvr,
                AminoAcid::Mvr,
                AminoAcid::Off,
                AminoAcid::Cut,
            ],
        );
        let strand = Strand::from_text("ACGT").unwrap();
        let out = enzyme.process(&strand, BindingSelector::AlwaysFirst);
        let total: usize = out.iter().map(|s| s.len()).sum();
        // 4 loaded units plus the 3 created by copying.
        assert_eq!(total, 7);
    }

    #[test]
    fn test_search_moves_at_least_once() {
        // Bound on a pyrimidine already; rpy must still step off it, so the
        // deletion hits position 1, not position 0.
        let out = run("CCC", Nucleotide::C, &[AminoAcid::Rpy, AminoAcid::Del]);
        assert_eq!(out, vec!["C", "C"]);
    }

    #[test]
    fn test_search_falls_off_without_match() {
        let out = run("GAA", Nucleotide::G, &[AminoAcid::Rpy, AminoAcid::Del]);
        assert_eq!(out, vec!["GAA"]);
    }

    #[test]
    fn test_move_off_the_end_finishes() {
        let out = run("A", Nucleotide::A, &[AminoAcid::Mvr, AminoAcid::Del]);
        assert_eq!(out, vec!["A"]);
    }

    #[test]
    fn test_switch_without_complementary_finishes() {
        let out = run("AC", Nucleotide::A, &[AminoAcid::Swi, AminoAcid::Del]);
        assert_eq!(out, vec!["AC"]);
    }

    #[test]
    fn test_switch_rebinds_to_complementary() {
        // After cop the complementary T exists; swi binds it, del removes
        // it, leaving only the primary strand.
        let out = run("AC", Nucleotide::A, &[AminoAcid::Cop, AminoAcid::Swi, AminoAcid::Del]);
        assert_eq!(out, vec!["AC"]);
    }

    #[test]
    fn test_delete_last_unit_yields_nothing() {
        let out = run("A", Nucleotide::A, &[AminoAcid::Del]);
        assert!(out.is_empty());
    }

    #[test]
    fn test_delete_in_copy_mode() {
        // Deleting clears only the partner's back-pointer, and the copy at
        // the new position starts a fresh, unspliced complementary unit.
        let out = run("AC", Nucleotide::A, &[AminoAcid::Cop, AminoAcid::Del]);
        assert_eq!(out, vec!["C", "G", "T"]);
    }

    #[test]
    fn test_insert_overwrites_existing_right_neighbor() {
        let out = run("CA", Nucleotide::C, &[AminoAcid::Int]);
        assert_eq!(out, vec!["CT"]);
    }

    #[test]
    fn test_insert_extends_the_strand() {
        let out = run("AC", Nucleotide::C, &[AminoAcid::Ina]);
        assert_eq!(out, vec!["ACA"]);
    }

    #[test]
    fn test_insert_links_existing_complementary() {
        // Binding the complementary unit and inserting gives the new unit a
        // one-way complementary link to the primary strand's head, and the
        // copy that follows rewrites that head's base.
        let out = run(
            "GAC",
            Nucleotide::A,
            &[AminoAcid::Cop, AminoAcid::Swi, AminoAcid::Ina],
        );
        assert_eq!(out, vec!["TA", "TAC"]);
    }

    #[test]
    fn test_cut_breaks_both_strands() {
        let out = run("AG", Nucleotide::G, &[AminoAcid::Cop, AminoAcid::Mvl, AminoAcid::Cut]);
        assert_eq!(out, vec!["A", "C", "G", "T"]);
    }

    #[test]
    fn test_copy_off_stops_growing_the_pair() {
        let out = run(
            "AAT",
            Nucleotide::A,
            &[AminoAcid::Cop, AminoAcid::Off, AminoAcid::Mvr, AminoAcid::Mvr],
        );
        assert_eq!(out, vec!["AAT", "T"]);
    }

    #[test]
    fn test_process_is_deterministic_with_first_policy() {
        let enzyme = Enzyme::new(
            Nucleotide::A,
            vec![AminoAcid::Cop, AminoAcid::Mvr, AminoAcid::Cut],
        );
        let strand = Strand::from_text("ACAGA").unwrap();
        let first = enzyme.process(&strand, BindingSelector::AlwaysFirst);
        let second = enzyme.process(&strand, BindingSelector::AlwaysFirst);
        assert_eq!(first, second);
    }

    #[test]
    fn test_selector_changes_the_binding_site() {
        assert_eq!(
            run_with("AAAA", Nucleotide::A, &[AminoAcid::Cut], BindingSelector::AlwaysFirst),
            vec!["A", "AAA"]
        );
        assert_eq!(
            run_with("AAAA", Nucleotide::A, &[AminoAcid::Cut], BindingSelector::AlwaysMiddle),
            vec!["A", "AAA"]
        );
        assert_eq!(
            run_with("AAAA", Nucleotide::A, &[AminoAcid::Cut], BindingSelector::NthOrLast(1)),
            vec!["AA", "AA"]
        );
        assert_eq!(
            run_with("AAAA", Nucleotide::A, &[AminoAcid::Cut], BindingSelector::AlwaysLast),
            vec!["AAAA"]
        );
    }
}
