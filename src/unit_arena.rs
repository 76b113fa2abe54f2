use crate::nucleotide::Nucleotide;
use crate::strand::Strand;

/// Stable handle to a unit slot. Slots are never reused within a run, so a
/// handle stays valid for the run's lifetime even after the unit is
/// detached from its chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnitId(usize);

/// One position of an expanded strand: a base plus its chain links.
///
/// Left/right links are kept mutual except where an enzyme command
/// deliberately leaves them one-sided; the complementary link is not
/// guaranteed mutual at all (see `Enzyme::insert`).
#[derive(Clone, Debug)]
pub struct Unit {
    pub base: Nucleotide,
    pub left: Option<UnitId>,
    pub right: Option<UnitId>,
    pub complementary: Option<UnitId>,
}

/// Owns every unit created during one enzyme run. The per-slot `in_run`
/// flag doubles as the run-scoped collection: allocation sets it, deletion
/// clears it, and harvest drains it, so detached units cannot leak before
/// they are turned back into strands.
#[derive(Debug, Default)]
pub struct UnitArena {
    units: Vec<Unit>,
    in_run: Vec<bool>,
}

impl UnitArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Expands a strand into a left/right-linked chain, one unit per base,
    /// in order.
    pub fn from_strand(strand: &Strand) -> Self {
        let mut arena = Self::new();
        let mut previous: Option<UnitId> = None;
        for &base in strand.iter() {
            let id = arena.alloc(base);
            if let Some(prev) = previous {
                arena.units[prev.0].right = Some(id);
                arena.units[id.0].left = Some(prev);
            }
            previous = Some(id);
        }
        arena
    }

    pub fn alloc(&mut self, base: Nucleotide) -> UnitId {
        let id = UnitId(self.units.len());
        self.units.push(Unit {
            base,
            left: None,
            right: None,
            complementary: None,
        });
        self.in_run.push(true);
        id
    }

    #[inline(always)]
    pub fn unit(&self, id: UnitId) -> &Unit {
        &self.units[id.0]
    }

    #[inline(always)]
    pub fn unit_mut(&mut self, id: UnitId) -> &mut Unit {
        &mut self.units[id.0]
    }

    /// Drops a unit from the run collection. Its slot (and any links still
    /// pointing at it) remain readable; it just won't be harvested.
    pub fn release(&mut self, id: UnitId) {
        self.in_run[id.0] = false;
    }

    /// Number of units still waiting to be harvested.
    pub fn live_count(&self) -> usize {
        self.in_run.iter().filter(|live| **live).count()
    }

    /// Units still in the run whose base matches, in creation order — which
    /// for the loaded strand is left-to-right position order.
    pub fn candidates(&self, base: Nucleotide) -> Vec<UnitId> {
        self.units
            .iter()
            .enumerate()
            .filter(|(i, unit)| self.in_run[*i] && unit.base == base)
            .map(|(i, _)| UnitId(i))
            .collect()
    }

    /// Drains the run collection into strands: take the lowest live slot,
    /// walk left to its chain head, then collect bases rightwards, clearing
    /// each visited slot. Complementary links are never followed, so a
    /// complementary chain comes out as its own strand.
    pub fn harvest(&mut self) -> Vec<Strand> {
        let mut strands = vec![];
        for start in 0..self.units.len() {
            if !self.in_run[start] {
                continue;
            }
            let mut cursor = UnitId(start);
            while let Some(left) = self.units[cursor.0].left {
                cursor = left;
            }
            let mut bases = vec![];
            loop {
                bases.push(self.units[cursor.0].base);
                self.in_run[cursor.0] = false;
                match self.units[cursor.0].right {
                    Some(right) => cursor = right,
                    None => break,
                }
            }
            strands.push(Strand::new(bases));
        }
        strands
    }
}
