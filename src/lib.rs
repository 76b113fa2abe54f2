pub mod amino_acid;
pub mod binding;
pub mod enzyme;
pub mod nucleotide;
pub mod ribosome;
pub mod strand;
pub mod unit_arena;

pub use binding::BindingSelector;
pub use enzyme::Enzyme;
pub use nucleotide::Nucleotide;
pub use strand::Strand;
