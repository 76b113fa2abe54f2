use anyhow::{Result, anyhow};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Strategy for picking the initial binding site when several units carry
/// the enzyme's binding base. Hofstadter leaves this choice open, so it is
/// a caller-supplied value rather than engine state; `Random` is the only
/// source of nondeterminism in the whole engine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BindingSelector {
    #[default]
    AlwaysFirst,
    AlwaysLast,
    AlwaysMiddle,
    Random,
    NthOrLast(usize),
}

impl BindingSelector {
    /// Resolves a policy name as used on the command line. `n` is only
    /// meaningful for `nth`.
    pub fn from_name(name: &str, n: usize) -> Result<Self> {
        match name {
            "first" => Ok(BindingSelector::AlwaysFirst),
            "last" => Ok(BindingSelector::AlwaysLast),
            "middle" => Ok(BindingSelector::AlwaysMiddle),
            "random" => Ok(BindingSelector::Random),
            "nth" => Ok(BindingSelector::NthOrLast(n)),
            other => Err(anyhow!("Unknown binding selection mode '{other}'")),
        }
    }

    /// Picks an index into a list of `count` candidates. `count` must be
    /// greater than zero; the engine only calls this with candidates present.
    pub fn choose(&self, count: usize) -> usize {
        match self {
            BindingSelector::AlwaysFirst => 0,
            BindingSelector::AlwaysLast => count - 1,
            BindingSelector::AlwaysMiddle => count / 2,
            BindingSelector::Random => rand::thread_rng().gen_range(0..count),
            BindingSelector::NthOrLast(n) => (*n).min(count - 1),
        }
    }
}
