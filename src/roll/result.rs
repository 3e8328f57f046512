use crate::common::Int;

/// The signed value of one rolled die or one flat term.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct RollContribution {
    pub value: Int,
    /// Set when a die landed on 1 or on its highest face.
    pub highlighted: bool,
}

impl RollContribution {
    pub fn die(value: Int, highlighted: bool) -> Self {
        Self { value, highlighted }
    }

    pub fn flat(value: Int) -> Self {
        Self {
            value,
            highlighted: false,
        }
    }
}

#[derive(Debug, Clone, Eq, PartialEq, Default)]
pub struct RollResult {
    pub total: Int,
    /// In term order, then in roll order within a dice term.
    pub contributions: Vec<RollContribution>,
}

impl RollResult {
    pub fn is_empty(&self) -> bool {
        self.contributions.is_empty()
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct InitiativeOutcome {
    pub total: Int,
    /// The value of the last lone d20 in the notation, or 0 if there was none.
    pub isolated_d20: Int,
    /// Sum of the signed flat terms.
    pub modifier_sum: Int,
}

impl InitiativeOutcome {
    pub fn is_natural_20(&self) -> bool {
        self.isolated_d20 == 20
    }
}
