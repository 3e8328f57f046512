use super::result::{RollContribution, RollResult};

/// Renders results for display. Every contribution carries an explicit sign.
pub trait Stringify {
    fn str_contribution(&self, c: &RollContribution) -> String {
        format!("{:+}", c.value)
    }

    fn str_contributions(&self, result: &RollResult) -> String {
        result
            .contributions
            .iter()
            .map(|c| self.str_contribution(c))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// `"{total} <- [{contributions}] {notation}"`
    fn str_roll(&self, result: &RollResult, notation: &str) -> String {
        format!(
            "{} <- [{}] {}",
            result.total,
            self.str_contributions(result),
            notation
        )
    }
}

#[derive(Debug, Copy, Clone, Default)]
pub struct SimpleStringifier;

impl Stringify for SimpleStringifier {}

/// Wraps highlighted rolls in `**bold**`.
#[derive(Debug, Copy, Clone, Default)]
pub struct MarkdownStringifier;

impl Stringify for MarkdownStringifier {
    fn str_contribution(&self, c: &RollContribution) -> String {
        if c.highlighted {
            format!("**{:+}**", c.value)
        } else {
            format!("{:+}", c.value)
        }
    }
}
