//! Concrete branch rules for integer trees
//!
//! The builders take arbitrary closures; the CLI needs branch functions
//! it can parse from flags. A rule is `mul:<k>` or `add:<k>` over `i64`,
//! with the stock defaults `mul:4` (left) and `add:1` (right).

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Errors from parsing a branch rule string.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseRuleError {
    /// Input was not of the form `<op>:<operand>`.
    #[error("expected '<op>:<operand>', got '{0}'")]
    MissingSeparator(String),

    /// Operation name was neither `mul` nor `add`.
    #[error("unknown rule operation '{0}' (expected 'mul' or 'add')")]
    UnknownOperation(String),

    /// Operand did not parse as an integer.
    #[error("invalid rule operand '{0}'")]
    InvalidOperand(String),
}

/// Rule deriving a child value from its parent's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BranchRule {
    /// Child = parent × factor.
    Mul(i64),

    /// Child = parent + addend.
    Add(i64),
}

impl BranchRule {
    /// Stock default for the left branch: `x → 4x`.
    pub fn default_left() -> Self {
        BranchRule::Mul(4)
    }

    /// Stock default for the right branch: `x → x + 1`.
    pub fn default_right() -> Self {
        BranchRule::Add(1)
    }

    /// Apply the rule to a parent value.
    ///
    /// Plain `i64` arithmetic; overflow behaves as the build profile
    /// dictates, the same caller responsibility as tree memory.
    #[inline]
    pub fn apply(&self, value: i64) -> i64 {
        match self {
            BranchRule::Mul(factor) => value * factor,
            BranchRule::Add(addend) => value + addend,
        }
    }
}

impl FromStr for BranchRule {
    type Err = ParseRuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (op, operand) = s
            .split_once(':')
            .ok_or_else(|| ParseRuleError::MissingSeparator(s.to_string()))?;
        let operand: i64 = operand
            .trim()
            .parse()
            .map_err(|_| ParseRuleError::InvalidOperand(operand.to_string()))?;
        match op.trim() {
            "mul" => Ok(BranchRule::Mul(operand)),
            "add" => Ok(BranchRule::Add(operand)),
            other => Err(ParseRuleError::UnknownOperation(other.to_string())),
        }
    }
}

impl fmt::Display for BranchRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BranchRule::Mul(factor) => write!(f, "mul:{factor}"),
            BranchRule::Add(addend) => write!(f, "add:{addend}"),
        }
    }
}
