use std::fmt;
use std::str::FromStr;

use crate::error::{FormatError, GeoError};

/// The type of boolean operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BooleanOp {
    /// A ∩ B (`intersect`).
    Intersect,
    /// A − B (`cut1`).
    Subtract,
    /// B − A (`cut2`).
    ReverseSubtract,
    /// A ∪ B (`sum`).
    Union,
}

impl BooleanOp {
    /// Whether a face whose interior sample lies in A (`in_a`) and in B
    /// (`in_b`) belongs to the result.
    ///
    /// | in A | in B | Intersect | Subtract | ReverseSubtract | Union |
    /// |------|------|-----------|----------|-----------------|-------|
    /// | yes  | yes  | keep      |          |                 | keep  |
    /// | yes  | no   |           | keep     |                 | keep  |
    /// | no   | yes  |           |          | keep            | keep  |
    #[must_use]
    pub fn keeps(self, in_a: bool, in_b: bool) -> bool {
        match self {
            BooleanOp::Intersect => in_a && in_b,
            BooleanOp::Subtract => in_a && !in_b,
            BooleanOp::ReverseSubtract => !in_a && in_b,
            BooleanOp::Union => in_a || in_b,
        }
    }

    /// Short mode name: `intersect`, `cut1`, `cut2` or `sum`.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            BooleanOp::Intersect => "intersect",
            BooleanOp::Subtract => "cut1",
            BooleanOp::ReverseSubtract => "cut2",
            BooleanOp::Union => "sum",
        }
    }
}

impl fmt::Display for BooleanOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BooleanOp {
    type Err = GeoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "intersect" => Ok(BooleanOp::Intersect),
            "cut1" => Ok(BooleanOp::Subtract),
            "cut2" => Ok(BooleanOp::ReverseSubtract),
            "sum" => Ok(BooleanOp::Union),
            _ => Err(FormatError::UnknownOperation(s.to_owned()).into()),
        }
    }
}
