// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

use std::fmt;

/// Sign class of a period-over-period change.
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Increase,
    Decrease,
    NoChange,
}

impl Direction {
    /// Classifies a change by strict sign. Zero (and NaN) is `NoChange`.
    pub fn of(change: f64) -> Self {
        if change > 0.0 {
            Self::Increase
        } else if change < 0.0 {
            Self::Decrease
        } else {
            Self::NoChange
        }
    }

    /// Past-tense verb phrase used in main clauses.
    pub fn verb(self) -> &'static str {
        match self {
            Self::Increase => "increased",
            Self::Decrease => "decreased",
            Self::NoChange => "did not change",
        }
    }

    /// Plural noun used in "months of ..." phrases.
    pub fn plural_noun(self) -> &'static str {
        match self {
            Self::Increase => "increases",
            Self::Decrease => "decreases",
            Self::NoChange => "no changes",
        }
    }

    pub fn is_nonzero(self) -> bool {
        !matches!(self, Self::NoChange)
    }

    /// True only for an increase against a decrease (either order).
    pub fn is_opposite(self, other: Self) -> bool {
        matches!(
            (self, other),
            (Self::Increase, Self::Decrease) | (Self::Decrease, Self::Increase)
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Increase => "increase",
            Self::Decrease => "decrease",
            Self::NoChange => "no_change",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pairwise differences `values[i] - values[i - 1]`; one shorter than the input.
pub fn changes(values: &[f64]) -> Vec<f64> {
    values.windows(2).map(|pair| pair[1] - pair[0]).collect()
}

#[cfg(test)]
mod tests {
    use super::{changes, Direction};

    #[test]
    fn direction_uses_strict_sign_without_tolerance() {
        assert_eq!(Direction::of(1e-300), Direction::Increase);
        assert_eq!(Direction::of(-1e-300), Direction::Decrease);
        assert_eq!(Direction::of(0.0), Direction::NoChange);
        assert_eq!(Direction::of(-0.0), Direction::NoChange);
        assert_eq!(Direction::of(f64::NAN), Direction::NoChange);
    }

    #[test]
    fn renderers_cover_each_context() {
        assert_eq!(Direction::Increase.verb(), "increased");
        assert_eq!(Direction::Decrease.verb(), "decreased");
        assert_eq!(Direction::NoChange.verb(), "did not change");
        assert_eq!(Direction::Increase.plural_noun(), "increases");
        assert_eq!(Direction::Decrease.plural_noun(), "decreases");
    }

    #[test]
    fn no_change_is_never_opposite() {
        assert!(Direction::Increase.is_opposite(Direction::Decrease));
        assert!(Direction::Decrease.is_opposite(Direction::Increase));
        assert!(!Direction::Increase.is_opposite(Direction::NoChange));
        assert!(!Direction::NoChange.is_opposite(Direction::Decrease));
        assert!(!Direction::Increase.is_opposite(Direction::Increase));
    }

    #[test]
    fn changes_are_one_shorter_than_input() {
        assert_eq!(changes(&[1.0, 2.0, 4.0, 3.0, 2.0]), vec![1.0, 2.0, -1.0, -1.0]);
        assert!(changes(&[5.0]).is_empty());
        assert!(changes(&[]).is_empty());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn direction_serializes_snake_case() {
        let encoded = serde_json::to_string(&Direction::NoChange).expect("should serialize");
        assert_eq!(encoded, "\"no_change\"");
        let decoded: Direction = serde_json::from_str("\"increase\"").expect("should deserialize");
        assert_eq!(decoded, Direction::Increase);
    }
}
