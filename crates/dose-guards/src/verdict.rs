use serde::{Deserialize, Serialize};
use std::fmt;

/// Compliance of an activity's product usage. Variants are declared
/// best-to-worst so the derived `Ord` is the aggregation order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Verdict {
    Optimal,
    Acceptable,
    NonCompliant,
}

impl Verdict {
    pub fn worst(self, other: Verdict) -> Verdict {
        self.max(other)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Verdict::Optimal => "optimal",
            Verdict::Acceptable => "acceptable",
            Verdict::NonCompliant => "non_compliant",
        }
    }

    pub fn badge(self) -> Badge {
        match self {
            Verdict::Optimal => Badge {
                color: BadgeColor::Green,
                label: "Optimo",
            },
            Verdict::Acceptable => Badge {
                color: BadgeColor::Yellow,
                label: "Aceptable",
            },
            Verdict::NonCompliant => Badge {
                color: BadgeColor::Red,
                label: "No cumple",
            },
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BadgeColor {
    Green,
    Yellow,
    Red,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Badge {
    pub color: BadgeColor,
    pub label: &'static str,
}
