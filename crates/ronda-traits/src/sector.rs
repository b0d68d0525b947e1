//! Sector classification for listed companies.
//!
//! The engine branches its valuation method on the sector of the company
//! under analysis. Classification is an explicit enumerated lookup of known
//! stock identifiers; anything unmapped falls back to [`Sector::Other`].

use serde::{Deserialize, Serialize};

/// Industry sector of a listed company.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sector {
    /// Consumer staples and discretionary.
    Consumer,
    /// Chemicals and materials.
    Chemicals,
    /// Automotive manufacturers.
    Automotive,
    /// Technology hardware, displays, telecom equipment.
    Technology,
    /// Banks, insurers, brokerages.
    Finance,
    /// Oil, gas, and power.
    Energy,
    /// Everything not covered by a dedicated sector.
    #[default]
    Other,
}

impl Sector {
    /// Classify a stock identifier into a sector.
    ///
    /// The mapping is a fixed table of known identifiers; unmapped symbols
    /// classify as [`Sector::Other`].
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Self {
        match symbol {
            "600519" => Self::Consumer,
            "600309" => Self::Chemicals,
            "002594" => Self::Automotive,
            "000100" | "000725" | "000063" => Self::Technology,
            _ => Self::Other,
        }
    }

    /// Advisory upper bound on the terminal growth rate for this sector.
    ///
    /// These caps are informational; the engine clamps growth against the
    /// caller-configured rate, not against this table.
    #[must_use]
    pub const fn growth_limit(&self) -> f64 {
        match self {
            Self::Technology => 0.05,
            Self::Consumer => 0.04,
            Self::Energy => 0.02,
            Self::Chemicals | Self::Automotive | Self::Finance | Self::Other => 0.03,
        }
    }

    /// Stable string label for this sector.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Consumer => "consumer",
            Self::Chemicals => "chemicals",
            Self::Automotive => "automotive",
            Self::Technology => "technology",
            Self::Finance => "finance",
            Self::Energy => "energy",
            Self::Other => "other",
        }
    }
}

impl std::fmt::Display for Sector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_symbols() {
        assert_eq!(Sector::from_symbol("600519"), Sector::Consumer);
        assert_eq!(Sector::from_symbol("600309"), Sector::Chemicals);
        assert_eq!(Sector::from_symbol("002594"), Sector::Automotive);
        assert_eq!(Sector::from_symbol("000100"), Sector::Technology);
        assert_eq!(Sector::from_symbol("000725"), Sector::Technology);
        assert_eq!(Sector::from_symbol("000063"), Sector::Technology);
    }

    #[test]
    fn test_unmapped_symbol_is_other() {
        assert_eq!(Sector::from_symbol("999999"), Sector::Other);
        assert_eq!(Sector::from_symbol(""), Sector::Other);
    }

    #[test]
    fn test_growth_limits() {
        assert_eq!(Sector::Technology.growth_limit(), 0.05);
        assert_eq!(Sector::Consumer.growth_limit(), 0.04);
        assert_eq!(Sector::Energy.growth_limit(), 0.02);
        assert_eq!(Sector::Other.growth_limit(), 0.03);
    }

    #[test]
    fn test_display() {
        assert_eq!(Sector::Technology.to_string(), "technology");
        assert_eq!(Sector::Other.to_string(), "other");
    }
}
