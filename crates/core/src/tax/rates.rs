//! Static GST rate table.
//!
//! Tax codes are a fixed enumeration: exempt, plus GST and IGST at the
//! standard slabs (0%, 5%, 12%, 18%, 28%). Selecting a code populates a
//! line item's tax rate and tax name; nothing mutates this table at
//! runtime.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::TaxError;

/// A tax code from the static rate table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaxCode {
    /// No tax (0%).
    #[serde(rename = "none")]
    None,
    /// GST at 0%.
    #[serde(rename = "GST0")]
    Gst0,
    /// GST at 5%.
    #[serde(rename = "GST5")]
    Gst5,
    /// GST at 12%.
    #[serde(rename = "GST12")]
    Gst12,
    /// GST at 18%.
    #[serde(rename = "GST18")]
    Gst18,
    /// GST at 28%.
    #[serde(rename = "GST28")]
    Gst28,
    /// IGST at 0%.
    #[serde(rename = "IGST0")]
    Igst0,
    /// IGST at 5%.
    #[serde(rename = "IGST5")]
    Igst5,
    /// IGST at 12%.
    #[serde(rename = "IGST12")]
    Igst12,
    /// IGST at 18%.
    #[serde(rename = "IGST18")]
    Igst18,
    /// IGST at 28%.
    #[serde(rename = "IGST28")]
    Igst28,
}

impl TaxCode {
    /// Every code in the table, in menu order.
    pub const ALL: &'static [TaxCode] = &[
        TaxCode::None,
        TaxCode::Gst0,
        TaxCode::Gst5,
        TaxCode::Gst12,
        TaxCode::Gst18,
        TaxCode::Gst28,
        TaxCode::Igst0,
        TaxCode::Igst5,
        TaxCode::Igst12,
        TaxCode::Igst18,
        TaxCode::Igst28,
    ];

    /// Returns the percentage rate for this code.
    #[must_use]
    pub fn rate(&self) -> Decimal {
        let percent: u8 = match self {
            Self::None | Self::Gst0 | Self::Igst0 => 0,
            Self::Gst5 | Self::Igst5 => 5,
            Self::Gst12 | Self::Igst12 => 12,
            Self::Gst18 | Self::Igst18 => 18,
            Self::Gst28 | Self::Igst28 => 28,
        };
        Decimal::from(percent)
    }

    /// Returns the wire name for this code (e.g., "GST18").
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Gst0 => "GST0",
            Self::Gst5 => "GST5",
            Self::Gst12 => "GST12",
            Self::Gst18 => "GST18",
            Self::Gst28 => "GST28",
            Self::Igst0 => "IGST0",
            Self::Igst5 => "IGST5",
            Self::Igst12 => "IGST12",
            Self::Igst18 => "IGST18",
            Self::Igst28 => "IGST28",
        }
    }

    /// Returns true for the IGST family of codes.
    #[must_use]
    pub const fn is_integrated(&self) -> bool {
        matches!(
            self,
            Self::Igst0 | Self::Igst5 | Self::Igst12 | Self::Igst18 | Self::Igst28
        )
    }
}

impl std::fmt::Display for TaxCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for TaxCode {
    type Err = TaxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|code| code.as_str() == s.trim())
            .ok_or_else(|| TaxError::UnknownCode(s.trim().to_string()))
    }
}
