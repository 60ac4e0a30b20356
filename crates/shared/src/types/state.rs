//! Indian states and union territories with GST state codes.
//!
//! A document's place of supply arrives as a free-form string: a state
//! name ("Maharashtra"), a two-digit GST code ("27"), or a two-letter
//! code ("MH"). This table resolves all three spellings.

use thiserror::Error;

/// Error parsing a state from a string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateParseError {
    /// The string matches no known state name or code.
    #[error("Unknown state: {0}")]
    Unknown(String),
}

/// Macro to generate the state table: variant, GST code, two-letter
/// code, display name.
macro_rules! states {
    ($(($variant:ident, $code:literal, $alpha:literal, $name:literal)),+ $(,)?) => {
        /// An Indian state or union territory in the GST regime.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum State {
            $(
                #[doc = $name]
                $variant,
            )+
        }

        impl State {
            /// All states and union territories, in GST code order.
            pub const ALL: &'static [State] = &[$(State::$variant,)+];

            /// Returns the two-digit GST state code (e.g., "27").
            #[must_use]
            pub const fn gst_code(&self) -> &'static str {
                match self {
                    $(Self::$variant => $code,)+
                }
            }

            /// Returns the two-letter state code (e.g., "MH").
            #[must_use]
            pub const fn alpha_code(&self) -> &'static str {
                match self {
                    $(Self::$variant => $alpha,)+
                }
            }

            /// Returns the display name (e.g., "Maharashtra").
            #[must_use]
            pub const fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant => $name,)+
                }
            }
        }
    };
}

states! {
    (JammuAndKashmir, "01", "JK", "Jammu and Kashmir"),
    (HimachalPradesh, "02", "HP", "Himachal Pradesh"),
    (Punjab, "03", "PB", "Punjab"),
    (Chandigarh, "04", "CH", "Chandigarh"),
    (Uttarakhand, "05", "UT", "Uttarakhand"),
    (Haryana, "06", "HR", "Haryana"),
    (Delhi, "07", "DL", "Delhi"),
    (Rajasthan, "08", "RJ", "Rajasthan"),
    (UttarPradesh, "09", "UP", "Uttar Pradesh"),
    (Bihar, "10", "BR", "Bihar"),
    (Sikkim, "11", "SK", "Sikkim"),
    (ArunachalPradesh, "12", "AR", "Arunachal Pradesh"),
    (Nagaland, "13", "NL", "Nagaland"),
    (Manipur, "14", "MN", "Manipur"),
    (Mizoram, "15", "MZ", "Mizoram"),
    (Tripura, "16", "TR", "Tripura"),
    (Meghalaya, "17", "ML", "Meghalaya"),
    (Assam, "18", "AS", "Assam"),
    (WestBengal, "19", "WB", "West Bengal"),
    (Jharkhand, "20", "JH", "Jharkhand"),
    (Odisha, "21", "OD", "Odisha"),
    (Chhattisgarh, "22", "CG", "Chhattisgarh"),
    (MadhyaPradesh, "23", "MP", "Madhya Pradesh"),
    (Gujarat, "24", "GJ", "Gujarat"),
    (DadraNagarHaveliDamanDiu, "26", "DH", "Dadra and Nagar Haveli and Daman and Diu"),
    (Maharashtra, "27", "MH", "Maharashtra"),
    (Karnataka, "29", "KA", "Karnataka"),
    (Goa, "30", "GA", "Goa"),
    (Lakshadweep, "31", "LD", "Lakshadweep"),
    (Kerala, "32", "KL", "Kerala"),
    (TamilNadu, "33", "TN", "Tamil Nadu"),
    (Puducherry, "34", "PY", "Puducherry"),
    (AndamanAndNicobarIslands, "35", "AN", "Andaman and Nicobar Islands"),
    (Telangana, "36", "TG", "Telangana"),
    (AndhraPradesh, "37", "AP", "Andhra Pradesh"),
    (Ladakh, "38", "LA", "Ladakh"),
}

impl State {
    /// Returns true if a raw place-of-supply string denotes this state
    /// by name, GST code, or two-letter code.
    ///
    /// Names and two-letter codes compare case-insensitively; GST codes
    /// compare exactly ("7" is not "07").
    #[must_use]
    pub fn matches(&self, raw: &str) -> bool {
        let raw = raw.trim();
        raw == self.gst_code()
            || raw.eq_ignore_ascii_case(self.alpha_code())
            || raw.eq_ignore_ascii_case(self.name())
    }
}

impl std::fmt::Display for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for State {
    type Err = StateParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|state| state.matches(s))
            .ok_or_else(|| StateParseError::Unknown(s.trim().to_string()))
    }
}
