//! Unit codes carried at the tail of HomeSeer status strings.
//!
//! A multilevel device reports its reading as free text like `"21.5 C"` or
//! `"45 %"`. The final whitespace-delimited token names the unit; everything
//! else is up to the consumer. Tokens are matched exactly, case included,
//! because that is what the controller emits.

/// A unit token recognised in a device status string.
///
/// Some units appear under two spellings depending on the reporting device
/// (`A`/`Amperes`, `V`/`Volts`, `W`/`Watts`). Both are kept as distinct
/// codes so a record of what the controller sent survives parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitCode {
    Lux,
    Celsius,
    Fahrenheit,
    Percentage,
    Ampere,
    Amperes,
    Kilowatt,
    KilowattHour,
    Volt,
    Volts,
    Watt,
    Watts,
}

impl UnitCode {
    /// Every recognised code, in declaration order.
    pub const ALL: [Self; 12] = [
        Self::Lux,
        Self::Celsius,
        Self::Fahrenheit,
        Self::Percentage,
        Self::Ampere,
        Self::Amperes,
        Self::Kilowatt,
        Self::KilowattHour,
        Self::Volt,
        Self::Volts,
        Self::Watt,
        Self::Watts,
    ];

    /// Match a status token exactly against the known code set.
    #[must_use]
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "Lux" => Some(Self::Lux),
            "C" => Some(Self::Celsius),
            "F" => Some(Self::Fahrenheit),
            "%" => Some(Self::Percentage),
            "A" => Some(Self::Ampere),
            "Amperes" => Some(Self::Amperes),
            "kW" => Some(Self::Kilowatt),
            "kWh" => Some(Self::KilowattHour),
            "V" => Some(Self::Volt),
            "Volts" => Some(Self::Volts),
            "W" => Some(Self::Watt),
            "Watts" => Some(Self::Watts),
            _ => None,
        }
    }

    /// The token as the controller spells it.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Lux => "Lux",
            Self::Celsius => "C",
            Self::Fahrenheit => "F",
            Self::Percentage => "%",
            Self::Ampere => "A",
            Self::Amperes => "Amperes",
            Self::Kilowatt => "kW",
            Self::KilowattHour => "kWh",
            Self::Volt => "V",
            Self::Volts => "Volts",
            Self::Watt => "W",
            Self::Watts => "Watts",
        }
    }
}

impl std::fmt::Display for UnitCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.token())
    }
}

/// Derive the unit code from a device status string.
///
/// Takes the final whitespace-delimited token and matches it exactly.
/// Returns `None` for an empty status or an unrecognised token.
#[must_use]
pub fn uom_from_status(status: &str) -> Option<UnitCode> {
    status.split_whitespace().last().and_then(UnitCode::parse)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_every_token_back_to_its_code() {
        for code in UnitCode::ALL {
            assert_eq!(UnitCode::parse(code.token()), Some(code));
        }
    }

    #[test]
    fn should_display_each_code_as_the_controller_spells_it() {
        assert_eq!(UnitCode::Celsius.to_string(), "C");
        assert_eq!(UnitCode::Percentage.to_string(), "%");
        assert_eq!(UnitCode::Ampere.to_string(), "A");
        assert_eq!(UnitCode::Amperes.to_string(), "Amperes");
    }

    #[test]
    fn should_derive_unit_from_final_token() {
        assert_eq!(uom_from_status("21.5 C"), Some(UnitCode::Celsius));
        assert_eq!(uom_from_status("45 %"), Some(UnitCode::Percentage));
        assert_eq!(uom_from_status("1.5 kWh"), Some(UnitCode::KilowattHour));
        assert_eq!(uom_from_status("120 Volts"), Some(UnitCode::Volts));
    }

    #[test]
    fn should_return_none_for_unknown_token() {
        assert_eq!(uom_from_status("21.5 hPa"), None);
        assert_eq!(uom_from_status("Idle"), None);
    }

    #[test]
    fn should_return_none_for_empty_status() {
        assert_eq!(uom_from_status(""), None);
        assert_eq!(uom_from_status("   "), None);
    }

    #[test]
    fn should_match_case_sensitively() {
        assert_eq!(uom_from_status("21.5 c"), None);
        assert_eq!(uom_from_status("3 lux"), None);
    }

    #[test]
    fn should_ignore_leading_tokens() {
        assert_eq!(uom_from_status("reading is 3 Lux"), Some(UnitCode::Lux));
    }
}
