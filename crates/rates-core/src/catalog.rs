// File: crates/rates-core/src/catalog.rs
// Summary: Static currency reference table (code -> display name, flag).

/// One catalog row.
///
/// `code` doubles as the dataset key; ISO 4217 where one exists, synthetic
/// for the gold-coin pseudo-currencies (`azadi1`, `emami1`, ...).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CurrencyInfo {
    pub code: &'static str,
    pub name: &'static str,
    /// Flag emoji; coins have none.
    pub flag: Option<&'static str>,
}

/// Full catalog in display order. Some entries quote multiples of the unit
/// ("10 Japanese Yen"); the multiplier is part of the display name only.
pub const CURRENCIES: &[CurrencyInfo] = &[
    CurrencyInfo { code: "usd", name: "US Dollar", flag: Some("\u{1f1fa}\u{1f1f8}") },
    CurrencyInfo { code: "eur", name: "Euro", flag: Some("\u{1f1ea}\u{1f1fa}") },
    CurrencyInfo { code: "gbp", name: "British Pound", flag: Some("\u{1f1ec}\u{1f1e7}") },
    CurrencyInfo { code: "chf", name: "Swiss Franc", flag: Some("\u{1f1e8}\u{1f1ed}") },
    CurrencyInfo { code: "cad", name: "Canadian Dollar", flag: Some("\u{1f1e8}\u{1f1e6}") },
    CurrencyInfo { code: "aud", name: "Australian Dollar", flag: Some("\u{1f1e6}\u{1f1fa}") },
    CurrencyInfo { code: "sek", name: "Swedish Krona", flag: Some("\u{1f1f8}\u{1f1ea}") },
    CurrencyInfo { code: "nok", name: "Norwegian Krone", flag: Some("\u{1f1f3}\u{1f1f4}") },
    CurrencyInfo { code: "rub", name: "Russian Ruble", flag: Some("\u{1f1f7}\u{1f1fa}") },
    CurrencyInfo { code: "thb", name: "Thai Baht", flag: Some("\u{1f1f9}\u{1f1ed}") },
    CurrencyInfo { code: "sgd", name: "Singapore Dollar", flag: Some("\u{1f1f8}\u{1f1ec}") },
    CurrencyInfo { code: "hkd", name: "Hong Kong Dollar", flag: Some("\u{1f1ed}\u{1f1f0}") },
    CurrencyInfo { code: "azn", name: "Azerbaijani Manat", flag: Some("\u{1f1e6}\u{1f1ff}") },
    CurrencyInfo { code: "amd", name: "10 Armenian Dram", flag: Some("\u{1f1e6}\u{1f1f2}") },
    CurrencyInfo { code: "dkk", name: "Danish Krone", flag: Some("\u{1f1e9}\u{1f1f0}") },
    CurrencyInfo { code: "aed", name: "UAE Dirham", flag: Some("\u{1f1e6}\u{1f1ea}") },
    CurrencyInfo { code: "jpy", name: "10 Japanese Yen", flag: Some("\u{1f1ef}\u{1f1f5}") },
    CurrencyInfo { code: "try", name: "Turkish Lira", flag: Some("\u{1f1f9}\u{1f1f7}") },
    CurrencyInfo { code: "cny", name: "Chinese Yuan", flag: Some("\u{1f1e8}\u{1f1f3}") },
    CurrencyInfo { code: "sar", name: "Saudi Riyal", flag: Some("\u{1f1f8}\u{1f1e6}") },
    CurrencyInfo { code: "inr", name: "Indian Rupee", flag: Some("\u{1f1ee}\u{1f1f3}") },
    CurrencyInfo { code: "myr", name: "Malaysian Ringgit", flag: Some("\u{1f1f2}\u{1f1fe}") },
    CurrencyInfo { code: "afn", name: "Afghan Afghani", flag: Some("\u{1f1e6}\u{1f1eb}") },
    CurrencyInfo { code: "kwd", name: "Kuwaiti Dinar", flag: Some("\u{1f1f0}\u{1f1fc}") },
    CurrencyInfo { code: "iqd", name: "100 Iraqi Dinar", flag: Some("\u{1f1ee}\u{1f1f6}") },
    CurrencyInfo { code: "bhd", name: "Bahraini Dinar", flag: Some("\u{1f1e7}\u{1f1ed}") },
    CurrencyInfo { code: "omr", name: "Omani Rial", flag: Some("\u{1f1f4}\u{1f1f2}") },
    CurrencyInfo { code: "qar", name: "Qatari Rial", flag: Some("\u{1f1f6}\u{1f1e6}") },
    CurrencyInfo { code: "azadi1", name: "Azadi Coin", flag: None },
    CurrencyInfo { code: "emami1", name: "Emami Coin", flag: None },
    CurrencyInfo { code: "azadi1_2", name: "\u{bd} Azadi Coin", flag: None },
    CurrencyInfo { code: "azadi1_4", name: "\u{bc} Azadi Coin", flag: None },
    CurrencyInfo { code: "azadi1g", name: "Gerami Coin", flag: None },
];

/// Look up a catalog entry, case-insensitively.
pub fn find(code: &str) -> Option<&'static CurrencyInfo> {
    CURRENCIES.iter().find(|c| c.code.eq_ignore_ascii_case(code))
}

/// Whether `code` names a known currency.
pub fn is_known(code: &str) -> bool {
    find(code).is_some()
}

/// Display name for `code`, falling back to the uppercased code itself.
pub fn display_name(code: &str) -> String {
    match find(code) {
        Some(c) => c.name.to_string(),
        None => code.to_uppercase(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(find("usd").map(|c| c.name), Some("US Dollar"));
        assert_eq!(find("USD").map(|c| c.name), Some("US Dollar"));
        assert!(find("xyz").is_none());
    }

    #[test]
    fn membership_follows_the_table() {
        assert!(is_known("usd"));
        assert!(is_known("AZADI1"));
        assert!(!is_known("xyz"));
        assert!(!is_known(""));
    }

    #[test]
    fn coins_have_no_flag() {
        for code in ["azadi1", "emami1", "azadi1_2", "azadi1_4", "azadi1g"] {
            let info = find(code).unwrap();
            assert!(info.flag.is_none(), "{code} should carry no flag");
        }
    }

    #[test]
    fn unknown_codes_fall_back_to_uppercase() {
        assert_eq!(display_name("eur"), "Euro");
        assert_eq!(display_name("xau"), "XAU");
    }

    #[test]
    fn codes_are_unique_and_lowercase() {
        for (i, c) in CURRENCIES.iter().enumerate() {
            assert_eq!(c.code, c.code.to_lowercase());
            assert!(
                CURRENCIES[i + 1..].iter().all(|o| o.code != c.code),
                "duplicate code {}",
                c.code
            );
        }
        assert_eq!(CURRENCIES.len(), 33);
    }
}
