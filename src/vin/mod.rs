//! VIN validation and decoding.
//!
//! A VIN is 17 characters from an alphabet excluding `I`, `O` and `Q`,
//! with a check character at position 9 computed as a weighted
//! transliteration sum mod 11. A failed check is recorded, not rejected:
//! real-world manufacturers vary in conformance, so the decoder keeps
//! going and leaves hard rejection to the caller.

mod year;

pub use year::{YearDecode, decode_year, year_candidates};

/// Required VIN length.
pub const VIN_LENGTH: usize = 17;

/// Position weights for the check-character sum. Position 8 (the check
/// character itself) carries weight 0.
const WEIGHTS: [u32; VIN_LENGTH] = [8, 7, 6, 5, 4, 3, 2, 10, 0, 9, 8, 7, 6, 5, 4, 3, 2];

/// One row of the World Manufacturer Identifier table.
///
/// Tables handed to [`VinDecoder`] must be sorted by `code` — lookups
/// use binary search, as the built-in table in [`crate::data`] does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WmiEntry {
    /// First three VIN characters.
    pub code: &'static str,
    /// Canonical manufacturer name.
    pub make: &'static str,
    /// Country of manufacture.
    pub country: &'static str,
}

/// Result of decoding a syntactically valid VIN.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VinDecode {
    /// The normalized (uppercased) VIN.
    pub vin: String,
    /// First three characters.
    pub wmi: String,
    /// Manufacturer, when the WMI is known.
    pub make: Option<String>,
    /// Country of manufacture, when the WMI is known.
    pub country: Option<String>,
    /// Chosen model year, when position 10 is a valid year code.
    pub year: Option<i32>,
    /// Every plausible model year across encoding cycles, oldest first.
    pub year_candidates: Vec<i32>,
    /// Whether the computed check character matched position 9.
    pub check_digit_ok: bool,
    /// Whether the year choice rests on convention rather than the
    /// position-7 cycle marker.
    pub ambiguous_cycle: bool,
}

/// Transliterate a VIN character to its check-sum value.
/// `I`, `O`, `Q` have no value — they are not part of the alphabet.
fn transliterate(c: char) -> Option<u32> {
    match c {
        '0'..='9' => Some(c as u32 - '0' as u32),
        'A' => Some(1),
        'B' => Some(2),
        'C' => Some(3),
        'D' => Some(4),
        'E' => Some(5),
        'F' => Some(6),
        'G' => Some(7),
        'H' => Some(8),
        'J' => Some(1),
        'K' => Some(2),
        'L' => Some(3),
        'M' => Some(4),
        'N' => Some(5),
        'P' => Some(7),
        'R' => Some(9),
        'S' => Some(2),
        'T' => Some(3),
        'U' => Some(4),
        'V' => Some(5),
        'W' => Some(6),
        'X' => Some(7),
        'Y' => Some(8),
        'Z' => Some(9),
        _ => None,
    }
}

/// Whether `input` is exactly 17 characters from the VIN alphabet.
/// Case-insensitive; does not check the check character.
pub fn is_valid_vin(input: &str) -> bool {
    let input = input.trim();
    input.chars().count() == VIN_LENGTH
        && input
            .chars()
            .all(|c| transliterate(c.to_ascii_uppercase()).is_some())
}

/// Compute the expected check character for a syntactically valid VIN.
/// Returns `None` when any character is outside the alphabet.
pub fn expected_check_character(vin: &str) -> Option<char> {
    if vin.chars().count() != VIN_LENGTH {
        return None;
    }
    let mut sum = 0u32;
    for (i, c) in vin.chars().enumerate() {
        sum += transliterate(c.to_ascii_uppercase())? * WEIGHTS[i];
    }
    Some(match sum % 11 {
        10 => 'X',
        digit => char::from_digit(digit, 10).unwrap_or('0'),
    })
}

/// Decodes VINs against an injected WMI table and an as-of year.
#[derive(Debug, Clone, Copy)]
pub struct VinDecoder<'a> {
    wmi: &'a [WmiEntry],
    as_of_year: i32,
}

impl<'a> VinDecoder<'a> {
    /// `wmi` must be sorted by code; `as_of_year` caps year decoding at
    /// `as_of_year + 1` (next-model-year VINs circulate early).
    pub fn new(wmi: &'a [WmiEntry], as_of_year: i32) -> Self {
        Self { wmi, as_of_year }
    }

    /// Decode `input` as a VIN.
    ///
    /// Returns `None` only for malformed input (wrong length or alphabet);
    /// no partial decoding of malformed VINs is attempted. A check-digit
    /// mismatch or unknown WMI still decodes.
    pub fn decode(&self, input: &str) -> Option<VinDecode> {
        let vin = input.trim().to_ascii_uppercase();
        if !is_valid_vin(&vin) {
            return None;
        }
        let chars: Vec<char> = vin.chars().collect();

        let check_digit_ok = expected_check_character(&vin) == Some(chars[8]);

        let wmi: String = chars[..3].iter().collect();
        let entry = self
            .wmi
            .binary_search_by(|e| e.code.cmp(wmi.as_str()))
            .ok()
            .map(|i| self.wmi[i]);

        let year = decode_year(chars[9], chars[6].is_ascii_alphabetic(), self.as_of_year + 1);

        Some(VinDecode {
            vin,
            wmi,
            make: entry.map(|e| e.make.to_string()),
            country: entry.map(|e| e.country.to_string()),
            year: year.year,
            year_candidates: year.candidates,
            check_digit_ok,
            ambiguous_cycle: year.ambiguous,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static TEST_WMI: &[WmiEntry] = &[
        WmiEntry {
            code: "1HG",
            make: "Honda",
            country: "United States",
        },
        WmiEntry {
            code: "JN1",
            make: "Nissan",
            country: "Japan",
        },
    ];

    fn decoder() -> VinDecoder<'static> {
        VinDecoder::new(TEST_WMI, 2026)
    }

    #[test]
    fn rejects_wrong_length() {
        assert!(decoder().decode("JN1CV6AP4FM12345").is_none());
        assert!(decoder().decode("JN1CV6AP4FM1234567").is_none());
        assert!(decoder().decode("").is_none());
    }

    #[test]
    fn rejects_excluded_letters() {
        assert!(!is_valid_vin("JN1CV6AP4FM12345O"));
        assert!(!is_valid_vin("IN1CV6AP4FM123456"));
        assert!(!is_valid_vin("JN1CV6QP4FM123456"));
    }

    #[test]
    fn known_good_check_digit() {
        // Well-known reference VIN: 2003 Honda Accord.
        assert_eq!(expected_check_character("1HGCM82633A004352"), Some('3'));
        let decode = decoder().decode("1HGCM82633A004352").unwrap();
        assert!(decode.check_digit_ok);
        assert_eq!(decode.make.as_deref(), Some("Honda"));
        assert_eq!(decode.year, Some(2003));
    }

    #[test]
    fn check_mismatch_still_decodes() {
        // Expected check character for this VIN is '7', not '4'.
        let decode = decoder().decode("JN1CV6AP4FM123456").unwrap();
        assert!(!decode.check_digit_ok);
        assert_eq!(decode.make.as_deref(), Some("Nissan"));
        assert_eq!(decode.country.as_deref(), Some("Japan"));
        // Position 7 is 'A' (alphabetic), so 'F' reads as the 2010+ cycle.
        assert_eq!(decode.year, Some(2015));
        assert!(!decode.ambiguous_cycle);
    }

    #[test]
    fn unknown_wmi_is_partial_result() {
        let decode = decoder().decode("ZZZCV6AP4FM123456").unwrap();
        assert!(decode.make.is_none());
        assert!(decode.country.is_none());
        assert_eq!(decode.year, Some(2015));
    }

    #[test]
    fn lowercase_input_accepted() {
        let decode = decoder().decode("jn1cv6ap4fm123456").unwrap();
        assert_eq!(decode.vin, "JN1CV6AP4FM123456");
        assert_eq!(decode.make.as_deref(), Some("Nissan"));
    }

    #[test]
    fn digit_pos7_reads_earlier_cycle() {
        // Position 7 = '2' (digit) and year code 'M' → 1991, flagged ambiguous
        // because 2021 also fits under the cap.
        let decode = decoder().decode("JN1CV62P4MM123456").unwrap();
        assert_eq!(decode.year, Some(1991));
        assert_eq!(decode.year_candidates, vec![1991, 2021]);
        assert!(decode.ambiguous_cycle);
    }
}
