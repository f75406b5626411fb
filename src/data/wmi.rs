//! Built-in World Manufacturer Identifier table.
//!
//! Covers the manufacturers the import pipeline actually sees: Japanese,
//! German, British, Italian, Swedish, Korean, and North American marques.
//! Sorted by code for binary search.

use crate::vin::WmiEntry;

/// WMI rows, sorted by code.
pub static WMI_TABLE: &[WmiEntry] = &[
    WmiEntry { code: "1FA", make: "Ford", country: "United States" },
    WmiEntry { code: "1G1", make: "Chevrolet", country: "United States" },
    WmiEntry { code: "1HG", make: "Honda", country: "United States" },
    WmiEntry { code: "2HG", make: "Honda", country: "Canada" },
    WmiEntry { code: "2T1", make: "Toyota", country: "Canada" },
    WmiEntry { code: "3VW", make: "Volkswagen", country: "Mexico" },
    WmiEntry { code: "4S3", make: "Subaru", country: "United States" },
    WmiEntry { code: "4US", make: "BMW", country: "United States" },
    WmiEntry { code: "5YJ", make: "Tesla", country: "United States" },
    WmiEntry { code: "JA3", make: "Mitsubishi", country: "Japan" },
    WmiEntry { code: "JF1", make: "Subaru", country: "Japan" },
    WmiEntry { code: "JH4", make: "Acura", country: "Japan" },
    WmiEntry { code: "JHM", make: "Honda", country: "Japan" },
    WmiEntry { code: "JM1", make: "Mazda", country: "Japan" },
    WmiEntry { code: "JN1", make: "Nissan", country: "Japan" },
    WmiEntry { code: "JT2", make: "Toyota", country: "Japan" },
    WmiEntry { code: "JTD", make: "Toyota", country: "Japan" },
    WmiEntry { code: "JTH", make: "Lexus", country: "Japan" },
    WmiEntry { code: "KMH", make: "Hyundai", country: "South Korea" },
    WmiEntry { code: "KNA", make: "Kia", country: "South Korea" },
    WmiEntry { code: "SAJ", make: "Jaguar", country: "United Kingdom" },
    WmiEntry { code: "SAL", make: "Land Rover", country: "United Kingdom" },
    WmiEntry { code: "VF1", make: "Renault", country: "France" },
    WmiEntry { code: "WAU", make: "Audi", country: "Germany" },
    WmiEntry { code: "WBA", make: "BMW", country: "Germany" },
    WmiEntry { code: "WBS", make: "BMW", country: "Germany" },
    WmiEntry { code: "WDB", make: "Mercedes-Benz", country: "Germany" },
    WmiEntry { code: "WDD", make: "Mercedes-Benz", country: "Germany" },
    WmiEntry { code: "WP0", make: "Porsche", country: "Germany" },
    WmiEntry { code: "WVW", make: "Volkswagen", country: "Germany" },
    WmiEntry { code: "YV1", make: "Volvo", country: "Sweden" },
    WmiEntry { code: "ZAR", make: "Alfa Romeo", country: "Italy" },
    WmiEntry { code: "ZFF", make: "Ferrari", country: "Italy" },
    WmiEntry { code: "ZHW", make: "Lamborghini", country: "Italy" },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_sorted() {
        for window in WMI_TABLE.windows(2) {
            assert!(
                window[0].code < window[1].code,
                "WMI table not sorted: {} >= {}",
                window[0].code,
                window[1].code
            );
        }
    }

    #[test]
    fn codes_are_three_characters() {
        for entry in WMI_TABLE {
            assert_eq!(entry.code.len(), 3, "bad code {}", entry.code);
        }
    }
}
