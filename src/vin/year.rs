//! Model-year decoding for VIN position 10.
//!
//! The year code cycles every 30 years (the same letter legitimately
//! denotes e.g. 1985 and 2015), so decoding returns every candidate in
//! range and disambiguates with the position-7 convention: on VINs that
//! follow it, an alphabetic 7th character marks the 2010+ cycle.

/// Base cycle (1980–2009) year codes. `I`, `O`, `Q`, `U`, `Z` and `0`
/// are never used as year codes.
const YEAR_CODES: &[(char, i32)] = &[
    ('A', 1980),
    ('B', 1981),
    ('C', 1982),
    ('D', 1983),
    ('E', 1984),
    ('F', 1985),
    ('G', 1986),
    ('H', 1987),
    ('J', 1988),
    ('K', 1989),
    ('L', 1990),
    ('M', 1991),
    ('N', 1992),
    ('P', 1993),
    ('R', 1994),
    ('S', 1995),
    ('T', 1996),
    ('V', 1997),
    ('W', 1998),
    ('X', 1999),
    ('Y', 2000),
    ('1', 2001),
    ('2', 2002),
    ('3', 2003),
    ('4', 2004),
    ('5', 2005),
    ('6', 2006),
    ('7', 2007),
    ('8', 2008),
    ('9', 2009),
];

/// Outcome of decoding the year character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearDecode {
    /// The chosen model year, if the code is a valid year character.
    pub year: Option<i32>,
    /// Every cycle candidate no later than the cap, oldest first.
    pub candidates: Vec<i32>,
    /// True when more than one cycle was plausible and the choice rests
    /// on convention rather than on the position-7 marker.
    pub ambiguous: bool,
}

fn base_year(code: char) -> Option<i32> {
    YEAR_CODES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, year)| *year)
}

/// All cycle candidates for `code`, capped at `max_year` (normally the
/// as-of year plus one, since next-model-year VINs circulate early).
pub fn year_candidates(code: char, max_year: i32) -> Vec<i32> {
    let Some(base) = base_year(code) else {
        return Vec::new();
    };
    let mut candidates = Vec::new();
    let mut year = base;
    while year <= max_year {
        candidates.push(year);
        year += 30;
    }
    candidates
}

/// Decode the year character, preferring the cycle indicated by the
/// position-7 marker (`pos7_alphabetic`), otherwise the earliest cycle.
pub fn decode_year(code: char, pos7_alphabetic: bool, max_year: i32) -> YearDecode {
    let candidates = year_candidates(code, max_year);
    if candidates.is_empty() {
        return YearDecode {
            year: None,
            candidates,
            ambiguous: false,
        };
    }
    if candidates.len() == 1 {
        return YearDecode {
            year: Some(candidates[0]),
            candidates,
            ambiguous: false,
        };
    }

    if pos7_alphabetic {
        // Marker present: take the latest cycle at or past 2010 if one
        // fits under the cap, else the latest that does.
        let year = candidates
            .iter()
            .rev()
            .find(|&&y| y >= 2010)
            .or_else(|| candidates.last())
            .copied();
        YearDecode {
            year,
            candidates,
            ambiguous: false,
        }
    } else {
        // No marker: the earlier cycle is the safer read, but both remain
        // plausible.
        YearDecode {
            year: Some(candidates[0]),
            candidates,
            ambiguous: true,
        }
    }
}
