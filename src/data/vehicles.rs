//! Built-in vehicle catalog: the enthusiast-import models the platform
//! tracks, with chassis generations, colloquial shorthand, and
//! production spans.

/// One generation of a model, keyed by chassis code.
pub(crate) struct Generation {
    pub chassis: &'static str,
    pub start: i32,
    pub end: i32,
    /// Colloquial shorthand for this generation ("r32", "evo ix").
    pub aliases: &'static [&'static str],
}

/// A catalogued make/model with its generations.
pub(crate) struct VehicleSpec {
    pub make: &'static str,
    pub model: &'static str,
    /// Colloquial names for the model as a whole.
    pub model_aliases: &'static [&'static str],
    pub generations: &'static [Generation],
}

/// Colloquial or abbreviated make names, mapped to canonical makes.
pub(crate) const MAKE_ALIASES: &[(&str, &str)] = &[
    ("vw", "Volkswagen"),
    ("chevy", "Chevrolet"),
    ("mercedes", "Mercedes-Benz"),
    ("mitsu", "Mitsubishi"),
    ("subie", "Subaru"),
];

pub(crate) const VEHICLES: &[VehicleSpec] = &[
    VehicleSpec {
        make: "Nissan",
        model: "Skyline GT-R",
        model_aliases: &["skyline", "gtr", "gt-r"],
        generations: &[
            Generation { chassis: "BNR32", start: 1989, end: 1994, aliases: &["r32"] },
            Generation { chassis: "BCNR33", start: 1995, end: 1998, aliases: &["r33"] },
            Generation { chassis: "BNR34", start: 1999, end: 2002, aliases: &["r34"] },
        ],
    },
    VehicleSpec {
        make: "Nissan",
        model: "Silvia",
        model_aliases: &["silvia", "240sx"],
        generations: &[
            Generation { chassis: "S13", start: 1988, end: 1994, aliases: &[] },
            Generation { chassis: "S14", start: 1993, end: 1998, aliases: &[] },
            Generation { chassis: "S15", start: 1999, end: 2002, aliases: &[] },
        ],
    },
    VehicleSpec {
        make: "Toyota",
        model: "Supra",
        model_aliases: &["supra"],
        generations: &[
            Generation { chassis: "MA70", start: 1986, end: 1992, aliases: &["a70"] },
            Generation { chassis: "JZA80", start: 1993, end: 2002, aliases: &["a80", "mk4", "mkiv"] },
            Generation { chassis: "DB42", start: 2019, end: 2025, aliases: &["a90", "mk5"] },
        ],
    },
    VehicleSpec {
        make: "Toyota",
        model: "Corolla Levin",
        model_aliases: &["levin", "hachiroku"],
        generations: &[
            Generation { chassis: "AE86", start: 1983, end: 1987, aliases: &["86"] },
        ],
    },
    VehicleSpec {
        make: "Honda",
        model: "Civic Type R",
        model_aliases: &["civic type r", "type r"],
        generations: &[
            Generation { chassis: "EK9", start: 1997, end: 2000, aliases: &[] },
            Generation { chassis: "EP3", start: 2001, end: 2005, aliases: &[] },
            Generation { chassis: "FD2", start: 2007, end: 2010, aliases: &[] },
            Generation { chassis: "FK2", start: 2015, end: 2016, aliases: &[] },
            Generation { chassis: "FK8", start: 2017, end: 2021, aliases: &[] },
        ],
    },
    VehicleSpec {
        make: "Subaru",
        model: "Impreza WRX STI",
        model_aliases: &["impreza", "wrx sti", "sti"],
        generations: &[
            Generation { chassis: "GC8", start: 1992, end: 2000, aliases: &[] },
            Generation { chassis: "GDB", start: 2000, end: 2007, aliases: &["blobeye", "hawkeye"] },
            Generation { chassis: "GRB", start: 2007, end: 2014, aliases: &[] },
        ],
    },
    VehicleSpec {
        make: "Mitsubishi",
        model: "Lancer Evolution",
        model_aliases: &["lancer evo", "evolution", "evo"],
        generations: &[
            Generation { chassis: "CN9A", start: 1996, end: 1998, aliases: &["evo iv"] },
            Generation { chassis: "CP9A", start: 1998, end: 2001, aliases: &["evo v", "evo vi"] },
            Generation { chassis: "CT9A", start: 2001, end: 2007, aliases: &["evo vii", "evo viii", "evo ix"] },
            Generation { chassis: "CZ4A", start: 2007, end: 2016, aliases: &["evo x"] },
        ],
    },
    VehicleSpec {
        make: "BMW",
        model: "M3",
        model_aliases: &["m3"],
        generations: &[
            Generation { chassis: "E30", start: 1986, end: 1991, aliases: &[] },
            Generation { chassis: "E36", start: 1992, end: 1999, aliases: &[] },
            Generation { chassis: "E46", start: 2000, end: 2006, aliases: &[] },
        ],
    },
    VehicleSpec {
        make: "Mazda",
        model: "RX-7",
        model_aliases: &["rx7", "rx-7"],
        generations: &[
            Generation { chassis: "FC3S", start: 1985, end: 1992, aliases: &["fc"] },
            Generation { chassis: "FD3S", start: 1992, end: 2002, aliases: &["fd"] },
        ],
    },
    VehicleSpec {
        make: "Volkswagen",
        model: "Golf R",
        model_aliases: &["golf r", "golf"],
        generations: &[
            Generation { chassis: "MK7", start: 2014, end: 2020, aliases: &[] },
            Generation { chassis: "MK8", start: 2020, end: 2025, aliases: &[] },
        ],
    },
    VehicleSpec {
        make: "Porsche",
        model: "911",
        model_aliases: &["911"],
        generations: &[
            Generation { chassis: "964", start: 1989, end: 1994, aliases: &[] },
            Generation { chassis: "993", start: 1994, end: 1998, aliases: &[] },
            Generation { chassis: "996", start: 1998, end: 2004, aliases: &[] },
        ],
    },
];
