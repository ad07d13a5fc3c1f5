//! Fixed layout parameters, default file locations and column labels.
//!
//! Model S is the standard solar model of Christensen-Dalsgaard et al.
//! (1996, Science 272, 1286), distributed at
//! <https://users-phys.au.dk/~jcd/solar_models/>. The atmosphere table is
//! Table 26 of Avrett & Loeser (2008, ApJS 175, 229), an update of the VAL
//! model of Vernazza, Avrett & Loeser (1981).

// =============================================================================
// Default Resource Locations
// =============================================================================

/// Model S in GONG format, from <https://users-phys.au.dk/~jcd/solar_models/fgong.l5bi.d.15>
pub const DEFAULT_GONG_PATH: &str = "structure/model_S/fgong.l5bi.d.15c";

/// Model S limited format, from <https://users-phys.au.dk/~jcd/solar_models/cptrho.l5bi.d.15c>
pub const DEFAULT_LIMITED_PATH: &str = "structure/model_S/cptrho.l5bi.d.15c";

/// Avrett & Loeser (2008) Table 26, header row turned into comments
pub const DEFAULT_ATMOSPHERE_PATH: &str = "structure/atmosphere/AV08_table_26.txt";

/// Environment variable pointing at the directory the default paths live under
pub const DATA_DIR_ENV_VAR: &str = "SOLAR_STRUCTURE_DATA_DIR";

// =============================================================================
// GONG Layout
// =============================================================================

/// Zero-based index of the `nn iconst ivar ivers` line
pub const GONG_HEADER_LINE_INDEX: usize = 4;

/// Number of integers on the header line
pub const GONG_HEADER_FIELDS: usize = 4;

/// Lines holding the global parameters, directly after the header line
pub const GONG_GLOBAL_LINES: usize = 3;

/// Lines preceding the structure grid (free text, header, global block)
pub const GONG_GRID_SKIP_LINES: usize = GONG_HEADER_LINE_INDEX + 1 + GONG_GLOBAL_LINES;

/// Character width of every fixed-width field
pub const FIXED_FIELD_WIDTH: usize = 16;

/// Fixed-width fields per line (Fortran `5e16.9`)
pub const FIXED_FIELDS_PER_LINE: usize = 5;

// =============================================================================
// Delimited Layout
// =============================================================================

/// Start of a comment in the whitespace-delimited tables
pub const COMMENT_MARKER: char = '#';

/// En-dash left in the atmosphere table where a minus sign was meant
pub const NON_ASCII_MINUS: char = '\u{2013}';

// =============================================================================
// Column Labels
// =============================================================================

/// Global model parameters; the last two are reserved and named by position
pub const GONG_GLOBAL_COLUMNS: [&str; 15] = [
    "M",
    "R",
    "L",
    "Z",
    "X0",
    "α",
    "φ",
    "ξ",
    "β",
    "λ",
    "d2lnP/dlnR2_c",
    "d2lnρ/dlnR2_c",
    "age",
    "14",
    "15",
];

/// First 25 structure variables of a GONG file (versions up to 210)
pub const GONG_GRID_COLUMNS: [&str; 25] = [
    "r",
    "ln q",
    "T",
    "p",
    "ρ",
    "X",
    "L",
    "κ",
    "ε",
    "Γ1",
    "grad_ad",
    "δ",
    "c_P",
    "μ_e_inv",
    "entropy_gradient",
    "rx",
    "Z",
    "R-r",
    "ε_g",
    "L_g",
    "X3He",
    "X12C",
    "X13C",
    "X14N",
    "X16O",
];

/// Model S limited format: radius, sound speed, density, pressure, Γ1, temperature
pub const LIMITED_COLUMNS: [&str; 6] = ["r", "c", "rho", "p", "Gamma_1", "T"];

pub const ATMOSPHERE_COLUMNS: [&str; 10] = [
    "cell",
    "z",
    "column_density",
    "T",
    "V",
    "p_g",
    "p_tot",
    "n_H",
    "n_HI",
    "n_e",
];
