//! Application constants and configuration

pub const APP_NAME: &str = "Cryptogram Boxed Solver";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Built-in puzzle shown when no ciphertext is configured
pub const DEFAULT_CIPHERTEXT: &str =
    "YXOP TXZWT KNGMKTT SUK CMKHFT HZC GMHLKMT HZC UXGKT XY SUK EXMPAZW GKXGOK";

/// Shown in a box whose cipher letter has no mapping yet
pub const PLACEHOLDER: char = '_';

/// Shown in the letter bank in place of an already assigned letter
pub const USED_GLYPH: char = '·';

/// Words per grid row
pub const DEFAULT_GRID_COLUMNS: usize = 6;
pub const MAX_GRID_COLUMNS: usize = 12;
