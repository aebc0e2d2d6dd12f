//! Responsive breakpoints - each one owns an independent grid layout

use std::fmt;
use std::str::FromStr;

/// Default column count for the `md` breakpoint
pub const MD_COLUMNS: usize = 4;
/// Default column count for the `lg` breakpoint
pub const LG_COLUMNS: usize = 6;
/// Default column count for the `xl` breakpoint
pub const XL_COLUMNS: usize = 8;

/// Number of rows each grid starts with
pub const INITIAL_ROWS: usize = 4;

/// One of the fixed set of layout breakpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Breakpoint {
    #[default]
    Md,
    Lg,
    Xl,
}

impl Breakpoint {
    /// All breakpoints in display order
    pub const ALL: [Breakpoint; 3] = [Breakpoint::Md, Breakpoint::Lg, Breakpoint::Xl];

    pub fn as_str(self) -> &'static str {
        match self {
            Breakpoint::Md => "md",
            Breakpoint::Lg => "lg",
            Breakpoint::Xl => "xl",
        }
    }

    /// Column count used when no configuration overrides it
    pub fn default_columns(self) -> usize {
        match self {
            Breakpoint::Md => MD_COLUMNS,
            Breakpoint::Lg => LG_COLUMNS,
            Breakpoint::Xl => XL_COLUMNS,
        }
    }
}

impl fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Breakpoint {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "md" => Ok(Breakpoint::Md),
            "lg" => Ok(Breakpoint::Lg),
            "xl" => Ok(Breakpoint::Xl),
            other => Err(format!("unknown breakpoint '{}' (expected md, lg or xl)", other)),
        }
    }
}
