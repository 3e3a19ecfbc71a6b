//! Command-line configuration for the `gridpath` demo.

use std::fmt;

use gridpath_core::{Bounds, GridError};

pub const DEFAULT_ROWS: i32 = 16;
pub const DEFAULT_COLS: i32 = 24;

pub const USAGE: &str = "usage: gridpath [ROWS COLS] [--seed N] [--plain]";

/// Settings for one demo run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    pub rows: i32,
    pub cols: i32,
    /// Maze seed; a random one is drawn (and logged) when absent.
    pub seed: Option<u64>,
    /// Print glyphs without terminal colours.
    pub plain: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            seed: None,
            plain: false,
        }
    }
}

impl DemoConfig {
    /// Parse arguments, excluding the program name.
    pub fn from_args<I>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = Self::default();
        let mut dims = Vec::with_capacity(2);
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--plain" => config.plain = true,
                "--seed" => {
                    let value = args.next().ok_or(ConfigError::MissingValue("--seed"))?;
                    let seed = value
                        .parse::<u64>()
                        .map_err(|_| ConfigError::InvalidNumber { value })?;
                    config.seed = Some(seed);
                }
                flag if flag.starts_with("--") => {
                    return Err(ConfigError::UnknownFlag(flag.to_string()));
                }
                _ => {
                    let n: i32 = arg
                        .parse()
                        .map_err(|_| ConfigError::InvalidNumber { value: arg.clone() })?;
                    dims.push(n);
                }
            }
        }

        match dims.as_slice() {
            [] => {}
            [rows, cols] => {
                config.rows = *rows;
                config.cols = *cols;
            }
            _ => return Err(ConfigError::Dimensions(dims.len())),
        }
        Ok(config)
    }

    /// Validated grid bounds.
    pub fn bounds(&self) -> Result<Bounds, ConfigError> {
        Ok(Bounds::new(self.rows, self.cols)?)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    UnknownFlag(String),
    MissingValue(&'static str),
    InvalidNumber { value: String },
    /// Dimensions must be given as a ROWS COLS pair.
    Dimensions(usize),
    Grid(GridError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownFlag(flag) => write!(f, "unknown flag {flag}"),
            Self::MissingValue(flag) => write!(f, "{flag} needs a value"),
            Self::InvalidNumber { value } => write!(f, "not a number: {value:?}"),
            Self::Dimensions(n) => write!(f, "expected ROWS and COLS, got {n} number(s)"),
            Self::Grid(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for ConfigError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}
