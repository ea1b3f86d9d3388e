//! Graph families and the directory and file names derived from them

use crate::io::configuration::{DIAGONAL_DENSITY, OUTPUT_EXTENSION, OUTPUT_PREFIX};
use crate::io::error::{Result, invalid_argument};
use std::fmt;
use std::path::{Path, PathBuf};

/// Graph generation scheme the tiles were rendered from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphFamily {
    /// Random regular graphs where every vertex has `degree` neighbours
    Regular {
        /// Vertex degree
        degree: u32,
    },
    /// Diagonal lattice graphs with a fixed density factor
    Diagonal,
}

impl GraphFamily {
    /// Resolve a family from its command-line name
    ///
    /// `degree` is only validated and kept for the regular family.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is not `regular` or `diagonal`, or if a
    /// regular family is requested with a zero degree
    pub fn from_name(name: &str, degree: u32) -> Result<Self> {
        match name {
            "regular" => {
                if degree == 0 {
                    return Err(invalid_argument(
                        "degree",
                        &degree,
                        &"must be greater than zero",
                    ));
                }
                Ok(Self::Regular { degree })
            }
            "diagonal" => Ok(Self::Diagonal),
            other => Err(invalid_argument(
                "which",
                &other,
                &"expected 'regular' or 'diagonal'",
            )),
        }
    }

    /// Command-line name of the family
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Regular { .. } => "regular",
            Self::Diagonal => "diagonal",
        }
    }

    /// Directory name of one experiment instance
    pub fn instance_directory_name(&self, size: u32, seed: u32) -> String {
        match self {
            Self::Regular { degree } => {
                format!("IndependentSet_Regular{size}d{degree}seed{seed}")
            }
            Self::Diagonal => {
                format!("IndependentSet_Diag{size}x{size}f{DIAGONAL_DENSITY}seed{seed}")
            }
        }
    }

    /// Path of one experiment instance under `data_dir`
    pub fn instance_directory(&self, data_dir: &Path, size: u32, seed: u32) -> PathBuf {
        data_dir.join(self.instance_directory_name(size, seed))
    }

    /// File name of the composite for this family
    ///
    /// The degree only appears for regular graphs.
    pub fn output_file_name(&self, size: u32, alpha: f64) -> String {
        let alpha = format_alpha(alpha);
        match self {
            Self::Regular { degree } => format!(
                "{OUTPUT_PREFIX}-{}{size}d{degree}-alpha{alpha}.{OUTPUT_EXTENSION}",
                self.name()
            ),
            Self::Diagonal => format!(
                "{OUTPUT_PREFIX}-{}{size}-alpha{alpha}.{OUTPUT_EXTENSION}",
                self.name()
            ),
        }
    }
}

impl fmt::Display for GraphFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Regular { degree } => write!(f, "{} (degree {degree})", self.name()),
            Self::Diagonal => f.write_str(self.name()),
        }
    }
}

/// Render alpha for file names, always keeping a decimal point (`1.0`, `0.5`)
pub fn format_alpha(alpha: f64) -> String {
    format!("{alpha:?}")
}
