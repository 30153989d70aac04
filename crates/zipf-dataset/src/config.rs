use crate::error::{DatasetError, Result};
use std::num::NonZeroUsize;
use std::path::PathBuf;

pub const DEFAULT_OUTPUT_PATH: &str = "./skewed_dataset_zipf01.txt";
pub const DEFAULT_RECORD_COUNT: u64 = 127_001_730;
pub const DEFAULT_MAX_FLOW_ID: u32 = 149_197_297;
pub const DEFAULT_MAX_ELEMENT_ID: u32 = 87_963_297;
pub const DEFAULT_ALPHA_FLOW: f64 = 1.1;
pub const DEFAULT_ALPHA_ELEMENT: f64 = 1.4;
pub const DEFAULT_CHUNK_ROWS: NonZeroUsize = match NonZeroUsize::new(1 << 20) {
    Some(rows) => rows,
    None => panic!("chunk size must be non-zero"),
};

/// How rows move from the samplers to the output file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    /// Materialize both full columns, then write them in one pass.
    Bulk,
    /// Generate and append this many rows at a time.
    Chunked(NonZeroUsize),
}

impl Default for WriteMode {
    fn default() -> Self {
        WriteMode::Chunked(DEFAULT_CHUNK_ROWS)
    }
}

/// Generator tunables. `Default` matches the reference dataset
/// (`skewed_dataset_zipf01.txt`); tests shrink the counts and bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    /// Total rows to emit.
    pub record_count: u64,
    /// Clamp ceiling for column 1.
    pub max_flow_id: u32,
    /// Clamp ceiling for column 2.
    pub max_element_id: u32,
    /// Zipf shape for column 1. Must be > 1.
    pub alpha_flow: f64,
    /// Zipf shape for column 2. Must be > 1.
    pub alpha_element: f64,
    pub output_path: PathBuf,
    pub write_mode: WriteMode,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            record_count: DEFAULT_RECORD_COUNT,
            max_flow_id: DEFAULT_MAX_FLOW_ID,
            max_element_id: DEFAULT_MAX_ELEMENT_ID,
            alpha_flow: DEFAULT_ALPHA_FLOW,
            alpha_element: DEFAULT_ALPHA_ELEMENT,
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            write_mode: WriteMode::default(),
        }
    }
}

impl GeneratorConfig {
    pub fn validate(&self) -> Result<()> {
        check_alpha("alpha_flow", self.alpha_flow)?;
        check_alpha("alpha_element", self.alpha_element)?;
        if self.max_flow_id == 0 {
            return Err(DatasetError::InvalidConfig(
                "max_flow_id must be >= 1".to_string(),
            ));
        }
        if self.max_element_id == 0 {
            return Err(DatasetError::InvalidConfig(
                "max_element_id must be >= 1".to_string(),
            ));
        }
        if self.output_path.as_os_str().is_empty() {
            return Err(DatasetError::InvalidConfig(
                "output_path must not be empty".to_string(),
            ));
        }
        if self.write_mode == WriteMode::Bulk && usize::try_from(self.record_count).is_err() {
            return Err(DatasetError::InvalidConfig(format!(
                "record_count {} does not fit in memory for bulk mode",
                self.record_count
            )));
        }
        Ok(())
    }
}

fn check_alpha(name: &str, alpha: f64) -> Result<()> {
    // Zipf needs alpha > 1 for the distribution to normalize.
    if alpha.is_nan() || alpha <= 1.0 {
        return Err(DatasetError::InvalidConfig(format!(
            "{name} must be > 1, got {alpha}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_constants() {
        let config = GeneratorConfig::default();
        assert_eq!(config.record_count, 127_001_730);
        assert_eq!(config.max_flow_id, 149_197_297);
        assert_eq!(config.max_element_id, 87_963_297);
        assert_eq!(config.alpha_flow, 1.1);
        assert_eq!(config.alpha_element, 1.4);
        assert_eq!(
            config.output_path,
            PathBuf::from("./skewed_dataset_zipf01.txt")
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_alpha_at_or_below_one() {
        let config = GeneratorConfig {
            alpha_flow: 1.0,
            ..GeneratorConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(DatasetError::InvalidConfig(_))
        ));

        let config = GeneratorConfig {
            alpha_element: f64::NAN,
            ..GeneratorConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_zero_ceiling() {
        let config = GeneratorConfig {
            max_element_id: 0,
            ..GeneratorConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn default_write_mode_is_chunked() {
        assert_eq!(WriteMode::default(), WriteMode::Chunked(DEFAULT_CHUNK_ROWS));
        assert_eq!(DEFAULT_CHUNK_ROWS.get(), 1 << 20);
    }
}
