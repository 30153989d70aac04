pub mod config;
pub mod error;
pub mod generator;
pub mod loader;
pub mod output;
pub mod record;
pub mod sampler;
pub mod writer;

pub use config::{GeneratorConfig, WriteMode};
pub use error::{DatasetError, Result};
pub use generator::{ColumnRngs, Dataset, DatasetGenerator, RunSummary, WriteStats};
pub use loader::{load_dataset, read_dataset, LoadedDataset};
pub use output::{resolve_output_dir, DirStatus};
pub use record::{pair_columns, Record};
pub use sampler::{clamp_rank, ZipfSampler};
pub use writer::{OutputFile, RecordWriter};
