use crate::config::{GeneratorConfig, WriteMode};
use crate::error::{DatasetError, Result};
use crate::output::{resolve_output_dir, DirStatus};
use crate::record::{pair_columns, Record};
use crate::sampler::ZipfSampler;
use crate::writer::{OutputFile, RecordWriter};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::io::Write;
use std::time::{Duration, Instant};

/// Independent random streams for the two columns.
///
/// Each column draws from its own generator, so row `i` of a column does not
/// depend on how the other column was drawn or how rows were chunked.
pub struct ColumnRngs {
    pub flow: StdRng,
    pub element: StdRng,
}

impl ColumnRngs {
    pub fn seeded(seed: u64) -> Self {
        Self::split(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::split(StdRng::from_entropy())
    }

    fn split(mut master: StdRng) -> Self {
        let flow = StdRng::seed_from_u64(master.gen());
        let element = StdRng::seed_from_u64(master.gen());
        Self { flow, element }
    }
}

/// A fully materialized dataset: two parallel columns of equal length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    flow_ids: Vec<u32>,
    element_ids: Vec<u32>,
}

impl Dataset {
    pub fn from_columns(flow_ids: Vec<u32>, element_ids: Vec<u32>) -> Result<Self> {
        if flow_ids.len() != element_ids.len() {
            return Err(DatasetError::LengthMismatch {
                flow: flow_ids.len(),
                element: element_ids.len(),
            });
        }
        Ok(Self {
            flow_ids,
            element_ids,
        })
    }

    pub fn len(&self) -> usize {
        self.flow_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flow_ids.is_empty()
    }

    pub fn flow_ids(&self) -> &[u32] {
        &self.flow_ids
    }

    pub fn element_ids(&self) -> &[u32] {
        &self.element_ids
    }

    pub fn records(&self) -> Result<Vec<Record>> {
        pair_columns(&self.flow_ids, &self.element_ids)
    }
}

/// Outcome of a completed run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub records_written: u64,
    /// Rows whose flow id was clamped onto `max_flow_id` (or drew it exactly).
    pub flow_ceiling_hits: u64,
    pub element_ceiling_hits: u64,
    pub dir_status: DirStatus,
    pub elapsed: Duration,
}

/// Rows written and ceiling hits, before the file is committed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WriteStats {
    pub rows: u64,
    pub flow_ceiling_hits: u64,
    pub element_ceiling_hits: u64,
}

/// Share of `total` already written, rounded to a whole percent.
fn progress_pct(rows: u64, total: u64) -> f64 {
    if total == 0 {
        return 100.0;
    }
    (rows as f64 * 100.0 / total as f64).round()
}

/// Generates the two-column Zipf dataset described by a `GeneratorConfig`.
pub struct DatasetGenerator {
    config: GeneratorConfig,
    flow: ZipfSampler,
    element: ZipfSampler,
}

impl DatasetGenerator {
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        config.validate()?;
        let flow = ZipfSampler::new(config.alpha_flow, config.max_flow_id)?;
        let element = ZipfSampler::new(config.alpha_element, config.max_element_id)?;
        Ok(Self {
            config,
            flow,
            element,
        })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Draw every row into memory.
    pub fn generate(&self, rngs: &mut ColumnRngs) -> Result<Dataset> {
        let n = usize::try_from(self.config.record_count).map_err(|_| {
            DatasetError::InvalidConfig(format!(
                "record_count {} does not fit in memory",
                self.config.record_count
            ))
        })?;
        let flow_ids = self.flow.sample_column(&mut rngs.flow, n);
        let element_ids = self.element.sample_column(&mut rngs.element, n);
        Dataset::from_columns(flow_ids, element_ids)
    }

    /// Generate all rows and serialize them through `writer` using the configured
    /// write mode. Both modes produce identical bytes for the same streams.
    pub fn write_to<W: Write>(
        &self,
        rngs: &mut ColumnRngs,
        writer: &mut RecordWriter<W>,
    ) -> Result<WriteStats> {
        match self.config.write_mode {
            WriteMode::Bulk => self.write_bulk(rngs, writer),
            WriteMode::Chunked(rows) => self.write_chunked(rngs, writer, rows.get()),
        }
    }

    fn write_bulk<W: Write>(
        &self,
        rngs: &mut ColumnRngs,
        writer: &mut RecordWriter<W>,
    ) -> Result<WriteStats> {
        let dataset = self.generate(rngs)?;
        let records = dataset.records()?;
        writer.write_records(&records)?;
        Ok(WriteStats {
            rows: records.len() as u64,
            flow_ceiling_hits: self.flow.ceiling_hits(dataset.flow_ids()),
            element_ceiling_hits: self.element.ceiling_hits(dataset.element_ids()),
        })
    }

    fn write_chunked<W: Write>(
        &self,
        rngs: &mut ColumnRngs,
        writer: &mut RecordWriter<W>,
        chunk_rows: usize,
    ) -> Result<WriteStats> {
        let total = self.config.record_count;
        let mut stats = WriteStats::default();
        let mut flow_ids = Vec::with_capacity(chunk_rows);
        let mut element_ids = Vec::with_capacity(chunk_rows);
        // Log roughly every 10%.
        let report_every = (total / 10).max(1);
        let mut next_report = report_every;

        while stats.rows < total {
            let n = (total - stats.rows).min(chunk_rows as u64) as usize;
            flow_ids.clear();
            element_ids.clear();
            self.flow.sample_into(&mut rngs.flow, n, &mut flow_ids);
            self.element
                .sample_into(&mut rngs.element, n, &mut element_ids);

            let records = pair_columns(&flow_ids, &element_ids)?;
            writer.write_records(&records)?;

            stats.rows += n as u64;
            stats.flow_ceiling_hits += self.flow.ceiling_hits(&flow_ids);
            stats.element_ceiling_hits += self.element.ceiling_hits(&element_ids);
            tracing::debug!(rows = stats.rows, chunk = n, "chunk written");

            if stats.rows >= next_report {
                tracing::info!(
                    rows = stats.rows,
                    total,
                    pct = progress_pct(stats.rows, total),
                    "progress"
                );
                next_report = stats.rows + report_every;
            }
        }
        Ok(stats)
    }

    /// Full pipeline: resolve the output directory, sample, clamp, pair and
    /// write the file. `seed` fixes both column streams; `None` uses entropy.
    ///
    /// If the directory cannot be created nothing is generated. If writing
    /// fails the partial file is removed.
    pub fn run(&self, seed: Option<u64>) -> Result<RunSummary> {
        let path = &self.config.output_path;
        let dir_status = resolve_output_dir(path)?;

        tracing::info!(
            output = %path.display(),
            records = self.config.record_count,
            alpha_flow = self.config.alpha_flow,
            alpha_element = self.config.alpha_element,
            max_flow_id = self.config.max_flow_id,
            max_element_id = self.config.max_element_id,
            mode = ?self.config.write_mode,
            seed = ?seed,
            "starting synthetic dataset generation"
        );

        let start = Instant::now();
        let mut rngs = match seed {
            Some(seed) => ColumnRngs::seeded(seed),
            None => ColumnRngs::from_entropy(),
        };

        let mut out = OutputFile::create(path)?;
        let stats = self.write_to(&mut rngs, out.writer())?;
        let records_written = out.commit()?;
        debug_assert_eq!(records_written, stats.rows);

        let summary = RunSummary {
            records_written,
            flow_ceiling_hits: stats.flow_ceiling_hits,
            element_ceiling_hits: stats.element_ceiling_hits,
            dir_status,
            elapsed: start.elapsed(),
        };
        tracing::info!(
            output = %path.display(),
            records = summary.records_written,
            flow_ceiling_hits = summary.flow_ceiling_hits,
            element_ceiling_hits = summary.element_ceiling_hits,
            elapsed_ms = summary.elapsed.as_millis() as u64,
            "data generation complete"
        );
        Ok(summary)
    }
}
