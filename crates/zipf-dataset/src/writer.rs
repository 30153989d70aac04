use crate::error::Result;
use crate::record::Record;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

const WRITE_BUFFER_BYTES: usize = 1 << 20;

/// Serializes records as `"<flow_id> <element_id>\n"` lines.
///
/// No header, single space delimiter, `\n` terminator. The last line ends
/// with a newline and nothing follows it.
pub struct RecordWriter<W: Write> {
    inner: BufWriter<W>,
    rows: u64,
}

impl<W: Write> RecordWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner: BufWriter::with_capacity(WRITE_BUFFER_BYTES, inner),
            rows: 0,
        }
    }

    pub fn write_record(&mut self, record: &Record) -> Result<()> {
        writeln!(self.inner, "{} {}", record.flow_id, record.element_id)?;
        self.rows += 1;
        Ok(())
    }

    pub fn write_records(&mut self, records: &[Record]) -> Result<()> {
        for record in records {
            self.write_record(record)?;
        }
        Ok(())
    }

    /// Flush buffered lines and hand back the row count and the inner sink.
    pub fn finish(self) -> Result<(u64, W)> {
        let rows = self.rows;
        let inner = self.inner.into_inner().map_err(|e| e.into_error())?;
        Ok((rows, inner))
    }
}

/// An output file that is deleted on drop unless `commit` succeeds.
pub struct OutputFile {
    path: PathBuf,
    writer: Option<RecordWriter<File>>,
}

impl OutputFile {
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path)?;
        Ok(Self {
            path: path.to_path_buf(),
            writer: Some(RecordWriter::new(file)),
        })
    }

    pub fn writer(&mut self) -> &mut RecordWriter<File> {
        match self.writer.as_mut() {
            Some(w) => w,
            None => unreachable!("writer is only taken by commit"),
        }
    }

    /// Flush, fsync and keep the file. Returns rows written.
    pub fn commit(mut self) -> Result<u64> {
        let writer = match self.writer.take() {
            Some(w) => w,
            None => unreachable!("writer is only taken by commit"),
        };
        let (rows, file) = writer.finish()?;
        file.sync_all()?;
        // Disarm the guard only after everything hit disk.
        self.path = PathBuf::new();
        Ok(rows)
    }
}

impl Drop for OutputFile {
    fn drop(&mut self) {
        if self.path.as_os_str().is_empty() {
            return;
        }
        // Close the handle before unlinking.
        drop(self.writer.take());
        if let Err(e) = std::fs::remove_file(&self.path) {
            tracing::warn!(
                path = %self.path.display(),
                error = %e,
                "failed to remove partial output file"
            );
        } else {
            tracing::warn!(path = %self.path.display(), "removed partial output file");
        }
    }
}
