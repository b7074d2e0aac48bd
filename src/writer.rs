use crate::record::FastqRecord;

use flate2::Compression;
use flate2::write::GzEncoder;
use std::fs::File;
use std::io::{self, BufWriter, Write};

/// Streaming FASTQ writer: every line is followed by exactly one `\n`.
pub struct FastqWriter<W: Write> {
    out: W,
    records: u64,
}

impl FastqWriter<GzEncoder<BufWriter<File>>> {
    /// Gzip-compress records into `file`.
    pub fn gzip(file: File) -> Self {
        let buffered = BufWriter::with_capacity(256 * 1024, file);
        Self::new(GzEncoder::new(buffered, Compression::default()))
    }

    /// Write the gzip trailer and flush, handing back the file.
    pub fn finish(self) -> io::Result<File> {
        let buffered = self.out.finish()?;
        buffered.into_inner().map_err(|e| e.into_error())
    }
}

impl<W: Write> FastqWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out, records: 0 }
    }

    pub fn write_record(&mut self, rec: &FastqRecord) -> io::Result<()> {
        for line in [&rec.header, &rec.seq, &rec.sep, &rec.qual] {
            self.out.write_all(line)?;
            self.out.write_all(b"\n")?;
        }
        self.records += 1;
        Ok(())
    }

    pub fn records(&self) -> u64 {
        self.records
    }

    pub fn into_inner(mut self) -> io::Result<W> {
        self.out.flush()?;
        Ok(self.out)
    }
}
