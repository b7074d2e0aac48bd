use crate::error::{FixError, FormatError, IoContext};
use crate::policy::{ErrorPolicy, FixOptions};
use crate::record::FastqRecord;
use crate::util::{looks_like_gzip, open_file, trim_end_in_place};

use flate2::read::MultiGzDecoder;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Streaming FASTQ reader yielding strict four-line blocks.
pub struct FastqReader {
    rdr: Box<dyn BufRead + Send>,
    opts: FixOptions,
    line_num: u64,
    byte_pos: u64,
    dropped_lines: usize,
    done: bool,
}

impl FastqReader {
    /// Open a gzip FASTQ file. Input without the gzip magic is rejected up front.
    pub fn from_path<P: AsRef<Path>>(path: P, opts: FixOptions) -> Result<Self, FixError> {
        let path = path.as_ref();
        let unreadable = |e| FixError::FileNotFound {
            path: path.to_path_buf(),
            source: e,
        };
        let f = open_file(path).map_err(unreadable)?;

        // A directory opens fine on unix and only fails here.
        let is_gz = looks_like_gzip(&f).map_err(unreadable)?;
        let start = IoContext {
            byte_pos: 0,
            line_num: 0,
        };
        if !is_gz {
            return Err(FixError::gz_err(
                io::Error::new(io::ErrorKind::InvalidData, "missing gzip magic bytes"),
                start,
            ));
        }

        let dec = MultiGzDecoder::new(f);
        Ok(Self {
            rdr: Box::new(BufReader::with_capacity(256 * 1024, dec)),
            opts,
            line_num: 0,
            byte_pos: 0,
            dropped_lines: 0,
            done: false,
        })
    }

    /// Wrap an arbitrary `BufRead` carrying plain FASTQ text.
    pub fn from_bufread<R: BufRead + Send + 'static>(reader: R, opts: FixOptions) -> Self {
        Self {
            rdr: Box::new(reader),
            opts,
            line_num: 0,
            byte_pos: 0,
            dropped_lines: 0,
            done: false,
        }
    }

    /// Orphan lines discarded at end of stream under `ErrorPolicy::Skip`.
    pub fn dropped_lines(&self) -> usize {
        self.dropped_lines
    }

    /// Iterator-style `next` record.
    pub fn next(&mut self) -> Option<Result<FastqRecord, FixError>> {
        if self.done {
            return None;
        }
        match self.read_one() {
            Ok(Some(rec)) => Some(Ok(rec)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(err) => {
                self.done = true;
                Some(Err(err))
            }
        }
    }

    fn read_line(&mut self, buf: &mut Vec<u8>) -> Result<usize, FixError> {
        buf.clear();
        let n = self
            .rdr
            .read_until(b'\n', buf)
            .map_err(|e| FixError::gz_err(e, self.ctx()))?;
        if n > 0 {
            self.line_num += 1;
            self.byte_pos += n as u64;
            trim_end_in_place(buf);
        }
        Ok(n)
    }

    fn read_one(&mut self) -> Result<Option<FastqRecord>, FixError> {
        let mut rec = FastqRecord::default();

        if self.read_line(&mut rec.header)? == 0 {
            return Ok(None);
        }
        if rec.header.is_empty() {
            // A blank header line ends the records. Only blank lines may follow it.
            let mut rest = Vec::new();
            loop {
                if self.read_line(&mut rest)? == 0 {
                    return Ok(None);
                }
                if !rest.is_empty() {
                    break;
                }
            }
            match self.opts.error_policy {
                ErrorPolicy::Skip => {
                    log::warn!(
                        "blank line before line {}, ignoring the rest of the input",
                        self.line_num
                    );
                    return Ok(None);
                }
                ErrorPolicy::Return => {
                    return Err(FixError::fmt_err(FormatError::BlankHeader, self.ctx()));
                }
            }
        }

        let mut lines = 1;
        for buf in [&mut rec.seq, &mut rec.sep, &mut rec.qual] {
            if self.read_line(buf)? == 0 {
                return self.truncated(lines);
            }
            lines += 1;
        }
        Ok(Some(rec))
    }

    fn truncated(&mut self, lines: usize) -> Result<Option<FastqRecord>, FixError> {
        match self.opts.error_policy {
            ErrorPolicy::Skip => {
                log::warn!(
                    "input ends {lines} line(s) into a record at line {}, dropping them",
                    self.line_num
                );
                self.dropped_lines += lines;
                Ok(None)
            }
            ErrorPolicy::Return => Err(FixError::fmt_err(
                FormatError::Truncated { lines },
                self.ctx(),
            )),
        }
    }

    #[inline]
    fn ctx(&self) -> IoContext {
        IoContext {
            byte_pos: self.byte_pos,
            line_num: self.line_num,
        }
    }
}

impl Iterator for FastqReader {
    type Item = Result<FastqRecord, FixError>;
    fn next(&mut self) -> Option<Self::Item> {
        FastqReader::next(self)
    }
}
