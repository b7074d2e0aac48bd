use crate::error::FixError;
use crate::naming::NameParts;
use crate::policy::FixOptions;
use crate::reader::FastqReader;
use crate::writer::FastqWriter;

use std::path::{Path, PathBuf};

/// Everything one run needs, built once at startup.
#[derive(Debug, Clone)]
pub struct FixConfig {
    pub input: PathBuf,
    /// Where `<name>_fixed.<ext>` is created. The CLI uses the working directory.
    pub output_dir: PathBuf,
    pub options: FixOptions,
}

impl FixConfig {
    pub fn new<P: Into<PathBuf>>(input: P) -> Self {
        Self {
            input: input.into(),
            output_dir: PathBuf::from("."),
            options: FixOptions::default(),
        }
    }

    pub fn output_dir<P: Into<PathBuf>>(mut self, dir: P) -> Self {
        self.output_dir = dir.into();
        self
    }

    pub fn options(mut self, options: FixOptions) -> Self {
        self.options = options;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixReport {
    pub output: PathBuf,
    pub records: u64,
    pub headers_changed: u64,
    pub dropped_lines: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The output file was already there and has not been touched.
    SkippedExists { output: PathBuf },
    /// Not a `.fastq.gz` / `.fq.gz` file; nothing was written.
    SkippedUnsupportedExtension { file_name: String },
    Rewritten(FixReport),
}

/// Rewrite `cfg.input` into `<output_dir>/<name>_fixed.<ext>` with space-free headers.
///
/// The output is staged in a hidden temporary file next to its final location
/// and only linked into place once the gzip stream is complete, so a failed run
/// leaves nothing behind under the output name. An existing output file is
/// never overwritten.
pub fn fix(cfg: &FixConfig) -> Result<Outcome, FixError> {
    let parts = NameParts::from_path(&cfg.input)?;
    let output = cfg.output_dir.join(parts.output_file_name());
    log::debug!("{} -> {}", cfg.input.display(), output.display());

    if output.exists() {
        log::info!("{} exists", output.display());
        return Ok(Outcome::SkippedExists { output });
    }
    if !parts.is_supported() {
        log::info!("({}) ignored", parts.file_name);
        return Ok(Outcome::SkippedUnsupportedExtension {
            file_name: parts.file_name,
        });
    }

    log::info!("analyzing {}", parts.file_name);
    let reader = FastqReader::from_path(&cfg.input, cfg.options.clone())?;
    let report = rewrite(reader, &cfg.output_dir, &output)?;
    log::info!(
        "wrote {} records to {} ({} headers changed)",
        report.records,
        report.output.display(),
        report.headers_changed
    );
    Ok(Outcome::Rewritten(report))
}

fn rewrite(mut reader: FastqReader, dir: &Path, output: &Path) -> Result<FixReport, FixError> {
    let staged = tempfile::Builder::new()
        .prefix(".")
        .suffix(".partial")
        .tempfile_in(dir)
        .map_err(|e| FixError::out_err(output, e))?;
    let (file, staged_path) = staged.into_parts();

    let mut writer = FastqWriter::gzip(file);
    let mut headers_changed = 0u64;
    while let Some(rec) = reader.next() {
        let mut rec = rec?;
        if rec.fix_header() {
            headers_changed += 1;
        }
        writer
            .write_record(&rec)
            .map_err(|e| FixError::out_err(output, e))?;
    }

    let records = writer.records();
    let file = writer.finish().map_err(|e| FixError::out_err(output, e))?;
    file.sync_all().map_err(|e| FixError::out_err(output, e))?;
    drop(file);
    staged_path
        .persist_noclobber(output)
        .map_err(|e| FixError::out_err(output, e.error))?;

    Ok(FixReport {
        output: output.to_path_buf(),
        records,
        headers_changed,
        dropped_lines: reader.dropped_lines(),
    })
}
