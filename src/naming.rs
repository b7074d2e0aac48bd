use crate::error::FixError;
use std::path::Path;

/// Compound extensions the fixer rewrites. Anything else is ignored.
pub const SUPPORTED_EXTENSIONS: [&str; 2] = ["fastq.gz", "fq.gz"];

/// Tag inserted between the base name and the compound extension.
pub const FIXED_TAG: &str = "_fixed";

/// Base file name of an input split as `<stem>.<ext1>.<ext2>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameParts {
    pub file_name: String,
    pub stem: String,
    /// Last two dot-segments, e.g. `fastq.gz`.
    pub extension: String,
}

impl NameParts {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, FixError> {
        let path = path.as_ref();
        let file_name = path
            .file_name()
            .and_then(|s| s.to_str())
            .ok_or_else(|| FixError::InvalidFilename {
                name: path.display().to_string(),
            })?;
        Self::from_file_name(file_name)
    }

    pub fn from_file_name(file_name: &str) -> Result<Self, FixError> {
        let invalid = || FixError::InvalidFilename {
            name: file_name.to_string(),
        };

        // rsplitn yields the segments right to left: ext2, ext1, stem.
        let mut segs = file_name.rsplitn(3, '.');
        let ext2 = segs.next().ok_or_else(invalid)?;
        let ext1 = segs.next().ok_or_else(invalid)?;
        // The stem may be empty (`fastq.gz`), as long as there is a dot.
        let stem = segs.next().unwrap_or("");

        Ok(Self {
            file_name: file_name.to_string(),
            stem: stem.to_string(),
            extension: format!("{ext1}.{ext2}"),
        })
    }

    pub fn output_file_name(&self) -> String {
        format!("{}{FIXED_TAG}.{}", self.stem, self.extension)
    }

    /// True when the file name ends in `.fastq.gz` or `.fq.gz`.
    pub fn is_supported(&self) -> bool {
        SUPPORTED_EXTENSIONS.iter().any(|ext| {
            self.file_name
                .strip_suffix(ext)
                .is_some_and(|head| head.is_empty() || head.ends_with('.'))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_last_two_segments() {
        let p = NameParts::from_path("/data/run1/sample.R1.fastq.gz").unwrap();
        assert_eq!(p.file_name, "sample.R1.fastq.gz");
        assert_eq!(p.stem, "sample.R1");
        assert_eq!(p.extension, "fastq.gz");
        assert_eq!(p.output_file_name(), "sample.R1_fixed.fastq.gz");
        assert!(p.is_supported());
    }

    #[test]
    fn short_fq_suffix_supported() {
        let p = NameParts::from_file_name("lane2.fq.gz").unwrap();
        assert_eq!(p.output_file_name(), "lane2_fixed.fq.gz");
        assert!(p.is_supported());
    }

    #[test]
    fn other_extensions_are_not_supported() {
        for name in ["data.txt.gz", "reads.fastq.bz2", "reads.FASTQ.GZ", "a.b.fastq"] {
            let p = NameParts::from_file_name(name).unwrap();
            assert!(!p.is_supported(), "{name}");
        }
        let p = NameParts::from_file_name("data.txt.gz").unwrap();
        assert_eq!(p.output_file_name(), "data_fixed.txt.gz");
    }

    #[test]
    fn name_without_dot_rejected() {
        match NameParts::from_file_name("reads") {
            Err(FixError::InvalidFilename { name }) => assert_eq!(name, "reads"),
            other => panic!("expected InvalidFilename, got {other:?}"),
        }
    }

    #[test]
    fn empty_stem_is_kept() {
        let p = NameParts::from_file_name("reads.gz").unwrap();
        assert_eq!(p.stem, "");
        assert_eq!(p.extension, "reads.gz");
        assert_eq!(p.output_file_name(), "_fixed.reads.gz");
        assert!(!p.is_supported());

        for name in ["fastq.gz", ".fastq.gz"] {
            let p = NameParts::from_file_name(name).unwrap();
            assert_eq!(p.stem, "", "{name}");
            assert_eq!(p.output_file_name(), "_fixed.fastq.gz");
            assert!(p.is_supported(), "{name}");
        }
    }

    #[test]
    fn path_without_file_name_rejected() {
        assert!(matches!(
            NameParts::from_path("/"),
            Err(FixError::InvalidFilename { .. })
        ));
    }
}
