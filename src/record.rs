/// One four-line FASTQ record, lines kept as raw bytes without terminators.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FastqRecord {
    pub header: Vec<u8>,
    pub seq: Vec<u8>,
    pub sep: Vec<u8>,
    pub qual: Vec<u8>,
}

impl FastqRecord {
    /// Remove every space from an `@` header. Returns whether the header changed.
    pub fn fix_header(&mut self) -> bool {
        if !self.header.starts_with(b"@") {
            return false;
        }
        let before = self.header.len();
        self.header.retain(|&b| b != b' ');
        self.header.len() != before
    }
}
