use std::fs::File;
use std::io::{self, Read, Seek, SeekFrom};

pub const GZIP_MAGIC: [u8; 2] = [0x1F, 0x8B];

pub fn looks_like_gzip<R: Read + Seek>(mut r: R) -> io::Result<bool> {
    let mut magic = [0u8; 2];
    let pos = r.stream_position()?;
    let n = r.read(&mut magic)?;
    r.seek(SeekFrom::Start(pos))?;
    Ok(n >= 2 && magic == GZIP_MAGIC)
}

pub fn open_file(path: &std::path::Path) -> io::Result<File> {
    std::fs::File::open(path)
}

/// Drop trailing ASCII whitespace (including the line terminator) in place.
pub fn trim_end_in_place(buf: &mut Vec<u8>) {
    while buf.last().is_some_and(u8::is_ascii_whitespace) {
        buf.pop();
    }
}
