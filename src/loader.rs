use crate::error::Result;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Lines};
use std::path::Path;

/// Lazy line source over a link map file.
///
/// Lines are pulled one at a time through a buffered reader, so peak memory is
/// bounded by the parsed records rather than the raw text, and the scanner can
/// stop reading as soon as it has seen everything it needs.
pub struct LinkMapSource {
    lines: Lines<BufReader<File>>,
}

impl LinkMapSource {
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        Ok(Self { lines: BufReader::new(file).lines() })
    }
}

impl Iterator for LinkMapSource {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.lines.next()
    }
}
