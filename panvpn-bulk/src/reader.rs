use std::fs;
use std::io;
use std::path::Path;

/// Read an input file into raw records, discarding the header row.
pub fn read_records(path: &Path) -> io::Result<Vec<Vec<String>>> {
    let text = fs::read_to_string(path)?;
    Ok(split_records(&text))
}

/// Split input text into records. The first line is the header and is
/// dropped; blank lines are skipped. The format carries no quoting, so a
/// plain comma split is the whole grammar.
pub fn split_records(text: &str) -> Vec<Vec<String>> {
    text.lines()
        .skip(1)
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.split(',').map(str::to_string).collect())
        .collect()
}
