//! File-based editing context.
//!
//! The editing context for a snippet insert is a file path plus either
//! a byte range to replace (the "selection") or a byte offset to
//! insert at. All validation happens against an in-memory
//! copy before anything is written, so a failing edit leaves the file
//! byte-identical.

use anyhow::{Context, Result, bail};
use std::fmt;
use std::ops::Range;
use std::path::Path;
use std::str::FromStr;

/// Where in the target file the snippet goes.
#[derive(Debug, Clone, PartialEq)]
pub enum InsertPosition {
    /// Replace this byte range (delete-then-insert as one splice).
    Replace(Range<usize>),
    /// Insert at this byte offset without deleting anything.
    At(usize),
    /// Append at end of file.
    End,
}

/// A `START..END` byte range as given on the command line.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionRange {
    pub start: usize,
    pub end: usize,
}

impl FromStr for SelectionRange {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (start, end) = s
            .split_once("..")
            .ok_or_else(|| format!("expected START..END, got '{s}'"))?;
        let start: usize = start
            .trim()
            .parse()
            .map_err(|_| format!("invalid start offset '{start}'"))?;
        let end: usize = end
            .trim()
            .parse()
            .map_err(|_| format!("invalid end offset '{end}'"))?;
        if start > end {
            return Err(format!("selection start {start} is past its end {end}"));
        }
        Ok(SelectionRange { start, end })
    }
}

impl fmt::Display for SelectionRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// Splice `snippet` into the file at `position`.
///
/// The file must already exist (the editing context is an open
/// document, not a file to create). Offsets are validated to be in
/// bounds and on UTF-8 character boundaries before any write; on error
/// the file is untouched.
pub fn apply_edit(path: &Path, position: &InsertPosition, snippet: &str) -> Result<()> {
    if !path.exists() {
        bail!(
            "No editing context: file {} does not exist",
            path.display()
        );
    }

    let mut contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let range = resolve_range(&contents, position)?;
    contents.replace_range(range, snippet);

    std::fs::write(path, &contents)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    log::info!("Inserted snippet into {}", path.display());
    Ok(())
}

/// Validate `position` against `contents` and return the byte range to
/// replace (empty for pure insertion).
fn resolve_range(contents: &str, position: &InsertPosition) -> Result<Range<usize>> {
    let check_boundary = |offset: usize| -> Result<()> {
        if offset > contents.len() {
            bail!(
                "Offset {} is past the end of the file ({} bytes)",
                offset,
                contents.len()
            );
        }
        if !contents.is_char_boundary(offset) {
            bail!("Offset {} is not on a character boundary", offset);
        }
        Ok(())
    };

    match position {
        InsertPosition::Replace(range) => {
            if range.start > range.end {
                bail!(
                    "Selection start {} is past its end {}",
                    range.start,
                    range.end
                );
            }
            check_boundary(range.start)?;
            check_boundary(range.end)?;
            Ok(range.clone())
        }
        InsertPosition::At(offset) => {
            check_boundary(*offset)?;
            Ok(*offset..*offset)
        }
        InsertPosition::End => Ok(contents.len()..contents.len()),
    }
}
