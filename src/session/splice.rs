//! Copy the xinitrc template up to its anchor line and append desktop commands.

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use tracing::{debug, info};

use crate::lib::errors::SpliceError;

/// Inputs for a single splice.
#[derive(Debug, Clone, Copy)]
pub struct SpliceRequest<'a> {
    pub source: &'a Path,
    pub destination: &'a Path,
    /// Compared against whole lines, without the trailing newline.
    pub anchor: &'a str,
    pub commands: &'a [String],
}

/// Line counts written by a successful splice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpliceReport {
    pub copied_lines: usize,
    pub appended_lines: usize,
}

/// Write `request.destination` as the template lines preceding the anchor
/// followed by one line per command.
///
/// The destination is truncated first. When the anchor never appears the
/// lines copied so far stay on disk and [`SpliceError::AnchorNotFound`] is
/// returned.
pub fn splice(request: &SpliceRequest<'_>) -> Result<SpliceReport, SpliceError> {
    let source = File::open(request.source).map_err(|source| SpliceError::SourceUnavailable {
        path: request.source.to_path_buf(),
        source,
    })?;
    let destination =
        File::create(request.destination).map_err(|source| SpliceError::DestUnavailable {
            path: request.destination.to_path_buf(),
            source,
        })?;

    let mut reader = BufReader::new(source);
    let mut writer = BufWriter::new(destination);
    let write_failure = |source| SpliceError::WriteFailure {
        path: request.destination.to_path_buf(),
        source,
    };

    let anchor = request.anchor.as_bytes();
    let mut copied_lines = 0;
    let mut line = Vec::new();
    let anchor_found = loop {
        line.clear();
        let read = reader
            .read_until(b'\n', &mut line)
            .map_err(|source| SpliceError::ReadFailure {
                path: request.source.to_path_buf(),
                source,
            })?;
        if read == 0 {
            break false;
        }

        let content = line.strip_suffix(b"\n").unwrap_or(&line);
        if content == anchor {
            break true;
        }

        writer
            .write_all(content)
            .and_then(|()| writer.write_all(b"\n"))
            .map_err(write_failure)?;
        copied_lines += 1;
    };

    if !anchor_found {
        writer.flush().map_err(write_failure)?;
        debug!(
            target: "sxssion::splice",
            source = %request.source.display(),
            copied_lines,
            "Reached end of template without anchor"
        );
        return Err(SpliceError::AnchorNotFound {
            anchor: request.anchor.to_string(),
            path: request.source.to_path_buf(),
        });
    }

    for command in request.commands {
        writer
            .write_all(command.as_bytes())
            .and_then(|()| writer.write_all(b"\n"))
            .map_err(write_failure)?;
    }
    writer.flush().map_err(write_failure)?;

    let report = SpliceReport {
        copied_lines,
        appended_lines: request.commands.len(),
    };
    info!(
        target: "sxssion::splice",
        source = %request.source.display(),
        destination = %request.destination.display(),
        copied_lines = report.copied_lines,
        appended_lines = report.appended_lines,
        "Wrote session script"
    );
    Ok(report)
}
