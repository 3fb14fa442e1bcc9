//! CSV export of the trailing seconds of a sample buffer.
//!
//! Layout is a `Sample,Value` header followed by one `index,value` row per
//! sample, re-indexed from zero. Values use the shortest representation that
//! reads back to the same `f64`.

use crate::error::{Result, ScopeError};
use std::io::{Read, Write};

/// Export spans offered to the user, in seconds.
pub const EXPORT_DURATIONS_SECS: [u32; 3] = [5, 10, 15];

const HEADER: [&str; 2] = ["Sample", "Value"];

/// File name used when saving `seconds` of the trace titled `title`.
///
/// # Examples
///
/// ```
/// use wavescope::export::export_file_name;
///
/// assert_eq!(export_file_name("Sine Wave", 5), "waveform_Sine Wave_5s.csv");
/// ```
pub fn export_file_name(title: &str, seconds: u32) -> String {
    format!("waveform_{title}_{seconds}s.csv")
}

/// Writes the last `seconds * sampling_rate_hz` samples as CSV.
///
/// If fewer samples are available, all of them are written. Returns the
/// number of data rows written.
///
/// # Errors
///
/// Returns [`ScopeError::InvalidArgument`] if `seconds` or `sampling_rate_hz`
/// is zero, or [`ScopeError::Csv`] if writing fails.
pub fn export_csv<W: Write>(
    writer: W,
    samples: &[f64],
    seconds: u32,
    sampling_rate_hz: u32,
) -> Result<usize> {
    if seconds == 0 || sampling_rate_hz == 0 {
        return Err(ScopeError::invalid(
            "export duration and sampling rate must be greater than 0",
        ));
    }

    let wanted = seconds as usize * sampling_rate_hz as usize;
    let slice = &samples[samples.len().saturating_sub(wanted)..];
    write_csv(writer, slice)?;
    Ok(slice.len())
}

/// Writes every sample in `samples` as CSV.
pub fn write_csv<W: Write>(writer: W, samples: &[f64]) -> Result<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);

    csv_writer.write_record(HEADER)?;
    for (index, value) in samples.iter().enumerate() {
        csv_writer.write_record([index.to_string(), value.to_string()])?;
    }
    csv_writer.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// Reads back CSV produced by [`write_csv`] as `(index, value)` pairs.
///
/// # Errors
///
/// Returns [`ScopeError::MalformedCsv`] if the header is not `Sample,Value`,
/// or [`ScopeError::Csv`] if a row cannot be decoded.
pub fn parse_csv<R: Read>(reader: R) -> Result<Vec<(usize, f64)>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(reader);

    let headers = csv_reader.headers()?;
    if headers.iter().ne(HEADER) {
        return Err(ScopeError::MalformedCsv {
            msg: format!("expected header Sample,Value, got {headers:?}"),
        });
    }

    let mut rows = Vec::new();
    for record in csv_reader.deserialize::<(usize, f64)>() {
        rows.push(record?);
    }
    Ok(rows)
}
