use crate::error::ExportError;
use crate::model::{Distances, SummaryRow};
use std::fs::OpenOptions;
use std::path::Path;
use std::str::FromStr;

/// When to write the `Country,Data Change,Kaart,Total` header row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HeaderPolicy {
    /// Only when the file is empty at open time.
    #[default]
    Auto,
    Always,
    Never,
}

impl FromStr for HeaderPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "auto" => Ok(HeaderPolicy::Auto),
            "always" => Ok(HeaderPolicy::Always),
            "never" => Ok(HeaderPolicy::Never),
            _ => Err(format!(
                "unknown header policy '{s}', expected auto, always or never"
            )),
        }
    }
}

/// Appends the added/modified rows for `country` to the CSV at `path`.
///
/// The file is created if missing and never truncated. Returns the number of
/// rows written, header included. Rows already written stay in place if a
/// later row fails.
pub fn append_summary<P: AsRef<Path>>(
    path: P,
    country: &str,
    distances: &Distances,
    header: HeaderPolicy,
) -> Result<usize, ExportError> {
    let path_ref = path.as_ref();

    let file = OpenOptions::new()
        .append(true)
        .create(true)
        .open(path_ref)
        .map_err(|source| ExportError::FileOpen {
            path: path_ref.to_path_buf(),
            source,
        })?;
    let is_empty = file
        .metadata()
        .map_err(|source| ExportError::FileInspect {
            path: path_ref.to_path_buf(),
            source,
        })?
        .len()
        == 0;

    let write_header = match header {
        HeaderPolicy::Auto => is_empty,
        HeaderPolicy::Always => true,
        HeaderPolicy::Never => false,
    };

    let mut writer = ::csv::WriterBuilder::new()
        .terminator(::csv::Terminator::CRLF)
        .from_writer(file);

    let mut written = 0;
    if write_header {
        writer.write_record(SummaryRow::HEADER)?;
        written += 1;
    }

    for row in distances.summary_rows(country) {
        writer.write_record(row.to_record())?;
        written += 1;
    }

    writer.flush().map_err(|e| ExportError::WriteError {
        message: e.to_string(),
    })?;

    Ok(written)
}
