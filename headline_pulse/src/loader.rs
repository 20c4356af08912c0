//! Read already-fetched headline batches from disk

use crate::{PulseError, RawHeadline};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::debug;

/// Load a headline batch, picking the format from the file extension
///
/// `.json` files hold an array of headline objects; `.csv` files have a
/// `title,link,published` header.
pub fn load_headlines<P: AsRef<Path>>(path: P) -> Result<Vec<RawHeadline>, PulseError> {
    let path = path.as_ref();
    match path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .as_deref()
    {
        Some("json") => load_headlines_json(path),
        Some("csv") => load_headlines_csv(path),
        _ => Err(PulseError::DataLoadError(format!(
            "Unsupported headline file: {}",
            path.display()
        ))),
    }
}

/// Load a JSON array of `{title, link, published}` objects
pub fn load_headlines_json<P: AsRef<Path>>(path: P) -> Result<Vec<RawHeadline>, PulseError> {
    let file = File::open(path.as_ref())?;
    let headlines: Vec<RawHeadline> = serde_json::from_reader(BufReader::new(file))?;
    debug!(count = headlines.len(), path = %path.as_ref().display(), "loaded JSON headlines");
    Ok(headlines)
}

/// Load a CSV file with a `title,link,published` header
///
/// `link` and `published` columns may be missing or empty.
pub fn load_headlines_csv<P: AsRef<Path>>(path: P) -> Result<Vec<RawHeadline>, PulseError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_path(path.as_ref())?;

    let mut headlines = Vec::new();
    for (i, record) in reader.deserialize::<RawHeadline>().enumerate() {
        let headline = record.map_err(|e| {
            PulseError::DataLoadError(format!("Invalid headline at line {}: {}", i + 2, e))
        })?;
        headlines.push(headline);
    }

    debug!(count = headlines.len(), path = %path.as_ref().display(), "loaded CSV headlines");
    Ok(headlines)
}
