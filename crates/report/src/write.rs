use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use matching::ComparisonReport;
use tracing::info;

use crate::error::ReportError;
use crate::format::pair_file_name;
use crate::html::{render_pair_page, render_results_table};

/// Name of the results table page inside the report directory.
pub const RESULTS_FILE: &str = "_results.html";

/// Write `contents` and make sure they reached the disk before returning.
fn write_synced(path: &Path, contents: &[u8]) -> Result<(), ReportError> {
    let file = File::create(path).map_err(|err| ReportError::io(path, err))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(contents)
        .and_then(|()| writer.flush())
        .map_err(|err| ReportError::io(path, err))?;
    writer
        .get_ref()
        .sync_all()
        .map_err(|err| ReportError::io(path, err))
}

/// Write `_results.html` plus one `<index>.html` page per pair into `dir`,
/// creating it if needed. Returns the path of the results page.
pub fn write_html_report(dir: impl AsRef<Path>, report: &ComparisonReport) -> Result<PathBuf, ReportError> {
    let dir = dir.as_ref();
    let start = Instant::now();
    fs::create_dir_all(dir).map_err(|err| ReportError::io(dir, err))?;

    for pair in &report.pairs {
        let path = dir.join(pair_file_name(pair.index));
        write_synced(&path, render_pair_page(pair).as_bytes())?;
    }

    let results = dir.join(RESULTS_FILE);
    write_synced(&results, render_results_table(&report.matrix).as_bytes())?;

    info!(
        dir = %dir.display(),
        pages = report.pairs.len() + 1,
        elapsed_micros = start.elapsed().as_micros(),
        "html_report_written"
    );
    Ok(results)
}

/// Write the whole report (matrix, pairs, spans, colors) as pretty JSON.
pub fn write_json_report(path: impl AsRef<Path>, report: &ComparisonReport) -> Result<(), ReportError> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|err| ReportError::io(parent, err))?;
    }
    let json = serde_json::to_vec_pretty(report)?;
    write_synced(path, &json)?;
    info!(path = %path.display(), bytes = json.len(), "json_report_written");
    Ok(())
}
