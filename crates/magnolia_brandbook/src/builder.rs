//! Workbook assembly: literal catalog in, `.xlsx` out.

use std::path::Path;

use magnolia_io_xlsx::{SpecXlsxReport, XlsxBuildError, XlsxWriter};

use crate::catalog::derive_brandbook;

/// Build the brand workbook and save it to `path_file_out`.
///
/// The catalog is validated before the file is created; I/O failures on save are returned as-is.
pub fn write_brandbook(path_file_out: &Path) -> Result<Vec<SpecXlsxReport>, XlsxBuildError> {
    let spec = derive_brandbook()?;
    let mut writer = XlsxWriter::with_defaults(path_file_out.to_path_buf());
    log::debug!("Writing {} sheets to {}", spec.sheets.len(), writer.file_out());
    writer.write_workbook(&spec)?;
    writer.close()?;
    Ok(writer.report())
}

/// Build the brand workbook in memory.
pub fn render_brandbook() -> Result<Vec<u8>, XlsxBuildError> {
    let spec = derive_brandbook()?;
    let mut writer = XlsxWriter::with_defaults(spec.file_name.clone().into());
    writer.write_workbook(&spec)?;
    writer.save_to_buffer()
}
