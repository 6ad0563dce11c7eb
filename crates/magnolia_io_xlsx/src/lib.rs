//! `magnolia_io_xlsx` v1:
//! Styled-table XLSX writer kernel.
//!
//! Modules:
//! - `conf`   : constants, brand palette and default presets
//! - `spec`   : tables/sheets/styles/reports/errors
//! - `util`   : pure helper functions (column refs, validation, widths)
//! - `writer` : `rust_xlsxwriter`-backed workbook writer
pub mod conf;
pub mod spec;
pub mod util;
pub mod writer;

pub use conf::{
    C_COLOR_GOLD, C_COLOR_MAGNOLIA_WHITE, C_COLOR_MIDNIGHT_BLUE, C_COLOR_SAGE_GREEN,
    C_COLOR_WARM_GRAY, N_LEN_EXCEL_SHEET_NAME_MAX, N_NCOLS_EXCEL_MAX, N_NROWS_EXCEL_MAX,
    derive_default_style_set,
};
pub use spec::{
    EnumRaggedRowPolicy, EnumSheetBlock, EnumStyleKey, SpecCellFormat, SpecCellRange,
    SpecColumnWidth, SpecSheet, SpecStyleSet, SpecTable, SpecWorkbook, SpecXlsxReport,
    XlsxBuildError,
};
pub use util::{
    derive_column_letters, parse_column_range, validate_sheet_layout, validate_sheet_names,
};
pub use writer::XlsxWriter;
