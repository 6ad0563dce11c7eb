//! Shared XLSX specification models, options and errors.

use std::collections::BTreeMap;
use std::fmt;

use rust_xlsxwriter::XlsxError;
use thiserror::Error;

use crate::conf::{N_NCOLS_EXCEL_MAX, N_NROWS_EXCEL_MAX};
use crate::util::{derive_column_letters, parse_column_range};

////////////////////////////////////////////////////////////////////////////////
// #region Errors

/// Errors raised while assembling or writing a workbook.
#[derive(Debug, Error)]
pub enum XlsxBuildError {
    /// Table has no header row, or the header has no cells.
    #[error("Table must have a non-empty header row.")]
    EmptyTable,
    /// Row width differs from header width.
    #[error(
        "Ragged table row {row_idx}: expected {n_cols_expected} cells, found {n_cols_found}."
    )]
    RaggedRow {
        /// Zero-based row index inside the table (header is row 0).
        row_idx: usize,
        /// Header width.
        n_cols_expected: usize,
        /// Width of the offending row.
        n_cols_found: usize,
    },
    /// Sheet name rejected by Excel naming rules.
    #[error("Invalid sheet name {name:?}: {reason}")]
    InvalidSheetName {
        /// Offending name.
        name: String,
        /// Rule that was violated.
        reason: String,
    },
    /// Sheet name already used in the same workbook.
    #[error("Duplicate sheet name: {0:?}")]
    DuplicateSheetName(String),
    /// Column reference like `"B:D"` could not be parsed.
    #[error("Invalid column range {0:?}")]
    InvalidColumnRange(String),
    /// Cell range is inverted, out of Excel bounds, or unusable for its block.
    #[error("Invalid cell range {range}: {reason}")]
    InvalidCellRange {
        /// Range in A1 notation (best effort).
        range: String,
        /// Rule that was violated.
        reason: String,
    },
    /// Two layout regions on the same sheet share at least one cell.
    #[error("Sheet {sheet_name:?}: {range} overlaps {range_other}")]
    OverlappingBlocks {
        /// Sheet that owns both regions.
        sheet_name: String,
        /// First region in A1 notation.
        range: String,
        /// Second region in A1 notation.
        range_other: String,
    },
    /// Writer was already closed.
    #[error("Cannot write after close().")]
    WriterClosed,
    /// Row or column index does not fit the xlsx index types.
    #[error("{axis} index overflow: {value}")]
    IndexOverflow {
        /// `"row"` or `"column"`.
        axis: &'static str,
        /// Offending index.
        value: usize,
    },
    /// Error reported by `rust_xlsxwriter`, including I/O failures on save.
    #[error("xlsx write error: {0}")]
    Xlsx(#[from] XlsxError),
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region CellFormatSpecification

/// Cell format specification; `None` fields are left at the Excel default.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct SpecCellFormat {
    /// Font family name.
    pub font_name: Option<String>,
    /// Font size in points.
    pub font_size: Option<i64>,
    /// Bold style.
    pub bold: Option<bool>,

    /// Horizontal alignment.
    pub align: Option<String>,
    /// Vertical alignment.
    pub valign: Option<String>,
    /// Border on all sides (`0` none, `1` thin).
    pub border: Option<i64>,
    /// Text wrap.
    pub text_wrap: Option<bool>,
    /// Background fill color.
    pub bg_color: Option<String>,
    /// Font color.
    pub font_color: Option<String>,
}

impl SpecCellFormat {
    /// Return a new format by overlaying `patch` onto `self`.
    pub fn with_(&self, patch: SpecCellFormat) -> SpecCellFormat {
        self.merge(&patch)
    }

    /// Merge two formats with right-side non-`None` overwrite semantics.
    pub fn merge(&self, other: &SpecCellFormat) -> SpecCellFormat {
        SpecCellFormat {
            font_name: other.font_name.clone().or_else(|| self.font_name.clone()),
            font_size: other.font_size.or(self.font_size),
            bold: other.bold.or(self.bold),
            align: other.align.clone().or_else(|| self.align.clone()),
            valign: other.valign.clone().or_else(|| self.valign.clone()),
            border: other.border.or(self.border),
            text_wrap: other.text_wrap.or(self.text_wrap),
            bg_color: other.bg_color.clone().or_else(|| self.bg_color.clone()),
            font_color: other.font_color.clone().or_else(|| self.font_color.clone()),
        }
    }
}

/// Named style slots shared by every sheet of a workbook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EnumStyleKey {
    /// Table header row and section captions.
    Header,
    /// Table body rows.
    Body,
    /// Diagram blocks and highlighted summary cells.
    Accent,
}

/// The three workbook styles, addressed by [`EnumStyleKey`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SpecStyleSet {
    /// Header style.
    pub header: SpecCellFormat,
    /// Body style.
    pub body: SpecCellFormat,
    /// Accent style.
    pub accent: SpecCellFormat,
}

impl SpecStyleSet {
    /// Return the format registered for `key`.
    pub fn get(&self, key: EnumStyleKey) -> &SpecCellFormat {
        match key {
            EnumStyleKey::Header => &self.header,
            EnumStyleKey::Body => &self.body,
            EnumStyleKey::Accent => &self.accent,
        }
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region TableSpecification

/// How to treat body rows whose width differs from the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnumRaggedRowPolicy {
    /// Fail with [`XlsxBuildError::RaggedRow`] (default).
    #[default]
    Reject,
    /// Pad short rows with empty cells; long rows are still rejected.
    Pad,
}

/// Literal table: row 0 is the header, every row has the header's width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecTable {
    rows: Vec<Vec<String>>,
}

impl SpecTable {
    /// Build a table, rejecting ragged rows.
    pub fn from_rows<R, S>(rows: R) -> Result<Self, XlsxBuildError>
    where
        R: IntoIterator,
        R::Item: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::from_rows_with(rows, EnumRaggedRowPolicy::Reject)
    }

    /// Build a table with an explicit ragged-row policy.
    pub fn from_rows_with<R, S>(
        rows: R,
        rule_ragged: EnumRaggedRowPolicy,
    ) -> Result<Self, XlsxBuildError>
    where
        R: IntoIterator,
        R::Item: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut l_rows: Vec<Vec<String>> = rows
            .into_iter()
            .map(|row| row.into_iter().map(Into::into).collect())
            .collect();

        let n_width = l_rows.first().map_or(0, Vec::len);
        if n_width == 0 {
            return Err(XlsxBuildError::EmptyTable);
        }
        if n_width > N_NCOLS_EXCEL_MAX || l_rows.len() > N_NROWS_EXCEL_MAX {
            return Err(XlsxBuildError::InvalidCellRange {
                range: format!("{}x{}", l_rows.len(), n_width),
                reason: "table exceeds Excel worksheet limits".to_string(),
            });
        }

        for (row_idx, row) in l_rows.iter_mut().enumerate().skip(1) {
            let n_cols_found = row.len();
            if n_cols_found == n_width {
                continue;
            }
            if n_cols_found < n_width && rule_ragged == EnumRaggedRowPolicy::Pad {
                row.resize(n_width, String::new());
                continue;
            }
            return Err(XlsxBuildError::RaggedRow {
                row_idx,
                n_cols_expected: n_width,
                n_cols_found,
            });
        }

        Ok(Self { rows: l_rows })
    }

    /// Header cells.
    pub fn header(&self) -> &[String] {
        &self.rows[0]
    }

    /// Body rows (everything after the header).
    pub fn body(&self) -> &[Vec<String>] {
        &self.rows[1..]
    }

    /// All rows including the header.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Number of rows including the header.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.rows[0].len()
    }

    /// Region covered by this table when anchored at `A1`.
    pub fn range(&self) -> SpecCellRange {
        SpecCellRange {
            row_first: 0,
            col_first: 0,
            row_last: self.height() - 1,
            col_last: self.width() - 1,
        }
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region LayoutSpecification

/// Inclusive rectangular cell range (zero-based indices).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SpecCellRange {
    /// First row (inclusive).
    pub row_first: usize,
    /// First column (inclusive).
    pub col_first: usize,
    /// Last row (inclusive).
    pub row_last: usize,
    /// Last column (inclusive).
    pub col_last: usize,
}

impl SpecCellRange {
    /// Build a validated range.
    pub fn new(
        row_first: usize,
        col_first: usize,
        row_last: usize,
        col_last: usize,
    ) -> Result<Self, XlsxBuildError> {
        let range = Self {
            row_first,
            col_first,
            row_last,
            col_last,
        };
        if row_first > row_last || col_first > col_last {
            return Err(XlsxBuildError::InvalidCellRange {
                range: format!("({row_first},{col_first})..({row_last},{col_last})"),
                reason: "first cell must not come after last cell".to_string(),
            });
        }
        if row_last >= N_NROWS_EXCEL_MAX || col_last >= N_NCOLS_EXCEL_MAX {
            return Err(XlsxBuildError::InvalidCellRange {
                range: format!("({row_first},{col_first})..({row_last},{col_last})"),
                reason: "range exceeds Excel worksheet limits".to_string(),
            });
        }
        Ok(range)
    }

    /// One-cell range.
    pub fn cell(row: usize, col: usize) -> Result<Self, XlsxBuildError> {
        Self::new(row, col, row, col)
    }

    /// Whether the range covers exactly one cell.
    pub fn is_single_cell(&self) -> bool {
        self.row_first == self.row_last && self.col_first == self.col_last
    }

    /// Whether two ranges share at least one cell.
    pub fn overlaps(&self, other: &SpecCellRange) -> bool {
        self.row_first <= other.row_last
            && other.row_first <= self.row_last
            && self.col_first <= other.col_last
            && other.col_first <= self.col_last
    }

    /// Whether `(row, col)` lies inside the range.
    pub fn contains(&self, row: usize, col: usize) -> bool {
        (self.row_first..=self.row_last).contains(&row)
            && (self.col_first..=self.col_last).contains(&col)
    }
}

impl fmt::Display for SpecCellRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c_first = format!(
            "{}{}",
            derive_column_letters(self.col_first),
            self.row_first + 1
        );
        if self.is_single_cell() {
            return write!(f, "{c_first}");
        }
        write!(
            f,
            "{c_first}:{}{}",
            derive_column_letters(self.col_last),
            self.row_last + 1
        )
    }
}

/// Width hint for an inclusive column span.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpecColumnWidth {
    /// First column (inclusive).
    pub col_first: usize,
    /// Last column (inclusive).
    pub col_last: usize,
    /// Width in character units.
    pub width: f64,
}

impl SpecColumnWidth {
    /// Parse an A1-style column span (`"A:A"`, `"B:D"`, `"C"`).
    pub fn parse(columns: &str, width: f64) -> Result<Self, XlsxBuildError> {
        let (col_first, col_last) = parse_column_range(columns)?;
        Ok(Self {
            col_first,
            col_last,
            width,
        })
    }
}

/// Extra content placed around the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnumSheetBlock {
    /// One styled cell (captions, summary figures).
    Cell {
        /// Row index.
        row: usize,
        /// Column index.
        col: usize,
        /// Cell text.
        text: String,
        /// Style slot.
        style: EnumStyleKey,
    },
    /// Text written into a merged range (diagrams, banners).
    Merged {
        /// Merged region; must cover at least two cells.
        range: SpecCellRange,
        /// Cell text, written as-is (line breaks preserved).
        text: String,
        /// Style slot.
        style: EnumStyleKey,
    },
}

impl EnumSheetBlock {
    /// Region occupied by this block.
    pub fn range(&self) -> SpecCellRange {
        match self {
            Self::Cell { row, col, .. } => SpecCellRange {
                row_first: *row,
                col_first: *col,
                row_last: *row,
                col_last: *col,
            },
            Self::Merged { range, .. } => *range,
        }
    }
}

/// One worksheet: name, optional table, width hints and extra blocks.
#[derive(Debug, Clone, PartialEq)]
pub struct SpecSheet {
    /// Sheet tab name.
    pub name: String,
    /// Table anchored at `A1`.
    pub table: Option<SpecTable>,
    /// Column width hints; later hints override earlier ones.
    pub column_widths: Vec<SpecColumnWidth>,
    /// Blocks written after the table.
    pub blocks: Vec<EnumSheetBlock>,
}

impl SpecSheet {
    /// Empty sheet.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            table: None,
            column_widths: Vec::new(),
            blocks: Vec::new(),
        }
    }

    /// Set the table.
    pub fn with_table(mut self, table: SpecTable) -> Self {
        self.table = Some(table);
        self
    }

    /// Add a width hint from an A1-style column span.
    pub fn with_column_width(mut self, columns: &str, width: f64) -> Result<Self, XlsxBuildError> {
        self.column_widths.push(SpecColumnWidth::parse(columns, width)?);
        Ok(self)
    }

    /// Add a single styled cell.
    pub fn with_cell(
        mut self,
        row: usize,
        col: usize,
        text: impl Into<String>,
        style: EnumStyleKey,
    ) -> Self {
        self.blocks.push(EnumSheetBlock::Cell {
            row,
            col,
            text: text.into(),
            style,
        });
        self
    }

    /// Add merged text.
    pub fn with_merged(
        mut self,
        range: SpecCellRange,
        text: impl Into<String>,
        style: EnumStyleKey,
    ) -> Self {
        self.blocks.push(EnumSheetBlock::Merged {
            range,
            text: text.into(),
            style,
        });
        self
    }

    /// Add an accent-styled diagram with an optional header-styled caption on the row above.
    pub fn with_diagram(
        self,
        caption: Option<&str>,
        range: SpecCellRange,
        text: impl Into<String>,
    ) -> Result<Self, XlsxBuildError> {
        let sheet = match caption {
            Some(c_caption) => {
                let Some(n_row_caption) = range.row_first.checked_sub(1) else {
                    return Err(XlsxBuildError::InvalidCellRange {
                        range: range.to_string(),
                        reason: "captioned diagram cannot start on the first row".to_string(),
                    });
                };
                self.with_cell(n_row_caption, range.col_first, c_caption, EnumStyleKey::Header)
            }
            None => self,
        };
        Ok(sheet.with_merged(range, text, EnumStyleKey::Accent))
    }
}

/// Ordered sheets plus output file name.
#[derive(Debug, Clone, PartialEq)]
pub struct SpecWorkbook {
    /// Default output file name.
    pub file_name: String,
    /// Sheets in tab order.
    pub sheets: Vec<SpecSheet>,
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region ReportSpecification

/// Per-sheet write report.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SpecXlsxReport {
    /// Actual sheet name in the workbook.
    pub sheet_name: String,
    /// Table rows written, header included (0 when the sheet has no table).
    pub n_rows_table: usize,
    /// Table columns written.
    pub n_cols_table: usize,
    /// Final width per column index.
    pub widths_by_col: BTreeMap<usize, f64>,
    /// Merged ranges written.
    pub merges: Vec<SpecCellRange>,
    /// Style slot assigned to each written cell (merged ranges keyed by anchor).
    pub styles_by_cell: BTreeMap<(usize, usize), EnumStyleKey>,
    /// Non-fatal warnings.
    pub warnings: Vec<String>,
}

impl SpecXlsxReport {
    /// Add a warning message.
    pub fn warn(&mut self, msg: impl AsRef<str>) {
        self.warnings.push(msg.as_ref().to_string());
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
