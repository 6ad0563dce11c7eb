//! Stateless helper utilities used by the XLSX writer kernel.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::LazyLock;

use regex::Regex;

use crate::conf::{
    N_LEN_EXCEL_SHEET_NAME_MAX, N_NCOLS_EXCEL_MAX, N_WIDTH_EXCEL_COLUMN_MAX, TUP_EXCEL_ILLEGAL,
};
use crate::spec::{EnumSheetBlock, SpecCellRange, SpecSheet, SpecXlsxReport, XlsxBuildError};

static RE_COLUMN_RANGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\$?([A-Za-z]{1,3})(?::\$?([A-Za-z]{1,3}))?$").expect("valid column regex")
});

////////////////////////////////////////////////////////////////////////////////
// #region ColumnReferences

/// Convert zero-based column index to Excel letters (`0 -> A`, `27 -> AB`).
pub fn derive_column_letters(col_idx: usize) -> String {
    let mut l_chars = Vec::new();
    let mut n_rest = col_idx + 1;
    while n_rest > 0 {
        let n_rem = (n_rest - 1) % 26;
        l_chars.push((b'A' + n_rem as u8) as char);
        n_rest = (n_rest - 1) / 26;
    }
    l_chars.iter().rev().collect()
}

/// Convert Excel column letters to a zero-based index.
pub fn derive_column_index(letters: &str) -> Result<usize, XlsxBuildError> {
    if letters.is_empty() || !letters.chars().all(|chr| chr.is_ascii_alphabetic()) {
        return Err(XlsxBuildError::InvalidColumnRange(letters.to_string()));
    }

    let mut n_idx = 0usize;
    for chr in letters.chars() {
        let n_digit = (chr.to_ascii_uppercase() as u8 - b'A') as usize + 1;
        n_idx = n_idx * 26 + n_digit;
        if n_idx > N_NCOLS_EXCEL_MAX {
            return Err(XlsxBuildError::InvalidColumnRange(letters.to_string()));
        }
    }
    Ok(n_idx - 1)
}

/// Parse `"A:A"`, `"B:D"` or `"C"` into an inclusive zero-based column span.
pub fn parse_column_range(columns: &str) -> Result<(usize, usize), XlsxBuildError> {
    let Some(caps) = RE_COLUMN_RANGE.captures(columns.trim()) else {
        return Err(XlsxBuildError::InvalidColumnRange(columns.to_string()));
    };

    let n_col_first = derive_column_index(&caps[1])?;
    let n_col_last = match caps.get(2) {
        Some(m) => derive_column_index(m.as_str())?,
        None => n_col_first,
    };
    if n_col_first > n_col_last {
        return Err(XlsxBuildError::InvalidColumnRange(columns.to_string()));
    }
    Ok((n_col_first, n_col_last))
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region SheetNameValidation

/// Check one sheet name against Excel naming rules.
pub fn validate_sheet_name(name: &str) -> Result<(), XlsxBuildError> {
    let fail = |reason: &str| XlsxBuildError::InvalidSheetName {
        name: name.to_string(),
        reason: reason.to_string(),
    };

    if name.trim().is_empty() {
        return Err(fail("name is empty"));
    }
    if name.chars().count() > N_LEN_EXCEL_SHEET_NAME_MAX {
        return Err(fail(&format!(
            "name exceeds {N_LEN_EXCEL_SHEET_NAME_MAX} characters"
        )));
    }
    if let Some(c_illegal) = TUP_EXCEL_ILLEGAL.iter().find(|c| name.contains(**c)) {
        return Err(fail(&format!("contains illegal character {c_illegal:?}")));
    }
    if name.starts_with('\'') || name.ends_with('\'') {
        return Err(fail("name cannot start or end with an apostrophe"));
    }
    Ok(())
}

/// Validate all names and reject case-insensitive duplicates.
pub fn validate_sheet_names<'a>(
    names: impl IntoIterator<Item = &'a str>,
) -> Result<(), XlsxBuildError> {
    let mut set_names_seen = BTreeSet::new();
    for name in names {
        validate_sheet_name(name)?;
        if !set_names_seen.insert(name.to_lowercase()) {
            return Err(XlsxBuildError::DuplicateSheetName(name.to_string()));
        }
    }
    Ok(())
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region LayoutValidation

/// Reject merged blocks covering one cell and any overlap between table and blocks.
pub fn validate_sheet_layout(sheet: &SpecSheet) -> Result<(), XlsxBuildError> {
    let mut l_regions: Vec<SpecCellRange> = Vec::with_capacity(sheet.blocks.len() + 1);
    if let Some(table) = &sheet.table {
        l_regions.push(table.range());
    }

    for block in &sheet.blocks {
        let range = block.range();
        if let EnumSheetBlock::Merged { .. } = block
            && range.is_single_cell()
        {
            return Err(XlsxBuildError::InvalidCellRange {
                range: range.to_string(),
                reason: "merged range must cover at least two cells".to_string(),
            });
        }

        if let Some(range_other) = l_regions.iter().find(|r| r.overlaps(&range)) {
            return Err(XlsxBuildError::OverlappingBlocks {
                sheet_name: sheet.name.clone(),
                range: range.to_string(),
                range_other: range_other.to_string(),
            });
        }
        l_regions.push(range);
    }
    Ok(())
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region ColumnWidths

/// Resolve final column widths from the sheet's hints; later hints override earlier ones.
///
/// Widths outside `0..=255` are clamped and reported as warnings. Columns without a hint keep
/// the Excel default width.
pub fn plan_column_widths(sheet: &SpecSheet, report: &mut SpecXlsxReport) -> BTreeMap<usize, f64> {
    let mut dict_widths = BTreeMap::new();

    for hint in &sheet.column_widths {
        let mut n_width = hint.width;
        if !(0.0..=N_WIDTH_EXCEL_COLUMN_MAX).contains(&n_width) {
            n_width = n_width.clamp(0.0, N_WIDTH_EXCEL_COLUMN_MAX);
            report.warn(format!(
                "Column width {} for {}:{} clamped to {n_width}.",
                hint.width,
                derive_column_letters(hint.col_first),
                derive_column_letters(hint.col_last)
            ));
        }
        for col_idx in hint.col_first..=hint.col_last {
            dict_widths.insert(col_idx, n_width);
        }
    }

    dict_widths
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
