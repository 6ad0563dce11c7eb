//! XLSX writer kernel that turns sheet specifications into workbook output.

use std::collections::BTreeSet;
use std::path::PathBuf;

use rust_xlsxwriter::{Format, FormatAlign, FormatBorder, Workbook, Worksheet};

use crate::conf::derive_default_style_set;
use crate::spec::{
    EnumSheetBlock, EnumStyleKey, SpecCellFormat, SpecCellRange, SpecSheet, SpecStyleSet,
    SpecTable, SpecWorkbook, SpecXlsxReport, XlsxBuildError,
};
use crate::util::{
    plan_column_widths, validate_sheet_layout, validate_sheet_name, validate_sheet_names,
};

/// Compiled `rust_xlsxwriter` formats for the three style slots.
struct XlsxFormatSet {
    header: Format,
    body: Format,
    accent: Format,
}

impl XlsxFormatSet {
    fn new(style_set: &SpecStyleSet) -> Self {
        Self {
            header: derive_rust_xlsx_format(&style_set.header),
            body: derive_rust_xlsx_format(&style_set.body),
            accent: derive_rust_xlsx_format(&style_set.accent),
        }
    }

    fn get(&self, key: EnumStyleKey) -> &Format {
        match key {
            EnumStyleKey::Header => &self.header,
            EnumStyleKey::Body => &self.body,
            EnumStyleKey::Accent => &self.accent,
        }
    }
}

/// Stateful workbook writer.
pub struct XlsxWriter {
    path_file_out: PathBuf,
    workbook: Workbook,
    formats: XlsxFormatSet,
    set_sheet_names_existing: BTreeSet<String>,
    l_reports: Vec<SpecXlsxReport>,
    if_closed: bool,
}

impl XlsxWriter {
    /// Create writer bound to output path and style presets.
    ///
    /// The workbook is buffered in memory until [`Self::close`] is called.
    pub fn new(path_file_out: PathBuf, style_set: &SpecStyleSet) -> Self {
        Self {
            path_file_out,
            workbook: Workbook::new(),
            formats: XlsxFormatSet::new(style_set),
            set_sheet_names_existing: BTreeSet::new(),
            l_reports: Vec::new(),
            if_closed: false,
        }
    }

    /// Create writer with the brand style presets.
    pub fn with_defaults(path_file_out: PathBuf) -> Self {
        Self::new(path_file_out, &derive_default_style_set())
    }

    /// Return output file path as string.
    pub fn file_out(&self) -> String {
        self.path_file_out.to_string_lossy().to_string()
    }

    /// Return immutable snapshot of per-sheet write reports.
    pub fn report(&self) -> Vec<SpecXlsxReport> {
        self.l_reports.clone()
    }

    /// Flush workbook to disk. Idempotent.
    pub fn close(&mut self) -> Result<(), XlsxBuildError> {
        if self.if_closed {
            return Ok(());
        }
        self.workbook.save(&self.path_file_out)?;
        self.if_closed = true;
        log::info!(
            "Saved workbook {} ({} sheets)",
            self.path_file_out.display(),
            self.l_reports.len()
        );
        Ok(())
    }

    /// Render the workbook to bytes without touching the output path.
    pub fn save_to_buffer(&mut self) -> Result<Vec<u8>, XlsxBuildError> {
        Ok(self.workbook.save_to_buffer()?)
    }

    /// Validate every sheet of `spec`, then write them in order.
    ///
    /// Nothing is added to the workbook when any sheet fails validation.
    pub fn write_workbook(&mut self, spec: &SpecWorkbook) -> Result<(), XlsxBuildError> {
        if self.if_closed {
            return Err(XlsxBuildError::WriterClosed);
        }
        validate_sheet_names(
            self.set_sheet_names_existing
                .iter()
                .map(String::as_str)
                .chain(spec.sheets.iter().map(|sheet| sheet.name.as_str())),
        )?;
        for sheet in &spec.sheets {
            validate_sheet_layout(sheet)?;
        }

        for sheet in &spec.sheets {
            self.write_sheet(sheet)?;
        }
        Ok(())
    }

    /// Write one sheet: column widths, table, then extra blocks.
    pub fn write_sheet(&mut self, sheet: &SpecSheet) -> Result<(), XlsxBuildError> {
        if self.if_closed {
            return Err(XlsxBuildError::WriterClosed);
        }
        validate_sheet_name(&sheet.name)?;
        if self
            .set_sheet_names_existing
            .contains(&sheet.name.to_lowercase())
        {
            return Err(XlsxBuildError::DuplicateSheetName(sheet.name.clone()));
        }
        validate_sheet_layout(sheet)?;

        let mut report = SpecXlsxReport {
            sheet_name: sheet.name.clone(),
            ..Default::default()
        };

        let worksheet = self.workbook.add_worksheet();
        worksheet.set_name(&sheet.name)?;
        self.set_sheet_names_existing
            .insert(sheet.name.to_lowercase());

        let dict_widths = plan_column_widths(sheet, &mut report);
        for (col_idx, width) in &dict_widths {
            worksheet.set_column_width(cast_col_num(*col_idx)?, *width)?;
        }
        report.widths_by_col = dict_widths;

        if let Some(table) = &sheet.table {
            populate_table(worksheet, table, &self.formats, &mut report)?;
        }

        for block in &sheet.blocks {
            match block {
                EnumSheetBlock::Cell {
                    row,
                    col,
                    text,
                    style,
                } => {
                    write_text_cell(worksheet, *row, *col, text, self.formats.get(*style))?;
                    report.styles_by_cell.insert((*row, *col), *style);
                }
                EnumSheetBlock::Merged { range, text, style } => {
                    inject_merged_block(worksheet, range, text, self.formats.get(*style))?;
                    report.styles_by_cell.insert((range.row_first, range.col_first), *style);
                    report.merges.push(*range);
                }
            }
        }

        for c_warning in &report.warnings {
            log::warn!("{}: {c_warning}", sheet.name);
        }
        log::debug!(
            "Wrote sheet {:?}: rows={} cols={} merges={}",
            sheet.name,
            report.n_rows_table,
            report.n_cols_table,
            report.merges.len()
        );

        self.l_reports.push(report);
        Ok(())
    }
}

/// Write `table` anchored at `A1`: header style on row 0, body style below.
fn populate_table(
    worksheet: &mut Worksheet,
    table: &SpecTable,
    formats: &XlsxFormatSet,
    report: &mut SpecXlsxReport,
) -> Result<(), XlsxBuildError> {
    for (row_idx, row_values) in table.rows().iter().enumerate() {
        let key_style = if row_idx == 0 {
            EnumStyleKey::Header
        } else {
            EnumStyleKey::Body
        };
        let fmt_row = formats.get(key_style);

        for (col_idx, cell_value) in row_values.iter().enumerate() {
            write_text_cell(worksheet, row_idx, col_idx, cell_value, fmt_row)?;
            report.styles_by_cell.insert((row_idx, col_idx), key_style);
        }
    }

    report.n_rows_table = table.height();
    report.n_cols_table = table.width();
    Ok(())
}

/// Write multi-line text into a merged range.
fn inject_merged_block(
    worksheet: &mut Worksheet,
    range: &SpecCellRange,
    text: &str,
    format: &Format,
) -> Result<(), XlsxBuildError> {
    worksheet.merge_range(
        cast_row_num(range.row_first)?,
        cast_col_num(range.col_first)?,
        cast_row_num(range.row_last)?,
        cast_col_num(range.col_last)?,
        text,
        format,
    )?;
    Ok(())
}

fn write_text_cell(
    worksheet: &mut Worksheet,
    row_idx: usize,
    col_idx: usize,
    value: &str,
    format: &Format,
) -> Result<(), XlsxBuildError> {
    if value.is_empty() {
        worksheet.write_blank(cast_row_num(row_idx)?, cast_col_num(col_idx)?, format)?;
    } else {
        worksheet.write_string_with_format(
            cast_row_num(row_idx)?,
            cast_col_num(col_idx)?,
            value,
            format,
        )?;
    }
    Ok(())
}

fn derive_rust_xlsx_format(spec: &SpecCellFormat) -> Format {
    let mut format = Format::new();

    if let Some(val) = &spec.font_name {
        format = format.set_font_name(val.clone());
    }
    if let Some(val) = spec.font_size {
        format = format.set_font_size(val as f64);
    }
    if spec.bold.unwrap_or(false) {
        format = format.set_bold();
    }

    if let Some(val) = &spec.align
        && let Some(align) = derive_format_align(val)
    {
        format = format.set_align(align);
    }
    if let Some(val) = &spec.valign
        && let Some(align) = derive_format_valign(val)
    {
        format = format.set_align(align);
    }

    if let Some(val) = &spec.bg_color {
        format = format.set_background_color(val.as_str());
    }
    if let Some(val) = &spec.font_color {
        format = format.set_font_color(val.as_str());
    }

    if let Some(val) = spec.border {
        format = format.set_border(derive_format_border(val));
    }

    if spec.text_wrap.unwrap_or(false) {
        format = format.set_text_wrap();
    }

    format
}

fn derive_format_border(border: i64) -> FormatBorder {
    match border {
        0 => FormatBorder::None,
        _ => FormatBorder::Thin,
    }
}

fn derive_format_align(align: &str) -> Option<FormatAlign> {
    match align.trim().to_ascii_lowercase().as_str() {
        "general" => Some(FormatAlign::General),
        "left" => Some(FormatAlign::Left),
        "center" => Some(FormatAlign::Center),
        "right" => Some(FormatAlign::Right),
        "fill" => Some(FormatAlign::Fill),
        "justify" => Some(FormatAlign::Justify),
        "center_across" => Some(FormatAlign::CenterAcross),
        "distributed" => Some(FormatAlign::Distributed),
        _ => None,
    }
}

fn derive_format_valign(valign: &str) -> Option<FormatAlign> {
    match valign.trim().to_ascii_lowercase().as_str() {
        "top" => Some(FormatAlign::Top),
        "bottom" => Some(FormatAlign::Bottom),
        "vcenter" | "vertical_center" => Some(FormatAlign::VerticalCenter),
        "vjustify" | "vertical_justify" => Some(FormatAlign::VerticalJustify),
        "vdistributed" | "vertical_distributed" => Some(FormatAlign::VerticalDistributed),
        _ => None,
    }
}

fn cast_row_num(value: usize) -> Result<u32, XlsxBuildError> {
    u32::try_from(value).map_err(|_| XlsxBuildError::IndexOverflow { axis: "row", value })
}

fn cast_col_num(value: usize) -> Result<u16, XlsxBuildError> {
    u16::try_from(value).map_err(|_| XlsxBuildError::IndexOverflow {
        axis: "column",
        value,
    })
}
