//! XLSX constants, brand palette and default preset factories.

use crate::spec::{SpecCellFormat, SpecStyleSet};

/// Excel worksheet maximum row count.
pub const N_NROWS_EXCEL_MAX: usize = 1_048_576;
/// Excel worksheet maximum column count.
pub const N_NCOLS_EXCEL_MAX: usize = 16_384;
/// Excel sheet name maximum length.
pub const N_LEN_EXCEL_SHEET_NAME_MAX: usize = 31;
/// Excel column width maximum (character units).
pub const N_WIDTH_EXCEL_COLUMN_MAX: f64 = 255.0;
/// Characters not allowed in sheet names.
pub const TUP_EXCEL_ILLEGAL: [&str; 7] = ["*", ":", "?", "/", "\\", "[", "]"];

////////////////////////////////////////////////////////////////////////////////
// #region BrandPalette

/// Deep navy used for header fills.
pub const C_COLOR_MIDNIGHT_BLUE: &str = "#0A192F";
/// Cream used for header text and accent fills.
pub const C_COLOR_MAGNOLIA_WHITE: &str = "#FAF3E0";
pub const C_COLOR_SAGE_GREEN: &str = "#A3B18A";
pub const C_COLOR_WARM_GRAY: &str = "#D4B99F";
pub const C_COLOR_GOLD: &str = "#D4AF37";

// #endregion
////////////////////////////////////////////////////////////////////////////////

/// Build the header/body/accent presets used by [`crate::writer::XlsxWriter`].
pub fn derive_default_style_set() -> SpecStyleSet {
    let cfg_border_fmt_spec = SpecCellFormat {
        border: Some(1),
        ..Default::default()
    };

    SpecStyleSet {
        header: cfg_border_fmt_spec.with_(SpecCellFormat {
            font_name: Some("Playfair Display".to_string()),
            font_size: Some(14),
            bold: Some(true),
            bg_color: Some(C_COLOR_MIDNIGHT_BLUE.to_string()),
            font_color: Some(C_COLOR_MAGNOLIA_WHITE.to_string()),
            align: Some("center".to_string()),
            valign: Some("vcenter".to_string()),
            ..Default::default()
        }),
        body: cfg_border_fmt_spec.with_(SpecCellFormat {
            font_name: Some("Lora".to_string()),
            font_size: Some(11),
            text_wrap: Some(true),
            valign: Some("top".to_string()),
            ..Default::default()
        }),
        // Wrap + top so multi-line diagram text stays readable inside merged ranges.
        accent: cfg_border_fmt_spec.with_(SpecCellFormat {
            font_name: Some("Montserrat".to_string()),
            font_size: Some(10),
            bg_color: Some(C_COLOR_MAGNOLIA_WHITE.to_string()),
            text_wrap: Some(true),
            valign: Some("top".to_string()),
            ..Default::default()
        }),
    }
}
