//! `magnolia_brandbook`:
//! Midnight Magnolia brand, pricing and automation reference workbook.
//!
//! - `catalog` : literal sheet content and diagrams
//! - `builder` : render/save the workbook through `magnolia_io_xlsx`
pub mod builder;
pub mod catalog;

pub use builder::{render_brandbook, write_brandbook};
pub use catalog::{C_FILE_NAME_DEFAULT, derive_brandbook};
