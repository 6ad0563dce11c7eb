use std::collections::BTreeMap;
use std::io::{Cursor, Read as _};

use magnolia_brandbook::catalog::{C_ECOSYSTEM_DIAGRAM, C_JOURNEY_DIAGRAM, C_WORKFLOW_DIAGRAM};
use magnolia_brandbook::render_brandbook;
use pretty_assertions::assert_eq;
use zip::ZipArchive;

fn zip_parts(bytes: &[u8]) -> BTreeMap<String, Vec<u8>> {
    let mut archive = ZipArchive::new(Cursor::new(bytes)).expect("open zip");
    let mut dict_parts = BTreeMap::new();
    for idx in 0..archive.len() {
        let mut file = archive.by_index(idx).expect("zip entry");
        let mut buf = Vec::new();
        file.read_to_end(&mut buf).expect("read zip entry");
        dict_parts.insert(file.name().to_string(), buf);
    }
    dict_parts
}

fn zip_part_to_string(bytes: &[u8], name: &str) -> String {
    let mut archive = ZipArchive::new(Cursor::new(bytes)).expect("open zip");
    let mut file = archive.by_name(name).expect("part exists");
    let mut out = String::new();
    file.read_to_string(&mut out).expect("read xml");
    out
}

fn shared_strings_as_vec(shared_strings_xml: &str) -> Vec<String> {
    let doc = roxmltree::Document::parse(shared_strings_xml).expect("parse sharedStrings.xml");
    doc.descendants()
        .filter(|n| n.is_element() && n.tag_name().name() == "si")
        .map(|si| {
            si.descendants()
                .filter(|n| n.is_element() && n.tag_name().name() == "t")
                .filter_map(|n| n.text())
                .collect::<String>()
        })
        .collect()
}

fn sheet_names(workbook_xml: &str) -> Vec<String> {
    let doc = roxmltree::Document::parse(workbook_xml).expect("parse workbook.xml");
    doc.descendants()
        .filter(|n| n.is_element() && n.tag_name().name() == "sheet")
        .filter_map(|n| n.attribute("name").map(ToString::to_string))
        .collect()
}

/// `(cell ref, style index, text)` for every cell of a row.
fn row_cells(
    sheet_xml: &str,
    strings: &[String],
    row_1based: usize,
) -> Vec<(String, String, String)> {
    let doc = roxmltree::Document::parse(sheet_xml).expect("parse sheet xml");
    let c_row = row_1based.to_string();
    let Some(row) = doc.descendants().find(|n| {
        n.is_element() && n.tag_name().name() == "row" && n.attribute("r") == Some(c_row.as_str())
    }) else {
        return vec![];
    };
    row.children()
        .filter(|n| n.is_element() && n.tag_name().name() == "c")
        .map(|c| {
            let c_text = c
                .children()
                .find(|n| n.is_element() && n.tag_name().name() == "v")
                .and_then(|n| n.text())
                .and_then(|s| s.trim().parse::<usize>().ok())
                .and_then(|idx| strings.get(idx).cloned())
                .unwrap_or_default();
            (
                c.attribute("r").unwrap_or_default().to_string(),
                c.attribute("s").unwrap_or("0").to_string(),
                c_text,
            )
        })
        .collect()
}

fn n_rows_written(sheet_xml: &str) -> usize {
    let doc = roxmltree::Document::parse(sheet_xml).expect("parse sheet xml");
    doc.descendants()
        .filter(|n| n.is_element() && n.tag_name().name() == "row")
        .count()
}

fn merge_refs(sheet_xml: &str) -> Vec<String> {
    let doc = roxmltree::Document::parse(sheet_xml).expect("parse sheet xml");
    doc.descendants()
        .filter(|n| n.is_element() && n.tag_name().name() == "mergeCell")
        .filter_map(|n| n.attribute("ref").map(ToString::to_string))
        .collect()
}

fn column_width(sheet_xml: &str, col_1based: usize) -> Option<f64> {
    let doc = roxmltree::Document::parse(sheet_xml).expect("parse sheet xml");
    doc.descendants()
        .filter(|n| n.is_element() && n.tag_name().name() == "col")
        .find(|n| {
            let n_min: usize = n.attribute("min").and_then(|v| v.parse().ok()).unwrap_or(0);
            let n_max: usize = n.attribute("max").and_then(|v| v.parse().ok()).unwrap_or(0);
            (n_min..=n_max).contains(&col_1based)
        })
        .and_then(|n| n.attribute("width"))
        .and_then(|v| v.parse().ok())
}

#[test]
fn workbook_has_all_sheets_in_order() {
    let bytes = render_brandbook().expect("render workbook");
    let l_names = sheet_names(&zip_part_to_string(&bytes, "xl/workbook.xml"));

    assert_eq!(
        l_names,
        vec![
            "🌸 Automations",
            "🌙 Automation Workflows",
            "🌙 Brand Info",
            "🎨 Colors",
            "📸 Image Prompts",
            "📱 Social Media",
            "📧 Contact Info",
            "🎨 Brand Board",
            "💰 Products",
            "📚 Membership Tiers",
            "⚙️ Automation Specs",
            "🖼️ Logos + Alt Info",
            "💼 Services",
            "⚖️ Justice Resources",
            "🌟 Dashboard",
        ]
    );
}

#[test]
fn colors_sheet_end_to_end() {
    let bytes = render_brandbook().expect("render workbook");
    let strings = shared_strings_as_vec(&zip_part_to_string(&bytes, "xl/sharedStrings.xml"));
    let sheet_xml = zip_part_to_string(&bytes, "xl/worksheets/sheet4.xml");

    // Header + 12 color rows.
    assert_eq!(n_rows_written(&sheet_xml), 13);
    assert!(column_width(&sheet_xml, 1).expect("column A width") >= 20.0);

    let l_header = row_cells(&sheet_xml, &strings, 1);
    let l_first = row_cells(&sheet_xml, &strings, 2);
    assert_eq!(l_header.len(), 3);
    assert_eq!(l_first.len(), 3);
    assert_eq!(l_first[1].0, "B2");
    assert_eq!(l_first[1].2, "#0A192F");
    assert_eq!(l_header[0].2, "🌈 Color Name");

    for row_1based in 2..=13 {
        let l_cells = row_cells(&sheet_xml, &strings, row_1based);
        assert_eq!(l_cells.len(), 3, "row {row_1based}");
        for (c_ref, c_style, _) in &l_cells {
            assert_eq!(c_style, &l_first[0].1, "{c_ref}");
            assert_ne!(c_style, &l_header[0].1, "{c_ref}");
        }
    }
    assert!(l_header.iter().all(|(_, c_style, _)| c_style == &l_header[0].1));
}

#[test]
fn diagrams_land_in_their_merged_ranges() {
    let bytes = render_brandbook().expect("render workbook");
    let strings = shared_strings_as_vec(&zip_part_to_string(&bytes, "xl/sharedStrings.xml"));

    let workflows_xml = zip_part_to_string(&bytes, "xl/worksheets/sheet2.xml");
    assert_eq!(merge_refs(&workflows_xml), vec!["A14:E21".to_string()]);
    let l_caption = row_cells(&workflows_xml, &strings, 13);
    assert_eq!(l_caption[0].2, "🌸 Workflow Diagram:");
    let l_diagram = row_cells(&workflows_xml, &strings, 14);
    assert_eq!(l_diagram[0].0, "A14");
    assert_eq!(l_diagram[0].2, C_WORKFLOW_DIAGRAM);

    let specs_xml = zip_part_to_string(&bytes, "xl/worksheets/sheet11.xml");
    assert_eq!(merge_refs(&specs_xml), vec!["A9:F17".to_string()]);
    assert_eq!(row_cells(&specs_xml, &strings, 9)[0].2, C_ECOSYSTEM_DIAGRAM);

    let dashboard_xml = zip_part_to_string(&bytes, "xl/worksheets/sheet15.xml");
    assert_eq!(
        merge_refs(&dashboard_xml),
        vec!["A1:D1".to_string(), "A7:D15".to_string()]
    );
    let l_journey = row_cells(&dashboard_xml, &strings, 7);
    assert_eq!(l_journey[0].2, C_JOURNEY_DIAGRAM);

    // All three diagrams share the accent format, distinct from header/body.
    let s_accent = &l_diagram[0].1;
    assert_eq!(&row_cells(&specs_xml, &strings, 9)[0].1, s_accent);
    assert_eq!(&l_journey[0].1, s_accent);
    assert_ne!(&l_caption[0].1, s_accent);
    assert_ne!(&row_cells(&workflows_xml, &strings, 2)[0].1, s_accent);
}

#[test]
fn dashboard_quick_stats_use_accent_style() {
    let bytes = render_brandbook().expect("render workbook");
    let strings = shared_strings_as_vec(&zip_part_to_string(&bytes, "xl/sharedStrings.xml"));
    let dashboard_xml = zip_part_to_string(&bytes, "xl/worksheets/sheet15.xml");

    let l_stats = row_cells(&dashboard_xml, &strings, 4);
    let l_texts: Vec<&str> = l_stats.iter().map(|(_, _, t)| t.as_str()).collect();
    assert_eq!(
        l_texts,
        vec![
            "💰 Products: 5",
            "🌟 Tiers: 5",
            "💼 Services: 5",
            "⚡ Automations: 6"
        ]
    );

    let s_journey = row_cells(&dashboard_xml, &strings, 7)[0].1.clone();
    assert!(l_stats.iter().all(|(_, c_style, _)| c_style == &s_journey));
    assert_eq!(
        row_cells(&dashboard_xml, &strings, 1)[0].2,
        "🌙 MIDNIGHT MAGNOLIA DASHBOARD 🌸"
    );
}

#[test]
fn rendering_twice_is_identical() {
    let dict_first = zip_parts(&render_brandbook().expect("first render"));
    let dict_second = zip_parts(&render_brandbook().expect("second render"));

    assert_eq!(
        dict_first.keys().collect::<Vec<_>>(),
        dict_second.keys().collect::<Vec<_>>()
    );
    for (c_name, v_bytes) in &dict_first {
        // Creation timestamp is the only part that depends on wall-clock time.
        if c_name == "docProps/core.xml" {
            continue;
        }
        assert!(v_bytes == &dict_second[c_name], "{c_name} differs between runs");
    }
}
