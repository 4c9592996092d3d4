use std::fs::File;
use std::io::Write;
use std::path::Path;

use zip::write::FileOptions;
use zip::CompressionMethod;
use zip::ZipWriter;

use crate::export::error::ExportError;
use crate::lookup::models::AddressRecord;

// An xlsx file is a zip package of XML parts. Everything except the
// worksheet is fixed boilerplate for a single-sheet workbook.

const CONTENT_TYPES: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
    r#"<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">"#,
    r#"<Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>"#,
    r#"<Default Extension="xml" ContentType="application/xml"/>"#,
    r#"<Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/>"#,
    r#"<Override PartName="/xl/worksheets/sheet1.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml"/>"#,
    r#"</Types>"#
);

const ROOT_RELS: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
    r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
    r#"<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="xl/workbook.xml"/>"#,
    r#"</Relationships>"#
);

const WORKBOOK: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
    r#"<workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">"#,
    r#"<sheets><sheet name="Enderecos" sheetId="1" r:id="rId1"/></sheets>"#,
    r#"</workbook>"#
);

const WORKBOOK_RELS: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
    r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
    r#"<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet1.xml"/>"#,
    r#"</Relationships>"#
);

pub fn write_workbook(
    path: &Path,
    records: &[AddressRecord]
) -> Result<(), ExportError> {
    let file = File::create(path)?;
    let mut workbook = ZipWriter::new(file);
    let options = FileOptions::default()
        .compression_method(CompressionMethod::Deflated);

    workbook.start_file("[Content_Types].xml", options)?;
    workbook.write_all(CONTENT_TYPES.as_bytes())?;

    workbook.start_file("_rels/.rels", options)?;
    workbook.write_all(ROOT_RELS.as_bytes())?;

    workbook.start_file("xl/workbook.xml", options)?;
    workbook.write_all(WORKBOOK.as_bytes())?;

    workbook.start_file("xl/_rels/workbook.xml.rels", options)?;
    workbook.write_all(WORKBOOK_RELS.as_bytes())?;

    workbook.start_file("xl/worksheets/sheet1.xml", options)?;
    workbook.write_all(worksheet_xml(records).as_bytes())?;

    workbook.finish()?;

    Ok(())
}

fn worksheet_xml(records: &[AddressRecord]) -> String {
    let mut sheet = String::from(concat!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
        r#"<worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main">"#,
        r#"<sheetData>"#
    ));

    sheet.push_str(&row_xml(1, &AddressRecord::HEADERS));
    for (i, record) in records.iter().enumerate() {
        sheet.push_str(&row_xml(i + 2, &record.values()));
    }

    sheet.push_str("</sheetData></worksheet>");
    sheet
}

fn row_xml(row_number: usize, cells: &[&str]) -> String {
    let mut row = format!(r#"<row r="{}">"#, row_number);
    for (column, value) in cells.iter().enumerate() {
        row.push_str(&format!(
            r#"<c r="{}{}" t="inlineStr"><is><t>{}</t></is></c>"#,
            column_ref(column),
            row_number,
            escape_xml(value)
        ));
    }
    row.push_str("</row>");
    row
}

// 0 -> A, 25 -> Z, 26 -> AA
fn column_ref(mut index: usize) -> String {
    let mut name = String::new();
    loop {
        name.insert(0, (b'A' + (index % 26) as u8) as char);
        if index < 26 {
            break;
        }
        index = index / 26 - 1;
    }
    name
}

fn escape_xml(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c)
        }
    }
    escaped
}
