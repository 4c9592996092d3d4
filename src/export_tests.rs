#[cfg(test)]
mod tests {
    use std::fs;
    use std::fs::File;
    use std::io::Read;
    use std::path::Path;

    use tempfile::tempdir;
    use zip::ZipArchive;

    use crate::export::error::ExportError;
    use crate::export::{write_records, Format};
    use crate::lookup::models::AddressRecord;

    fn sample_record() -> AddressRecord {
        AddressRecord {
            cep: "01310-100".to_string(),
            street: "Avenida Paulista".to_string(),
            complement: "de 612 a 1510 - lado par".to_string(),
            unit: "".to_string(),
            neighborhood: "Bela Vista".to_string(),
            city: "São Paulo".to_string(),
            state: "SP".to_string(),
            ibge: "3550308".to_string(),
            gia: "1004".to_string(),
            ddd: "11".to_string(),
            siafi: "7107".to_string()
        }
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(Format::from_path(Path::new("out.csv")).unwrap(), Format::Csv);
        assert_eq!(Format::from_path(Path::new("out.xlsx")).unwrap(), Format::Xlsx);
        // Extension matching is case-insensitive
        assert_eq!(Format::from_path(Path::new("OUT.XLSX")).unwrap(), Format::Xlsx);
    }

    #[test]
    fn test_format_rejects_unknown_extension() {
        let result = Format::from_path(Path::new("out.txt"));
        assert!(matches!(result, Err(ExportError::UnsupportedFormat(_))));

        let result = Format::from_path(Path::new("out"));
        assert!(matches!(result, Err(ExportError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_write_csv_header_and_row() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("endereco.csv");

        write_records(&path, &[sample_record()]).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        let mut lines = contents.lines();
        assert_eq!(
            lines.next(),
            Some("cep,street,complement,unit,neighborhood,city,state,ibge,gia,ddd,siafi")
        );
        assert_eq!(
            lines.next(),
            Some("01310-100,Avenida Paulista,de 612 a 1510 - lado par,,Bela Vista,São Paulo,SP,3550308,1004,11,7107")
        );
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_write_csv_one_row_per_record() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("enderecos.csv");

        let mut second = sample_record();
        second.cep = "03195-970".to_string();
        write_records(&path, &[sample_record(), second]).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().count(), 3);
    }

    #[test]
    fn test_write_xlsx_package_layout() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("endereco.xlsx");

        write_records(&path, &[sample_record()]).unwrap();

        let mut workbook = ZipArchive::new(File::open(&path).unwrap()).unwrap();
        for part in &[
            "[Content_Types].xml",
            "_rels/.rels",
            "xl/workbook.xml",
            "xl/_rels/workbook.xml.rels",
            "xl/worksheets/sheet1.xml"
        ] {
            assert!(workbook.by_name(part).is_ok(), "missing part '{}'", part);
        }
    }

    #[test]
    fn test_write_xlsx_sheet_rows() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("endereco.xlsx");

        write_records(&path, &[sample_record()]).unwrap();

        let mut workbook = ZipArchive::new(File::open(&path).unwrap()).unwrap();
        let mut sheet = String::new();
        workbook
            .by_name("xl/worksheets/sheet1.xml")
            .unwrap()
            .read_to_string(&mut sheet)
            .unwrap();

        // Header row then one data row, cells addressed A..K
        assert!(sheet.contains(r#"<row r="1"><c r="A1" t="inlineStr"><is><t>cep</t></is></c>"#));
        assert!(sheet.contains(r#"<c r="B2" t="inlineStr"><is><t>Avenida Paulista</t></is></c>"#));
        assert!(sheet.contains(r#"<c r="K2""#));
        assert!(!sheet.contains(r#"<row r="3""#));
    }

    #[test]
    fn test_write_xlsx_escapes_markup() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("endereco.xlsx");

        let mut record = sample_record();
        record.street = r#"Rua <Um> & "Dois""#.to_string();
        write_records(&path, &[record]).unwrap();

        let mut workbook = ZipArchive::new(File::open(&path).unwrap()).unwrap();
        let mut sheet = String::new();
        workbook
            .by_name("xl/worksheets/sheet1.xml")
            .unwrap()
            .read_to_string(&mut sheet)
            .unwrap();

        assert!(sheet.contains("Rua &lt;Um&gt; &amp; &quot;Dois&quot;"));
        assert!(!sheet.contains("<Um>"));
    }
}
