use std::fmt::Formatter;

#[derive(Debug)]
pub enum ExportError {
    Io(Box<std::io::Error>),
    Csv(Box<csv::Error>),
    Workbook(Box<zip::result::ZipError>),
    UnsupportedFormat(String)
}

impl std::fmt::Display for ExportError {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        let msg = match self {
            ExportError::Io(inner) => {
                format!("IO: {}", inner)
            },
            ExportError::Csv(inner) => {
                format!("Invalid csv output: {}", inner)
            },
            ExportError::Workbook(inner) => {
                format!("Invalid xlsx output: {}", inner)
            },
            ExportError::UnsupportedFormat(path) => {
                format!("Unsupported output format: '{}' (expected .csv or .xlsx)", path)
            }
        };
        write!(f, "Export error: {}", msg)
    }
}

impl From<std::io::Error> for ExportError {
    fn from(error: std::io::Error) -> Self {
        ExportError::Io(Box::new(error))
    }
}

impl From<csv::Error> for ExportError {
    fn from(error: csv::Error) -> Self {
        ExportError::Csv(Box::new(error))
    }
}

impl From<zip::result::ZipError> for ExportError {
    fn from(error: zip::result::ZipError) -> Self {
        ExportError::Workbook(Box::new(error))
    }
}
