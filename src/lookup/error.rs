use std::fmt::Formatter;

#[derive(Debug)]
pub enum LookupError {
    Http(Box<reqwest::Error>),
    UnexpectedStatus(reqwest::StatusCode),
    InvalidPayload(Box<serde_json::Error>),
    CepNotFound
}

impl std::fmt::Display for LookupError {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        let msg = match self {
            LookupError::Http(inner) => {
                format!("HTTP: {}", inner)
            },
            LookupError::UnexpectedStatus(status) => {
                format!("Unexpected status: {}", status)
            },
            LookupError::InvalidPayload(inner) => {
                format!("Invalid address payload: {}", inner)
            },
            LookupError::CepNotFound => {
                "CEP not found".into()
            }
        };
        write!(f, "Lookup error: {}", msg)
    }
}

impl From<reqwest::Error> for LookupError {
    fn from(error: reqwest::Error) -> Self {
        LookupError::Http(Box::new(error))
    }
}

impl From<serde_json::Error> for LookupError {
    fn from(error: serde_json::Error) -> Self {
        LookupError::InvalidPayload(Box::new(error))
    }
}
