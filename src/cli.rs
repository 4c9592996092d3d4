use std::path::PathBuf;

use clap::Parser;

/// Resolve Brazilian CEPs against the ViaCEP API and export the
/// addresses to a spreadsheet file.
#[derive(Parser, Debug)]
#[command(name = "cep-export", version)]
pub struct Cli {
    /// CEPs to resolve, e.g. 01310-100 or 01310100
    #[arg(required = true)]
    pub ceps: Vec<String>,

    /// Output file; the extension picks the format (.csv or .xlsx)
    #[arg(short, long, default_value = "endereco.xlsx")]
    pub output: PathBuf
}
