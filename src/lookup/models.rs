use serde::{Deserialize, Serialize};

/// One resolved address, as returned by the ViaCEP API.
///
/// The API speaks Portuguese field names; they are renamed on
/// deserialization so the exported columns use the names below.
/// Fields the API omits default to empty strings.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AddressRecord {
    #[serde(default)]
    pub cep: String,
    #[serde(default, rename(deserialize = "logradouro"))]
    pub street: String,
    #[serde(default, rename(deserialize = "complemento"))]
    pub complement: String,
    #[serde(default, rename(deserialize = "unidade"))]
    pub unit: String,
    #[serde(default, rename(deserialize = "bairro"))]
    pub neighborhood: String,
    #[serde(default, rename(deserialize = "localidade"))]
    pub city: String,
    #[serde(default, rename(deserialize = "uf"))]
    pub state: String,
    #[serde(default)]
    pub ibge: String,
    #[serde(default)]
    pub gia: String,
    #[serde(default)]
    pub ddd: String,
    #[serde(default)]
    pub siafi: String
}

impl AddressRecord {
    /// Column order for tabular output. Must match the field order above.
    pub const HEADERS: [&'static str; 11] = [
        "cep",
        "street",
        "complement",
        "unit",
        "neighborhood",
        "city",
        "state",
        "ibge",
        "gia",
        "ddd",
        "siafi"
    ];

    pub fn values(&self) -> [&str; 11] {
        [
            &self.cep,
            &self.street,
            &self.complement,
            &self.unit,
            &self.neighborhood,
            &self.city,
            &self.state,
            &self.ibge,
            &self.gia,
            &self.ddd,
            &self.siafi
        ]
    }
}
