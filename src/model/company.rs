//! Company field normalization.
//!
//! The user resource returns `company` as a record (`{"name": ...}`), while
//! records created from a bare form field carry a plain string. Both shapes,
//! as well as `null`, are accepted on input; output is always the record.

use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Company {
    pub name: String,
}

impl Company {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CompanyRepr {
    Bare(String),
    Record {
        #[serde(default)]
        name: String,
    },
}

impl<'de> Deserialize<'de> for Company {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let name = match Option::<CompanyRepr>::deserialize(deserializer)? {
            Some(CompanyRepr::Bare(name)) | Some(CompanyRepr::Record { name }) => name,
            None => String::new(),
        };
        Ok(Self { name })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_bare_string() {
        let company: Company = serde_json::from_str(r#""Acme""#).unwrap();
        assert_eq!(company, Company::new("Acme"));
    }

    #[test]
    fn accepts_record_with_extra_fields() {
        let company: Company =
            serde_json::from_str(r#"{"name": "Acme", "bs": "synergy"}"#).unwrap();
        assert_eq!(company, Company::new("Acme"));
    }

    #[test]
    fn null_becomes_empty() {
        let company: Company = serde_json::from_str("null").unwrap();
        assert_eq!(company, Company::default());
    }

    #[test]
    fn serializes_as_record() {
        let json = serde_json::to_string(&Company::new("Acme")).unwrap();
        assert_eq!(json, r#"{"name":"Acme"}"#);
    }
}
