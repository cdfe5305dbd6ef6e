//! Service parameters from the presentation form of an HTTPS/SVCB record,
//! e.g. `1 . alpn="h3,h2" ipv4hint=104.16.132.229 ech=AEX+DQBB...`.

use serde::Serialize;
use std::collections::BTreeMap;

/// SvcParamKey carrying the ECHConfigList
pub const ECH_KEY: &str = "ech";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SvcParams {
    /// Tokens without `=`: priority and target name
    pub positional: Vec<String>,
    /// `key=value` pairs with quotes removed from the value
    pub params: BTreeMap<String, String>,
}

impl SvcParams {
    pub fn parse(rdata: &str) -> Self {
        let mut out = Self::default();
        for token in rdata.split_whitespace() {
            match token.split_once('=') {
                Some((key, value)) => {
                    let value: String =
                        value.chars().filter(|c| *c != '"' && *c != '\'').collect();
                    out.params.insert(key.to_string(), value);
                }
                None => out.positional.push(token.to_string()),
            }
        }
        out
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    /// The base64 ECHConfigList, if the record advertises one.
    pub fn ech(&self) -> Option<&str> {
        self.get(ECH_KEY)
    }

    pub fn priority(&self) -> Option<u16> {
        self.positional.first().and_then(|p| p.parse().ok())
    }

    pub fn target(&self) -> Option<&str> {
        self.positional.get(1).map(String::as_str)
    }
}
