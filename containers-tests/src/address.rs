use containers::{safe_head, Optional};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub number: u32,
}

pub fn street_of_first(addresses: &[Address]) -> Optional<&str> {
    safe_head(addresses).map(|address| address.street.as_str())
}
