use serde::{Deserialize, Serialize};

use crate::macros::impls_for_string_newtype;

/// Join key between a requested item of a proof request and the matching disclosed item of a proof
#[derive(Debug, Clone, Eq, PartialEq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Referent(String);

impls_for_string_newtype!(Referent);

impl Referent {
    /// Referent naming scheme used when building requests from templates
    pub fn indexed(index: usize) -> Self {
        Self(format!("referent_{index}"))
    }
}
