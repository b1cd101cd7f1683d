//! # Issuer Directory — Access Control
//!
//! The directory of universities authorized to issue credentials. Each
//! issuer is keyed by ledger address and carries a display name and an
//! `active` flag.
//!
//! ## Invariant
//!
//! Issuer records are never physically deleted. Deauthorization flips
//! `active` to false and retains the name, so credentials issued before
//! deauthorization keep resolving their issuer for audit purposes.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use acred_core::Address;

use crate::error::RegistryError;

/// A university authorized (now or in the past) to issue credentials.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issuer {
    /// The issuer's ledger address.
    pub address: Address,
    /// Human-readable institution name, snapshotted into credentials at
    /// issuance time.
    pub display_name: String,
    /// Whether the issuer may currently issue. Flipped to false on
    /// deauthorization; the record itself is retained.
    pub active: bool,
}

/// Directory of issuers, keyed by address.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IssuerDirectory {
    issuers: BTreeMap<Address, Issuer>,
}

impl IssuerDirectory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Authorize a university, upserting its record with `active = true`.
    ///
    /// Re-authorizing an existing issuer updates its display name.
    ///
    /// # Errors
    ///
    /// - `ZeroAddress` if `address` is the zero address.
    /// - `EmptyField` if `name` is empty.
    pub fn authorize(&mut self, address: Address, name: &str) -> Result<(), RegistryError> {
        if address.is_zero() {
            return Err(RegistryError::ZeroAddress);
        }
        if name.is_empty() {
            return Err(RegistryError::EmptyField {
                field: "university name",
            });
        }
        self.issuers.insert(
            address,
            Issuer {
                address,
                display_name: name.to_string(),
                active: true,
            },
        );
        Ok(())
    }

    /// Deauthorize a university, setting `active = false`.
    ///
    /// The record (and its name) is retained. Previously issued credentials
    /// are untouched.
    ///
    /// # Errors
    ///
    /// `IssuerNotAuthorized` if the address is not currently active.
    pub fn deauthorize(&mut self, address: Address) -> Result<(), RegistryError> {
        match self.issuers.get_mut(&address) {
            Some(issuer) if issuer.active => {
                issuer.active = false;
                Ok(())
            }
            _ => Err(RegistryError::IssuerNotAuthorized { address }),
        }
    }

    /// Whether the address is a currently active issuer.
    pub fn is_authorized(&self, address: &Address) -> bool {
        self.issuers
            .get(address)
            .map(|issuer| issuer.active)
            .unwrap_or(false)
    }

    /// The display name recorded for the address, if any.
    ///
    /// Retained after deauthorization; `None` only for addresses that were
    /// never authorized.
    pub fn name(&self, address: &Address) -> Option<&str> {
        self.issuers
            .get(address)
            .map(|issuer| issuer.display_name.as_str())
    }

    /// The full issuer record for the address, if any.
    pub fn get(&self, address: &Address) -> Option<&Issuer> {
        self.issuers.get(address)
    }
}
