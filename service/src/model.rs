// Customer service
// Copyright 2023 Julio Merino
//
// Licensed under the Apache License, Version 2.0 (the "License"); you may not
// use this file except in compliance with the License.  You may obtain a copy
// of the License at:
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS, WITHOUT
// WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.  See the
// License for the specific language governing permissions and limitations
// under the License.

//! High-level data types.

use derive_getters::Getters;
use derive_more::{Constructor, Display};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Newtype pattern for the identifiers of our customers.
#[derive(Clone, Constructor, Deserialize, Display, Eq, Hash, PartialEq, Serialize)]
#[cfg_attr(test, derive(Debug))]
#[serde(transparent)]
pub(crate) struct CustomerId(String);

impl CustomerId {
    /// Generates a new random identifier for a customer that did not come with one.
    pub(crate) fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Returns a string view of the identifier.
    #[cfg(test)]
    pub(crate) fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// A customer record as kept by the store and returned to clients.
#[derive(Clone, Constructor, Getters, Serialize)]
#[cfg_attr(test, derive(Debug, Deserialize, PartialEq))]
pub(crate) struct Customer {
    /// Unique identifier of the customer.  Never changes once assigned.
    id: CustomerId,

    /// Full name of the customer.
    name: String,

    /// Contact email of the customer.  Stored as given.
    email: String,

    /// Service tier of the customer.  Nominally `BRONZE`, `SILVER` or `GOLD` but any string is
    /// accepted.
    tier: String,
}

/// Message sent to the server to create or replace a customer.
#[derive(Deserialize)]
#[cfg_attr(test, derive(Debug, PartialEq, Serialize))]
pub(crate) struct NewCustomer {
    /// Desired identifier, or `None` to have the server generate one.
    #[serde(default)]
    #[cfg_attr(test, serde(skip_serializing_if = "Option::is_none"))]
    pub(crate) id: Option<CustomerId>,

    /// Full name of the customer.  Empty if not given.
    #[serde(default)]
    pub(crate) name: String,

    /// Contact email of the customer.  Empty if not given.
    #[serde(default)]
    pub(crate) email: String,

    /// Service tier of the customer.  Empty if not given.
    #[serde(default)]
    pub(crate) tier: String,
}

impl NewCustomer {
    /// Converts the request into a stored record, generating an identifier if none was given.
    pub(crate) fn into_customer(self) -> Customer {
        let id = self.id.unwrap_or_else(CustomerId::generate);
        Customer::new(id, self.name, self.email, self.tier)
    }
}
