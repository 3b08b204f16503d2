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

//! Business logic for the service.

use crate::model::*;
use dashmap::DashMap;
use std::sync::Arc;

mod customer;
mod customers;
#[cfg(test)]
pub(crate) mod testutils;

/// Records inserted into every new store, as `(id, name, email, tier)` tuples.
const SEED_CUSTOMERS: &[(&str, &str, &str, &str)] = &[
    ("1", "Alice Johnson", "alice@example.com", "GOLD"),
    ("2", "Bob Smith", "bob@example.com", "SILVER"),
    ("3", "Charlie Brown", "charlie@example.com", "BRONZE"),
];

/// Business logic and in-memory state of the service.
///
/// The store is the sole owner of all customer records and hands out copies only.  Clones of the
/// store share the same records, and all operations can be invoked concurrently from any number
/// of tasks: the map provides atomicity per key, so concurrent writers to the same id resolve as
/// last writer wins and readers never observe a partially-written record.
#[derive(Clone)]
pub(crate) struct CustomerStore {
    /// All known customers keyed by their identifier.
    customers: Arc<DashMap<CustomerId, Customer>>,
}

impl CustomerStore {
    /// Creates a new store populated with the seed customers.
    pub(crate) fn new() -> Self {
        let store = Self { customers: Arc::from(DashMap::new()) };
        for (id, name, email, tier) in SEED_CUSTOMERS {
            store.create(NewCustomer {
                id: Some(CustomerId::new((*id).to_owned())),
                name: (*name).to_owned(),
                email: (*email).to_owned(),
                tier: (*tier).to_owned(),
            });
        }
        store
    }
}
