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

//! Operations on the collection of customers.

use crate::driver::CustomerStore;
use crate::model::*;
use log::info;
use std::collections::HashMap;

impl CustomerStore {
    /// Gets a snapshot of all existing customers keyed by their id.
    ///
    /// The returned map is detached from the store: later changes to the store are not reflected
    /// in it and changes to it do not affect the store.
    pub(crate) fn list(&self) -> HashMap<CustomerId, Customer> {
        let customers = self
            .customers
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect::<HashMap<CustomerId, Customer>>();
        info!("All customers retrieved: count={}", customers.len());
        customers
    }
}
