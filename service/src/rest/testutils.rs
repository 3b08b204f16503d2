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

//! Test utilities for the REST API.

use crate::driver::{CustomerStore, testutils};
use crate::model::*;
use crate::rest::app;
use axum::Router;

pub(crate) struct TestContext {
    store: CustomerStore,
    app: Router,
}

impl TestContext {
    pub(crate) fn setup() -> Self {
        let store = testutils::setup();
        let app = app(store.clone());
        Self { store, app }
    }

    pub(crate) fn app(&self) -> Router {
        self.app.clone()
    }

    pub(crate) fn into_app(self) -> Router {
        self.app
    }

    pub(crate) fn create(&self, id: Option<&str>, name: &str, tier: &str) -> Customer {
        let mut request = testutils::new_customer(id, name);
        request.tier = tier.to_owned();
        self.store.create(request)
    }

    pub(crate) fn delete(&self, id: &str) {
        self.store.delete(&CustomerId::new(id.to_owned()))
    }

    pub(crate) fn get(&self, id: &str) -> Option<Customer> {
        self.store.get(&CustomerId::new(id.to_owned())).ok()
    }

    pub(crate) fn has(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub(crate) fn count(&self) -> usize {
        self.store.list().len()
    }
}
