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

//! Entry point to the REST server.

use crate::driver::CustomerStore;
use axum::Router;

mod customer_delete;
mod customer_get;
mod customers_get;
mod customers_post;
#[cfg(test)]
mod testutils;

/// Creates the router for the application.
pub(crate) fn app(store: CustomerStore) -> Router {
    use axum::routing::get;
    Router::new()
        .route("/api/customers", get(customers_get::handler).post(customers_post::handler))
        .route("/api/customers/:id", get(customer_get::handler).delete(customer_delete::handler))
        .with_state(store)
}
