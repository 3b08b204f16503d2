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

//! API to create or replace a customer.

use crate::driver::CustomerStore;
use crate::model::{Customer, NewCustomer};
use axum::extract::State;
use axum::{Json, http};
use customer_service_core::rest::JsonBody;

/// API handler.
pub(crate) async fn handler(
    State(store): State<CustomerStore>,
    JsonBody(request): JsonBody<NewCustomer>,
) -> (http::StatusCode, Json<Customer>) {
    let customer = store.create(request);
    (http::StatusCode::CREATED, Json(customer))
}
