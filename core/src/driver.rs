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

//! Generic business logic for any service.
//!
//! Every service should implement its own driver type.  The driver owns the in-memory state of
//! the service and is shared by all request handlers, so it must be cheap to clone and all of its
//! clones must refer to the same state:
//!
//! ```rust
//! use std::sync::Arc;
//! use std::sync::Mutex;
//!
//! #[derive(Clone)]
//! pub(crate) struct Driver {
//!     /// The state shared by all clones of the driver.
//!     state: Arc<Mutex<Vec<String>>>,
//! }
//! ```
//!
//! Operations that cannot fail should return their values directly.  Operations with expected
//! negative outcomes, such as looking up a missing entity, should return a `DriverResult`.

/// Business logic errors.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum DriverError {
    /// Indicates that a requested entry does not exist.
    #[error("{0}")]
    NotFound(String),
}

/// Result type for this module.
pub type DriverResult<T> = Result<T, DriverError>;
