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

//! Test utilities for the business layer.

use crate::driver::CustomerStore;
use crate::model::*;
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::sync::Mutex;

/// Log records captured from all tests in the process, as `(level, message)` pairs.
static RECORDS: Mutex<Vec<(Level, String)>> = Mutex::new(Vec::new());

/// Logger that captures every record into `RECORDS`.
struct RecorderLogger;

impl Log for RecorderLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        RECORDS.lock().unwrap().push((record.level(), record.args().to_string()));
    }

    fn flush(&self) {}
}

/// The process-wide recorder.
static LOGGER: RecorderLogger = RecorderLogger;

/// Installs the recording logger, if not yet done, and creates a freshly-seeded store.
pub(crate) fn setup() -> CustomerStore {
    log::set_max_level(LevelFilter::Info);
    let _can_fail = log::set_logger(&LOGGER);
    CustomerStore::new()
}

/// Returns true if any test has emitted a log record with `level` and exactly `message`.
///
/// Records are shared by all tests, so callers should look for messages that mention data unique
/// to their test.
pub(crate) fn has_log(level: Level, message: &str) -> bool {
    RECORDS.lock().unwrap().iter().any(|(l, m)| *l == level && m == message)
}

/// Builds a creation request for a customer called `name` with an optional explicit `id`.
pub(crate) fn new_customer(id: Option<&str>, name: &str) -> NewCustomer {
    NewCustomer {
        id: id.map(|id| CustomerId::new(id.to_owned())),
        name: name.to_owned(),
        email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
        tier: "GOLD".to_owned(),
    }
}
