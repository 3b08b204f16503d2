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

//! Logging setup for service binaries.

use env_logger::{Env, Target};

/// Default filter to apply when `RUST_LOG` is not set.
const DEFAULT_FILTER: &str = "info";

/// Configures the global logger to emit one line per record on stdout.
///
/// The service knows nothing about what consumes these lines: a sidecar or a log shipper attached
/// to the process output is expected to pick them up.  The filter can be adjusted via `RUST_LOG`.
///
/// This must be called at most once per process.
pub fn init() {
    env_logger::Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER))
        .target(Target::Stdout)
        .init();
}
