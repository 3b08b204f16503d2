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

//! REST service that keeps customer records in memory.
//!
//! The service writes a log line for every operation on its records and leaves the shipping of
//! those lines to whatever process is attached to its output.

// Keep these in sync with other top-level files.
#![warn(anonymous_parameters, bad_style, clippy::missing_docs_in_private_items, missing_docs)]
#![warn(unused, unused_extern_crates, unused_import_braces, unused_qualifications)]
#![warn(unsafe_code)]

use customer_service_core::env::get_optional_var;
use derivative::Derivative;
use log::{info, warn};
use std::error::Error;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use tokio::net::TcpListener;

mod driver;
use driver::CustomerStore;
pub(crate) mod model;
mod rest;
use rest::app;

/// Default address to listen on.
const DEFAULT_ADDRESS: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

/// Default port to listen on.
const DEFAULT_PORT: u16 = 8080;

/// Options to configure the listening socket of the service.
#[derive(Derivative)]
#[derivative(Debug)]
#[cfg_attr(test, derivative(PartialEq))]
pub struct ServeOptions {
    /// Address to bind to.
    pub address: IpAddr,

    /// Port to bind to.
    pub port: u16,
}

impl Default for ServeOptions {
    fn default() -> Self {
        Self { address: DEFAULT_ADDRESS, port: DEFAULT_PORT }
    }
}

impl ServeOptions {
    /// Creates a set of options from environment variables whose name is prefixed with the
    /// given `prefix`.
    ///
    /// This will use variables such as `<prefix>_ADDRESS` and `<prefix>_PORT`.
    pub fn from_env(prefix: &str) -> Result<Self, String> {
        Ok(Self {
            address: get_optional_var::<IpAddr>(prefix, "ADDRESS")?.unwrap_or(DEFAULT_ADDRESS),
            port: get_optional_var::<u16>(prefix, "PORT")?.unwrap_or(DEFAULT_PORT),
        })
    }

    /// Returns the socket address described by these options.
    fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.address, self.port)
    }
}

/// Waits until the process is asked to terminate.
async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutting down"),
        Err(e) => {
            warn!("Cannot listen for shutdown requests: {}", e);
            std::future::pending::<()>().await
        }
    }
}

/// Instantiates all resources to serve the application as configured by `opts`.
///
/// This lives here instead of in `main` so that the store and router types can stay private to the
/// crate.
pub async fn serve(opts: ServeOptions) -> Result<(), Box<dyn Error>> {
    let store = CustomerStore::new();
    let app = app(store);

    let listener = TcpListener::bind(opts.bind_addr()).await?;
    info!("Listening on {}", listener.local_addr()?);
    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;
    Ok(())
}
