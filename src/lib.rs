//! # Product Forms
//!
//! > **Client side of a product catalogue API: upload, look up, update, delete.**
//!
//! Four forms talk to a product API over HTTP. Each form validates its inputs,
//! sends exactly one request, interprets whatever comes back and ends with a
//! status line plus a detail panel. Nothing a server sends can make a form fail
//! outside that lifecycle.
//!
//! ## Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! The generic lifecycle every form shares.
//! - **Role**: Separates *what a form does* ([`FormAction`](framework::FormAction)) from
//!   *how it is driven* ([`FormController`](framework::FormController)).
//! - **Concurrency**: each form runs as a [`FormActor`](framework::FormActor) task; a
//!   [`FormClient`](framework::FormClient) rejects a second submission while one is in flight.
//!
//! ### 2. The Forms ([`forms`])
//! Upload, lookup, update and delete, each a small `FormAction` implementation.
//!
//! ### 3. Display ([`view`], [`normalizer`])
//! View models instead of markup. [`normalizer::normalize`] turns any shape of
//! `features` into one readable line and never fails.
//!
//! ### 4. Plumbing ([`transport`], [`config`], [`model`])
//! The [`Transport`](transport::Transport) seam (`reqwest` in production, a mock in
//! tests), connection settings and the wire types.
//!
//! ### 5. The Orchestrator ([`runtime`])
//! [`ProductConsole`](runtime::ProductConsole) starts and stops the four form actors;
//! [`setup_tracing`](runtime::setup_tracing) configures logging.
//!
//! ## Running
//!
//! ```bash
//! PRODUCT_API_URL=http://127.0.0.1:5000 RUST_LOG=info cargo run -- get 7
//! ```

pub mod config;
pub mod forms;
pub mod framework;
pub mod model;
pub mod normalizer;
pub mod runtime;
pub mod transport;
pub mod view;
