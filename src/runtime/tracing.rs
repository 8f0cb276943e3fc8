//! # Observability & Tracing
//!
//! [`setup_tracing`] initializes structured logging with the `tracing` crate.
//!
//! Logs go to stderr so the form output on stdout stays clean. The format is
//! compact and hides the module prefix (`with_target(false)`); every line carries
//! the `form` it belongs to instead.
//!
//! ## What Gets Traced
//!
//! - **Form Lifecycle**: startup, shutdown, and final state
//! - **Submissions**: state transitions, the request sent, rejected overlaps
//! - **Errors**: error kind and message of every failed submission
//!
//! ## Usage Examples
//!
//! ```bash
//! # Quiet (warnings only)
//! product-forms get 7
//!
//! # One line per submission
//! RUST_LOG=info product-forms get 7
//!
//! # Inputs, transitions and response sizes
//! RUST_LOG=debug product-forms update 7 --price 9.99
//! ```
//!
//! With `RUST_LOG=debug` a lookup reads:
//!
//! ```text
//! INFO Form started form="lookup"
//! DEBUG submit:submit: submit called input=LookupInput { product_id: "7" }
//! DEBUG submit:submit: Transition from=idle to=validating
//! DEBUG submit:submit: Transition from=validating to=loading
//! DEBUG submit:submit:send: Response received status=200 len=143
//! DEBUG submit:submit: Transition from=loading to=success
//! INFO Submitted form="lookup" state=success status="Product loaded"
//! ```

/// Initializes the tracing subscriber. `RUST_LOG` controls verbosity; the
/// default is `warn`.
pub fn setup_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}
