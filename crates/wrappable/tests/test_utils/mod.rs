//! Shared sentinels and helpers for chain tests.

#![allow(dead_code)]

use std::sync::LazyLock;

use tracing_subscriber::EnvFilter;
use wrappable::ErrorRef;

pub const STR: &str = "test error";

pub static EOF: LazyLock<ErrorRef> = LazyLock::new(|| ErrorRef::msg("EOF"));
pub static UNEXPECTED_EOF: LazyLock<ErrorRef> =
    LazyLock::new(|| ErrorRef::msg("unexpected EOF"));
pub static CLOSED_PIPE: LazyLock<ErrorRef> =
    LazyLock::new(|| ErrorRef::msg("io: read/write on closed pipe"));
pub static SHORT_BUFFER: LazyLock<ErrorRef> = LazyLock::new(|| ErrorRef::msg("short buffer"));

/// Route chain traces to the test output when `RUST_LOG` asks for them.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
