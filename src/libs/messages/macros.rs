//! Output macros that switch between console text and structured logs.
//!
//! In normal use messages go straight to the terminal. When `DAYBOARD_DEBUG`
//! or `RUST_LOG` is set, `main` installs a tracing subscriber and the same
//! macros emit tracing events instead, so command output interleaves with
//! the library's debug logs in one stream.
//!
//! ```text
//! msg_info!(..) ──▶ is_debug_mode()? ──yes──▶ tracing::info!
//!                                   └──no───▶ println!
//! ```
//!
//! | Macro               | Prefix | Normal mode | Debug mode        |
//! |---------------------|--------|-------------|-------------------|
//! | `msg_print!`        |        | stdout      | `tracing::info!`  |
//! | `msg_success!`      | ✅     | stdout      | `tracing::info!`  |
//! | `msg_info!`         | ℹ️     | stdout      | `tracing::info!`  |
//! | `msg_warning!`      | ⚠️     | stdout      | `tracing::warn!`  |
//! | `msg_error!`        | ❌     | stderr      | `tracing::error!` |
//! | `msg_debug!`        | 🔍     | (silent)    | `tracing::debug!` |
//!
//! `msg_error_anyhow!` and `msg_bail_anyhow!` build `anyhow::Error` values
//! from a message for `?` propagation.
//!
//! ## Usage
//!
//! ```rust
//! use dayboard::{msg_info, msg_success};
//! use dayboard::libs::messages::Message;
//!
//! msg_success!(Message::ConfigSaved);
//! msg_info!(Message::TrendNoData, true);
//! ```

use std::sync::OnceLock;

/// Environment variable that enables debug output.
pub const DEBUG_ENV: &str = "DAYBOARD_DEBUG";

static DEBUG_MODE: OnceLock<bool> = OnceLock::new();

/// True when `DAYBOARD_DEBUG` or `RUST_LOG` is set. Checked once per process.
#[doc(hidden)]
pub fn is_debug_mode() -> bool {
    *DEBUG_MODE.get_or_init(|| std::env::var(DEBUG_ENV).is_ok() || std::env::var("RUST_LOG").is_ok())
}

/// Prints a plain message. Pass `true` to surround it with blank lines.
#[macro_export]
macro_rules! msg_print {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("{}", $msg);
        } else {
            println!("{}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("\n{}\n", $msg);
        } else {
            println!("\n{}\n", $msg);
        }
    };
}

/// Prints a success message with ✅ prefix.
#[macro_export]
macro_rules! msg_success {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("✅ {}", $msg);
        } else {
            println!("✅ {}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("\n✅ {}\n", $msg);
        } else {
            println!("\n✅ {}\n", $msg);
        }
    };
}

/// Prints an error message with ❌ prefix to stderr.
#[macro_export]
macro_rules! msg_error {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::error!("❌ {}", $msg);
        } else {
            eprintln!("❌ {}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::error!("\n❌ {}\n", $msg);
        } else {
            eprintln!("\n❌ {}\n", $msg);
        }
    };
}

/// Prints a warning with ⚠️ prefix.
#[macro_export]
macro_rules! msg_warning {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::warn!("⚠️ {}", $msg);
        } else {
            println!("⚠️ {}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::warn!("\n⚠️ {}\n", $msg);
        } else {
            println!("\n⚠️ {}\n", $msg);
        }
    };
}

/// Prints an informational message with ℹ️ prefix.
#[macro_export]
macro_rules! msg_info {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("ℹ️ {}", $msg);
        } else {
            println!("ℹ️ {}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("\nℹ️ {}\n", $msg);
        } else {
            println!("\nℹ️ {}\n", $msg);
        }
    };
}

/// Emits a 🔍 debug line, only in debug mode.
#[macro_export]
macro_rules! msg_debug {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::debug!("🔍 {}", $msg);
        }
    };
}

/// Builds an `anyhow::Error` from a message.
#[macro_export]
macro_rules! msg_error_anyhow {
    ($msg:expr) => {
        anyhow::anyhow!("❌ {}", $msg)
    };
}

/// Returns early with an `anyhow::Error` built from a message.
#[macro_export]
macro_rules! msg_bail_anyhow {
    ($msg:expr) => {
        anyhow::bail!("❌ {}", $msg)
    };
}
