//! Code emission for Eject documents.
//!
//! Turns a [`Document`] into an ordered list of code fragments, one per
//! statement, such that the concatenated listing rebuilds the document's
//! object graph.
//!
//! # Pipeline Position
//!
//! ```text
//! UI document → front end → Document → **GenerationContext** → Vec<String>
//! ```
//!
//! The scheduling algorithm is described on [`GenerationContext`]'s module.

mod config;
mod context;
mod error;

pub use config::{DeclarationPolicy, GenerationConfig};
pub use context::{GenerationContext, TRAILING_PHASES};
pub use eject_ir::{Document, Phase};
pub use error::{GenerationError, UnresolvedStatement};

use std::sync::Once;

/// Generate the full, ordered code listing for `document`.
pub fn generate_code(document: &Document) -> Result<Vec<String>, GenerationError> {
    GenerationContext::new(document).generate()
}

/// Like [`generate_code`], with explicit options.
pub fn generate_code_with(
    document: &Document,
    config: &GenerationConfig,
) -> Result<Vec<String>, GenerationError> {
    GenerationContext::with_config(document, config.clone()).generate()
}

/// Code for every statement of `phase`, in document order, unscheduled.
pub fn code_for_phase(document: &Document, phase: Phase) -> Vec<String> {
    document.code_for_phase(phase)
}

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Does nothing unless `RUST_LOG` is set,
/// e.g. `RUST_LOG=eject_codegen=debug`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
