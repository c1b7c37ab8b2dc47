//! Injected diagnostic sink.
//!
//! Run-time observations (step application, version gaps) flow through a
//! sink handed to the orchestrator rather than a process-wide trace
//! switch. The default sink forwards to the `log` facade.

use crate::plan::Direction;

/// A structured observation emitted during a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A migration step was applied successfully
    StepApplied {
        version: i64,
        description: String,
        direction: Direction,
    },

    /// Consecutively applied versions differ by more than one, suggesting
    /// a missing or mis-tagged migration. Never an error.
    VersionGap { from: i64, to: i64 },
}

/// Receiver for run diagnostics.
pub trait DiagnosticSink {
    /// Handle one diagnostic.
    fn emit(&self, diagnostic: &Diagnostic);
}

/// Adapter turning a plain closure into a sink
pub struct FnSink<F: Fn(&Diagnostic)>(pub F);

impl<F: Fn(&Diagnostic)> DiagnosticSink for FnSink<F> {
    fn emit(&self, diagnostic: &Diagnostic) {
        (self.0)(diagnostic)
    }
}

/// Default sink: forwards to the `log` facade.
///
/// Gap warnings go out at warn level, step applications at debug.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn emit(&self, diagnostic: &Diagnostic) {
        match diagnostic {
            Diagnostic::StepApplied {
                version,
                description,
                direction,
            } => {
                log::debug!("Applied migration v{version} ({description}) {direction}");
            }
            Diagnostic::VersionGap { from, to } => {
                log::warn!(
                    "Version gap between applied migrations v{from} and v{to}; \
                     a migration may be missing or mis-tagged"
                );
            }
        }
    }
}
