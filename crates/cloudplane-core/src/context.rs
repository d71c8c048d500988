// Per-operation context handed to every lifecycle call.

use tokio_util::sync::CancellationToken;

/// Carries cancellation for one resource or data source operation.
///
/// Cancelling the token aborts any in-flight wait; state already written
/// before the wait is kept.
#[derive(Debug, Clone, Default)]
pub struct OperationContext {
    cancel: CancellationToken,
}

impl OperationContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cancellation(cancel: CancellationToken) -> Self {
        Self { cancel }
    }

    pub fn cancellation(&self) -> &CancellationToken {
        &self.cancel
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }
}
