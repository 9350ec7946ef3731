//! Task-local trace context for web requests.
//!
//! Holds the current request's trace_id in Tokio task-local storage so the
//! error renderer can stamp problem+json bodies without threading the id
//! through every call. Part of the web boundary; core/service code should not
//! import it.

use std::cell::RefCell;

use tokio::task_local;

task_local! {
    static TRACE_ID: RefCell<Option<String>>;
}

/// Get the trace_id for the current task.
/// Returns "unknown" outside of a request context.
pub fn trace_id() -> String {
    TRACE_ID
        .try_with(|cell| {
            cell.borrow()
                .as_ref()
                .cloned()
                .unwrap_or_else(|| "unknown".to_string())
        })
        .unwrap_or_else(|_| "unknown".to_string())
}

/// Run a future within a trace context.
/// Used by the request-trace middleware to establish the task-local scope.
pub async fn with_trace_id<F, R>(trace_id: String, future: F) -> R
where
    F: std::future::Future<Output = R>,
{
    TRACE_ID.scope(RefCell::new(Some(trace_id)), future).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn trace_id_outside_context_is_unknown() {
        assert_eq!(trace_id(), "unknown");
    }

    #[tokio::test]
    async fn trace_id_within_context() {
        let id = "trace-abc-123".to_string();
        let result = with_trace_id(id.clone(), async {
            assert_eq!(trace_id(), id);
            "done"
        })
        .await;
        assert_eq!(result, "done");
        assert_eq!(trace_id(), "unknown");
    }
}
