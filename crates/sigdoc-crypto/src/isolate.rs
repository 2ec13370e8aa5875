//! Failure containment for untrusted-input parsers.
//!
//! [`contain`] runs an operation behind an unwind boundary: if the
//! operation panics, the panic is stopped at the boundary and turned into
//! an ordinary error value built by the caller. The calling thread keeps
//! running and sees nothing but the returned `Err`.
//!
//! Containment relies on unwinding, so it has no effect in a binary built
//! with `panic = "abort"`.
//!
//! The process panic hook still runs before the unwind reaches the
//! boundary, so with the default hook a contained panic also prints a
//! `thread '..' panicked at ..` line to stderr. The same message is passed
//! to `on_fault` and logged at `warn`; a binary that wants only the log
//! line installs its own hook with [`std::panic::set_hook`].

use std::{
    any::Any,
    panic::{self, AssertUnwindSafe},
};

/// Run `op`, converting any panic it raises into `Err(on_fault(message))`.
///
/// `on_fault` receives the panic message when one can be recovered from
/// the payload, otherwise a generic description.
pub fn contain<T, E, F, H>(op: F, on_fault: H) -> Result<T, E>
where
    F: FnOnce() -> Result<T, E>,
    H: FnOnce(String) -> E,
{
    // `op` only borrows caller data immutably; nothing observable is left
    // half-updated when it unwinds.
    match panic::catch_unwind(AssertUnwindSafe(op)) {
        Ok(result) => result,
        Err(payload) => {
            let message = panic_message(payload.as_ref());
            tracing::warn!(%message, "contained panic in isolated operation");
            Err(on_fault(message))
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "operation terminated abnormally".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ok_passes_through() {
        let result: Result<u32, String> = contain(|| Ok(7), |m| m);
        assert_eq!(result, Ok(7));
    }

    #[test]
    fn test_err_passes_through() {
        let result: Result<u32, String> = contain(|| Err("plain".to_string()), |m| format!("fault: {m}"));
        assert_eq!(result, Err("plain".to_string()));
    }

    #[test]
    fn test_str_panic_becomes_error() {
        let result: Result<u32, String> = contain(|| panic!("boom"), |m| format!("fault: {m}"));
        assert_eq!(result, Err("fault: boom".to_string()));
    }

    #[test]
    fn test_formatted_panic_becomes_error() {
        let index = 9;
        let result: Result<u8, String> = contain(
            || {
                let bytes = vec![0u8; 3];
                Ok(bytes[index])
            },
            |m| m,
        );
        let message = result.unwrap_err();
        assert!(message.contains("index out of bounds"));
    }

    #[test]
    fn test_panic_message_reaches_fault_handler() {
        let result: Result<(), String> = contain(
            || panic!("decoder state {} invalid", 3),
            |m| m,
        );
        assert_eq!(result, Err("decoder state 3 invalid".to_string()));
    }

    #[test]
    fn test_caller_keeps_running_after_fault() {
        for _ in 0..3 {
            let result: Result<(), &str> = contain(|| panic!("again"), |_| "contained");
            assert_eq!(result, Err("contained"));
        }
        let after: Result<i32, &str> = contain(|| Ok(1), |_| "contained");
        assert_eq!(after, Ok(1));
    }
}
