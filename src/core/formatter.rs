//! Pure message formatting
//!
//! Stateless and deterministic so it can be called standalone; inside the
//! facade it only ever runs under the serialization domain's lock.

use super::call_site::CallSite;

/// Strip a path down to its last component. Both separator styles are
/// accepted regardless of host platform, since the path is whatever the
/// compiler embedded at the call site.
fn last_path_component(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}

/// Combine a raw message with its call site into one display string:
/// `"[<file>:<line> <function>] <message>"`.
pub fn format_message(message: &str, site: &CallSite) -> String {
    format!(
        "[{}:{} {}] {}",
        last_path_component(site.file()),
        site.line(),
        site.function(),
        message
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_path_component_unix() {
        assert_eq!(last_path_component("src/core/logger.rs"), "logger.rs");
        assert_eq!(last_path_component("logger.rs"), "logger.rs");
    }

    #[test]
    fn test_last_path_component_windows() {
        assert_eq!(last_path_component("src\\core\\logger.rs"), "logger.rs");
        assert_eq!(last_path_component("a/b\\c/d.rs"), "d.rs");
    }

    #[test]
    fn test_format_shape() {
        let site = CallSite::new("src/deep/nested/handler.rs", "handle_request", 42);
        let formatted = format_message("request accepted", &site);
        assert_eq!(formatted, "[handler.rs:42 handle_request] request accepted");
    }

    #[test]
    fn test_format_preserves_message_verbatim() {
        let site = CallSite::new("main.rs", "main", 1);
        let message = "tabs\tand\nnewlines stay";
        let formatted = format_message(message, &site);
        assert!(formatted.ends_with(message));
    }
}
