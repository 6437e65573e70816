use std::path::Path;

use crate::error::InvokeError;

/// Transport selected for a target string, decided before any I/O happens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// Spawn a local server process and speak over its standard streams.
    Stdio { command: String, args: Vec<String> },
    /// HTTP Server-Sent-Events endpoint.
    Sse { url: String },
    /// Streamable HTTP endpoint.
    StreamableHttp { url: String },
}

/// Classify a target string by syntax alone.
///
/// Remote targets are `http`/`https` URLs ending in `/sse` or `/mcp`
/// (trailing slashes ignored). Local targets are `.py`/`.js` scripts,
/// resolved to an absolute path and paired with an interpreter picked by
/// extension.
pub fn classify(target: &str) -> Result<Target, InvokeError> {
    if target.starts_with("http://") || target.starts_with("https://") {
        let trimmed = target.trim_end_matches('/');
        if trimmed.ends_with("/sse") {
            return Ok(Target::Sse {
                url: target.to_string(),
            });
        }
        if trimmed.ends_with("/mcp") {
            return Ok(Target::StreamableHttp {
                url: target.to_string(),
            });
        }
        return Err(InvokeError::InvalidTarget(
            "remote URL must end with /sse or /mcp".to_string(),
        ));
    }

    if target.ends_with(".py") || target.ends_with(".js") {
        let command = if target.ends_with(".py") {
            "python"
        } else {
            "node"
        };
        let script = std::path::absolute(Path::new(target)).map_err(|e| {
            InvokeError::InvalidTarget(format!("cannot resolve script path '{}': {}", target, e))
        })?;
        return Ok(Target::Stdio {
            command: command.to_string(),
            args: vec![script.to_string_lossy().into_owned()],
        });
    }

    Err(InvokeError::InvalidTarget(
        "must be a .py/.js script or a URL ending in /sse or /mcp".to_string(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn python_script_maps_to_stdio_with_python_interpreter() {
        let target = classify("foo.py").unwrap();
        let Target::Stdio { command, args } = target else {
            panic!("expected stdio target");
        };
        assert_eq!(command, "python");
        assert_eq!(args.len(), 1);
        assert!(Path::new(&args[0]).is_absolute());
        assert!(args[0].ends_with("foo.py"));
    }

    #[test]
    fn js_script_maps_to_stdio_with_node_interpreter() {
        let Target::Stdio { command, .. } = classify("server.js").unwrap() else {
            panic!("expected stdio target");
        };
        assert_eq!(command, "node");
    }

    #[test]
    fn script_paths_resolve_relative_to_the_working_directory() {
        let dir = tempfile::tempdir().unwrap();
        let script = dir.path().join("server.py");
        let Target::Stdio { args, .. } = classify(script.to_str().unwrap()).unwrap() else {
            panic!("expected stdio target");
        };
        assert_eq!(Path::new(&args[0]), script.as_path());
    }

    #[test]
    fn sse_urls_map_to_sse_with_or_without_trailing_slash() {
        assert_eq!(
            classify("http://h/sse").unwrap(),
            Target::Sse {
                url: "http://h/sse".to_string()
            }
        );
        assert_eq!(
            classify("http://h/sse/").unwrap(),
            Target::Sse {
                url: "http://h/sse/".to_string()
            }
        );
    }

    #[test]
    fn mcp_urls_map_to_streamable_http() {
        assert_eq!(
            classify("https://h/mcp").unwrap(),
            Target::StreamableHttp {
                url: "https://h/mcp".to_string()
            }
        );
    }

    #[test]
    fn urls_with_other_paths_are_rejected() {
        let err = classify("http://h/other").unwrap_err();
        assert!(matches!(err, InvokeError::InvalidTarget(_)));
        assert!(err.to_string().contains("/sse"));
        assert!(err.to_string().contains("/mcp"));
    }

    #[test]
    fn unrecognized_extensions_are_rejected() {
        let err = classify("foo.txt").unwrap_err();
        assert!(matches!(err, InvokeError::InvalidTarget(_)));
    }
}
