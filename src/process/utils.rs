use tracing::warn;

/// Trim whitespace + strip outer quotes if present.
pub fn clean_str(raw: &str) -> &str {
    let trimmed = raw.trim();
    if trimmed.starts_with('"') && trimmed.ends_with('"') && trimmed.len() >= 2 {
        trimmed[1..trimmed.len() - 1].trim()
    } else {
        trimmed
    }
}

/// Drop everything from the first `#` on.
pub fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(pos) => &line[..pos],
        None => line,
    }
}

/// Parse one field as `f64`. Empty or non-numeric fields become `NaN`.
pub fn parse_field(raw: &str) -> f64 {
    let cleaned = clean_str(raw);
    if cleaned.is_empty() {
        warn!("empty field, using NaN");
        return f64::NAN;
    }
    match cleaned.parse::<f64>() {
        Ok(v) => v,
        Err(_) => {
            warn!(field = cleaned, "non-numeric field, using NaN");
            f64::NAN
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::fmt::MakeWriter;
    use tracing_subscriber::FmtSubscriber;

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for Captured {
        type Writer = Captured;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    fn warnings_from(f: impl FnOnce()) -> String {
        let out = Captured::default();
        let subscriber = FmtSubscriber::builder()
            .with_writer(out.clone())
            .with_max_level(tracing::Level::WARN)
            .with_ansi(false)
            .finish();
        tracing::subscriber::with_default(subscriber, f);
        let bytes = out.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn clean_str_strips_quotes_and_space() {
        assert_eq!(clean_str("  1973.5 "), "1973.5");
        assert_eq!(clean_str("\" 42 \""), "42");
        assert_eq!(clean_str("\""), "\"");
    }

    #[test]
    fn strip_comment_cuts_trailing() {
        assert_eq!(strip_comment("1,2,3 # note"), "1,2,3 ");
        assert_eq!(strip_comment("# header"), "");
        assert_eq!(strip_comment("1,2,3"), "1,2,3");
    }

    #[test]
    fn parse_field_values() {
        assert_eq!(parse_field("2000"), 2000.0);
        assert_eq!(parse_field(" -2.5e3 "), -2500.0);
        assert_eq!(parse_field("inf"), f64::INFINITY);
        assert!(parse_field("").is_nan());
        assert!(parse_field("abc").is_nan());
        assert!(parse_field("nan").is_nan());
    }

    #[test]
    fn nan_fields_are_logged() {
        let logs = warnings_from(|| {
            assert!(parse_field("  ").is_nan());
        });
        assert!(logs.contains("empty field"), "{}", logs);

        let logs = warnings_from(|| {
            assert!(parse_field("x").is_nan());
        });
        assert!(logs.contains("non-numeric field"), "{}", logs);

        let logs = warnings_from(|| {
            assert_eq!(parse_field("1973"), 1973.0);
        });
        assert!(logs.is_empty(), "{}", logs);
    }
}
