//! Property tests for shell quoting of remote scripts.

use proptest::prelude::*;

use remote_deploy::domain::services::shell_quote;

/// Undo POSIX single-quoting the way `sh` would
fn unquote(quoted: &str) -> Option<String> {
    let mut out = String::new();
    let mut chars = quoted.chars().peekable();
    let mut in_quotes = false;

    while let Some(c) = chars.next() {
        match (in_quotes, c) {
            (false, '\'') => in_quotes = true,
            (true, '\'') => in_quotes = false,
            (false, '\\') => out.push(chars.next()?),
            (true, c) => out.push(c),
            (false, _) => return None,
        }
    }

    if in_quotes {
        None
    } else {
        Some(out)
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: quoting is reversible, so the remote shell sees the exact value.
    #[test]
    fn property_shell_quote_round_trips(s in "(?s).{0,64}") {
        prop_assert_eq!(unquote(&shell_quote(&s)), Some(s));
    }

    /// PROPERTY: quoted output is a single word wrapped in single quotes.
    #[test]
    fn property_shell_quote_is_wrapped(s in "(?s).{0,64}") {
        let quoted = shell_quote(&s);
        prop_assert!(quoted.starts_with('\''));
        prop_assert!(quoted.ends_with('\''));
    }
}

#[cfg(unix)]
proptest! {
    #![proptest_config(ProptestConfig {
        cases: 32,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: `sh` prints back exactly what was quoted.
    #[test]
    fn property_shell_quote_survives_sh(s in "[ -~]{0,32}") {
        let output = std::process::Command::new("sh")
            .arg("-c")
            .arg(format!("printf %s {}", shell_quote(&s)))
            .output()
            .unwrap();
        prop_assert_eq!(String::from_utf8_lossy(&output.stdout).to_string(), s);
    }
}
