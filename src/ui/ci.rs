//! GitHub Actions workflow commands

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnnotationLevel {
    Warning,
    Error,
}

impl AnnotationLevel {
    fn as_str(self) -> &'static str {
        match self {
            AnnotationLevel::Warning => "warning",
            AnnotationLevel::Error => "error",
        }
    }
}

/// Render a `::error`/`::warning` annotation line
pub fn github_actions_annotation(
    level: AnnotationLevel,
    message: &str,
    file: Option<&str>,
    line: Option<usize>,
    title: Option<&str>,
) -> String {
    let mut props = Vec::new();
    if let Some(file) = file {
        props.push(format!("file={}", escape_property(file)));
    }
    if let Some(line) = line {
        props.push(format!("line={}", line));
    }
    if let Some(title) = title {
        props.push(format!("title={}", escape_property(title)));
    }

    let prop_str = if props.is_empty() {
        String::new()
    } else {
        format!(" {}", props.join(","))
    };

    format!(
        "::{}{}::{}",
        level.as_str(),
        prop_str,
        escape_data(message)
    )
}

fn escape_data(s: &str) -> String {
    s.replace('%', "%25").replace('\r', "%0D").replace('\n', "%0A")
}

fn escape_property(s: &str) -> String {
    escape_data(s).replace(':', "%3A").replace(',', "%2C")
}
