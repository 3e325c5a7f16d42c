//! SSH target value object

/// Remote host and login user for every ssh/rsync invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SshTarget {
    host: String,
    user: String,
}

impl SshTarget {
    /// Both parts must be non-empty; callers validate before constructing.
    pub fn new(host: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            user: user.into(),
        }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    /// `user@host`, as passed to ssh
    pub fn destination(&self) -> String {
        format!("{}@{}", self.user, self.host)
    }

    /// `user@host:dir/`, as passed to rsync
    ///
    /// A leading `~` becomes a path relative to the login directory, so rsync
    /// and the remote shell agree on where the home directory is.
    pub fn remote_spec(&self, remote_dir: &str) -> String {
        let dir = remote_dir.trim_end_matches('/');
        let dir = if dir == "~" {
            "."
        } else {
            dir.strip_prefix("~/").unwrap_or(dir)
        };
        format!("{}:{}/", self.destination(), dir)
    }
}

impl std::fmt::Display for SshTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}@{}", self.user, self.host)
    }
}
