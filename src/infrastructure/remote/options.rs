//! SSH client options shared by ssh and rsync

/// Fixed option set applied to every connection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SshOptions {
    /// Seconds before an unanswered connection attempt fails
    pub connect_timeout: u32,
    /// Refuse hosts whose key is not already known
    pub strict_host_key_checking: bool,
}

impl Default for SshOptions {
    fn default() -> Self {
        Self {
            connect_timeout: 10,
            strict_host_key_checking: true,
        }
    }
}

impl SshOptions {
    /// Arguments for the `ssh` client
    pub fn args(&self) -> Vec<String> {
        vec![
            "-o".to_string(),
            format!(
                "StrictHostKeyChecking={}",
                if self.strict_host_key_checking {
                    "yes"
                } else {
                    "accept-new"
                }
            ),
            "-o".to_string(),
            format!("ConnectTimeout={}", self.connect_timeout),
        ]
    }

    /// Remote shell string for `rsync -e`
    pub fn rsh(&self) -> String {
        let mut parts = vec!["ssh".to_string()];
        parts.extend(self.args());
        parts.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_strict_with_ten_second_timeout() {
        let opts = SshOptions::default();
        assert_eq!(
            opts.args(),
            vec![
                "-o",
                "StrictHostKeyChecking=yes",
                "-o",
                "ConnectTimeout=10"
            ]
        );
    }

    #[test]
    fn rsh_matches_ssh_args() {
        assert_eq!(
            SshOptions::default().rsh(),
            "ssh -o StrictHostKeyChecking=yes -o ConnectTimeout=10"
        );
    }
}
