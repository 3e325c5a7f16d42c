//! Property tests for configuration precedence.

use std::collections::HashMap;

use proptest::prelude::*;

use remote_deploy::config::{
    CliOverrides, DeployConfig, FileConfig, ENV_IMAGE, ENV_REMOTE_DIR, ENV_SSH_HOST,
    ENV_SSH_USER,
};

fn word() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z][a-z0-9.-]{0,15}").unwrap()
}

fn maybe_word() -> impl Strategy<Value = Option<String>> {
    proptest::option::of(word())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: a non-empty SSH_HOST/SSH_USER always wins over positionals.
    #[test]
    fn property_env_target_wins(
        env_host in maybe_word(),
        env_user in maybe_word(),
        pos_host in word(),
        pos_user in word(),
    ) {
        let mut env = HashMap::new();
        if let Some(h) = &env_host {
            env.insert(ENV_SSH_HOST.to_string(), h.clone());
        }
        if let Some(u) = &env_user {
            env.insert(ENV_SSH_USER.to_string(), u.clone());
        }
        let cli = CliOverrides {
            host: Some(pos_host.clone()),
            user: Some(pos_user.clone()),
            ..CliOverrides::default()
        };

        let config = DeployConfig::resolve(&cli, &FileConfig::default(), |k| env.get(k).cloned())
            .unwrap();

        prop_assert_eq!(config.target.host(), env_host.as_deref().unwrap_or(&pos_host));
        prop_assert_eq!(config.target.user(), env_user.as_deref().unwrap_or(&pos_user));
    }

    /// PROPERTY: image is flag > IMAGE > file > default, whatever is present.
    #[test]
    fn property_image_precedence(
        flag in maybe_word(),
        env_image in maybe_word(),
        file_image in maybe_word(),
    ) {
        let mut env = HashMap::new();
        if let Some(i) = &env_image {
            env.insert(ENV_IMAGE.to_string(), i.clone());
        }
        let mut file = FileConfig::default();
        file.app.image = file_image.clone();
        let cli = CliOverrides {
            image: flag.clone(),
            host: Some("h".to_string()),
            user: Some("u".to_string()),
            ..CliOverrides::default()
        };

        let config = DeployConfig::resolve(&cli, &file, |k| env.get(k).cloned()).unwrap();

        let expected = flag
            .or(env_image)
            .or(file_image)
            .unwrap_or_else(|| remote_deploy::config::DEFAULT_IMAGE.to_string());
        prop_assert_eq!(config.image, expected);
    }

    /// PROPERTY: remote dir is never empty and defaults under the user's home.
    #[test]
    fn property_remote_dir_never_empty(
        flag in maybe_word(),
        env_dir in maybe_word(),
        user in word(),
    ) {
        let mut env = HashMap::new();
        if let Some(d) = &env_dir {
            env.insert(ENV_REMOTE_DIR.to_string(), d.clone());
        }
        let cli = CliOverrides {
            remote_dir: flag.clone(),
            host: Some("h".to_string()),
            user: Some(user.clone()),
            ..CliOverrides::default()
        };

        let config = DeployConfig::resolve(&cli, &FileConfig::default(), |k| env.get(k).cloned())
            .unwrap();

        prop_assert!(!config.remote_dir.is_empty());
        if flag.is_none() && env_dir.is_none() {
            prop_assert_eq!(config.remote_dir, format!("/home/{}/deploy/app", user));
        }
    }
}
