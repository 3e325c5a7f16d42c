//! Reusable test content

pub const COMPOSE_FILE: &str = r#"services:
  web:
    image: ${IMAGE}
    ports:
      - "80:8080"
"#;

pub const NGINX_CONF: &str = "server { listen 80; }\n";

pub const ENV_EXAMPLE: &str = "APP_ENV=staging\n";

pub const DEFAULT_IMAGE: &str = "ghcr.io/acme/app:staging";
