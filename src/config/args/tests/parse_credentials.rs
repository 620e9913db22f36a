#[cfg(test)]
mod tests {
    use crate::config::args::*;

    #[test]
    fn parse_access_keys() {
        init_dummy_tracing_subscriber();

        let args = vec![
            "s3cmd-sync",
            "--bucket",
            "mybucket",
            "--access-key",
            "AKIAEXAMPLE",
            "--secret-key",
            "SECRETEXAMPLE",
            "sync",
            "/var/www/files/",
        ];

        let config = build_config_from_args(args).unwrap();

        assert_eq!(
            config.sync_config.access_keys.access_key,
            Some("AKIAEXAMPLE".to_string())
        );
        assert_eq!(
            config.sync_config.access_keys.secret_key,
            Some("SECRETEXAMPLE".to_string())
        );
    }

    #[test]
    fn parse_access_key_only() {
        init_dummy_tracing_subscriber();

        let args = vec![
            "s3cmd-sync",
            "--bucket",
            "mybucket",
            "--access-key",
            "AKIAEXAMPLE",
            "sync",
            "/var/www/files/",
        ];

        let config = build_config_from_args(args).unwrap();

        assert!(config.sync_config.access_keys.access_key.is_some());
        assert!(config.sync_config.access_keys.secret_key.is_none());
    }

    #[test]
    fn access_keys_are_redacted_in_debug_output() {
        init_dummy_tracing_subscriber();

        let args = vec![
            "s3cmd-sync",
            "--bucket",
            "mybucket",
            "--access-key",
            "AKIAEXAMPLE",
            "--secret-key",
            "SECRETEXAMPLE",
            "sync",
            "/var/www/files/",
        ];

        let config = build_config_from_args(args).unwrap();
        let debug_string = format!("{:?}", config.sync_config);

        assert!(!debug_string.contains("AKIAEXAMPLE"));
        assert!(!debug_string.contains("SECRETEXAMPLE"));
    }

    fn init_dummy_tracing_subscriber() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("dummy=trace")
            .try_init();
    }
}
