#[cfg(test)]
mod tests {
    use crate::config::args::*;

    #[test]
    fn with_default_value() {
        init_dummy_tracing_subscriber();

        let args = vec!["s3cmd-sync", "--bucket", "mybucket", "sync", "/var/www/files/"];

        let config = build_config_from_args(args).unwrap();

        assert!(config.sync_config.excludes.is_empty());
    }

    #[test]
    fn with_custom_value() {
        init_dummy_tracing_subscriber();

        let args = vec![
            "s3cmd-sync",
            "--bucket",
            "mybucket",
            "--exclude",
            "*.tmp,private/*",
            "--exclude",
            "*.tmp",
            "--exclude",
            "*.bak",
            "sync",
            "/var/www/files/",
        ];

        let config = build_config_from_args(args).unwrap();

        assert_eq!(
            config.sync_config.excludes,
            vec!["*.tmp", "private/*", "*.bak"]
        );
    }

    #[test]
    fn with_invalid_glob() {
        init_dummy_tracing_subscriber();

        let args = vec![
            "s3cmd-sync",
            "--bucket",
            "mybucket",
            "--exclude",
            "[a-",
            "sync",
            "/var/www/files/",
        ];

        let error = parse_from_args(args).unwrap_err();
        assert_eq!(error.kind(), clap::error::ErrorKind::ValueValidation);
    }

    fn init_dummy_tracing_subscriber() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("dummy=trace")
            .try_init();
    }
}
