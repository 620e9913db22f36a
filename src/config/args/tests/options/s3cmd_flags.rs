#[cfg(test)]
mod tests {
    use crate::config::args::*;
    use crate::types::LogSeverity;

    #[test]
    fn with_default_value() {
        init_dummy_tracing_subscriber();

        let args = vec!["s3cmd-sync", "--bucket", "mybucket", "sync", "/var/www/files/"];

        let config = build_config_from_args(args).unwrap();

        assert!(!config.sync_config.debug);
        assert!(!config.sync_config.verbose);
        assert_eq!(config.sync_config.log_severity(), LogSeverity::Notice);
    }

    #[test]
    fn with_custom_value() {
        init_dummy_tracing_subscriber();

        let args = vec![
            "s3cmd-sync",
            "--bucket",
            "mybucket",
            "--s3cmd-debug",
            "--s3cmd-verbose",
            "sync",
            "/var/www/files/",
        ];

        let config = build_config_from_args(args).unwrap();

        assert!(config.sync_config.debug);
        assert!(config.sync_config.verbose);
        assert_eq!(config.sync_config.log_severity(), LogSeverity::Debug);
    }

    #[test]
    fn s3cmd_path() {
        init_dummy_tracing_subscriber();

        let args = vec![
            "s3cmd-sync",
            "--bucket",
            "mybucket",
            "--s3cmd-path",
            "/usr/local/bin/s3cmd",
            "sync",
            "/var/www/files/",
        ];

        let config = build_config_from_args(args).unwrap();

        assert_eq!(
            config.sync_config.s3cmd_path,
            PathBuf::from("/usr/local/bin/s3cmd")
        );
    }

    fn init_dummy_tracing_subscriber() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("dummy=trace")
            .try_init();
    }
}
