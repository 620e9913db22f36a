#[cfg(test)]
mod tests {
    use crate::config::args::*;

    #[test]
    fn with_default_value() {
        init_dummy_tracing_subscriber();

        let args = vec!["s3cmd-sync", "--bucket", "mybucket", "sync", "/var/www/files/"];

        let config = build_config_from_args(args).unwrap();

        assert!(!config.sync_config.dry_run);
        assert_eq!(
            config.tracing_config.unwrap().tracing_level,
            log::Level::Warn
        );
    }

    #[test]
    fn with_custom_value() {
        init_dummy_tracing_subscriber();

        let args = vec![
            "s3cmd-sync",
            "--bucket",
            "mybucket",
            "--dry-run",
            "sync",
            "/var/www/files/",
        ];

        let config = build_config_from_args(args).unwrap();

        assert!(config.sync_config.dry_run);
        assert_eq!(
            config.tracing_config.unwrap().tracing_level,
            log::Level::Info
        );
        assert!(!config.tracing_config.unwrap().json_tracing);
        assert!(!config.tracing_config.unwrap().span_events_tracing);
        assert!(!config.tracing_config.unwrap().disable_color_tracing);
    }

    #[test]
    fn with_custom_value_with_tracing_option() {
        init_dummy_tracing_subscriber();

        let args = vec![
            "s3cmd-sync",
            "--bucket",
            "mybucket",
            "--dry-run",
            "--json-tracing",
            "--span-events-tracing",
            "--disable-color-tracing",
            "sync",
            "/var/www/files/",
        ];

        let config = build_config_from_args(args).unwrap();

        assert!(config.sync_config.dry_run);
        assert_eq!(
            config.tracing_config.unwrap().tracing_level,
            log::Level::Info
        );
        assert!(config.tracing_config.unwrap().json_tracing);
        assert!(config.tracing_config.unwrap().span_events_tracing);
        assert!(config.tracing_config.unwrap().disable_color_tracing);
    }

    #[test]
    fn with_custom_value_quiet() {
        init_dummy_tracing_subscriber();

        let args = vec![
            "s3cmd-sync",
            "--bucket",
            "mybucket",
            "--dry-run",
            "-qq",
            "sync",
            "/var/www/files/",
        ];

        let config = build_config_from_args(args).unwrap();

        assert_eq!(
            config.tracing_config.unwrap().tracing_level,
            log::Level::Info
        );
    }

    #[test]
    fn with_custom_value_more_verbose() {
        init_dummy_tracing_subscriber();

        let args = vec![
            "s3cmd-sync",
            "--bucket",
            "mybucket",
            "--dry-run",
            "-vv",
            "sync",
            "/var/www/files/",
        ];

        let config = build_config_from_args(args).unwrap();

        assert_eq!(
            config.tracing_config.unwrap().tracing_level,
            log::Level::Debug
        );
    }

    fn init_dummy_tracing_subscriber() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("dummy=trace")
            .try_init();
    }
}
