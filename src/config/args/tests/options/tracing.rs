#[cfg(test)]
mod tests {
    use crate::config::args::*;

    #[test]
    fn default_tracing_config() {
        init_dummy_tracing_subscriber();

        let args = vec!["s3cmd-sync", "--bucket", "mybucket", "delete", "photo.jpg"];

        let config = build_config_from_args(args).unwrap();
        let tracing_config = config.tracing_config.unwrap();

        assert_eq!(tracing_config.tracing_level, log::Level::Warn);
        assert!(!tracing_config.json_tracing);
        assert!(!tracing_config.span_events_tracing);
        assert!(!tracing_config.disable_color_tracing);
    }

    #[test]
    fn verbosity_levels() {
        init_dummy_tracing_subscriber();

        let levels = [
            ("-v", log::Level::Info),
            ("-vv", log::Level::Debug),
            ("-vvv", log::Level::Trace),
            ("-q", log::Level::Error),
        ];

        for (flag, level) in levels {
            let args = vec![
                "s3cmd-sync",
                "--bucket",
                "mybucket",
                flag,
                "delete",
                "photo.jpg",
            ];

            let config = build_config_from_args(args).unwrap();
            assert_eq!(config.tracing_config.unwrap().tracing_level, level);
        }
    }

    #[test]
    fn tracing_disabled() {
        init_dummy_tracing_subscriber();

        let args = vec![
            "s3cmd-sync",
            "--bucket",
            "mybucket",
            "-qq",
            "delete",
            "photo.jpg",
        ];

        let config = build_config_from_args(args).unwrap();
        assert!(config.tracing_config.is_none());
    }

    #[test]
    fn tracing_options() {
        init_dummy_tracing_subscriber();

        let args = vec![
            "s3cmd-sync",
            "--bucket",
            "mybucket",
            "--json-tracing",
            "--span-events-tracing",
            "--disable-color-tracing",
            "delete",
            "photo.jpg",
        ];

        let config = build_config_from_args(args).unwrap();
        let tracing_config = config.tracing_config.unwrap();

        assert!(tracing_config.json_tracing);
        assert!(tracing_config.span_events_tracing);
        assert!(tracing_config.disable_color_tracing);
    }

    fn init_dummy_tracing_subscriber() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("dummy=trace")
            .try_init();
    }
}
