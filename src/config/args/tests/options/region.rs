#[cfg(test)]
mod tests {
    use crate::config::args::*;

    #[test]
    fn with_default_value() {
        init_dummy_tracing_subscriber();

        let args = vec!["s3cmd-sync", "--bucket", "mybucket", "sync", "/var/www/files/"];

        let config = build_config_from_args(args).unwrap();

        assert_eq!(enabled_region_codes(&config), vec!["us-east-1"]);
    }

    #[test]
    fn with_comma_separated_value() {
        init_dummy_tracing_subscriber();

        let args = vec![
            "s3cmd-sync",
            "--bucket",
            "mybucket",
            "--region",
            "eu-west-1,ap-northeast-1",
            "sync",
            "/var/www/files/",
        ];

        let config = build_config_from_args(args).unwrap();

        assert_eq!(
            enabled_region_codes(&config),
            vec!["eu-west-1", "ap-northeast-1"]
        );
    }

    #[test]
    fn with_repeated_value() {
        init_dummy_tracing_subscriber();

        let args = vec![
            "s3cmd-sync",
            "--bucket",
            "mybucket",
            "--region",
            "sa-east-1",
            "--region",
            "us-east-1",
            "--region",
            "sa-east-1",
            "sync",
            "/var/www/files/",
        ];

        let config = build_config_from_args(args).unwrap();

        assert_eq!(enabled_region_codes(&config), vec!["us-east-1", "sa-east-1"]);
    }

    #[test]
    fn with_unknown_region() {
        init_dummy_tracing_subscriber();

        let args = vec![
            "s3cmd-sync",
            "--bucket",
            "mybucket",
            "--region",
            "us-east-1,eu-north-9",
            "sync",
            "/var/www/files/",
        ];

        let error = parse_from_args(args).unwrap_err();
        assert_eq!(error.kind(), clap::error::ErrorKind::ValueValidation);
    }

    fn enabled_region_codes(config: &Config) -> Vec<String> {
        config
            .sync_config
            .enabled_regions()
            .map(|region| region.code.clone())
            .collect()
    }

    fn init_dummy_tracing_subscriber() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("dummy=trace")
            .try_init();
    }
}
