mod options;
mod parse_credentials;
