mod dry_run;
mod exclude;
mod region;
mod s3cmd_flags;
mod tracing;
