use clap::Parser;

/// command line tool for estimating heavy goods vehicle trip durations
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// TOML configuration file for the estimator and collaborator sources.
    /// defaults are used when not provided.
    #[arg(short, long)]
    pub config_file: Option<String>,

    /// JSON file containing one query or an array of queries
    #[arg(short, long)]
    pub query_file: String,

    /// location on disk to write output rows. if not provided, write to
    /// stdout.
    #[arg(short, long)]
    pub output_file: Option<String>,

    /// treat the query file (and output) as newline-delimited JSON
    #[arg(short, long)]
    pub newline_delimited: bool,
}
