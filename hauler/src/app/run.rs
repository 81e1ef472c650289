use super::cli_args::CliArgs;
use super::config::AppConfig;
use super::hauler_app::{HaulerApp, HaulerQuery};
use super::HaulerAppError;
use itertools::Itertools;
use kdam::tqdm;
use serde_json::{json, Value};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// top-level application runner: load configuration, wire the app, read
/// the queries, run the batch, write the rows.
pub fn command_line_runner(args: &CliArgs) -> Result<(), HaulerAppError> {
    log::info!("starting hauler at {}", chrono::Local::now().to_rfc3339());
    let config = match &args.config_file {
        Some(config_file) => AppConfig::from_file(Path::new(config_file))?,
        None => AppConfig::default(),
    };
    let app = HaulerApp::try_from(&config)?;
    let queries = read_queries(Path::new(&args.query_file), args.newline_delimited)?;
    log::info!("loaded {} queries from {}", queries.len(), args.query_file);
    let rows = run_queries(&app, &queries);
    write_rows(&rows, args.output_file.as_deref(), args.newline_delimited)?;
    log::info!(
        "finished {} queries at {}",
        rows.len(),
        chrono::Local::now().to_rfc3339()
    );
    Ok(())
}

/// runs a batch of queries. a failed query becomes a row with an "error"
/// key carrying a human-readable message rather than aborting the batch.
pub fn run_queries(app: &HaulerApp, queries: &[HaulerQuery]) -> Vec<Value> {
    let rows = tqdm!(queries.iter(), desc = "hauler queries")
        .map(|query| match app.run_query(query) {
            Ok(row) => row,
            Err(e) => match serde_json::to_value(query) {
                Ok(request) => json!({ "request": request, "error": e.to_string() }),
                Err(json_error) => json!({
                    "error": format!("{e}; additionally, the request could not be echoed: {json_error}")
                }),
            },
        })
        .collect_vec();
    eprintln!();
    rows
}

/// reads queries from a JSON file: either one query, a JSON array of
/// queries, or (with newline_delimited) one query per line.
pub fn read_queries(path: &Path, newline_delimited: bool) -> Result<Vec<HaulerQuery>, HaulerAppError> {
    let file = File::open(path).map_err(|e| {
        HaulerAppError::InvalidUserInput(format!(
            "failure reading query file '{}': {e}",
            path.display()
        ))
    })?;
    let reader = BufReader::new(file);
    if newline_delimited {
        let mut queries = vec![];
        for (index, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| {
                HaulerAppError::InvalidUserInput(format!(
                    "failure reading line {index} of '{}': {e}",
                    path.display()
                ))
            })?;
            if line.trim().is_empty() {
                continue;
            }
            let query: HaulerQuery = serde_json::from_str(&line).map_err(|e| {
                HaulerAppError::InvalidUserInput(format!(
                    "line {index} of '{}' is not a valid query: {e}",
                    path.display()
                ))
            })?;
            queries.push(query);
        }
        Ok(queries)
    } else {
        let value: Value = serde_json::from_reader(reader)?;
        let values = match value {
            Value::Array(values) => values,
            other => vec![other],
        };
        values
            .into_iter()
            .map(|v| serde_json::from_value(v).map_err(HaulerAppError::from))
            .collect()
    }
}

fn write_rows(
    rows: &[Value],
    output_file: Option<&str>,
    newline_delimited: bool,
) -> Result<(), HaulerAppError> {
    let contents = if newline_delimited {
        rows.iter().map(|row| row.to_string()).join("\n")
    } else {
        serde_json::to_string_pretty(&Value::Array(rows.to_vec()))?
    };
    match output_file {
        Some(output_file) => std::fs::write(output_file, contents).map_err(|e| {
            HaulerAppError::BuildFailure(format!(
                "failure writing output file '{output_file}': {e}"
            ))
        })?,
        None => println!("{contents}"),
    }
    Ok(())
}
