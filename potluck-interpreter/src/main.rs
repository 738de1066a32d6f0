use std::{borrow::Cow, env, process};

use potluck_application::{EventId, EventSplit, SplitRequestError, SplitService};
use potluck_domain::SplitContext;
use potluck_infrastructure::JsonEventStore;
use potluck_presentation::{SplitPresenter, format_split_request_error};
use tracing_subscriber::EnvFilter;

type CliResult<T> = Result<T, Cow<'static, str>>;

const USAGE: &str = "Usage: potluck-interpreter <events.json> [event-id] [--json]";
const SCALE_VAR: &str = "POTLUCK_CURRENCY_SCALE";
const DEFAULT_LOG_FILTER: &str = "potluck=warn";

#[derive(Debug, PartialEq, Eq)]
struct CliArgs {
    path: String,
    event_id: Option<String>,
    json: bool,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run() -> CliResult<()> {
    let _ = dotenvy::dotenv();
    init_logging();

    let args = parse_args(env::args().skip(1))?;
    let context = currency_context(env::var(SCALE_VAR).ok())?;

    let store = JsonEventStore::from_path(&args.path).map_err(|err| err.to_string())?;
    let service = SplitService::with_context(&store, context);

    match args.event_id.as_deref() {
        Some(event_id) => {
            let result = service
                .calculate_split(event_id)
                .map_err(|err| format_split_request_error(&err))?;
            if args.json {
                println!("{}", to_json(&SplitPresenter::render(&result))?);
            } else {
                println!("{}", render_text(&result, context));
            }
            Ok(())
        }
        None => print_all(service.calculate_all(), args.json, context),
    }
}

// stdout carries the report; logs go to stderr.
fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Same scale setting as the server; scale 2 when unset.
fn currency_context(scale: Option<String>) -> CliResult<SplitContext> {
    let Some(value) = scale else {
        return Ok(SplitContext::currency_default());
    };
    let scale = value
        .trim()
        .parse::<u32>()
        .map_err(|err| format!("{SCALE_VAR} '{value}' is not a number: {err}"))?;
    SplitContext::with_scale(scale).map_err(|err| err.to_string().into())
}

fn parse_args(args: impl IntoIterator<Item = String>) -> CliResult<CliArgs> {
    let mut json = false;
    let mut positional = Vec::new();
    for arg in args {
        match arg.as_str() {
            "--json" => json = true,
            flag if flag.starts_with("--") => {
                return Err(format!("Unknown option '{flag}'\n{USAGE}").into());
            }
            _ => positional.push(arg),
        }
    }

    let mut positional = positional.into_iter();
    let Some(path) = positional.next() else {
        return Err(USAGE.into());
    };
    let event_id = positional.next();
    if positional.next().is_some() {
        return Err(USAGE.into());
    }

    Ok(CliArgs {
        path,
        event_id,
        json,
    })
}

fn print_all(
    results: Vec<(EventId, Result<EventSplit, SplitRequestError>)>,
    json: bool,
    context: SplitContext,
) -> CliResult<()> {
    let mut reports = Vec::new();
    let mut failed = 0usize;

    for (event_id, result) in results {
        match result {
            Ok(split) if json => reports.push(SplitPresenter::render(&split)),
            Ok(split) => println!("{}", render_text(&split, context)),
            Err(err) => {
                failed += 1;
                eprintln!("{event_id}: {}", format_split_request_error(&err));
            }
        }
    }

    if json {
        println!("{}", to_json(&reports)?);
    }

    match failed {
        0 => Ok(()),
        1 => Err("1 event could not be split".into()),
        n => Err(format!("{n} events could not be split").into()),
    }
}

fn render_text(result: &EventSplit, context: SplitContext) -> String {
    let tables = SplitPresenter::render_tables(result, context);
    let settlement = tables
        .debt_table
        .unwrap_or_else(|| format!("{}\n", potluck_i18n::NOTHING_TO_SETTLE));
    format!(
        "{}\n\n{}\n{}",
        tables.heading, tables.balance_table, settlement
    )
}

fn to_json(value: &impl serde::Serialize) -> CliResult<String> {
    serde_json::to_string_pretty(value).map_err(|err| format!("Failed to encode JSON: {err}").into())
}
