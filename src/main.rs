use {
  anyhow::Context,
  arguments::Arguments,
  chrono::{DateTime, Local},
  clap::Parser,
  client::Client,
  crossterm::style::Stylize,
  fetch_error::FetchError,
  item::Item,
  keywords::Keywords,
  pipeline::Pipeline,
  regex::Regex,
  report::Report,
  serde::{Deserialize, Serialize},
  source::Source,
  std::{
    backtrace::BacktraceStatus,
    cmp::Reverse,
    fs,
    io::{self, IsTerminal},
    path::{Path, PathBuf},
    process,
    time::Duration,
  },
  story::Story,
  summary::{MAX_SUMMARY_CHARS, NO_SUMMARY, summarize},
  terms::Terms,
  tracing::{debug, info, warn},
  tracing_subscriber::EnvFilter,
  utils::{html_text, truncate},
  verdict::Verdict,
};

mod arguments;
mod client;
mod fetch_error;
mod item;
mod keywords;
mod pipeline;
mod report;
mod source;
mod story;
mod summary;
mod terms;
mod utils;
mod verdict;

const DEFAULT_FILTER: &str = "info";

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

fn initialize_logging() {
  let filter = EnvFilter::try_from_default_env()
    .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(io::stderr)
    .with_target(false)
    .init();
}

fn print_error(error: &anyhow::Error) {
  let use_color = io::stderr().is_terminal();

  let label = |text: &str| {
    if use_color {
      text.bold().red().to_string()
    } else {
      text.to_string()
    }
  };

  eprintln!("{} {error}", label("error:"));

  let causes = error.chain().skip(1).collect::<Vec<_>>();

  if !causes.is_empty() {
    eprintln!();
    eprintln!("{}", label("because:"));

    for cause in causes {
      eprintln!("{} {cause}", label("-"));
    }
  }

  let backtrace = error.backtrace();

  if backtrace.status() == BacktraceStatus::Captured {
    eprintln!("{}", label("backtrace:"));
    eprintln!("{backtrace}");
  }
}

#[tokio::main]
async fn main() {
  initialize_logging();

  if let Err(error) = Arguments::parse().run().await {
    print_error(&error);
    process::exit(1);
  }
}
