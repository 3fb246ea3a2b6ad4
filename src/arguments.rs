use super::*;

#[derive(Debug, Parser)]
#[command(
  name = "hn-ai-digest",
  version,
  about = "Collect AI-related Hacker News top stories into Markdown and JSON"
)]
pub(crate) struct Arguments {
  /// Root of the Hacker News API
  #[arg(long, default_value = Client::API_BASE_URL)]
  api_base: String,
  /// Path of the JSON record
  #[arg(long, default_value = "ai_news.json")]
  json: PathBuf,
  /// JSON file with `core`, `related` and `exclude` term lists
  #[arg(long)]
  keywords: Option<PathBuf>,
  /// Maximum number of top stories to inspect
  #[arg(long, default_value_t = 150)]
  limit: usize,
  /// Path of the Markdown report
  #[arg(long, default_value = "AI_NEWS.md")]
  markdown: PathBuf,
  /// Summarize from story text only, without fetching linked articles
  #[arg(long)]
  skip_articles: bool,
}

impl Arguments {
  pub(crate) async fn run(self) -> Result {
    let keywords = match &self.keywords {
      Some(path) => Keywords::load(path)?,
      None => Keywords::builtin()?,
    };

    let client = Client::new(&self.api_base)?;

    let stories = Pipeline::new(client, keywords, self.limit, !self.skip_articles)
      .run()
      .await?;

    Report::new(&stories, Local::now()).write(&self.markdown, &self.json)?;

    info!(
      count = stories.len(),
      markdown = %self.markdown.display(),
      json = %self.json.display(),
      "wrote report"
    );

    Ok(())
  }
}
