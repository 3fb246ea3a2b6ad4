use html2text::render::TrivialDecorator;

/// Visible text of an HTML document or fragment on a single line. Script,
/// style and head contents are dropped and links render as their label only.
pub(crate) fn html_text(html: &str) -> String {
  html2text::config::with_decorator(TrivialDecorator::new())
    .string_from_read(html.as_bytes(), usize::MAX)
    .map(|text| text.split_whitespace().collect::<Vec<_>>().join(" "))
    .unwrap_or_default()
}

pub(crate) fn truncate(text: &str, max_chars: usize) -> String {
  if text.chars().count() <= max_chars {
    return text.to_string();
  }

  let kept = text.chars().take(max_chars).collect::<String>();

  format!("{}...", kept.trim_end())
}
