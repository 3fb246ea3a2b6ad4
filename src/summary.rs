use super::*;

pub(crate) const MAX_SUMMARY_CHARS: usize = 200;

pub(crate) const NO_SUMMARY: &str = "No summary available.";

const CJK_TERMINATORS: &[char] = &['。', '！', '？'];

const MIN_SENTENCE_CHARS: usize = 5;

const TERMINATORS: &[char] = &['.', '!', '?'];

/// Splits after a CJK terminator, or after an ASCII terminator followed by
/// whitespace or the end of `text`, so `example.com` and `3.5` stay whole.
fn sentences(text: &str) -> Vec<&str> {
  let mut sentences = Vec::new();
  let mut start = 0;

  let mut chars = text.char_indices().peekable();

  while let Some((index, ch)) = chars.next() {
    let boundary = CJK_TERMINATORS.contains(&ch)
      || (TERMINATORS.contains(&ch)
        && chars.peek().is_none_or(|(_, next)| next.is_whitespace()));

    if boundary {
      let end = index + ch.len_utf8();
      sentences.push(&text[start..end]);
      start = end;
    }
  }

  if start < text.len() {
    sentences.push(&text[start..]);
  }

  sentences
}

/// Accumulates whole sentences of `text` up to `max_chars` characters, falling
/// back to a hard truncation when not even the first sentence fits.
///
/// Returns `None` when `text` has no visible content.
pub(crate) fn summarize(text: &str, max_chars: usize) -> Option<String> {
  let text = text.trim();

  if text.is_empty() {
    return None;
  }

  let mut summary = String::new();
  let mut length = 0;

  for sentence in sentences(text) {
    let sentence = sentence.trim();

    let sentence_length = sentence.chars().count();

    if sentence_length < MIN_SENTENCE_CHARS {
      continue;
    }

    let separator = if summary.is_empty() || summary.ends_with(CJK_TERMINATORS)
    {
      ""
    } else {
      " "
    };

    if length + separator.len() + sentence_length > max_chars {
      break;
    }

    summary.push_str(separator);
    summary.push_str(sentence);
    length += separator.len() + sentence_length;
  }

  if summary.is_empty() {
    Some(truncate(text, max_chars))
  } else {
    Some(summary)
  }
}
