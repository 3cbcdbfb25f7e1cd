use taskdeck_core::{Msg, ScrapeParams};

pub const HELP: &str = "\
commands:
  url <text>              edit the video url
  transcribe [url]        transcribe the current (or given) url
  summarize               summarize the transcript
  limits <posts> <comments>
                          set scrape limits
  scrape                  scrape posts
  clear                   clear the current view
  go <path>               navigate, e.g. go /reddit-scraper
  help                    show this text
  quit                    exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Msgs(Vec<Msg>),
    Help,
    Quit,
    Invalid(String),
}

/// Maps one console line to user intents.
pub fn parse_line(line: &str) -> Intent {
    let line = line.trim();
    let (command, rest) = match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };

    match command.to_ascii_lowercase().as_str() {
        "" => Intent::Msgs(Vec::new()),
        "url" => Intent::Msgs(vec![Msg::UrlInputChanged(rest.to_string())]),
        "transcribe" if rest.is_empty() => Intent::Msgs(vec![Msg::TranscribeSubmitted]),
        "transcribe" => Intent::Msgs(vec![
            Msg::UrlInputChanged(rest.to_string()),
            Msg::TranscribeSubmitted,
        ]),
        "summarize" | "summarise" => Intent::Msgs(vec![Msg::SummarizeClicked]),
        "scrape" => Intent::Msgs(vec![Msg::ScrapeClicked]),
        "limits" => parse_limits(rest),
        // Only the active view reacts.
        "clear" => Intent::Msgs(vec![Msg::TranscriberCleared, Msg::ScraperCleared]),
        "go" if !rest.is_empty() => Intent::Msgs(vec![Msg::Navigated(rest.to_string())]),
        "help" | "?" => Intent::Help,
        "quit" | "exit" => Intent::Quit,
        _ => Intent::Invalid(line.to_string()),
    }
}

fn parse_limits(rest: &str) -> Intent {
    let mut parts = rest.split_whitespace().map(str::parse::<u32>);
    match (parts.next(), parts.next(), parts.next()) {
        (Some(Ok(post_limit)), Some(Ok(comment_limit_per_post)), None) => {
            Intent::Msgs(vec![Msg::ScrapeLimitsChanged(ScrapeParams {
                post_limit,
                comment_limit_per_post,
            })])
        }
        _ => Intent::Invalid(format!("limits {rest}")),
    }
}
