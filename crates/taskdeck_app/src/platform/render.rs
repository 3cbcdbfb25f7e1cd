use std::fmt::Write;

use chrono::DateTime;
use taskdeck_core::{
    AppViewModel, FeatureView, Post, ScraperContent, ScraperView, TaskView, TranscriberView,
    TRANSCRIPT_PLACEHOLDER,
};

const RULE: &str = "----------------------------------------";

/// Renders the whole dashboard as plain text.
pub fn render(view: &AppViewModel) -> String {
    let mut out = String::new();
    let nav = &view.navigation;

    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "{}  ({})", nav.title, nav.location);
    let menu: Vec<String> = nav
        .menu
        .iter()
        .map(|item| {
            if item.active {
                format!("[{}]", item.label)
            } else {
                format!(" {} ", item.label)
            }
        })
        .collect();
    let _ = writeln!(out, "{}", menu.join(" | "));
    let _ = writeln!(out, "{RULE}");

    match nav.active_view {
        Some(FeatureView::Transcriber) => render_transcriber(&mut out, &view.transcriber),
        Some(FeatureView::Scraper) => render_scraper(&mut out, &view.scraper),
        None => {
            let _ = writeln!(out, "Nothing to show here.");
        }
    }
    out
}

fn render_transcriber(out: &mut String, view: &TranscriberView) {
    let url = if view.url_input.is_empty() {
        "<paste a video url>"
    } else {
        view.url_input.as_str()
    };
    let _ = writeln!(out, "URL: {url}");
    let submit = if view.submit_enabled {
        format!("[{}]", view.submit_label)
    } else {
        format!("({})", view.submit_label)
    };
    if view.summarize_available {
        let _ = writeln!(out, "{submit}  [{}]", view.summarize_label);
    } else {
        let _ = writeln!(out, "{submit}");
    }
    if let Some(notice) = &view.notice {
        let _ = writeln!(out, "! {notice}");
    }

    let _ = writeln!(out, "\nTranscript");
    match &view.transcript {
        TaskView::Idle => {
            let _ = writeln!(out, "  {TRANSCRIPT_PLACEHOLDER}");
        }
        TaskView::Pending { .. } => {
            let _ = writeln!(out, "  Transcribing...");
        }
        TaskView::Ready(text) => write_block(out, text),
        TaskView::Error(message) => {
            let _ = writeln!(out, "  error: {message}  (transcribe to retry)");
        }
    }

    match &view.summary {
        TaskView::Idle => {}
        TaskView::Pending { previous: None } => {
            let _ = writeln!(out, "\nSummary\n  Summarizing...");
        }
        TaskView::Pending {
            previous: Some(previous),
        } => {
            let _ = writeln!(out, "\nSummary (refreshing...)");
            write_block(out, previous);
        }
        TaskView::Ready(text) => {
            let _ = writeln!(out, "\nSummary");
            write_block(out, text);
        }
        TaskView::Error(message) => {
            let _ = writeln!(out, "\nSummary\n  error: {message}  (summarize to retry)");
        }
    }
}

fn render_scraper(out: &mut String, view: &ScraperView) {
    let _ = writeln!(
        out,
        "Limits: {} posts, {} comments per post",
        view.params.post_limit, view.params.comment_limit_per_post
    );
    if view.scrape_enabled {
        let _ = writeln!(out, "[{}]", view.scrape_label);
    } else {
        let _ = writeln!(out, "({})", view.scrape_label);
    }
    let _ = writeln!(out);

    match &view.content {
        ScraperContent::Loading => {
            let _ = writeln!(out, "  Scraping...");
        }
        ScraperContent::Empty => {
            let _ = writeln!(out, "  No posts.");
        }
        ScraperContent::Error(message) => {
            let _ = writeln!(out, "  error: {message}  (scrape to retry)");
        }
        ScraperContent::Posts(posts) => {
            for post in posts {
                render_post(out, post);
            }
        }
    }
}

fn render_post(out: &mut String, post: &Post) {
    let _ = writeln!(out, "* {}  [{}]", post.title, format_time(post.created_at));
    if !post.body.is_empty() {
        write_block(out, &post.body);
    }
    if !post.url.is_empty() {
        let _ = writeln!(out, "  {}", post.url);
    }
    for comment in &post.comments {
        let author = comment.author.as_deref().unwrap_or("[deleted]");
        let _ = writeln!(
            out,
            "    - {} ({}, {}): {}",
            author,
            comment.score,
            format_time(comment.created_at),
            comment.body
        );
    }
}

fn write_block(out: &mut String, text: &str) {
    for line in text.lines() {
        let _ = writeln!(out, "  {line}");
    }
}

fn format_time(epoch_secs: i64) -> String {
    match DateTime::from_timestamp(epoch_secs, 0) {
        Some(time) if epoch_secs > 0 => time.format("%Y-%m-%d %H:%M UTC").to_string(),
        _ => "unknown time".to_string(),
    }
}
