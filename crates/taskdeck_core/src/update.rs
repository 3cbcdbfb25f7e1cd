use deck_logging::{deck_debug, deck_info};

use crate::view_model::FeatureView;
use crate::{AppState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let mut changed = false;
    let mut effects = Vec::new();

    match msg {
        Msg::UrlInputChanged(text) => {
            if view_is_active(&state, FeatureView::Transcriber) {
                changed = state.transcriber_mut().set_url_input(text);
            }
        }
        Msg::TranscribeSubmitted => {
            if view_is_active(&state, FeatureView::Transcriber) {
                if let Some(effect) = state.transcriber_mut().submit() {
                    changed = true;
                    effects.push(effect);
                }
            }
        }
        Msg::SummarizeClicked => {
            if view_is_active(&state, FeatureView::Transcriber) {
                let (summarize_changed, effect) = state.transcriber_mut().summarize();
                changed = summarize_changed;
                effects.extend(effect);
            }
        }
        Msg::TranscriberCleared => {
            if view_is_active(&state, FeatureView::Transcriber) {
                state.transcriber_mut().clear();
                changed = true;
            }
        }
        Msg::TranscriptionDone { request_id, result } => {
            changed = state
                .transcriber_mut()
                .transcription_done(request_id, result);
        }
        Msg::SummaryDone { request_id, result } => {
            changed = state.transcriber_mut().summary_done(request_id, result);
        }
        Msg::ScrapeLimitsChanged(params) => {
            if view_is_active(&state, FeatureView::Scraper) {
                changed = state.scraper_mut().set_params(params);
            }
        }
        Msg::ScrapeClicked => {
            if view_is_active(&state, FeatureView::Scraper) {
                if let Some(effect) = state.scraper_mut().scrape() {
                    changed = true;
                    effects.push(effect);
                }
            }
        }
        Msg::ScraperCleared => {
            if view_is_active(&state, FeatureView::Scraper) {
                state.scraper_mut().clear();
                changed = true;
            }
        }
        Msg::ScrapeDone { request_id, result } => {
            changed = state.scraper_mut().scrape_done(request_id, result);
        }
        Msg::Navigated(path) => {
            let before = state.active_view();
            if state.navigation_mut().navigate(&path) {
                changed = true;
                let after = state.active_view();
                deck_info!("navigated to {}", state.navigation().location());
                if let Some(left) = before.filter(|view| Some(*view) != after) {
                    state.unmount(left);
                }
            }
        }
    }

    if changed {
        state.mark_dirty();
    }
    (state, effects)
}

fn view_is_active(state: &AppState, view: FeatureView) -> bool {
    let active = state.active_view() == Some(view);
    if !active {
        deck_debug!("ignoring intent for inactive view {:?}", view);
    }
    active
}
