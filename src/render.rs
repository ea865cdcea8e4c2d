use crate::events::model::DisplayRecord;
use crate::input::Flow;
use maud::{html, Markup};

pub const EMPTY_STATE_MESSAGE: &str =
    "😢 No matching events found for that vibe. Try a different search.";

/// The `results` element. Every write replaces what was there before.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultsContainer {
    content: String,
}

impl ResultsContainer {
    pub fn html(&self) -> &str {
        &self.content
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn clear(&mut self) {
        self.content.clear();
    }

    pub fn render_events(&mut self, events: &[DisplayRecord]) {
        self.replace(events_markup(events));
    }

    pub fn render_error(&mut self, flow: Flow) {
        self.replace(html! {
            p.error { (error_message(flow)) }
        });
    }

    pub fn render_notice(&mut self, notice: &str) {
        self.replace(html! {
            p.notice { (notice) }
        });
    }

    fn replace(&mut self, markup: Markup) {
        self.content = markup.into_string();
    }
}

pub fn error_message(flow: Flow) -> &'static str {
    match flow {
        Flow::Playlist => "Error fetching events from playlist.",
        Flow::Preferences => "Error fetching events from preferences.",
    }
}

pub fn events_markup(events: &[DisplayRecord]) -> Markup {
    html! {
        @if events.is_empty() {
            p.empty-state { (EMPTY_STATE_MESSAGE) }
        } @else {
            @for event in events {
                (event_card(event))
            }
        }
    }
}

fn event_card(event: &DisplayRecord) -> Markup {
    html! {
        div.event-card {
            h3 { (event.name) }
            p { "📅 " (event.date) }
            p { "📍 " (event.location) }
            a href=(event.url) target="_blank" rel="noopener" { "View Event" }
        }
    }
}
