use crate::input::Flow;
use crate::render::ResultsContainer;
use maud::{html, Markup, PreEscaped, DOCTYPE};

/// Which loader is showing, at most one at a time
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UiState {
    #[default]
    Idle,
    LoadingPlaylist,
    LoadingPreferences,
}

impl UiState {
    pub fn loading(flow: Flow) -> Self {
        match flow {
            Flow::Playlist => UiState::LoadingPlaylist,
            Flow::Preferences => UiState::LoadingPreferences,
        }
    }

    pub fn is_loading(&self, flow: Flow) -> bool {
        *self == UiState::loading(flow)
    }
}

/// Everything the two forms write to: the results container, the loaders
/// and the generation of the latest submission
#[derive(Debug, Default)]
pub struct Page {
    forms: Vec<Flow>,
    results: ResultsContainer,
    ui_state: UiState,
    generation: u64,
}

impl Page {
    pub fn new(forms: &[Flow]) -> Self {
        Self {
            forms: forms.to_vec(),
            ..Default::default()
        }
    }

    pub fn has_form(&self, flow: Flow) -> bool {
        self.forms.contains(&flow)
    }

    pub fn results(&self) -> &ResultsContainer {
        &self.results
    }

    pub fn results_mut(&mut self) -> &mut ResultsContainer {
        &mut self.results
    }

    pub fn ui_state(&self) -> UiState {
        self.ui_state
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Starts a submission, superseding any in flight. Returns its generation.
    pub fn begin(&mut self, flow: Flow) -> u64 {
        self.generation += 1;
        self.ui_state = UiState::loading(flow);
        self.results.clear();

        self.generation
    }

    pub fn is_current(&self, generation: u64) -> bool {
        self.generation == generation
    }

    pub fn finish(&mut self) {
        self.ui_state = UiState::Idle;
    }

    /// Takes the page over without a request, so responses still in flight are dropped
    pub fn supersede(&mut self) -> u64 {
        self.generation += 1;
        self.ui_state = UiState::Idle;

        self.generation
    }

    pub fn render(&self) -> Markup {
        html! {
            (DOCTYPE)
            html lang="en" {
                head {
                    meta charset="UTF-8";
                    meta name="viewport" content="width=device-width, initial-scale=1.0";
                    title { "VibeCheck" }
                    style { (PreEscaped(CSS)) }
                }
                body {
                    div.container {
                        h1 { "VibeCheck" }
                        (loader("loading", self.ui_state.is_loading(Flow::Playlist)))
                        (loader("loading-preferences", self.ui_state.is_loading(Flow::Preferences)))
                        div #results { (PreEscaped(self.results.html())) }
                    }
                }
            }
        }
    }
}

fn loader(id: &str, visible: bool) -> Markup {
    html! {
        div.loader id=(id) hidden[!visible] {
            div.bar {}
            div.bar {}
            div.bar {}
        }
    }
}

const CSS: &str = r#"
body {
    font-family: -apple-system, BlinkMacSystemFont, sans-serif;
    background: #111;
    color: #fff;
}

.container {
    max-width: 800px;
    margin: 0 auto;
    padding: 32px 16px;
}

.loader {
    display: flex;
    justify-content: center;
    gap: 4px;
}

.loader[hidden] {
    display: none;
}

.loader .bar {
    width: 6px;
    height: 24px;
    background: #1db954;
}

.event-card {
    background: #1e1e1e;
    border-radius: 8px;
    padding: 16px;
    margin-bottom: 12px;
}

.event-card a {
    color: #1db954;
}

.empty-state, .notice {
    color: #ccc;
    text-align: center;
}

.error {
    color: #f88;
}
"#;
