use crate::config::model::QueryDefaults;
use crate::events::normalizer::normalize_events;
use crate::input::{Form, InputError};
use crate::matcher::api::MatcherAPI;
use crate::page::Page;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, error, info, instrument};

/// What a submission ended up doing to the page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Form not on the page or nothing to submit
    Ignored,
    /// Validation notice shown, no request made
    Notice,
    Rendered(usize),
    Failed,
    /// A newer submission owns the page, response dropped
    Superseded,
}

pub struct SubmissionController {
    api: MatcherAPI,
    defaults: QueryDefaults,
    page: Arc<Mutex<Page>>,
}

impl SubmissionController {
    pub fn new(api: MatcherAPI, defaults: QueryDefaults, page: Arc<Mutex<Page>>) -> Self {
        Self {
            api,
            defaults,
            page,
        }
    }

    pub fn page(&self) -> Arc<Mutex<Page>> {
        Arc::clone(&self.page)
    }

    #[instrument(skip(self, form), fields(flow = %form.flow()))]
    pub async fn submit(&self, form: &Form) -> Outcome {
        let flow = form.flow();

        if !self.lock_page().has_form(flow) {
            debug!("No form on the page, ignoring submission");
            return Outcome::Ignored;
        }

        let query = match form.to_query(&self.defaults) {
            Ok(query) => query,
            Err(InputError::MissingPlaylist) => {
                debug!("Nothing to submit");
                return Outcome::Ignored;
            }
            Err(err) => {
                let mut page = self.lock_page();

                page.supersede();
                page.results_mut().render_notice(&err.to_string());
                return Outcome::Notice;
            }
        };

        let generation = self.lock_page().begin(flow);

        info!("Submitting (generation {})", generation);

        let result = self.api.find_events(&query).await;

        let mut page = self.lock_page();

        if !page.is_current(generation) {
            info!(
                "Discarding stale response (generation {}, latest {})",
                generation,
                page.generation()
            );
            return Outcome::Superseded;
        }

        let outcome = match result {
            Ok(events) => {
                let events = normalize_events(&events);

                page.results_mut().render_events(&events);
                Outcome::Rendered(events.len())
            }
            Err(err) => {
                error!(error = %err, "Error fetching events");

                page.results_mut().render_error(flow);
                Outcome::Failed
            }
        };

        page.finish();

        outcome
    }

    fn lock_page(&self) -> MutexGuard<'_, Page> {
        self.page.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
