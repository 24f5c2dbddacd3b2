//! Run assessment use case
//!
//! Drives one adaptive session from start (or resume) to a scored report.
//!
//! # Flow
//!
//! ```text
//! CatalogSource::load ──▶ fresh / restored SessionState
//!        │
//!        ▼
//! ┌── for each remaining domain ─────────────────────────────────┐
//! │  AdaptiveSelector::next  ──▶ SessionStore::save                │
//! │        │ Question                     │ DomainExhausted        │
//! │        ▼                              ▼                        │
//! │  ask ─▶ judge ─▶ record ─▶ staircase ─▶ save   advance_domain  │
//! └────────────────────────────────────────────────────────────────┘
//!        │
//!        ▼
//! ScoreSessionUseCase ──▶ AssessmentReport
//! ```
//!
//! State is persisted as soon as an answer is recorded, with the staircase
//! already advanced, so the selector is always entered with no prior outcome.
//! A resumed session continues exactly like a live one.

use super::score_session::{ScoreSessionError, ScoreSessionUseCase};
use crate::config::AssessmentParams;
use crate::ports::catalog_source::{CatalogError, CatalogSource};
use crate::ports::event_logger::{AssessmentEvent, AssessmentEventLogger, NoEventLogger};
use crate::ports::progress::{NoProgress, SessionProgressNotifier};
use crate::ports::respondent::{QuestionContext, RespondentError, RespondentPort};
use crate::ports::session_store::{SessionStore, SessionStoreError};
use iqtest_domain::{
    AdaptiveSelector, AssessmentReport, CognitiveDomain, Difficulty, DifficultyStaircase,
    DomainError, Response, Selection, SelectionError, SessionState,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde_json::json;
use std::sync::Arc;
use std::time::Instant;
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Error, Debug)]
pub enum RunAssessmentError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("Question catalog misconfigured: no {difficulty} items for {domain}")]
    CatalogMisconfigured {
        domain: CognitiveDomain,
        difficulty: Difficulty,
    },

    #[error("No saved session to resume")]
    NoSavedSession,

    #[error(transparent)]
    Store(#[from] SessionStoreError),

    #[error("Respondent error: {0}")]
    Respondent(#[from] RespondentError),

    #[error("Invalid session state: {0}")]
    Session(#[from] DomainError),

    #[error(transparent)]
    Scoring(#[from] ScoreSessionError),
}

impl From<SelectionError> for RunAssessmentError {
    fn from(err: SelectionError) -> Self {
        match err {
            SelectionError::CatalogMisconfigured { domain, difficulty } => {
                RunAssessmentError::CatalogMisconfigured { domain, difficulty }
            }
        }
    }
}

impl RunAssessmentError {
    /// Problems with the question bank rather than the session
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            RunAssessmentError::Catalog(_) | RunAssessmentError::CatalogMisconfigured { .. }
        )
    }
}

/// How to obtain the session to run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStart {
    /// Discard any saved session and start over
    Fresh { age: Option<u32> },
    /// Continue the saved session
    Resume,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AssessmentOutcome {
    /// Every domain finished and the session was scored
    Completed {
        state: SessionState,
        report: Box<AssessmentReport>,
    },
    /// The respondent stopped early; the saved state can be resumed
    Suspended { state: SessionState },
}

impl AssessmentOutcome {
    pub fn state(&self) -> &SessionState {
        match self {
            AssessmentOutcome::Completed { state, .. } | AssessmentOutcome::Suspended { state } => {
                state
            }
        }
    }

    pub fn report(&self) -> Option<&AssessmentReport> {
        match self {
            AssessmentOutcome::Completed { report, .. } => Some(&**report),
            AssessmentOutcome::Suspended { .. } => None,
        }
    }
}

/// Use case for administering an adaptive assessment
pub struct RunAssessmentUseCase {
    catalog_source: Arc<dyn CatalogSource>,
    store: Arc<dyn SessionStore>,
    respondent: Arc<dyn RespondentPort>,
    progress: Arc<dyn SessionProgressNotifier>,
    events: Arc<dyn AssessmentEventLogger>,
    params: AssessmentParams,
}

impl RunAssessmentUseCase {
    pub fn new(
        catalog_source: Arc<dyn CatalogSource>,
        store: Arc<dyn SessionStore>,
        respondent: Arc<dyn RespondentPort>,
    ) -> Self {
        Self {
            catalog_source,
            store,
            respondent,
            progress: Arc::new(NoProgress),
            events: Arc::new(NoEventLogger),
            params: AssessmentParams::default(),
        }
    }

    pub fn with_progress(mut self, progress: Arc<dyn SessionProgressNotifier>) -> Self {
        self.progress = progress;
        self
    }

    pub fn with_event_logger(mut self, events: Arc<dyn AssessmentEventLogger>) -> Self {
        self.events = events;
        self
    }

    pub fn with_params(mut self, params: AssessmentParams) -> Self {
        self.params = params;
        self
    }

    pub async fn execute(&self, start: SessionStart) -> Result<AssessmentOutcome, RunAssessmentError> {
        let catalog = self.catalog_source.load().await?;
        info!(
            source = %self.catalog_source.describe(),
            questions = catalog.len(),
            "Question catalog loaded"
        );
        for (domain, difficulty) in catalog.missing_buckets() {
            warn!("Catalog has no {} bucket for {}", difficulty, domain);
        }

        let mut state = self.open_session(start).await?;
        let mut rng = match self.params.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let selector = AdaptiveSelector::new(&catalog);
        let started = Instant::now();
        let base_elapsed_ms = state.elapsed_ms;
        let elapsed = || base_elapsed_ms + started.elapsed().as_millis() as u64;

        let total_domains = CognitiveDomain::ALL.len();
        let mut entered: Option<CognitiveDomain> = None;

        while let Some(domain) = state.current_domain() {
            if entered != Some(domain) {
                entered = Some(domain);
                debug!(domain = %domain, "Entering domain");
                self.progress
                    .on_domain_start(domain, state.domain_index, total_domains);
            }

            let outcome = selector.next(&state, domain, None, &mut rng)?;
            state = outcome.state.with_elapsed_ms(elapsed());

            let question = match outcome.selection {
                Selection::Question(question) => question,
                Selection::DomainExhausted(reason) => {
                    let accumulator = state.accumulator(domain);
                    info!(
                        domain = %domain,
                        reason = %reason,
                        answered = accumulator.total_count,
                        "Domain complete"
                    );
                    self.progress
                        .on_domain_complete(domain, &reason, &accumulator);
                    self.events.log(AssessmentEvent::new(
                        "domain_completed",
                        json!({
                            "domain": domain,
                            "reason": reason,
                            "final_difficulty": outcome.difficulty,
                            "correct": accumulator.correct_count,
                            "total": accumulator.total_count,
                        }),
                    ));
                    state = state.advance_domain();
                    self.store.save(&state).await?;
                    continue;
                }
            };
            self.store.save(&state).await?;

            let context = QuestionContext {
                domain,
                difficulty: outcome.difficulty,
                question_number: state.responses.len() + 1,
                progress_percent: state.estimated_progress_percent(),
            };
            self.events.log(AssessmentEvent::new(
                "question_presented",
                json!({
                    "question_id": question.id,
                    "domain": domain,
                    "difficulty": outcome.difficulty,
                }),
            ));
            self.progress.on_question(&context);

            let submission = match self.respondent.ask(&question, &context).await {
                Ok(submission) => submission,
                Err(RespondentError::Cancelled) => {
                    info!(answered = state.responses.len(), "Session suspended");
                    return Ok(AssessmentOutcome::Suspended { state });
                }
                Err(e) => return Err(e.into()),
            };

            let correct = question.judge(&submission.answer);
            let response = Response::new(
                domain,
                question.id.clone(),
                correct,
                submission.response_time_ms,
                outcome.difficulty,
                chrono::Utc::now().timestamp_millis().max(0) as u64,
            );
            state = DifficultyStaircase::advance(state.record(response)?, domain, correct)
                .with_elapsed_ms(elapsed());
            self.store.save(&state).await?;
            debug!(
                question = %question.id,
                correct,
                response_time_ms = submission.response_time_ms,
                "Response recorded"
            );
            self.events.log(AssessmentEvent::new(
                "response_recorded",
                json!({
                    "question_id": question.id,
                    "domain": domain,
                    "difficulty": outcome.difficulty,
                    "correct": correct,
                    "response_time_ms": submission.response_time_ms,
                }),
            ));
            self.progress
                .on_answer(domain, correct, state.estimated_progress_percent());
        }

        self.progress.on_assessment_complete(state.responses.len());
        let report = ScoreSessionUseCase::new(self.params.strategy).execute(&state)?;
        self.events.log(AssessmentEvent::new(
            "report_generated",
            json!({
                "strategy": report.score.strategy,
                "fsiq": report.score.fsiq,
                "percentile": report.score.percentile,
                "classification": report.score.classification,
                "responses": report.total_questions,
                "duration_secs": report.duration_secs,
            }),
        ));

        Ok(AssessmentOutcome::Completed {
            state,
            report: Box::new(report),
        })
    }

    async fn open_session(&self, start: SessionStart) -> Result<SessionState, RunAssessmentError> {
        match start {
            SessionStart::Fresh { age } => {
                self.store.clear().await?;
                let age = age.unwrap_or(self.params.default_age);
                let state = SessionState::new(age)?;
                self.store.save(&state).await?;
                info!(age, "Session started");
                self.events.log(AssessmentEvent::new(
                    "session_started",
                    json!({ "user_age": age }),
                ));
                Ok(state)
            }
            SessionStart::Resume => {
                let state = self
                    .store
                    .load()
                    .await?
                    .ok_or(RunAssessmentError::NoSavedSession)?;
                state.validate()?;
                info!(
                    answered = state.responses.len(),
                    domain_index = state.domain_index,
                    "Session resumed"
                );
                self.events.log(AssessmentEvent::new(
                    "session_resumed",
                    json!({
                        "user_age": state.user_age,
                        "responses": state.responses.len(),
                        "domain_index": state.domain_index,
                    }),
                ));
                Ok(state)
            }
        }
    }
}
