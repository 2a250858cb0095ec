// src/chat/controller.rs
//! Chat session lifecycle: binds a conversation to a job analysis, turns
//! user intent into API calls and API results into log entries.

use anyhow::{Context, Result};
use parking_lot::Mutex;
use std::sync::Arc;
use tracing::{debug, error, info};

use super::greeting::{
    job_greeting, quick_actions, uploading_notice, FALLBACK_GREETING, GENERIC_GREETING,
    SEND_FAILURE_REPLY, UNBOUND_REPLY, UPLOAD_FAILURE_REPLY,
};
use super::message::{Message, MessageIds, MessageLog, Placeholder};
use super::ui_state::UiState;
use crate::analysis::{load_job_overview, JobOverview};
use crate::core::{ChatTimings, SalaryApi, UploadFile};
use crate::types::{JobAnalysis, SalaryRange, SessionResponse};
use crate::utils::navigation_target;

const IDLE_TITLE: &str = "Ready to analyze";

/// Conversation binding. Unbound (no `session_id`) means generic mode.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChatSession {
    pub session_id: Option<String>,
    pub job_analysis_id: Option<String>,
    pub job_analysis: Option<JobAnalysis>,
    pub salary_range: Option<SalaryRange>,
}

impl ChatSession {
    fn for_job(job_analysis_id: Option<String>) -> Self {
        Self {
            job_analysis_id,
            ..Self::default()
        }
    }

    pub fn is_bound(&self) -> bool {
        self.session_id.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestState {
    Idle,
    Sending,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendOutcome {
    /// Empty input or a request already in flight
    Ignored,
    Replied,
    /// The backend failed; the apology was logged instead
    Failed,
    /// No session bound; the "upload first" reply was logged after the simulated delay
    Unbound,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadOutcome {
    NoFile,
    Ignored,
    /// The host should replace the page with `target`. The controller has
    /// already dropped its conversation and is now keyed by `job_id`.
    Navigate { target: String, job_id: String },
    Failed,
}

#[derive(Debug)]
struct ChatState {
    session: ChatSession,
    ui: UiState,
    log: MessageLog,
    initializing: bool,
}

impl ChatState {
    fn new(job_analysis_id: Option<String>) -> Self {
        Self {
            session: ChatSession::for_job(job_analysis_id),
            ui: UiState::default(),
            log: MessageLog::new(),
            initializing: false,
        }
    }

    fn needs_initialization(&self) -> bool {
        if self.initializing {
            return false;
        }
        match self.session.job_analysis_id {
            Some(_) => !self.session.is_bound(),
            None => self.log.is_empty(),
        }
    }
}

/// Clears the in-flight flag and the placeholder when dropped, so a request
/// that completes, fails or is abandoned always returns the widget to idle.
struct InFlight {
    state: Arc<Mutex<ChatState>>,
    placeholder: Placeholder,
}

impl Drop for InFlight {
    fn drop(&mut self) {
        let mut state = self.state.lock();
        state.log.remove_placeholder(self.placeholder);
        state.ui.is_typing = false;
    }
}

/// Clears the initializing flag when dropped, so an abandoned initialize
/// lets the next `open` try again.
struct Initializing {
    state: Arc<Mutex<ChatState>>,
}

impl Drop for Initializing {
    fn drop(&mut self) {
        self.state.lock().initializing = false;
    }
}

pub struct ChatSessionController<A: ?Sized> {
    api: Arc<A>,
    timings: ChatTimings,
    ids: Arc<MessageIds>,
    state: Arc<Mutex<ChatState>>,
}

impl<A: ?Sized> Clone for ChatSessionController<A> {
    fn clone(&self) -> Self {
        Self {
            api: Arc::clone(&self.api),
            timings: self.timings,
            ids: Arc::clone(&self.ids),
            state: Arc::clone(&self.state),
        }
    }
}

impl<A> ChatSessionController<A>
where
    A: SalaryApi + ?Sized,
{
    pub fn new(api: Arc<A>, timings: ChatTimings, job_analysis_id: Option<String>) -> Self {
        Self {
            api,
            timings,
            ids: Arc::new(MessageIds::default()),
            state: Arc::new(Mutex::new(ChatState::new(job_analysis_id))),
        }
    }

    /// Open the widget, initializing the conversation when it has none yet
    pub async fn open(&self) {
        let needs_init = {
            let mut state = self.state.lock();
            state.ui.open = true;
            state.needs_initialization()
        };

        if needs_init {
            self.initialize().await;
        }
    }

    pub fn close(&self) {
        let mut state = self.state.lock();
        state.ui.open = false;
        state.ui.has_notification = false;
    }

    pub fn toggle_minimized(&self) {
        let mut state = self.state.lock();
        state.ui.minimized = !state.ui.minimized;
    }

    pub fn set_input(&self, value: impl Into<String>) {
        self.state.lock().ui.input_value = value.into();
    }

    /// Seed the log with exactly one greeting.
    ///
    /// With a job id this fetches the job and its salary range concurrently,
    /// then opens a backend session. Any failure falls back to a static
    /// greeting and leaves the session unbound; nothing is returned to the caller.
    pub async fn initialize(&self) {
        let job_id = {
            let mut state = self.state.lock();
            if state.initializing {
                return;
            }
            state.initializing = true;
            state.session.job_analysis_id.clone()
        };
        let _initializing = Initializing {
            state: Arc::clone(&self.state),
        };

        let Some(job_id) = job_id else {
            self.state
                .lock()
                .log
                .reset_with(Message::assistant(self.ids.next(), GENERIC_GREETING));
            return;
        };

        info!("Initializing chat session for job {}", job_id);
        let result = self.bind_session(&job_id).await;

        let mut state = self.state.lock();
        match result {
            Ok((overview, session)) => {
                let greeting = job_greeting(&overview.job, &overview.salary);
                info!("Chat session {} bound to job {}", session.session_id, job_id);

                state.session.session_id = Some(session.session_id);
                state.session.job_analysis = Some(overview.job);
                state.session.salary_range = Some(overview.salary);
                state.log.reset_with(Message::assistant(self.ids.next(), greeting));
                state.ui.has_notification = true;
            }
            Err(e) => {
                error!("Error initializing chat: {:#}", e);

                state.session = ChatSession::for_job(Some(job_id));
                state
                    .log
                    .reset_with(Message::assistant(self.ids.next(), FALLBACK_GREETING));
            }
        }
    }

    async fn bind_session(&self, job_id: &str) -> Result<(JobOverview, SessionResponse)> {
        let overview = load_job_overview(self.api.as_ref(), job_id).await?;
        let session = self
            .api
            .create_session(job_id)
            .await
            .with_context(|| format!("Failed to create chat session for job {}", job_id))?;

        Ok((overview, session))
    }

    /// Send whatever is currently in the input buffer
    pub async fn submit_input(&self) -> SendOutcome {
        let text = self.state.lock().ui.input_value.clone();
        self.send(&text).await
    }

    /// Post one user message and log the assistant's answer.
    ///
    /// No-op for blank text, while another request is in flight, or while
    /// the session is still being initialized.
    pub async fn send(&self, text: &str) -> SendOutcome {
        let session_id = {
            let mut state = self.state.lock();
            if text.trim().is_empty() || state.ui.is_typing || state.initializing {
                return SendOutcome::Ignored;
            }

            state.log.push(Message::user(self.ids.next(), text));
            state.ui.input_value.clear();
            state.ui.is_typing = true;
            state.log.push_placeholder(Placeholder::Typing, "");
            state.session.session_id.clone()
        };
        let _in_flight = self.in_flight(Placeholder::Typing);

        let (reply, outcome) = match session_id {
            Some(session_id) => {
                debug!("Sending message on session {}", session_id);
                match self.api.send_message(&session_id, text).await {
                    Ok(response) => (response.response, SendOutcome::Replied),
                    Err(e) => {
                        error!("Error sending message: {:#}", e);
                        (SEND_FAILURE_REPLY.to_string(), SendOutcome::Failed)
                    }
                }
            }
            None => {
                tokio::time::sleep(self.timings.reply_delay).await;
                (UNBOUND_REPLY.to_string(), SendOutcome::Unbound)
            }
        };

        self.reply(Placeholder::Typing, reply);
        outcome
    }

    /// Fill the input with a canned prompt and send it shortly after
    pub async fn quick_action(&self, text: &str) -> SendOutcome {
        {
            let mut state = self.state.lock();
            if state.ui.is_typing {
                return SendOutcome::Ignored;
            }
            state.ui.input_value = text.to_string();
        }

        tokio::time::sleep(self.timings.quick_action_delay).await;
        self.submit_input().await
    }

    /// Upload a job description.
    ///
    /// On success the conversation is discarded and the controller re-keyed
    /// to the new job, mirroring a full page navigation.
    pub async fn upload_file(&self, file: Option<UploadFile>) -> UploadOutcome {
        let Some(file) = file else {
            return UploadOutcome::NoFile;
        };

        {
            let mut state = self.state.lock();
            if state.ui.is_typing || state.initializing {
                return UploadOutcome::Ignored;
            }
            state.ui.is_typing = true;
            state
                .log
                .push_placeholder(Placeholder::Upload, uploading_notice(&file.file_name));
        }
        let _in_flight = self.in_flight(Placeholder::Upload);

        let file_name = file.file_name.clone();
        match self.api.upload_job(file).await {
            Ok(response) => {
                let target = navigation_target(&response.id);
                info!("Uploaded {} as job {}, navigating to {}", file_name, response.id, target);

                *self.state.lock() = ChatState::new(Some(response.id.clone()));
                UploadOutcome::Navigate {
                    target,
                    job_id: response.id,
                }
            }
            Err(e) => {
                error!("Error uploading file {}: {:#}", file_name, e);
                self.reply(Placeholder::Upload, UPLOAD_FAILURE_REPLY.to_string());
                UploadOutcome::Failed
            }
        }
    }

    fn in_flight(&self, placeholder: Placeholder) -> InFlight {
        InFlight {
            state: Arc::clone(&self.state),
            placeholder,
        }
    }

    fn reply(&self, placeholder: Placeholder, content: String) {
        let mut state = self.state.lock();
        state.log.remove_placeholder(placeholder);
        state.log.push(Message::assistant(self.ids.next(), content));
    }

    pub fn messages(&self) -> Vec<Message> {
        self.state.lock().log.snapshot()
    }

    pub fn session(&self) -> ChatSession {
        self.state.lock().session.clone()
    }

    pub fn ui(&self) -> UiState {
        self.state.lock().ui.clone()
    }

    pub fn request_state(&self) -> RequestState {
        if self.state.lock().ui.is_typing {
            RequestState::Sending
        } else {
            RequestState::Idle
        }
    }

    pub fn quick_actions(&self) -> &'static [&'static str] {
        quick_actions(self.state.lock().session.job_analysis.is_some())
    }

    /// Header subtitle: the bound job's title, or an idle prompt
    pub fn title(&self) -> String {
        self.state
            .lock()
            .session
            .job_analysis
            .as_ref()
            .map(|job| job.job_title.clone())
            .unwrap_or_else(|| IDLE_TITLE.to_string())
    }
}
