/// Form controller behind the popup.
///
/// Owns the five form fields, the `submitting` flag and the latest
/// notification. Session fields are written through to the store on every
/// edit. Submitting is split in two so the network call can happen outside
/// any borrow of the controller:
///
/// 1. `begin_submit` validates and hands out the payload to post
/// 2. `finish_submit` applies the server's answer
use crate::api::ApiResponse;
use crate::category::Category;
use crate::error::{ApiError, SubmitError};
use crate::event::{DraftEvent, EventPayload, SessionFields};
use crate::storage::{KeyValueStore, SessionKey, load_session, save_field};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A toast shown to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Notice {
        Notice {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Notice {
        Notice {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }
}

pub struct FormController<S: KeyValueStore> {
    store: S,
    session: SessionFields,
    draft: DraftEvent,
    submitting: bool,
    notice: Option<Notice>,
    notice_seq: u64,
}

impl<S: KeyValueStore> FormController<S> {
    /// Restore the session fields from `store`; the draft starts empty
    pub fn load(store: S) -> FormController<S> {
        let session = load_session(&store);
        FormController {
            store,
            session,
            draft: DraftEvent::default(),
            submitting: false,
            notice: None,
            notice_seq: 0,
        }
    }

    pub fn session(&self) -> &SessionFields {
        &self.session
    }

    pub fn draft(&self) -> &DraftEvent {
        &self.draft
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Bumped every time a notice is shown, so timers can tell notices apart
    pub fn notice_seq(&self) -> u64 {
        self.notice_seq
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// Drop the notice shown as `seq`; a newer notice is left alone
    pub fn expire_notice(&mut self, seq: u64) {
        if seq == self.notice_seq {
            self.notice = None;
        }
    }

    pub fn set_project_id(&mut self, value: String) {
        self.persist(SessionKey::ProjectId, &value);
        self.session.project_id = value;
    }

    pub fn set_api_key(&mut self, value: String) {
        self.persist(SessionKey::ApiKey, &value);
        self.session.api_key = value;
    }

    pub fn set_username(&mut self, value: String) {
        self.persist(SessionKey::Username, &value);
        self.session.username = value;
    }

    pub fn set_category(&mut self, category: Option<Category>) {
        self.draft.category = category;
    }

    pub fn set_content(&mut self, value: String) {
        self.draft.content = value;
    }

    /// Start a submission. On `Err` nothing must be sent.
    pub fn begin_submit(&mut self) -> Result<EventPayload, SubmitError> {
        if self.submitting {
            return Err(SubmitError::InFlight);
        }
        self.submitting = true;

        match EventPayload::from_form(&self.session, &self.draft) {
            Ok(payload) => Ok(payload),
            Err(e) => {
                if let SubmitError::MissingField(field) = &e {
                    log::info!("Not submitting, {} is empty", field.label());
                }
                self.notify(Notice::error(e.to_string()));
                self.submitting = false;
                Err(e)
            }
        }
    }

    /// Apply the result of the POST started by `begin_submit`
    pub fn finish_submit(&mut self, outcome: Result<ApiResponse, ApiError>) {
        match outcome {
            Ok(response) if response.is_created() => {
                log::info!("Event created");
                self.notify(Notice::success("Event created"));
                self.draft.clear();
            }
            Ok(response) => {
                log::warn!("Event rejected: {} {}", response.status, response.status_text);
                self.notify(Notice::error(format!(
                    "Error: {} {}",
                    response.status, response.status_text
                )));
            }
            Err(e) => {
                log::error!("Event submission failed: {}", e);
                self.notify(Notice::error(format!("Error: {}", e)));
            }
        }
        self.submitting = false;
    }

    fn notify(&mut self, notice: Notice) {
        self.notice = Some(notice);
        self.notice_seq += 1;
    }

    // Fire-and-forget: a failed write only gets logged
    fn persist(&self, key: SessionKey, value: &str) {
        if let Err(e) = save_field(&self.store, key, value) {
            log::warn!("{}", e);
        }
    }
}
