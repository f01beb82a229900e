/// Data structures for timeline events
use crate::category::Category;
use crate::error::{FormField, SubmitError};
use serde::Serialize;

/// The identifying fields remembered between popup openings
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionFields {
    pub project_id: String,
    pub api_key: String,
    pub username: String,
}

/// The event being written. Cleared once the server accepts it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftEvent {
    pub category: Option<Category>,
    pub content: String,
}

impl DraftEvent {
    pub fn clear(&mut self) {
        self.category = None;
        self.content.clear();
    }
}

/// JSON body posted to the events endpoint.
///
/// Field order is the wire order: apiKey, projectId, username, category, content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventPayload {
    pub api_key: String,
    pub project_id: String,
    pub username: String,
    pub category: Category,
    pub content: String,
}

impl EventPayload {
    /// Build a payload if every field is filled in. Whitespace counts as content.
    pub fn from_form(session: &SessionFields, draft: &DraftEvent) -> Result<EventPayload, SubmitError> {
        require(&session.project_id, FormField::ProjectId)?;
        require(&session.api_key, FormField::ApiKey)?;
        require(&session.username, FormField::Username)?;
        let category = draft
            .category
            .ok_or(SubmitError::MissingField(FormField::Category))?;
        require(&draft.content, FormField::Content)?;

        Ok(EventPayload {
            api_key: session.api_key.clone(),
            project_id: session.project_id.clone(),
            username: session.username.clone(),
            category,
            content: draft.content.clone(),
        })
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

fn require(value: &str, field: FormField) -> Result<(), SubmitError> {
    if value.is_empty() {
        Err(SubmitError::MissingField(field))
    } else {
        Ok(())
    }
}
