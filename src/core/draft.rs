//! Message draft state and pre-flight validation

use super::batch::{OutboundMessage, build_batch};
use super::recipients::RecipientList;
use crate::utils::error::InputError;
use serde::Serialize;

/// Form state of the send view
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MessageDraft {
    pub phone_number: Option<String>,
    pub message: String,
    pub bulk_mode: bool,
    pub policy_accepted: bool,
}

impl MessageDraft {
    /// Store message text, cut to `max_length` characters
    pub fn set_message(&mut self, text: &str, max_length: usize) {
        self.message = truncate_chars(text, max_length);
    }

    pub fn set_phone_number<S: Into<String>>(&mut self, phone_number: S) {
        let phone_number = phone_number.into();
        self.phone_number = (!phone_number.is_empty()).then_some(phone_number);
    }

    pub fn message_length(&self) -> usize {
        self.message.chars().count()
    }

    /// Clear everything the user typed; policy acceptance survives
    pub fn clear(&mut self) {
        *self = Self {
            policy_accepted: self.policy_accepted,
            ..Self::default()
        };
    }
}

/// First `max_chars` characters of `text`
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((end, _)) => text[..end].to_string(),
        None => text.to_string(),
    }
}

/// What a validated draft will send
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitPlan {
    Single {
        phone_number: String,
        message: String,
    },
    Bulk {
        messages: Vec<OutboundMessage>,
    },
}

impl SubmitPlan {
    pub fn recipient_count(&self) -> usize {
        match self {
            Self::Single { .. } => 1,
            Self::Bulk { messages } => messages.len(),
        }
    }
}

struct DraftCheck<'a> {
    draft: &'a MessageDraft,
    recipients: Option<&'a RecipientList>,
}

type Rule = fn(&DraftCheck<'_>) -> Option<InputError>;

// Evaluated in order; the first failure is reported.
const RULES: &[Rule] = &[
    policy_accepted,
    phone_present,
    message_present,
    file_uploaded,
    file_has_numbers,
];

fn policy_accepted(c: &DraftCheck<'_>) -> Option<InputError> {
    (!c.draft.policy_accepted).then_some(InputError::PolicyNotAccepted)
}

fn phone_present(c: &DraftCheck<'_>) -> Option<InputError> {
    let missing = c
        .draft
        .phone_number
        .as_deref()
        .is_none_or(|p| p.trim().is_empty());
    (!c.draft.bulk_mode && missing).then_some(InputError::MissingPhoneNumber)
}

fn message_present(c: &DraftCheck<'_>) -> Option<InputError> {
    c.draft
        .message
        .trim()
        .is_empty()
        .then_some(InputError::EmptyMessage)
}

fn file_uploaded(c: &DraftCheck<'_>) -> Option<InputError> {
    (c.draft.bulk_mode && c.recipients.is_none()).then_some(InputError::MissingRecipientFile)
}

fn file_has_numbers(c: &DraftCheck<'_>) -> Option<InputError> {
    let empty = c.recipients.is_some_and(RecipientList::is_empty);
    (c.draft.bulk_mode && empty).then_some(InputError::EmptyRecipientList)
}

/// Run the ordered rules and build the request plan
pub fn validate_draft(
    draft: &MessageDraft,
    recipients: Option<&RecipientList>,
) -> Result<SubmitPlan, InputError> {
    let check = DraftCheck { draft, recipients };
    if let Some(error) = RULES.iter().find_map(|rule| rule(&check)) {
        return Err(error);
    }

    match (draft.bulk_mode, recipients) {
        (true, Some(list)) => Ok(SubmitPlan::Bulk {
            messages: build_batch(list.numbers(), &draft.message),
        }),
        (true, None) => Err(InputError::MissingRecipientFile),
        (false, _) => Ok(SubmitPlan::Single {
            phone_number: draft
                .phone_number
                .as_deref()
                .map(str::trim)
                .unwrap_or_default()
                .to_string(),
            message: draft.message.clone(),
        }),
    }
}
