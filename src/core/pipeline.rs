//! Send pipeline
//!
//! Owns the draft and the uploaded recipient list and drives one submission
//! at a time through `Idle -> Validating -> Submitting -> Idle`. Every outcome
//! is turned into a single [`Notification`]; on success the draft is cleared,
//! on failure it is left exactly as it was so the user can retry.

use super::draft::{MessageDraft, SubmitPlan, validate_draft};
use super::recipients::{RecipientList, parse_recipient_bytes, parse_recipient_file};
use super::session::Session;
use crate::config::SendingConfig;
use crate::sdk::api::MessagingApi;
use crate::sdk::types::SendReceipt;
use crate::utils::error::{InputError, Notification, PortalError, Result};
use serde::Serialize;
use std::path::Path;
use tokio::sync::watch;
use tracing::{debug, info, warn};

/// Where the pipeline is in a submission
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum SendPhase {
    #[default]
    Idle,
    Validating,
    Submitting,
}

/// Snapshot of everything the host shell renders
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SendView {
    pub draft: MessageDraft,
    pub file_name: Option<String>,
    pub preview: Vec<String>,
    pub total_numbers: usize,
    pub message_length: usize,
    pub max_message_length: usize,
    pub phase: SendPhase,
    pub is_sending: bool,
    pub notification: Option<Notification>,
}

/// Returns the pipeline to `Idle` when the request ends, including when the
/// submit future is dropped mid-flight.
struct SubmittingGuard<'a> {
    phase: &'a mut SendPhase,
    updates: &'a watch::Sender<SendView>,
}

impl Drop for SubmittingGuard<'_> {
    fn drop(&mut self) {
        if *self.phase == SendPhase::Submitting {
            *self.phase = SendPhase::Idle;
            self.updates.send_modify(|view| {
                view.phase = SendPhase::Idle;
                view.is_sending = false;
            });
        }
    }
}

pub struct SendPipeline<A> {
    api: A,
    limits: SendingConfig,
    draft: MessageDraft,
    recipients: Option<RecipientList>,
    phase: SendPhase,
    notification: Option<Notification>,
    updates: watch::Sender<SendView>,
}

impl<A: MessagingApi> SendPipeline<A> {
    pub fn new(api: A, limits: SendingConfig) -> Self {
        let (updates, _) = watch::channel(SendView {
            max_message_length: limits.max_message_length,
            ..SendView::default()
        });
        Self {
            api,
            limits,
            draft: MessageDraft::default(),
            recipients: None,
            phase: SendPhase::Idle,
            notification: None,
            updates,
        }
    }

    /// Receive a fresh [`SendView`] after every state change
    pub fn subscribe(&self) -> watch::Receiver<SendView> {
        self.updates.subscribe()
    }

    pub fn view(&self) -> SendView {
        SendView {
            draft: self.draft.clone(),
            file_name: self.recipients.as_ref().map(|r| r.file_name().to_string()),
            preview: self.preview().to_vec(),
            total_numbers: self.total_numbers(),
            message_length: self.draft.message_length(),
            max_message_length: self.limits.max_message_length,
            phase: self.phase,
            is_sending: self.is_sending(),
            notification: self.notification.clone(),
        }
    }

    fn publish(&self) {
        self.updates.send_replace(self.view());
    }

    pub fn draft(&self) -> &MessageDraft {
        &self.draft
    }

    pub fn recipients(&self) -> Option<&RecipientList> {
        self.recipients.as_ref()
    }

    pub fn preview(&self) -> &[String] {
        self.recipients
            .as_ref()
            .map(RecipientList::preview)
            .unwrap_or_default()
    }

    pub fn total_numbers(&self) -> usize {
        self.recipients.as_ref().map_or(0, RecipientList::len)
    }

    pub fn phase(&self) -> SendPhase {
        self.phase
    }

    /// True while a request is outstanding; the submit control stays disabled
    pub fn is_sending(&self) -> bool {
        self.phase == SendPhase::Submitting
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    pub fn dismiss_notification(&mut self) {
        self.notification = None;
        self.publish();
    }

    pub fn set_message(&mut self, text: &str) {
        self.draft.set_message(text, self.limits.max_message_length);
        self.publish();
    }

    pub fn set_phone_number<S: Into<String>>(&mut self, phone_number: S) {
        self.draft.set_phone_number(phone_number);
        self.publish();
    }

    /// Switching modes discards the phone number and any uploaded list
    pub fn set_bulk_mode(&mut self, bulk_mode: bool) {
        self.draft.bulk_mode = bulk_mode;
        self.draft.phone_number = None;
        self.recipients = None;
        self.publish();
    }

    pub fn set_policy_accepted(&mut self, accepted: bool) {
        self.draft.policy_accepted = accepted;
        self.publish();
    }

    /// Read a spreadsheet from disk and make it the recipient list.
    ///
    /// The previous list is dropped before parsing, so a rejected file leaves
    /// no recipients behind.
    pub async fn load_recipient_file<P: AsRef<Path>>(&mut self, path: P) -> Result<usize> {
        self.recipients = None;
        self.publish();

        let parsed = parse_recipient_file(path, self.limits.preview_size).await;
        self.accept_recipients(parsed)
    }

    /// Same as [`Self::load_recipient_file`] for an already-read upload
    pub fn load_recipient_bytes<S: Into<String>>(
        &mut self,
        file_name: S,
        bytes: Vec<u8>,
    ) -> Result<usize> {
        self.recipients = None;
        let parsed = parse_recipient_bytes(file_name, bytes, self.limits.preview_size);
        self.accept_recipients(parsed)
    }

    fn accept_recipients(&mut self, parsed: Result<RecipientList>) -> Result<usize> {
        match parsed {
            Ok(list) => {
                let total = list.len();
                debug!("Recipient preview: {:?}", list.preview());
                self.recipients = Some(list);
                self.publish();
                Ok(total)
            }
            Err(error) => Err(self.report(error)),
        }
    }

    /// Validate the draft and send it as one request
    pub async fn submit(&mut self, session: &Session) -> Result<SendReceipt> {
        if self.phase != SendPhase::Idle {
            return Err(self.report(InputError::SubmissionInProgress.into()));
        }

        self.phase = SendPhase::Validating;
        let plan = match validate_draft(&self.draft, self.recipients.as_ref()) {
            Ok(plan) => plan,
            Err(rule) => {
                self.phase = SendPhase::Idle;
                return Err(self.report(rule.into()));
            }
        };

        self.phase = SendPhase::Submitting;
        self.publish();

        let count = plan.recipient_count();
        info!("Submitting message to {} recipients", count);
        let result = {
            let _busy = SubmittingGuard {
                phase: &mut self.phase,
                updates: &self.updates,
            };
            match &plan {
                SubmitPlan::Bulk { messages } => self.api.send_bulk(session, messages).await,
                SubmitPlan::Single {
                    phone_number,
                    message,
                } => self.api.send_single(session, phone_number, message).await,
            }
        };

        match result {
            Ok(receipt) => {
                let text = match plan {
                    SubmitPlan::Bulk { .. } => {
                        format!("Messages sent successfully ({} numbers)", count)
                    }
                    SubmitPlan::Single { .. } => "Message sent successfully".to_string(),
                };
                self.draft.clear();
                self.recipients = None;
                self.notification = Some(Notification::success(text));
                self.publish();
                Ok(receipt)
            }
            Err(error) => Err(self.report(error)),
        }
    }

    /// Back to an empty `Idle` state, as after a page reload
    pub fn reset(&mut self) {
        self.draft = MessageDraft::default();
        self.recipients = None;
        self.phase = SendPhase::Idle;
        self.notification = None;
        self.publish();
    }

    fn report(&mut self, error: PortalError) -> PortalError {
        warn!("Send pipeline error: {}", error);
        self.notification = Some(Notification::from_error(&error));
        self.publish();
        error
    }
}
