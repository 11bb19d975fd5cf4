// src/session.rs
use crate::errors::AtrustError;
use crate::models::{AnalysisResult, MediaKind, SubmissionPayload, SubmissionState};
use crate::services::ScanApi;
use log::{debug, info, warn};
use uuid::Uuid;

/// Identifies one submission attempt. Only the outcome carrying the
/// ticket of the most recent `begin` is ever applied; everything else
/// is a stale response and gets dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitTicket(Uuid);

/// A validated submission handed back by `begin`, ready to execute
/// against a `ScanApi`.
#[derive(Debug, Clone)]
pub struct PendingSubmission {
    pub ticket: SubmitTicket,
    pub kind: MediaKind,
    pub payload: SubmissionPayload,
}

/// Sole owner of the submission lifecycle. The presentation layer only
/// observes `state()` and renders it; no phase is ever read back out of
/// UI attributes.
#[derive(Debug, Default)]
pub struct SubmissionSession {
    state: SubmissionState,
    kind: Option<MediaKind>,
    payload: Option<SubmissionPayload>,
    in_flight: Option<Uuid>,
}

impl SubmissionSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    pub fn kind(&self) -> Option<MediaKind> {
        self.kind
    }

    /// Selecting a kind (from any state) starts a fresh selection cycle:
    /// payload, prior result/error, and any in-flight ticket are cleared.
    /// Idempotent under reselecting the same kind.
    pub fn select(&mut self, kind: MediaKind) {
        debug!("Selected media kind: {}", kind);
        self.kind = Some(kind);
        self.payload = None;
        self.in_flight = None;
        self.state = SubmissionState::AwaitingInput;
    }

    /// Dismisses the selection surface. An in-flight request is not
    /// aborted; its eventual response no longer matches any ticket and
    /// is discarded on arrival.
    pub fn close(&mut self) {
        debug!("Selection closed");
        self.kind = None;
        self.payload = None;
        self.in_flight = None;
        self.state = SubmissionState::Idle;
    }

    /// Stores the candidate payload. Ignored while no kind is selected
    /// or while a request is in flight (the input surface is locked).
    pub fn set_payload(&mut self, payload: SubmissionPayload) {
        if self.kind.is_none() || self.state == SubmissionState::InFlight {
            debug!("Payload ignored: no active selection accepting input");
            return;
        }
        self.payload = Some(payload);
    }

    /// Validation gate and InFlight transition. An unsatisfied payload
    /// constraint short-circuits to Failed with a local message and
    /// returns `None` — the network is never contacted. Otherwise the
    /// session locks, mints a fresh ticket (superseding any earlier
    /// in-flight request), and hands the submission back for execution.
    pub fn begin(&mut self) -> Option<PendingSubmission> {
        let kind = match self.kind {
            Some(kind) => kind,
            None => {
                self.fail_validation("Select a media type first.");
                return None;
            }
        };

        let payload = match (&self.payload, kind.wants_file()) {
            (Some(p @ SubmissionPayload::File { .. }), true) => p.clone(),
            (Some(SubmissionPayload::Text(text)), false) if !text.trim().is_empty() => {
                SubmissionPayload::Text(text.clone())
            }
            (_, true) => {
                self.fail_validation("Please choose a file to scan.");
                return None;
            }
            (_, false) => {
                self.fail_validation("Please enter some text to scan.");
                return None;
            }
        };

        let ticket = Uuid::new_v4();
        info!("Submission {} started for kind {}", ticket, kind);
        self.in_flight = Some(ticket);
        self.state = SubmissionState::InFlight;

        Some(PendingSubmission {
            ticket: SubmitTicket(ticket),
            kind,
            payload,
        })
    }

    /// Applies an outcome if it still belongs to the active submission.
    /// Returns false when the response is stale (selection changed,
    /// surface closed, or a newer submission superseded it); stale
    /// outcomes are dropped without touching the state.
    pub fn finish(
        &mut self,
        ticket: SubmitTicket,
        outcome: Result<AnalysisResult, AtrustError>,
    ) -> bool {
        if self.state != SubmissionState::InFlight || self.in_flight != Some(ticket.0) {
            debug!("Discarding stale response for submission {}", ticket.0);
            return false;
        }

        self.in_flight = None;
        self.state = match outcome {
            Ok(result) => {
                info!("Submission {} succeeded", ticket.0);
                SubmissionState::Succeeded(result)
            }
            Err(err) => {
                warn!("Submission {} failed: {}", ticket.0, err);
                SubmissionState::Failed(err.to_string())
            }
        };
        true
    }

    /// Convenience driver: begin, execute, finish. The await on the
    /// API call is the only suspension point in the crate.
    pub async fn submit<A: ScanApi + Sync + ?Sized>(&mut self, api: &A) -> &SubmissionState {
        if let Some(pending) = self.begin() {
            let outcome = api.submit(pending.kind, &pending.payload).await;
            self.finish(pending.ticket, outcome);
        }
        &self.state
    }

    fn fail_validation(&mut self, message: &str) {
        let err = AtrustError::validation(message);
        warn!("{}", err);
        self.in_flight = None;
        self.state = SubmissionState::Failed(err.to_string());
    }
}
