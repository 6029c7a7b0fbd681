use std::fmt;

use near_sdk::serde::Serialize;
use near_sdk::{env, AccountId};

use crate::PollId;

pub const EVENT_STANDARD: &str = "ndc-voting";
pub const EVENT_VERSION: &str = "1.0.0";

/// NEP-297 event log entry.
#[derive(Serialize)]
#[cfg_attr(not(target_arch = "wasm32"), derive(Debug))]
#[serde(crate = "near_sdk::serde")]
pub struct NearEvent {
    pub standard: &'static str,
    pub version: &'static str,

    // `flatten` to not have "event": {<VotingEvent>} in the JSON, just the contents.
    #[serde(flatten)]
    pub event: VotingEvent,
}

#[derive(Serialize)]
#[cfg_attr(not(target_arch = "wasm32"), derive(Debug))]
#[serde(tag = "event", content = "data")]
#[serde(rename_all = "snake_case")]
#[serde(crate = "near_sdk::serde")]
pub enum VotingEvent {
    CreatePoll(PollCreated),
    Vote(VoteCast),
    CancelPoll(PollCanceled),
    UpdatePollSchedule(ScheduleUpdated),
}

#[derive(Serialize)]
#[cfg_attr(not(target_arch = "wasm32"), derive(Debug))]
#[serde(crate = "near_sdk::serde")]
pub struct PollCreated {
    pub poll_id: PollId,
    pub creator: AccountId,
    pub start_time: u64,
    pub end_time: u64,
}

#[derive(Serialize)]
#[cfg_attr(not(target_arch = "wasm32"), derive(Debug))]
#[serde(crate = "near_sdk::serde")]
pub struct VoteCast {
    pub poll_id: PollId,
    pub voter: AccountId,
}

#[derive(Serialize)]
#[cfg_attr(not(target_arch = "wasm32"), derive(Debug))]
#[serde(crate = "near_sdk::serde")]
pub struct PollCanceled {
    pub poll_id: PollId,
}

#[derive(Serialize)]
#[cfg_attr(not(target_arch = "wasm32"), derive(Debug))]
#[serde(crate = "near_sdk::serde")]
pub struct ScheduleUpdated {
    pub poll_id: PollId,
    pub start_time: u64,
    pub end_time: u64,
}

impl From<VotingEvent> for NearEvent {
    fn from(event: VotingEvent) -> Self {
        Self {
            standard: EVENT_STANDARD,
            version: EVENT_VERSION,
            event,
        }
    }
}

impl fmt::Display for NearEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_fmt(format_args!(
            "EVENT_JSON:{}",
            &serde_json::to_string(self).map_err(|_| fmt::Error)?
        ))
    }
}

fn emit_event(event: VotingEvent) {
    env::log_str(&NearEvent::from(event).to_string());
}

pub(crate) fn emit_create_poll(
    poll_id: PollId,
    creator: AccountId,
    start_time: u64,
    end_time: u64,
) {
    emit_event(VotingEvent::CreatePoll(PollCreated {
        poll_id,
        creator,
        start_time,
        end_time,
    }));
}

pub(crate) fn emit_vote(poll_id: PollId, voter: AccountId) {
    emit_event(VotingEvent::Vote(VoteCast { poll_id, voter }));
}

pub(crate) fn emit_cancel_poll(poll_id: PollId) {
    emit_event(VotingEvent::CancelPoll(PollCanceled { poll_id }));
}

pub(crate) fn emit_update_poll_schedule(poll_id: PollId, start_time: u64, end_time: u64) {
    emit_event(VotingEvent::UpdatePollSchedule(ScheduleUpdated {
        poll_id,
        start_time,
        end_time,
    }));
}
