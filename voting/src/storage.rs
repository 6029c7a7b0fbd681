use near_sdk::borsh::{self, BorshDeserialize, BorshSerialize};
use near_sdk::serde::{Deserialize, Serialize};
use near_sdk::{AccountId, BorshStorageKey};

pub type PollId = u64;
/// Index of an answer in `Poll::answers`.
pub type AnswerId = u32;

/// Helper structure for keys of the persistent collections.
#[derive(BorshSerialize, BorshStorageKey)]
pub enum StorageKey {
    Polls,
    Ballots,
    Tallies,
}

#[derive(BorshSerialize, BorshDeserialize, Serialize, Deserialize)]
#[cfg_attr(not(target_arch = "wasm32"), derive(Debug, PartialEq, Clone))]
#[serde(crate = "near_sdk::serde")]
pub struct Poll {
    pub question: String,
    pub answers: Vec<String>,
    pub multiple_choices: bool,
    /// time in milliseconds
    pub start_time: u64,
    /// time in milliseconds, always greater than `start_time`
    pub end_time: u64,
    pub canceled: bool,
    pub creator: AccountId,
    /// time in milliseconds, assigned by the contract
    pub created_at: u64,
}

/// Poll lifecycle state. It's never stored: it's derived from the poll schedule and the
/// block time on every call.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug)]
#[serde(crate = "near_sdk::serde")]
pub enum Status {
    Scheduled,
    Active,
    Ended,
    Canceled,
}

impl Poll {
    /// Classifies the poll at time `now` (milliseconds).
    pub fn status(&self, now: u64) -> Status {
        if self.canceled {
            Status::Canceled
        } else if now < self.start_time {
            Status::Scheduled
        } else if now < self.end_time {
            Status::Active
        } else {
            Status::Ended
        }
    }

    #[inline]
    pub fn is_active(&self, now: u64) -> bool {
        self.status(now) == Status::Active
    }
}

/// Per poll vote counters, updated on every accepted vote.
#[derive(BorshSerialize, BorshDeserialize)]
#[cfg_attr(not(target_arch = "wasm32"), derive(Debug, PartialEq))]
pub struct Tally {
    /// number of ballots selecting each answer, aligned with `Poll::answers`
    pub votes: Vec<u32>,
    /// number of recorded ballots
    pub participants: u32,
}

impl Tally {
    pub fn new(num_answers: usize) -> Self {
        Self {
            votes: vec![0; num_answers],
            participants: 0,
        }
    }

    /// Records a ballot. Answers must be already validated against the poll.
    pub fn record(&mut self, answers: &[AnswerId]) {
        for a in answers {
            self.votes[*a as usize] += 1;
        }
        self.participants += 1;
    }
}
