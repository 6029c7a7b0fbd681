use crate::constants::*;
use crate::{AnswerId, Poll, PollError};

pub(crate) fn validate_question(question: &str) -> Result<(), PollError> {
    if !(MIN_QUESTION_LEN..=MAX_QUESTION_LEN).contains(&question.len()) {
        return Err(PollError::InvalidQuestionLength);
    }
    Ok(())
}

pub(crate) fn validate_answers(answers: &[String], max_answers: u8) -> Result<(), PollError> {
    if !(MIN_ANSWERS..=max_answers as usize).contains(&answers.len()) {
        return Err(PollError::InvalidAnswersCount);
    }
    if answers
        .iter()
        .any(|a| !(MIN_ANSWER_LEN..=MAX_ANSWER_LEN).contains(&a.len()))
    {
        return Err(PollError::InvalidAnswerLength);
    }
    Ok(())
}

/// Returns the `(start_time, end_time)` window for a poll scheduled at `now`.
/// When `start_time` is not provided the poll starts at `now`, otherwise it must be strictly
/// in the future.
pub(crate) fn schedule(
    now: u64,
    start_time: Option<u64>,
    duration: u64,
) -> Result<(u64, u64), PollError> {
    if duration == 0 {
        return Err(PollError::ZeroDuration);
    }
    let start = match start_time {
        None => now,
        Some(t) if t > now => t,
        Some(_) => return Err(PollError::StartTimeNotFuture),
    };
    let end = start
        .checked_add(duration)
        .ok_or(PollError::TimeOverflow)?;
    Ok((start, end))
}

impl Poll {
    /// Cancel and reschedule are only allowed strictly before the poll start.
    pub(crate) fn assert_not_started(&self, now: u64) -> Result<(), PollError> {
        if now >= self.start_time {
            return Err(PollError::AlreadyStarted);
        }
        if self.canceled {
            return Err(PollError::Canceled);
        }
        Ok(())
    }

    /// Voting window check. A canceled poll reports `NotStarted` before its original start
    /// and `Ended` afterwards.
    pub(crate) fn assert_open(&self, now: u64) -> Result<(), PollError> {
        if now < self.start_time {
            return Err(PollError::NotStarted);
        }
        if self.canceled || now >= self.end_time {
            return Err(PollError::Ended);
        }
        Ok(())
    }

    /// Checks ballot answers: every index must point to an existing, not repeated answer and
    /// single choice polls accept exactly one answer.
    pub(crate) fn validate_ballot(&self, answers: &[AnswerId]) -> Result<(), PollError> {
        let mut seen = vec![false; self.answers.len()];
        for a in answers {
            match seen.get_mut(*a as usize) {
                Some(s) if !*s => *s = true,
                _ => return Err(PollError::InvalidAnswerId),
            }
        }
        if !self.multiple_choices && answers.len() != 1 {
            return Err(PollError::OnlyOneOption);
        }
        if answers.is_empty() {
            return Err(PollError::NoAnswer);
        }
        Ok(())
    }
}
