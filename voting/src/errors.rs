use near_sdk::env::panic_str;
use near_sdk::FunctionError;

/// Contract errors
#[cfg_attr(not(target_arch = "wasm32"), derive(PartialEq))]
#[derive(Debug)]
pub enum PollError {
    // poll parameters
    InvalidQuestionLength,
    InvalidAnswersCount,
    InvalidAnswerLength,
    ZeroDuration,
    StartTimeNotFuture,
    TimeOverflow,
    // lookup
    NotFound,
    NotAuthorized,
    // lifecycle
    NotStarted,
    Ended,
    AlreadyStarted,
    Canceled,
    // ballot
    AlreadyVoted,
    InvalidAnswerId,
    OnlyOneOption,
    NoAnswer,
}

impl FunctionError for PollError {
    fn panic(&self) -> ! {
        match self {
            PollError::InvalidQuestionLength => panic_str("invalid question length"),
            PollError::InvalidAnswersCount => panic_str("invalid answers count"),
            PollError::InvalidAnswerLength => panic_str("invalid answer length"),
            PollError::ZeroDuration => panic_str("duration must be > 0"),
            PollError::StartTimeNotFuture => panic_str("start time must be in the future"),
            PollError::TimeOverflow => panic_str("poll end time overflow"),
            PollError::NotFound => panic_str("poll does not exist"),
            PollError::NotAuthorized => {
                panic_str("not authorized: required poll creator or admin")
            }
            PollError::NotStarted => panic_str("poll not started"),
            PollError::Ended => panic_str("poll ended"),
            PollError::AlreadyStarted => panic_str("already started"),
            PollError::Canceled => panic_str("poll canceled"),
            PollError::AlreadyVoted => panic_str("already voted"),
            PollError::InvalidAnswerId => panic_str("invalid answer id"),
            PollError::OnlyOneOption => panic_str("only one option allowed"),
            PollError::NoAnswer => panic_str("no answer provided"),
        }
    }
}
