use std::fmt;

use crate::store::WeekKey;

pub mod buffered;
#[cfg(test)]
pub mod mock;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Level {
    Info,
    Warn,
    Error,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Message {
    AnswerLocked(usize),
    AnswerOutOfBounds(usize),
    AnswerSelected(usize, usize),
    AutoAdvanceCancelled(usize),
    AutoAdvanceScheduled(usize),
    EmptyDataset(WeekKey),
    Navigated(usize),
    ProgressDiscarded(WeekKey),
    ProgressRestored(WeekKey, usize),
    QuestionsLoaded(WeekKey, usize),
    QuizReset(WeekKey),
    QuizSubmitted(usize, usize, u64),
    SelectAfterCompletion(usize),
    SubmitIgnored,
    TimerPaused(u64),
    TimerResumed(u64),
}

impl Message {
    pub fn level(&self) -> Level {
        match self {
            Message::EmptyDataset(_) => Level::Error,
            Message::AnswerLocked(_)
            | Message::AnswerOutOfBounds(_)
            | Message::SelectAfterCompletion(_)
            | Message::SubmitIgnored => Level::Warn,
            _ => Level::Info,
        }
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Message::AnswerLocked(index) => {
                write!(f, "Question {} already has an answer", index)
            }
            Message::AnswerOutOfBounds(index) => {
                write!(f, "Answer index {} is out of bounds", index)
            }
            Message::AnswerSelected(index, answered) => {
                write!(f, "Answer selected for question {} ({} answered)", index, answered)
            }
            Message::AutoAdvanceCancelled(index) => {
                write!(f, "Auto-advance cancelled at question {}", index)
            }
            Message::AutoAdvanceScheduled(index) => {
                write!(f, "Auto-advance scheduled after question {}", index)
            }
            Message::EmptyDataset(week) => write!(f, "No questions available for {}", week),
            Message::Navigated(index) => write!(f, "Navigated to question {}", index),
            Message::ProgressDiscarded(week) => {
                write!(f, "Discarded saved progress for {}", week)
            }
            Message::ProgressRestored(week, answered) => {
                write!(f, "Restored {} saved answers for {}", answered, week)
            }
            Message::QuestionsLoaded(week, count) => {
                write!(f, "Loaded {} questions for {}", count, week)
            }
            Message::QuizReset(week) => write!(f, "Quiz reset for {}", week),
            Message::QuizSubmitted(score, total, seconds) => {
                write!(f, "Quiz submitted: {}/{} in {}s", score, total, seconds)
            }
            Message::SelectAfterCompletion(index) => {
                write!(f, "Ignored answer for question {} after completion", index)
            }
            Message::SubmitIgnored => write!(f, "Ignored submit on a completed quiz"),
            Message::TimerPaused(seconds) => write!(f, "Timer paused at {}s", seconds),
            Message::TimerResumed(seconds) => write!(f, "Timer resumed at {}s", seconds),
        }
    }
}

pub trait QuizOutput {
    fn say(&self, message: &Message);
}
