//! Scripted input for tests and non-interactive runs

use super::input::{InputError, Result, UserInput};
use std::collections::VecDeque;
use std::sync::{Mutex, PoisonError};

/// One prepared answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Text(String),
    Confirm(bool),
    Select(usize),
    /// Answers any prompt as cancelled
    Cancel,
}

/// [`UserInput`] that replays a fixed list of answers in order
///
/// A prompt whose kind does not match the next answer, or a prompt after the
/// script is exhausted, fails with [`InputError::Invalid`].
#[derive(Debug, Default)]
pub struct ScriptedInput {
    answers: Mutex<VecDeque<Answer>>,
}

impl ScriptedInput {
    #[must_use]
    pub fn new(answers: Vec<Answer>) -> Self {
        Self {
            answers: Mutex::new(answers.into()),
        }
    }

    /// A script with a single yes/no answer
    #[must_use]
    pub fn confirming(yes: bool) -> Self {
        Self::new(vec![Answer::Confirm(yes)])
    }

    /// A script that cancels the first prompt
    #[must_use]
    pub fn cancelled() -> Self {
        Self::new(vec![Answer::Cancel])
    }

    /// Answers not consumed yet
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.answers.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    fn next(&self, prompt: &str) -> Result<Answer> {
        self.answers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front()
            .ok_or_else(|| InputError::Invalid(format!("no scripted answer for '{prompt}'")))
    }
}

fn mismatch(prompt: &str, answer: &Answer) -> InputError {
    InputError::Invalid(format!("scripted answer {answer:?} does not fit '{prompt}'"))
}

impl UserInput for ScriptedInput {
    fn prompt_text(
        &self,
        prompt: &str,
        default: Option<&str>,
        allow_empty: bool,
    ) -> Result<Option<String>> {
        match self.next(prompt)? {
            Answer::Text(text) if text.is_empty() => match default {
                Some(def) => Ok(Some(def.to_string())),
                None if allow_empty => Ok(Some(text)),
                None => Err(InputError::Invalid(format!("empty answer for '{prompt}'"))),
            },
            Answer::Text(text) => Ok(Some(text)),
            Answer::Cancel => Ok(None),
            other => Err(mismatch(prompt, &other)),
        }
    }

    fn prompt_confirm(&self, prompt: &str, _default: bool) -> Result<Option<bool>> {
        match self.next(prompt)? {
            Answer::Confirm(yes) => Ok(Some(yes)),
            Answer::Cancel => Ok(None),
            other => Err(mismatch(prompt, &other)),
        }
    }

    fn prompt_select(
        &self,
        prompt: &str,
        items: &[String],
        _default: Option<usize>,
    ) -> Result<Option<usize>> {
        match self.next(prompt)? {
            Answer::Select(index) if index < items.len() => Ok(Some(index)),
            Answer::Select(index) => Err(InputError::Invalid(format!(
                "index {index} out of range for '{prompt}'"
            ))),
            Answer::Cancel => Ok(None),
            other => Err(mismatch(prompt, &other)),
        }
    }
}
