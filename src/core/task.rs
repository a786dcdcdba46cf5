//! # Task
//!
//! A task is one trimmed, non-empty line of text. It has no identity beyond
//! its text, so two tasks with the same text are the same task as far as
//! storage is concerned.

use std::fmt;

/// Validation message shown when the user submits blank input.
pub const EMPTY_TASK_MESSAGE: &str = "Please enter a task";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskError {
    /// Input was empty or whitespace only.
    Empty,
}

impl fmt::Display for TaskError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskError::Empty => f.write_str(EMPTY_TASK_MESSAGE),
        }
    }
}

impl std::error::Error for TaskError {}

/// A validated task. Only constructible through [`Task::parse`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task(String);

impl Task {
    /// Trim surrounding whitespace and reject empty results.
    pub fn parse(raw: &str) -> Result<Self, TaskError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(TaskError::Empty);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trims_whitespace() {
        let task = Task::parse("  Buy milk \t\n").unwrap();
        assert_eq!(task.as_str(), "Buy milk");
    }

    #[test]
    fn test_parse_keeps_inner_whitespace() {
        let task = Task::parse(" walk   the dog ").unwrap();
        assert_eq!(task.as_str(), "walk   the dog");
    }

    #[test]
    fn test_parse_rejects_empty_and_blank() {
        assert_eq!(Task::parse(""), Err(TaskError::Empty));
        assert_eq!(Task::parse("   "), Err(TaskError::Empty));
        assert_eq!(Task::parse("\t\n "), Err(TaskError::Empty));
    }

    #[test]
    fn test_error_message_is_user_facing_text() {
        assert_eq!(TaskError::Empty.to_string(), "Please enter a task");
    }
}
