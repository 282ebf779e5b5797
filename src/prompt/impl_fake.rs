use crate::prompt::interface::Prompt;
use std::collections::VecDeque;
use std::error::Error;
use std::sync::Mutex;

/// Answers prompts from a script; cancels once the script runs out.
pub struct PromptFake {
    answers: Mutex<VecDeque<Option<usize>>>,
    asked: Mutex<Vec<(String, Vec<String>)>>,
}

impl PromptFake {
    pub fn new(answers: Vec<Option<usize>>) -> Self {
        Self {
            answers: Mutex::new(answers.into()),
            asked: Mutex::new(Vec::new()),
        }
    }

    pub fn asked(&self) -> Vec<(String, Vec<String>)> {
        self.asked.lock().map(|asked| asked.clone()).unwrap_or_default()
    }
}

impl Prompt for PromptFake {
    fn choose(
        &self,
        title: &str,
        options: &[String],
    ) -> Result<Option<usize>, Box<dyn Error + Send + Sync>> {
        self.asked
            .lock()
            .map_err(|_| "prompt log poisoned")?
            .push((title.to_string(), options.to_vec()));

        let answer = self
            .answers
            .lock()
            .map_err(|_| "prompt script poisoned")?
            .pop_front()
            .flatten();

        Ok(answer.filter(|index| *index < options.len()))
    }
}
