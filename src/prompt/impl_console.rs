use crate::prompt::interface::Prompt;
use crate::terminal::Terminal;
use std::error::Error;
use std::sync::Arc;

pub struct PromptConsole {
    terminal: Arc<Terminal>,
}

impl PromptConsole {
    pub fn new(terminal: Arc<Terminal>) -> Self {
        Self { terminal }
    }
}

impl Prompt for PromptConsole {
    fn choose(
        &self,
        title: &str,
        options: &[String],
    ) -> Result<Option<usize>, Box<dyn Error + Send + Sync>> {
        self.terminal.ask(title, options)
    }
}
