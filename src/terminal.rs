use crate::device_display::interface::DisplayEvent;
use std::error::Error;
use std::io::BufRead;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::{Arc, Mutex};

/// Owns stdin. Each line answers the pending prompt if there is one,
/// otherwise it is read as a screen command.
#[derive(Default)]
pub struct Terminal {
    pending_prompt: Mutex<Option<Sender<String>>>,
    events: Mutex<Option<Sender<DisplayEvent>>>,
}

impl Terminal {
    pub fn start() -> Arc<Self> {
        let terminal = Arc::new(Self::default());
        let reader = terminal.clone();

        std::thread::spawn(move || {
            let stdin = std::io::stdin();
            for line in stdin.lock().lines() {
                match line {
                    Ok(line) => reader.route_line(&line),
                    Err(_) => break,
                }
            }
            reader.close();
        });

        terminal
    }

    pub fn subscribe(&self) -> Receiver<DisplayEvent> {
        let (sender, receiver) = channel();
        if let Ok(mut events) = self.events.lock() {
            *events = Some(sender);
        }
        receiver
    }

    pub fn ask(
        &self,
        title: &str,
        options: &[String],
    ) -> Result<Option<usize>, Box<dyn Error + Send + Sync>> {
        let (sender, receiver) = channel();
        *self.pending_prompt.lock().map_err(|_| "terminal poisoned")? = Some(sender);

        println!("{}", title);
        for (index, option) in options.iter().enumerate() {
            println!("  {}) {}", index + 1, option);
        }
        println!("  0) Cancel");

        let line = receiver.recv().map_err(|_| "stdin closed")?;

        Ok(parse_choice(&line, options.len()))
    }

    pub(crate) fn route_line(&self, line: &str) {
        let pending = self.pending_prompt.lock().ok().and_then(|mut pending| pending.take());
        if let Some(prompt) = pending {
            let _ = prompt.send(line.to_string());
            return;
        }

        match parse_command(line) {
            Some(event) => self.send_event(event),
            None => println!(
                "Unknown command {:?}. Press Enter to take a photo, q to quit.",
                line.trim()
            ),
        }
    }

    fn close(&self) {
        if let Ok(mut pending) = self.pending_prompt.lock() {
            pending.take();
        }
        self.send_event(DisplayEvent::Closed);
    }

    fn send_event(&self, event: DisplayEvent) {
        if let Ok(events) = self.events.lock() {
            if let Some(sender) = events.as_ref() {
                let _ = sender.send(event);
            }
        }
    }
}

pub fn parse_command(line: &str) -> Option<DisplayEvent> {
    match line.trim().to_lowercase().as_str() {
        "" | "p" | "photo" => Some(DisplayEvent::TakePicture),
        "q" | "quit" | "exit" => Some(DisplayEvent::Closed),
        _ => None,
    }
}

/// One-based menu answer to a zero-based index. Anything else cancels.
pub fn parse_choice(line: &str, count: usize) -> Option<usize> {
    line.trim()
        .parse::<usize>()
        .ok()
        .filter(|choice| (1..=count).contains(choice))
        .map(|choice| choice - 1)
}
