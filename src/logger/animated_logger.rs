use std::io::{IsTerminal, Write};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use crate::config::constants::spinner_interval;

/// Spinner on stderr while a long call is in flight. Falls back to a single
/// static line when stderr is not a terminal, so CI logs stay readable.
pub struct AnimatedLogger {
    message: String,
    animation_chars: Vec<&'static str>,
    stop_sender: Option<mpsc::UnboundedSender<()>>,
    task_handle: Option<JoinHandle<()>>,
    interactive: bool,
}

impl AnimatedLogger {
    pub fn new(message: String) -> Self {
        let animation_chars = vec!["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

        Self {
            message,
            animation_chars,
            stop_sender: None,
            task_handle: None,
            interactive: std::io::stderr().is_terminal(),
        }
    }

    pub fn start(&mut self) {
        if !self.interactive {
            eprintln!("{}...", self.message);
            return;
        }

        let (stop_tx, mut stop_rx) = mpsc::unbounded_channel();
        let message = self.message.clone();
        let animation_chars = self.animation_chars.clone();

        let handle = tokio::spawn(async move {
            let mut frame = 0;
            let mut interval = tokio::time::interval(spinner_interval());

            loop {
                tokio::select! {
                    _ = interval.tick() => {
                        eprint!("\r{} {} ", message, animation_chars[frame]);
                        let _ = std::io::stderr().flush();
                        frame = (frame + 1) % animation_chars.len();
                    }
                    _ = stop_rx.recv() => {
                        break;
                    }
                }
            }
        });

        self.stop_sender = Some(stop_tx);
        self.task_handle = Some(handle);
    }

    pub async fn stop(&mut self, final_message: &str) {
        self.halt().await;
        self.finish_line(&format!("✅  {}", final_message));
    }

    pub async fn error(&mut self, error_message: &str) {
        self.halt().await;
        self.finish_line(&format!("❌ {}", error_message));
    }

    async fn halt(&mut self) {
        if let Some(sender) = self.stop_sender.take() {
            let _ = sender.send(());
        }

        if let Some(handle) = self.task_handle.take() {
            let _ = handle.await;
        }
    }

    fn finish_line(&self, line: &str) {
        if self.interactive {
            eprint!("\r\x1b[K{}\n", line);
        } else {
            eprintln!("{}", line);
        }
        let _ = std::io::stderr().flush();
    }
}
