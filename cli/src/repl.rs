use std::io::Write;

use tokio::sync::mpsc;

const PROMPT: &str = "$ ";

pub fn prompt() -> Result<(), String> {
    write!(std::io::stdout(), "{PROMPT}").map_err(|e| e.to_string())?;
    std::io::stdout().flush().map_err(|e| e.to_string())
}

/// Read one line from stdin. `None` at end of input.
pub fn readline() -> Result<Option<String>, String> {
    let mut buffer = String::new();
    let read = std::io::stdin()
        .read_line(&mut buffer)
        .map_err(|e| e.to_string())?;
    Ok((read > 0).then_some(buffer))
}

/// Forward stdin lines to the main task from a dedicated thread.
///
/// Stops at end of input or once the receiver is dropped.
pub fn spawn_reader(tx: mpsc::Sender<String>) -> std::thread::JoinHandle<()> {
    std::thread::spawn(move || {
        loop {
            match readline() {
                Ok(Some(line)) => {
                    if tx.blocking_send(line).is_err() {
                        break;
                    }
                }
                Ok(None) => break,
                Err(e) => {
                    tracing::warn!(error = %e, "Failed to read from stdin");
                    break;
                }
            }
        }
    })
}
