//! Stdin reader thread

use crossbeam_channel::Sender;
use log::{debug, error};
use std::io::{self, BufRead};
use std::thread::{self, JoinHandle};

/// Forward stdin lines to `lines` until end of input
///
/// The channel disconnects when stdin closes, which the event loop treats
/// as a request to quit.
pub fn spawn_stdin_reader(lines: Sender<String>) -> io::Result<JoinHandle<()>> {
    thread::Builder::new()
        .name("stdin".into())
        .spawn(move || {
            let stdin = io::stdin();
            for line in stdin.lock().lines() {
                match line {
                    Ok(line) => {
                        if lines.send(line).is_err() {
                            break;
                        }
                    }
                    Err(e) => {
                        error!("Failed to read input: {}", e);
                        break;
                    }
                }
            }
            debug!("stdin closed");
        })
}
