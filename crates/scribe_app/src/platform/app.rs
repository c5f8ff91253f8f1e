use std::io::BufRead;
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;

use scribe_core::{update, AppState, Msg};
use scribe_logging::scribe_info;

use super::effects::EffectRunner;
use super::logging::{self, LogDestination};
use super::persistence;
use super::ui::{self, ShellEvent};

/// Runs the interactive shell that stands in for the browser front end:
/// stdin lines become shell events, webhook completions arrive over the
/// same channel, and the state machine owns everything in between.
pub fn run_app() -> anyhow::Result<()> {
    logging::initialize(LogDestination::File);

    let state_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let (tx, rx) = mpsc::channel::<ShellEvent>();
    let runner = EffectRunner::new(tx.clone(), state_dir.clone())?;

    let mut state = AppState::new();
    if let Some(endpoints) = persistence::load_endpoints(&state_dir) {
        let (restored, effects) =
            update(std::mem::take(&mut state), Msg::EndpointsRestored(endpoints));
        state = restored;
        runner.enqueue(effects);
    }

    spawn_stdin_reader(tx);

    ui::render_help();
    state.consume_dirty();
    ui::render(&state.view());

    while let Ok(event) = rx.recv() {
        match event {
            ShellEvent::Dispatch(msg) => {
                let (next, effects) = update(std::mem::take(&mut state), msg);
                state = next;
                runner.enqueue(effects);
                if state.consume_dirty() {
                    ui::render(&state.view());
                }
            }
            ShellEvent::Show => ui::render(&state.view()),
            ShellEvent::Help => ui::render_help(),
            ShellEvent::Unknown(line) => {
                println!("unrecognized command {line:?}; try help");
            }
            ShellEvent::Quit => break,
        }
    }

    scribe_info!("shell exited");
    Ok(())
}

fn spawn_stdin_reader(tx: mpsc::Sender<ShellEvent>) {
    thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            let Some(event) = ui::parse_line(&line) else {
                continue;
            };
            if tx.send(event).is_err() {
                return;
            }
        }
        // Stdin closed; treat it like an explicit quit.
        let _ = tx.send(ShellEvent::Quit);
    });
}
