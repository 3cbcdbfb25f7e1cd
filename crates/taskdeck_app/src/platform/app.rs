use std::io::{self, BufRead, Write};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::Duration;

use anyhow::Context;
use deck_logging::{deck_debug, deck_info};
use taskdeck_core::{update, AppState, Msg};
use taskdeck_engine::EngineHandle;

use super::config::AppConfig;
use super::effects::EffectRunner;
use super::input::{parse_line, Intent, HELP};
use super::render::render;

const POLL_INTERVAL: Duration = Duration::from_millis(20);

pub fn run_app(config: AppConfig) -> anyhow::Result<()> {
    let engine =
        EngineHandle::new(config.backend_settings()).context("failed to start backend engine")?;
    let mut driver = Driver {
        state: AppState::with_config(&config.dashboard_config()),
        runner: EffectRunner::new(engine),
        turn: 0,
    };
    deck_info!("taskdeck started, backend {}", config.backend_url);

    let input_rx = spawn_stdin_reader();
    let mut stdout = io::stdout();
    write!(stdout, "{}", render(&driver.state.view()))?;
    writeln!(stdout, "(type `help` for commands)")?;
    stdout.flush()?;

    let mut input_open = true;
    loop {
        if input_open {
            match input_rx.recv_timeout(POLL_INTERVAL) {
                Ok(line) => match parse_line(&line) {
                    Intent::Msgs(msgs) => {
                        for msg in msgs {
                            driver.dispatch(msg);
                        }
                    }
                    Intent::Help => writeln!(stdout, "{HELP}")?,
                    Intent::Quit => break,
                    Intent::Invalid(text) => {
                        writeln!(stdout, "unknown command: {text} (try `help`)")?
                    }
                },
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => {
                    deck_debug!("stdin closed; waiting for outstanding requests");
                    input_open = false;
                }
            }
        } else {
            // Input is exhausted: let outstanding calls land, then exit.
            if !driver.state.has_pending() {
                break;
            }
            if let Some(msg) = driver.runner.next_timeout(POLL_INTERVAL) {
                driver.dispatch(msg);
            }
        }

        while let Some(msg) = driver.runner.try_next() {
            driver.dispatch(msg);
        }
        driver.flush(&mut stdout)?;
    }

    deck_info!("taskdeck exiting after {} turns", driver.turn);
    Ok(())
}

/// Single owner of the session state. Every message is one turn.
struct Driver {
    state: AppState,
    runner: EffectRunner,
    turn: u64,
}

impl Driver {
    fn dispatch(&mut self, msg: Msg) {
        self.turn += 1;
        deck_logging::set_turn(self.turn);
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        self.runner.enqueue(effects);
    }

    fn flush(&mut self, out: &mut impl Write) -> io::Result<()> {
        if self.state.consume_dirty() {
            write!(out, "{}", render(&self.state.view()))?;
            out.flush()?;
        }
        Ok(())
    }
}

fn spawn_stdin_reader() -> mpsc::Receiver<String> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            if tx.send(line).is_err() {
                break;
            }
        }
    });
    rx
}
