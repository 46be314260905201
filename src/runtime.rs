//! Message loop
//!
//! Receives [`Msg`]s on an mpsc channel, feeds them to the [`Coordinator`]
//! one at a time and performs the returned [`Cmd`]s. Timed continuations run
//! on short-lived helper threads that sleep and post `Msg::Resume` back, so
//! the loop thread itself never blocks on a delay.

use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::time::Duration;

use crate::commands::Cmd;
use crate::coordinator::Coordinator;
use crate::messages::Msg;
use crate::platform::Platform;

/// Upper bound on how long `run_until_idle` waits for a single message
const IDLE_TIMEOUT: Duration = Duration::from_secs(5);

pub struct Runtime<P: Platform> {
    coordinator: Coordinator<P>,
    msg_tx: Sender<Msg>,
    msg_rx: Receiver<Msg>,
    /// Resumes scheduled but not yet received
    in_flight: usize,
    quit: bool,
}

impl<P: Platform> Runtime<P> {
    pub fn new(coordinator: Coordinator<P>) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel();
        Self {
            coordinator,
            msg_tx,
            msg_rx,
            in_flight: 0,
            quit: false,
        }
    }

    /// Sender for platform callbacks, watchers and signal handlers
    pub fn sender(&self) -> Sender<Msg> {
        self.msg_tx.clone()
    }

    pub fn coordinator(&self) -> &Coordinator<P> {
        &self.coordinator
    }

    pub fn coordinator_mut(&mut self) -> &mut Coordinator<P> {
        &mut self.coordinator
    }

    pub fn has_quit(&self) -> bool {
        self.quit
    }

    /// Handle one message and perform its command
    pub fn dispatch(&mut self, msg: Msg) {
        if self.quit {
            tracing::debug!("Ignoring {:?} after quit", msg);
            return;
        }
        if matches!(msg, Msg::Resume { .. }) {
            self.in_flight = self.in_flight.saturating_sub(1);
        }
        let cmd = self.coordinator.update(msg);
        self.process_cmd(cmd);
    }

    /// Perform a command returned by the coordinator
    pub fn process_cmd(&mut self, cmd: Cmd) {
        match cmd {
            Cmd::None => {}
            Cmd::ScheduleResume { delay, generation } => {
                self.in_flight += 1;
                let tx = self.msg_tx.clone();
                std::thread::spawn(move || {
                    std::thread::sleep(delay);
                    let _ = tx.send(Msg::Resume { generation });
                });
            }
            Cmd::Quit => {
                tracing::info!("Quit requested");
                self.quit = true;
            }
        }
    }

    /// Block on the channel until a quit
    pub fn run(&mut self) {
        while !self.quit {
            match self.msg_rx.recv() {
                Ok(msg) => self.dispatch(msg),
                Err(_) => break,
            }
        }
    }

    /// Process messages until no continuation is outstanding and the
    /// channel is empty
    pub fn run_until_idle(&mut self) {
        while !self.quit {
            if self.in_flight > 0 {
                match self.msg_rx.recv_timeout(IDLE_TIMEOUT) {
                    Ok(msg) => self.dispatch(msg),
                    Err(RecvTimeoutError::Timeout) => {
                        tracing::warn!("Timed out waiting for {} resumes", self.in_flight);
                        self.in_flight = 0;
                    }
                    Err(RecvTimeoutError::Disconnected) => break,
                }
            } else {
                match self.msg_rx.try_recv() {
                    Ok(msg) => self.dispatch(msg),
                    Err(_) => break,
                }
            }
        }
    }
}
