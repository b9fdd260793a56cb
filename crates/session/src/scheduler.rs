//! Background worker for computer turns.
//!
//! The driver calls [`ComputerScheduler::notify`] whenever it may be a
//! computer's turn. The worker then plays every consecutive computer turn,
//! pausing before each one, and reports [`SchedulerEvent::Waiting`] once a
//! human is to move or the game is over. [`ComputerScheduler::stop`] is
//! honoured between moves and interrupts a pause.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use checkers_core::{Engine, EngineFault, Game, Move, Player};
use crossbeam_channel::{Receiver, RecvTimeoutError, Sender, unbounded};
use log::{debug, warn};
use parking_lot::Mutex;

use crate::config::PlayerKind;
use crate::create_engine;

enum Command {
    Turn,
    Stop,
}

/// What the worker did, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchedulerEvent {
    Played { player: Player, mv: Move },
    Fault(EngineFault),
    /// No computer move is due. A notification that arrives during a pause
    /// is merged into the next one of these.
    Waiting,
}

/// One engine slot per player; `None` is a human side.
pub type Engines = [Option<Box<dyn Engine>>; 2];

pub struct ComputerScheduler {
    commands: Sender<Command>,
    events: Receiver<SchedulerEvent>,
    stop: Arc<AtomicBool>,
    worker: Option<JoinHandle<()>>,
}

impl ComputerScheduler {
    /// Spawns a worker with a fresh engine for each computer side.
    pub fn spawn(game: Arc<Mutex<Game>>, players: [PlayerKind; 2], delay: Duration) -> Self {
        let engines = players.map(|kind| kind.difficulty().map(create_engine));
        Self::with_engines(game, engines, delay)
    }

    pub fn with_engines(game: Arc<Mutex<Game>>, engines: Engines, delay: Duration) -> Self {
        let (commands, command_rx) = unbounded();
        let (event_tx, events) = unbounded();
        let stop = Arc::new(AtomicBool::new(false));

        let worker = Worker {
            game,
            engines,
            delay,
            stop: Arc::clone(&stop),
            commands: command_rx,
            events: event_tx,
        };
        let handle = thread::spawn(move || worker.run());

        Self {
            commands,
            events,
            stop,
            worker: Some(handle),
        }
    }

    /// Tells the worker it may be a computer's turn.
    pub fn notify(&self) {
        // A closed channel means the worker has already stopped.
        let _ = self.commands.send(Command::Turn);
    }

    pub fn events(&self) -> &Receiver<SchedulerEvent> {
        &self.events
    }

    pub fn is_stopped(&self) -> bool {
        self.stop.load(Ordering::Relaxed)
    }

    /// Stops the worker between moves and waits for it to exit.
    pub fn stop(&mut self) {
        self.stop.store(true, Ordering::SeqCst);
        let _ = self.commands.send(Command::Stop);
        if let Some(handle) = self.worker.take()
            && handle.join().is_err()
        {
            warn!("computer worker panicked");
        }
    }
}

impl Drop for ComputerScheduler {
    fn drop(&mut self) {
        self.stop();
    }
}

struct Worker {
    game: Arc<Mutex<Game>>,
    engines: Engines,
    delay: Duration,
    stop: Arc<AtomicBool>,
    commands: Receiver<Command>,
    events: Sender<SchedulerEvent>,
}

impl Worker {
    fn run(mut self) {
        while let Ok(Command::Turn) = self.commands.recv() {
            if !self.play_computer_turns() {
                break;
            }
            if self.events.send(SchedulerEvent::Waiting).is_err() {
                break;
            }
        }
        debug!("computer worker exiting");
    }

    /// Plays until a human is to move. Returns false if the worker must exit.
    fn play_computer_turns(&mut self) -> bool {
        loop {
            if self.stopped() {
                return false;
            }
            if self.engine_to_move().is_none() {
                return true;
            }
            if !self.pause() {
                return false;
            }

            let mut game = self.game.lock();
            // The driver may have changed the game during the pause.
            let Some(player) = game.active_player() else {
                return true;
            };
            let Some(engine) = self.engines[player.idx()].as_mut() else {
                return true;
            };
            let event = match game.play_engine(engine.as_mut()) {
                Ok(mv) => SchedulerEvent::Played { player, mv },
                Err(fault) => SchedulerEvent::Fault(fault),
            };
            drop(game);

            let faulted = matches!(event, SchedulerEvent::Fault(_));
            if self.events.send(event).is_err() {
                return false;
            }
            if faulted {
                return true;
            }
        }
    }

    fn engine_to_move(&self) -> Option<Player> {
        let player = self.game.lock().active_player()?;
        self.engines[player.idx()].as_ref().map(|_| player)
    }

    /// Waits out the move delay. False if a stop arrived meanwhile.
    fn pause(&self) -> bool {
        if self.delay.is_zero() {
            return !self.stopped();
        }
        match self.commands.recv_timeout(self.delay) {
            Ok(Command::Stop) | Err(RecvTimeoutError::Disconnected) => false,
            Ok(Command::Turn) | Err(RecvTimeoutError::Timeout) => !self.stopped(),
        }
    }

    fn stopped(&self) -> bool {
        self.stop.load(Ordering::Relaxed)
    }
}
