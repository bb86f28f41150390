//! One game as seen by a front-end: the rules state, the player's name and
//! the computer opponent, whose moves are deferred by a short delay so the
//! human move is visible before the reply lands.

use std::time::{Duration, Instant};

use crate::ai::{play_agent_move, Agent, GreedyTiger};
use crate::game::{GameState, Mode, Move, Side};

/// Display name used when none (or only whitespace) was given.
pub const DEFAULT_NAME: &str = "Player";

/// Pause between a goat move and the bot's reply.
pub const DEFAULT_BOT_DELAY: Duration = Duration::from_millis(200);

/// Trimmed display name, falling back to [`DEFAULT_NAME`].
pub fn display_name(name: &str) -> String {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        DEFAULT_NAME.to_string()
    } else {
        trimmed.to_string()
    }
}

/// A one-shot deferred task. Time is passed in, never read from the clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BotSchedule {
    delay: Duration,
    due: Option<Instant>,
}

impl BotSchedule {
    pub fn new(delay: Duration) -> Self {
        BotSchedule { delay, due: None }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Arm the task to fire `delay` after `now`. Re-arming moves the deadline.
    pub fn schedule(&mut self, now: Instant) {
        self.due = Some(now + self.delay);
    }

    pub fn cancel(&mut self) {
        self.due = None;
    }

    pub fn is_pending(&self) -> bool {
        self.due.is_some()
    }

    /// Disarm and return `true` once the deadline has passed.
    pub fn take_due(&mut self, now: Instant) -> bool {
        match self.due {
            Some(due) if now >= due => {
                self.due = None;
                true
            }
            _ => false,
        }
    }
}

pub struct Session {
    state: GameState,
    name: String,
    bot: Box<dyn Agent>,
    schedule: BotSchedule,
}

impl Session {
    pub fn new(name: &str, mode: Mode, bot_delay: Duration) -> Self {
        Session {
            state: GameState::new(mode),
            name: display_name(name),
            bot: Box::new(GreedyTiger::new()),
            schedule: BotSchedule::new(bot_delay),
        }
    }

    /// Replace the tiger bot used in vs-computer games.
    pub fn with_agent(mut self, bot: Box<dyn Agent>) -> Self {
        self.bot = bot;
        self
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mode(&self) -> Mode {
        self.state.mode()
    }

    pub fn bot_name(&self) -> &str {
        self.bot.name()
    }

    /// True while the bot's reply is scheduled but not yet played.
    pub fn bot_pending(&self) -> bool {
        self.schedule.is_pending()
    }

    /// Forward a human click to the rules. Ignored while the bot is about
    /// to move or the game is over. Returns whether a move was completed.
    pub fn select_cell(&mut self, index: usize, now: Instant) -> bool {
        if self.schedule.is_pending() || self.state.is_terminal() {
            return false;
        }
        let moved = self.state.select_cell(index);
        if moved {
            self.maybe_schedule_bot(now);
        }
        moved
    }

    /// Advance time. Plays the bot's move once its delay has elapsed and
    /// then runs the terminal check. Returns the move made, if any.
    pub fn tick(&mut self, now: Instant) -> Option<Move> {
        if !self.schedule.take_due(now) {
            return None;
        }
        if self.state.is_terminal() || self.state.turn() != Side::Tiger {
            return None;
        }
        let mv = play_agent_move(&mut self.state, self.bot.as_mut())?;
        self.state.check_terminal();
        Some(mv)
    }

    /// Start a new game in the same mode, dropping any pending bot move.
    pub fn reset(&mut self, now: Instant) {
        self.schedule.cancel();
        self.state.reset();
        self.maybe_schedule_bot(now);
    }

    fn maybe_schedule_bot(&mut self, now: Instant) {
        if self.state.mode() == Mode::VsBot
            && self.state.turn() == Side::Tiger
            && !self.state.is_terminal()
        {
            log::debug!("bot reply scheduled in {:?}", self.schedule.delay());
            self.schedule.schedule(now);
        }
    }
}
