//! Dialog host control and view model
//!
//! The game lives inside an overlay dialog. The host toggles it open or
//! closed; closing throws the session away and tells the host through the
//! open-change callback.

use crate::game::GameLoop;
use crate::notify::Notifier;
use crate::sim::GamePhase;

pub const TITLE: &str = "Catch the plate! 🍽️";
pub const HINT: &str = "Catch plates 🍽️, avoid bombs 💣!";

/// What the dialog body shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Before the first start
    StartPrompt,
    /// The live board
    Board,
    /// Final score and a restart button
    GameOver { score: u64 },
}

impl Screen {
    pub fn for_phase(phase: GamePhase, score: u64) -> Self {
        match phase {
            GamePhase::Idle => Screen::StartPrompt,
            GamePhase::Playing => Screen::Board,
            GamePhase::Over => Screen::GameOver { score },
        }
    }

    /// Headline shown above the button (none while playing)
    pub fn heading(&self) -> Option<&'static str> {
        match self {
            Screen::StartPrompt => Some("Ready to play?"),
            Screen::Board => None,
            Screen::GameOver { .. } => Some("Game over!"),
        }
    }

    /// Label of the start/restart button
    pub fn button_label(&self) -> Option<&'static str> {
        match self {
            Screen::StartPrompt => Some("Start game"),
            Screen::Board => None,
            Screen::GameOver { .. } => Some("Play again"),
        }
    }

    pub fn body(&self) -> Option<String> {
        match self {
            Screen::StartPrompt => {
                Some("Move the basket with your mouse or finger to catch the plates!".to_string())
            }
            Screen::Board => None,
            Screen::GameOver { score } => Some(format!("Your score: {score}")),
        }
    }
}

/// Open-change callback
pub type OpenChange = Box<dyn FnMut(bool)>;

/// The overlay dialog hosting one game loop
pub struct GameDialog<N: Notifier> {
    open: bool,
    game: GameLoop<N>,
    on_open_change: Option<OpenChange>,
}

impl<N: Notifier> GameDialog<N> {
    pub fn new(game: GameLoop<N>) -> Self {
        Self {
            open: false,
            game,
            on_open_change: None,
        }
    }

    /// Register the host's open-change callback
    pub fn on_open_change(&mut self, callback: impl FnMut(bool) + 'static) {
        self.on_open_change = Some(Box::new(callback));
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn game(&self) -> &GameLoop<N> {
        &self.game
    }

    pub fn game_mut(&mut self) -> &mut GameLoop<N> {
        &mut self.game
    }

    /// Current screen, or `None` while closed
    pub fn screen(&self) -> Option<Screen> {
        self.open
            .then(|| Screen::for_phase(self.game.phase(), self.game.session().score))
    }

    /// Open or close the dialog. Closing stops the game and discards the
    /// session; the callback fires only on an actual change.
    pub fn set_open(&mut self, open: bool) {
        if self.open == open {
            return;
        }
        self.open = open;
        if open {
            log::info!("Game dialog opened");
        } else {
            self.game.discard();
            log::info!("Game dialog closed");
        }
        if let Some(callback) = self.on_open_change.as_mut() {
            callback(open);
        }
    }

    /// Start or restart button. Ignored while closed or already playing.
    pub fn press_start(&mut self, now_ms: f64) -> bool {
        if !self.open || self.game.phase() == GamePhase::Playing {
            return false;
        }
        self.game.start(now_ms);
        true
    }
}
