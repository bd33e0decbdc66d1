//! One user-vs-bot game from the name prompt to the final tally.
//!
//! `GameSession` owns both score sheets, the current turn, the move log and
//! the single random source. Front ends feed it `GameEvent`s through
//! [`GameSession::handle`] and call [`GameSession::play_ai_turn`] whenever
//! the bot is to move. Every rejected event leaves the session untouched.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::ai::{pick_ai_name, HeuristicStrategy, Strategy};
use crate::core::{
    Category, DiceSet, DiceValues, DieId, GameConfig, GameEvent, GameRng, MoveRecord, Player,
    PlayerMap, RandomSource,
};
use crate::scoring::PossibleScores;
use crate::sheet::{ScoreSheet, SheetTotals};

use super::log::MoveLog;
use super::pacing::{AiStep, Pacer};
use super::tally::FinalTally;
use super::turn::{Commit, TurnController, TurnError, TurnPhase};

/// What `handle` did with an event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EventOutcome {
    Started { user: String, ai: String },
    Rolled(DiceValues),
    HoldToggled { die: DieId, held: bool },
    Committed(MoveRecord),
    Restarted,
    Reset,
    /// Rejected; the session did not change.
    Ignored(TurnError),
}

impl EventOutcome {
    #[must_use]
    pub fn is_applied(&self) -> bool {
        !matches!(self, EventOutcome::Ignored(_))
    }
}

/// Cheap, serializable view of a session for rendering.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub started: bool,
    pub names: PlayerMap<String>,
    pub sheets: PlayerMap<ScoreSheet>,
    pub totals: PlayerMap<SheetTotals>,
    pub current_player: Player,
    pub dice: DiceSet,
    pub rolls_left: u8,
    pub phase: TurnPhase,
    pub round: u32,
    pub possible_scores: PossibleScores,
    pub joker_active: bool,
    pub last_selection: PlayerMap<Option<Category>>,
    pub log: MoveLog,
    pub game_over: bool,
    pub tally: Option<FinalTally>,
}

pub struct GameSession<R: RandomSource = GameRng> {
    config: GameConfig,
    rng: R,
    strategy: Box<dyn Strategy>,
    started: bool,
    names: PlayerMap<String>,
    sheets: PlayerMap<ScoreSheet>,
    turn: TurnController,
    round: u32,
    log: MoveLog,
    last_selection: PlayerMap<Option<Category>>,
}

impl GameSession<GameRng> {
    /// Session seeded from `config.seed`.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        let rng = GameRng::new(config.seed);
        Self::with_rng(config, rng)
    }
}

impl<R: RandomSource> GameSession<R> {
    /// Session drawing dice and the bot's name from `rng`.
    #[must_use]
    pub fn with_rng(config: GameConfig, rng: R) -> Self {
        let names = default_names(&config);
        Self {
            config,
            rng,
            strategy: Box::new(HeuristicStrategy),
            started: false,
            names,
            sheets: PlayerMap::with_default(),
            turn: TurnController::new(Player::User),
            round: 1,
            log: MoveLog::new(),
            last_selection: PlayerMap::with_default(),
        }
    }

    /// Replace the bot's decision policy.
    #[must_use]
    pub fn with_strategy(mut self, strategy: Box<dyn Strategy>) -> Self {
        self.strategy = strategy;
        self
    }

    // ===== Events =====

    /// Apply a user event. Rejections come back as `Ignored`.
    pub fn handle(&mut self, event: GameEvent) -> EventOutcome {
        let result = match &event {
            GameEvent::StartGame(name) => self.start_game(name).map(|()| EventOutcome::Started {
                user: self.names[Player::User].clone(),
                ai: self.names[Player::Ai].clone(),
            }),
            GameEvent::Roll => self.roll().map(EventOutcome::Rolled),
            GameEvent::ToggleHold(die) => self
                .toggle_hold(*die)
                .map(|held| EventOutcome::HoldToggled { die: *die, held }),
            GameEvent::SelectCategory(category) => {
                self.select_category(*category).map(EventOutcome::Committed)
            }
            GameEvent::PlayAgain => self.play_again().map(|()| EventOutcome::Restarted),
            GameEvent::NewGame => {
                self.new_game();
                Ok(EventOutcome::Reset)
            }
        };

        result.unwrap_or_else(|reason| {
            debug!(
                target: "rust_yahtzee::session",
                event = ?event,
                reason = %reason,
                "event ignored"
            );
            EventOutcome::Ignored(reason)
        })
    }

    /// Leave the name prompt. The user's name is normalized and the bot's
    /// name is drawn from the random source.
    pub fn start_game(&mut self, name: &str) -> Result<(), TurnError> {
        if self.started {
            return Err(TurnError::AlreadyStarted);
        }
        self.names[Player::User] = self.config.normalize_user_name(name);
        self.names[Player::Ai] = pick_ai_name(&self.config, &mut self.rng);
        self.reset_board();
        self.started = true;

        info!(
            target: "rust_yahtzee::session",
            user = %self.names[Player::User],
            ai = %self.names[Player::Ai],
            "game started"
        );
        Ok(())
    }

    /// Roll the user's unheld dice.
    pub fn roll(&mut self) -> Result<DiceValues, TurnError> {
        self.begin_roll()?;
        self.finish_roll()
    }

    /// Start a user roll. Holds, commits and further rolls are rejected
    /// until `finish_roll`.
    pub fn begin_roll(&mut self) -> Result<(), TurnError> {
        self.check_turn(Player::User)?;
        self.turn.begin_roll()
    }

    /// Resolve a roll started with `begin_roll`.
    pub fn finish_roll(&mut self) -> Result<DiceValues, TurnError> {
        self.check_turn(Player::User)?;
        let values = self.turn.finish_roll(&mut self.rng)?;
        debug!(
            target: "rust_yahtzee::session",
            dice = ?values,
            rolls_left = self.turn.rolls_left(),
            "user rolled"
        );
        Ok(values)
    }

    /// Flip one of the user's dice. Returns the new held flag.
    pub fn toggle_hold(&mut self, die: DieId) -> Result<bool, TurnError> {
        self.check_turn(Player::User)?;
        self.turn.toggle_hold(die)
    }

    /// Commit the user's dice and pass the turn to the bot.
    pub fn select_category(&mut self, category: Category) -> Result<MoveRecord, TurnError> {
        self.check_turn(Player::User)?;
        let commit = self.turn.commit(category, &mut self.sheets[Player::User])?;
        Ok(self.end_turn(commit))
    }

    /// Play the bot's whole turn, pausing through `pacer`.
    pub fn play_ai_turn(&mut self, pacer: &mut dyn Pacer) -> Result<MoveRecord, TurnError> {
        self.check_turn(Player::Ai)?;
        let commit = self.turn.play_automated(
            &mut self.sheets[Player::Ai],
            self.strategy.as_ref(),
            &mut self.rng,
            pacer,
        )?;
        let record = self.end_turn(commit);
        pacer.pause(AiStep::AfterScore);
        Ok(record)
    }

    /// Start over with the same names.
    pub fn play_again(&mut self) -> Result<(), TurnError> {
        if !self.started {
            return Err(TurnError::NotStarted);
        }
        self.reset_board();
        info!(target: "rust_yahtzee::session", "game restarted");
        Ok(())
    }

    /// Full reset back to the name prompt.
    pub fn new_game(&mut self) {
        self.reset_board();
        self.started = false;
        self.names = default_names(&self.config);
        info!(target: "rust_yahtzee::session", "session reset");
    }

    // ===== Queries =====

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn is_started(&self) -> bool {
        self.started
    }

    #[must_use]
    pub fn name(&self, player: Player) -> &str {
        &self.names[player]
    }

    #[must_use]
    pub fn names(&self) -> &PlayerMap<String> {
        &self.names
    }

    #[must_use]
    pub fn current_player(&self) -> Player {
        self.turn.player()
    }

    /// The bot should move now.
    #[must_use]
    pub fn ai_to_move(&self) -> bool {
        self.check_turn(Player::Ai).is_ok()
    }

    #[must_use]
    pub fn dice(&self) -> &DiceSet {
        self.turn.dice()
    }

    #[must_use]
    pub fn rolls_left(&self) -> u8 {
        self.turn.rolls_left()
    }

    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        self.turn.phase()
    }

    #[must_use]
    pub fn is_rolling(&self) -> bool {
        self.turn.is_rolling()
    }

    /// Current round, starting at 1. Both players' turns share a round.
    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    #[must_use]
    pub fn sheet(&self, player: Player) -> &ScoreSheet {
        &self.sheets[player]
    }

    #[must_use]
    pub fn sheets(&self) -> &PlayerMap<ScoreSheet> {
        &self.sheets
    }

    #[must_use]
    pub fn totals(&self, player: Player) -> SheetTotals {
        self.sheets[player].totals()
    }

    /// Scores the user could commit right now. Empty unless it is the
    /// user's turn, the dice have been rolled and no roll is in progress.
    #[must_use]
    pub fn possible_scores(&self) -> PossibleScores {
        if self.check_turn(Player::User).is_err() {
            return PossibleScores::empty();
        }
        self.turn.possible_scores(&self.sheets[Player::User])
    }

    /// The current player's dice are a Joker roll.
    #[must_use]
    pub fn joker_active(&self) -> bool {
        let player = self.current_player();
        self.started && !self.is_game_over() && self.turn.joker_active(&self.sheets[player])
    }

    /// Category most recently filled by `player` this game.
    #[must_use]
    pub fn last_selection(&self, player: Player) -> Option<Category> {
        self.last_selection[player]
    }

    #[must_use]
    pub fn log(&self) -> &MoveLog {
        &self.log
    }

    /// Both sheets are complete.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.sheets.iter().all(|(_, sheet)| sheet.is_complete())
    }

    /// Totals and winner once the game is over.
    #[must_use]
    pub fn final_tally(&self) -> Option<FinalTally> {
        self.is_game_over()
            .then(|| FinalTally::from_sheets(&self.sheets))
    }

    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            started: self.started,
            names: self.names.clone(),
            sheets: self.sheets.clone(),
            totals: PlayerMap::new(|p| self.sheets[p].totals()),
            current_player: self.current_player(),
            dice: self.turn.dice().clone(),
            rolls_left: self.turn.rolls_left(),
            phase: self.turn.phase(),
            round: self.round,
            possible_scores: self.possible_scores(),
            joker_active: self.joker_active(),
            last_selection: self.last_selection.clone(),
            log: self.log.clone(),
            game_over: self.is_game_over(),
            tally: self.final_tally(),
        }
    }

    // ===== Internals =====

    fn check_turn(&self, player: Player) -> Result<(), TurnError> {
        if !self.started {
            return Err(TurnError::NotStarted);
        }
        if self.is_game_over() {
            return Err(TurnError::GameOver);
        }
        let current = self.current_player();
        if current != player {
            return Err(TurnError::NotYourTurn(current));
        }
        Ok(())
    }

    fn end_turn(&mut self, commit: Commit) -> MoveRecord {
        let record = MoveRecord::new(
            commit.player,
            commit.category,
            commit.score,
            commit.dice,
            self.round,
        )
        .with_yahtzee_bonus(commit.yahtzee_bonus);

        info!(
            target: "rust_yahtzee::session",
            player = %commit.player,
            category = %commit.category,
            score = commit.score,
            dice = ?commit.dice,
            yahtzee_bonus = commit.yahtzee_bonus,
            round = self.round,
            "category committed"
        );

        self.log.push(record.clone());
        self.last_selection[commit.player] = Some(commit.category);
        if commit.player == Player::Ai {
            self.round += 1;
        }
        self.turn = TurnController::new(commit.player.opponent());

        if let Some(tally) = self.final_tally() {
            info!(
                target: "rust_yahtzee::session",
                user_total = tally.grand_total(Player::User),
                ai_total = tally.grand_total(Player::Ai),
                result = ?tally.result,
                "game over"
            );
        }

        record
    }

    fn reset_board(&mut self) {
        self.sheets = PlayerMap::with_default();
        self.turn = TurnController::new(Player::User);
        self.round = 1;
        self.log.clear();
        self.last_selection = PlayerMap::with_default();
    }
}

fn default_names(config: &GameConfig) -> PlayerMap<String> {
    PlayerMap::new(|p| match p {
        Player::User => config.default_user_name.clone(),
        Player::Ai => config.default_ai_name.clone(),
    })
}
