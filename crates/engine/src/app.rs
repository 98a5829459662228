//! Screen flow: main menu, skin selection and the running game.

use tracing::{info, warn};

use tui_snake_core::{ConfigError, GameConfig, Session, SessionCommand, SimpleRng, TickOutcome};
use tui_snake_store::{skin_index, ProfileStore, Skin, SKINS};

use crate::types::{InputEvent, LogicalKey};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuItem {
    Start,
    Skins,
    Quit,
}

impl MenuItem {
    pub const ALL: [MenuItem; 3] = [MenuItem::Start, MenuItem::Skins, MenuItem::Quit];

    pub fn label(self) -> &'static str {
        match self {
            MenuItem::Start => "Start Game",
            MenuItem::Skins => "Skins",
            MenuItem::Quit => "Quit",
        }
    }
}

#[derive(Debug)]
pub enum Screen {
    Menu { cursor: usize },
    SkinSelect { cursor: usize },
    Game(Box<Session>),
}

impl Screen {
    pub fn name(&self) -> &'static str {
        match self {
            Screen::Menu { .. } => "menu",
            Screen::SkinSelect { .. } => "skin_select",
            Screen::Game(_) => "game",
        }
    }
}

/// What the host loop should do after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppCommand {
    Continue,
    Quit,
}

#[derive(Debug)]
pub struct App {
    store: ProfileStore,
    config: GameConfig,
    seeds: SimpleRng,
    screen: Screen,
    fullscreen: bool,
    games_started: u32,
}

impl App {
    pub fn new(store: ProfileStore, config: GameConfig, seed: u32) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            store,
            config,
            seeds: SimpleRng::new(seed),
            screen: Screen::Menu { cursor: 0 },
            fullscreen: false,
            games_started: 0,
        })
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn session(&self) -> Option<&Session> {
        match &self.screen {
            Screen::Game(session) => Some(session),
            _ => None,
        }
    }

    pub fn store(&self) -> &ProfileStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut ProfileStore {
        &mut self.store
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    pub fn games_started(&self) -> u32 {
        self.games_started
    }

    pub fn high_score(&self) -> u32 {
        self.store.high_score()
    }

    pub fn current_skin(&self) -> &'static Skin {
        self.store.current_skin()
    }

    pub fn handle_event(&mut self, event: InputEvent) -> AppCommand {
        if event == InputEvent::KeyDown(LogicalKey::ToggleFullscreen) && !matches!(self.screen, Screen::Game(_)) {
            self.toggle_fullscreen();
            return AppCommand::Continue;
        }

        match &mut self.screen {
            Screen::Menu { cursor } => {
                let InputEvent::KeyDown(key) = event else {
                    return AppCommand::Continue;
                };
                match key {
                    LogicalKey::Up => *cursor = wrap_prev(*cursor, MenuItem::ALL.len()),
                    LogicalKey::Down => *cursor = wrap_next(*cursor, MenuItem::ALL.len()),
                    LogicalKey::Confirm => {
                        let item = MenuItem::ALL[*cursor];
                        return self.activate(item);
                    }
                    _ => {}
                }
            }
            Screen::SkinSelect { cursor } => {
                let InputEvent::KeyDown(key) = event else {
                    return AppCommand::Continue;
                };
                match key {
                    LogicalKey::Left | LogicalKey::Up => *cursor = wrap_prev(*cursor, SKINS.len()),
                    LogicalKey::Right | LogicalKey::Down => *cursor = wrap_next(*cursor, SKINS.len()),
                    LogicalKey::Confirm => {
                        let name = SKINS[*cursor].name;
                        if let Err(err) = self.store.set_current_skin(name) {
                            warn!(error = %err, skin = name, "failed to apply skin");
                        }
                        self.go_to(Screen::Menu { cursor: 1 });
                    }
                    LogicalKey::ReturnToMenu | LogicalKey::Pause => {
                        self.go_to(Screen::Menu { cursor: 1 });
                    }
                    _ => {}
                }
            }
            Screen::Game(session) => match session.handle_event(event) {
                Some(SessionCommand::ExitToMenu) => self.go_to(Screen::Menu { cursor: 0 }),
                Some(SessionCommand::ToggleFullscreen) => self.toggle_fullscreen(),
                None => {}
            },
        }
        AppCommand::Continue
    }

    fn activate(&mut self, item: MenuItem) -> AppCommand {
        match item {
            MenuItem::Start => self.start_game(),
            MenuItem::Skins => {
                let cursor = skin_index(self.store.current_skin().name).unwrap_or(0);
                self.go_to(Screen::SkinSelect { cursor });
            }
            MenuItem::Quit => return AppCommand::Quit,
        }
        AppCommand::Continue
    }

    /// Start a fresh session with the current skin.
    pub fn start_game(&mut self) {
        let seed = self.seeds.next_u32();
        match Session::new(self.config, &self.store, seed) {
            Ok(session) => {
                self.games_started += 1;
                self.go_to(Screen::Game(Box::new(session)));
            }
            // Config was validated in `new`.
            Err(err) => warn!(error = %err, "failed to start session"),
        }
    }

    /// Drive the running session, if any.
    pub fn update(&mut self, now_ms: u64) -> Option<TickOutcome> {
        let Screen::Game(session) = &mut self.screen else {
            return None;
        };
        session.update(now_ms, &mut self.store)
    }

    fn toggle_fullscreen(&mut self) {
        self.fullscreen = !self.fullscreen;
        info!(fullscreen = self.fullscreen, "view scale toggled");
    }

    fn go_to(&mut self, screen: Screen) {
        info!(from = self.screen.name(), to = screen.name(), "screen change");
        self.screen = screen;
    }
}

fn wrap_next(cursor: usize, len: usize) -> usize {
    (cursor + 1) % len
}

fn wrap_prev(cursor: usize, len: usize) -> usize {
    (cursor + len - 1) % len
}
