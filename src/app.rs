//! Application state and core logic for the Got It TUI.
//!
//! This module contains the `App` struct which owns the navigation state
//! value, the content catalog and the cursor/animation state, and turns
//! key presses into navigation actions.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::cli::CliConfig;
use crate::models::{choices, grid_columns, Action, Catalog, NavState, ReentryPolicy, Screen};
use crate::ui::View;
use crate::utils::slide_offset;

/// Ticks the slide-in transition lasts
const TRANSITION_FRAMES: u64 = 3;

/// Columns the content starts shifted by when a screen changes
const TRANSITION_DISTANCE: u16 = 6;

/// Screens reachable from the bottom navigation, in bar order
pub const BOTTOM_NAV: [Screen; 4] = [
    Screen::Home,
    Screen::Class,
    Screen::Reinforcement,
    Screen::Schedule,
];

/// Application state
pub struct App {
    pub nav: NavState,
    pub catalog: Catalog,
    pub catalog_path: Option<PathBuf>,
    pub catalog_needs_reload: Arc<Mutex<bool>>,
    pub reentry: ReentryPolicy,
    pub animations: bool,
    // Index into the current screen's option list
    pub cursor: usize,
    // Animation state
    pub animation_tick: u64,
    // Tick of the last screen change; None until the first one
    pub transition_start: Option<u64>,
    pub should_quit: bool,
}

impl App {
    pub fn new(catalog: Catalog, config: &CliConfig) -> Self {
        Self {
            nav: NavState::new(),
            catalog,
            catalog_path: config.catalog_path.clone(),
            catalog_needs_reload: Arc::new(Mutex::new(false)),
            reentry: config.reentry,
            animations: config.animations,
            cursor: 0,
            animation_tick: 0,
            transition_start: None,
            should_quit: false,
        }
    }

    /// Snapshot handed to the renderer
    pub fn view(&self) -> View<'_> {
        let offset = match self.transition_start {
            Some(start) if self.animations => slide_offset(
                self.animation_tick.wrapping_sub(start),
                TRANSITION_FRAMES,
                TRANSITION_DISTANCE,
            ),
            _ => 0,
        };
        View {
            nav: &self.nav,
            catalog: &self.catalog,
            cursor: self.cursor,
            tick: self.animation_tick,
            slide_offset: offset,
            animations: self.animations,
        }
    }

    /// Apply an action to the navigation state
    pub fn dispatch(&mut self, action: Action) {
        if let Action::Inert(label) = &action {
            tracing::debug!(screen = ?self.nav.screen, option = %label, "inert option");
            return;
        }

        let next = self.nav.apply(&action, &self.catalog, self.reentry);
        if next == self.nav {
            return;
        }
        tracing::debug!(
            ?action,
            from = ?self.nav.screen,
            to = ?next.screen,
            loyalty = next.show_loyalty_message,
            "navigate"
        );
        if next.screen != self.nav.screen {
            self.transition_start = Some(self.animation_tick);
        }
        self.nav = next;
        self.cursor = 0;
    }

    /// Activate the option under the cursor
    pub fn activate(&mut self) {
        let options = choices(&self.nav, &self.catalog);
        if let Some(choice) = options.into_iter().nth(self.cursor) {
            self.dispatch(choice.action);
        }
    }

    /// Move the cursor by `delta` options, clamped to the list
    pub fn move_cursor(&mut self, delta: isize) {
        let len = choices(&self.nav, &self.catalog).len();
        if len == 0 {
            self.cursor = 0;
            return;
        }
        let target = self.cursor.saturating_add_signed(delta);
        self.cursor = target.min(len - 1);
    }

    /// Move one grid row up or down, keeping the column. Does nothing when
    /// there is no option directly above or below.
    pub fn move_row(&mut self, columns: usize, down: bool) {
        let len = choices(&self.nav, &self.catalog).len();
        if down {
            if self.cursor + columns < len {
                self.cursor += columns;
            }
        } else if self.cursor >= columns {
            self.cursor -= columns;
        }
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        let columns = grid_columns(&self.nav).max(1);

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Up | KeyCode::Char('k') => self.move_row(columns, false),
            KeyCode::Down | KeyCode::Char('j') => self.move_row(columns, true),
            KeyCode::Left if columns > 1 => self.move_cursor(-1),
            KeyCode::Right if columns > 1 => self.move_cursor(1),
            KeyCode::Enter | KeyCode::Char(' ') => self.activate(),
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('h') => {
                self.dispatch(Action::GoBack);
            }
            KeyCode::Char(c @ '1'..='4') => {
                let index = (c as usize) - ('1' as usize);
                if let Some(screen) = BOTTOM_NAV.get(index) {
                    self.dispatch(Action::GoTo(*screen));
                }
            }
            _ => {}
        }
    }

    /// Advance the animation clock
    pub fn tick(&mut self) {
        self.animation_tick = self.animation_tick.wrapping_add(1);
    }

    /// Reload the catalog from disk if the watcher flagged a change
    pub fn reload_catalog_if_needed(&mut self) {
        let needs_reload = {
            let Ok(mut flag) = self.catalog_needs_reload.lock() else {
                return;
            };
            std::mem::replace(&mut *flag, false)
        };
        if !needs_reload {
            return;
        }
        let Some(path) = self.catalog_path.as_ref() else {
            return;
        };

        match Catalog::load(path) {
            Ok(catalog) => {
                tracing::info!(path = %path.display(), "catalog reloaded");
                self.catalog = catalog;
                self.move_cursor(0);
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "keeping previous catalog");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::enums::{LevelId, ReasonId};
    use crate::models::{DiagnosticSub, ReinforcementSub};
    use std::time::Duration;

    fn config() -> CliConfig {
        CliConfig {
            reentry: ReentryPolicy::Preserve,
            animations: true,
            tick_rate: Duration::from_millis(100),
            catalog_path: None,
            watch_catalog: false,
            log_file: None,
            verbose: false,
        }
    }

    fn app() -> App {
        App::new(Catalog::builtin().unwrap(), &config())
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_enter_on_home_opens_diagnostic() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.nav.screen, Screen::Diagnostic);
        assert_eq!(app.nav.diagnostic, DiagnosticSub::Root);
    }

    #[test]
    fn test_walk_to_online_and_back() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.nav.diagnostic, DiagnosticSub::Online);

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.nav.screen, Screen::Diagnostic);
        assert_eq!(app.nav.diagnostic, DiagnosticSub::Root);

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.nav.screen, Screen::Home);
    }

    #[test]
    fn test_cursor_selects_loyalty_level() {
        let mut app = app();
        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.nav.screen, Screen::Class);
        for _ in 0..10 {
            press(&mut app, KeyCode::Down);
        }
        assert_eq!(app.cursor, 6);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.nav.selected_level, Some(LevelId::Crazy));
        assert!(app.nav.show_loyalty_message);
    }

    #[test]
    fn test_inert_option_keeps_state_and_cursor() {
        let mut app = app();
        press(&mut app, KeyCode::Char('4'));
        press(&mut app, KeyCode::Down);
        let before = app.nav;
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.nav, before);
        assert_eq!(app.cursor, 1);
    }

    #[test]
    fn test_grid_navigation_on_reinforcement() {
        let mut app = app();
        press(&mut app, KeyCode::Char('3'));
        press(&mut app, KeyCode::Down);
        assert_eq!(app.cursor, 2);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.cursor, 3);
        press(&mut app, KeyCode::Enter);
        assert_eq!(
            app.nav.reinforcement,
            ReinforcementSub::Reason(ReasonId::NotMyself)
        );
    }

    #[test]
    fn test_unhandled_reason_is_empty_dead_end() {
        let mut app = app();
        press(&mut app, KeyCode::Char('3'));
        for _ in 0..3 {
            press(&mut app, KeyCode::Down);
        }
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Enter);
        assert_eq!(
            app.nav.reinforcement,
            ReinforcementSub::Reason(ReasonId::Workshop)
        );
        press(&mut app, KeyCode::Down);
        assert_eq!(app.cursor, 0);
        press(&mut app, KeyCode::Enter);
        assert_eq!(
            app.nav.reinforcement,
            ReinforcementSub::Reason(ReasonId::Workshop)
        );
    }

    #[test]
    fn test_cursor_clamps_at_top() {
        let mut app = app();
        press(&mut app, KeyCode::Up);
        assert_eq!(app.cursor, 0);
    }

    #[test]
    fn test_up_from_top_row_keeps_column() {
        let mut app = app();
        press(&mut app, KeyCode::Char('3'));
        press(&mut app, KeyCode::Right);
        assert_eq!(app.cursor, 1);
        press(&mut app, KeyCode::Up);
        assert_eq!(app.cursor, 1);
    }

    #[test]
    fn test_down_stays_put_when_last_row_is_short() {
        let mut app = app();
        // Five durations in two columns: the last row holds only index 4
        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.nav.selected_level, Some(LevelId::First));
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.cursor, 3);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.cursor, 3);
        press(&mut app, KeyCode::Left);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.cursor, 4);
    }

    #[test]
    fn test_back_from_home_does_nothing() {
        let mut app = app();
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Esc);
        assert!(app.nav.is_root());
        assert_eq!(app.cursor, 1);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);

        let mut other = self::app();
        other.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(other.should_quit);
    }

    #[test]
    fn test_reset_policy_from_config() {
        let mut config = config();
        config.reentry = ReentryPolicy::Reset;
        let mut app = App::new(Catalog::builtin().unwrap(), &config);
        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.nav.selected_level, Some(LevelId::First));
        press(&mut app, KeyCode::Char('1'));
        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.nav.selected_level, None);
    }

    #[test]
    fn test_screen_change_starts_transition() {
        let mut app = app();
        assert_eq!(app.view().slide_offset, 0);
        for _ in 0..10 {
            app.tick();
        }
        press(&mut app, KeyCode::Char('4'));
        assert!(app.view().slide_offset > 0);
        for _ in 0..TRANSITION_FRAMES {
            app.tick();
        }
        assert_eq!(app.view().slide_offset, 0);
    }

    #[test]
    fn test_no_transition_when_animations_off() {
        let mut config = config();
        config.animations = false;
        let mut app = App::new(Catalog::builtin().unwrap(), &config);
        press(&mut app, KeyCode::Char('4'));
        assert_eq!(app.view().slide_offset, 0);
    }

    #[test]
    fn test_reload_keeps_catalog_on_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        std::fs::write(&path, "{ not json").unwrap();

        let mut config = config();
        config.catalog_path = Some(path.clone());
        let mut app = App::new(Catalog::builtin().unwrap(), &config);
        *app.catalog_needs_reload.lock().unwrap() = true;
        app.reload_catalog_if_needed();
        assert_eq!(app.catalog, Catalog::builtin().unwrap());
        assert!(!*app.catalog_needs_reload.lock().unwrap());
    }

    #[test]
    fn test_reload_picks_up_new_content() {
        let mut json: serde_json::Value =
            serde_json::from_str(include_str!("../assets/catalog.json")).unwrap();
        json["home"]["greeting"] = serde_json::json!("¡Hola!");
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        std::fs::write(&path, json.to_string()).unwrap();

        let mut config = config();
        config.catalog_path = Some(path);
        let mut app = App::new(Catalog::builtin().unwrap(), &config);
        *app.catalog_needs_reload.lock().unwrap() = true;
        app.reload_catalog_if_needed();
        assert_eq!(app.catalog.home.greeting, "¡Hola!");
    }
}
