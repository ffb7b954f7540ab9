//! Main application controller
//!
//! Owns the core (store, chooser, storage) and the screens, routes
//! keyboard input, and applies spin updates from the active task.

use crossterm::event::KeyEvent;
use tokio::sync::mpsc;

use crate::{
    app::{
        screens::{FilesAction, FilesScreen, HomeAction, HomeScreen, SpinningScreen},
        spin::{SpinDriver, SpinHandle, SpinUpdate},
        state::{AppState, NavigationAction, StateManager},
        tui::Tui,
    },
    chooser::Chooser,
    config::AppConfig,
    error,
    store::{storage::ListStorage, OptionStore},
    Result, SpinPickError,
};

/// TUI application controller
pub struct App {
    /// Terminal UI handler
    tui: Tui,
    /// Application state manager
    state_manager: StateManager,
    /// Application config
    config: AppConfig,
    /// The option list
    store: OptionStore,
    /// Random selection
    chooser: Chooser,
    /// Saved-list files
    storage: ListStorage,
    /// Screen components
    home_screen: HomeScreen,
    spinning_screen: SpinningScreen,
    files_screen: FilesScreen,
    /// Spin task management
    spin_driver: SpinDriver,
    spin_rx: Option<mpsc::Receiver<(u64, SpinUpdate)>>,
    active_spin: Option<SpinHandle>,
}

impl App {
    /// Create a new application instance
    pub fn new() -> Result<Self> {
        let config = AppConfig::load()?;
        let storage = config.list_storage()?;
        Ok(Self {
            tui: Tui::new()?,
            state_manager: StateManager::new(),
            config,
            store: OptionStore::new(),
            chooser: Chooser::new(),
            storage,
            home_screen: HomeScreen::new(),
            spinning_screen: SpinningScreen::new(),
            files_screen: FilesScreen::new(),
            spin_driver: SpinDriver::new(),
            spin_rx: None,
            active_spin: None,
        })
    }

    /// Initialize the application and TUI
    pub fn init(&mut self) -> Result<()> {
        self.tui.init()?;
        Ok(())
    }

    /// Run the main application loop
    pub async fn run(&mut self) -> Result<()> {
        while !self.state_manager.should_quit() {
            self.drain_spin_updates();
            self.draw()?;
            self.handle_events()?;
        }
        Ok(())
    }

    /// Apply pending updates from the active spin, dropping anything
    /// from a superseded generation.
    fn drain_spin_updates(&mut self) {
        let active_generation = match &self.active_spin {
            Some(handle) => handle.generation(),
            None => return,
        };

        let mut updates = Vec::new();
        if let Some(rx) = self.spin_rx.as_mut() {
            while let Ok((generation, update)) = rx.try_recv() {
                if generation == active_generation {
                    updates.push(update);
                }
            }
        }

        for update in updates {
            match update {
                SpinUpdate::Reveal { value, step, total } => {
                    self.spinning_screen.update_reveal(value, step, total);
                }
                SpinUpdate::Settled { value } => {
                    self.spinning_screen.settle(value.clone());
                    self.home_screen.set_result(Some(value.clone()));
                    self.home_screen.set_status(format!(
                        "Chosen: {} | options: {}",
                        value,
                        self.store.len()
                    ));
                }
            }
        }
    }

    /// Draw the current screen
    fn draw(&mut self) -> Result<()> {
        self.tui.draw(|f| match self.state_manager.current_state() {
            AppState::Home => self.home_screen.render(f, self.store.options()),
            AppState::Spinning => self.spinning_screen.render(f),
            AppState::SaveFile | AppState::LoadFile => self.files_screen.render(f),
        })?;
        Ok(())
    }

    /// Handle keyboard events and update state
    fn handle_events(&mut self) -> Result<()> {
        if let Some(key) = self.tui.handle_events()? {
            match self.state_manager.current_state().clone() {
                AppState::Home => self.handle_home_key(key),
                AppState::Spinning => self.handle_spinning_key(key),
                AppState::SaveFile | AppState::LoadFile => self.handle_files_key(key),
            }
        }
        Ok(())
    }

    fn handle_home_key(&mut self, key: KeyEvent) {
        let action = match self.home_screen.handle_key_event(key, self.store.len()) {
            Some(action) => action,
            None => return,
        };

        match action {
            HomeAction::Add => {
                // Keep the typed text around when validation rejects it
                let text = self.home_screen.input().to_string();
                match self.store.add(&text) {
                    Ok(_) => {
                        self.home_screen.take_input();
                        self.home_screen.clamp_selection(self.store.len());
                        self.refresh_status();
                    }
                    Err(err) => self.report_error(&err),
                }
            }
            HomeAction::RemoveSelected => {
                let index = self.home_screen.selected_index();
                match self.store.remove_at(index) {
                    Ok(removed) => {
                        self.home_screen.clamp_selection(self.store.len());
                        self.home_screen.set_status(format!(
                            "Removed: {} | options: {}",
                            removed,
                            self.store.len()
                        ));
                    }
                    Err(err) => self.report_error(&err),
                }
            }
            HomeAction::ClearAll => {
                self.store.clear();
                self.home_screen.set_result(None);
                self.home_screen.clamp_selection(0);
                self.refresh_status();
            }
            HomeAction::Spin => self.start_spin(),
            HomeAction::OpenSave => {
                self.files_screen.open_save(ListStorage::default_file_name());
                self.state_manager.transition_to(AppState::SaveFile);
            }
            HomeAction::OpenLoad => match self.storage.list_saved() {
                Ok(files) => {
                    self.files_screen.open_load(files);
                    self.state_manager.transition_to(AppState::LoadFile);
                }
                Err(err) => self.report_error(&err),
            },
            HomeAction::Quit => self.state_manager.quit(),
        }
    }

    fn handle_spinning_key(&mut self, key: KeyEvent) {
        match StateManager::key_to_navigation(key) {
            NavigationAction::Quit => self.state_manager.quit(),
            NavigationAction::Back => {
                self.abandon_spin();
                self.state_manager.go_back();
            }
            // Starting over supersedes an in-flight spin; the new
            // generation's settle is the one that counts.
            NavigationAction::Select => self.start_spin(),
            _ => {}
        }
    }

    fn handle_files_key(&mut self, key: KeyEvent) {
        let action = match self.files_screen.handle_key_event(key) {
            Some(action) => action,
            None => return,
        };

        match action {
            FilesAction::SaveAs(name) => match self.storage.save(&name, &self.store) {
                Ok(path) => {
                    let file_name = path
                        .file_name()
                        .map(|n| n.to_string_lossy().into_owned())
                        .unwrap_or_else(|| path.display().to_string());
                    self.home_screen.set_status(format!(
                        "Saved to {} | options: {}",
                        file_name,
                        self.store.len()
                    ));
                    self.state_manager.go_back();
                }
                Err(err) => self
                    .files_screen
                    .set_status(error::user_friendly_message(&err)),
            },
            FilesAction::LoadPath(path) => {
                match self.storage.load(&path, &mut self.store) {
                    Ok(count) => {
                        self.home_screen.clamp_selection(count);
                        self.home_screen
                            .set_status(format!("Loaded | options: {}", count));
                        self.state_manager.go_back();
                    }
                    Err(err) => self
                        .files_screen
                        .set_status(error::user_friendly_message(&err)),
                }
            }
            FilesAction::Cancel => self.state_manager.go_back(),
        }
    }

    /// Start a new spin over the current list, superseding any
    /// in-flight one.
    fn start_spin(&mut self) {
        match self
            .chooser
            .spin(self.store.options(), self.config.spin_steps)
        {
            Ok(sequence) => {
                self.abandon_spin();
                let (tx, rx) = mpsc::channel(self.config.spin_steps + 2);
                let handle = self.spin_driver.start(sequence, self.config.spin_tick(), tx);
                self.spin_rx = Some(rx);
                self.active_spin = Some(handle);
                self.spinning_screen.reset();
                self.state_manager.transition_to(AppState::Spinning);
            }
            Err(err) => self.report_error(&err),
        }
    }

    fn abandon_spin(&mut self) {
        if let Some(handle) = self.active_spin.take() {
            handle.abort();
        }
        self.spin_rx = None;
    }

    fn refresh_status(&mut self) {
        self.home_screen
            .set_status(format!("Ready | options: {}", self.store.len()));
    }

    fn report_error(&mut self, err: &SpinPickError) {
        self.home_screen
            .set_status(error::user_friendly_message(err));
    }
}
