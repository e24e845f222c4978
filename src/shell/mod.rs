//! Headless shell - drives the store from line commands, standing in for the router and UI

mod command;
mod config;
pub mod view;

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use chrono::Utc;
use tracing::debug;

pub use command::{Command, CommandError, HELP};
pub use config::{parse_flag, ShellConfig, CONFIG_ENV};

use crate::core::{AppStateStore, Notification, StatusError, User};
use crate::persistence::SessionStorage;

/// Result of executing one command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Keep reading; print the text if not empty
    Continue(String),
    Quit,
}

/// Owns the store for the lifetime of the session
pub struct Shell<S: SessionStorage> {
    store: AppStateStore<S>,
}

impl<S: SessionStorage> Shell<S> {
    pub fn new(store: AppStateStore<S>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &AppStateStore<S> {
        &self.store
    }

    /// Execute a single command against the store
    pub fn execute(&mut self, command: Command) -> Outcome {
        debug!("Executing {:?}", command);
        let store = &mut self.store;
        let output = match command {
            Command::Go(path) => {
                store.sync_route(&path);
                view::render_tab_bar(store.active_tab())
            }
            Command::Notify {
                kind,
                title,
                message,
            } => {
                let id = store.next_notification_id();
                store.add_notification(Notification::new(id, kind, title, message, Utc::now()));
                format!("added #{} ({} unread)", id, store.unread_count())
            }
            Command::Read(id) => {
                store.mark_notification_read(id);
                format!("{} unread", store.unread_count())
            }
            Command::Clear => {
                store.clear_all_notifications();
                "all notifications read".to_string()
            }
            Command::Prefs(update) => {
                store.update_preferences(update);
                view::render_state(store.state())
            }
            Command::Progress(update) => {
                store.update_user_progress(update);
                view::render_progress(store.state())
            }
            Command::Login { name, email } => {
                let current = &store.state().user;
                let user = User::new(current.id, name, email)
                    .with_avatar(current.avatar.clone())
                    .with_progress(current.progress.clone());
                store.login(user);
                view::render_header(store.state())
            }
            Command::Logout => {
                store.logout();
                view::render_header(store.state())
            }
            Command::Loading(loading) => {
                store.set_loading(loading);
                view::render_header(store.state())
            }
            Command::Error(message) => {
                store.set_error(message.map(StatusError::new));
                view::render_header(store.state())
            }
            Command::Show => format!(
                "{}\n{}",
                view::render_state(store.state()),
                view::render_notifications(&store.state().notifications)
            ),
            Command::History => view::render_history(&store.state().navigation_history),
            Command::Help => HELP.to_string(),
            Command::Quit => return Outcome::Quit,
        };
        Outcome::Continue(output)
    }

    /// Read commands from `input` until EOF or `quit`, writing responses to `output`
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<()> {
        writeln!(output, "{}", view::render_state(self.store.state()))?;

        for line in input.lines() {
            let line = line.context("Failed to read command")?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            match line.parse::<Command>() {
                Ok(command) => match self.execute(command) {
                    Outcome::Continue(text) => {
                        if !text.is_empty() {
                            writeln!(output, "{}", text)?;
                        }
                    }
                    Outcome::Quit => break,
                },
                Err(e) => writeln!(output, "error: {}", e)?,
            }
            output.flush()?;
        }
        Ok(())
    }
}
