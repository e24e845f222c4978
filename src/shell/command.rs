//! Shell commands - one line of input per command

use std::str::FromStr;

use thiserror::Error;

use super::view::find_tab;
use crate::core::{NotificationId, NotificationKind, PreferencesUpdate, ProgressUpdate, Theme};

/// Errors from parsing a command line
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("unknown command '{0}' (try 'help')")]
    Unknown(String),

    #[error("missing {0}")]
    MissingArgument(&'static str),

    #[error("invalid value '{value}' for {field}")]
    InvalidValue { field: String, value: String },

    #[error("unknown key '{0}'")]
    UnknownKey(String),
}

/// A parsed shell command
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Navigate to a route path or tab label
    Go(String),
    Notify {
        kind: NotificationKind,
        title: String,
        message: String,
    },
    Read(NotificationId),
    Clear,
    Prefs(PreferencesUpdate),
    Progress(ProgressUpdate),
    Login {
        name: String,
        email: String,
    },
    Logout,
    Loading(bool),
    /// Set an error message, or clear it with `None`
    Error(Option<String>),
    Show,
    History,
    Help,
    Quit,
}

pub const HELP: &str = "\
commands:
  go <path|tab>                      navigate (tabs: home, practice, progress, profile)
  notify <type> <title> | <message>  add a notification
  read <id>                          mark a notification read
  clear                              mark all notifications read
  prefs key=value ...                theme, notifications, sound, language
  progress key=value ...             completed, total, goal, achievements=a,b
  login <name> <email>               sign in
  logout                             sign out and reset
  loading on|off                     toggle the loading flag
  error <message>|none               set or clear the error
  show | history | help | quit";

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        match verb.to_ascii_lowercase().as_str() {
            "go" => parse_go(rest),
            "notify" => parse_notify(rest),
            "read" => {
                let id = required(rest, "notification id")?;
                let id = id.parse::<u64>().map_err(|_| invalid("notification id", id))?;
                Ok(Command::Read(NotificationId(id)))
            }
            "clear" => Ok(Command::Clear),
            "prefs" => parse_prefs(rest),
            "progress" => parse_progress(rest),
            "login" => parse_login(rest),
            "logout" => Ok(Command::Logout),
            "loading" => Ok(Command::Loading(parse_bool("loading", required(rest, "on|off")?)?)),
            "error" => match required(rest, "error message")? {
                "none" => Ok(Command::Error(None)),
                message => Ok(Command::Error(Some(message.to_string()))),
            },
            "show" => Ok(Command::Show),
            "history" => Ok(Command::History),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

fn required<'a>(rest: &'a str, what: &'static str) -> Result<&'a str, CommandError> {
    if rest.is_empty() {
        Err(CommandError::MissingArgument(what))
    } else {
        Ok(rest)
    }
}

fn invalid(field: &str, value: &str) -> CommandError {
    CommandError::InvalidValue {
        field: field.to_string(),
        value: value.to_string(),
    }
}

fn parse_bool(field: &str, value: &str) -> Result<bool, CommandError> {
    match value.to_ascii_lowercase().as_str() {
        "on" | "true" | "yes" | "1" => Ok(true),
        "off" | "false" | "no" | "0" => Ok(false),
        _ => Err(invalid(field, value)),
    }
}

fn parse_go(rest: &str) -> Result<Command, CommandError> {
    let target = required(rest, "path or tab")?;
    if target.starts_with('/') {
        return Ok(Command::Go(target.to_string()));
    }
    find_tab(target)
        .map(|tab| Command::Go(tab.path.to_string()))
        .ok_or_else(|| invalid("tab", target))
}

fn parse_notify(rest: &str) -> Result<Command, CommandError> {
    let rest = required(rest, "notification type")?;
    let (kind, text) = rest
        .split_once(char::is_whitespace)
        .ok_or(CommandError::MissingArgument("notification title"))?;
    let (title, message) = match text.split_once('|') {
        Some((title, message)) => (title.trim(), message.trim()),
        None => (text.trim(), ""),
    };
    if title.is_empty() {
        return Err(CommandError::MissingArgument("notification title"));
    }
    Ok(Command::Notify {
        kind: NotificationKind::from(kind.to_ascii_lowercase()),
        title: title.to_string(),
        message: message.to_string(),
    })
}

fn parse_pairs(rest: &str) -> Result<Vec<(&str, &str)>, CommandError> {
    rest.split_whitespace()
        .map(|pair| {
            pair.split_once('=')
                .ok_or_else(|| invalid("key=value", pair))
        })
        .collect()
}

fn parse_prefs(rest: &str) -> Result<Command, CommandError> {
    let mut update = PreferencesUpdate::default();
    for (key, value) in parse_pairs(required(rest, "key=value")?)? {
        update = match key {
            "theme" => update.theme(value.parse::<Theme>().map_err(|_| invalid(key, value))?),
            "notifications" => update.notifications(parse_bool(key, value)?),
            "sound" | "soundEnabled" => update.sound_enabled(parse_bool(key, value)?),
            "language" | "lang" => update.language(value),
            other => return Err(CommandError::UnknownKey(other.to_string())),
        };
    }
    Ok(Command::Prefs(update))
}

fn parse_progress(rest: &str) -> Result<Command, CommandError> {
    let rest = required(rest, "key=value")?;

    // Achievement labels contain spaces, so `achievements=` takes the rest of the line
    let (pairs, achievements) = match rest.find("achievements=") {
        Some(idx) => (&rest[..idx], Some(&rest[idx + "achievements=".len()..])),
        None => (rest, None),
    };

    let mut update = ProgressUpdate::default();
    for (key, value) in parse_pairs(pairs)? {
        let number = value.parse::<u32>().map_err(|_| invalid(key, value))?;
        update = match key {
            "completed" => update.completed(number),
            "total" => update.total(number),
            "goal" => update.weekly_goal(number),
            other => return Err(CommandError::UnknownKey(other.to_string())),
        };
    }
    if let Some(labels) = achievements {
        update = update.achievements(
            labels
                .split(',')
                .map(str::trim)
                .filter(|label| !label.is_empty()),
        );
    }
    Ok(Command::Progress(update))
}

fn parse_login(rest: &str) -> Result<Command, CommandError> {
    let rest = required(rest, "name and email")?;
    let (name, email) = rest
        .rsplit_once(char::is_whitespace)
        .ok_or(CommandError::MissingArgument("email"))?;
    if !email.contains('@') {
        return Err(invalid("email", email));
    }
    Ok(Command::Login {
        name: name.trim().to_string(),
        email: email.to_string(),
    })
}
