//! Main window host
//!
//! [`MainActivity`] owns the navigation controller and the window chrome (app
//! bar and bottom navigation) and turns user [`Command`]s into navigation.

use std::fmt;
use std::str::FromStr;

use i18n::{StringResources, Translator};
use nav_host::{AppBar, BottomNavigation, NavController, Navigator, TabItem};
use routing::{ConfigResult, RouteError};
use thiserror::Error;

use crate::config::AppConfig;
use crate::destinations::ScreenKind;
use crate::graph::setup_graph;
use crate::screens::{self, ScreenRenderer};
use crate::LOCALE_SOURCES;

/// Prefix of bottom navigation item ids
const TAB_ID_PREFIX: &str = "navigation_";

/// Error parsing a [`Command`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// Nothing to parse
    #[error("Empty command")]
    Empty,

    /// Unrecognised command word
    #[error("Unknown command: {0}")]
    Unknown(String),

    /// Command that needs an argument got none
    #[error("Command `{0}` needs an argument")]
    MissingArgument(String),
}

/// A user action on the main window
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Tap the bottom navigation item with this id
    SelectTab(String),
    /// Tap the home screen's button
    ClickMe,
    /// System back
    Back,
    /// Go home, dropping all history
    HomeClearingHistory,
    /// Navigate to a raw path
    Open(String),
}

impl FromStr for Command {
    type Err = CommandError;

    /// Parse `tab:<name>`, `click`, `back`, `clear` or `go:<path>`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (word, argument) = match s.split_once(':') {
            Some((word, argument)) => (word, Some(argument.trim())),
            None => (s, None),
        };
        let required = |word: &str| {
            argument
                .filter(|a| !a.is_empty())
                .map(str::to_string)
                .ok_or_else(|| CommandError::MissingArgument(word.to_string()))
        };

        match word {
            "" => Err(CommandError::Empty),
            "tab" => {
                let name = required(word)?;
                if name.starts_with(TAB_ID_PREFIX) {
                    Ok(Command::SelectTab(name))
                } else {
                    Ok(Command::SelectTab(format!("{}{}", TAB_ID_PREFIX, name)))
                }
            }
            "click" => Ok(Command::ClickMe),
            "back" => Ok(Command::Back),
            "clear" => Ok(Command::HomeClearingHistory),
            "go" => Ok(Command::Open(required(word)?)),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::SelectTab(id) => write!(f, "tab:{}", id.trim_start_matches(TAB_ID_PREFIX)),
            Command::ClickMe => f.write_str("click"),
            Command::Back => f.write_str("back"),
            Command::HomeClearingHistory => f.write_str("clear"),
            Command::Open(path) => write!(f, "go:{}", path),
        }
    }
}

/// The application's single window
#[derive(Debug)]
pub struct MainActivity {
    controller: NavController<ScreenRenderer>,
    bottom_navigation: BottomNavigation,
    app_bar: AppBar,
}

impl MainActivity {
    /// Create the window for a configuration
    ///
    /// Strings come from the bundled locale best matching `config.locale`.
    pub fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let translator = Translator::negotiated(&LOCALE_SOURCES, &[config.locale.as_str()])?;
        tracing::info!("Using locale {}", translator.locale());
        Ok(Self::with_resources(&translator, &config.default_title)?)
    }

    /// Create the window over explicit string resources
    pub fn with_resources(
        resources: &dyn StringResources,
        default_title: &str,
    ) -> ConfigResult<Self> {
        let mut controller = NavController::new(setup_graph(resources)?);

        let tabs = [ScreenKind::Home, ScreenKind::Dashboard, ScreenKind::Notifications]
            .into_iter()
            .map(|kind| {
                TabItem::new(
                    format!("{}{}", TAB_ID_PREFIX, kind.key()),
                    resources.get_string(kind.label_id()),
                    kind.key(),
                )
            })
            .collect();
        let bottom_navigation = BottomNavigation::new(tabs);

        let app_bar = AppBar::new(default_title);
        app_bar.bind(&mut controller);

        Ok(Self {
            controller,
            bottom_navigation,
            app_bar,
        })
    }

    /// Apply a user action
    ///
    /// Returns `Ok(false)` when the action had nothing to act on: back at the
    /// root, an unknown tab, or the button while not on home.
    pub fn handle(&mut self, command: &Command) -> Result<bool, RouteError> {
        tracing::debug!("Handling {}", command);
        let handled = match command {
            Command::SelectTab(id) => self
                .bottom_navigation
                .on_item_selected(&mut self.controller, id)?,
            Command::ClickMe => {
                if self.current_kind() != Some(ScreenKind::Home) {
                    return Ok(false);
                }
                screens::on_click_me(&mut Navigator::new(&mut self.controller))?;
                true
            }
            Command::Back => self.controller.pop_back(),
            Command::HomeClearingHistory => {
                Navigator::new(&mut self.controller)
                    .go_to_clearing_history(ScreenKind::Home.key())?;
                true
            }
            Command::Open(path) => {
                Navigator::new(&mut self.controller).go_to(path, &Default::default())?;
                true
            }
        };

        if let Some(entry) = self.controller.current() {
            self.bottom_navigation.sync_selection(entry.template());
        }
        Ok(handled)
    }

    /// Destination currently shown
    pub fn current_kind(&self) -> Option<ScreenKind> {
        let entry = self.controller.current()?;
        ScreenKind::from_key(&entry.destination().key)
    }

    /// App bar title
    pub fn title(&self) -> String {
        self.app_bar.title()
    }

    /// Lines of the current screen
    pub fn render(&self) -> Vec<String> {
        match self.controller.render_current() {
            Some((render, args)) => render(args),
            None => Vec::new(),
        }
    }

    /// Navigation controller
    pub fn controller(&self) -> &NavController<ScreenRenderer> {
        &self.controller
    }

    /// Bottom navigation bar
    pub fn bottom_navigation(&self) -> &BottomNavigation {
        &self.bottom_navigation
    }
}
