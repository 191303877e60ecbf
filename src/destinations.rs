//! The application's fixed destinations
//!
//! [`Screen`] is the closed set of places the app can navigate to. Variants
//! carry the values their route needs; [`ScreenKind`] names a destination
//! without any values and is what the route table is built from.

use routing::{ConfigResult, Destination, Routable};

/// Argument name of the user's first name
pub const FIRST_NAME_KEY: &str = "firstName";

/// Argument name of the user's last name
pub const LAST_NAME_KEY: &str = "lastName";

/// Value-free identity of each destination
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScreenKind {
    /// Home tab
    Home,
    /// Dashboard tab
    Dashboard,
    /// Notifications tab
    Notifications,
    /// User details, reached from home
    UserDetails,
}

impl ScreenKind {
    /// Every destination, in registration order
    pub const ALL: [ScreenKind; 4] = [
        ScreenKind::Home,
        ScreenKind::Dashboard,
        ScreenKind::Notifications,
        ScreenKind::UserDetails,
    ];

    /// Route key
    pub fn key(self) -> &'static str {
        match self {
            ScreenKind::Home => "home",
            ScreenKind::Dashboard => "dashboard",
            ScreenKind::Notifications => "notifications",
            ScreenKind::UserDetails => "details_details",
        }
    }

    /// Ordered parameter names
    pub fn parameter_names(self) -> &'static [&'static str] {
        match self {
            ScreenKind::UserDetails => &[FIRST_NAME_KEY, LAST_NAME_KEY],
            ScreenKind::Home | ScreenKind::Dashboard | ScreenKind::Notifications => &[],
        }
    }

    /// String resource id of the label
    pub fn label_id(self) -> &'static str {
        match self {
            ScreenKind::Home => "title_home",
            ScreenKind::Dashboard => "title_dashboard",
            ScreenKind::Notifications => "title_notifications",
            ScreenKind::UserDetails => "title_details",
        }
    }

    /// Destination definition
    pub fn destination(self) -> ConfigResult<Destination> {
        Destination::with_parameters(self.key(), self.parameter_names().iter().copied())
    }

    /// Find the destination whose route key is `key`
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.key() == key)
    }
}

/// A destination together with its argument values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    /// Home tab
    Home,
    /// Dashboard tab
    Dashboard,
    /// Notifications tab
    Notifications,
    /// User details for a name
    UserDetails {
        /// First name, if known
        first_name: Option<String>,
        /// Last name, if known
        last_name: Option<String>,
    },
}

impl Screen {
    /// Details screen for a full name
    pub fn user_details(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Screen::UserDetails {
            first_name: Some(first_name.into()),
            last_name: Some(last_name.into()),
        }
    }

    /// The value-free destination of this screen
    pub fn kind(&self) -> ScreenKind {
        match self {
            Screen::Home => ScreenKind::Home,
            Screen::Dashboard => ScreenKind::Dashboard,
            Screen::Notifications => ScreenKind::Notifications,
            Screen::UserDetails { .. } => ScreenKind::UserDetails,
        }
    }
}

impl Routable for Screen {
    fn key(&self) -> &'static str {
        self.kind().key()
    }

    fn parameter_names(&self) -> &'static [&'static str] {
        self.kind().parameter_names()
    }

    fn arguments(&self) -> Vec<Option<String>> {
        match self {
            Screen::Home | Screen::Dashboard | Screen::Notifications => Vec::new(),
            Screen::UserDetails {
                first_name,
                last_name,
            } => vec![first_name.clone(), last_name.clone()],
        }
    }
}
