//! Text renderings of each screen
//!
//! A screen renders to lines of text from the arguments its back-stack entry
//! was opened with. Screens never fail to render: missing arguments show a
//! fallback.

use nav_host::{NavOptions, NavigationEngine, Navigator};
use routing::{RouteArgs, RouteError};

use crate::destinations::{Screen, ScreenKind, FIRST_NAME_KEY, LAST_NAME_KEY};

/// Renders a screen from its arguments
pub type ScreenRenderer = fn(&RouteArgs) -> Vec<String>;

/// Shown in place of a missing argument
pub const UNKNOWN: &str = "Unknown";

/// Caption of the home screen's button
pub const CLICK_ME: &str = "Click Me!";

/// Renderer for a destination
pub fn renderer(kind: ScreenKind) -> ScreenRenderer {
    match kind {
        ScreenKind::Home => home,
        ScreenKind::Dashboard => dashboard,
        ScreenKind::Notifications => notifications,
        ScreenKind::UserDetails => user_details,
    }
}

/// Home screen: a single button
pub fn home(_args: &RouteArgs) -> Vec<String> {
    vec![format!("[ {} ]", CLICK_ME)]
}

/// Action of the home screen's button
pub fn on_click_me<E: NavigationEngine + ?Sized>(
    navigator: &mut Navigator<'_, E>,
) -> Result<(), RouteError> {
    navigator.go_to_route(&Screen::user_details("John", "Doe"), &NavOptions::new())
}

/// Dashboard placeholder
pub fn dashboard(_args: &RouteArgs) -> Vec<String> {
    vec!["This is dashboard screen".to_string()]
}

/// Notifications placeholder
pub fn notifications(_args: &RouteArgs) -> Vec<String> {
    vec!["This is notifications screen".to_string()]
}

/// User details from the `firstName` and `lastName` arguments
pub fn user_details(args: &RouteArgs) -> Vec<String> {
    vec![
        format!("First Name: {}", args.get_or(FIRST_NAME_KEY, UNKNOWN)),
        format!("Last Name: {}", args.get_or(LAST_NAME_KEY, UNKNOWN)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_details_reads_arguments() {
        let args: RouteArgs = [(FIRST_NAME_KEY, "John"), (LAST_NAME_KEY, "Doe")]
            .into_iter()
            .collect();
        assert_eq!(
            user_details(&args),
            vec!["First Name: John", "Last Name: Doe"]
        );
    }

    #[test]
    fn test_user_details_falls_back_to_unknown() {
        let args: RouteArgs = [(FIRST_NAME_KEY, "John")].into_iter().collect();
        assert_eq!(
            user_details(&args),
            vec!["First Name: John", "Last Name: Unknown"]
        );
        assert_eq!(
            user_details(&RouteArgs::new()),
            vec!["First Name: Unknown", "Last Name: Unknown"]
        );
    }

    #[test]
    fn test_renderer_lookup() {
        let render = renderer(ScreenKind::Home);
        assert_eq!(render(&RouteArgs::new()), vec!["[ Click Me! ]"]);
        let render = renderer(ScreenKind::Notifications);
        assert_eq!(render(&RouteArgs::new()), vec!["This is notifications screen"]);
    }
}
