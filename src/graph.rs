//! Navigation graph of the application

use i18n::StringResources;
use routing::{ArgumentSpec, ConfigResult, RouteSpec, RouteTable};

use crate::destinations::{ScreenKind, FIRST_NAME_KEY, LAST_NAME_KEY};
use crate::screens::{self, ScreenRenderer};

/// Default first name when a details route arrives without one
pub const DEFAULT_FIRST_NAME: &str = "first";

/// Default last name when a details route arrives without one
pub const DEFAULT_LAST_NAME: &str = "last";

/// Build the route table, starting at home
///
/// Labels are resolved through `resources` once, here.
pub fn setup_graph(resources: &dyn StringResources) -> ConfigResult<RouteTable<ScreenRenderer>> {
    let start = ScreenKind::Home.destination()?;
    let mut builder = RouteTable::builder(&start);

    for kind in ScreenKind::ALL {
        let mut spec =
            RouteSpec::new(kind.destination()?, screens::renderer(kind)).label(kind.label_id());
        if kind == ScreenKind::UserDetails {
            spec = spec
                .argument(ArgumentSpec::string(FIRST_NAME_KEY).default_value(DEFAULT_FIRST_NAME))
                .argument(ArgumentSpec::string(LAST_NAME_KEY).default_value(DEFAULT_LAST_NAME));
        }
        builder = builder.route(spec);
    }

    builder.build(resources)
}
