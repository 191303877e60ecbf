//! Route identity, argument encoding, and the static route table
//!
//! # Modules
//!
//! - [`destination`] - Destinations, path templates, and concrete routes
//! - [`args`] - Percent-encoded path segments and decoded argument bags
//! - [`table`] - Route table builder and exact-match lookup
//! - [`error`] - Configuration and routing errors
//!
//! # Example
//!
//! ```rust
//! use routing::{Destination, RouteArgs};
//!
//! let details =
//!     Destination::with_parameters("details_details", ["firstName", "lastName"]).unwrap();
//! assert_eq!(details.path_template(), "details_details/{firstName}/{lastName}");
//!
//! let route = details.bind(&[Some("John"), Some("Doe")]).unwrap();
//! assert_eq!(route.resolved_path(), "details_details/John/Doe");
//!
//! let args: RouteArgs = routing::decode(&details, route.resolved_path()).unwrap();
//! assert_eq!(args.get_or("firstName", "Unknown"), "John");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod args;
pub mod destination;
pub mod error;
pub mod table;

pub use args::{decode, decode_segment, encode_segment, RouteArgs};
pub use destination::{build_template, ConcreteRoute, Destination, Routable, SEPARATOR};
pub use error::{ConfigError, ConfigResult, RouteError};
pub use table::{ArgType, ArgumentSpec, RouteEntry, RouteSpec, RouteTable, RouteTableBuilder};
