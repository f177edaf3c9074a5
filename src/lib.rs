//! skyblocks - who blocks this Bluesky handle?
//!
//! Terminal UI that resolves a handle, shows the matching profile in a
//! dropdown, and lists the accounts blocking it once it is selected.
//!
//! ## Architecture
//!
//! - [`app::App`] is the search controller. It owns all state and emits
//!   [`types::LookupRequest`]s on a channel.
//! - [`lookup_worker`] serves those requests with a [`lookup::Lookup`]
//!   and answers with [`types::AppEvent`]s.
//! - [`render`] turns profiles and blocklist entries into ratatui text;
//!   [`ui`] lays it out.
//!
//! ```bash
//! cargo run -- alice
//! ```

pub mod config;
pub mod constants;
pub mod debounce;
pub mod lookup;
pub mod lookup_worker;
pub mod render;
pub mod theme;
pub mod types;
pub mod util_text;

pub mod app;
pub mod ui;

// Terminal session (native-only)
#[cfg(feature = "native")]
pub mod terminal;

// Re-export commonly used types
pub use app::{App, SearchPhase};
pub use config::Config;
pub use lookup::{Endpoints, HttpLookup, Lookup};
pub use types::{AppEvent, BlocklistEntry, LookupRequest, Profile};
