//! Application constants
//!
//! Centralized defaults for endpoints, timing, and UI dimensions used
//! throughout the application.

/// Remote endpoints and static request metadata
pub mod net {
    /// Identity resolver (handle -> DID)
    pub const DEFAULT_RESOLVE_URL: &str =
        "https://bsky.social/xrpc/com.atproto.identity.resolveHandle";

    /// Public profile lookup (DID -> profile)
    pub const DEFAULT_PROFILE_URL: &str =
        "https://public.api.bsky.app/xrpc/app.bsky.actor.getProfile";

    /// ClearSky anonymous blocklist lookup; the handle is appended as a path segment
    pub const DEFAULT_BLOCKLIST_URL: &str =
        "https://api.clearsky.services/api/v1/anon/single-blocklist";

    /// Domain appended to the typed handle before resolution
    pub const DEFAULT_HANDLE_SUFFIX: &str = ".bsky.social";

    /// Origin sent with every request. The referer is derived from it.
    pub const DEFAULT_ORIGIN: &str = "https://clearsky.app";
}

/// Search controller behavior
pub mod app {
    /// Quiet period after the last keystroke before a lookup starts
    pub const DEFAULT_DEBOUNCE_MS: u64 = 300;

    /// Queries shorter than this never hit the network
    pub const MIN_QUERY_CHARS: usize = 3;

    /// Maximum number of debug log lines to retain in memory
    pub const MAX_DEBUG_LOG_LINES: usize = 50;
}

/// UI layout and display constants
pub mod ui {
    /// Default render rate
    pub const DEFAULT_RENDER_FPS: u32 = 30;

    /// Lines of description shown under a search result
    pub const DESCRIPTION_MAX_LINES: usize = 2;

    /// Message shown when a selected profile has no blockers
    pub const EMPTY_BLOCKLIST_MESSAGE: &str = "No users have blocked this handle.";

    /// Display name used when a profile has none
    pub const UNKNOWN_DISPLAY_NAME: &str = "Unknown";

    /// Height of the debug panel when visible (rows, including borders)
    pub const DEBUG_PANEL_HEIGHT: u16 = 6;
}
