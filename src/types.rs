use serde::{Deserialize, Serialize};

/// A resolved Bluesky account
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub avatar: Option<String>,
    pub handle: String,
    #[serde(rename = "displayName", default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// One account that blocks the selected profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlocklistEntry {
    pub handle: String,
    #[serde(default)]
    pub avatar: Option<String>,
    pub blocked_date: String,
    /// true while the block is still in place
    pub status: bool,
}

/// Work the controller hands to the lookup worker.
///
/// `generation` is echoed back in the matching [`AppEvent`] so the
/// controller can drop answers to requests it has since superseded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupRequest {
    Resolve { generation: u64, handle: String },
    Blocklist { generation: u64, handle: String },
}

#[derive(Debug, Clone)]
pub enum AppEvent {
    Quit,
    Resolved {
        generation: u64,
        profile: Option<Profile>,
    },
    BlocklistLoaded {
        generation: u64,
        entries: Vec<BlocklistEntry>,
    },
}
