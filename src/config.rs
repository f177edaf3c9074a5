use anyhow::{anyhow, Result};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

use crate::constants::{app, net, ui};
use crate::lookup::Endpoints;
use crate::theme::Theme;

/// skyblocks - who blocks this Bluesky handle?
///
/// Type a handle, pick the match, and see the accounts blocking it.
/// Configuration priority: CLI args > Environment variables > Defaults
#[derive(Parser, Debug)]
#[command(name = "skyblocks")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Look up the accounts blocking a Bluesky handle", long_about = None)]
pub struct CliArgs {
    /// Handle to pre-fill the search box with (e.g. "alice")
    pub handle: Option<String>,

    /// Identity resolver endpoint (handle -> DID)
    #[arg(long, env = "SKYBLOCKS_RESOLVE_URL")]
    pub resolve_url: Option<String>,

    /// Profile endpoint (DID -> profile)
    #[arg(long, env = "SKYBLOCKS_PROFILE_URL")]
    pub profile_url: Option<String>,

    /// Blocklist endpoint; the handle is appended as a path segment
    #[arg(long, env = "SKYBLOCKS_BLOCKLIST_URL")]
    pub blocklist_url: Option<String>,

    /// Domain appended to typed handles before resolution
    #[arg(long, env = "SKYBLOCKS_HANDLE_SUFFIX")]
    pub handle_suffix: Option<String>,

    /// Origin header sent with every request (referer is derived from it)
    #[arg(long, env = "SKYBLOCKS_ORIGIN")]
    pub origin: Option<String>,

    /// Quiet period after typing before a lookup starts, in ms (0-5000)
    #[arg(long, env = "SKYBLOCKS_DEBOUNCE_MS")]
    pub debounce_ms: Option<u64>,

    /// Target UI rendering FPS (1-120)
    #[arg(long, env = "RENDER_FPS")]
    pub render_fps: Option<u32>,

    /// Color theme: nord, dos-blue, amber-crt, green-phosphor
    #[arg(long, env = "SKYBLOCKS_THEME", value_parser = clap::value_parser!(Theme))]
    pub theme: Option<Theme>,

    /// File that receives log output (the terminal is busy with the UI)
    #[arg(long, env = "SKYBLOCKS_LOG_FILE")]
    pub log_file: Option<PathBuf>,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub endpoints: Endpoints,
    pub debounce: Duration,
    pub render_fps: u32,
    pub theme: Theme,
    pub log_file: PathBuf,
    pub initial_query: String,
}

/// Validate that a value is within a given range (inclusive)
fn validate_in_range<T>(val: T, min: T, max: T, name: &str) -> Result<T>
where
    T: PartialOrd + std::fmt::Display + Copy,
{
    if val < min || val > max {
        Err(anyhow!("{name} must be in range [{min}, {max}], got {val}"))
    } else {
        Ok(val)
    }
}

/// Load configuration from CLI args and environment variables
pub fn load() -> Result<Config> {
    Config::from_args(CliArgs::parse())
}

impl Config {
    pub fn from_args(args: CliArgs) -> Result<Config> {
        let resolve_url = args
            .resolve_url
            .unwrap_or_else(|| net::DEFAULT_RESOLVE_URL.to_string());
        validate_url(&resolve_url, "SKYBLOCKS_RESOLVE_URL")?;

        let profile_url = args
            .profile_url
            .unwrap_or_else(|| net::DEFAULT_PROFILE_URL.to_string());
        validate_url(&profile_url, "SKYBLOCKS_PROFILE_URL")?;

        let blocklist_url = args
            .blocklist_url
            .unwrap_or_else(|| net::DEFAULT_BLOCKLIST_URL.to_string());
        validate_url(&blocklist_url, "SKYBLOCKS_BLOCKLIST_URL")?;

        let origin = args
            .origin
            .unwrap_or_else(|| net::DEFAULT_ORIGIN.to_string());
        validate_url(&origin, "SKYBLOCKS_ORIGIN")?;

        let debounce_ms = args.debounce_ms.unwrap_or(app::DEFAULT_DEBOUNCE_MS);
        let debounce_ms = validate_in_range(debounce_ms, 0, 5000, "SKYBLOCKS_DEBOUNCE_MS")?;

        let render_fps = args.render_fps.unwrap_or(ui::DEFAULT_RENDER_FPS);
        let render_fps = validate_in_range(render_fps, 1, 120, "RENDER_FPS")?;

        Ok(Config {
            endpoints: Endpoints {
                resolve_url,
                profile_url,
                blocklist_url,
                handle_suffix: args
                    .handle_suffix
                    .unwrap_or_else(|| net::DEFAULT_HANDLE_SUFFIX.to_string()),
                origin,
            },
            debounce: Duration::from_millis(debounce_ms),
            render_fps,
            theme: args.theme.unwrap_or_default(),
            log_file: args
                .log_file
                .unwrap_or_else(|| PathBuf::from("skyblocks.log")),
            initial_query: args.handle.unwrap_or_default().trim().to_string(),
        })
    }

    /// One-line summary for the log at startup
    pub fn summary(&self) -> String {
        format!(
            "resolve={} profile={} blocklist={} suffix={} debounce={}ms fps={} theme={}",
            self.endpoints.resolve_url,
            self.endpoints.profile_url,
            self.endpoints.blocklist_url,
            self.endpoints.handle_suffix,
            self.debounce.as_millis(),
            self.render_fps,
            self.theme,
        )
    }
}

/// Validate URL format (basic check)
fn validate_url(url: &str, name: &str) -> Result<()> {
    if url.is_empty() {
        return Err(anyhow!("{name} cannot be empty"));
    }

    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(())
    } else {
        Err(anyhow!("{name} must start with http:// or https://"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(extra: &[&str]) -> CliArgs {
        let mut argv = vec!["skyblocks"];
        argv.extend_from_slice(extra);
        CliArgs::try_parse_from(argv).unwrap()
    }

    #[test]
    fn explicit_flags_override_defaults() {
        let cfg = Config::from_args(args(&[
            "--resolve-url",
            "http://127.0.0.1:9000/resolve",
            "--debounce-ms",
            "50",
            "--theme",
            "amber",
            "bob",
        ]))
        .unwrap();
        assert_eq!(cfg.endpoints.resolve_url, "http://127.0.0.1:9000/resolve");
        assert_eq!(cfg.debounce, Duration::from_millis(50));
        assert_eq!(cfg.theme, Theme::AmberCrt);
        assert_eq!(cfg.initial_query, "bob");
    }

    #[test]
    fn debounce_out_of_range_is_rejected() {
        let err = Config::from_args(args(&["--debounce-ms", "9000"])).unwrap_err();
        assert!(err.to_string().contains("SKYBLOCKS_DEBOUNCE_MS"));
    }

    #[test]
    fn fps_out_of_range_is_rejected() {
        assert!(Config::from_args(args(&["--render-fps", "0"])).is_err());
    }

    #[test]
    fn non_http_url_is_rejected() {
        let err = Config::from_args(args(&["--blocklist-url", "ftp://example.com"])).unwrap_err();
        assert!(err.to_string().contains("http"));
    }

    #[test]
    fn unknown_theme_fails_to_parse() {
        assert!(CliArgs::try_parse_from(["skyblocks", "--theme", "solarized"]).is_err());
    }

    #[test]
    fn validate_in_range_bounds_are_inclusive() {
        assert_eq!(validate_in_range(1, 1, 10, "X").unwrap(), 1);
        assert_eq!(validate_in_range(10, 1, 10, "X").unwrap(), 10);
        assert!(validate_in_range(11, 1, 10, "X").is_err());
    }
}
