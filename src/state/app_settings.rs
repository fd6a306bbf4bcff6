use log::LevelFilter;
use nfl_api::client::today_token;

pub const DATE_ENV: &str = "NFLTUI_DATE";
pub const EVENT_ENV: &str = "NFLTUI_EVENT";
pub const LOG_ENV: &str = "NFLTUI_LOG";

#[derive(Debug, Default, Clone)]
pub struct AppSettings {
    pub full_screen: bool,
    pub log_level: Option<LevelFilter>,
    /// Scoreboard date token, `YYYYMMDD`.
    pub date: String,
    /// Game to open on startup instead of the first scoreboard event.
    pub event_id: Option<String>,
}

/// What the command line asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliAction {
    Run,
    Help,
    Version,
}

impl AppSettings {
    /// Defaults, overridden by `NFLTUI_*` environment variables.
    pub fn load() -> Self {
        Self::from_env(|key| std::env::var(key).ok())
    }

    fn from_env(var: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| var(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());
        Self {
            full_screen: false,
            log_level: non_empty(LOG_ENV).and_then(|level| level.parse().ok()),
            date: non_empty(DATE_ENV).unwrap_or_else(today_token),
            event_id: non_empty(EVENT_ENV),
        }
    }

    /// Apply command-line flags on top of the loaded settings.
    pub fn apply_args<I>(&mut self, args: I) -> Result<CliAction, String>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-h" | "--help" => return Ok(CliAction::Help),
                "-V" | "--version" => return Ok(CliAction::Version),
                "-d" | "--date" => {
                    self.date = args
                        .next()
                        .map(|d| d.trim().to_owned())
                        .ok_or("--date needs a YYYYMMDD value")?;
                }
                "-e" | "--event" => {
                    self.event_id = Some(
                        args.next()
                            .map(|e| e.trim().to_owned())
                            .ok_or("--event needs an ESPN event id")?,
                    );
                }
                "-f" | "--full-screen" => self.full_screen = true,
                _ => return Err(format!("Unknown argument: {arg}")),
            }
        }
        Ok(CliAction::Run)
    }
}
