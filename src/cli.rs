use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};
use std::path::PathBuf;

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Best starting lineup from a sofifa.com club roster
///
/// Reads the club's player table, then fills each slot of the chosen
/// formation with the highest-rated player still available for that
/// position. Slots are filled in formation order.
///
/// Examples:
///   sofifa_lineup --clube https://sofifa.com/team/10/manchester-city/ --formacao 4-3-3
///   sofifa_lineup --arquivo city.html --formacao "4-4-2 (fechado)" --json
#[derive(Parser, Debug, Default)]
#[command(author = "Niko Salonen", version, about, long_about = None)]
#[command(styles = get_styles())]
pub struct Args {
    /// Club page URL on sofifa.com.
    #[arg(short = 'c', long = "clube", value_name = "URL", conflicts_with = "arquivo")]
    pub clube: Option<String>,

    /// Read a saved club page instead of fetching it.
    /// Use this for pages rendered and saved by a browser.
    #[arg(short = 'a', long = "arquivo", value_name = "PATH")]
    pub arquivo: Option<PathBuf>,

    /// Formation to fill, e.g. '4-3-3' or '4-3-1-2'. Matched exactly.
    #[arg(short = 'f', long = "formacao", value_name = "FORMATION")]
    pub formacao: Option<String>,

    /// List the known formations and exit.
    #[arg(long = "list-formations", help_heading = "Info")]
    pub list_formations: bool,

    /// Print the lineup as JSON.
    #[arg(long = "json", help_heading = "Display Options")]
    pub json: bool,

    /// Disable colours in the lineup output.
    #[arg(long = "plain", short = 'p', help_heading = "Display Options")]
    pub plain: bool,

    /// Persist the user agent sent with page requests.
    #[arg(long = "set-user-agent", help_heading = "Configuration")]
    pub new_user_agent: Option<String>,

    /// Update log file path in config. This sets a persistent custom log file location.
    #[arg(long = "set-log-file", help_heading = "Configuration")]
    pub new_log_file_path: Option<String>,

    /// Clear the custom log file path from config. This reverts to using the default log location.
    #[arg(long = "clear-log-file", help_heading = "Configuration")]
    pub clear_log_file_path: bool,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Also write logs to the terminal.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}

/// What the invocation asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    ListFormations,
    ListConfig,
    UpdateConfig,
    Lineup {
        source: PageSource,
        formation: String,
    },
}

/// Where the club page comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageSource {
    Url(String),
    File(PathBuf),
}

impl Args {
    /// Whether any config update flag is set.
    pub fn is_config_update(&self) -> bool {
        self.new_user_agent.is_some()
            || self.new_log_file_path.is_some()
            || self.clear_log_file_path
    }

    /// Resolves the flags into a single command.
    ///
    /// Listing and config operations take precedence over building a lineup.
    pub fn command(&self) -> Result<Command, String> {
        if self.list_formations {
            return Ok(Command::ListFormations);
        }
        if self.list_config {
            return Ok(Command::ListConfig);
        }
        if self.is_config_update() {
            return Ok(Command::UpdateConfig);
        }

        let source = match (&self.clube, &self.arquivo) {
            (Some(url), None) => PageSource::Url(url.clone()),
            (None, Some(path)) => PageSource::File(path.clone()),
            (Some(_), Some(_)) => return Err("Use either --clube or --arquivo, not both".to_string()),
            (None, None) => return Err("Missing club page: pass --clube <URL> or --arquivo <PATH>".to_string()),
        };
        let formation = self
            .formacao
            .clone()
            .ok_or_else(|| "Missing formation: pass --formacao <FORMATION>".to_string())?;

        Ok(Command::Lineup { source, formation })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("sofifa_lineup").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_lineup_from_url() {
        let args = parse(&["--clube", "https://sofifa.com/team/10/", "--formacao", "4-3-3"]);
        assert_eq!(
            args.command(),
            Ok(Command::Lineup {
                source: PageSource::Url("https://sofifa.com/team/10/".to_string()),
                formation: "4-3-3".to_string(),
            })
        );
    }

    #[test]
    fn test_lineup_from_file_with_short_flags() {
        let args = parse(&["-a", "club.html", "-f", "4-4-2 (fechado)", "--json", "-p"]);
        assert!(args.json);
        assert!(args.plain);
        assert_eq!(
            args.command(),
            Ok(Command::Lineup {
                source: PageSource::File(PathBuf::from("club.html")),
                formation: "4-4-2 (fechado)".to_string(),
            })
        );
    }

    #[test]
    fn test_clube_and_arquivo_conflict() {
        let result = Args::try_parse_from([
            "sofifa_lineup",
            "--clube",
            "https://sofifa.com/team/10/",
            "--arquivo",
            "club.html",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_formation_is_reported() {
        let args = parse(&["--clube", "https://sofifa.com/team/10/"]);
        assert!(args.command().unwrap_err().contains("--formacao"));
    }

    #[test]
    fn test_missing_source_is_reported() {
        let args = parse(&["--formacao", "4-3-3"]);
        assert!(args.command().unwrap_err().contains("--clube"));
    }

    #[test]
    fn test_listing_takes_precedence() {
        assert_eq!(parse(&["--list-formations"]).command(), Ok(Command::ListFormations));
        assert_eq!(
            parse(&["-l", "--formacao", "4-3-3"]).command(),
            Ok(Command::ListConfig)
        );
        assert_eq!(
            parse(&["--clear-log-file"]).command(),
            Ok(Command::UpdateConfig)
        );
    }
}
