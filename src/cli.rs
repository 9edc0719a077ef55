use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};

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

/// Meibo - phonetic contact index
///
/// Classifies contact names into the phonetic buckets a Japanese
/// address book groups by (furigana first, then name fields, with an
/// "その他" catch-all for bare kanji), and prints the resulting
/// jump-to-letter index for a contacts JSON file.
#[derive(Parser, Debug)]
#[command(author = "Meibo Contributors", version, about, long_about = None)]
#[command(styles = get_styles())]
pub struct Args {
    /// Contacts JSON file to index. Falls back to the configured
    /// default contacts file when omitted.
    #[arg(short = 'f', long = "file", help_heading = "Input")]
    pub file: Option<String>,

    /// Classify a single name given as LAST[,FIRST[,NICKNAME]] and
    /// print its bucket instead of reading a contacts file.
    #[arg(long = "classify", help_heading = "Input", value_name = "NAME")]
    pub classify: Option<String>,

    /// Furigana reading for the last name when using --classify.
    #[arg(long = "furigana", help_heading = "Input", value_name = "READING")]
    pub furigana: Option<String>,

    /// Render furigana readings in katakana in the output.
    #[arg(short = 'k', long = "katakana", help_heading = "Display Options")]
    pub katakana: bool,

    /// Update the default contacts file in config.
    #[arg(
        long = "set-contacts-file",
        help_heading = "Configuration",
        value_name = "PATH"
    )]
    pub new_contacts_file: Option<String>,

    /// Update log file path in config. This sets a persistent custom
    /// log file location.
    #[arg(long = "set-log-file", help_heading = "Configuration")]
    pub new_log_file_path: Option<String>,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Enable debug mode which mirrors log output to stdout.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be
    /// written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_parse_classify() {
        let args = Args::parse_from(["meibo", "--classify", "田中,太郎", "--furigana", "たなか"]);
        assert_eq!(args.classify.as_deref(), Some("田中,太郎"));
        assert_eq!(args.furigana.as_deref(), Some("たなか"));
        assert!(args.file.is_none());
    }

    #[test]
    fn test_args_parse_file_and_flags() {
        let args = Args::parse_from(["meibo", "-f", "contacts.json", "-k", "--debug"]);
        assert_eq!(args.file.as_deref(), Some("contacts.json"));
        assert!(args.katakana);
        assert!(args.debug);
    }
}
