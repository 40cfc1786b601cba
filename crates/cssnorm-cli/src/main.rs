mod cli;

use std::fs;

use anyhow::{Context, Result};
use clap::Parser;
use cssnorm::{Settings, format_css_with};

use crate::cli::Cli;

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let contents = fs::read_to_string(&cli.filename)
        .with_context(|| format!("failed to read {}", cli.filename.display()))?;

    let settings = Settings {
        ignore_charset: cli.ignore_charset,
        ignore_comments: cli.ignore_comments,
        ignore_empty_rules: cli.ignore_empty_rules,
    };

    let formatted = format_css_with(&contents, settings)?;
    println!("{}", formatted.trim_end());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::cli::Cli;
    use clap::Parser;

    #[test]
    fn parses_filename_and_flags() {
        let cli = Cli::parse_from(["cssnorm", "style.css", "--ignore-empty-rules"]);
        assert_eq!(cli.filename.to_str(), Some("style.css"));
        assert!(cli.ignore_empty_rules);
        assert!(!cli.ignore_charset);
        assert!(!cli.ignore_comments);
    }
}
