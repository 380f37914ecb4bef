use clap::Parser;

use doc_guard::cli::{Cli, ColorChoice};
use doc_guard::config::{Config, load_config};
use doc_guard::linter::Linter;
use doc_guard::discovery::DocDiscovery;
use doc_guard::output::{ColorMode, Reporter, TextReporter};
use doc_guard::session::LintSession;
use doc_guard::{EXIT_CONFIG_ERROR, EXIT_STYLE_VIOLATION, EXIT_SUCCESS};

const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}

fn main() {
    let cli = Cli::parse();
    std::process::exit(run(&cli));
}

fn run(cli: &Cli) -> i32 {
    match run_impl(cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

fn run_impl(cli: &Cli) -> doc_guard::Result<i32> {
    // 1. Load configuration
    let mut config = load_config(&cli.root, cli.config.as_deref(), cli.no_config)?;

    // 2. Apply CLI argument overrides
    apply_cli_overrides(&mut config, cli);

    // 3. Build the rule set
    let linter = Linter::from_config(&config)?;
    let mut session = LintSession::new(&cli.root);

    // 4. Lint a single file, or discover and lint the whole tree
    if let Some(file) = &cli.file {
        linter.lint_file(&mut session, file);
    } else {
        let files = DocDiscovery::from_config(&config.discovery)?.discover(&cli.root);
        linter.lint_all(&mut session, &files);
    }

    // 5. Report
    let reporter = TextReporter::new(color_choice_to_mode(cli.color));
    if !(cli.quiet && session.is_clean()) {
        println!("{}", reporter.render(&session));
    }

    // 6. Exit code
    let strict = cli.strict || config.strict;
    Ok(exit_code_for(&session, strict))
}

fn apply_cli_overrides(config: &mut Config, cli: &Cli) {
    if let Some(ext) = &cli.ext {
        config.discovery.extensions.clone_from(ext);
    }

    config.discovery.exclude.extend(cli.exclude.iter().cloned());

    if cli.gitignore {
        config.discovery.gitignore = true;
    }
}

fn exit_code_for(session: &LintSession, strict: bool) -> i32 {
    if session.has_errors() || (strict && session.has_warnings()) {
        EXIT_STYLE_VIOLATION
    } else {
        EXIT_SUCCESS
    }
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
