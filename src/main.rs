use std::env;
use std::process::ExitCode;

use colorexpr_rs::{
    CliError, DEFAULT_LOG_LEVEL, LOG_LEVEL_ENV, LOG_PATH_ENV, Result, describe, init_logger,
    parse, parse_log_level,
};

fn setup_logging() -> Result<()> {
    let Ok(path) = env::var(LOG_PATH_ENV) else {
        return Ok(());
    };
    let level = match env::var(LOG_LEVEL_ENV) {
        Ok(name) => parse_log_level(&name)?,
        Err(_) => DEFAULT_LOG_LEVEL,
    };
    init_logger(&path, level)?;
    Ok(())
}

fn run() -> Result<()> {
    setup_logging()?;

    let expressions: Vec<String> = env::args().skip(1).collect();
    if expressions.is_empty() {
        return Err(CliError::NoInput);
    }

    let mut failed = 0;
    for expression in &expressions {
        println!("{expression}");
        let (color, errors) = parse(expression);
        if errors.is_empty() {
            for line in describe(&color).lines() {
                println!("  {line}");
            }
        } else {
            failed += 1;
            for error in &errors {
                println!("  [{}] {}", error.category, error.message);
            }
        }
    }

    if failed > 0 {
        return Err(CliError::Failed {
            failed,
            total: expressions.len(),
        });
    }
    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("colorexpr-demo: {err}");
            ExitCode::FAILURE
        }
    }
}
