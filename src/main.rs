// src/main.rs
use clap::Parser;
use sofifa_lineup::cli::{Args, Command, PageSource};
use sofifa_lineup::config::Config;
use sofifa_lineup::constants::report::SEPARATOR_WIDTH;
use sofifa_lineup::error::AppError;
use sofifa_lineup::fetcher::{create_http_client, fetch_page, read_page_file};
use sofifa_lineup::formation::{formation_ids, slots_for};
use sofifa_lineup::lineup::plan_lineup;
use sofifa_lineup::logging::setup_logging;
use sofifa_lineup::report::{render_json, render_outcome_json, render_outcome_text, render_text};
use std::io::stdout;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    let command = match args.command() {
        Ok(command) => command,
        Err(message) => {
            eprintln!("{message}");
            eprintln!("Run with --help for usage.");
            std::process::exit(2);
        }
    };

    // Listing formations needs neither config nor logging
    if command == Command::ListFormations {
        for id in formation_ids() {
            let codes: Vec<_> = slots_for(id).iter().map(|p| p.code()).collect();
            println!("{id:16} {}", codes.join(" "));
        }
        return Ok(());
    }

    let config = Config::load().await;
    let (log_file_path, log_guard) = setup_logging(&args, config.as_ref().ok()).await?;
    tracing::info!("Logs are being written to: {log_file_path}");

    match command {
        Command::ListFormations => Ok(()),
        Command::ListConfig => Config::display().await,
        Command::UpdateConfig => update_config(&args).await,
        Command::Lineup { source, formation } => {
            let config = config?;
            let result = run_lineup(&args, &config, &source, &formation).await;
            if let Err(e) = &result
                && e.is_network_error()
                && matches!(source, PageSource::Url(_))
            {
                tracing::error!("Fetching the club page failed: {e}");
                eprintln!("{e}");
                eprintln!(
                    "If the page needs a browser, save it and pass it with --arquivo <PATH>."
                );
                drop(log_guard);
                std::process::exit(1);
            }
            result
        }
    }
}

async fn update_config(args: &Args) -> Result<(), AppError> {
    let config_path = Config::get_config_path();
    Config::update_at(&config_path, |config| {
        if let Some(user_agent) = &args.new_user_agent {
            config.user_agent = user_agent.clone();
        }

        if let Some(new_log_path) = &args.new_log_file_path {
            config.log_file_path = Some(new_log_path.clone());
        } else if args.clear_log_file_path {
            config.log_file_path = None;
        }
    })
    .await?;

    if args.new_log_file_path.is_none() && args.clear_log_file_path {
        println!("Custom log file path cleared. Using default location.");
    }
    println!("Config updated successfully!");
    Ok(())
}

async fn run_lineup(
    args: &Args,
    config: &Config,
    source: &PageSource,
    formation: &str,
) -> Result<(), AppError> {
    if !args.json {
        match source {
            PageSource::Url(url) => println!("Buscando jogadores do clube: {url}"),
            PageSource::File(path) => println!("Lendo jogadores do arquivo: {}", path.display()),
        }
        println!("Formação desejada: {formation}");
        println!("{}", "-".repeat(SEPARATOR_WIDTH));
    }

    let html = match source {
        PageSource::Url(url) => {
            let client = create_http_client(config)?;
            fetch_page(&client, url).await?
        }
        PageSource::File(path) => read_page_file(path).await?,
    };

    let lineup = match plan_lineup(&html, formation) {
        Ok(lineup) => lineup,
        Err(e) if e.is_lineup_outcome() => {
            tracing::warn!("No lineup built: {e}");
            if args.json {
                println!("{}", render_outcome_json(formation, &e)?);
            } else {
                render_outcome_text(&mut stdout(), &e)?;
            }
            return Ok(());
        }
        Err(e) => return Err(e),
    };

    if args.json {
        println!("{}", render_json(&lineup)?);
    } else {
        render_text(&mut stdout(), &lineup, !args.plain)?;
    }
    Ok(())
}
