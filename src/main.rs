use chrono::Local;
use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::info;
use std::fs;
use std::io;
use std::path::PathBuf;

mod cli;

use cli::Cli;
use cli::commands::Commands;
use stampcard::config::Config;
use stampcard::manager::LoyaltyManager;
use stampcard::notify::{LinkWriter, MessageSender, Notification, Notifier};
use stampcard::screen::Screen;
use stampcard::storage::JsonlStore;

fn setup_logging(config: &Config) -> Result<()> {
    // Create log directory
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("stampcard")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join("stampcard.log");

    // Setup env_logger with file output
    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(config.log_level.as_str()))
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized, writing to: {}", log_file.display());
    Ok(())
}

fn run_application(cli: &Cli, config: &Config) -> Result<()> {
    info!("Starting application");

    if cli.is_verbose() {
        println!("{}", "Verbose mode enabled".yellow());
        println!("Data directory: {}", config.storage.data_dir.display());
    }

    let store = JsonlStore::new(&config.storage.data_dir).context("Failed to open data directory")?;
    let manager = LoyaltyManager::new(&store, Notifier::from_config(config));

    let command = match &cli.command {
        None => return show_screen(&Screen::Dashboard, &manager, config),
        Some(command) => command,
    };

    if let Some(screen) = command.screen() {
        return show_screen(&screen, &manager, config);
    }

    match command {
        Commands::Add { name, phone } => handle_add_command(&manager, name, phone),
        Commands::Visit { phone, name } => handle_visit_command(&manager, phone, name.as_deref()),
        Commands::Redeem { id } => handle_redeem_command(&manager, id),
        Commands::Notify { id } => handle_notify_command(&manager, id),
        other => eyre::bail!("Unhandled command: {:?}", other),
    }
}

fn show_screen(screen: &Screen, manager: &LoyaltyManager<'_, JsonlStore>, config: &Config) -> Result<()> {
    info!("Showing screen: {:?}", screen);
    let text = screen
        .render(manager, config, &Local::now())
        .context("Failed to load screen")?;
    print!("{}", text);
    Ok(())
}

fn send(notification: &Notification) -> Result<()> {
    println!("{} {}", "Message:".cyan(), notification.message);
    println!("{}", "Open to send:".cyan());
    let mut sender = LinkWriter::new(io::stdout());
    sender.send(notification).context("Failed to hand off message")?;
    Ok(())
}

fn handle_add_command(manager: &LoyaltyManager<'_, JsonlStore>, name: &str, phone: &str) -> Result<()> {
    info!("Adding customer: {} ({})", name, phone);
    let customer = manager
        .create_customer(name, phone)
        .context("Failed to add customer")?;
    println!("{} {} [{}]", "Welcome".green(), customer.name, customer.id);
    Ok(())
}

fn handle_visit_command(manager: &LoyaltyManager<'_, JsonlStore>, phone: &str, name: Option<&str>) -> Result<()> {
    info!("Checking in phone: {}", phone);
    let check_in = manager.check_in(phone, name).context("Failed to log visit")?;
    let customer = &check_in.logged.customer;

    if check_in.created {
        println!("{} {} [{}]", "New customer:".green(), customer.name, customer.id);
    }
    println!(
        "{} {} now has {} visit(s)",
        "Visit logged:".green(),
        customer.name,
        customer.visits
    );
    send(&check_in.logged.notification)
}

fn handle_redeem_command(manager: &LoyaltyManager<'_, JsonlStore>, id: &str) -> Result<()> {
    info!("Redeeming reward for: {}", id);
    let customer = manager.redeem_reward(id).context("Failed to redeem reward")?;
    println!(
        "{} {} ({} rewards so far)",
        "Reward given to".green(),
        customer.name,
        customer.rewards_redeemed
    );
    Ok(())
}

fn handle_notify_command(manager: &LoyaltyManager<'_, JsonlStore>, id: &str) -> Result<()> {
    info!("Encouraging customer: {}", id);
    let notification = manager.encourage(id).context("Failed to prepare message")?;
    send(&notification)
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;
    config.validate().context("Invalid configuration")?;

    setup_logging(&config).context("Failed to setup logging")?;
    info!("Starting with config from: {:?}", cli.config);

    // Run the main application logic
    run_application(&cli, &config).context("Application failed")?;

    Ok(())
}
