//! dsnotify - datastore capacity alert notification handler
//!
//! A command-line tool that formats a storage-capacity alert and delivers
//! it by email and to a local HP Operations Manager agent.

use clap::Parser;
use dsnotify::cli::args::{generate_completions, Cli, Commands};
use dsnotify::commands::{run_render, run_send};
use dsnotify::config::ConfigBuilder;
use dsnotify::error::{AppError, NotifyError};

fn main() {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Set log level based on verbose flag
    if cli.verbose {
        log::set_max_level(log::LevelFilter::Debug);
    }

    // Run the appropriate command
    let result = run(&cli);

    if let Err(e) = result {
        log::error!("{}", e);
        print_error(&e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), AppError> {
    match &cli.command {
        Commands::Send(args) => {
            let config = build_config(cli)
                .with_email_flag(args.email.clone())
                .with_to(args.to.clone())
                .with_from(args.from.clone())
                .with_severity(args.severity.map(Into::into))
                .with_application(args.application.clone())
                .with_agent_path(args.agent_path.clone())
                .with_appliance(args.appliance.clone())
                .with_signature(args.signature.clone())
                .build();

            run_send(args, &config)
        }

        Commands::Render(args) => {
            let config = build_config(cli).build();
            run_render(args, &config)
        }

        Commands::Completions { shell } => {
            generate_completions(*shell);
            Ok(())
        }
    }
}

fn build_config(cli: &Cli) -> ConfigBuilder {
    ConfigBuilder::new()
        .with_file(cli.config.as_deref())
        .with_verbose(cli.verbose.then_some(true))
        .with_dry_run(cli.dry_run.then_some(true))
}

fn print_error(err: &AppError) {
    eprintln!("Error: {}", err);

    // Print helpful hints for common errors
    match err {
        AppError::Notify(NotifyError::MissingBinary(path)) => {
            eprintln!();
            eprintln!(
                "Hint: the operations agent binary was not found at {}.",
                path.display()
            );
            eprintln!("      Install the HP Operations agent or set [agent] path in the config.");
        }
        AppError::Notify(NotifyError::MissingAddress(_)) => {
            eprintln!();
            eprintln!("Hint: email delivery is enabled but an address is not configured.");
            eprintln!("      Set [email] to/from in the config or pass --to/--from.");
        }
        AppError::Input(_) => {
            eprintln!();
            eprintln!("Hint: the trigger document must be JSON with an 'alert_description',");
            eprintln!("      a 'server' identity, and an optional 'storage' snapshot.");
        }
        _ => {}
    }
}
