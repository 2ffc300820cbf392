use std::io;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use feedgen::cli::{Cli, Commands};
use feedgen::config::Config;
use feedgen::domain::Reply;
use feedgen::errors::FeedGenResult;
use feedgen::services::{
    dispatch_lines, LinkService, NotebrookTransport, ReplyTransport, StdoutTransport,
};
use feedgen::sources::SourceRegistry;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> FeedGenResult<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::from_env()?;

    // Initialize source registry
    let source_registry = SourceRegistry::from_config(&config)?;
    let service = LinkService::new(source_registry);

    match cli.command {
        Commands::Generate { url, json, notify } => {
            let transport = transport(&config, notify)?;
            cmd_generate(&url, &service, transport.as_ref(), json)
        }
        Commands::Listen { notify } => {
            let transport = transport(&config, notify)?;
            cmd_listen(&service, transport.as_ref())
        }
        Commands::Info => StdoutTransport.deliver(&service.help()),
    }
}

fn transport(config: &Config, notify: bool) -> FeedGenResult<Box<dyn ReplyTransport>> {
    if notify {
        Ok(Box::new(NotebrookTransport::new(config.notebrook()?)?))
    } else {
        Ok(Box::new(StdoutTransport))
    }
}

fn cmd_generate(
    url: &str,
    service: &LinkService,
    transport: &dyn ReplyTransport,
    json: bool,
) -> FeedGenResult<()> {
    match service.generate(url) {
        Ok(link) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&link)?);
                Ok(())
            } else {
                transport.deliver(&Reply::success(&link))
            }
        }
        Err(e) => {
            transport.deliver(&Reply::from_error(&e))?;
            Err(e)
        }
    }
}

fn cmd_listen(service: &LinkService, transport: &dyn ReplyTransport) -> FeedGenResult<()> {
    let stdin = io::stdin();
    dispatch_lines(service, stdin.lock(), transport)?;
    Ok(())
}
