//! `chat` command: interactive assistant session

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use colored::Colorize;

use crate::chat::{ChatSession, Role};
use crate::cli::{output, resolve_config, ChatArgs};
use crate::gateway::AnalysisGateway;

pub async fn run_chat(args: ChatArgs) -> anyhow::Result<()> {
    let config = resolve_config(&args.config, &args.base_url)?;
    crate::logging::init(&config.logging);

    let gateway = Arc::new(AnalysisGateway::new(config.service.base_url.clone()));
    let session = ChatSession::new(gateway);

    println!("Finboard assistant. Type a message, or 'quit' to leave.");
    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let message = line.trim();
        if message == "quit" || message == "exit" {
            break;
        }

        if let Err(e) = session.send(message).await {
            eprintln!("{}", output::format_notice(&e.to_string()));
            continue;
        }

        if let Some(turn) = session
            .turns()
            .iter()
            .rev()
            .find(|turn| turn.role == Role::Bot)
        {
            println!("{}", turn.content);
        }
        let quick_replies = session.quick_replies();
        if !quick_replies.is_empty() {
            println!("{} {}", "suggested:".dimmed(), quick_replies.join(" | "));
        }
        println!(
            "{}",
            format!(
                "messages: {}  topics: {}",
                session.user_turn_count(),
                session.topic_count()
            )
            .dimmed()
        );
    }
    Ok(())
}
