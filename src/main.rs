use std::io::{self, BufRead, Write};

use anyhow::{Result, bail};

use chatbot_client::routes::{self, ROUTES, View};
use chatbot_client::{BackendClient, Config};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let mut args = std::env::args().skip(1);
    let path = args.next().unwrap_or_else(|| "/".to_string());
    let personas: Vec<String> = args.collect();

    let config = Config::from_env();
    println!("🤖 chatbot-client talking to {}", config.backend_url());
    let client = BackendClient::new(config);

    match routes::resolve(&path) {
        View::Chat => {
            let persona = personas
                .first()
                .map(String::as_str)
                .unwrap_or("socrates");
            chat(&client, persona).await
        }
        View::Debate => {
            let first = personas
                .first()
                .map(String::as_str)
                .unwrap_or("socrates");
            let second = personas
                .get(1)
                .map(String::as_str)
                .unwrap_or("nietzsche");
            debate(&client, first, second).await
        }
        View::NotFound => {
            let known: Vec<&str> = ROUTES.iter().map(|(p, _)| *p).collect();
            bail!("no view for '{}' (known paths: {})", path, known.join(", "));
        }
    }
}

/// Single-persona REPL: one session, one line per turn.
async fn chat(client: &BackendClient, persona: &str) -> Result<()> {
    let session_id = client.start_session().await?;
    println!("session {session_id} started, chatting with {persona} (empty line quits)");

    let stdin = io::stdin();
    loop {
        print!("you> ");
        io::stdout().flush()?;
        let Some(line) = stdin.lock().lines().next() else {
            break;
        };
        let line = line?;
        if line.trim().is_empty() {
            break;
        }

        let reply = client.send_message(&session_id, &line, persona).await?;
        println!("{persona} [{}]> {}", reply.model, reply.reply);
    }
    Ok(())
}

/// Two personas alternate over one shared session; each reply is fed to
/// the other side as the next user message.
async fn debate(client: &BackendClient, first: &str, second: &str) -> Result<()> {
    let session_id = client.start_session().await?;
    println!("session {session_id} started: {first} vs {second}");
    print!("motion> ");
    io::stdout().flush()?;

    let stdin = io::stdin();
    let Some(line) = stdin.lock().lines().next() else {
        return Ok(());
    };
    let mut current = line?;
    if current.trim().is_empty() {
        return Ok(());
    }

    loop {
        for persona in [first, second] {
            let reply = client.send_message(&session_id, &current, persona).await?;
            println!("{persona} [{}]> {}", reply.model, reply.reply);
            current = reply.reply;
        }

        print!("(enter for another round, q to quit)> ");
        io::stdout().flush()?;
        let Some(line) = stdin.lock().lines().next() else {
            break;
        };
        if line?.trim() == "q" {
            break;
        }
    }
    Ok(())
}
