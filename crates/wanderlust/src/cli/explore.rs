//! Interactive explorer loop.

use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, instrument};
use wanderlust::{
    Explorer, IoError, Outcome, Session, WanderlustConfig, WanderlustResult, mistral_generator,
};

const BANNER: &str = "Type `help` for commands, `quit` to leave.";

/// Read commands from standard input until `quit` or end of input.
#[instrument(skip(config), fields(location = %config.generation.location))]
pub async fn explore(config: &WanderlustConfig) -> WanderlustResult<()> {
    let generator = mistral_generator(config)?;
    let mut explorer = Explorer::new(generator, Session::from(&config.session));

    println!(
        "Welcome, {}! Wandering around {}.",
        explorer.session().username(),
        config.generation.location
    );
    println!("{BANNER}");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("wanderlust> ");
        std::io::stdout()
            .flush()
            .map_err(|e| IoError::new(format!("Failed to flush prompt: {}", e)))?;

        let Some(line) = lines
            .next_line()
            .await
            .map_err(|e| IoError::new(format!("Failed to read command: {}", e)))?
        else {
            break;
        };

        match explorer.handle_line(&line).await {
            Outcome::Continue(text) => print!("{text}"),
            Outcome::Quit => break,
        }
    }

    info!(
        points = explorer.session().points(),
        completed = explorer.session().completed_count(),
        "Explorer finished"
    );
    println!();
    Ok(())
}
