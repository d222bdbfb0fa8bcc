use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use paywise::commands::{self, Reply, Session};
use paywise::config;
use paywise::utils::RandomOutcome;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    // Logs go to stderr so rendered views on stdout stay readable
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env()
            .add_directive("paywise=info".parse().unwrap()))
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    info!("Starting PayWise demo...");

    let config = match config::Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            return;
        }
    };
    info!(
        "Simulated latency: submit {:?}, load {:?}",
        config.submit_delay, config.load_delay
    );

    let mut session = Session::new(
        config,
        Box::new(RandomOutcome::new()),
        Box::new(RandomOutcome::new()),
    );

    println!("{}", commands::help::render_landing());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                error!("Failed to read input: {}", e);
                break;
            }
        };

        match commands::handle_line(&mut session, &line).await {
            Reply::Show(text) => println!("{}\n", text),
            Reply::Quit => break,
            Reply::Ignore => {}
        }
    }

    info!("Goodbye");
}
