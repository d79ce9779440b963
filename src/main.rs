use clap::{Parser, Subcommand};
use domain::error::Error;
use domain::gateway::{telex::TelexClient, zoom::ZoomClient};
use domain::parse_meeting_input;
use log::error;
use meeting_auth::http::HttpClientBuilder;
use service::{config::Config, logging::Logger};
use std::time::Duration;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    config: Config,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Look up a meeting and print its join URL, topic and start time
    Meeting {
        /// Zoom invite link or numeric meeting ID
        meeting: String,
    },
    /// Print the transcript of a recorded meeting
    Transcript {
        /// Zoom invite link or numeric meeting ID
        meeting: String,

        /// Print the WebVTT document instead of plain text
        #[arg(long)]
        raw: bool,
    },
    /// Post a summary to the configured Telex channel
    Notify {
        /// Summary text
        text: String,
    },
}

#[tokio::main]
async fn main() {
    // Load .env file first
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    if let Err(e) = Logger::init_logger(&cli.config) {
        eprintln!("Failed to initialize logger: {e}");
    }

    if let Err(e) = cli.config.validate() {
        error!("Invalid configuration: {e}");
        std::process::exit(1);
    }

    if let Err(e) = run(cli.config, cli.command).await {
        error!("{e}");
        std::process::exit(1);
    }
}

async fn run(config: Config, command: Command) -> Result<(), Error> {
    let client = HttpClientBuilder::new()
        .with_timeout(Duration::from_secs(config.http_timeout_secs))
        .with_user_agent(format!(
            "{}/{}",
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION")
        ))
        .build()?;

    match command {
        Command::Meeting { meeting } => {
            let reference = parse_meeting_input(&meeting)?;
            let zoom = ZoomClient::from_config(&config, client)?;

            match zoom.get_join_url(&reference.meeting_id).await? {
                Some(details) => {
                    println!("Topic:      {}", details.topic);
                    if let Some(start_time) = details.start_time {
                        println!("Start time: {}", start_time.to_rfc3339());
                    }
                    if let Some(duration) = details.duration {
                        println!("Duration:   {duration} min");
                    }
                    println!("Join URL:   {}", details.join_url);
                }
                None => println!("Meeting {} could not be found", reference.meeting_id),
            }
        }
        Command::Transcript { meeting, raw } => {
            let reference = parse_meeting_input(&meeting)?;
            let zoom = ZoomClient::from_config(&config, client)?;
            let transcript = zoom.get_transcript(&reference.meeting_id).await?;

            if raw {
                println!("{}", transcript.text);
            } else {
                println!("{}", transcript.plain_text());
            }
        }
        Command::Notify { text } => {
            let telex = TelexClient::from_config(&config, client)?;
            telex.send_summary(&text).await;
        }
    }

    Ok(())
}
