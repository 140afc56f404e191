use clap::Parser;
use resolver::MediaResolver;
use socialdown::SocialdownClient;

#[derive(Parser)]
#[command(name = "snapdown")]
#[command(about = "Resolve a social media URL into direct download links", long_about = None)]
struct Cli {
    /// The content URL to resolve
    url: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let cli = Cli::parse();

    let client = SocialdownClient::new(reqwest::Client::new());
    let resolver = MediaResolver::new(client);
    let result = resolver.process_url(&cli.url).await;

    println!("{}", serde_json::to_string_pretty(&result)?);

    if !result.success {
        std::process::exit(1);
    }
    Ok(())
}
