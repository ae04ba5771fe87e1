use clap::{Parser, Subcommand};
use serde_json::Value;

#[derive(Parser)]
#[command(name = "mcp-cli")]
#[command(about = "Query MCP status and run server tests through the admin backend", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8080")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show MCP status reported by the AI engine
    Status,
    /// Test a single MCP server
    Test {
        /// Server identifier
        server_id: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let base = cli.url.trim_end_matches('/');

    let res = match cli.command {
        Commands::Status => {
            client.get(format!("{}/api/mcp/status", base))
                .send()
                .await?
        }
        Commands::Test { server_id } => {
            let mut url = reqwest::Url::parse(&format!("{}/api/mcp/servers", base))?;
            url.path_segments_mut()
                .map_err(|_| "admin URL cannot be a base")?
                .extend([server_id.as_str(), "test"]);
            client.post(url).send().await?
        }
    };

    print_response(res).await
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    let text = res.text().await?;

    // A failed server test comes back as 500 with a JSON result, so show any JSON body.
    match serde_json::from_str::<Value>(&text) {
        Ok(json) => {
            if !status.is_success() {
                eprintln!("Admin API returned status {}", status);
            }
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        Err(_) => {
            eprintln!("Error: Admin API returned status {}", status);
            eprintln!("Response: {}", text);
        }
    }
    Ok(())
}
