use clap::{Parser, Subcommand};
use postbox::error::Result;
use postbox::schema::SchemaVariant;

mod cli;

#[derive(Parser)]
#[command(name = "postbox")]
#[command(version = "0.1.0")]
#[command(about = "Serve an in-memory message store over GraphQL", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate example configuration
    Init {
        /// Output config file path (if not specified, outputs to stdout)
        #[arg(long)]
        output: Option<String>,
    },

    /// Start GraphQL server
    Serve {
        /// Config file path
        #[arg(long, default_value = "postbox.toml")]
        config: String,

        /// Server port
        #[arg(long, default_value_t = 4000)]
        port: u16,

        /// Schema form to serve (overrides the config file)
        #[arg(long, value_enum)]
        schema: Option<SchemaVariant>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init { output } => {
            cli::init::run(output).await?;
        }
        Commands::Serve {
            config,
            port,
            schema,
        } => {
            cli::serve::run(config, port, schema).await?;
        }
    }

    Ok(())
}
