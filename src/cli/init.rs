use postbox::config::{Config, SeedMessage, ServerConfig};
use postbox::error::Result;
use postbox::schema::SchemaVariant;

/// Run the init command to generate an example configuration
pub async fn run(output: Option<String>) -> Result<()> {
    let config = example_config();

    if let Some(output_path) = output {
        postbox::config::save_config(&config, &output_path)?;
        tracing::info!("📝 Generated example configuration: {}", output_path);
        tracing::info!(
            "💡 Start the server with 'postbox serve --config {}'",
            output_path
        );
    } else {
        // Output to stdout
        let toml_string = toml::to_string_pretty(&config)?;
        println!("{}", toml_string);
    }

    Ok(())
}

/// Example configuration with one seeded message
pub fn example_config() -> Config {
    Config {
        server: ServerConfig {
            port: 4000,
            bind: "0.0.0.0".to_string(),
            schema: SchemaVariant::Static,
        },
        messages: vec![SeedMessage {
            id: "one".to_string(),
            content: Some("hello world".to_string()),
            author: Some("joey".to_string()),
        }],
    }
}
