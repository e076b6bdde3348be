use bindata_uuid::EncodingVariant;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;

use config::OutputFormat;

#[derive(Parser)]
#[command(name = "buuid")]
#[command(about = "Convert UUIDs between canonical text and legacy BinData encodings")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a UUID as a tagged binary value
    Encode {
        /// UUID text, optionally braced
        uuid: String,
        /// Encoding variant (standard, java, csharp, python)
        #[arg(long)]
        variant: Option<EncodingVariant>,
        /// Output format
        #[arg(long, value_enum)]
        output: Option<OutputFormat>,
    },
    /// Decode a stored value back to a UUID
    Decode {
        /// Base64 payload, BinData(...) literal or Extended JSON
        value: String,
        /// Encoding variant the value was written with
        #[arg(long)]
        variant: Option<EncodingVariant>,
        /// Subtype for a bare base64 payload (defaults to the variant's subtype)
        #[arg(long)]
        subtype: Option<u8>,
        /// Fail if the stored subtype does not match the variant
        #[arg(long)]
        strict: bool,
    },
    /// Show the stored bytes of a value without decoding them
    Hex {
        /// Base64 payload, BinData(...) literal or Extended JSON
        value: String,
        /// Subtype for a bare base64 payload (defaults to the configured variant's subtype)
        #[arg(long)]
        subtype: Option<u8>,
    },
    /// Show a UUID under every encoding
    Show {
        /// UUID text, optionally braced
        uuid: String,
    },
    /// Encode a UUID as a C# legacy base64 payload
    ToBase64 {
        /// UUID text, optionally quoted or tagged
        text: String,
    },
    /// Encode a UUID as a C# legacy BinData literal
    ToBinData {
        /// UUID text, optionally quoted or tagged
        text: String,
    },
    /// List supported encodings
    Variants,
}

/// Entry point for the `buuid` CLI.
///
/// # Environment Variables
/// - `BUUID_DEFAULT_VARIANT`: variant used when `--variant` is omitted (default: "Standard")
/// - `BUUID_OUTPUT`: `shell` or `json` (default: "shell")
/// - `BUUID_LOG`: tracing directive added on top of `RUST_LOG` (default: "buuid=warn")
///
/// Results go to stdout; logs go to stderr.
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    dotenvy::dotenv().ok();
    let config = config::resolve_from_env()?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(config.log_directive().parse()?),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let output = match cli.command {
        Some(Commands::Encode {
            uuid,
            variant,
            output,
        }) => commands::encode(
            &uuid,
            variant.unwrap_or(config.default_variant()),
            output.unwrap_or(config.output()),
        )?,
        Some(Commands::Decode {
            value,
            variant,
            subtype,
            strict,
        }) => commands::decode(
            &value,
            variant.unwrap_or(config.default_variant()),
            subtype,
            strict,
        )?,
        Some(Commands::Hex { value, subtype }) => commands::hex(
            &value,
            subtype.unwrap_or(config.default_variant().subtype()),
        )?,
        Some(Commands::Show { uuid }) => commands::show(&uuid)?,
        Some(Commands::ToBase64 { text }) => commands::to_base64(&text)?,
        Some(Commands::ToBinData { text }) => commands::to_bin_data(&text)?,
        Some(Commands::Variants) => commands::variants(),
        None => "Use 'buuid --help' for commands".to_string(),
    };

    tracing::debug!(len = output.len(), "command complete");
    println!("{}", output);

    Ok(())
}
