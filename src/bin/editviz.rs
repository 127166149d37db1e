//! CLI for EditViz - AI image editing.

use clap::{Args, Parser, Subcommand};
use editviz::{
    Credential, EditRequest, GeminiEditor, GeminiModel, ImageEditor, RequestHandler, Settings,
    SourceImage,
};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "editviz")]
#[command(about = "Edit images with a text instruction via Gemini")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// API key (falls back to GEMINI_API_KEY / GOOGLE_API_KEY)
    #[arg(long, global = true)]
    api_key: Option<String>,

    /// Model id (e.g. gemini-2.0-flash-exp-image-generation, nano-banana)
    #[arg(long, global = true)]
    model: Option<String>,

    /// Override the API base URL
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the web editor page
    Serve(ServeArgs),

    /// Edit one image from the command line
    Edit(EditArgs),

    /// Check that the API key and model are usable
    Check,
}

#[derive(Args)]
struct ServeArgs {
    /// Address to listen on (default from EDITVIZ_BIND or 127.0.0.1:8501)
    #[arg(long)]
    bind: Option<SocketAddr>,

    /// Maximum upload size in bytes
    #[arg(long)]
    max_upload_bytes: Option<usize>,
}

#[derive(Args)]
struct EditArgs {
    /// Input image (JPEG or PNG)
    input: PathBuf,

    /// Description of the desired edit
    #[arg(short, long, default_value = "")]
    prompt: String,

    /// Where to save the edited image
    #[arg(short, long, default_value = "edited.png")]
    output: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut settings = Settings::load();
    if let Some(key) = cli.api_key.as_deref().and_then(Credential::new) {
        settings.api_key = Some(key);
    }
    if cli.model.is_some() {
        settings.model = cli.model.clone();
    }
    if cli.base_url.is_some() {
        settings.base_url = cli.base_url.clone();
    }

    let editor = build_editor(&settings)?;

    match cli.command {
        Commands::Serve(args) => {
            if let Some(bind) = args.bind {
                settings.bind = bind;
            }
            if let Some(max) = args.max_upload_bytes {
                settings.max_upload_bytes = max;
            }
            serve(settings, editor).await?;
        }
        Commands::Edit(args) => {
            edit(args, &settings, editor, cli.json).await?;
        }
        Commands::Check => {
            check(&settings, editor.as_ref(), cli.json).await?;
        }
    }

    Ok(())
}

fn build_editor(settings: &Settings) -> anyhow::Result<Arc<GeminiEditor>> {
    let mut builder = GeminiEditor::builder();
    if let Some(ref model) = settings.model {
        builder = builder.model(model.parse::<GeminiModel>()?);
    }
    if let Some(ref url) = settings.base_url {
        builder = builder.base_url(url);
    }
    Ok(Arc::new(builder.build()?))
}

async fn serve(settings: Settings, editor: Arc<GeminiEditor>) -> anyhow::Result<()> {
    if settings.api_key.is_none() {
        tracing::info!("no API key configured, users must enter one in the page");
    }
    let handler = RequestHandler::new(editor).with_fallback_credential(settings.api_key);
    editviz::web::serve(settings.bind, handler, settings.max_upload_bytes).await?;
    Ok(())
}

async fn edit(
    args: EditArgs,
    settings: &Settings,
    editor: Arc<GeminiEditor>,
    json_output: bool,
) -> anyhow::Result<()> {
    let model = editor.model().to_string();
    let handler = RequestHandler::new(editor).with_fallback_credential(settings.api_key.clone());
    let credential = handler.resolve_credential(None)?;

    let image = SourceImage::from_bytes(std::fs::read(&args.input)?)?;
    let request = EditRequest::new(&args.prompt, image);
    let result = handler.run(&credential, &request).await?;

    if let Some(ref image) = result.image {
        image.save(&args.output)?;
    }

    if json_output {
        let output = serde_json::json!({
            "success": true,
            "input": args.input.display().to_string(),
            "output": result.image.as_ref().map(|_| args.output.display().to_string()),
            "size_bytes": result.image.as_ref().map(|i| i.size()),
            "format": result.image.as_ref().map(|i| i.format.extension()),
            "text": result.text,
            "model": model,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        if let Some(ref image) = result.image {
            println!(
                "Edited image: {} ({} bytes) via {}",
                args.output.display(),
                image.size(),
                model
            );
        }
        if let Some(ref text) = result.text {
            println!("{}", text);
        }
        if result.is_empty() {
            println!("The model returned neither text nor an image.");
        }
    }

    Ok(())
}

async fn check(
    settings: &Settings,
    editor: &GeminiEditor,
    json_output: bool,
) -> anyhow::Result<()> {
    let credential = settings
        .api_key
        .clone()
        .ok_or(editviz::EditVizError::MissingCredential)?;
    let outcome = editor.health_check(&credential).await;

    if json_output {
        let output = serde_json::json!({
            "editor": editor.kind().to_string(),
            "model": editor.model().to_string(),
            "ok": outcome.is_ok(),
            "error": outcome.as_ref().err().map(|e| e.to_string()),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if outcome.is_ok() {
        println!("✓ {} ({}) is reachable", editor.name(), editor.model());
    }

    outcome?;
    Ok(())
}
