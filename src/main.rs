use anyhow::{Context, Result};
use bilingual_site::config::Config;
use bilingual_site::form::SubmitEvent;
use bilingual_site::prefs::FilePreferenceStore;
use bilingual_site::ui::{lock_ui, MemoryDocument, SharedUi, UiTree};
use bilingual_site::Site;
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};

const HELP: &str = "Commands:
  toggle             switch language
  phone <text>       type into the phone field
  fill k=v;k=v       set form field values
  submit             submit the contact form
  donate             click a donate button
  show               print the page as JSON
  metrics            print activity metrics
  quit               exit";

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored when absent)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("bilingual_site=info".parse()?),
        )
        .init();

    let config = Config::from_env()?;

    let page = std::fs::read_to_string(&config.page_file)
        .with_context(|| format!("Failed to read page {}", config.page_file.display()))?;
    let document = MemoryDocument::from_json(&page).context("Failed to parse page fixture")?;
    let ui: SharedUi<MemoryDocument> = Arc::new(Mutex::new(document));

    let prefs = FilePreferenceStore::open(&config.prefs_file);
    let mut site = Site::new(Arc::clone(&ui), Box::new(prefs), config.banner_timeout);
    site.init();

    println!("{}", HELP);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        let (command, arg) = line.split_once(' ').unwrap_or((line, ""));

        match command {
            "" => continue,
            "toggle" => {
                let locale = site.toggle_language();
                println!("language: {}", locale);
            }
            "phone" => {
                set_field(&ui, "phone", arg);
                match site.phone_input() {
                    Some(value) => println!("phone: {}", value),
                    None => println!("no phone field on page"),
                }
            }
            "fill" => {
                for pair in arg.split(';').filter(|p| !p.trim().is_empty()) {
                    match pair.split_once('=') {
                        Some((field, value)) => set_field(&ui, field.trim(), value.trim()),
                        None => warn!("Ignoring malformed field assignment: {}", pair),
                    }
                }
            }
            "submit" => {
                let outcome = site.submit(&mut SubmitEvent::new());
                println!("submit: {:?}", outcome);
                if let Some(banner) = lock_ui(&ui).banners.first() {
                    println!("banner: {}", banner.text);
                }
            }
            "donate" => println!("{}", site.donate_clicked()),
            "show" => println!("{}", serde_json::to_string_pretty(&*lock_ui(&ui))?),
            "metrics" => println!("{}", serde_json::to_string_pretty(&site.metrics())?),
            "quit" | "exit" => break,
            _ => println!("{}", HELP),
        }
    }

    info!("Session metrics: {:?}", site.metrics());
    Ok(())
}

fn set_field(ui: &SharedUi<MemoryDocument>, id: &str, value: &str) {
    let mut doc = lock_ui(ui);
    match doc.find_by_id(id) {
        Some(node) => doc.set_value(node, value),
        None => warn!("No field '{}' on page", id),
    }
}
