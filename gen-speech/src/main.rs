//! gen-speech - Read text aloud as mp3 using a remote text-to-speech API

mod config;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use config::GenSpeechConfig;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{Read, Write};
use std::path::PathBuf;
use tts_client::{Gender, SpeechClient, SpeechOptions, Speed, languages};

#[derive(Parser, Debug)]
#[command(name = "gen-speech")]
#[command(about = "Read text to mp3 using NAVER Papago's text-to-speech API", long_about = None)]
#[command(version)]
struct Args {
    /// Text to speak ('-' reads standard input)
    text: Vec<String>,

    /// Read the text from a file instead ('-' reads standard input)
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Write the mp3 to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Reading speed: slow, normal, fast or an integer between -5 (fast) and 5 (slow)
    #[arg(short, long)]
    speed: Option<String>,

    /// IETF language tag to speak in
    #[arg(short, long)]
    lang: Option<String>,

    /// Voice gender: f or m
    #[arg(short, long)]
    gender: Option<String>,

    /// Top-level domain of the API host, i.e. https://dict.naver.<tld>
    #[arg(short, long)]
    tld: Option<String>,

    /// Disable strict language tag checking
    #[arg(long)]
    nocheck: bool,

    /// Show debug information
    #[arg(long, default_value_t = false)]
    debug: bool,

    /// Subcommands
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List supported language tags and exit
    Langs,
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigAction {
    /// Show current configuration
    Show,
    /// Set the default language
    SetLang {
        /// IETF language tag
        lang: String,
    },
    /// Set the default voice gender
    SetGender {
        /// "f" or "m"
        gender: String,
    },
    /// Set the default reading speed
    SetSpeed {
        /// "slow", "normal", "fast" or an integer between -5 and 5
        speed: String,
    },
    /// Set the default API top-level domain
    SetTld {
        /// e.g. "com"
        tld: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match &args.command {
        Some(Commands::Langs) => {
            for (tag, name) in languages() {
                println!("  {tag}: {name}");
            }
            return Ok(());
        }
        Some(Commands::Config { action }) => {
            return handle_config_command(action);
        }
        None => {}
    }

    let text = read_input(&args)?;

    let defaults = GenSpeechConfig::load().context("Failed to load configuration")?;
    let lang = args.lang.clone().unwrap_or(defaults.lang);
    let gender: Gender = args.gender.as_deref().unwrap_or(&defaults.gender).parse()?;
    let speed: Speed = args.speed.as_deref().unwrap_or(&defaults.speed).parse()?;
    let tld = args.tld.clone().unwrap_or(defaults.tld);

    let options = SpeechOptions::new()
        .with_lang(&lang)
        .with_gender(gender)
        .with_speed(speed)
        .with_tld(&tld)
        .with_lang_check(!args.nocheck);
    let client = SpeechClient::new(options)?;

    let chunks = client.segment(&text)?;
    log::debug!("fragments: {}", chunks.len());

    match &args.output {
        Some(path) => {
            let mut out = std::fs::File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            let pb = fragment_progress(chunks.len())?;

            if let Err(e) = write_fragments(&client, &chunks, &mut out, pb.as_ref()).await {
                // don't leave a truncated mp3 behind
                let _ = std::fs::remove_file(path);
                return Err(e);
            }

            if let Some(pb) = &pb {
                pb.finish_and_clear();
            }
            eprintln!("Saved to {}", path.display());
        }
        None => {
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            write_fragments(&client, &chunks, &mut out, None).await?;
        }
    }

    Ok(())
}

/// Fetch each fragment and append its audio, in fragment order.
async fn write_fragments(
    client: &SpeechClient,
    chunks: &[String],
    out: &mut dyn Write,
    pb: Option<&ProgressBar>,
) -> Result<()> {
    for chunk in chunks {
        let bytes = client.fetch(chunk).await?;
        out.write_all(&bytes)?;
        if let Some(pb) = pb {
            pb.inc(1);
        }
    }
    Ok(())
}

/// Progress bar over fragments; skipped for a single fragment.
fn fragment_progress(total: usize) -> Result<Option<ProgressBar>> {
    if total <= 1 {
        return Ok(None);
    }
    let pb = ProgressBar::new(total as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")?,
    );
    Ok(Some(pb))
}

/// Resolve the input text from the positional argument, --file, or stdin.
fn read_input(args: &Args) -> Result<String> {
    if !args.text.is_empty() && args.file.is_some() {
        bail!("<text> and -f/--file <file> can't be used together");
    }

    if let Some(path) = &args.file {
        if path.as_os_str() == "-" {
            return read_stdin();
        }
        return std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()));
    }

    if args.text.is_empty() || (args.text.len() == 1 && args.text[0] == "-") {
        return read_stdin();
    }

    Ok(args.text.join(" "))
}

fn read_stdin() -> Result<String> {
    let mut text = String::new();
    std::io::stdin()
        .read_to_string(&mut text)
        .context("Failed to read standard input")?;
    Ok(text)
}

/// Handle config subcommands
fn handle_config_command(action: &ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Show => {
            let config = GenSpeechConfig::load()?;
            println!("Configuration ({})", GenSpeechConfig::config_path()?.display());
            println!("  lang: {}", config.lang);
            println!("  gender: {}", config.gender);
            println!("  speed: {}", config.speed);
            println!("  tld: {}", config.tld);
        }
        ConfigAction::SetLang { lang } => {
            let lang = lang.to_lowercase();
            if !tts_client::voice::is_supported(&lang) {
                bail!(
                    "'{lang}' is not a supported language. Run 'gen-speech langs' to list them."
                );
            }
            let mut config = GenSpeechConfig::load()?;
            config.lang = lang.clone();
            config.save()?;
            println!("Default language set to: {lang}");
        }
        ConfigAction::SetGender { gender } => {
            // validate before persisting
            gender.parse::<Gender>()?;
            let mut config = GenSpeechConfig::load()?;
            config.gender = gender.to_lowercase();
            config.save()?;
            println!("Default gender set to: {gender}");
        }
        ConfigAction::SetSpeed { speed } => {
            speed.parse::<Speed>()?;
            let mut config = GenSpeechConfig::load()?;
            config.speed = speed.clone();
            config.save()?;
            println!("Default speed set to: {speed}");
        }
        ConfigAction::SetTld { tld } => {
            let mut config = GenSpeechConfig::load()?;
            config.tld = tld.clone();
            config.save()?;
            println!("Default tld set to: {tld}");
        }
    }
    Ok(())
}
