//! speakclip main entry point
//!
//! The event loop on the UI thread consumes three sources:
//! 1. console lines (user actions)
//! 2. recorder events (captured chunks, end of capture)
//! 3. voice catalog change notifications

use anyhow::Context;
use clap::Parser;
use crossbeam_channel::{select, unbounded, Receiver};
use log::{debug, error, info, warn};
use speakclip::clips::{ClipRegistry, ObjectUrlStore, RodioPlayer};
use speakclip::input::{spawn_stdin_reader, Command, ConsolePrompter};
use speakclip::page::{render_page, render_voices, Page, VoiceSelect};
use speakclip::recorder::{CpalDevices, DeviceKind, MediaDevices, RecorderEvent};
use speakclip::speech::{create_synth, populate_voice_list};
use speakclip::state::config::Config;
use speakclip::state::{App, Outcome};
use std::path::PathBuf;
use std::process;
use std::time::Duration;

/// How long a stopped recorder gets to deliver its last events
const FINISH_TIMEOUT: Duration = Duration::from_secs(2);

/// Speak typed text aloud and record microphone clips while it plays
#[derive(Parser, Debug)]
#[command(name = "speakclip", version, about)]
struct Args {
    /// Write debug logs to speakclip.log
    #[arg(short, long)]
    debug: bool,

    /// Config file to use instead of ~/.speakclip.cfg
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the available voices and exit
    #[arg(long)]
    list_voices: bool,

    /// Print the audio devices and exit
    #[arg(long)]
    list_devices: bool,
}

fn main() {
    let args = Args::parse();

    // Initialize logger
    if args.debug {
        use std::fs::OpenOptions;
        match OpenOptions::new()
            .create(true)
            .append(true)
            .open("speakclip.log")
        {
            Ok(log_file) => {
                env_logger::Builder::new()
                    .filter_level(log::LevelFilter::Debug)
                    .target(env_logger::Target::Pipe(Box::new(log_file)))
                    .init();
            }
            Err(e) => {
                eprintln!(
                    "Warning: Failed to open speakclip.log for debug logging: {}",
                    e
                );
                eprintln!("Continuing without file logging...");
                env_logger::Builder::new()
                    .filter_level(log::LevelFilter::Warn)
                    .init();
            }
        }

        info!(
            "speakclip version {} starting (debug mode, logging to speakclip.log)",
            speakclip::VERSION
        );
    } else {
        // Normal mode: only errors go to stderr unless RUST_LOG says otherwise
        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Error)
            .parse_default_env()
            .init();
    }

    if let Err(e) = run(args) {
        error!("Fatal error: {:#}", e);
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    debug!("Initializing speakclip");

    if args.list_devices {
        return list_devices();
    }

    let synth = create_synth().context("starting speech synthesis")?;
    if args.list_voices {
        let mut voices = VoiceSelect::default();
        populate_voice_list(synth.as_ref(), &mut voices);
        print!("{}", render_voices(&voices));
        return Ok(());
    }

    let config = match &args.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("loading configuration")?;
    info!("Config loaded from {:?}", config.path());

    let urls = ObjectUrlStore::new().context("preparing clip storage")?;
    let page = Page::new(ClipRegistry::new(urls, config.download_dir()));
    let mut app = App::new(config, synth, page, Box::new(RodioPlayer::new()));

    let (line_tx, line_rx) = unbounded::<String>();
    let (recorder_tx, recorder_rx) = unbounded::<RecorderEvent>();
    let (voices_tx, voices_rx) = unbounded::<()>();

    app.watch_voices(voices_tx.clone());
    app.init_recorder(&CpalDevices::new(), recorder_tx.clone());
    spawn_stdin_reader(line_tx).context("starting input reader")?;

    println!("speakclip {} ready", speakclip::VERSION);
    println!("Clips download to {}", app.download_dir().display());
    if app.recorder.is_none() {
        println!("Recording unavailable (no usable microphone)");
    }
    println!("Type 'help' for commands");
    print!("{}", render_page(&app.page));

    info!("Entering event loop");
    // Held for the whole loop so neither channel disconnects
    let _senders = (recorder_tx, voices_tx);
    loop {
        select! {
            recv(line_rx) -> line => {
                let Ok(line) = line else {
                    info!("Input closed");
                    return Ok(());
                };
                match app.dispatch(Command::parse(&line)) {
                    Ok(Outcome::Continue) => {}
                    Ok(Outcome::Show(text)) => println!("{}", text.trim_end()),
                    Ok(Outcome::Quit) => return Ok(()),
                    Err(e) => {
                        error!("Command failed: {}", e);
                        println!("{}", e);
                    }
                }

                // File a stopped session's clip before the next command is read
                while app.is_finishing() {
                    match recorder_rx.recv_timeout(FINISH_TIMEOUT) {
                        Ok(event) => deliver(&mut app, event, &line_rx),
                        Err(_) => {
                            warn!("Recorder did not report the end of capture");
                            break;
                        }
                    }
                }
            }
            recv(recorder_rx) -> event => {
                if let Ok(event) = event {
                    deliver(&mut app, event, &line_rx);
                }
            }
            recv(voices_rx) -> notice => {
                if notice.is_ok() {
                    app.handle_voices_changed();
                }
            }
        }
    }
}

fn deliver(app: &mut App, event: RecorderEvent, lines: &Receiver<String>) {
    let mut prompter = ConsolePrompter::new(lines);
    if let Err(e) = app.handle_recorder_event(event, &mut prompter) {
        error!("Failed to store clip: {}", e);
        println!("{}", e);
    }
}

fn list_devices() -> anyhow::Result<()> {
    let devices = CpalDevices::new()
        .enumerate_devices()
        .context("enumerating audio devices")?;

    if devices.is_empty() {
        println!("No audio devices found");
    }
    for device in devices {
        let kind = match device.kind {
            DeviceKind::AudioInput => "input",
            DeviceKind::AudioOutput => "output",
        };
        println!("{:<6}  {}", kind, device.label);
    }
    Ok(())
}
