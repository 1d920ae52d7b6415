//! Parzellen-Erfassung: Replay-Werkzeug.
//!
//! Spielt eine aufgezeichnete Dialog-Sitzung (JSON-Array von Intents)
//! gegen den Controller ab und gibt Erfassungszustand und Ablage aus.
//!
//! Aufruf: `parcel-capture <session.json> [--options <datei.toml>]`

use anyhow::{bail, Context};
use parcel_capture::{AppController, AppIntent, AppState, CaptureOptions};
use std::path::PathBuf;

fn main() -> anyhow::Result<()> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Parzellen-Erfassung v{} startet...", env!("CARGO_PKG_VERSION"));

    let args = ReplayArgs::parse(std::env::args().skip(1))?;
    let options = match &args.options_path {
        Some(path) => CaptureOptions::load_from_file(path),
        None => CaptureOptions::load_from_file(&CaptureOptions::config_path()),
    };

    let content = std::fs::read_to_string(&args.session_path)
        .with_context(|| format!("Sitzung nicht lesbar: {}", args.session_path.display()))?;
    let intents: Vec<AppIntent> = serde_json::from_str(&content)
        .with_context(|| format!("Sitzung fehlerhaft: {}", args.session_path.display()))?;

    let mut state = AppState::new().with_options(options);
    let mut controller = AppController::new();

    for (index, intent) in intents.into_iter().enumerate() {
        log::debug!("Intent #{}: {:?}", index, intent);
        if let Err(e) = controller.handle_intent(&mut state, intent) {
            log::error!("Intent #{} fehlgeschlagen: {:#}", index, e);
        }
        if let Some(hint) = state.ui.last_error.take() {
            log::warn!("Intent #{}: {}", index, hint);
        }
    }

    log::info!(
        "{} Commands ausgeführt, {} Parzellen gespeichert",
        state.command_log.len(),
        state.store.list().len()
    );

    println!(
        "{}",
        serde_json::to_string_pretty(state.dialog.capture.state())?
    );
    println!("{}", serde_json::to_string_pretty(&state.store.list())?);

    Ok(())
}

/// Kommandozeilen-Argumente des Replay-Werkzeugs.
struct ReplayArgs {
    session_path: PathBuf,
    options_path: Option<PathBuf>,
}

impl ReplayArgs {
    fn parse(mut args: impl Iterator<Item = String>) -> anyhow::Result<Self> {
        let mut session_path = None;
        let mut options_path = None;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--options" => {
                    let Some(path) = args.next() else {
                        bail!("--options erwartet einen Dateipfad");
                    };
                    options_path = Some(PathBuf::from(path));
                }
                _ if session_path.is_none() => session_path = Some(PathBuf::from(arg)),
                _ => bail!("Unerwartetes Argument: {arg}"),
            }
        }

        let Some(session_path) = session_path else {
            bail!("Aufruf: parcel-capture <session.json> [--options <datei.toml>]");
        };

        Ok(Self {
            session_path,
            options_path,
        })
    }
}
