//! Zentrale Konfiguration der Parzellen-Erfassung.
//!
//! `CaptureOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::geo_math::{AREA_DECIMALS, DEFAULT_CIRCLE_STEPS, MAX_AREA_DECIMALS};
use serde::{Deserialize, Serialize};

/// Dateiname der Optionen-Datei neben der Binary.
pub const OPTIONS_FILE_NAME: &str = "parcel_capture.toml";

/// Alle zur Laufzeit änderbaren Erfassungs-Optionen.
/// Wird als `parcel_capture.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaptureOptions {
    /// Schrittzahl der Kreis-Näherung im Pin-Modus
    pub circle_steps: usize,
    /// Nachkommastellen gezeichneter Flächen (Hektar)
    #[serde(default = "default_area_decimals")]
    pub area_decimals: u32,
    /// Ungetaggte Polygone mit `circle_steps + 1` Positionen als Pin-Kreis deuten
    #[serde(default = "default_classify_by_vertex_count")]
    pub classify_by_vertex_count: bool,
}

impl Default for CaptureOptions {
    fn default() -> Self {
        Self {
            circle_steps: DEFAULT_CIRCLE_STEPS,
            area_decimals: AREA_DECIMALS,
            classify_by_vertex_count: true,
        }
    }
}

/// Serde-Default für `area_decimals` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_area_decimals() -> u32 {
    AREA_DECIMALS
}

/// Serde-Default für `classify_by_vertex_count`.
fn default_classify_by_vertex_count() -> bool {
    true
}

impl CaptureOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<Self>(&content) {
                Ok(mut opts) if opts.circle_steps >= 3 => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    if opts.area_decimals > MAX_AREA_DECIMALS {
                        log::warn!(
                            "area_decimals = {} ist zu groß, begrenze auf {}",
                            opts.area_decimals,
                            MAX_AREA_DECIMALS
                        );
                        opts.area_decimals = MAX_AREA_DECIMALS;
                    }
                    opts
                }
                Ok(opts) => {
                    log::warn!(
                        "circle_steps = {} ist zu klein, verwende Standardwerte",
                        opts.circle_steps
                    );
                    Self::default()
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("parcel-capture"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join(OPTIONS_FILE_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let opts = CaptureOptions::load_from_file(std::path::Path::new(
            "/nonexistent/parcel_capture.toml",
        ));
        assert_eq!(opts, CaptureOptions::default());
    }

    #[test]
    fn test_partial_toml_uses_serde_defaults() {
        let opts: CaptureOptions = toml::from_str("circle_steps = 32").unwrap();
        assert_eq!(opts.circle_steps, 32);
        assert_eq!(opts.area_decimals, AREA_DECIMALS);
        assert!(opts.classify_by_vertex_count);
    }

    #[test]
    fn test_oversized_area_decimals_are_clamped_on_load() {
        let path = std::env::temp_dir().join(format!(
            "parcel_capture_decimals_{}.toml",
            std::process::id()
        ));
        std::fs::write(&path, "circle_steps = 64\narea_decimals = 4000000000\n").unwrap();
        let loaded = CaptureOptions::load_from_file(&path);
        let _ = std::fs::remove_file(&path);
        assert_eq!(loaded.area_decimals, MAX_AREA_DECIMALS);
        assert_eq!(loaded.circle_steps, 64);
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let path = std::env::temp_dir().join(format!(
            "parcel_capture_options_{}.toml",
            std::process::id()
        ));
        let opts = CaptureOptions {
            circle_steps: 96,
            area_decimals: 3,
            classify_by_vertex_count: false,
        };
        opts.save_to_file(&path).unwrap();
        let loaded = CaptureOptions::load_from_file(&path);
        let _ = std::fs::remove_file(&path);
        assert_eq!(loaded, opts);
    }
}
