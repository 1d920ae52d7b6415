//! Stammdaten einer Parzelle (Dialog-Schritt 1).

use serde::{Deserialize, Serialize};

/// Angebaute Kultur. Geschlossene Auswahl des Dialogs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Culture {
    Soja,
    Milho,
    #[serde(rename = "Algodão")]
    Algodao,
}

impl Culture {
    /// Alle Optionen in Anzeigereihenfolge.
    pub const ALL: [Culture; 3] = [Culture::Soja, Culture::Milho, Culture::Algodao];

    /// Bezeichnung wie im Datensatz gespeichert.
    pub fn label(self) -> &'static str {
        match self {
            Culture::Soja => "Soja",
            Culture::Milho => "Milho",
            Culture::Algodao => "Algodão",
        }
    }

    /// Sucht die Kultur zu einer gespeicherten Bezeichnung.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }
}

/// Pflicht- und Zusatzfelder eines Parzellen-Datensatzes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParcelDetails {
    /// Zugehöriger Kunde (Lead)
    pub lead_id: Option<u64>,
    /// Name der Parzelle
    pub name: String,
    /// Gemeinde
    pub city: Option<String>,
    /// Angebaute Kultur
    pub culture: Option<Culture>,
    /// Freitext-Bemerkung
    pub obs: String,
}

impl ParcelDetails {
    /// Erstes fehlendes Pflichtfeld, `None` wenn vollständig.
    pub fn missing_field(&self) -> Option<&'static str> {
        if self.lead_id.is_none() {
            return Some("lead");
        }
        if self.name.trim().is_empty() {
            return Some("name");
        }
        if self.city.as_deref().is_none_or(|c| c.trim().is_empty()) {
            return Some("city");
        }
        if self.culture.is_none() {
            return Some("culture");
        }
        None
    }

    /// `true`, wenn alle Pflichtfelder gesetzt sind.
    pub fn is_complete(&self) -> bool {
        self.missing_field().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> ParcelDetails {
        ParcelDetails {
            lead_id: Some(7),
            name: "Fazenda Boa Vista".to_string(),
            city: Some("Patos de Minas".to_string()),
            culture: Some(Culture::Soja),
            obs: String::new(),
        }
    }

    #[test]
    fn test_complete_details() {
        assert!(complete().is_complete());
    }

    #[test]
    fn test_blank_name_is_missing() {
        let details = ParcelDetails {
            name: "   ".to_string(),
            ..complete()
        };
        assert_eq!(details.missing_field(), Some("name"));
    }

    #[test]
    fn test_lead_is_checked_first() {
        assert_eq!(ParcelDetails::default().missing_field(), Some("lead"));
    }

    #[test]
    fn test_culture_label_roundtrip() {
        for culture in Culture::ALL {
            assert_eq!(Culture::from_label(culture.label()), Some(culture));
        }
        assert_eq!(Culture::from_label("Café"), None);
    }

    #[test]
    fn test_culture_serializes_with_accent() {
        assert_eq!(
            serde_json::to_string(&Culture::Algodao).unwrap(),
            "\"Algodão\""
        );
    }
}
