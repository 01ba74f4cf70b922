// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// TIMESTAMP NORMALIZER - EDIFACT-Kompaktzeit nach ISO-8601
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Wandelt einen EDIFACT-Kompaktzeitstempel (`CCYYMMDDHHMM`) in ISO-8601 um.
///
/// Nicht-Ziffern werden vorab entfernt; es müssen mindestens 12 Ziffern
/// übrig bleiben. Sekunden stehen fest auf `00`, das Ergebnis trägt immer das
/// `Z`-Suffix. Der Zeitzonen-Qualifier aus dem DTM-Segment wird bewusst NICHT
/// als Offset angewendet, sondern nur als Metadatum weitergereicht — eine
/// dokumentierte Vereinfachung, keine echte Zeitzonenkonvertierung.
///
/// Liefert `None` bei weniger als 12 Ziffern oder fehlerhaften Feldlängen.
pub fn to_iso_timestamp(raw: &str) -> Option<String> {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() < 12 {
        return None;
    }

    let year = &digits[0..4];
    let month = &digits[4..6];
    let day = &digits[6..8];
    let hour = &digits[8..10];
    let minute = &digits[10..12];

    if month.len() != 2 || day.len() != 2 || hour.len() != 2 || minute.len() != 2 {
        return None;
    }

    Some(format!("{year}-{month}-{day}T{hour}:{minute}:00Z"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_compact_timestamp() {
        assert_eq!(
            to_iso_timestamp("202508232000"),
            Some("2025-08-23T20:00:00Z".to_string())
        );
    }

    #[test]
    fn test_non_digits_stripped() {
        // Qualifier-Reste und Trennzeichen stören nicht
        assert_eq!(
            to_iso_timestamp("2025-08-23 20:15"),
            Some("2025-08-23T20:15:00Z".to_string())
        );
    }

    #[test]
    fn test_too_short() {
        assert_eq!(to_iso_timestamp("20250823"), None);
        assert_eq!(to_iso_timestamp(""), None);
        assert_eq!(to_iso_timestamp("abc"), None);
    }

    #[test]
    fn test_extra_digits_ignored() {
        // CCYYMMDDHHMMSS: Sekunden werden verworfen, nicht übernommen
        assert_eq!(
            to_iso_timestamp("20250823201545"),
            Some("2025-08-23T20:15:00Z".to_string())
        );
    }

    #[test]
    fn test_seconds_always_zero_and_utc_tagged() {
        let iso = to_iso_timestamp("202501010000").unwrap();
        assert!(iso.ends_with(":00Z"));
    }
}
