// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// FIELD EXTRACTOR - Heuristische Stichprobe aus MSCONS-Segmenten
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//
// Durchsucht die Segmentliste nach bekannten Ankern und zieht Beispielwerte
// heraus:
// - `LOC+Z04+...`  → Messlokations-ID
// - `PIA+5+...`    → OBIS-Produktcode
// - `QTY+187` / `DTM+163` / `DTM+164` (direkt aufeinanderfolgend)
//                  → ein repräsentatives Mengen-/Zeitintervall
//
// Alle Felder sind optional; was nicht gefunden wird, bleibt `None`. Es wird
// nie ein Fehler geworfen.
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

use serde::{Deserialize, Serialize};

use super::timestamp::to_iso_timestamp;

/// Zeitangabe aus einem `DTM`-Segment: Kompaktwert plus optionaler
/// Zeitzonen-/Format-Qualifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedDateTime {
    /// 12-stelliger Kompaktzeitstempel (`CCYYMMDDHHMM`), roh.
    pub value: String,
    /// Qualifier aus dem dritten `+`-Feld (z. B. `303`), falls vorhanden.
    pub tz_code: Option<String>,
}

/// Eine pro Extraktion frisch erzeugte Stichprobe aus einer MSCONS-Nachricht.
///
/// Welche Felder belegt sind, hängt davon ab, was in der Eingabe gefunden
/// wurde. Keine Persistenz; Lebensdauer ist ein einzelner Hint-Aufruf.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MsconsSample {
    /// Messlokations-ID aus dem ersten `LOC+Z04+`-Segment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metering_point_id: Option<String>,
    /// OBIS-Produktcode aus dem ersten `PIA+5+`-Segment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_code: Option<String>,
    /// Zeitzonen-/Format-Qualifier des Intervalls (Start bevorzugt).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone_code: Option<String>,
    /// Mengenwert aus dem `QTY+187`-Segment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<String>,
    /// Intervallbeginn, roher Kompaktwert.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_raw: Option<String>,
    /// Intervallende, roher Kompaktwert.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_raw: Option<String>,
    /// Intervallbeginn als ISO-8601.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_iso: Option<String>,
    /// Intervallende als ISO-8601.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_iso: Option<String>,
}

impl MsconsSample {
    /// `true` wenn keines der Felder belegt ist.
    pub fn is_empty(&self) -> bool {
        self.metering_point_id.is_none()
            && self.product_code.is_none()
            && self.timezone_code.is_none()
            && self.quantity.is_none()
            && self.start_raw.is_none()
            && self.end_raw.is_none()
            && self.start_iso.is_none()
            && self.end_iso.is_none()
    }
}

/// Extrahiert eine [`MsconsSample`] aus einer geordneten Segmentliste.
///
/// Pro Anker wird nur der erste Treffer verwertet; beim QTY/DTM-Tripel wird
/// nach dem ersten vollständig auflösbaren Tripel abgebrochen. Es geht hier
/// um EINE repräsentative Stichprobe für den Prompt-Kontext, nicht um eine
/// vollständige Auswertung.
pub fn extract_mscons_sample(segments: &[String]) -> MsconsSample {
    let mut sample = MsconsSample::default();

    // Messlokation: LOC+Z04+<id>[:...]
    if let Some(seg) = segments.iter().find(|s| s.starts_with("LOC+Z04+")) {
        let parts: Vec<&str> = seg.split('+').collect();
        if let Some(field) = parts.get(2) {
            if let Some(id) = field.split(':').next() {
                let id = id.trim();
                if !id.is_empty() {
                    sample.metering_point_id = Some(id.to_string());
                }
            }
        }
    }

    // Produktcode: PIA+5+<obis>[::qualifier]
    if let Some(seg) = segments.iter().find(|s| s.starts_with("PIA+5+")) {
        let parts: Vec<&str> = seg.split('+').collect();
        if let Some(field) = parts.get(2) {
            // Komponenten-Qualifier ab dem ersten Doppel-Doppelpunkt kappen
            let base = match field.find("::") {
                Some(pos) => &field[..pos],
                None => *field,
            };
            let code: String = base.chars().filter(|c| !c.is_whitespace()).collect();
            if !code.is_empty() {
                sample.product_code = Some(code);
            }
        }
    }

    // Mengen-/Zeitintervall: QTY+187 direkt gefolgt von DTM+163 und DTM+164
    for (i, seg) in segments.iter().enumerate() {
        if !seg.starts_with("QTY+187") {
            continue;
        }
        let (Some(start_seg), Some(end_seg)) = (segments.get(i + 1), segments.get(i + 2)) else {
            continue;
        };
        if !start_seg.starts_with("DTM+163") || !end_seg.starts_with("DTM+164") {
            continue;
        }

        let quantity = parse_qty_value(seg);
        let start = parse_dtm_value(start_seg);
        let end = parse_dtm_value(end_seg);

        if let (Some(quantity), Some(start), Some(end)) = (quantity, start, end) {
            sample.timezone_code = start.tz_code.clone().or_else(|| end.tz_code.clone());
            sample.start_iso = to_iso_timestamp(&start.value);
            sample.end_iso = to_iso_timestamp(&end.value);
            sample.quantity = Some(quantity);
            sample.start_raw = Some(start.value);
            sample.end_raw = Some(end.value);
            break;
        }
    }

    sample
}

/// Mengenwert aus einem `QTY`-Segment: zweites `+`-Feld, zweite
/// `:`-Komponente, getrimmt. `None` wenn Feld oder Komponente fehlt.
pub fn parse_qty_value(segment: &str) -> Option<String> {
    let parts: Vec<&str> = segment.split('+').collect();
    let field = parts.get(1)?;
    let value = field.split(':').nth(1)?.trim();
    if value.is_empty() {
        return None;
    }
    Some(value.to_string())
}

/// Zeitwert aus einem `DTM`-Segment.
///
/// Das zweite `+`-Feld trägt `qualifier:wert`; das dritte `+`-Feld (falls
/// vorhanden) den Zeitzonen-/Format-Qualifier, von dem die letzte
/// `:`-Komponente übernommen wird. `None` wenn keine Wertkomponente existiert.
pub fn parse_dtm_value(segment: &str) -> Option<ParsedDateTime> {
    let parts: Vec<&str> = segment.split('+').collect();
    let field = parts.get(1)?;
    let value = field.split(':').nth(1)?.trim();
    if value.is_empty() {
        return None;
    }

    let tz_code = parts
        .get(2)
        .and_then(|f| f.split(':').next_back())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from);

    Some(ParsedDateTime {
        value: value.to_string(),
        tz_code,
    })
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// TESTS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[cfg(test)]
mod tests {
    use super::*;

    fn segs(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_metering_point_from_loc_z04() {
        let sample = extract_mscons_sample(&segs(&["UNH+1+MSCONS", "LOC+Z04+HZ0:X"]));
        assert_eq!(sample.metering_point_id.as_deref(), Some("HZ0"));
    }

    #[test]
    fn test_metering_point_absent() {
        let sample = extract_mscons_sample(&segs(&["LOC+172+DE00014545768S"]));
        assert_eq!(sample.metering_point_id, None);
    }

    #[test]
    fn test_product_code_plain() {
        let sample = extract_mscons_sample(&segs(&["PIA+5+1-1:1.29.0:SRW"]));
        assert_eq!(sample.product_code.as_deref(), Some("1-1:1.29.0:SRW"));
    }

    #[test]
    fn test_product_code_strips_double_colon_qualifier() {
        let sample = extract_mscons_sample(&segs(&["PIA+5+1-1:1.29.0::SRW"]));
        assert_eq!(sample.product_code.as_deref(), Some("1-1:1.29.0"));
    }

    #[test]
    fn test_product_code_whitespace_removed() {
        let sample = extract_mscons_sample(&segs(&["PIA+5+1-1 : 1.29.0"]));
        assert_eq!(sample.product_code.as_deref(), Some("1-1:1.29.0"));
    }

    #[test]
    fn test_valid_triplet() {
        let sample = extract_mscons_sample(&segs(&[
            "QTY+187:19.542",
            "DTM+163:202508232000+00:303",
            "DTM+164:202508232015+00:303",
        ]));
        assert_eq!(sample.quantity.as_deref(), Some("19.542"));
        assert_eq!(sample.start_raw.as_deref(), Some("202508232000"));
        assert_eq!(sample.end_raw.as_deref(), Some("202508232015"));
        assert_eq!(sample.start_iso.as_deref(), Some("2025-08-23T20:00:00Z"));
        assert_eq!(sample.end_iso.as_deref(), Some("2025-08-23T20:15:00Z"));
        assert_eq!(sample.timezone_code.as_deref(), Some("303"));
    }

    #[test]
    fn test_only_first_valid_triplet_sampled() {
        let sample = extract_mscons_sample(&segs(&[
            "QTY+187:1.000",
            "DTM+163:202508230000+00:303",
            "DTM+164:202508230015+00:303",
            "QTY+187:2.000",
            "DTM+163:202508230015+00:303",
            "DTM+164:202508230030+00:303",
        ]));
        assert_eq!(sample.quantity.as_deref(), Some("1.000"));
        assert_eq!(sample.start_raw.as_deref(), Some("202508230000"));
    }

    #[test]
    fn test_truncated_triplet_skipped() {
        // QTY ohne folgendes DTM-Paar liefert kein Intervall
        let sample = extract_mscons_sample(&segs(&["QTY+187:19.542", "DTM+163:202508232000"]));
        assert_eq!(sample.quantity, None);
        assert_eq!(sample.start_raw, None);
    }

    #[test]
    fn test_later_valid_triplet_found_after_broken_one() {
        let sample = extract_mscons_sample(&segs(&[
            "QTY+187:1.000",
            "LIN+2",
            "DTM+164:x",
            "QTY+187:2.000",
            "DTM+163:202508230015+00:303",
            "DTM+164:202508230030+00:303",
        ]));
        assert_eq!(sample.quantity.as_deref(), Some("2.000"));
    }

    #[test]
    fn test_timezone_fallback_to_end_segment() {
        let sample = extract_mscons_sample(&segs(&[
            "QTY+187:5.5",
            "DTM+163:202508230000",
            "DTM+164:202508230015+00:303",
        ]));
        assert_eq!(sample.timezone_code.as_deref(), Some("303"));
    }

    #[test]
    fn test_parse_qty_value() {
        assert_eq!(parse_qty_value("QTY+187:19.542").as_deref(), Some("19.542"));
        assert_eq!(parse_qty_value("QTY+187: 19.542 ").as_deref(), Some("19.542"));
        assert_eq!(parse_qty_value("QTY+187"), None);
        assert_eq!(parse_qty_value("QTY"), None);
    }

    #[test]
    fn test_parse_dtm_value() {
        let parsed = parse_dtm_value("DTM+163:202508232000+00:303").unwrap();
        assert_eq!(parsed.value, "202508232000");
        assert_eq!(parsed.tz_code.as_deref(), Some("303"));

        let parsed = parse_dtm_value("DTM+164:202508232015").unwrap();
        assert_eq!(parsed.value, "202508232015");
        assert_eq!(parsed.tz_code, None);

        assert_eq!(parse_dtm_value("DTM+163"), None);
    }

    #[test]
    fn test_empty_segments_yield_empty_sample() {
        let sample = extract_mscons_sample(&[]);
        assert!(sample.is_empty());
    }

    #[test]
    fn test_idempotent() {
        let input = segs(&[
            "LOC+Z04+DE0001112223334445556667778889990",
            "PIA+5+1-1:1.29.0::SRW",
            "QTY+187:19.542",
            "DTM+163:202508232000+00:303",
            "DTM+164:202508232015+00:303",
        ]);
        assert_eq!(extract_mscons_sample(&input), extract_mscons_sample(&input));
    }
}
