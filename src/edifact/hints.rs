// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// HINT COMPOSER - MSCONS-Kontext für die Skript-Generierung
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//
// Baut aus den Anhängen einer Tool-Skript-Anfrage einen natürlichsprachigen
// Kontextblock: feste Erklärungen zu den EDIFACT-Konventionen, angereichert
// mit Beispielwerten aus der konkreten Nachricht, wenn welche gefunden wurden.
//
// Reine Funktion ohne Zustand. Fehlende Daten führen zu `None` bzw. zu
// generischen Hinweiszeilen, nie zu einem Fehler — ein gescheiterter
// Hint-Lookup darf den Prompt-Bau nicht blockieren.
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

use once_cell::sync::Lazy;
use regex::Regex;

use super::mscons::extract_mscons_sample;
use super::segments::{split_edifact_segments, MAX_SEGMENTS};
use crate::types::{AutoToolHints, ToolScriptAttachment};

/// Dateinamen, die auf eine EDIFACT-Datei hindeuten.
static EDIFACT_FILENAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\.(edi|edifact)$").expect("static pattern"));

/// MSCONS-Marker im Dateiinhalt.
static MSCONS_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)MSCONS").expect("static pattern"));

/// Wie viele Zeichen des Inhalts für den Marker-Test untersucht werden.
const CONTENT_PROBE_CHARS: usize = 2000;

/// Erzeugt automatische MSCONS-Hinweise für eine Tool-Skript-Anfrage.
///
/// Liefert `None` wenn:
/// - keine Anhänge übergeben wurden,
/// - kein Anhang nach Dateiname oder Inhalt als EDIFACT/MSCONS in Frage kommt,
/// - weder die Query "mscons" erwähnt noch ein `UNH`-Segment die Nachricht
///   als MSCONS ausweist. Das gilt auch dann, wenn der Anhang nur über die
///   Dateinamen-Heuristik ausgewählt wurde.
///
/// Bei Erfolg sind `additional_context` und `repair_context` identisch.
pub fn build_auto_tool_hints(
    query: &str,
    attachments: &[ToolScriptAttachment],
) -> Option<AutoToolHints> {
    if attachments.is_empty() {
        return None;
    }

    let attachment = attachments.iter().find(|att| {
        if EDIFACT_FILENAME.is_match(&att.filename) {
            return true;
        }
        let probe: String = att.content.chars().take(CONTENT_PROBE_CHARS).collect();
        MSCONS_MARKER.is_match(&probe)
    })?;

    let segments = split_edifact_segments(&attachment.content, MAX_SEGMENTS);

    let is_mscons_file = segments
        .iter()
        .any(|s| s.starts_with("UNH+") && s.contains("MSCONS"));

    if !query.to_lowercase().contains("mscons") && !is_mscons_file {
        return None;
    }

    let sample = extract_mscons_sample(&segments);

    let mut lines: Vec<String> = Vec::new();
    lines.push("MSCONS-Kontext für die Skript-Generierung:".to_string());
    lines.push(
        "- EDIFACT-Segmente enden mit ' (Apostroph). ? ist das Escape-Zeichen; das Folgezeichen gilt immer als Literal."
            .to_string(),
    );
    lines.push(
        "- Datenelemente werden mit + getrennt, Komponenten innerhalb eines Elements mit :."
            .to_string(),
    );

    match &sample.metering_point_id {
        Some(id) => lines.push(format!(
            "- Die Messlokations-ID steht im Segment LOC+Z04, hier z. B. \"{id}\"."
        )),
        None => lines.push(
            "- Die Messlokations-ID steht im Segment LOC+Z04 im dritten Datenelement.".to_string(),
        ),
    }

    match &sample.product_code {
        Some(code) => lines.push(format!(
            "- Der OBIS-Produktcode steht im Segment PIA+5, hier z. B. \"{code}\"."
        )),
        None => lines.push(
            "- Der OBIS-Produktcode steht im Segment PIA+5 im dritten Datenelement.".to_string(),
        ),
    }

    match (&sample.quantity, &sample.start_iso, &sample.end_iso) {
        (Some(quantity), Some(start), Some(end)) => {
            lines.push(format!(
                "- Messwerte stehen in QTY+187 (hier z. B. {quantity}), das zugehörige Intervall in DTM+163/DTM+164 ({start} bis {end})."
            ));
            if let Some(tz) = &sample.timezone_code {
                lines.push(format!(
                    "- Die Zeitstempel sind CCYYMMDDHHMM mit Qualifier {tz}; die ISO-Form setzt Sekunden fest auf 00 und markiert UTC."
                ));
            }
        }
        _ => lines.push(
            "- Messwerte stehen in QTY+187, das zugehörige Intervall in DTM+163 (Beginn) und DTM+164 (Ende) im Format CCYYMMDDHHMM."
                .to_string(),
        ),
    }

    let context = lines.join("\n");

    let mut summary_parts: Vec<String> = vec!["MSCONS-Kontext hinzugefügt".to_string()];
    if let Some(id) = &sample.metering_point_id {
        summary_parts.push(id.clone());
    }
    if let Some(code) = &sample.product_code {
        summary_parts.push(code.clone());
    }

    Some(AutoToolHints {
        additional_context: Some(context.clone()),
        repair_context: Some(context),
        summary: Some(summary_parts.join(" · ")),
    })
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// TESTS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
