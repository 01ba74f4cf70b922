// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// SEGMENT SPLITTER - EDIFACT-Nachricht in Segmente zerlegen
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//
// Zerlegt einen rohen EDIFACT-Datenstrom in eine geordnete Liste getrimmter
// Segmente. Berücksichtigt:
// - Segmentterminator `'` (Apostroph)
// - Escape-Zeichen `?` (das Folgezeichen ist immer literal)
// - `\r` und `\n` werden komplett übersprungen
//
// Bewusst tolerant: fehlerhafte Eingaben werfen nie einen Fehler, sondern
// liefern die Segmente, die sich extrahieren ließen. Der Splitter speist eine
// Best-Effort-Heuristik, keinen Validator.
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Obergrenze für die Anzahl extrahierter Segmente.
///
/// Schützt gegen unbegrenzten Speicher-/Zeitverbrauch bei pathologisch großen
/// Anhängen. Wird die Grenze erreicht, bricht der Scan ab und der Rest der
/// Eingabe wird stillschweigend verworfen.
pub const MAX_SEGMENTS: usize = 2048;

/// Zerlegt `content` in getrimmte EDIFACT-Segmente, maximal `limit` Stück.
///
/// Leere Segmente (nach Trim) werden nie emittiert. Fehlt der abschließende
/// Terminator, wird der nicht-leere Rest als letztes Segment ausgegeben.
///
/// # Beispiel
/// ```rust
/// use willi_mako::edifact::split_edifact_segments;
///
/// let segments = split_edifact_segments("UNH+1+MSCONS:D:04B:UN:2.4c'LOC+Z04+DE123'", 10);
/// assert_eq!(segments, vec!["UNH+1+MSCONS:D:04B:UN:2.4c", "LOC+Z04+DE123"]);
/// ```
pub fn split_edifact_segments(content: &str, limit: usize) -> Vec<String> {
    let mut segments: Vec<String> = Vec::new();
    let mut buffer = String::new();
    let mut escaped = false;

    for ch in content.chars() {
        if escaped {
            // Nach `?` ist das Zeichen immer literal, auch `'` und `?` selbst
            buffer.push(ch);
            escaped = false;
            continue;
        }

        match ch {
            '?' => escaped = true,
            '\'' => {
                let trimmed = buffer.trim();
                if !trimmed.is_empty() {
                    segments.push(trimmed.to_string());
                }
                buffer.clear();
                if segments.len() >= limit {
                    return segments;
                }
            }
            '\r' | '\n' => {}
            _ => buffer.push(ch),
        }
    }

    // Rest ohne abschließenden Terminator
    let trimmed = buffer.trim();
    if !trimmed.is_empty() && segments.len() < limit {
        segments.push(trimmed.to_string());
    }

    segments
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// TESTS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
