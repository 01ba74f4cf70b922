// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// PROMPT BUILDER - Prompt für die Tool-Skript-Generierung
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

use crate::types::ToolScriptAttachment;

/// Konfiguration des Prompt-Builders.
#[derive(Debug, Clone)]
pub struct PromptBuilderConfig {
    /// Maximale Zeichenzahl pro eingebettetem Anhang.
    pub max_attachment_chars: usize,
}

impl Default for PromptBuilderConfig {
    fn default() -> Self {
        Self {
            max_attachment_chars: 4000,
        }
    }
}

/// Baut den Prompt für den Tool-Skript-Generator zusammen.
///
/// Reine String-Montage: Aufgabenbeschreibung, Anhangsliste mit gekürztem
/// Inhalt und optionalem Zusatzkontext (z. B. MSCONS-Hinweise).
#[derive(Debug, Clone, Default)]
pub struct ToolScriptPromptBuilder {
    config: PromptBuilderConfig,
}

impl ToolScriptPromptBuilder {
    /// Builder mit Default-Konfiguration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder mit eigener Konfiguration.
    pub fn with_config(config: PromptBuilderConfig) -> Self {
        Self { config }
    }

    /// System-Prompt mit den festen Regeln für generierte Skripte.
    pub fn build_system_prompt(&self) -> String {
        r#"You are a code generator for energy market communication tooling. Generate a single, self-contained script that solves the user's task.

## Rules
1. Output exactly one fenced code block
2. The script must run without interactive input
3. Read attachment files from the working directory by filename
4. Prefer the standard library; state any extra dependency in a comment
5. Follow any domain context given in the <context> block exactly"#
            .to_string()
    }

    /// User-Prompt aus Query, Anhängen und optionalem Zusatzkontext.
    pub fn build_user_prompt(
        &self,
        query: &str,
        attachments: &[ToolScriptAttachment],
        additional_context: Option<&str>,
    ) -> String {
        let mut prompt = format!("Aufgabe: {query}\n");

        if !attachments.is_empty() {
            prompt.push_str("\nAnhänge:\n");
            for att in attachments {
                prompt.push_str(&format!("\n### {}", att.filename));
                if let Some(description) = &att.description {
                    prompt.push_str(&format!(" — {description}"));
                }
                prompt.push('\n');
                prompt.push_str("```\n");
                prompt.push_str(truncate_chars(&att.content, self.config.max_attachment_chars));
                prompt.push_str("\n```\n");
            }
        }

        if let Some(context) = additional_context {
            prompt.push_str(&format!("\n<context>\n{context}\n</context>\n"));
        }

        prompt
    }
}

/// Kürzt auf maximal `max_chars` Zeichen an einer gültigen UTF-8-Grenze.
fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_offset, _)) => &text[..byte_offset],
        None => text,
    }
}
