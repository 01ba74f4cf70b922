// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// WILLI-MAKO CLI
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//
// CLI für die Willi-Mako-API.
//
// Verwendung:
//   willi-mako-cli login
//   willi-mako-cli chat "Was bedeutet Sperrprozess?"
//   willi-mako-cli generate-tool "MSCONS zu CSV konvertieren" mscons.edi
//   willi-mako-cli analyze nachricht.edi
//   willi-mako-cli hints "MSCONS auswerten" mscons.edi
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[cfg(feature = "server")]
use std::sync::Arc;

use anyhow::Context;
use willi_mako::api::{HttpMakoClient, MakoApi, ToolScriptRequest};
use willi_mako::config::ApiConfig;
use willi_mako::edifact::build_auto_tool_hints;
use willi_mako::tools::extract_code_block;
use willi_mako::types::ToolScriptAttachment;

fn print_usage(program: &str) {
    eprintln!("Willi-Mako CLI v{}", willi_mako::VERSION);
    eprintln!();
    eprintln!("Verwendung: {program} <kommando> [argumente]");
    eprintln!();
    eprintln!("Kommandos:");
    eprintln!("  login                          Anmelden, Token ausgeben");
    eprintln!("  chat <frage>                   Frage an den Chat stellen");
    eprintln!("  generate-tool <query> [datei...]  Tool-Skript generieren lassen");
    eprintln!("  analyze <datei>                EDIFACT-Nachricht remote analysieren");
    eprintln!("  hints <query> <datei>          MSCONS-Hinweise lokal berechnen");
    #[cfg(feature = "server")]
    eprintln!("  serve [--port <n>] [--secret <s>]  Demo-Server starten");
    eprintln!();
    eprintln!("Konfiguration über .env bzw. Umgebungsvariablen:");
    eprintln!("  WILLI_MAKO_BASE_URL, WILLI_MAKO_EMAIL, WILLI_MAKO_PASSWORD, WILLI_MAKO_TOKEN");
}

/// Baut den API-Client aus der Konfiguration; Token optional.
fn build_client(config: &ApiConfig) -> HttpMakoClient {
    let client = HttpMakoClient::new(&config.base_url);
    match &config.token {
        Some(token) => client.with_token(token),
        None => client,
    }
}

fn read_attachment(path: &str) -> anyhow::Result<ToolScriptAttachment> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Konnte Datei nicht lesen: {path}"))?;
    let filename = std::path::Path::new(path)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string());
    Ok(ToolScriptAttachment::new(filename, content).with_guessed_mime())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if dotenvy::dotenv().is_ok() {
        log::debug!("Loaded .env from current directory");
    }
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        print_usage(&args[0]);
        std::process::exit(1);
    }

    let config = ApiConfig::from_env();

    match args[1].as_str() {
        "login" => {
            let email = config
                .email
                .clone()
                .context("WILLI_MAKO_EMAIL ist nicht gesetzt")?;
            let password = config
                .password
                .clone()
                .context("WILLI_MAKO_PASSWORD ist nicht gesetzt")?;

            let client = build_client(&config);
            let token = client.login(&email, &password).await?;
            println!("{token}");
        }

        "chat" => {
            if args.len() < 3 {
                print_usage(&args[0]);
                std::process::exit(1);
            }
            anyhow::ensure!(config.has_token(), "WILLI_MAKO_TOKEN ist nicht gesetzt (erst `login` ausführen)");
            let question = args[2..].join(" ");

            let client = build_client(&config);
            let session = client.create_chat("CLI-Session").await?;
            log::info!("Chat-Session angelegt: {}", session.id);
            let reply = client.send_message(&session.id, &question).await?;
            println!("{}", reply.content);
        }

        "generate-tool" => {
            if args.len() < 3 {
                print_usage(&args[0]);
                std::process::exit(1);
            }
            anyhow::ensure!(config.has_token(), "WILLI_MAKO_TOKEN ist nicht gesetzt (erst `login` ausführen)");
            let query = args[2].clone();
            let attachments: Vec<ToolScriptAttachment> = args[3..]
                .iter()
                .map(|path| read_attachment(path))
                .collect::<anyhow::Result<_>>()?;

            let hints = build_auto_tool_hints(&query, &attachments);
            if let Some(summary) = hints.as_ref().and_then(|h| h.summary.as_deref()) {
                log::info!("{summary}");
            }

            let request = ToolScriptRequest::new(query, attachments).with_hints(hints);
            let client = build_client(&config);
            let response = client.generate_tool_script(&request).await?;

            let extracted = extract_code_block(&response.script);
            if let Some(language) = &extracted.language {
                log::info!("Generiertes Skript ({language})");
            }
            println!("{}", extracted.code);
        }

        "analyze" => {
            if args.len() < 3 {
                print_usage(&args[0]);
                std::process::exit(1);
            }
            anyhow::ensure!(config.has_token(), "WILLI_MAKO_TOKEN ist nicht gesetzt (erst `login` ausführen)");
            let attachment = read_attachment(&args[2])?;

            let client = build_client(&config);
            let analysis = client.analyze_edifact(&attachment.content).await?;
            if let Some(message_type) = &analysis.message_type {
                println!("Nachrichtentyp: {message_type}");
            }
            println!("{}", analysis.summary);
        }

        "hints" => {
            if args.len() < 4 {
                print_usage(&args[0]);
                std::process::exit(1);
            }
            let query = &args[2];
            let attachment = read_attachment(&args[3])?;

            match build_auto_tool_hints(query, std::slice::from_ref(&attachment)) {
                Some(hints) => {
                    if let Some(summary) = &hints.summary {
                        eprintln!("{summary}");
                    }
                    if let Some(context) = &hints.additional_context {
                        println!("{context}");
                    }
                }
                None => eprintln!("Keine MSCONS-Hinweise erkannt."),
            }
        }

        #[cfg(feature = "server")]
        "serve" => {
            let mut port: u16 = 3000;
            let mut secret: Option<String> = None;
            let mut i = 2;
            while i < args.len() {
                match args[i].as_str() {
                    "--port" if i + 1 < args.len() => {
                        port = args[i + 1].parse().context("Ungültiger Port")?;
                        i += 2;
                    }
                    "--secret" if i + 1 < args.len() => {
                        secret = Some(args[i + 1].clone());
                        i += 2;
                    }
                    other => anyhow::bail!("Unbekannte Option: {other}"),
                }
            }

            let api: Arc<dyn MakoApi> = Arc::new(build_client(&config));
            let state = Arc::new(willi_mako::server::AppState { api, secret });
            let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
            willi_mako::server::start_server(addr, state).await?;
        }

        _ => {
            print_usage(&args[0]);
            std::process::exit(1);
        }
    }

    Ok(())
}
