use anyhow::Result;
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::models::Source;
use crate::JuriChat;

/// Suggested questions offered by the `/preguntas` command, as shipped in
/// the web client.
pub const SUGGESTED_QUESTIONS: [&str; 4] = [
    "¿Qué es un dictamen CGR?",
    "Consultar sobre licitaciones públicas",
    "Información sobre adquisiciones",
    "Normativa de recursos públicos",
];

/// Run interactive REPL mode
pub async fn run_repl_mode(chat: &mut JuriChat) -> Result<()> {
    println!("{}", "⚖️  Asistente de Dictámenes CGR".bright_cyan().bold());
    println!(
        "{}",
        format!("Backend: {}", chat.config.chat_endpoint()).bright_black()
    );
    println!("{}", format!("Sesión: {}", chat.session_id).bright_black());
    println!(
        "{}",
        "Escribe 'exit' o 'quit' para salir, '/preguntas' para ver consultas frecuentes\n"
            .bright_black()
    );

    if chat.verbose {
        if let Some(logger) = &chat.logger {
            println!(
                "{}",
                format!("🔧 DEBUG: conversation log: {}", logger.path().display()).bright_black()
            );
        }
    }

    let mut rl = DefaultEditor::new()?;

    loop {
        let readline = rl.readline(&format!("{} ", "Tú:".bright_green().bold()));

        match readline {
            Ok(line) => {
                let line = line.trim();

                if line.is_empty() {
                    continue;
                }

                if line == "exit" || line == "quit" {
                    println!("{}", "¡Hasta luego!".bright_cyan());
                    break;
                }

                if line == "/sesion" {
                    println!("{} Sesión actual: {}", "🪪".bright_cyan(), chat.session_id);
                    continue;
                }

                if line == "/fuentes" {
                    match chat.last_assistant() {
                        Some(msg) if !msg.sources.is_empty() => print_sources(&msg.sources),
                        _ => println!(
                            "{} La última respuesta no tiene fuentes",
                            "ℹ️".bright_blue()
                        ),
                    }
                    continue;
                }

                if line == "/preguntas" {
                    println!("{} Consultas frecuentes:", "💬".bright_cyan());
                    for (idx, question) in SUGGESTED_QUESTIONS.iter().enumerate() {
                        println!("  {}. {}", idx + 1, question);
                    }
                    println!(
                        "{}",
                        "Usa '/preguntas <n>' para enviar una de ellas".bright_black()
                    );
                    continue;
                }

                let input = if let Some(rest) = line.strip_prefix("/preguntas ") {
                    match rest.trim().parse::<usize>() {
                        Ok(n) if (1..=SUGGESTED_QUESTIONS.len()).contains(&n) => {
                            let question = SUGGESTED_QUESTIONS[n - 1];
                            println!("{} {}", "Tú:".bright_green().bold(), question);
                            question.to_string()
                        }
                        _ => {
                            eprintln!(
                                "{} Número inválido: '{}'. Usa 1-{}.",
                                "❌".bright_red(),
                                rest.trim(),
                                SUGGESTED_QUESTIONS.len()
                            );
                            continue;
                        }
                    }
                } else {
                    line.to_string()
                };

                rl.add_history_entry(&input)?;

                println!("{}", "Procesando tu consulta...".bright_black());

                if let Some(reply) = chat.send_query(&input).await {
                    println!("\n{} {}\n", "Asistente:".bright_blue().bold(), reply.content);
                    if !reply.sources.is_empty() {
                        print_sources(&reply.sources);
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", "^C".bright_black());
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!("{}", "¡Hasta luego!".bright_cyan());
                break;
            }
            Err(err) => {
                eprintln!("{} {}", "Error:".bright_red().bold(), err);
                break;
            }
        }
    }

    // Graceful shutdown of logger (flush & close)
    if let Some(logger) = &mut chat.logger {
        logger.shutdown().await;
    }

    Ok(())
}

fn print_sources(sources: &[Source]) {
    println!("{}", "Fuentes:".bright_cyan());
    for source in sources {
        println!(
            "  • {} {}",
            source.source,
            format!("({:.2})", source.score).bright_black()
        );
    }
}
