use colored::Colorize;

use crate::models::{Message, QueryRequest};
use crate::JuriChat;

/// Fixed reply appended when an exchange fails for any reason. Transport
/// errors, non-2xx statuses and malformed bodies all collapse into this
/// one user-facing message; the underlying error goes to diagnostics only.
pub const ERROR_REPLY: &str =
    "Lo siento, hubo un error al procesar tu consulta. Por favor, inténtalo de nuevo.";

/// Run one query exchange: append the user message, perform a single
/// request against the backend and append exactly one assistant message
/// once it settles. Returns the appended reply, or `None` when the
/// submission was dropped (blank input, or an exchange already pending).
pub(crate) async fn send_query<'a>(chat: &'a mut JuriChat, text: &str) -> Option<&'a Message> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    if !chat.state.begin() {
        return None;
    }

    let user_message = Message::user(text);
    if let Some(logger) = &mut chat.logger {
        logger.log_message(&user_message).await;
    }
    chat.messages.push(user_message);

    if chat.verbose {
        println!(
            "{}",
            format!(
                "🔧 DEBUG: POST {} (session {})",
                chat.config.chat_endpoint(),
                chat.session_id
            )
            .bright_black()
        );
    }

    let request = QueryRequest::new(text, chat.session_id.clone());
    let reply = match chat.backend.query(&request).await {
        Ok(response) => Message::assistant(response.response, response.sources),
        Err(e) => {
            eprintln!("{} Query exchange failed: {}", "❌".bright_red(), e);
            if let Some(logger) = &mut chat.logger {
                logger.log_error(&chat.session_id, &e.to_string()).await;
            }
            Message::assistant(ERROR_REPLY, Vec::new())
        }
    };

    // Both outcomes settle the gate; the client can never stay pending
    // after a resolved exchange.
    chat.state.settle();

    if let Some(logger) = &mut chat.logger {
        logger.log_message(&reply).await;
    }
    chat.messages.push(reply);

    chat.messages.last()
}
