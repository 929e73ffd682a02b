use snap_types::UiEvent;

pub const HELP: &str = "\
Commands:
  quote            generate a random quote
  knowledge        generate a random piece of knowledge
  book             pick a random book and show an excerpt
  define <word>    look up a word
  snap <n|word>    word snapshot for a word in the word table
  words            show the word table again
  home             collapse every section
  help             show this help
  quit             exit";

/// Parse one line typed on the page. `Ok(None)` for a blank line.
pub fn parse_command(line: &str) -> Result<Option<UiEvent>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (command, rest) = match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };

    let event = match command.to_lowercase().as_str() {
        "quote" | "q" => UiEvent::RequestQuote,
        "knowledge" | "k" => UiEvent::RequestKnowledge,
        "book" | "b" => UiEvent::RequestBook,
        "define" | "d" => UiEvent::Define(rest.to_string()),
        "snap" | "s" => {
            if rest.is_empty() {
                return Err("Usage: snap <number|word>".to_string());
            }
            UiEvent::Snapshot(rest.to_string())
        }
        "words" | "w" => UiEvent::ShowWords,
        "home" => UiEvent::Home,
        "help" | "?" => UiEvent::Help,
        "quit" | "exit" => UiEvent::Close,
        other => {
            return Err(format!(
                "Unknown command: {other}. Type 'help' for commands."
            ));
        }
    };

    Ok(Some(event))
}
