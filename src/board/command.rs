//! Line commands understood by the terminal board.
//!
//! | Input          | Command                         |
//! |----------------|---------------------------------|
//! | `:speak`, `:s` | speak the phrase                |
//! | `:delete`, `:d`| remove the last word            |
//! | `:clear`, `:c` | clear the phrase                |
//! | `:words`, `:w` | list the vocabulary             |
//! | `:add <word>`  | store a new user word           |
//! | `:quit`, `:q`  | exit                            |
//! | `12`           | select the 12th listed word     |
//! | anything else  | select the word with that label |

/// One user action on the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardCommand {
    Select(String),
    SelectIndex(usize),
    Speak,
    DeleteLast,
    Clear,
    ListWords,
    AddWord(String),
    Quit,
    Unknown(String),
}

impl BoardCommand {
    /// Parse one input line.  Returns `None` for a blank line.
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        let Some(rest) = line.strip_prefix(':') else {
            return Some(match line.parse::<usize>() {
                Ok(n) => BoardCommand::SelectIndex(n),
                Err(_) => BoardCommand::Select(line.to_string()),
            });
        };

        let (name, arg) = match rest.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (rest, ""),
        };

        Some(match name {
            "speak" | "s" => BoardCommand::Speak,
            "delete" | "d" => BoardCommand::DeleteLast,
            "clear" | "c" => BoardCommand::Clear,
            "words" | "w" => BoardCommand::ListWords,
            "add" | "a" => BoardCommand::AddWord(arg.to_string()),
            "quit" | "q" => BoardCommand::Quit,
            _ => BoardCommand::Unknown(line.to_string()),
        })
    }

    /// Parse one raw input line.  Bytes that are not UTF-8 become U+FFFD.
    pub fn parse_bytes(line: &[u8]) -> Option<Self> {
        let text = String::from_utf8_lossy(line);
        if let std::borrow::Cow::Owned(_) = text {
            log::warn!("input line is not valid UTF-8; replaced invalid bytes");
        }
        Self::parse(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_line_is_none() {
        assert_eq!(BoardCommand::parse(""), None);
        assert_eq!(BoardCommand::parse("   "), None);
    }

    #[test]
    fn plain_text_selects_label() {
        assert_eq!(
            BoardCommand::parse("  all done "),
            Some(BoardCommand::Select("all done".into()))
        );
    }

    #[test]
    fn number_selects_by_position() {
        assert_eq!(BoardCommand::parse("3"), Some(BoardCommand::SelectIndex(3)));
    }

    #[test]
    fn colon_commands_and_aliases() {
        assert_eq!(BoardCommand::parse(":speak"), Some(BoardCommand::Speak));
        assert_eq!(BoardCommand::parse(":s"), Some(BoardCommand::Speak));
        assert_eq!(BoardCommand::parse(":delete"), Some(BoardCommand::DeleteLast));
        assert_eq!(BoardCommand::parse(":c"), Some(BoardCommand::Clear));
        assert_eq!(BoardCommand::parse(":words"), Some(BoardCommand::ListWords));
        assert_eq!(BoardCommand::parse(":q"), Some(BoardCommand::Quit));
    }

    #[test]
    fn add_keeps_multi_word_argument() {
        assert_eq!(
            BoardCommand::parse(":add  ice cream "),
            Some(BoardCommand::AddWord("ice cream".into()))
        );
        assert_eq!(
            BoardCommand::parse(":add"),
            Some(BoardCommand::AddWord(String::new()))
        );
    }

    #[test]
    fn unknown_colon_command() {
        assert_eq!(
            BoardCommand::parse(":dance"),
            Some(BoardCommand::Unknown(":dance".into()))
        );
    }

    #[test]
    fn invalid_utf8_line_still_parses() {
        assert_eq!(BoardCommand::parse_bytes(b":speak\r"), Some(BoardCommand::Speak));
        assert_eq!(
            BoardCommand::parse_bytes(b"go\xff"),
            Some(BoardCommand::Select("go\u{FFFD}".into()))
        );
        assert_eq!(BoardCommand::parse_bytes(b"\n"), None);
    }
}
