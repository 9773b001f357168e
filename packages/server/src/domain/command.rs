//! Slash-command parsing for incoming chat text.

/// Every command starts with this character.
pub const COMMAND_SIGIL: char = '/';

/// Exact payload that requests the command list.
pub const HELP_COMMAND: &str = "/help";

/// Prefix of the rename command; the rest of the payload is the alias.
pub const ALIAS_PREFIX: &str = "/alias ";

/// What a single text payload asks the server to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command<'a> {
    /// `/help`
    Help,
    /// `/alias <name>` with a non-empty argument, taken verbatim
    Alias(&'a str),
    /// `/alias` with nothing after it
    MissingAlias,
    /// Any other payload starting with `/`
    Unknown(&'a str),
    /// Plain chat text
    Chat(&'a str),
    /// Zero-length payload
    Empty,
}

impl<'a> Command<'a> {
    /// Classify a text payload.
    pub fn parse(payload: &'a str) -> Self {
        if payload.is_empty() {
            return Self::Empty;
        }
        if payload == HELP_COMMAND {
            return Self::Help;
        }
        if payload == ALIAS_PREFIX.trim_end() {
            return Self::MissingAlias;
        }
        if let Some(alias) = payload.strip_prefix(ALIAS_PREFIX) {
            if alias.is_empty() {
                return Self::MissingAlias;
            }
            return Self::Alias(alias);
        }
        if payload.starts_with(COMMAND_SIGIL) {
            return Self::Unknown(payload);
        }
        Self::Chat(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_help() {
        // テスト項目: "/help" は Help コマンドになる
        assert_eq!(Command::parse("/help"), Command::Help);
    }

    #[test]
    fn test_parse_help_with_trailing_text_is_unknown() {
        // テスト項目: "/help" と完全一致しない場合は未知のコマンド
        assert_eq!(Command::parse("/help me"), Command::Unknown("/help me"));
    }

    #[test]
    fn test_parse_alias() {
        // テスト項目: "/alias Bob" は引数付きの Alias コマンドになる
        assert_eq!(Command::parse("/alias Bob"), Command::Alias("Bob"));
    }

    #[test]
    fn test_parse_alias_keeps_argument_verbatim() {
        // テスト項目: 引数は空白も含めてそのまま取り出される
        assert_eq!(
            Command::parse("/alias  Bob Smith "),
            Command::Alias(" Bob Smith ")
        );
    }

    #[test]
    fn test_parse_alias_without_argument() {
        // テスト項目: 引数のない "/alias " と "/alias" は MissingAlias になる
        assert_eq!(Command::parse("/alias "), Command::MissingAlias);
        assert_eq!(Command::parse("/alias"), Command::MissingAlias);
    }

    #[test]
    fn test_parse_unknown_command() {
        // テスト項目: 未知のスラッシュコマンドは Unknown になる
        assert_eq!(Command::parse("/bogus"), Command::Unknown("/bogus"));
        assert_eq!(Command::parse("/aliasBob"), Command::Unknown("/aliasBob"));
    }

    #[test]
    fn test_parse_plain_chat() {
        // テスト項目: スラッシュで始まらないテキストはチャットになる
        assert_eq!(Command::parse("hello"), Command::Chat("hello"));
        assert_eq!(Command::parse(" /help"), Command::Chat(" /help"));
    }

    #[test]
    fn test_parse_empty() {
        // テスト項目: 空のペイロードは Empty になる
        assert_eq!(Command::parse(""), Command::Empty);
    }
}
