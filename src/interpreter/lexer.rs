use log::debug;
use logos::{Lexer, Logos};

use crate::error::lex_error::{LexResult, UnknownCharacterError};

/// The terminal categories of the language.
///
/// Keyword variants carry no token attribute of their own: keywords are
/// recognized in [`lex_word`] so that two-word phrases such as `কাকা বলো`
/// obey the same boundary rule as single words.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
pub enum TokenKind {
    /// Numeric literal tokens in ASCII or Bengali digits, such as `42`, `৩.১৪`
    /// or the malformed `1.2.3`. The raw text is kept; conversion happens in
    /// the parser.
    #[regex(r"[0-9০-৯][0-9০-৯.]*", |lex| lex.slice().to_string())]
    Number(String),
    /// String literal tokens in double or single quotes. The payload excludes
    /// the quotes.
    #[token("\"", |lex| lex_string(lex, '"'))]
    #[token("'", |lex| lex_string(lex, '\''))]
    Str(String),
    /// Identifier tokens; variable or function names such as `x` or `যোগফল`.
    Identifier(String),
    /// A scanned word. Never produced: the word callback turns every word into a
    /// keyword or an [`Self::Identifier`].
    #[regex(r"[a-zA-Z_\u{0980}-\u{09E5}\u{09F0}-\u{09FF}][a-zA-Z_0-9\u{0980}-\u{09FF}]*",
            lex_word)]
    Word,
    /// `ও কাকা`
    ProgramStart,
    /// `আসি কাকা`
    ProgramEnd,
    /// `কাকা রাখো`
    Var,
    /// `কাকা বলো`
    Print,
    /// `যদি কাকা`
    If,
    /// `নাহলে কাকা`
    Else,
    /// `যতক্ষণ কাকা`
    While,
    /// `ব্যাস কাকা`
    Break,
    /// `পরেরটা কাকা`
    Continue,
    /// `ঠিক`
    True,
    /// `ভুল`
    False,
    /// `ফালতু`
    Null,
    /// `কাকা শোনো`
    Input,
    /// `এবং`
    And,
    /// `অথবা`
    Or,
    /// `ফাংশন কাকা`
    Function,
    /// `ফেরত নাও`
    Return,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `,`
    #[token(",")]
    Comma,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// `=`
    #[token("=")]
    Equals,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `>`
    #[token(">")]
    Greater,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// A lone `!`, dropped without producing a token.
    #[token("!", logos::skip)]
    Bang,
    /// `// Comments.`
    #[token("//", skip_comment)]
    Comment,
    /// Newlines only advance the line counter.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// Whitespace other than newlines, including a byte-order mark.
    #[regex(r"[^\S\n]+|\u{FEFF}", logos::skip)]
    Ignored,
    /// End of input, appended once after the scan.
    Eof,
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(raw) => write!(f, "number '{raw}'"),
            Self::Str(text) => write!(f, "string \"{text}\""),
            Self::Identifier(name) => write!(f, "identifier '{name}'"),
            Self::Eof => write!(f, "end of input"),
            other => match keyword_text(other).or_else(|| punctuation_text(other)) {
                Some(text) => write!(f, "'{text}'"),
                None => write!(f, "{other:?}"),
            },
        }
    }
}

/// A token together with its source text and starting line.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The terminal category, with payload for literals and identifiers.
    pub kind:   TokenKind,
    /// The literal text the token was scanned from.
    pub lexeme: String,
    /// The line on which the token starts.
    pub line:   usize,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// Converts source text into a token sequence ending with
/// [`TokenKind::Eof`].
///
/// Tokens carry the line on which they start; a string spanning several
/// lines advances the counter for the tokens after it.
///
/// # Errors
/// Returns an [`UnknownCharacterError`] for the first character that starts
/// no token.
///
/// # Example
/// ```
/// use kaka::interpreter::lexer::{TokenKind, tokenize};
///
/// let tokens = tokenize("কাকা বলো ৫;").unwrap();
/// let kinds: Vec<_> = tokens.into_iter().map(|t| t.kind).collect();
///
/// assert_eq!(kinds,
///            vec![TokenKind::Print,
///                 TokenKind::Number("৫".to_string()),
///                 TokenKind::Semicolon,
///                 TokenKind::Eof]);
/// ```
pub fn tokenize(source: &str) -> LexResult<Vec<Token>> {
    let mut lexer = TokenKind::lexer_with_extras(source, LexerExtras { line: 1 });
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        let line = lexer.extras.line;
        let lexeme = lexer.slice();

        match result {
            Ok(kind) => {
                if matches!(kind, TokenKind::Str(_)) {
                    lexer.extras.line += lexeme.matches('\n').count();
                }
                tokens.push(Token { kind,
                                    lexeme: lexeme.to_string(),
                                    line });
            },
            Err(()) => {
                let character = lexeme.chars().next().unwrap_or_default();
                return Err(UnknownCharacterError { character, line });
            },
        }
    }

    tokens.push(Token { kind:   TokenKind::Eof,
                        lexeme: String::new(),
                        line:   lexer.extras.line, });
    debug!("scanned {} tokens over {} lines", tokens.len(), lexer.extras.line);

    Ok(tokens)
}

/// Scans a string literal after its opening quote.
///
/// There are no escape sequences. Without a closing quote the literal runs to
/// the end of the input.
fn lex_string(lex: &mut Lexer<TokenKind>, quote: char) -> String {
    let rest = lex.remainder();
    if let Some(end) = rest.find(quote) {
        let text = rest[..end].to_string();
        lex.bump(end + quote.len_utf8());
        text
    } else {
        let text = rest.to_string();
        lex.bump(rest.len());
        text
    }
}

/// Skips a `//` comment up to, but not including, the newline.
fn skip_comment(lex: &mut Lexer<TokenKind>) -> logos::Skip {
    let rest = lex.remainder();
    lex.bump(rest.find('\n').unwrap_or(rest.len()));
    logos::Skip
}

/// Classifies a scanned word as a keyword or an identifier.
///
/// Single-word keywords match the whole word. A two-word keyword matches when
/// the word is followed by exactly one space, the second word, and then
/// whitespace, one of `(){};,` or the end of input. The second word is
/// consumed as part of the keyword token.
fn lex_word(lex: &mut Lexer<TokenKind>) -> TokenKind {
    let word = lex.slice();
    if let Some(kind) = single_word_keyword(word) {
        return kind;
    }

    if let Some(rest) = lex.remainder().strip_prefix(' ') {
        let second_len = rest.find(|c: char| !is_word_char(c)).unwrap_or(rest.len());
        let (second, after) = rest.split_at(second_len);

        if is_keyword_boundary(after)
           && let Some(kind) = two_word_keyword(word, second)
        {
            lex.bump(1 + second.len());
            return kind;
        }
    }

    TokenKind::Identifier(word.to_string())
}

/// Returns `true` for characters that may continue an identifier.
const fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || matches!(c, '\u{0980}'..='\u{09FF}')
}

/// Returns `true` when a keyword may end right before `rest`.
fn is_keyword_boundary(rest: &str) -> bool {
    rest.chars()
        .next()
        .is_none_or(|c| c.is_whitespace() || "(){};,".contains(c))
}

fn single_word_keyword(word: &str) -> Option<TokenKind> {
    match word {
        "ঠিক" => Some(TokenKind::True),
        "ভুল" => Some(TokenKind::False),
        "ফালতু" => Some(TokenKind::Null),
        "এবং" => Some(TokenKind::And),
        "অথবা" => Some(TokenKind::Or),
        _ => None,
    }
}

fn two_word_keyword(first: &str, second: &str) -> Option<TokenKind> {
    match (first, second) {
        ("ও", "কাকা") => Some(TokenKind::ProgramStart),
        ("আসি", "কাকা") => Some(TokenKind::ProgramEnd),
        ("কাকা", "রাখো") => Some(TokenKind::Var),
        ("কাকা", "বলো") => Some(TokenKind::Print),
        ("কাকা", "শোনো") => Some(TokenKind::Input),
        ("যদি", "কাকা") => Some(TokenKind::If),
        ("নাহলে", "কাকা") => Some(TokenKind::Else),
        ("যতক্ষণ", "কাকা") => Some(TokenKind::While),
        ("ব্যাস", "কাকা") => Some(TokenKind::Break),
        ("পরেরটা", "কাকা") => Some(TokenKind::Continue),
        ("ফাংশন", "কাকা") => Some(TokenKind::Function),
        ("ফেরত", "নাও") => Some(TokenKind::Return),
        _ => None,
    }
}

/// The source spelling of a keyword kind.
///
/// The printer uses this to render statements, so it is the single place the
/// keyword phrases are written out besides the scanner tables.
#[must_use]
pub const fn keyword_text(kind: &TokenKind) -> Option<&'static str> {
    match kind {
        TokenKind::ProgramStart => Some("ও কাকা"),
        TokenKind::ProgramEnd => Some("আসি কাকা"),
        TokenKind::Var => Some("কাকা রাখো"),
        TokenKind::Print => Some("কাকা বলো"),
        TokenKind::If => Some("যদি কাকা"),
        TokenKind::Else => Some("নাহলে কাকা"),
        TokenKind::While => Some("যতক্ষণ কাকা"),
        TokenKind::Break => Some("ব্যাস কাকা"),
        TokenKind::Continue => Some("পরেরটা কাকা"),
        TokenKind::True => Some("ঠিক"),
        TokenKind::False => Some("ভুল"),
        TokenKind::Null => Some("ফালতু"),
        TokenKind::Input => Some("কাকা শোনো"),
        TokenKind::And => Some("এবং"),
        TokenKind::Or => Some("অথবা"),
        TokenKind::Function => Some("ফাংশন কাকা"),
        TokenKind::Return => Some("ফেরত নাও"),
        _ => None,
    }
}

const fn punctuation_text(kind: &TokenKind) -> Option<&'static str> {
    match kind {
        TokenKind::Plus => Some("+"),
        TokenKind::Minus => Some("-"),
        TokenKind::Star => Some("*"),
        TokenKind::Slash => Some("/"),
        TokenKind::Percent => Some("%"),
        TokenKind::Semicolon => Some(";"),
        TokenKind::Comma => Some(","),
        TokenKind::LParen => Some("("),
        TokenKind::RParen => Some(")"),
        TokenKind::LBrace => Some("{"),
        TokenKind::RBrace => Some("}"),
        TokenKind::LBracket => Some("["),
        TokenKind::RBracket => Some("]"),
        TokenKind::Equals => Some("="),
        TokenKind::EqualEqual => Some("=="),
        TokenKind::BangEqual => Some("!="),
        TokenKind::Greater => Some(">"),
        TokenKind::GreaterEqual => Some(">="),
        TokenKind::Less => Some("<"),
        TokenKind::LessEqual => Some("<="),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use indoc::indoc;

    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        tokenize(source).unwrap().into_iter().map(|t| t.kind).collect()
    }

    fn ident(name: &str) -> TokenKind {
        TokenKind::Identifier(name.to_string())
    }

    #[test]
    fn test_scenario_program() {
        let source = "ও কাকা কাকা রাখো x = 5; কাকা রাখো y = 3; কাকা বলো x + y; আসি কাকা";
        assert_eq!(kinds(source),
                   vec![TokenKind::ProgramStart,
                        TokenKind::Var,
                        ident("x"),
                        TokenKind::Equals,
                        TokenKind::Number("5".to_string()),
                        TokenKind::Semicolon,
                        TokenKind::Var,
                        ident("y"),
                        TokenKind::Equals,
                        TokenKind::Number("3".to_string()),
                        TokenKind::Semicolon,
                        TokenKind::Print,
                        ident("x"),
                        TokenKind::Plus,
                        ident("y"),
                        TokenKind::Semicolon,
                        TokenKind::ProgramEnd,
                        TokenKind::Eof]);
    }

    #[test]
    fn test_empty_source_is_just_eof() {
        assert_eq!(kinds(""), vec![TokenKind::Eof]);
        assert_eq!(kinds("  \n\t// nothing here\n"), vec![TokenKind::Eof]);
    }

    #[test]
    fn test_keyword_needs_boundary() {
        assert_eq!(kinds("কাকা বলোক"), vec![ident("কাকা"), ident("বলোক"), TokenKind::Eof]);
        assert_eq!(kinds("কাকা বলো(১)"),
                   vec![TokenKind::Print,
                        TokenKind::LParen,
                        TokenKind::Number("১".to_string()),
                        TokenKind::RParen,
                        TokenKind::Eof]);
        assert_eq!(kinds("কাকা বলো+"), vec![ident("কাকা"), ident("বলো"), TokenKind::Plus, TokenKind::Eof]);
    }

    #[test]
    fn test_two_word_keyword_needs_single_space() {
        assert_eq!(kinds("কাকা  বলো"), vec![ident("কাকা"), ident("বলো"), TokenKind::Eof]);
        assert_eq!(kinds("কাকা\nবলো"), vec![ident("কাকা"), ident("বলো"), TokenKind::Eof]);
    }

    #[test]
    fn test_single_word_keywords_inside_longer_words() {
        assert_eq!(kinds("ঠিক ঠিকানা ভুল"),
                   vec![TokenKind::True, ident("ঠিকানা"), TokenKind::False, TokenKind::Eof]);
        assert_eq!(kinds("ঠিক+১"),
                   vec![TokenKind::True,
                        TokenKind::Plus,
                        TokenKind::Number("১".to_string()),
                        TokenKind::Eof]);
    }

    #[test]
    fn test_words_are_always_classified() {
        let source = "ও কাকা যদি কাকা নাহলে কাকা যতক্ষণ কাকা ফাংশন কাকা ফেরত নাও কাকা শোনো \
                      এবং অথবা ফালতু ব্যাস কাকা পরেরটা কাকা x_1 যোগফল আসি কাকা";
        let kinds = kinds(source);

        assert!(!kinds.contains(&TokenKind::Word));
        assert_eq!(kinds.iter().filter(|kind| matches!(kind, TokenKind::Identifier(_))).count(),
                   2);
        assert_eq!(kinds.len(), 16);
    }

    #[test]
    fn test_byte_order_mark_is_whitespace() {
        assert_eq!(kinds("\u{FEFF}ও কাকা আসি কাকা"),
                   vec![TokenKind::ProgramStart, TokenKind::ProgramEnd, TokenKind::Eof]);
        assert_eq!(kinds("x\u{FEFF}y"), vec![ident("x"), ident("y"), TokenKind::Eof]);
    }

    #[test]
    fn test_numbers_keep_raw_text() {
        assert_eq!(kinds("১২.৫ 3.14 1.2.3"),
                   vec![TokenKind::Number("১২.৫".to_string()),
                        TokenKind::Number("3.14".to_string()),
                        TokenKind::Number("1.2.3".to_string()),
                        TokenKind::Eof]);
        assert_eq!(kinds("১ক"), vec![TokenKind::Number("১".to_string()), ident("ক"), TokenKind::Eof]);
    }

    #[test]
    fn test_strings() {
        assert_eq!(kinds(r#""hello" 'it''s'"#),
                   vec![TokenKind::Str("hello".to_string()),
                        TokenKind::Str("it".to_string()),
                        TokenKind::Str("s".to_string()),
                        TokenKind::Eof]);
        assert_eq!(kinds(r#"'say "hi"'"#), vec![TokenKind::Str("say \"hi\"".to_string()), TokenKind::Eof]);
    }

    #[test]
    fn test_unterminated_string_runs_to_end() {
        assert_eq!(kinds("\"abc;\nআসি কাকা"),
                   vec![TokenKind::Str("abc;\nআসি কাকা".to_string()), TokenKind::Eof]);
    }

    #[test]
    fn test_lone_bang_is_dropped() {
        assert_eq!(kinds("!x != y"),
                   vec![ident("x"), TokenKind::BangEqual, ident("y"), TokenKind::Eof]);
    }

    #[test]
    fn test_operators() {
        assert_eq!(kinds("== = >= > <= < % /"),
                   vec![TokenKind::EqualEqual,
                        TokenKind::Equals,
                        TokenKind::GreaterEqual,
                        TokenKind::Greater,
                        TokenKind::LessEqual,
                        TokenKind::Less,
                        TokenKind::Percent,
                        TokenKind::Slash,
                        TokenKind::Eof]);
    }

    #[test]
    fn test_line_numbers() {
        let source = indoc! {r#"
            ও কাকা
            // a comment
            কাকা বলো "two
            lines";
            আসি কাকা
        "#};
        let tokens = tokenize(source).unwrap();
        let lines: Vec<_> = tokens.iter().map(|t| t.line).collect();

        assert_eq!(lines, vec![1, 3, 3, 4, 5, 6]);
        assert_eq!(tokens[1].lexeme, "কাকা বলো");
        assert_eq!(tokens[2].lexeme, "\"two\nlines\"");
    }

    #[test]
    fn test_unknown_character() {
        let err = tokenize("ও কাকা\nকাকা বলো @;").unwrap_err();

        assert_eq!(err, UnknownCharacterError { character: '@', line: 2 });
        assert_eq!(err.to_string(),
                   "Error on line 2: অচেনা অক্ষর (Unknown character): '@'.");
    }

    #[test]
    fn test_display_of_kinds() {
        assert_eq!(TokenKind::Print.to_string(), "'কাকা বলো'");
        assert_eq!(TokenKind::Semicolon.to_string(), "';'");
        assert_eq!(TokenKind::Eof.to_string(), "end of input");
        assert_eq!(ident("x").to_string(), "identifier 'x'");
    }
}
