//! Scanner state machine
//!
//! The scanner is a plain finite-state machine driven one character at a
//! time. Two transient states (`SeenDash`, `SeenSlash`) stand in for the
//! single character of lookahead needed to tell a literal `-` or `/` apart
//! from a comment opener, so no lookahead buffer is required.

/// Position of the scanner within the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Scanning for the start of a comment or quoted region.
    Init,
    /// Consumed one `-`; may open a line comment.
    SeenDash,
    /// Inside a `--` comment, discarding to end of line.
    InLineComment,
    /// Consumed one `/`; may open a block comment.
    SeenSlash,
    /// Inside a `/* */` comment.
    InBlockComment,
    /// Inside a block comment, just saw `*`; next `/` closes it.
    SeenStarInBlockComment,
    /// Inside a `'...'` literal.
    InSingleQuote,
    /// Inside a `"..."` literal.
    InDoubleQuote,
    /// Inside a `[...]` bracketed identifier.
    InSquareQuote,
}

/// Single-use comment-stripping scanner.
///
/// Input may be fed in chunks of any size with [`push_str`](Self::push_str);
/// chunk boundaries never change the result. [`finish`](Self::finish)
/// resolves any pending state and returns the accumulated output.
///
/// For whole-string input prefer [`strip_sql_comments`](crate::scanner::strip_sql_comments).
#[derive(Debug)]
pub struct Scanner {
    state: State,
    /// True while the most recently emitted character was a newline, used
    /// to collapse blank-line runs.
    prev_newline: bool,
    out: String,
}

impl Scanner {
    pub fn new() -> Self {
        Self {
            state: State::Init,
            prev_newline: false,
            out: String::new(),
        }
    }

    /// Feed a chunk of input to the scanner.
    pub fn push_str(&mut self, chunk: &str) {
        for c in chunk.chars() {
            self.step(c);
        }
    }

    /// Resolve end-of-input and return the stripped text.
    ///
    /// A pending `-` or `/` that never became a comment opener is emitted;
    /// an unterminated comment is treated as closed at end of input; an
    /// unterminated quoted region is left exactly as already emitted, with
    /// no synthetic closing character.
    pub fn finish(mut self) -> String {
        match self.state {
            State::SeenDash => self.out.push('-'),
            State::SeenSlash => self.out.push('/'),
            _ => {}
        }
        self.out
    }

    /// Output accumulated so far, without resolving pending state.
    pub fn output(&self) -> &str {
        &self.out
    }

    fn step(&mut self, c: char) {
        match self.state {
            State::Init => self.scan_init(c),
            State::SeenDash => {
                if c == '-' {
                    self.state = State::InLineComment;
                } else {
                    // Not a comment after all: the dash is literal and the
                    // current character is rescanned under Init rules.
                    self.out.push('-');
                    self.state = State::Init;
                    self.scan_init(c);
                }
            }
            State::InLineComment => {
                if c == '\n' || c == '\r' {
                    if !self.out.is_empty() {
                        if !self.prev_newline {
                            self.out.push('\n');
                        }
                        self.prev_newline = true;
                    }
                    self.state = State::Init;
                }
            }
            State::SeenSlash => {
                if c == '*' {
                    self.state = State::InBlockComment;
                } else {
                    self.out.push('/');
                    self.prev_newline = false;
                    self.state = State::Init;
                    self.scan_init(c);
                }
            }
            State::InBlockComment => {
                if c == '*' {
                    self.state = State::SeenStarInBlockComment;
                }
            }
            State::SeenStarInBlockComment => {
                self.state = if c == '/' {
                    State::Init
                } else {
                    State::InBlockComment
                };
            }
            State::InSingleQuote => {
                self.out.push(c);
                if c == '\'' {
                    self.state = State::Init;
                }
            }
            State::InDoubleQuote => {
                self.out.push(c);
                if c == '"' {
                    self.state = State::Init;
                }
            }
            State::InSquareQuote => {
                self.out.push(c);
                if c == ']' {
                    self.state = State::Init;
                }
            }
        }
    }

    fn scan_init(&mut self, c: char) {
        match c {
            '-' => self.state = State::SeenDash,
            '/' => self.state = State::SeenSlash,
            '\'' => {
                self.out.push(c);
                self.state = State::InSingleQuote;
            }
            '"' => {
                self.out.push(c);
                self.state = State::InDoubleQuote;
            }
            '[' => {
                self.out.push(c);
                self.state = State::InSquareQuote;
            }
            '\n' | '\r' => {
                // Newlines collapse: at most one, and none before the first
                // real content.
                if !self.prev_newline && !self.out.is_empty() {
                    self.out.push('\n');
                    self.prev_newline = true;
                }
            }
            c if c.is_whitespace() => {
                if !self.out.is_empty() {
                    self.out.push(c);
                    self.prev_newline = false;
                }
            }
            _ => {
                self.out.push(c);
                self.prev_newline = false;
            }
        }
    }
}

impl Default for Scanner {
    fn default() -> Self {
        Self::new()
    }
}
