//! Line-oriented host for a [`Session`].
//!
//! One command per line; results and errors are written to the output
//! stream. `open` is resolved here: the session only emits
//! [`Effect::LoadFile`] and the shell reads the file.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use crate::kernel::services::adapters::HeadlessEngine;
use crate::kernel::services::ports::EngineError;
use crate::kernel::{
    Action, DispatchResult, Effect, IconOverride, LanguageId, Session, SessionError, TabId,
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("unknown command: {0}")]
    UnknownCommand(String),
    #[error("usage: {0}")]
    Usage(&'static str),
    #[error("invalid tab id: {0}")]
    InvalidId(String),
    #[error("invalid index: {0}")]
    InvalidIndex(String),
    #[error("unknown language: {0}")]
    UnknownLanguage(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ShellError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error(transparent)]
    Engine(#[from] EngineError),
    #[error("failed to read {path}: {source}")]
    Load {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("no active tab")]
    NoActiveTab,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Act(Action),
    Type(String),
    List,
    Show(Option<TabId>),
    Quit,
}

impl Command {
    /// Parses one input line. Blank lines and `#` comments yield `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Self>, ParseError> {
        let line = line.trim_end_matches(['\r', '\n']);
        let Some((word, rest)) = split_word(line) else {
            return Ok(None);
        };
        if word.starts_with('#') {
            return Ok(None);
        }

        let command = match word {
            "new" => {
                let (name, content) =
                    split_word(rest).ok_or(ParseError::Usage("new <name> [content]"))?;
                let content = (!content.is_empty()).then(|| unescape(content));
                Self::Act(Action::CreateTab {
                    name: name.to_string(),
                    content,
                })
            }
            "open" => {
                let path = rest.trim();
                if path.is_empty() {
                    return Err(ParseError::Usage("open <path>"));
                }
                Self::Act(Action::OpenPath(PathBuf::from(path)))
            }
            "close" => Self::Act(Action::CloseTab(parse_id(rest, "close <id>")?.0)),
            "switch" => Self::Act(Action::ActivateTab(parse_id(rest, "switch <id>")?.0)),
            "next" => Self::Act(Action::NextTab),
            "prev" => Self::Act(Action::PrevTab),
            "rename" => {
                let (id, rest) = parse_id(rest, "rename <id> <name>")?;
                let name = rest.trim();
                if name.is_empty() {
                    return Err(ParseError::Usage("rename <id> <name>"));
                }
                Self::Act(Action::RenameTab {
                    id,
                    name: name.to_string(),
                })
            }
            "set" => {
                let (id, text) = parse_id(rest, "set <id> <text>")?;
                Self::Act(Action::UpdateContent {
                    id,
                    text: unescape(text),
                })
            }
            "lang" => {
                let (id, rest) = parse_id(rest, "lang <id> <language|auto>")?;
                let name = rest.trim();
                let language = match name {
                    "" => return Err(ParseError::Usage("lang <id> <language|auto>")),
                    "auto" => None,
                    name => Some(
                        LanguageId::from_name(name)
                            .ok_or_else(|| ParseError::UnknownLanguage(name.to_string()))?,
                    ),
                };
                Self::Act(Action::SetLanguage { id, language })
            }
            "icon" => {
                let (id, rest) = parse_id(rest, "icon <id> <name> [color]|auto")?;
                let (name, color) =
                    split_word(rest).ok_or(ParseError::Usage("icon <id> <name> [color]|auto"))?;
                let icon = (name != "auto").then(|| IconOverride {
                    name: name.to_string(),
                    color: split_word(color).map(|(color, _)| color.to_string()),
                });
                Self::Act(Action::SetIcon { id, icon })
            }
            "move" => {
                let (id, rest) = parse_id(rest, "move <id> <index>")?;
                let raw = rest.trim();
                let to_index = raw
                    .parse::<usize>()
                    .map_err(|_| ParseError::InvalidIndex(raw.to_string()))?;
                Self::Act(Action::MoveTab { id, to_index })
            }
            "type" => Self::Type(unescape(rest)),
            "ls" => Self::List,
            "show" => {
                let raw = rest.trim();
                if raw.is_empty() {
                    Self::Show(None)
                } else {
                    Self::Show(Some(parse_id(raw, "show [id]")?.0))
                }
            }
            "quit" | "exit" => Self::Quit,
            other => return Err(ParseError::UnknownCommand(other.to_string())),
        };
        Ok(Some(command))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Shell {
    session: Session<HeadlessEngine>,
}

impl Shell {
    pub fn new(session: Session<HeadlessEngine>) -> Self {
        Self { session }
    }

    pub fn session(&self) -> &Session<HeadlessEngine> {
        &self.session
    }

    /// Runs until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> io::Result<()> {
        for line in input.lines() {
            let line = line?;
            if self.execute(&line, out)? == Flow::Quit {
                break;
            }
        }
        out.flush()
    }

    /// Executes one line. Only output failures are returned as errors;
    /// command failures are reported on `out`.
    pub fn execute<W: Write>(&mut self, line: &str, out: &mut W) -> io::Result<Flow> {
        let command = match Command::parse(line) {
            Ok(Some(command)) => command,
            Ok(None) => return Ok(Flow::Continue),
            Err(error) => {
                report_error(out, &ShellError::from(error))?;
                return Ok(Flow::Continue);
            }
        };

        match command {
            Command::Act(action) => self.apply(action, out)?,
            Command::Type(text) => {
                if let Err(error) = self.type_text(&text) {
                    report_error(out, &error)?;
                }
            }
            Command::List => self.list(out)?,
            Command::Show(id) => self.show(id, out)?,
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    /// Dispatches `action` and resolves the effects it produces.
    pub fn apply<W: Write>(&mut self, action: Action, out: &mut W) -> io::Result<()> {
        let result = self.session.dispatch(action);
        self.handle_result(result, out)
    }

    fn handle_result<W: Write>(&mut self, result: DispatchResult, out: &mut W) -> io::Result<()> {
        if let Some(error) = result.error {
            report_error(out, &ShellError::from(error))?;
        }
        for effect in result.effects {
            match effect {
                Effect::LoadFile(path) => match load_file(&path) {
                    Ok((name, content)) => {
                        let result = self.session.dispatch(Action::CreateTab {
                            name,
                            content: Some(content),
                        });
                        self.handle_result(result, out)?;
                    }
                    Err(error) => report_error(out, &error)?,
                },
                Effect::TabOpened(id) => {
                    let name = self
                        .session
                        .tab(id)
                        .map(|tab| tab.name().to_string())
                        .unwrap_or_default();
                    writeln!(out, "opened {id} {name}")?;
                }
            }
        }
        Ok(())
    }

    fn type_text(&mut self, text: &str) -> Result<(), ShellError> {
        if self.session.bound_tab_id().is_none() {
            return Err(ShellError::NoActiveTab);
        }
        self.session.engine_mut().type_text(text)?;
        Ok(())
    }

    fn list<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let active = self.session.active_tab_id();
        for tab in self.session.tabs() {
            let marker = if Some(tab.id()) == active { '*' } else { ' ' };
            writeln!(
                out,
                "{marker}{}\t{}\t{}\t{}\t{}",
                tab.id(),
                tab.name(),
                tab.language(),
                tab.icon_name(),
                tab.icon_color()
            )?;
        }
        Ok(())
    }

    fn show<W: Write>(&self, id: Option<TabId>, out: &mut W) -> io::Result<()> {
        let Some(id) = id.or_else(|| self.session.active_tab_id()) else {
            return report_error(out, &ShellError::NoActiveTab);
        };
        match self.session.content(id) {
            Ok(content) => {
                out.write_all(content.as_bytes())?;
                if !content.ends_with('\n') {
                    writeln!(out)?;
                }
                Ok(())
            }
            Err(error) => report_error(out, &ShellError::from(error)),
        }
    }
}

fn report_error<W: Write>(out: &mut W, error: &ShellError) -> io::Result<()> {
    tracing::debug!(error = %error, "command failed");
    writeln!(out, "error: {error}")
}

fn load_file(path: &Path) -> Result<(String, String), ShellError> {
    let content = std::fs::read_to_string(path).map_err(|source| ShellError::Load {
        path: path.to_path_buf(),
        source,
    })?;
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    Ok((name, content))
}

/// Splits off the first whitespace-delimited word. The remainder starts right
/// after the single separating character, so text arguments keep their
/// inner spacing.
fn split_word(s: &str) -> Option<(&str, &str)> {
    let s = s.trim_start();
    if s.is_empty() {
        return None;
    }
    match s.char_indices().find(|(_, ch)| ch.is_whitespace()) {
        Some((idx, ch)) => Some((&s[..idx], &s[idx + ch.len_utf8()..])),
        None => Some((s, "")),
    }
}

fn parse_id<'a>(s: &'a str, usage: &'static str) -> Result<(TabId, &'a str), ParseError> {
    let (raw, rest) = split_word(s).ok_or(ParseError::Usage(usage))?;
    let id = raw
        .parse::<u64>()
        .map_err(|_| ParseError::InvalidId(raw.to_string()))?;
    Ok((TabId::new(id), rest))
}

fn unescape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}

#[cfg(test)]
#[path = "../tests/unit/shell.rs"]
mod tests;
