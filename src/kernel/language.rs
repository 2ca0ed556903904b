//! Filename -> language resolution.
//!
//! The table is static and consulted fresh on every call; nothing derived
//! from it is cached on tabs.

use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageId {
    PlainText,
    Rust,
    Go,
    Python,
    JavaScript,
    TypeScript,
    C,
    Cpp,
    Java,
    Json,
    Yaml,
    Toml,
    Html,
    Xml,
    Css,
    Scss,
    Less,
    Markdown,
    Shell,
    Sql,
    Dockerfile,
    Makefile,
}

pub const GENERIC_ICON: &str = "file";
pub const GENERIC_COLOR: &str = "#8a8a8a";

/// Display defaults suggested for a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub language: LanguageId,
    pub icon_name: &'static str,
    pub icon_color: &'static str,
}

impl Resolution {
    pub fn is_generic(&self) -> bool {
        self.language == LanguageId::PlainText && self.icon_name == GENERIC_ICON
    }
}

#[derive(Debug, Clone, Copy)]
enum Pattern {
    /// Whole file name, e.g. `Dockerfile`.
    Exact(&'static str),
    /// File name suffix including the dot, e.g. `.d.ts`.
    Suffix(&'static str),
}

impl Pattern {
    fn text(self) -> &'static str {
        match self {
            Self::Exact(s) | Self::Suffix(s) => s,
        }
    }

    fn matches(self, file_name: &str) -> bool {
        match self {
            Self::Exact(s) => file_name.eq_ignore_ascii_case(s),
            Self::Suffix(s) => {
                // A bare suffix (`.rs`) never matches a name consisting only of
                // that suffix; dotfiles are not extensions.
                file_name.len() > s.len()
                    && file_name
                        .get(file_name.len() - s.len()..)
                        .is_some_and(|tail| tail.eq_ignore_ascii_case(s))
            }
        }
    }
}

struct LanguageRule {
    pattern: Pattern,
    language: LanguageId,
    icon: &'static str,
    color: &'static str,
}

const fn rule(
    pattern: Pattern,
    language: LanguageId,
    icon: &'static str,
    color: &'static str,
) -> LanguageRule {
    LanguageRule {
        pattern,
        language,
        icon,
        color,
    }
}

use LanguageId as L;
use Pattern::{Exact, Suffix};

static RULES: &[LanguageRule] = &[
    rule(Suffix(".rs"), L::Rust, "rust", "#dea584"),
    rule(Suffix(".go"), L::Go, "go", "#00add8"),
    rule(Exact("go.mod"), L::Go, "go", "#00add8"),
    rule(Suffix(".py"), L::Python, "python", "#3776ab"),
    rule(Suffix(".pyi"), L::Python, "python", "#3776ab"),
    rule(Suffix(".js"), L::JavaScript, "javascript", "#f7df1e"),
    rule(Suffix(".mjs"), L::JavaScript, "javascript", "#f7df1e"),
    rule(Suffix(".cjs"), L::JavaScript, "javascript", "#f7df1e"),
    rule(Suffix(".jsx"), L::JavaScript, "react", "#61dafb"),
    rule(Suffix(".ts"), L::TypeScript, "typescript", "#3178c6"),
    rule(Suffix(".mts"), L::TypeScript, "typescript", "#3178c6"),
    rule(Suffix(".cts"), L::TypeScript, "typescript", "#3178c6"),
    rule(Suffix(".d.ts"), L::TypeScript, "typescript-def", "#235a97"),
    rule(Suffix(".tsx"), L::TypeScript, "react", "#61dafb"),
    rule(Suffix(".c"), L::C, "c", "#a8b9cc"),
    rule(Suffix(".h"), L::C, "c", "#a8b9cc"),
    rule(Suffix(".cc"), L::Cpp, "cpp", "#00599c"),
    rule(Suffix(".cpp"), L::Cpp, "cpp", "#00599c"),
    rule(Suffix(".cxx"), L::Cpp, "cpp", "#00599c"),
    rule(Suffix(".hpp"), L::Cpp, "cpp", "#00599c"),
    rule(Suffix(".java"), L::Java, "java", "#b07219"),
    rule(Suffix(".json"), L::Json, "json", "#cbcb41"),
    rule(Exact("package.json"), L::Json, "npm", "#cb3837"),
    rule(Exact("tsconfig.json"), L::Json, "typescript", "#3178c6"),
    rule(Suffix(".yaml"), L::Yaml, "yaml", "#cb171e"),
    rule(Suffix(".yml"), L::Yaml, "yaml", "#cb171e"),
    rule(Suffix(".toml"), L::Toml, "toml", "#9c4221"),
    rule(Exact("Cargo.toml"), L::Toml, "cargo", "#dea584"),
    rule(Exact("Cargo.lock"), L::Toml, "cargo", "#dea584"),
    rule(Suffix(".html"), L::Html, "html", "#e34c26"),
    rule(Suffix(".htm"), L::Html, "html", "#e34c26"),
    rule(Suffix(".vue"), L::Html, "vue", "#41b883"),
    rule(Suffix(".xml"), L::Xml, "xml", "#0060ac"),
    rule(Suffix(".svg"), L::Xml, "svg", "#ffb13b"),
    rule(Suffix(".css"), L::Css, "css", "#563d7c"),
    rule(Suffix(".scss"), L::Scss, "sass", "#c6538c"),
    rule(Suffix(".less"), L::Less, "less", "#1d365d"),
    rule(Suffix(".md"), L::Markdown, "markdown", "#519aba"),
    rule(Suffix(".markdown"), L::Markdown, "markdown", "#519aba"),
    rule(Suffix(".sh"), L::Shell, "shell", "#89e051"),
    rule(Suffix(".bash"), L::Shell, "shell", "#89e051"),
    rule(Suffix(".zsh"), L::Shell, "shell", "#89e051"),
    rule(Suffix(".sql"), L::Sql, "database", "#e38c00"),
    rule(Exact("Dockerfile"), L::Dockerfile, "docker", "#2496ed"),
    rule(Suffix(".dockerfile"), L::Dockerfile, "docker", "#2496ed"),
    rule(Exact("Makefile"), L::Makefile, "makefile", "#6d8086"),
    rule(Suffix(".mk"), L::Makefile, "makefile", "#6d8086"),
    rule(Suffix(".txt"), L::PlainText, GENERIC_ICON, GENERIC_COLOR),
];

/// Resolves a file name (or path) to its language and display defaults.
///
/// The longest matching pattern wins, ties go to the earlier table entry.
/// Names matching nothing resolve to plain text with the generic icon.
pub fn resolve(name: &str) -> Resolution {
    let file_name = Path::new(name)
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or(name);

    let mut best: Option<&LanguageRule> = None;
    for rule in RULES {
        if !rule.pattern.matches(file_name) {
            continue;
        }
        let longer = best.map_or(true, |b| rule.pattern.text().len() > b.pattern.text().len());
        if longer {
            best = Some(rule);
        }
    }

    match best {
        Some(rule) => Resolution {
            language: rule.language,
            icon_name: rule.icon,
            icon_color: rule.color,
        },
        None => LanguageId::PlainText.defaults(),
    }
}

impl LanguageId {
    pub const ALL: [LanguageId; 22] = [
        Self::PlainText,
        Self::Rust,
        Self::Go,
        Self::Python,
        Self::JavaScript,
        Self::TypeScript,
        Self::C,
        Self::Cpp,
        Self::Java,
        Self::Json,
        Self::Yaml,
        Self::Toml,
        Self::Html,
        Self::Xml,
        Self::Css,
        Self::Scss,
        Self::Less,
        Self::Markdown,
        Self::Shell,
        Self::Sql,
        Self::Dockerfile,
        Self::Makefile,
    ];

    /// Engine-facing identifier.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::PlainText => "plaintext",
            Self::Rust => "rust",
            Self::Go => "go",
            Self::Python => "python",
            Self::JavaScript => "javascript",
            Self::TypeScript => "typescript",
            Self::C => "c",
            Self::Cpp => "cpp",
            Self::Java => "java",
            Self::Json => "json",
            Self::Yaml => "yaml",
            Self::Toml => "toml",
            Self::Html => "html",
            Self::Xml => "xml",
            Self::Css => "css",
            Self::Scss => "scss",
            Self::Less => "less",
            Self::Markdown => "markdown",
            Self::Shell => "shell",
            Self::Sql => "sql",
            Self::Dockerfile => "dockerfile",
            Self::Makefile => "makefile",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        let lang = match name.to_ascii_lowercase().as_str() {
            "plaintext" | "text" | "txt" => Self::PlainText,
            "rust" | "rs" => Self::Rust,
            "go" | "golang" => Self::Go,
            "python" | "py" => Self::Python,
            "javascript" | "js" => Self::JavaScript,
            "typescript" | "ts" => Self::TypeScript,
            "c" => Self::C,
            "cpp" | "c++" => Self::Cpp,
            "java" => Self::Java,
            "json" => Self::Json,
            "yaml" | "yml" => Self::Yaml,
            "toml" => Self::Toml,
            "html" => Self::Html,
            "xml" => Self::Xml,
            "css" => Self::Css,
            "scss" => Self::Scss,
            "less" => Self::Less,
            "markdown" | "md" => Self::Markdown,
            "shell" | "sh" | "bash" => Self::Shell,
            "sql" => Self::Sql,
            "dockerfile" => Self::Dockerfile,
            "makefile" => Self::Makefile,
            _ => return None,
        };
        Some(lang)
    }

    /// The language's own icon/color, independent of any file name.
    ///
    /// Uses the first table entry for the language.
    pub fn defaults(self) -> Resolution {
        RULES
            .iter()
            .find(|r| r.language == self)
            .map(|r| Resolution {
                language: self,
                icon_name: r.icon,
                icon_color: r.color,
            })
            .unwrap_or(Resolution {
                language: self,
                icon_name: GENERIC_ICON,
                icon_color: GENERIC_COLOR,
            })
    }
}

impl std::fmt::Display for LanguageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/language.rs"]
mod tests;
