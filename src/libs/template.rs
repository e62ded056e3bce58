// Renders `${var}` placeholders in recipe templates.
//
// Known variables:
//   ${prefix}  install root (`--path`)
//   ${home}    the user's home directory
//   ${work}    the per-run download directory
//   ${gist}    VS Code Settings Sync gist id (only with sync credentials)
//   ${token}   VS Code Settings Sync token   (only with sync credentials)
//
// Unknown variables such as `$PATH` are left untouched so they reach the
// shell rc files exactly as written.
//
// Command templates go through `render_command` instead, which quotes each
// substituted value so the tokenizer hands it back as one exact argument.

use crate::libs::tokenizer::is_separator;
use crate::schemas::configuration::Configuration;
use std::path::Path;

#[derive(Clone)]
pub struct TemplateVars {
    prefix: String,
    home: String,
    work: String,
    gist: Option<String>,
    token: Option<String>,
}

impl TemplateVars {
    pub fn new(config: &Configuration, home: &Path, work: &Path) -> Self {
        TemplateVars {
            prefix: config.install_path.to_string_lossy().into_owned(),
            home: home.to_string_lossy().into_owned(),
            work: work.to_string_lossy().into_owned(),
            gist: config.sync.as_ref().map(|s| s.gist.clone()),
            token: config.sync.as_ref().map(|s| s.token.clone()),
        }
    }

    fn lookup(&self, name: &str) -> Option<&str> {
        match name {
            "prefix" => Some(self.prefix.as_str()),
            "home" => Some(self.home.as_str()),
            "work" => Some(self.work.as_str()),
            "gist" => self.gist.as_deref(),
            "token" => self.token.as_deref(),
            _ => None,
        }
    }

    /// Substitutes every known placeholder in `template`.
    pub fn render(&self, template: &str) -> String {
        shellexpand::env_with_context_no_errors(template, |name| self.lookup(name)).into_owned()
    }

    /// Substitutes known placeholders in a command template.
    ///
    /// Outside a quoted segment, a value holding a separator or a quote is
    /// wrapped in quotes. Inside one, its quotes and backslashes are escaped.
    /// Either way `tokenize` + `unquote` yield the value unchanged.
    pub fn render_command(&self, template: &str) -> String {
        let mut out = String::with_capacity(template.len());
        let mut quoted = false;
        let mut escaped = false;
        let mut rest = template;

        while let Some(ch) = rest.chars().next() {
            if !escaped && rest.starts_with("${") {
                if let Some(end) = rest.find('}') {
                    if let Some(value) = self.lookup(&rest[2..end]) {
                        push_value(&mut out, value, quoted);
                        rest = &rest[end + 1..];
                        continue;
                    }
                }
            }
            match (ch, quoted, escaped) {
                (_, true, true) => escaped = false,
                ('\\', true, false) => escaped = true,
                ('"', _, false) => quoted = !quoted,
                _ => {}
            }
            out.push(ch);
            rest = &rest[ch.len_utf8()..];
        }
        out
    }
}

fn push_value(out: &mut String, value: &str, quoted: bool) {
    let needs_quotes = value.chars().any(|c| is_separator(c) || c == '"');
    if !quoted && !needs_quotes {
        out.push_str(value);
        return;
    }
    if !quoted {
        out.push('"');
    }
    for ch in value.chars() {
        if ch == '"' || ch == '\\' {
            out.push('\\');
        }
        out.push(ch);
    }
    if !quoted {
        out.push('"');
    }
}
