//! ASCII-art templates with `{TOKEN}` placeholders

use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use super::style::{NORMAL, TEMPLATE_TOKENS};
use crate::error::{FreakyfetchError, Result};

/// Template used when the requested one does not exist
pub const GENERIC_TEMPLATE: &str = "unknown";

/// Checked before the installed templates, handy while hacking on a logo
pub const LOCAL_TEMPLATE_DIR: &str = "./res/ascii";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTemplate {
    pub name: String,
    pub path: PathBuf,
    pub fell_back: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedLogo {
    pub text: String,
    pub line_count: usize,
}

/// Where templates are looked up, local directory first
#[derive(Debug, Clone)]
pub struct TemplateSearch {
    pub local_dir: PathBuf,
    pub install_dir: PathBuf,
}

impl TemplateSearch {
    pub fn for_os(os_name: &str) -> Self {
        Self {
            local_dir: PathBuf::from(LOCAL_TEMPLATE_DIR),
            install_dir: super::install_lib_dir(os_name).join("ascii"),
        }
    }

    fn find(&self, name: &str) -> Option<PathBuf> {
        let file_name = format!("{}.txt", name);
        [&self.local_dir, &self.install_dir]
            .into_iter()
            .map(|dir| dir.join(&file_name))
            .inspect(|path| log::debug!("trying template {}", path.display()))
            .find(|path| path.is_file())
    }

    /// Try `requested`, then the generic template, then give up.
    pub fn resolve(&self, requested: &str) -> Result<ResolvedTemplate> {
        let requested = if requested.is_empty() {
            GENERIC_TEMPLATE
        } else {
            requested
        };

        if let Some(path) = self.find(requested) {
            return Ok(ResolvedTemplate {
                name: requested.to_string(),
                path,
                fell_back: false,
            });
        }

        if requested != GENERIC_TEMPLATE {
            log::info!("no template for '{}', using '{}'", requested, GENERIC_TEMPLATE);
            if let Some(path) = self.find(GENERIC_TEMPLATE) {
                return Ok(ResolvedTemplate {
                    name: GENERIC_TEMPLATE.to_string(),
                    path,
                    fell_back: true,
                });
            }
        }

        log::error!("no '{}' ascii template found", GENERIC_TEMPLATE);
        Err(FreakyfetchError::RepeatedFallbackFailure {
            name: GENERIC_TEMPLATE.to_string(),
        })
    }

    /// Template names found in the search directories, sorted and deduplicated
    pub fn available(&self) -> Vec<String> {
        let mut names: Vec<String> = [&self.local_dir, &self.install_dir]
            .into_iter()
            .filter_map(|dir| fs::read_dir(dir).ok())
            .flatten()
            .filter_map(|entry| entry.ok())
            .filter_map(|entry| {
                let path = entry.path();
                if path.extension().and_then(|e| e.to_str()) != Some("txt") {
                    return None;
                }
                path.file_stem().and_then(|s| s.to_str()).map(String::from)
            })
            .collect();
        names.sort();
        names.dedup();
        names
    }
}

/// Resolve and render the template for `requested`
pub fn render(search: &TemplateSearch, requested: &str) -> Result<RenderedLogo> {
    let resolved = search.resolve(requested)?;
    log::info!("rendering template {}", resolved.path.display());
    render_file(&resolved.path)
}

pub fn render_file(path: &Path) -> Result<RenderedLogo> {
    let file = File::open(path).map_err(|_| FreakyfetchError::missing(path))?;
    Ok(render_template(BufReader::new(file)))
}

/// Substitute every line of a template.
///
/// Output starts with an empty line and ends with a style reset, the leading
/// line is part of `line_count`. Bytes that are not UTF-8 are replaced, never
/// dropped, so every line of the file is counted.
pub fn render_template<R: BufRead>(mut reader: R) -> RenderedLogo {
    let mut text = String::from("\n");
    let mut line_count = 1;
    let mut buf = Vec::with_capacity(128);

    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => break,
            Ok(_) => {}
            Err(err) => {
                log::debug!("stopped reading template: {}", err);
                break;
            }
        }
        let raw = buf.strip_suffix(b"\n").unwrap_or(&buf[..]);
        let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
        let line = String::from_utf8_lossy(raw);

        text.push_str(&substitute_tokens(&line));
        text.push('\n');
        line_count += 1;
    }
    text.push_str(NORMAL);

    RenderedLogo { text, line_count }
}

/// Replace every occurrence of every known token, one pass per token
pub fn substitute_tokens(line: &str) -> String {
    TEMPLATE_TOKENS
        .iter()
        .fold(line.to_string(), |acc, (token, value)| {
            if acc.contains(token) {
                acc.replace(token, value)
            } else {
                acc
            }
        })
}
