//! Walks a file mapping, renders each leaf template and writes the results.
//!
//! Writing is strictly additive: a file that already exists is reported as
//! skipped and never rendered, truncated or overwritten.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Component, Path, PathBuf};

use indexmap::IndexMap;
use log::debug;

use crate::error::{Error, Result};
use crate::mapping::{MappingNode, TemplateContext};
use crate::renderer::TemplateRenderer;

/// Outcome of a render pass.
///
/// Every leaf visited ends up in exactly one of the two lists.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RenderResult {
    pub created: Vec<PathBuf>,
    pub skipped: Vec<PathBuf>,
}

impl RenderResult {
    /// Total number of leaves visited.
    pub fn len(&self) -> usize {
        self.created.len() + self.skipped.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Renders every leaf of `node` below `target_dir`.
///
/// # Arguments
/// * `renderer` - Renderer bound to the template set the mapping refers to
/// * `node` - Root of the mapping; must be a directory
/// * `target_dir` - Directory the mapping root corresponds to
///
/// # Errors
/// * `Error::MappingError` if the root is a leaf or a name is not a single path segment
/// * `Error::MinijinjaError` if a template is missing or fails to render
/// * `Error::IoError` on filesystem failures; files written so far are kept
pub fn render_and_write(
    renderer: &dyn TemplateRenderer,
    node: &MappingNode<'_>,
    target_dir: &Path,
) -> Result<RenderResult> {
    let children = match node {
        MappingNode::Directory(children) => children,
        MappingNode::Leaf { template, .. } => {
            return Err(Error::MappingError(format!(
                "the mapping root must be a directory, found template '{}'",
                template
            )))
        }
    };

    let mut processor = Processor { renderer, result: RenderResult::default() };
    ensure_dir(target_dir)?;
    processor.walk(children, target_dir)?;
    Ok(processor.result)
}

struct Processor<'r> {
    renderer: &'r dyn TemplateRenderer,
    result: RenderResult,
}

impl Processor<'_> {
    fn walk(&mut self, children: &IndexMap<String, MappingNode<'_>>, dir: &Path) -> Result<()> {
        for (name, child) in children {
            validate_segment(name)?;
            let path = dir.join(name);
            match child {
                MappingNode::Directory(grandchildren) => {
                    ensure_dir(&path)?;
                    self.walk(grandchildren, &path)?;
                }
                MappingNode::Leaf { template, context } => {
                    self.write_leaf(template, context, path)?;
                }
            }
        }
        Ok(())
    }

    fn write_leaf(&mut self, template: &str, context: &TemplateContext, path: PathBuf) -> Result<()> {
        if path.exists() {
            debug!("Skipping existing file: {}", path.display());
            self.result.skipped.push(path);
            return Ok(());
        }

        let content = self.renderer.render(template, &serde_json::to_value(context)?)?;

        if write_new_file(&path, &content)? {
            debug!("Writing file: {}", path.display());
            self.result.created.push(path);
        } else {
            debug!("Skipping existing file: {}", path.display());
            self.result.skipped.push(path);
        }
        Ok(())
    }
}

/// Accepts only names that stay directly inside their parent directory.
fn validate_segment(name: &str) -> Result<()> {
    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(segment)), None) if segment == name => Ok(()),
        _ => Err(Error::MappingError(format!("'{}' is not a valid file or directory name", name))),
    }
}

fn ensure_dir(path: &Path) -> Result<()> {
    if !path.is_dir() {
        debug!("Creating directory: {}", path.display());
        fs::create_dir_all(path)?;
    }
    Ok(())
}

/// Writes `content` to a file that must not exist yet.
///
/// Returns `false`, leaving the existing file untouched, if `path` already exists.
fn write_new_file(path: &Path, content: &str) -> Result<bool> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => return Ok(false),
        Err(e) => return Err(Error::IoError(e)),
    };
    file.write_all(content.as_bytes())?;
    Ok(true)
}
