//! Page and site generation around the Markdown core: template substitution,
//! a recursive content walk and a clean copy of static assets.

use crate::ast::{ValidationError, extract_title, markdown_to_html};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub mod config;

pub use config::{CONFIG_FILE_NAME, ConfigError, SiteConfig};

pub const TITLE_PLACEHOLDER: &str = "{{ Title }}";
pub const CONTENT_PLACEHOLDER: &str = "{{ Content }}";

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("IO error at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("No title in {path}: expected a line starting with \"# \"")]
    MissingTitle { path: PathBuf },

    #[error("Failed to render {path}: {source}")]
    Render {
        path: PathBuf,
        source: ValidationError,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),
}

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> SiteError + '_ {
    move |source| SiteError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// What a full build produced.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BuildReport {
    pub copied_files: usize,
    pub pages: Vec<PathBuf>,
}

/// Substitute the title and content placeholders. Substituted text is never
/// scanned again, so a page mentioning `{{ Title }}` keeps it literally.
pub fn render_template(template: &str, title: &str, content: &str) -> String {
    template
        .split(CONTENT_PLACEHOLDER)
        .map(|part| part.replace(TITLE_PLACEHOLDER, title))
        .collect::<Vec<_>>()
        .join(content)
}

/// Render one markdown document into `template`. `source` is only used for
/// error reporting.
pub fn render_page(markdown: &str, template: &str, source: &Path) -> Result<String, SiteError> {
    let content = markdown_to_html(markdown).map_err(|err| SiteError::Render {
        path: source.to_path_buf(),
        source: err,
    })?;
    let title = extract_title(markdown).ok_or_else(|| SiteError::MissingTitle {
        path: source.to_path_buf(),
    })?;
    Ok(render_template(template, &title, &content))
}

/// Generate `dest` from the markdown file `from` and the template file at
/// `template_path`.
pub fn generate_page(from: &Path, dest: &Path, template_path: &Path) -> Result<(), SiteError> {
    log::info!(
        "Generating page from {} to {} using {}",
        from.display(),
        dest.display(),
        template_path.display()
    );
    let template = fs::read_to_string(template_path).map_err(io_error(template_path))?;
    write_page(from, dest, &template)
}

fn write_page(from: &Path, dest: &Path, template: &str) -> Result<(), SiteError> {
    let markdown = fs::read_to_string(from).map_err(io_error(from))?;
    let page = render_page(&markdown, template, from)?;
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent).map_err(io_error(parent))?;
    }
    fs::write(dest, page).map_err(io_error(dest))
}

/// Generate an `.html` page for every `.md` file under `content_dir`,
/// mirroring the directory layout into `dest_dir`. Other files are skipped.
/// Returns the written paths, sorted.
pub fn generate_pages(
    content_dir: &Path,
    dest_dir: &Path,
    template_path: &Path,
) -> Result<Vec<PathBuf>, SiteError> {
    let template = fs::read_to_string(template_path).map_err(io_error(template_path))?;
    let mut pages = Vec::new();
    generate_pages_recursive(content_dir, dest_dir, &template, &mut pages)?;
    pages.sort();
    Ok(pages)
}

fn generate_pages_recursive(
    dir: &Path,
    dest_dir: &Path,
    template: &str,
    pages: &mut Vec<PathBuf>,
) -> Result<(), SiteError> {
    fs::create_dir_all(dest_dir).map_err(io_error(dest_dir))?;

    for path in sorted_entries(dir)? {
        let Some(name) = path.file_name() else {
            continue;
        };
        let dest = dest_dir.join(name);

        if path.is_dir() {
            generate_pages_recursive(&path, &dest, template, pages)?;
        } else if path.extension().is_some_and(|ext| ext == "md") {
            let dest = dest.with_extension("html");
            log::debug!("Generating {} -> {}", path.display(), dest.display());
            write_page(&path, &dest, template)?;
            pages.push(dest);
        } else {
            log::debug!("Skipping non-markdown file {}", path.display());
        }
    }
    Ok(())
}

/// Replace `public_dir` with a fresh copy of `static_dir`. A missing
/// `static_dir` leaves an empty `public_dir`. Returns the number of files
/// copied.
pub fn copy_static(static_dir: &Path, public_dir: &Path) -> Result<usize, SiteError> {
    if public_dir.exists() {
        log::debug!("Removing {}", public_dir.display());
        fs::remove_dir_all(public_dir).map_err(io_error(public_dir))?;
    }
    fs::create_dir_all(public_dir).map_err(io_error(public_dir))?;

    if !static_dir.is_dir() {
        log::warn!("Static directory {} not found, nothing copied", static_dir.display());
        return Ok(0);
    }
    copy_directory(static_dir, public_dir)
}

fn copy_directory(src: &Path, dest: &Path) -> Result<usize, SiteError> {
    let mut copied = 0;
    for path in sorted_entries(src)? {
        let Some(name) = path.file_name() else {
            continue;
        };
        let target = dest.join(name);
        if path.is_dir() {
            fs::create_dir_all(&target).map_err(io_error(&target))?;
            copied += copy_directory(&path, &target)?;
        } else {
            log::debug!("Copying {} -> {}", path.display(), target.display());
            fs::copy(&path, &target).map_err(io_error(&path))?;
            copied += 1;
        }
    }
    Ok(copied)
}

fn sorted_entries(dir: &Path) -> Result<Vec<PathBuf>, SiteError> {
    let mut paths = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_error(dir))? {
        let entry = entry.map_err(io_error(dir))?;
        paths.push(entry.path());
    }
    paths.sort();
    Ok(paths)
}

/// Copy static assets, then generate every page.
pub fn build_site(config: &SiteConfig) -> Result<BuildReport, SiteError> {
    let copied_files = copy_static(&config.static_dir, &config.public_dir)?;
    let pages = generate_pages(&config.content_dir, &config.public_dir, &config.template)?;
    log::info!(
        "Built {} page(s) and copied {} static file(s) into {}",
        pages.len(),
        copied_files,
        config.public_dir.display()
    );
    Ok(BuildReport {
        copied_files,
        pages,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_template_replaces_all_placeholders() {
        let template = "<title>{{ Title }}</title>\n<h1>{{ Title }}</h1>\n<main>{{ Content }}</main>";
        let out = render_template(template, "Home", "<div></div>");
        assert_eq!(out, "<title>Home</title>\n<h1>Home</h1>\n<main><div></div></main>");
    }

    #[test]
    fn test_render_template_does_not_rescan_inserted_text() {
        let out = render_template("{{ Title }}|{{ Content }}", "{{ Content }}", "{{ Title }}");
        assert_eq!(out, "{{ Content }}|{{ Title }}");
    }

    #[test]
    fn test_render_page_requires_title() {
        let err = render_page("no heading here", "{{ Content }}", Path::new("a.md")).unwrap_err();
        assert!(matches!(err, SiteError::MissingTitle { .. }));
        assert_eq!(
            err.to_string(),
            "No title in a.md: expected a line starting with \"# \""
        );
    }

    #[test]
    fn test_render_page() {
        let template = "<title>{{ Title }}</title>{{ Content }}";
        let page = render_page("# Hi\n\nsome **bold**", template, Path::new("x.md")).unwrap();
        assert_eq!(
            page,
            "<title>Hi</title><div><h1>Hi</h1><p>some <b>bold</b></p></div>"
        );
    }
}
