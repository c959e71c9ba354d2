//! External graph renderer.
//!
//! Layout is delegated to Graphviz. The [`GraphRenderer`] trait is the seam
//! tests use to avoid needing `dot` installed.

use std::fmt;
use std::path::PathBuf;

use async_trait::async_trait;

use crate::error::RenderError;

/// Image formats the renderer can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageFormat {
    /// Raster image.
    Png,
    /// Vector image with working links and tooltips.
    Svg,
    /// Printable document.
    Pdf,
}

impl ImageFormat {
    /// File extension and Graphviz `-T` value.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Svg => "svg",
            Self::Pdf => "pdf",
        }
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// One rendering request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderJob {
    /// Graphviz source file.
    pub source: PathBuf,
    /// Image to write.
    pub output: PathBuf,
    /// Output format.
    pub format: ImageFormat,
    /// Resolution override.
    pub dpi: Option<u32>,
}

impl RenderJob {
    /// Command-line arguments for `dot`.
    #[must_use]
    pub fn args(&self) -> Vec<String> {
        let mut args = vec![format!("-T{}", self.format)];
        if let Some(dpi) = self.dpi {
            args.push(format!("-Gdpi={dpi}"));
        }
        args.push(self.source.display().to_string());
        args.push("-o".to_string());
        args.push(self.output.display().to_string());
        args
    }

    /// Shell-style rendering of the invocation, for echoing to the user.
    #[must_use]
    pub fn command_line(&self, program: &str) -> String {
        format!("{} {}", program, self.args().join(" "))
    }
}

/// Turns a graph description file into an image.
#[async_trait]
pub trait GraphRenderer: Send + Sync {
    /// Program name shown to the user.
    fn program(&self) -> &str;

    /// Render `job.source` into `job.output`.
    async fn render(&self, job: &RenderJob) -> Result<(), RenderError>;
}

/// Renderer that runs the Graphviz `dot` binary.
#[derive(Debug, Clone)]
pub struct DotRenderer {
    program: String,
}

impl DotRenderer {
    /// Use the given `dot` executable.
    #[must_use]
    pub fn new(program: impl Into<String>) -> Self {
        Self { program: program.into() }
    }
}

#[async_trait]
impl GraphRenderer for DotRenderer {
    fn program(&self) -> &str {
        &self.program
    }

    async fn render(&self, job: &RenderJob) -> Result<(), RenderError> {
        tracing::debug!(command = %job.command_line(&self.program), "Rendering");

        let output = tokio::process::Command::new(&self.program)
            .args(job.args())
            .output()
            .await
            .map_err(|source| RenderError::Spawn { program: self.program.clone(), source })?;

        if output.status.success() {
            tracing::info!(output = %job.output.display(), "Rendered graph");
            return Ok(());
        }

        Err(RenderError::Failed {
            program: self.program.clone(),
            status: output.status.to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_with_dpi() {
        let job = RenderJob {
            source: PathBuf::from("gref/gv/demo.gv"),
            output: PathBuf::from("gref/png/demo.png"),
            format: ImageFormat::Png,
            dpi: Some(300),
        };
        assert_eq!(
            job.command_line("dot"),
            "dot -Tpng -Gdpi=300 gref/gv/demo.gv -o gref/png/demo.png"
        );
    }

    #[test]
    fn test_args_without_dpi() {
        let job = RenderJob {
            source: PathBuf::from("a.gv"),
            output: PathBuf::from("a.svg"),
            format: ImageFormat::Svg,
            dpi: None,
        };
        assert_eq!(job.args(), vec!["-Tsvg", "a.gv", "-o", "a.svg"]);
    }

    #[tokio::test]
    async fn test_missing_program_is_spawn_error() {
        let renderer = DotRenderer::new("gref-no-such-renderer-binary");
        let job = RenderJob {
            source: PathBuf::from("a.gv"),
            output: PathBuf::from("a.pdf"),
            format: ImageFormat::Pdf,
            dpi: None,
        };
        let err = renderer.render(&job).await.unwrap_err();
        assert!(matches!(err, RenderError::Spawn { .. }));
    }
}
