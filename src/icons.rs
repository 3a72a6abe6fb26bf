//! App icon generation.
//!
//! Resizes one source image into the fixed Android launcher and PWA icon set by
//! running an external resize tool (`sips` on macOS) once per output file.

use crate::report::Reporter;
use anyhow::{bail, Context, Result};
use std::fmt;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tracing::debug;

/// Android mipmap densities and their launcher icon size in pixels.
pub const ANDROID_DENSITIES: [(&str, u32); 5] = [
    ("mdpi", 48),
    ("hdpi", 72),
    ("xhdpi", 96),
    ("xxhdpi", 144),
    ("xxxhdpi", 192),
];

/// Files written into every mipmap directory.
pub const ANDROID_ICON_NAMES: [&str; 3] =
    ["ic_launcher", "ic_launcher_foreground", "ic_launcher_round"];

pub const PWA_SIZES: [u32; 4] = [192, 256, 384, 512];

pub const MASKABLE_SIZES: [u32; 2] = [192, 512];

const ANDROID_RES_DIR: &str = "android/app/src/main/res";
const PWA_ICON_DIR: &str = "public/icons";

/// Which icon family an output belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconGroup {
    Android,
    Pwa,
    Maskable,
}

impl fmt::Display for IconGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Android => write!(f, "Android"),
            Self::Pwa => write!(f, "PWA"),
            Self::Maskable => write!(f, "maskable"),
        }
    }
}

/// One square output image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconSpec {
    pub group: IconGroup,
    pub output: PathBuf,
    pub size: u32,
}

/// The full output table, relative to `root`.
pub fn icon_plan(root: &Path) -> Vec<IconSpec> {
    let mut plan = Vec::new();

    for (density, size) in ANDROID_DENSITIES {
        let dir = root.join(ANDROID_RES_DIR).join(format!("mipmap-{density}"));
        for name in ANDROID_ICON_NAMES {
            plan.push(IconSpec {
                group: IconGroup::Android,
                output: dir.join(format!("{name}.png")),
                size,
            });
        }
    }

    let pwa_dir = root.join(PWA_ICON_DIR);
    for size in PWA_SIZES {
        plan.push(IconSpec {
            group: IconGroup::Pwa,
            output: pwa_dir.join(format!("icon-{size}x{size}.png")),
            size,
        });
    }
    for size in MASKABLE_SIZES {
        plan.push(IconSpec {
            group: IconGroup::Maskable,
            output: pwa_dir.join(format!("maskable-icon-{size}x{size}.png")),
            size,
        });
    }

    plan
}

/// Resizes an image to a square of `size` pixels.
pub trait Resizer {
    fn resize(&self, source: &Path, size: u32, output: &Path) -> Result<()>;
}

/// Shells out to a `sips`-compatible tool: `<tool> -z <h> <w> <source> --out <output>`.
#[derive(Debug, Clone)]
pub struct CommandResizer {
    program: String,
}

impl CommandResizer {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for CommandResizer {
    fn default() -> Self {
        Self::new("sips")
    }
}

impl Resizer for CommandResizer {
    fn resize(&self, source: &Path, size: u32, output: &Path) -> Result<()> {
        let size = size.to_string();
        debug!(program = %self.program, output = %output.display(), "Resizing");

        let result = Command::new(&self.program)
            .args(["-z", size.as_str(), size.as_str()])
            .arg(source)
            .arg("--out")
            .arg(output)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .output()
            .with_context(|| format!("Failed to execute {}", self.program))?;

        if !result.status.success() {
            let code = result
                .status
                .code()
                .map(|c| c.to_string())
                .unwrap_or_else(|| "signal".to_string());
            bail!(
                "{} failed (exit {}): {}",
                self.program,
                code,
                String::from_utf8_lossy(&result.stderr).trim()
            );
        }
        Ok(())
    }
}

/// What a generation run produced.
#[derive(Debug, Default)]
pub struct GenerationSummary {
    pub written: Vec<PathBuf>,
    pub failed: Vec<(PathBuf, String)>,
}

impl GenerationSummary {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Writes every icon in [`icon_plan`] under `root`, creating directories as needed.
///
/// A missing source or an uncreatable directory aborts the run; a failed resize
/// is reported and recorded, and the run continues with the next icon.
pub fn generate<R, W>(
    source: &Path,
    root: &Path,
    resizer: &R,
    reporter: &mut Reporter<W>,
) -> Result<GenerationSummary>
where
    R: Resizer + ?Sized,
    W: Write,
{
    if !source.is_file() {
        bail!("Source image not found: {}", source.display());
    }

    let mut summary = GenerationSummary::default();
    let mut current_group = None;

    for spec in icon_plan(root) {
        if current_group != Some(spec.group) {
            reporter.info(format!("Generating {} icons...", spec.group));
            current_group = Some(spec.group);
        }

        if let Some(parent) = spec.output.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let shown = spec.output.strip_prefix(root).unwrap_or(&spec.output);
        match resizer.resize(source, spec.size, &spec.output) {
            Ok(()) => {
                reporter.plain(format!(
                    "  ✓ {} ({}x{})",
                    shown.display(),
                    spec.size,
                    spec.size
                ));
                summary.written.push(spec.output);
            }
            Err(e) => {
                reporter.warning(format!("{}: {e:#}", shown.display()));
                summary.failed.push((spec.output, format!("{e:#}")));
            }
        }
    }

    Ok(summary)
}
