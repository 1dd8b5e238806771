// src/cli/mod.rs
//
// Command-line interface module

mod args;
mod output;

pub use args::{Args, OutputFormat};
pub use output::{format_csv, format_json, format_text, FeatureReport};

use anyhow::{Context, Result};
use colorful::Colorful;
use indicatif::{ProgressBar, ProgressStyle};
use log::{info, warn};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::config::PlpConfig;
use crate::core::{decode_audio, extract_mono, resample_to, PlpExtractor};
use crate::error::PlpError;

const AUDIO_EXTENSIONS: [&str; 8] = ["flac", "wav", "mp3", "ogg", "m4a", "aac", "aiff", "opus"];

/// Run the CLI
pub fn run(args: &Args) -> Result<()> {
    let config = args.resolve_config()?;
    let extractor = PlpExtractor::new(config.clone())?;

    if let Some(dir) = &args.output {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;
    }

    let files = collect_audio_files(&args.input)?;
    if files.is_empty() {
        println!("{}", "No audio files found!".red());
        return Ok(());
    }
    info!("Found {} audio file(s)", files.len());

    let progress = if files.len() > 1 {
        let pb = ProgressBar::new(files.len() as u64);
        pb.set_style(
            ProgressStyle::with_template("{spinner} [{bar:40}] {pos}/{len} {wide_msg}")?
                .progress_chars("=> "),
        );
        Some(pb)
    } else {
        None
    };

    let mut failures = 0usize;
    for path in &files {
        if let Some(pb) = &progress {
            pb.set_message(path.display().to_string());
        }

        match process_file(path, &extractor, &config, args) {
            Ok(()) => {}
            Err(e) => {
                failures += 1;
                let msg = format!("{}: {:#}", path.display(), e);
                match &progress {
                    Some(pb) => pb.println(msg.red().to_string()),
                    None => eprintln!("{}", msg.red()),
                }
            }
        }

        if let Some(pb) = &progress {
            pb.inc(1);
        }
    }

    if let Some(pb) = progress {
        pb.finish_and_clear();
    }

    if failures > 0 {
        anyhow::bail!("{} of {} file(s) failed", failures, files.len());
    }
    Ok(())
}

fn process_file(path: &Path, extractor: &PlpExtractor, config: &PlpConfig, args: &Args) -> Result<()> {
    let audio = decode_audio(path)?;
    if audio.channels > 1 {
        warn!("{}: downmixing {} channels to mono", path.display(), audio.channels);
    }
    let mut samples = extract_mono(&audio);

    if audio.sample_rate != config.sample_rate {
        if !args.resample {
            return Err(PlpError::SampleRateMismatch {
                expected: config.sample_rate,
                actual: audio.sample_rate,
            })
            .context("Use --resample to convert the input first");
        }
        warn!(
            "{}: resampling {} Hz -> {} Hz",
            path.display(),
            audio.sample_rate,
            config.sample_rate
        );
        samples = resample_to(&samples, audio.sample_rate, config.sample_rate)?;
    }

    let features = extractor.extract(&samples, Some(config.sample_rate))?;
    let report = FeatureReport::new(
        path.display().to_string(),
        audio.sample_rate,
        audio.channels,
        audio.duration_secs,
        config.clone(),
        features,
    );

    let rendered = match args.format {
        OutputFormat::Text => format_text(&report, args.verbose),
        OutputFormat::Json => format_json(&report)?,
        OutputFormat::Csv => format_csv(&report),
    };

    match &args.output {
        Some(dir) => {
            let stem = path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| "features".to_string());
            let out_path = dir.join(format!("{}.{}", stem, args.format.extension()));
            std::fs::write(&out_path, rendered)
                .with_context(|| format!("Failed to write {}", out_path.display()))?;
            info!("Wrote {}", out_path.display());
        }
        None => print!("{}", rendered),
    }

    Ok(())
}

fn has_audio_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| AUDIO_EXTENSIONS.contains(&e.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Input file itself, or every audio file below a directory (sorted)
pub fn collect_audio_files(path: &Path) -> Result<Vec<PathBuf>> {
    if path.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }
    if !path.is_dir() {
        anyhow::bail!("Input not found: {}", path.display());
    }

    let mut files: Vec<PathBuf> = WalkDir::new(path)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
        .map(|e| e.into_path())
        .filter(|p| p.is_file() && has_audio_extension(p))
        .collect();
    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_audio_extension_filter() {
        assert!(has_audio_extension(Path::new("a/b.WAV")));
        assert!(has_audio_extension(Path::new("x.flac")));
        assert!(!has_audio_extension(Path::new("notes.txt")));
        assert!(!has_audio_extension(Path::new("noext")));
    }

    #[test]
    fn test_missing_input() {
        assert!(collect_audio_files(Path::new("/definitely/not/here")).is_err());
    }
}
