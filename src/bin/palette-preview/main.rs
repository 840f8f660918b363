//! Render sample palettes for every known industry into an HTML grid and a JSON dump.
//!
//! Usage: `palette-preview [seed] [samples-per-industry]`

#![forbid(unsafe_code)]

mod html;

use std::{env, fs, path::PathBuf};

use anyhow::{Context, Result};
use logotruffle_back::engine::{
    Palette, PersonalitySliders, UniformSource, generate_palette, synth::INDUSTRY_HUES,
};
use serde::Serialize;

const DEFAULT_SEED: u64 = 7;
const DEFAULT_SAMPLES: usize = 3;

#[derive(Serialize)]
struct SwatchRecord<'a> {
    name: &'a str,
    hex: &'a str,
    role: &'a str,
}

#[derive(Serialize)]
struct PaletteRecord<'a> {
    industry: &'a str,
    colors: Vec<SwatchRecord<'a>>,
}

fn main() -> Result<()> {
    let mut args = env::args().skip(1);
    let seed = args
        .next()
        .map(|raw| raw.parse::<u64>().with_context(|| format!("invalid seed `{raw}`")))
        .transpose()?
        .unwrap_or(DEFAULT_SEED);
    let samples = args
        .next()
        .map(|raw| raw.parse::<usize>().with_context(|| format!("invalid sample count `{raw}`")))
        .transpose()?
        .unwrap_or(DEFAULT_SAMPLES);

    let target_dir = env::var("CARGO_TARGET_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("target"));
    let out_dir = target_dir.join("palette-preview");
    fs::create_dir_all(&out_dir).with_context(|| format!("creating {}", out_dir.display()))?;

    let mut rng = UniformSource::seeded(seed);
    let no_values: [&str; 0] = [];
    let rows: Vec<(&str, Palette)> = INDUSTRY_HUES
        .iter()
        .flat_map(|(industry, _)| std::iter::repeat_n(*industry, samples))
        .map(|industry| {
            let palette = generate_palette(
                industry,
                &no_values,
                &PersonalitySliders::NEUTRAL,
                &mut rng,
            );
            (industry, palette)
        })
        .collect();

    let html_path = html::write_palette_grid(
        &format!("Neutral palettes per industry (seed {seed})"),
        &rows,
        out_dir.join("palettes.html"),
    )?;

    let records: Vec<PaletteRecord<'_>> = rows
        .iter()
        .map(|(industry, palette)| PaletteRecord {
            industry: *industry,
            colors: palette
                .colors()
                .iter()
                .map(|color| SwatchRecord {
                    name: &color.name,
                    hex: &color.hex,
                    role: color.role.as_str(),
                })
                .collect(),
        })
        .collect();
    let json_path = out_dir.join("palettes.json");
    let json = serde_json::to_string_pretty(&records).context("encoding palettes")?;
    fs::write(&json_path, json).with_context(|| format!("writing {}", json_path.display()))?;

    println!(
        "Generated palette previews in {}:\n  - {}\n  - {}",
        out_dir.display(),
        html_path.display(),
        json_path.display()
    );
    Ok(())
}
