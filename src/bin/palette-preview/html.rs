#![forbid(unsafe_code)]

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::Result;
use logotruffle_back::engine::{Color, Palette};

#[inline]
fn hsl_label(color: &Color) -> String {
    let hsl = color.hsl();
    format!("{:.0}°, {:.0}%, {:.0}%", hsl.h, hsl.s, hsl.l)
}

/// Light text on dark swatches and the other way round.
#[inline]
fn ink(color: &Color) -> &'static str {
    if color.hsl().l > 55.0 { "#111" } else { "#eee" }
}

pub fn write_palette_grid(
    title: &str,
    rows: &[(&str, Palette)],
    path: impl AsRef<Path>,
) -> Result<PathBuf> {
    let path = path.as_ref();
    let f = File::create(path)?;
    let mut w = BufWriter::new(f);
    writeln!(
        w,
        r#"<!doctype html><meta charset="utf-8">
<style>
  body{{margin:0;background:#111;color:#eee;font-family:system-ui}}
  h2{{margin:12px}}
  .g{{display:grid;grid-template-columns:10rem repeat(5,1fr);gap:6px;padding:8px}}
  .i{{display:flex;align-items:center;font-weight:700}}
  .s{{aspect-ratio:3/1;border-radius:10px;display:flex;flex-direction:column;align-items:center;
      justify-content:center;font-size:.8rem}}
  .s b{{font-size:.95rem}}
</style>
<h2>{title}</h2>
<div class="g">"#
    )?;
    for (industry, palette) in rows {
        writeln!(w, r#"<div class="i">{industry}</div>"#)?;
        for color in palette.colors() {
            writeln!(
                w,
                r#"<div class="s" style="background:{hex};color:{ink}"><b>{name}</b>{role} | {hex} | {hsl}</div>"#,
                hex = color.hex,
                ink = ink(color),
                name = color.name,
                role = color.role,
                hsl = hsl_label(color),
            )?;
        }
    }
    writeln!(w, "</div>")?;
    w.flush()?;
    Ok(path.to_path_buf())
}
