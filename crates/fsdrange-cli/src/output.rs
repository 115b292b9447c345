//! Output formatting for FSD resolutions.
//!
//! Text output mirrors what range-calculation scripts expect: labeled JSON
//! dumps of every matched record, then one `params["key"]="value"` line per
//! parameter. JSON output wraps the same data in a single document.

use std::io::{self, Write};

use clap::ValueEnum;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;

use fsdrange_lib::{BoosterSpec, Engineering, FsdParameters, FsdResolution, FsdSpec, Module};

use crate::terminal::ColorPalette;

/// Output format for the resolved parameters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Labeled dumps followed by `params["key"]="value"` lines.
    #[default]
    Text,
    /// A single JSON document.
    Json,
}

/// Rendering switches shared by all formats.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RenderOptions {
    /// Skip the record dumps and print only the parameters.
    pub params_only: bool,
    /// Estimated jump range in light-years, when requested.
    pub estimated_range: Option<f64>,
}

#[derive(Serialize)]
struct Report<'a> {
    parameters: &'a FsdParameters,
    #[serde(skip_serializing_if = "Option::is_none")]
    estimated_jump_range: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    records: Option<Records<'a>>,
}

#[derive(Serialize)]
struct Records<'a> {
    loadout: Value,
    fsd: &'a Module,
    booster: Option<&'a Module>,
    engineering: Option<&'a Engineering>,
    ship_properties: Option<&'a Value>,
    fsd_spec: Option<&'a FsdSpec>,
    booster_spec: Option<&'a BoosterSpec>,
    blueprint: Option<&'a Value>,
    experimental_effect: Option<&'a Value>,
}

/// Render a resolution to stdout.
pub fn render(
    resolution: &FsdResolution<'_>,
    format: OutputFormat,
    options: &RenderOptions,
) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Text => write_text(&mut out, resolution, options, ColorPalette::detect()),
        OutputFormat::Json => write_json(&mut out, resolution, options),
    }
}

/// Write the text rendering.
pub fn write_text<W: Write>(
    out: &mut W,
    resolution: &FsdResolution<'_>,
    options: &RenderOptions,
    palette: ColorPalette,
) -> io::Result<()> {
    if !options.params_only {
        let dumps: [(&str, String); 9] = [
            ("Loadout", pretty(&resolution.loadout.summary())?),
            ("FSD", pretty(resolution.fsd)?),
            ("FSD Booster", pretty(&resolution.booster)?),
            ("FSD Engineering", pretty(&resolution.engineering)?),
            ("Standard Ship Props", pretty(&resolution.ship_properties)?),
            ("Standard FSD", pretty(&resolution.fsd_spec)?),
            ("Standard FSD Booster", pretty(&resolution.booster_spec)?),
            ("Standard FSD Engineering", pretty(&resolution.blueprint)?),
            ("Standard FSD Exp Eff", pretty(&resolution.experimental_effect)?),
        ];
        for (label, body) in dumps {
            writeln!(out, "{}{}:{} {}", palette.label, label, palette.reset, body)?;
        }
    }

    out.write_all(resolution.parameters.to_assignments().as_bytes())?;

    if let Some(range) = options.estimated_range {
        writeln!(
            out,
            "{}Estimated jump range:{} {}{:.2} ly{}",
            palette.muted, palette.reset, palette.emphasis, range, palette.reset
        )?;
    }
    Ok(())
}

/// Write the JSON rendering.
pub fn write_json<W: Write>(
    out: &mut W,
    resolution: &FsdResolution<'_>,
    options: &RenderOptions,
) -> io::Result<()> {
    let records = (!options.params_only).then(|| Records {
        loadout: resolution.loadout.summary(),
        fsd: resolution.fsd,
        booster: resolution.booster,
        engineering: resolution.engineering,
        ship_properties: resolution.ship_properties,
        fsd_spec: resolution.fsd_spec,
        booster_spec: resolution.booster_spec,
        blueprint: resolution.blueprint,
        experimental_effect: resolution.experimental_effect,
    });
    let report = Report {
        parameters: &resolution.parameters,
        estimated_jump_range: options.estimated_range,
        records,
    };
    serde_json::to_writer_pretty(&mut *out, &report).map_err(io::Error::other)?;
    writeln!(out)
}

/// Pretty JSON with four-space indentation.
fn pretty<T: Serialize + ?Sized>(value: &T) -> io::Result<String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut serializer).map_err(io::Error::other)?;
    String::from_utf8(buf).map_err(io::Error::other)
}
