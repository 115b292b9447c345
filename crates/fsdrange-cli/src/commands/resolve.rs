//! Resolve command handler: journal + reference data to FSD parameters.

use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::{Args, ValueEnum};
use tracing::info;

use fsdrange_lib::paths::JOURNAL_ENV;
use fsdrange_lib::{
    estimate_jump_range, resolve, resolve_journal_path, resolve_reference_path, Journal,
    JumpConditions, LookupPolicy, MaxFuelPolicy, ReferenceData, ResolverOptions,
};
use fsdrange_cli::output::{render, OutputFormat, RenderOptions};

/// How to interpret an engineered `MaxFuelPerJump` override.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum MaxFuelArg {
    /// Emit the whole override record.
    #[default]
    Record,
    /// Emit the override's numeric value.
    Value,
}

impl From<MaxFuelArg> for MaxFuelPolicy {
    fn from(arg: MaxFuelArg) -> Self {
        match arg {
            MaxFuelArg::Record => MaxFuelPolicy::Record,
            MaxFuelArg::Value => MaxFuelPolicy::Value,
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct ResolveArgs {
    /// Journal file, or a directory to take the newest journal from.
    /// Defaults to $FSDRANGE_JOURNAL, then the game's journal folder.
    #[arg(long)]
    pub journal: Option<PathBuf>,

    /// Reference data file. Defaults to $FSDRANGE_REFERENCE, then the
    /// platform data directory.
    #[arg(long)]
    pub reference: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Print only the parameters, without record dumps.
    #[arg(long)]
    pub params_only: bool,

    /// Fail when reference data has no entry for an installed module.
    #[arg(long)]
    pub strict: bool,

    /// Interpretation of an engineered MaxFuelPerJump override.
    #[arg(long, value_enum, default_value_t = MaxFuelArg::Record)]
    pub max_fuel_policy: MaxFuelArg,

    /// Also estimate the jump range from the resolved parameters.
    #[arg(long)]
    pub estimate: bool,

    /// Cargo mass in tonnes for the estimate.
    #[arg(long, default_value_t = 0.0, requires = "estimate")]
    pub cargo: f64,

    /// Fuel in the main tank in tonnes for the estimate. Defaults to full.
    #[arg(long, requires = "estimate")]
    pub fuel: Option<f64>,

    /// Estimate a supercharged jump.
    #[arg(long, requires = "estimate")]
    pub supercharged: bool,
}

/// Handle the resolve command.
///
/// A journal without a loadout, or a loadout without a frame shift drive,
/// is a successful run with no output.
pub fn handle_resolve(args: &ResolveArgs) -> Result<()> {
    let journal_path = resolve_journal_path(args.journal.as_deref()).ok_or_else(|| {
        anyhow!("no journal location found; pass --journal or set {JOURNAL_ENV}")
    })?;
    let journal = Journal::from_path(&journal_path)
        .with_context(|| format!("failed to read journal from {}", journal_path.display()))?;

    let Some(loadout) = journal
        .first_loadout()
        .context("failed to parse Loadout event")?
    else {
        info!(events = journal.len(), "journal has no Loadout event; nothing to compute");
        return Ok(());
    };

    if loadout.frame_shift_drive().is_none() {
        info!(ship = %loadout.ship, "loadout has no frame shift drive; nothing to compute");
        return Ok(());
    }

    let reference_path = resolve_reference_path(args.reference.as_deref())
        .context("failed to resolve reference data location")?;
    let reference = ReferenceData::from_path(&reference_path).with_context(|| {
        format!(
            "failed to load reference data from {}",
            reference_path.display()
        )
    })?;

    let options = ResolverOptions {
        lookup: if args.strict {
            LookupPolicy::Strict
        } else {
            LookupPolicy::Lenient
        },
        max_fuel: args.max_fuel_policy.into(),
    };
    let Some(resolution) =
        resolve(&loadout, &reference, &options).context("failed to resolve FSD parameters")?
    else {
        return Ok(());
    };

    let estimated_range = if args.estimate {
        let conditions = JumpConditions {
            fuel_in_tank: args.fuel,
            cargo_mass: args.cargo,
            supercharged: args.supercharged,
        };
        let range = estimate_jump_range(&resolution.parameters, &conditions)
            .context("failed to estimate jump range")?;
        info!(range_ly = range, "estimated jump range");
        Some(range)
    } else {
        None
    };

    let render_options = RenderOptions {
        params_only: args.params_only,
        estimated_range,
    };
    render(&resolution, args.format, &render_options).context("failed to write output")?;
    Ok(())
}
