//! Command-line arguments and report orchestration.

use std::path::PathBuf;

use ao_validators::Chamber;
use clap::{Parser, ValueEnum};

use crate::config::SourcesConfig;
use crate::error::RosterError;
use crate::http::Fetcher;
use crate::records::{Representative, Senator};
use crate::{report, senate, unitedstates};

/// Which upstream feed answers `--senators`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SenateFeed {
    /// The `@unitedstates` JSON roster, with rank, class and contact details.
    #[default]
    Unitedstates,
    /// The senate.gov XML contact list, names and party only.
    Senate,
}

/// Command-line arguments for articleone
#[derive(Parser, Debug)]
#[command(name = "articleone")]
#[command(about = "U.S. legislative branch info.")]
#[command(version)]
#[allow(clippy::struct_excessive_bools)]
pub struct Args {
    /// Get list of members of Congress
    #[arg(short, long)]
    pub members: bool,

    /// Get list of senators
    #[arg(short, long)]
    pub senators: bool,

    /// Get list of representatives
    #[arg(short, long)]
    pub representatives: bool,

    /// Feed used for the list of senators
    #[arg(long, value_enum, default_value_t = SenateFeed::Unitedstates)]
    pub senate_feed: SenateFeed,

    /// YAML configuration file (defaults to ./config.yaml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl Args {
    const fn needs_unitedstates(&self) -> bool {
        self.members
            || self.representatives
            || (self.senators && matches!(self.senate_feed, SenateFeed::Unitedstates))
    }

    /// Whether any report was requested.
    #[must_use]
    pub const fn any_report(&self) -> bool {
        self.members || self.senators || self.representatives
    }
}

/// Fetch, validate and render every requested report, in the order members,
/// senators, representatives. The `@unitedstates` feed is fetched at most once.
///
/// # Errors
/// Returns the first fetch, parse or validation failure.
pub async fn run<F>(
    args: &Args,
    sources: &SourcesConfig,
    fetcher: &F,
) -> Result<String, RosterError>
where
    F: Fetcher + ?Sized,
{
    let details = if args.needs_unitedstates() {
        unitedstates::members_details(fetcher, &sources.unitedstates_url).await?
    } else {
        Vec::new()
    };

    let mut out = String::new();

    if args.members {
        let members = unitedstates::all_members(&details)?;
        out.push_str(&report::render("List of Members", &report::member_matrix(&members)));
    }

    if args.senators {
        let senators = match args.senate_feed {
            SenateFeed::Unitedstates => {
                unitedstates::select(&details, Chamber::Senate, Senator::from_json)?
            }
            SenateFeed::Senate => senate::senators(fetcher, &sources.senate_url).await?,
        };
        out.push_str(&report::render("List of Senators", &report::senator_matrix(&senators)));
    }

    if args.representatives {
        let reps = unitedstates::select(&details, Chamber::House, Representative::from_json)?;
        out.push_str(&report::render(
            "List of Representatives",
            &report::representative_matrix(&reps),
        ));
    }

    Ok(out)
}
