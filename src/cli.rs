// src/cli.rs
// =============================================================================
// Command-line interface, defined with clap's derive API.
//
// Each subcommand maps to one catalog query. Every subcommand accepts
// --json to print the raw structured result instead of a table.
//
// Remote access is off unless --allow-remote (or SKILLS_ALLOW_REMOTE=1, or
// SKILLS_ENV=production) is given; without it every listing is empty.
// =============================================================================

use clap::{Parser, Subcommand};

use skills_catalog::aggregate::DEFAULT_KEYWORD_LIMIT;
use skills_catalog::catalog::{DEFAULT_OWNER_LIMIT, DEFAULT_SEARCH_LIMIT, DEFAULT_TOP_LIMIT};

#[derive(Parser, Debug)]
#[command(
    name = "skills-catalog",
    version,
    about = "Browse the skills.sh catalog from the terminal",
    long_about = "skills-catalog fetches the public skills.sh pages and extracts a ranked, \
                  deduplicated list of skills, plus popularity, owner and category summaries."
)]
pub struct Cli {
    /// Allow outbound requests to the marketplace (same as SKILLS_ALLOW_REMOTE=1)
    #[arg(long, global = true)]
    pub allow_remote: bool,

    /// Marketplace origin (defaults to https://skills.sh)
    #[arg(long, global = true, env = "SKILLS_BASE_URL")]
    pub base_url: Option<String>,

    /// Print debug logs to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// All skills from the home page, by rank
    All {
        #[arg(long)]
        json: bool,
    },

    /// Skills from the trending (24h) page
    Trending {
        #[arg(long)]
        json: bool,
    },

    /// Skills from the hot page
    Hot {
        #[arg(long)]
        json: bool,
    },

    /// Description and install command for one skill
    ///
    /// Example: skills-catalog detail vercel-labs agent-skills react-best-practices
    Detail {
        owner: String,
        collection: String,
        name: String,

        #[arg(long)]
        json: bool,
    },

    /// Total, trending and hottest headline numbers
    Metrics {
        #[arg(long)]
        json: bool,
    },

    /// Most popular skills
    Top {
        #[arg(long, default_value_t = DEFAULT_TOP_LIMIT)]
        limit: usize,

        #[arg(long)]
        json: bool,
    },

    /// Owners with the most skills
    Owners {
        #[arg(long, default_value_t = DEFAULT_OWNER_LIMIT)]
        limit: usize,

        #[arg(long)]
        json: bool,
    },

    /// Topic breakdown of all skill names
    Categories {
        #[arg(long)]
        json: bool,
    },

    /// Most frequent words in skill names
    Keywords {
        #[arg(long, default_value_t = DEFAULT_KEYWORD_LIMIT)]
        limit: usize,

        #[arg(long)]
        json: bool,
    },

    /// Search the marketplace (prints the JSON response)
    Search {
        query: String,

        #[arg(long, default_value_t = DEFAULT_SEARCH_LIMIT)]
        limit: usize,
    },
}
