//! Command-line definitions for the gallery binary.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use sources_core::{Category, SourceKind};

/// Source gallery: collect links, images and videos from tool output and
/// render them per conversation.
#[derive(Debug, Parser)]
#[command(name = "source-gallery")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Configuration file path (RON)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding stored collections
    #[arg(long, global = true, env = "SOURCE_GALLERY_DIR")]
    pub storage_dir: Option<PathBuf>,

    /// Base storage key
    #[arg(long, global = true)]
    pub base_key: Option<String>,

    /// Route the gallery is mounted under, e.g. /agents/<thread-id>
    #[arg(long, global = true, default_value = "/")]
    pub path: String,

    /// Category tab to select before rendering
    #[arg(long, value_enum, global = true)]
    pub tab: Option<TabArg>,

    /// Write the rendered HTML here instead of stdout
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract sources from a tool output payload and merge them
    Ingest(IngestArgs),

    /// Render the stored collection
    Show,

    /// Add a single source by URL
    Add(AddArgs),

    /// Harvest sources from a saved HTML page
    Harvest(HarvestArgs),

    /// Pull links, images and videos out of free text
    Extract(ExtractArgs),
}

#[derive(Debug, Args)]
pub struct IngestArgs {
    /// Payload file; reads stdin when omitted or `-`
    pub input: Option<PathBuf>,

    /// Mark the tool call as failed
    #[arg(long)]
    pub failed: bool,

    /// Mark the payload as a streaming update
    #[arg(long)]
    pub streaming: bool,
}

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Source URL
    pub url: String,

    /// Display title; derived from the URL when omitted
    #[arg(short, long)]
    pub title: Option<String>,

    /// Source kind; detected from the URL when omitted
    #[arg(long = "type", value_enum)]
    pub kind: Option<KindArg>,

    /// Free-form description
    #[arg(short, long)]
    pub description: Option<String>,
}

#[derive(Debug, Args)]
pub struct HarvestArgs {
    /// Saved HTML file
    pub file: PathBuf,

    /// Address the page was fetched from, used to resolve relative links
    #[arg(long)]
    pub page_url: Option<String>,

    /// Kinds to keep; all when omitted
    #[arg(long, value_enum, value_delimiter = ',')]
    pub types: Vec<KindArg>,
}

#[derive(Debug, Args)]
pub struct ExtractArgs {
    /// Text file; reads stdin when omitted or `-`
    pub input: Option<PathBuf>,

    /// Kinds to keep; all when omitted
    #[arg(long, value_enum, value_delimiter = ',')]
    pub types: Vec<KindArg>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum TabArg {
    All,
    Links,
    Images,
    Videos,
}

impl From<TabArg> for Category {
    fn from(tab: TabArg) -> Self {
        match tab {
            TabArg::All => Category::All,
            TabArg::Links => Category::Links,
            TabArg::Images => Category::Images,
            TabArg::Videos => Category::Videos,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    Link,
    Image,
    Video,
}

impl From<KindArg> for SourceKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Link => SourceKind::Link,
            KindArg::Image => SourceKind::Image,
            KindArg::Video => SourceKind::Video,
        }
    }
}
