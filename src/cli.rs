use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "deckurl",
    version,
    about = "Open a URL built from a flashcard field when its answer is revealed"
)]
pub struct Cli {
    #[arg(long, global = true, help = "Path to the profile configuration file")]
    pub config: Option<PathBuf>,
    #[arg(long, global = true, help = "Emit JSON output")]
    pub json: bool,
    #[arg(short = 'v', long, global = true, action = ArgAction::Count, help = "Verbose logging")]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Handle an answer-reveal event for a card
    Reveal(RevealArgs),
    /// Show which profile a deck resolves to
    Resolve(ResolveArgs),
    /// Substitute content into a URL template
    Compose(ComposeArgs),
    Profile(ProfileArgs),
    Deck(DeckArgs),
    Addon(AddonArgs),
}

#[derive(Debug, Args)]
pub struct RevealArgs {
    #[arg(long, help = "Name of the deck the card is reviewed from")]
    pub deck: String,
    #[arg(long = "field", value_name = "NAME=VALUE", action = ArgAction::Append, help = "Card field (repeatable)")]
    pub fields: Vec<String>,
    #[arg(long, value_name = "PATH", help = "Read card fields from a JSON object file, or - for stdin")]
    pub card_json: Option<PathBuf>,
    #[arg(long, help = "Compose the URL without opening it")]
    pub dry_run: bool,
}

#[derive(Debug, Args)]
pub struct ResolveArgs {
    #[arg(help = "Deck name")]
    pub deck: String,
}

#[derive(Debug, Args)]
pub struct ComposeArgs {
    #[arg(help = "URL template containing {{field_content}}")]
    pub template: String,
    #[arg(help = "Field content to substitute")]
    pub content: String,
    #[arg(long, help = "Percent-encode the content first")]
    pub encode: bool,
}

#[derive(Debug, Args)]
pub struct ProfileArgs {
    #[command(subcommand)]
    pub command: ProfileCommand,
}

#[derive(Debug, Subcommand)]
pub enum ProfileCommand {
    Ls,
    Show(ProfileNameArgs),
    Add(ProfileEditArgs),
    Edit(ProfileEditArgs),
    Rm(ProfileNameArgs),
    Enable(ProfileNameArgs),
    Disable(ProfileNameArgs),
    /// Use this profile when no deck matches
    Default(ProfileNameArgs),
    Import(ProfileImportArgs),
    Export(ProfileExportArgs),
}

#[derive(Debug, Args)]
pub struct ProfileNameArgs {
    #[arg(help = "Profile name")]
    pub name: String,
}

#[derive(Debug, Args)]
pub struct ProfileEditArgs {
    #[arg(help = "Profile name")]
    pub name: String,
    #[arg(long, help = "Card field supplying the content")]
    pub field: Option<String>,
    #[arg(long, help = "URL template containing {{field_content}}")]
    pub url: Option<String>,
    #[arg(long, help = "Application to open the URL with (empty for default)")]
    pub app: Option<String>,
    #[arg(long = "deck", action = ArgAction::Append, help = "Deck this profile applies to (repeatable)")]
    pub decks: Vec<String>,
    #[arg(long, help = "Mark the profile disabled")]
    pub disabled: bool,
}

#[derive(Debug, Args)]
pub struct ProfileImportArgs {
    #[arg(help = "Profile JSON file")]
    pub path: PathBuf,
    #[arg(long, help = "Store under this name instead of the one in the file")]
    pub name: Option<String>,
}

#[derive(Debug, Args)]
pub struct ProfileExportArgs {
    #[arg(help = "Profile name")]
    pub name: String,
    #[arg(help = "Destination JSON file")]
    pub path: PathBuf,
}

#[derive(Debug, Args)]
pub struct DeckArgs {
    #[command(subcommand)]
    pub command: DeckCommand,
}

#[derive(Debug, Subcommand)]
pub enum DeckCommand {
    Add(DeckMutateArgs),
    Rm(DeckMutateArgs),
}

#[derive(Debug, Args)]
pub struct DeckMutateArgs {
    #[arg(help = "Profile name")]
    pub profile: String,
    #[arg(required = true, num_args = 1.., help = "Deck names")]
    pub decks: Vec<String>,
}

#[derive(Debug, Args)]
pub struct AddonArgs {
    #[command(subcommand)]
    pub command: AddonCommand,
}

#[derive(Debug, Subcommand)]
pub enum AddonCommand {
    Status,
    On,
    Off,
    Toggle,
}
