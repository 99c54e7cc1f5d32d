use clap::{Parser, Subcommand};
use std::path::PathBuf;

use parts_inventory::application::dto::{Action, OutputFormat};
use parts_inventory::inventory::domain::{Component, ComponentFields, ComponentId};
use parts_inventory::inventory::services::FilterInputs;

/// Browse and maintain a parts inventory served by the components REST API
#[derive(Parser, Debug)]
#[command(name = "parts-inventory")]
#[command(version, about = "Browse and maintain a parts inventory", long_about = None)]
#[command(propagate_version = true)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    #[command(flatten)]
    pub global: GlobalOpts,
}

#[derive(clap::Args, Debug, Clone, Default)]
pub struct GlobalOpts {
    /// Server base URL [default: http://127.0.0.1:5000]
    #[arg(long, global = true, env = "PARTS_INVENTORY_URL")]
    pub base_url: Option<String>,

    /// Config file (defaults to ./parts-inventory.config.yml when present)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output format: table, markdown or json
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,

    /// Only show components of this category
    #[arg(long = "show-category", global = true, value_name = "CATEGORY")]
    pub show_category: Option<String>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Only print errors on stderr
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List all components grouped by category
    List,

    /// Search components by text and filters
    Search(SearchArgs),

    /// Add a component from a free-text description
    Add {
        /// Description, e.g. "10x 1k resistor 0805"
        text: String,

        /// Skip the new-component highlight and print the final list once
        #[arg(long)]
        no_highlight: bool,
    },

    /// Show how the server would parse a description, without storing it
    Preview {
        text: String,
    },

    /// Edit fields of a component; unset options keep their current value
    Edit(EditArgs),

    /// Delete a component
    Delete {
        id: u64,
    },

    /// Merge SOURCE into TARGET; SOURCE is removed
    Merge {
        source: u64,
        target: u64,
    },

    /// Increase a component's quantity by one
    Inc {
        id: u64,
    },

    /// Decrease a component's quantity by one (never below zero)
    Dec {
        id: u64,
    },

    /// Set a component's quantity
    SetQuantity {
        id: u64,
        quantity: u32,
    },

    /// Set a component's storage location
    SetStorage {
        id: u64,
        location: String,
    },

    /// List components the server flags as similar to ID
    Similar {
        id: u64,
    },

    /// Switch the server between its LLM and rule-based parsers
    ToggleParser,
}

#[derive(clap::Args, Debug, Clone, Default)]
pub struct SearchArgs {
    /// Free text matched against name, category, source, storage and specifications
    #[arg(default_value = "")]
    pub query: String,

    /// Restrict to a category; repeatable
    #[arg(long = "category", value_name = "CATEGORY")]
    pub categories: Vec<String>,

    #[arg(long, value_name = "N", default_value = "")]
    pub min_quantity: String,

    #[arg(long, value_name = "N", default_value = "")]
    pub max_quantity: String,

    /// Storage location substring
    #[arg(long, default_value = "")]
    pub storage: String,

    /// "zero" for empty stock only, "nonzero" for stocked only
    #[arg(long, value_name = "zero|nonzero", default_value = "")]
    pub zero_quantity: String,

    /// Created on or after (YYYY-MM-DD)
    #[arg(long, value_name = "DATE", default_value = "")]
    pub since: String,

    /// Created on or before (YYYY-MM-DD)
    #[arg(long, value_name = "DATE", default_value = "")]
    pub until: String,
}

impl SearchArgs {
    pub fn filter_inputs(&self) -> FilterInputs {
        FilterInputs {
            categories: self.categories.clone(),
            min_quantity: self.min_quantity.clone(),
            max_quantity: self.max_quantity.clone(),
            storage: self.storage.clone(),
            zero_quantity: self.zero_quantity.clone(),
            min_date: self.since.clone(),
            max_date: self.until.clone(),
        }
    }
}

#[derive(clap::Args, Debug, Clone, Default)]
pub struct EditArgs {
    pub id: u64,

    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub category: Option<String>,

    #[arg(long)]
    pub quantity: Option<u32>,

    #[arg(long)]
    pub source: Option<String>,

    #[arg(long)]
    pub storage: Option<String>,

    #[arg(long)]
    pub specifications: Option<String>,
}

impl EditArgs {
    /// Overlays the given options on the component's current fields
    pub fn apply_to(&self, current: &Component) -> ComponentFields {
        let mut fields = current.fields();
        if let Some(name) = &self.name {
            fields.name = name.clone();
        }
        if let Some(category) = &self.category {
            fields.category = category.clone();
        }
        if let Some(quantity) = self.quantity {
            fields.quantity = quantity;
        }
        if let Some(source) = &self.source {
            fields.source = Some(source.clone());
        }
        if let Some(storage) = &self.storage {
            fields.storage = Some(storage.clone());
        }
        if let Some(specifications) = &self.specifications {
            fields.specifications = Some(specifications.clone());
        }
        fields
    }
}

impl Command {
    /// Whether the command reads or patches the cached list, so it must be loaded first.
    ///
    /// Delete and merge reload on their own after succeeding.
    pub fn needs_loaded_view(&self) -> bool {
        matches!(
            self,
            Command::List
                | Command::Edit(_)
                | Command::Inc { .. }
                | Command::Dec { .. }
                | Command::SetQuantity { .. }
                | Command::SetStorage { .. }
        )
    }

    /// The controller action for commands that map one-to-one.
    ///
    /// `List` is covered by the initial load and `Edit` needs the current
    /// fields, so both return `None`.
    pub fn action(&self) -> Option<Action> {
        let action = match self {
            Command::List | Command::Edit(_) => return None,
            Command::Search(args) => Action::Search {
                query: args.query.clone(),
                inputs: args.filter_inputs(),
            },
            Command::Add { text, .. } => Action::Create {
                raw_text: text.clone(),
            },
            Command::Preview { text } => Action::PreviewParse {
                raw_text: text.clone(),
            },
            Command::Delete { id } => Action::Delete {
                id: ComponentId::new(*id),
            },
            Command::Merge { source, target } => Action::Merge {
                source: ComponentId::new(*source),
                target: ComponentId::new(*target),
            },
            Command::Inc { id } => Action::IncrementQuantity {
                id: ComponentId::new(*id),
            },
            Command::Dec { id } => Action::DecrementQuantity {
                id: ComponentId::new(*id),
            },
            Command::SetQuantity { id, quantity } => Action::SetQuantity {
                id: ComponentId::new(*id),
                quantity: *quantity,
            },
            Command::SetStorage { id, location } => Action::SetStorage {
                id: ComponentId::new(*id),
                storage: location.clone(),
            },
            Command::Similar { id } => Action::FetchSimilar {
                id: ComponentId::new(*id),
            },
            Command::ToggleParser => Action::ToggleParser,
        };
        Some(action)
    }
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
