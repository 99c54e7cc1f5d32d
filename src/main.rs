mod cli;
mod config;
mod logging;

use cli::{Args, Command, EditArgs};
use config::{discover_config, load_config_from_path, ConfigFile, Settings, CONFIG_FILENAME};
use parts_inventory::adapters::outbound::console::StderrNotifier;
use parts_inventory::adapters::outbound::network::HttpInventoryClient;
use parts_inventory::application::dto::Action;
use parts_inventory::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use parts_inventory::application::read_models::InventoryReadModelBuilder;
use parts_inventory::application::state::{Notice, ViewEvent, ViewState};
use parts_inventory::application::use_cases::InventoryController;
use parts_inventory::inventory::domain::ComponentId;
use parts_inventory::ports::outbound::{InventoryFormatter, OutputPresenter};
use parts_inventory::shared::error::{ExitCode, InventoryError};
use parts_inventory::shared::Result;
use std::io::IsTerminal;
use std::path::Path;
use std::process;

type Controller = InventoryController<HttpInventoryClient, StderrNotifier>;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args = Args::parse_args();
    logging::init_tracing(args.global.verbose);

    match run(args).await {
        Ok(code) => process::exit(code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

async fn run(args: Args) -> Result<ExitCode> {
    let global = args.global;
    let config = load_config(global.config.as_deref())?;
    let settings = Settings::resolve(
        config.as_ref(),
        global.base_url.as_deref(),
        global.format,
        global.show_category.as_deref(),
    )?;
    tracing::debug!(base_url = %settings.base_url, format = %settings.format, "resolved settings");

    let to_terminal = global.output.is_none() && std::io::stdout().is_terminal();
    let formatter = FormatterFactory::create(settings.format, to_terminal && !global.no_color);
    let presenter = PresenterFactory::create(PresenterType::from(global.output));

    let api = HttpInventoryClient::new(&settings.base_url, settings.timeout)?;
    let notifier = StderrNotifier::new(std::io::stderr().is_terminal() && !global.no_color)
        .quiet(global.quiet);
    let mut controller = InventoryController::new(api, notifier).with_timings(settings.timings);

    if settings.category.is_some() {
        controller
            .dispatch(Action::SelectCategory(settings.category.clone()))
            .await;
    }

    let command = args.command;
    if command.needs_loaded_view() {
        controller.dispatch(Action::Reload).await;
        if controller.state().has_error() {
            render(formatter.as_ref(), presenter.as_ref(), controller.state())?;
            return Ok(ExitCode::OperationFailed);
        }
    }

    match &command {
        Command::Edit(edit) => edit_component(&mut controller, edit).await,
        Command::Add { no_highlight, .. } => {
            if let Some(action) = command.action() {
                controller.dispatch(action).await;
            }
            // Frames only make sense on a live terminal
            if !*no_highlight && to_terminal && !controller.state().has_error() {
                return play_highlight(&mut controller, formatter.as_ref(), presenter.as_ref())
                    .await;
            }
            controller.apply(vec![ViewEvent::HighlightDismissed]);
        }
        other => {
            if let Some(action) = other.action() {
                controller.dispatch(action).await;
            }
        }
    }

    render(formatter.as_ref(), presenter.as_ref(), controller.state())?;
    Ok(exit_code_for(controller.state()))
}

/// Loads the explicit config file, or discovers one in the working directory
fn load_config(path: Option<&Path>) -> Result<Option<ConfigFile>> {
    match path {
        Some(path) => load_config_from_path(path).map(Some),
        None => {
            let cwd = std::env::current_dir()?;
            let config = discover_config(&cwd)?;
            if config.is_some() {
                eprintln!(
                    "⚙️  Auto-discovered config file: {}",
                    cwd.join(CONFIG_FILENAME).display()
                );
            }
            Ok(config)
        }
    }
}

async fn edit_component(controller: &mut Controller, edit: &EditArgs) {
    let id = ComponentId::new(edit.id);
    let fields = controller.state().component(id).map(|current| edit.apply_to(current));
    match fields {
        Some(fields) => {
            controller.dispatch(Action::Update { id, fields }).await;
        }
        None => controller.apply(vec![ViewEvent::Notified(Notice::Error(
            InventoryError::UnknownComponent { id: edit.id }.to_string(),
        ))]),
    }
}

async fn play_highlight(
    controller: &mut Controller,
    formatter: &dyn InventoryFormatter,
    presenter: &dyn OutputPresenter,
) -> Result<ExitCode> {
    let mut frame_error = None;
    controller
        .run_highlight(|state| {
            if frame_error.is_none() {
                frame_error = render(formatter, presenter, state).err();
            }
        })
        .await;

    match frame_error {
        Some(e) => Err(e),
        None => Ok(exit_code_for(controller.state())),
    }
}

fn render(
    formatter: &dyn InventoryFormatter,
    presenter: &dyn OutputPresenter,
    state: &ViewState,
) -> Result<()> {
    let model = InventoryReadModelBuilder::build(state);
    let output = formatter.format(&model)?;
    presenter.present(&output)
}

fn exit_code_for(state: &ViewState) -> ExitCode {
    if state.has_error() {
        ExitCode::OperationFailed
    } else {
        ExitCode::Success
    }
}
