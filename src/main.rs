use clap::Parser;
use noteboard::cli::{
    handle_add, handle_delete, handle_editor_export, handle_editor_open, handle_editor_search,
    handle_editor_set, handle_editor_show, handle_get, handle_list, handle_update, Cli, Commands,
    EditorAction,
};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Add {
            content,
            color,
            x,
            y,
            json,
        } => handle_add(content, color, x, y, json),
        Commands::List { json } => handle_list(json),
        Commands::Get { id, json } => handle_get(id, json),
        Commands::Update {
            id,
            content,
            color,
            x,
            y,
            json,
        } => handle_update(id, content, color, x, y, json),
        Commands::Delete { id, force } => handle_delete(id, force),
        Commands::Editor(editor_cmd) => match editor_cmd.action {
            EditorAction::Show => handle_editor_show(),
            EditorAction::Set => handle_editor_set(),
            EditorAction::Open { path } => handle_editor_open(&path),
            EditorAction::Export { path } => handle_editor_export(&path),
            EditorAction::Search { pattern, json } => handle_editor_search(pattern, json),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
