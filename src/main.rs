use clap::Parser;
use coverfolio::application::{
    import_resume, init::init, public_path, public_view, publish, resume_data, ConfigService,
    DraftService, ImportOutcome,
};
use coverfolio::cli::{
    format_draft, format_draft_list, format_public_view, format_template, format_template_list,
    Cli, Commands,
};
use coverfolio::domain::{get_template, list_templates};
use coverfolio::error::{FolioError, Result};
use coverfolio::infrastructure::{EditorSession, FileSystemRepository, WorkspaceRepository};
use std::fs;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter (e.g. `coverfolio=debug`)
const LOG_ENV: &str = "COVERFOLIO_LOG";

fn main() {
    // Logs go to stderr so command output stays pipeable
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Init { path, template } => {
            init(&path, &template)?;
            println!("Initialized coverfolio workspace at {}", path.display());
            println!("Default template: {}", template);
            Ok(())
        }
        Commands::Config { key, value, list } => {
            let service = ConfigService::new(FileSystemRepository::discover()?);

            if list {
                let config = service.list()?;
                println!("default_template = {}", config.default_template);
                println!("base_url = {}", config.base_url);
                println!("editor = {}", config.editor);
                println!("created = {}", config.created.to_rfc3339());
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", service.get(&k)?);
                }
            } else {
                println!("Usage: coverfolio config [--list | <key> [<value>]]");
                println!("Valid keys: default_template, base_url, editor, created");
            }
            Ok(())
        }
        Commands::Templates => {
            print!("{}", format_template_list(list_templates()));
            Ok(())
        }
        Commands::Template { key } => {
            let template = get_template(&key).ok_or(FolioError::UnknownTemplate(key))?;
            print!("{}", format_template(template));
            Ok(())
        }
        Commands::New {
            title,
            template,
            from_resume,
        } => {
            let repo = FileSystemRepository::discover()?;
            let config = repo.load_config()?;
            let store = repo.draft_store();

            let data = match from_resume {
                Some(file) => Some(resume_data(&fs::read_to_string(file)?)?),
                None => None,
            };
            let template = template.unwrap_or(config.default_template);

            let draft = DraftService::new(&store).create(title.as_deref(), &template, data)?;
            println!("{}", draft.id);
            Ok(())
        }
        Commands::List => {
            let store = FileSystemRepository::discover()?.draft_store();
            let drafts = DraftService::new(&store).list()?;
            println!("{}", format_draft_list(&drafts).trim_end());
            Ok(())
        }
        Commands::Show { id } => {
            let store = FileSystemRepository::discover()?.draft_store();
            let draft = DraftService::new(&store).get(&id)?;
            print!("{}", format_draft(&draft));
            Ok(())
        }
        Commands::Set {
            id,
            path,
            value,
            json,
        } => {
            let store = FileSystemRepository::discover()?.draft_store();
            DraftService::new(&store).set_field(&id, &path, &value, json)?;
            println!("Set {}", path);
            Ok(())
        }
        Commands::Theme {
            id,
            var,
            value,
            unset,
        } => {
            let store = FileSystemRepository::discover()?.draft_store();
            let service = DraftService::new(&store);

            if unset {
                service.set_theme(&id, &var, None)?;
                println!("Removed {}", var);
            } else if let Some(v) = value {
                service.set_theme(&id, &var, Some(&v))?;
                println!("Set {} = {}", var, v);
            } else {
                match service.theme_var(&id, &var)? {
                    (_, Some(v)) => println!("{}", v),
                    (key, None) => println!("{} is not overridden", key),
                }
            }
            Ok(())
        }
        Commands::Rename { id, title } => {
            let store = FileSystemRepository::discover()?.draft_store();
            DraftService::new(&store).rename(&id, &title)?;
            println!("Renamed to {}", title);
            Ok(())
        }
        Commands::Switch { id, template } => {
            let store = FileSystemRepository::discover()?.draft_store();
            DraftService::new(&store).change_template(&id, &template)?;
            println!("Switched to {}", template);
            Ok(())
        }
        Commands::Edit { id } => {
            let repo = FileSystemRepository::discover()?;
            let config = repo.load_config()?;
            let store = repo.draft_store();

            let scratch = repo
                .drafts_path()
                .with_file_name(format!("edit-{}.json", id));
            let editor = EditorSession::new(config.get_editor());

            DraftService::new(&store).edit_data(&id, &editor, &scratch)?;
            println!("Saved {}", id);
            Ok(())
        }
        Commands::Import {
            id,
            file,
            overwrite,
        } => {
            let store = FileSystemRepository::discover()?.draft_store();
            let listing = fs::read_to_string(file)?;

            match import_resume(&store, &id, &listing, overwrite)? {
                ImportOutcome::Applied(_) => println!("Imported resume into {}", id),
                ImportOutcome::Skipped(_) => {
                    println!("Draft already has content; use --overwrite to replace it")
                }
            }
            Ok(())
        }
        Commands::Publish { id } => {
            let repo = FileSystemRepository::discover()?;
            let config = repo.load_config()?;
            let store = repo.draft_store();

            let published = publish(&store, &id)?;
            println!("{}", config.public_url(public_path(&published)));
            Ok(())
        }
        Commands::View { slug } => {
            let store = FileSystemRepository::discover()?.draft_store();
            let view = public_view(&store, &slug)?;
            print!("{}", format_public_view(&view));
            Ok(())
        }
    }
}
