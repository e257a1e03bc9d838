//! brandbook: browse brand guideline sections in the terminal.
#![allow(clippy::multiple_crate_versions)]

use anyhow::{anyhow, bail};
use brandbook::{
    app_state::AppState, audit, branding::Banner, config, loader::ContentLoader, locale::Locale,
    page, resolve, selection::Selection, taxonomy::Taxonomy, ui,
};
use clap::{Parser, Subcommand};
use ratatui::crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "brandbook")]
#[command(about = "Browse brand guideline sections in the terminal", long_about = None)]
struct Args {
    /// Directory holding the content folders and brandbook.toml
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Config file to use instead of brandbook.toml in the root
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write logs to this file (the viewer itself never logs to the terminal)
    #[arg(long)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Print the content for one selection
    Show {
        /// Section id (1-7)
        #[arg(long)]
        section: u8,
        /// Zero-based subsection index
        #[arg(long, default_value_t = 0)]
        subsection: usize,
        /// Content locale
        #[arg(long, value_enum, default_value_t = Locale::En)]
        locale: Locale,
        /// Emit the page as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the canonical content path for a section name like "1. Brand Narrative"
    Resolve {
        /// Number-prefixed English section name
        name: String,
    },
    /// List sections and subsections
    Sections {
        /// Label locale
        #[arg(long, value_enum, default_value_t = Locale::En)]
        locale: Locale,
    },
    /// Report mismatches between the taxonomy and the content files
    Check,
}

fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();
    init_logging(args.log_file.as_deref(), args.command.is_none())?;

    let config_path = args
        .config
        .clone()
        .unwrap_or_else(|| args.root.join(config::CONFIG_FILE_NAME));
    let cfg = config::Config::load(&config_path);
    let taxonomy = Taxonomy::builtin()?;
    let loader = ContentLoader::new(&args.root, &cfg);

    match args.command {
        None => {
            let banner = Banner::load(&args.root.join(&cfg.logo_path), &cfg.title);
            run_tui(AppState::new(taxonomy, loader, banner))?;
        }
        Some(Command::Show {
            section,
            subsection,
            locale,
            json,
        }) => {
            if taxonomy.get(section).is_none() {
                bail!("unknown section {section}");
            }
            let mut selection = Selection::new(&taxonomy);
            selection.select_section(&taxonomy, section);
            selection.select_subsection(&taxonomy, subsection);
            selection.select_locale(&taxonomy, locale);

            let page = page::compose(&taxonomy, &loader, &selection);
            if json {
                println!("{}", page.to_json()?);
            } else {
                println!("{} / {}", page.section_title, page.subsection_title);
                println!("({})", page.source_path);
                println!();
                print!("{}", page.body);
                if !page.body.ends_with('\n') {
                    println!();
                }
            }
        }
        Some(Command::Resolve { name }) => {
            println!("{}", resolve::resolve(&name)?);
        }
        Some(Command::Sections { locale }) => print_sections(&taxonomy, locale),
        Some(Command::Check) => {
            let findings = audit::audit(&taxonomy, &loader)?;
            for finding in &findings {
                println!("{finding}");
            }
            if !findings.is_empty() {
                eprintln!("{} problem(s) found", findings.len());
                return Ok(ExitCode::FAILURE);
            }
            eprintln!("Content matches the taxonomy");
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn init_logging(log_file: Option<&Path>, interactive: bool) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let installed = match log_file {
        Some(path) => builder
            .with_ansi(false)
            .with_writer(Mutex::new(File::create(path)?))
            .try_init(),
        // The TUI owns the terminal, so without a log file it stays silent.
        None if interactive => return Ok(()),
        None => builder.with_writer(io::stderr).try_init(),
    };
    installed.map_err(|e| anyhow!(e))
}

fn print_sections(taxonomy: &Taxonomy, locale: Locale) {
    for section in taxonomy.sections() {
        println!("{}", section.title(locale));
        let titles = section.subsection_titles(locale);
        for (index, title) in titles.iter().enumerate() {
            let branch = if index + 1 == titles.len() {
                "└──"
            } else {
                "├──"
            };
            println!("    {branch} [{index}] {title}");
        }
    }
}

fn run_tui(mut app: AppState) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        eprintln!("Error: {e}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppState,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.message = None;

            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Up | KeyCode::Char('k') => app.move_up(),
                KeyCode::Down | KeyCode::Char('j') => app.move_down(),
                KeyCode::Tab | KeyCode::Right => app.focus_next(),
                KeyCode::BackTab | KeyCode::Left => app.focus_prev(),
                KeyCode::PageDown => app.scroll_by(10),
                KeyCode::PageUp => app.scroll_by(-10),
                KeyCode::Char('l') => app.toggle_locale(),
                KeyCode::Char('r') => app.reload(),
                _ => {}
            }
        }
    }
}
