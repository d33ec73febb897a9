use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use formatted_comments_config::Config;
use formatted_comments_engine::{FORMATTING_HINT, FormatKind, parse, to_html};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use std::{
    env,
    io::{Stdout, stdout},
    path::{Path, PathBuf},
    process,
};

mod app;
mod preview;
mod textarea;

use app::{App, Flow};

#[derive(Debug, PartialEq)]
enum Mode {
    /// Edit in the TUI, optionally starting from a raw-text file
    Interactive(Option<PathBuf>),
    /// Parse a raw-text file and print it in another form
    Print(Output, PathBuf),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Output {
    Json,
    Html,
}

impl Output {
    fn render(self, text: &str) -> Result<String> {
        let content = parse(text);
        Ok(match self {
            Output::Json => content.to_json_pretty()?,
            Output::Html => to_html(text, Some(&content)),
        })
    }
}

fn parse_mode(args: &[String]) -> Option<Mode> {
    match args {
        [_] => Some(Mode::Interactive(None)),
        [_, flag, path] if flag == "--json" => {
            Some(Mode::Print(Output::Json, PathBuf::from(path)))
        }
        [_, flag, path] if flag == "--html" => {
            Some(Mode::Print(Output::Html, PathBuf::from(path)))
        }
        [_, path] if !path.starts_with("--") => {
            Some(Mode::Interactive(Some(PathBuf::from(path))))
        }
        _ => None,
    }
}

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    let program_name = args
        .first()
        .cloned()
        .unwrap_or_else(|| "formatted-comments-cli".to_string());

    let Some(mode) = parse_mode(&args) else {
        eprintln!("Usage: {program_name} [draft-file]");
        eprintln!("       {program_name} --json <text-file>");
        eprintln!("       {program_name} --html <text-file>");
        process::exit(1);
    };

    match mode {
        Mode::Print(output, path) => {
            init_logging();
            let text = read_text(&path)?;
            println!("{}", output.render(&text)?);
            Ok(())
        }
        Mode::Interactive(draft) => {
            let config = match Config::load() {
                Ok(config) => config.unwrap_or_default(),
                Err(e) => {
                    eprintln!("Error: Failed to load config file: {e}");
                    eprintln!("Fix or remove {}", Config::config_path().display());
                    process::exit(1);
                }
            };

            let text = match draft {
                Some(path) => read_text(&path)?,
                None => config.load_draft()?.unwrap_or_default(),
            };

            run_tui(App::new(&config, text))
        }
    }
}

fn init_logging() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();
}

fn read_text(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn run_tui(mut app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Main loop
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    // Echo the final text so it can be piped elsewhere
    println!("{}", app.textarea.text());
    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && app.handle_key(key) == Flow::Quit
        {
            return Ok(());
        }
    }
}

fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(app.rows.saturating_add(2)),
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(f.area());

    f.render_widget(Paragraph::new(toolbar_line(app)), chunks[0]);

    // Edit pane
    let (column, row) = app.textarea.caret_position();
    let scroll = row.saturating_sub(usize::from(app.rows.saturating_sub(1)));
    let edit_text = if app.textarea.text().is_empty() {
        vec![Line::from(Span::styled(
            app.placeholder.clone(),
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        app.textarea.lines()
    };
    let title = if app.disabled { "Comment (read-only)" } else { "Comment" };
    let edit = Paragraph::new(edit_text)
        .block(Block::default().borders(Borders::ALL).title(title))
        .scroll((u16::try_from(scroll).unwrap_or(u16::MAX), 0));
    f.render_widget(edit, chunks[1]);

    if !app.disabled {
        let x = (chunks[1].x + 1).saturating_add(u16::try_from(column).unwrap_or(u16::MAX));
        let y = (chunks[1].y + 1).saturating_add(u16::try_from(row - scroll).unwrap_or(u16::MAX));
        f.set_cursor_position((x, y));
    }

    // Preview pane
    let preview = Paragraph::new(preview::preview_lines(
        app.textarea.text(),
        app.textarea.content(),
    ))
    .block(Block::default().borders(Borders::ALL).title("Preview"))
    .wrap(Wrap { trim: false });
    f.render_widget(preview, chunks[2]);

    let hint = Paragraph::new(Line::from(Span::styled(
        FORMATTING_HINT,
        Style::default().fg(Color::DarkGray),
    )));
    f.render_widget(hint, chunks[3]);

    let help_text = match &app.status {
        Some(status) => Line::from(Span::styled(
            status.clone(),
            Style::default().fg(Color::Red),
        )),
        None => Line::from(vec![
            Span::raw("Esc/Ctrl+Q: Quit | "),
            Span::raw("Shift+arrows: Select | "),
            Span::raw("F2/F3/F4: Bold/Italic/List"),
        ]),
    };
    f.render_widget(Paragraph::new(help_text), chunks[4]);
}

fn toolbar_line(app: &App) -> Line<'static> {
    let style = if app.disabled {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };

    let mut spans = Vec::new();
    for (kind, key) in FormatKind::ALL.into_iter().zip(["F2", "F3", "F4"]) {
        let label = match app.keymap.describe(kind) {
            Some(shortcut) => format!("[{key}] {} ({shortcut})", kind.label()),
            None => format!("[{key}] {}", kind.label()),
        };
        spans.push(Span::styled(label, style));
        spans.push(Span::raw("  "));
    }
    Line::from(spans)
}
