//! Terminal viewer for a rendered front.
//!
//! The viewer takes over the terminal, draws the scene as a braille
//! scatter chart and blocks until the user closes it.

pub mod ui;

use crate::clipboard;
use crate::error::Result;
use crate::plot::{FrontScene, RenderedArtifact};
use crossterm::{
    cursor::Show,
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;

/// Viewer state.
#[derive(Debug, Clone)]
pub struct ViewerState {
    /// Show grid lines behind the markers.
    pub grid: bool,
    /// Status message.
    pub status: String,
}

impl ViewerState {
    /// Create a viewer state for a scene.
    pub fn new(scene: &FrontScene) -> Self {
        Self {
            grid: scene.grid,
            status: "Ready".to_string(),
        }
    }

    /// Toggle grid lines.
    pub fn toggle_grid(&mut self) {
        self.grid = !self.grid;
        self.status = if self.grid {
            "Grid: ON".to_string()
        } else {
            "Grid: OFF".to_string()
        };
    }
}

/// What a key press asks the viewer to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerAction {
    /// Close the viewer.
    Quit,
    /// Toggle grid lines.
    ToggleGrid,
    /// Copy the artifact summary to the clipboard.
    CopySummary,
    /// Nothing bound to the key.
    None,
}

impl ViewerAction {
    /// Map a key to an action.
    pub fn from_key(modifiers: KeyModifiers, code: KeyCode) -> Self {
        match (modifiers, code) {
            (KeyModifiers::NONE, KeyCode::Esc)
            | (KeyModifiers::NONE, KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c')) => Self::Quit,
            (KeyModifiers::NONE, KeyCode::Char('g')) => Self::ToggleGrid,
            (KeyModifiers::NONE, KeyCode::Char('y')) => Self::CopySummary,
            _ => Self::None,
        }
    }
}

/// Show a scene until the user closes the viewer.
///
/// The terminal is restored whether setup, drawing or event handling fails.
pub fn show(scene: &FrontScene, artifact: &RenderedArtifact) -> Result<()> {
    tracing::info!("Opening viewer for {}", artifact.path.display());

    enable_raw_mode()?;
    let res = with_restore(
        || {
            let mut stdout = io::stdout();
            execute!(stdout, EnterAlternateScreen)?;
            let backend = CrosstermBackend::new(stdout);
            let mut terminal = Terminal::new(backend)?;

            run_viewer(&mut terminal, scene, artifact)
        },
        restore_terminal,
    );

    tracing::info!("Viewer closed");
    res
}

/// Run `body`, then `restore` no matter how `body` ended.
///
/// An error from `body` takes precedence over one from `restore`.
fn with_restore<T>(
    body: impl FnOnce() -> Result<T>,
    restore: impl FnOnce() -> Result<()>,
) -> Result<T> {
    let res = body();
    let restored = restore();
    if let Err(e) = &restored {
        tracing::warn!("Failed to restore terminal: {}", e);
    }

    let value = res?;
    restored?;
    Ok(value)
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, LeaveAlternateScreen, Show)?;
    Ok(())
}

fn run_viewer<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    scene: &FrontScene,
    artifact: &RenderedArtifact,
) -> Result<()> {
    let mut state = ViewerState::new(scene);

    loop {
        terminal.draw(|f| ui::draw_viewer(f, scene, artifact, &state))?;

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match ViewerAction::from_key(key.modifiers, key.code) {
            ViewerAction::Quit => return Ok(()),
            ViewerAction::ToggleGrid => state.toggle_grid(),
            ViewerAction::CopySummary => match clipboard::copy_artifact_summary(artifact) {
                Ok(_) => state.status = "Summary copied!".to_string(),
                Err(e) => {
                    tracing::warn!("Copy failed: {}", e);
                    state.status = format!("Copy failed: {}", e);
                },
            },
            ViewerAction::None => {},
        }
    }
}
