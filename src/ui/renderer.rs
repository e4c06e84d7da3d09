use crate::config::Config;
use crate::logger::Logger;
use crate::ui::app_component::AppComponent;
use crate::ui::core::{Component, EventHandler, EventType};
use crossterm::{
    event::{DisableBracketedPaste, EnableBracketedPaste},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io;
use std::time::Instant;

/// Run the dashboard until the user quits
pub async fn run_app(config: &Config, logger: Logger) -> anyhow::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Initialize application components
    let mut app = AppComponent::new(config, logger.clone());
    let mut event_handler = EventHandler::new();
    logger.log("Dashboard started".to_string());

    let result = run_app_loop(&mut terminal, &mut app, &mut event_handler).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), DisableBracketedPaste, LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    logger.flush();

    result
}

async fn run_app_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppComponent,
    event_handler: &mut EventHandler,
) -> anyhow::Result<()> {
    let mut needs_render = true;

    loop {
        // Render when needed
        if needs_render {
            terminal.draw(|f| app.render(f, f.area()))?;
        }

        let event_result = event_handler.next_event().await?;

        needs_render = match event_result {
            EventType::Key(_) | EventType::Paste(_) | EventType::Resize(_, _) => {
                app.handle_event(event_result)?;
                true
            }
            // Only the save banner changes on its own
            EventType::Tick => app.on_tick(Instant::now()),
        };

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
