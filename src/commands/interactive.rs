//! Interactive picker command

use crate::config::{self, PickerConfig};
use crate::kubectl::{ContextSwitcher, Kubectl};
use crate::picker::{view, Phase, Picker};
use anyhow::Context as _;
use colored::*;
use ratatui::crossterm::event::{self, Event, KeyEventKind};
use ratatui::DefaultTerminal;
use tracing::debug;

/// List contexts, let the user pick one and activate it
///
/// kubectl failures are shown to the user and are not errors here; only a
/// terminal that cannot be driven is.
pub fn pick_and_switch() -> anyhow::Result<()> {
    let config = config::load();

    let loaded = Kubectl::discover().and_then(|kubectl| {
        let contexts = kubectl.list_contexts()?;
        Ok((kubectl, contexts))
    });
    let (kubectl, contexts) = match loaded {
        Ok(loaded) => loaded,
        Err(e) => {
            debug!("could not list contexts: {:?}", e);
            print_outcome(&e.to_string().as_str().bright_red());
            return Ok(());
        }
    };

    let mut picker = Picker::new(contexts, config);
    let mut terminal = ratatui::try_init().context("failed to initialize terminal")?;
    let result = event_loop(&mut terminal, &mut picker, &kubectl, config);
    ratatui::restore();
    result?;

    debug!("picker finished: {:?}", picker.phase());
    if let Some(text) = view::outcome_text(picker.phase(), config) {
        let styled = match picker.phase() {
            Phase::Confirmed { .. } => text.as_str().bright_green(),
            Phase::Errored { .. } => text.as_str().bright_red(),
            _ => text.as_str().normal(),
        };
        print_outcome(&styled);
    }
    Ok(())
}

fn event_loop(
    terminal: &mut DefaultTerminal,
    picker: &mut Picker,
    switcher: &dyn ContextSwitcher,
    config: &PickerConfig,
) -> anyhow::Result<()> {
    let size = terminal.size().context("failed to read terminal size")?;
    picker.resize(size.width);

    while !picker.is_finished() {
        terminal
            .draw(|frame| view::draw(frame, picker, config))
            .context("failed to draw picker")?;

        match event::read().context("failed to read terminal event")? {
            Event::Key(key) if key.kind == KeyEventKind::Press => picker.handle_key(key, switcher),
            Event::Resize(width, _) => picker.resize(width),
            _ => {}
        }
    }
    Ok(())
}

fn print_outcome(text: &ColoredString) {
    println!("\n    {}\n", text);
}
