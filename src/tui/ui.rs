//! UI rendering for the player.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use crate::player::Phase;
use crate::tui::app::PlayerApp;

/// Render the player screen.
pub fn render(frame: &mut Frame<'_>, player: &PlayerApp) {
    // Create layout: header, timer, footer
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Timer
            Constraint::Length(6), // Footer
        ])
        .split(frame.area());

    render_header(frame, player, chunks[0]);
    render_timer(frame, player, chunks[1]);
    render_footer(frame, player, chunks[2]);
}

const fn phase_color(phase: Phase) -> Color {
    match phase {
        Phase::Preparing => Color::Yellow,
        Phase::Working { .. } => Color::Green,
        Phase::Resting { .. } => Color::Cyan,
        Phase::Complete => Color::White,
    }
}

/// Render the header: workout title plus sound and pause state.
fn render_header(frame: &mut Frame<'_>, player: &PlayerApp, area: Rect) {
    let snapshot = player.snapshot();

    let sound = if player.sound_enabled() { "♪" } else { "♪ off" };
    let paused = if snapshot.paused { "  ⏸ PAUSED" } else { "" };
    let title = format!(
        " {} [{}]  {}{} ",
        player.title,
        player.intensity(),
        sound,
        paused
    );

    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(phase_color(snapshot.phase))
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(phase_color(snapshot.phase))),
        );

    frame.render_widget(header, area);
}

/// Render the countdown: phase label, exercise name, remaining seconds,
/// and the phase gauge.
fn render_timer(frame: &mut Frame<'_>, player: &PlayerApp, area: Rect) {
    let snapshot = player.snapshot();
    let color = phase_color(snapshot.phase);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(1), // Phase label
            Constraint::Length(2), // Exercise name
            Constraint::Length(2), // Seconds
            Constraint::Length(1), // Gauge
            Constraint::Min(1),
        ])
        .split(area);

    let label = Paragraph::new(snapshot.phase.label().to_uppercase())
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(label, rows[1]);

    // During rest the upcoming exercise takes the stage.
    let headline = match snapshot.phase {
        Phase::Resting { .. } => player
            .next_exercise()
            .map_or_else(|| "Finished".to_string(), |ex| format!("Next: {}", ex.name)),
        Phase::Complete => "Workout Complete".to_string(),
        _ => player.current_exercise().name.clone(),
    };
    let name = Paragraph::new(headline)
        .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(name, rows[2]);

    let seconds = Paragraph::new(format!("{}", snapshot.time_left))
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(seconds, rows[3]);

    // Gauge shows time remaining in the phase, like the ring in a phone app.
    let phase_seconds = player.phase_seconds().max(1);
    let ratio = f64::from(snapshot.time_left) / f64::from(phase_seconds);
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(color))
        .ratio(ratio.clamp(0.0, 1.0))
        .label("");
    let gauge_area = centered_horizontal(rows[4], 60);
    frame.render_widget(gauge, gauge_area);
}

/// Render the footer: circuit progress, session stats, coach line, keys.
fn render_footer(frame: &mut Frame<'_>, player: &PlayerApp, area: Rect) {
    let snapshot = player.snapshot();
    let total = player.exercise_count();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Progress gauge
            Constraint::Length(1), // Progress text + stats
            Constraint::Length(1), // Coach line
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Help
        ])
        .split(area);

    #[allow(clippy::cast_precision_loss)]
    let progress = snapshot.current_index as f64 / total.max(1) as f64;
    let progress_gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::Green))
        .ratio(progress.clamp(0.0, 1.0))
        .label("");
    frame.render_widget(progress_gauge, rows[0]);

    let minutes = snapshot.elapsed_work_seconds / 60;
    let seconds = snapshot.elapsed_work_seconds % 60;
    let stats = Line::from(vec![
        Span::styled(
            format!(" Exercise {} / {}", snapshot.current_index + 1, total),
            Style::default().fg(Color::White),
        ),
        Span::styled(
            format!("   {minutes}:{seconds:02} worked"),
            Style::default().fg(Color::Cyan),
        ),
        Span::styled(
            format!("   ~{} kcal", player.calories_so_far()),
            Style::default().fg(Color::Green),
        ),
    ]);
    frame.render_widget(Paragraph::new(stats), rows[1]);

    if let Some(ref cue) = player.last_cue {
        let coach = Paragraph::new(format!(" ▸ {cue}"))
            .style(Style::default().fg(Color::Yellow));
        frame.render_widget(coach, rows[2]);
    }

    let help = Paragraph::new(" space:pause | s:skip | m:sound | q:exit")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, rows[4]);
}

/// Center a band of `width` columns inside `area`.
fn centered_horizontal(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    let x = area.x + (area.width - width) / 2;
    Rect {
        x,
        width,
        ..area
    }
}
