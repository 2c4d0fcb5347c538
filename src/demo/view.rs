use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{Axis, Bar, BarChart, BarGroup, Block, Borders, Chart, Clear, Dataset, Gauge,
              GraphType, Paragraph, Wrap},
    Frame,
};

use divisive_norm::{CandidateLabel, PlotSeries};

use crate::demo::app::{App, SliderId};

/// Bar heights are fixed-point with three decimals so that the integer bar
/// widget can render them; the printed value keeps the real number.
const BAR_SCALE: f64 = 1000.0;

fn candidate_color(label: CandidateLabel) -> Color {
    match label {
        CandidateLabel::A => Color::Red,
        CandidateLabel::B => Color::Green,
        CandidateLabel::C => Color::Blue,
    }
}

/// Renders one complete frame from the current state. Both panels read the
/// same `PlotSeries`, so they always show a consistent snapshot.
pub fn render(app: &App, frame: &mut Frame) {
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(10),   // Body
            Constraint::Length(1), // Footer
        ])
        .split(frame.size());

    render_header(frame, outer[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(26), Constraint::Min(20)])
        .split(outer[1]);

    render_sliders(app, frame, body[0]);

    let panels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(body[1]);

    render_scatter(&app.state.series, frame, panels[0]);
    render_bars(&app.state.series, frame, panels[1]);

    render_footer(app, frame, outer[2]);

    if app.state.show_help {
        render_help(frame, outer[1]);
    }
}

fn render_header(frame: &mut Frame, area: Rect) {
    let content = Line::from(vec![
        Span::styled(
            " Normalization and Choice ",
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw("— divisive normalization vs. the independence of irrelevant alternatives"),
    ]);
    frame.render_widget(Paragraph::new(content), area);
}

fn render_sliders(app: &App, frame: &mut Frame, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(" Sliders ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2); 7])
        .split(inner);

    for (idx, slider) in SliderId::ALL.iter().enumerate() {
        let (min, max) = slider.range();
        let value = slider.get(&app.state.inputs);
        let ratio = ((value - min) / (max - min)).clamp(0.0, 1.0);
        let selected = idx == app.state.selected;
        let style = if selected {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Cyan)
        };
        let marker = if selected { "> " } else { "  " };
        let gauge = Gauge::default()
            .gauge_style(style)
            .ratio(ratio)
            .label(format!("{}{} {:.2}", marker, slider.label(), value));
        frame.render_widget(gauge, rows[idx]);
    }
}

fn render_scatter(series: &PlotSeries, frame: &mut Frame, area: Rect) {
    let point_data: Vec<[(f64, f64); 1]> = series
        .points
        .iter()
        .map(|(_, pos)| [(pos.social, pos.fiscal)])
        .collect();
    let datasets: Vec<Dataset> = series
        .points
        .iter()
        .zip(point_data.iter())
        .map(|((label, _), data)| {
            Dataset::default()
                .name(label.as_str())
                .marker(symbols::Marker::Dot)
                .graph_type(GraphType::Scatter)
                .style(Style::default().fg(candidate_color(*label)))
                .data(data)
        })
        .collect();

    let axis_labels = vec![
        Span::raw("0.0"),
        Span::raw("0.5"),
        Span::raw("1.0"),
    ];
    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Policy Alignment "),
        )
        .x_axis(
            Axis::default()
                .title("Social")
                .bounds([0.0, 1.0])
                .labels(axis_labels.clone()),
        )
        .y_axis(
            Axis::default()
                .title("Fiscal")
                .bounds([0.0, 1.0])
                .labels(axis_labels),
        );
    frame.render_widget(chart, area);
}

fn render_bars(series: &PlotSeries, frame: &mut Frame, area: Rect) {
    let bars: Vec<Bar> = series
        .scores
        .iter()
        .map(|score| {
            Bar::default()
                .label(Line::from(score.label.as_str()))
                .value((score.total * BAR_SCALE).round() as u64)
                .text_value(format!("{:.3}", score.total))
                .style(Style::default().fg(candidate_color(score.label)))
        })
        .collect();
    let axis_max = (series.score_axis_max() * BAR_SCALE).ceil() as u64;

    let chart = BarChart::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Normalized Liking "),
        )
        .data(BarGroup::default().bars(&bars))
        .bar_width(7)
        .bar_gap(2)
        .max(axis_max.max(1));
    frame.render_widget(chart, area);
}

fn render_footer(app: &App, frame: &mut Frame, area: Rect) {
    let scenario = match &app.state.scenario_name {
        Some(name) => format!(" | scenario: {}", name),
        None if app.has_scenarios() => " | s next scenario".to_string(),
        None => String::new(),
    };
    let content = Line::from(vec![
        Span::raw(" q quit | tab/j/k select | \u{2190}/\u{2192} adjust | r reset | ? help"),
        Span::styled(scenario, Style::default().fg(Color::Yellow)),
    ]);
    frame.render_widget(Paragraph::new(content), area);
}

fn render_help(frame: &mut Frame, body: Rect) {
    let area = centered_rect(body, 60, 12);
    let text = vec![
        Line::from("Each candidate aligns with you on two policy dimensions."),
        Line::from("The left panel shows the raw alignments; the right panel"),
        Line::from("shows how much you 'like' each candidate after divisive"),
        Line::from("normalization: every alignment is divided by one plus"),
        Line::from("twice the column total, so candidates share a budget."),
        Line::from(""),
        Line::from("With the defaults, A and B tie. Now raise C on one"),
        Line::from("dimension: C's score goes up, and the score of the"),
        Line::from("candidate strong on that dimension drops, even though"),
        Line::from("that candidate did not move at all. That breaks the"),
        Line::from("independence of irrelevant alternatives."),
    ];
    let paragraph = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).title(" About "))
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: false });
    frame.render_widget(Clear, area);
    frame.render_widget(paragraph, area);
}

fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    Rect {
        x: area.x + (area.width - w) / 2,
        y: area.y + (area.height - h) / 2,
        width: w,
        height: h,
    }
}
