use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Block;

use crate::config::{GLYPH_FOOD, GLYPH_SNAKE, GridSize, Theme};
use crate::game::{GamePhase, GameSnapshot};
use crate::snake::Position;
use crate::ui::hud::render_hud;
use crate::ui::menu::{render_game_over_menu, render_pause_menu, render_victory_menu};

/// Renders the full game frame from an immutable snapshot.
pub fn render(frame: &mut Frame<'_>, snapshot: &GameSnapshot, bounds: GridSize, theme: &Theme) {
    let area = frame.area();
    let play_area = render_hud(frame, area, snapshot, theme);
    let board = board_area(play_area, bounds);

    let block = Block::bordered().border_style(Style::new().fg(theme.border_fg));
    let inner = block.inner(board);
    frame.render_widget(block, board);
    frame
        .buffer_mut()
        .set_style(inner, Style::new().bg(theme.play_bg));

    render_food(frame, inner, snapshot, bounds);
    render_snake(frame, inner, snapshot, bounds, theme);

    match snapshot.phase {
        GamePhase::Paused => render_pause_menu(frame, board, theme),
        GamePhase::GameOver => render_game_over_menu(
            frame,
            board,
            snapshot.score,
            snapshot.high_score,
            snapshot.end_reason,
            theme,
        ),
        GamePhase::Victory => {
            render_victory_menu(frame, board, snapshot.score, snapshot.high_score, theme);
        }
        GamePhase::Running => {}
    }
}

fn render_food(frame: &mut Frame<'_>, inner: Rect, snapshot: &GameSnapshot, bounds: GridSize) {
    let Some(food) = snapshot.food else {
        return;
    };
    let Some((x, y)) = logical_to_terminal(inner, bounds, food.position) else {
        return;
    };

    frame
        .buffer_mut()
        .set_string(x, y, GLYPH_FOOD, Style::new().fg(food.color));
}

fn render_snake(
    frame: &mut Frame<'_>,
    inner: Rect,
    snapshot: &GameSnapshot,
    bounds: GridSize,
    theme: &Theme,
) {
    let tail = snapshot.snake.last().copied();

    let buffer = frame.buffer_mut();
    for (index, segment) in snapshot.snake.iter().enumerate() {
        let Some((x, y)) = logical_to_terminal(inner, bounds, *segment) else {
            continue;
        };

        let style = if index == 0 {
            Style::new()
                .fg(theme.snake_head)
                .add_modifier(Modifier::BOLD)
        } else if Some(*segment) == tail {
            Style::new().fg(theme.snake_tail)
        } else {
            Style::new().fg(theme.snake_body)
        };

        buffer.set_string(x, y, GLYPH_SNAKE, style);
    }
}

/// Centers the bordered board for `bounds` inside the available area.
fn board_area(area: Rect, bounds: GridSize) -> Rect {
    let width = bounds.width.saturating_add(2).min(area.width);
    let height = bounds.height.saturating_add(2).min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;

    Rect {
        x,
        y,
        width,
        height,
    }
}

fn logical_to_terminal(inner: Rect, bounds: GridSize, position: Position) -> Option<(u16, u16)> {
    if !position.is_within_bounds(bounds) {
        return None;
    }

    let x_offset = u16::try_from(position.x).ok()?;
    let y_offset = u16::try_from(position.y).ok()?;

    let x = inner.x.saturating_add(x_offset);
    let y = inner.y.saturating_add(y_offset);
    if x >= inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}
