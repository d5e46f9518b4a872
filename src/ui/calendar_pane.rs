use std::fmt::Display;
use unsegen::base::*;
use unsegen::widget::*;

use crate::calendar::{CalendarCell, MonthGrid, DAYS_PER_WEEK, WEEKDAY_LABELS};

use super::util::{write_styled, writeln_styled};
use super::{Context, Theme};

pub struct DayCell<'a> {
    cell: CalendarCell,
    theme: &'a Theme,
}

impl<'a> DayCell<'a> {
    const CELL_HEIGHT: usize = 1;
    const CELL_WIDTH: usize = 4;

    fn new(cell: CalendarCell, theme: &'a Theme) -> Self {
        DayCell { cell, theme }
    }
}

impl Display for DayCell<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.cell {
            CalendarCell::Blank => write!(f, "{:width$}", "", width = Self::CELL_WIDTH),
            CalendarCell::Day { day, is_today } => {
                let arg_today = if is_today {
                    self.theme.today_day_char.unwrap_or(' ')
                } else {
                    ' '
                };
                write!(f, " {}{:>2}", arg_today, day)
            }
        }
    }
}

pub struct MonthPane<'a> {
    context: &'a Context,
}

impl<'a> MonthPane<'a> {
    const HEADER_ROWS: usize = 3;
    const MAX_WEEKS: usize = 6;

    pub fn new(context: &'a Context) -> Self {
        MonthPane { context }
    }

    fn draw_grid(&self, cursor: &mut Cursor, grid: &MonthGrid) {
        let theme = self.context.theme();

        for week in grid.weeks() {
            for cell in week {
                let style = if cell.is_today() {
                    theme.today_day_style
                } else {
                    theme.text_style
                };
                write_styled(cursor, style, &DayCell::new(*cell, theme).to_string());
            }
            cursor.write("\n");
        }
    }
}

impl Widget for MonthPane<'_> {
    fn space_demand(&self) -> Demand2D {
        Demand2D {
            width: ColDemand::at_least(DAYS_PER_WEEK * DayCell::CELL_WIDTH),
            height: RowDemand::at_least(Self::HEADER_ROWS + Self::MAX_WEEKS * DayCell::CELL_HEIGHT),
        }
    }

    fn draw(&self, mut window: Window, _hints: RenderingHints) {
        let theme = self.context.theme();
        let month = self.context.calendar_month();

        let mut cursor = Cursor::new(&mut window).style_modifier(theme.text_style);

        write_styled(&mut cursor, theme.month_header_style, &month.to_string());
        writeln_styled(&mut cursor, theme.muted_style, "   [h] prev  [l] next  [g] today");
        cursor.write("\n");

        for &head in WEEKDAY_LABELS.iter() {
            write_styled(
                &mut cursor,
                theme.weekday_style,
                &format!("{:>width$}", head, width = DayCell::CELL_WIDTH),
            );
        }
        cursor.write("\n");

        match self.context.month_grid() {
            Ok(grid) => self.draw_grid(&mut cursor, &grid),
            Err(err) => {
                log::warn!("Could not lay out {}: {}", month, err);
                writeln_styled(&mut cursor, theme.error_style, &err.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cells_are_four_columns_wide() {
        let theme = Theme::default();

        let blank = DayCell::new(CalendarCell::Blank, &theme).to_string();
        let plain = DayCell::new(CalendarCell::Day { day: 7, is_today: false }, &theme).to_string();
        let today = DayCell::new(CalendarCell::Day { day: 14, is_today: true }, &theme).to_string();

        assert_eq!(blank, "    ");
        assert_eq!(plain, "   7");
        assert_eq!(today, " *14");
    }
}
