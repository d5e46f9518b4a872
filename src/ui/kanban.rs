use unsegen::base::*;
use unsegen::widget::*;

use crate::data::{KanbanColumn, KANBAN};

use super::util::{fit, writeln_styled};
use super::{Context, Theme};

struct ColumnWidget<'a> {
    column: &'a KanbanColumn,
    theme: &'a Theme,
}

impl ColumnWidget<'_> {
    const MIN_WIDTH: usize = 18;
    const CARD_HEIGHT: usize = 5;

    fn heading(&self) -> String {
        format!("{} ({})", self.column.stage.title(), self.column.tasks.len())
    }
}

impl Widget for ColumnWidget<'_> {
    fn space_demand(&self) -> Demand2D {
        Demand2D {
            width: ColDemand::at_least(Self::MIN_WIDTH),
            height: RowDemand::at_least(2 + self.column.tasks.len() * Self::CARD_HEIGHT),
        }
    }

    fn draw(&self, mut window: Window, _hints: RenderingHints) {
        let width = window.get_width().raw_value() as usize;
        let theme = self.theme;

        let mut cursor = Cursor::new(&mut window).style_modifier(theme.text_style);

        writeln_styled(&mut cursor, theme.month_header_style, &fit(&self.heading(), width));
        writeln_styled(&mut cursor, theme.muted_style, &"─".repeat(width));

        for task in self.column.tasks.iter() {
            writeln_styled(&mut cursor, theme.title_style, &fit(task.title, width));
            writeln_styled(&mut cursor, theme.muted_style, &fit(task.description, width));
            writeln_styled(
                &mut cursor,
                theme.text_style,
                &fit(&format!("Assignee: {}", task.assignee), width),
            );
            writeln_styled(&mut cursor, theme.muted_style, &fit(task.date, width));
            cursor.write("\n");
        }
    }
}

pub struct KanbanBoard<'a> {
    context: &'a Context,
}

impl<'a> KanbanBoard<'a> {
    pub fn new(context: &'a Context) -> Self {
        KanbanBoard { context }
    }
}

impl Widget for KanbanBoard<'_> {
    fn space_demand(&self) -> Demand2D {
        Demand2D {
            width: ColDemand::at_least(KANBAN.len() * (ColumnWidget::MIN_WIDTH + 1)),
            height: RowDemand::at_least(2),
        }
    }

    fn draw(&self, window: Window, hints: RenderingHints) {
        let theme = self.context.theme();

        let mut columns = HLayout::new().separator(GraphemeCluster::space());
        for column in KANBAN.iter() {
            columns = columns.widget(ColumnWidget { column, theme });
        }

        VLayout::new()
            .widget(BoardTitle { theme })
            .widget(columns)
            .draw(window, hints);
    }
}

struct BoardTitle<'a> {
    theme: &'a Theme,
}

impl Widget for BoardTitle<'_> {
    fn space_demand(&self) -> Demand2D {
        Demand2D {
            width: ColDemand::at_least(13),
            height: RowDemand::exact(2),
        }
    }

    fn draw(&self, mut window: Window, _hints: RenderingHints) {
        let mut cursor = Cursor::new(&mut window);
        writeln_styled(&mut cursor, self.theme.title_style, "Project Board");
    }
}
