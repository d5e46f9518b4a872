use unsegen::base::*;
use unsegen::widget::*;

use crate::data::{StatCard, STATS};

use super::util::{fit, write_styled, writeln_styled};
use super::{Context, Theme};

struct StatCardWidget<'a> {
    card: &'a StatCard,
    theme: &'a Theme,
}

impl StatCardWidget<'_> {
    const MIN_WIDTH: usize = 20;
    const HEIGHT: usize = 4;
}

impl Widget for StatCardWidget<'_> {
    fn space_demand(&self) -> Demand2D {
        Demand2D {
            width: ColDemand::at_least(Self::MIN_WIDTH),
            height: RowDemand::exact(Self::HEIGHT),
        }
    }

    fn draw(&self, mut window: Window, _hints: RenderingHints) {
        let width = window.get_width().raw_value() as usize;
        let icon = format!("[{}]", self.card.icon);
        let title_width = width.saturating_sub(icon.chars().count() + 1);

        let mut cursor = Cursor::new(&mut window).style_modifier(self.theme.text_style);

        write_styled(
            &mut cursor,
            self.theme.muted_style,
            &fit(self.card.title, title_width),
        );
        writeln_styled(&mut cursor, self.theme.accent(self.card.accent), &icon);

        writeln_styled(&mut cursor, self.theme.title_style, self.card.value);

        write_styled(
            &mut cursor,
            self.theme.change_style(self.card.positive),
            self.card.change,
        );
        writeln_styled(&mut cursor, self.theme.muted_style, " from last month");
    }
}

pub struct StatsPane<'a> {
    context: &'a Context,
}

impl<'a> StatsPane<'a> {
    pub fn new(context: &'a Context) -> Self {
        StatsPane { context }
    }
}

impl Widget for StatsPane<'_> {
    fn space_demand(&self) -> Demand2D {
        Demand2D {
            width: ColDemand::at_least(StatCardWidget::MIN_WIDTH),
            height: RowDemand::exact(StatCardWidget::HEIGHT),
        }
    }

    fn draw(&self, window: Window, hints: RenderingHints) {
        let theme = self.context.theme();

        let mut layout = HLayout::new().separator(GraphemeCluster::space());
        for card in STATS.iter() {
            layout = layout.widget(StatCardWidget { card, theme });
        }

        layout.draw(window, hints);
    }
}
