use unsegen::base::*;
use unsegen::widget::*;

use super::util::{fit, write_styled, writeln_styled};
use super::Context;

const TITLE: &str = "Admin Dashboard";

pub struct Header<'a> {
    context: &'a Context,
}

impl<'a> Header<'a> {
    pub fn new(context: &'a Context) -> Self {
        Header { context }
    }
}

impl Widget for Header<'_> {
    fn space_demand(&self) -> Demand2D {
        Demand2D {
            width: ColDemand::at_least(TITLE.len() + 2),
            height: RowDemand::exact(2),
        }
    }

    fn draw(&self, mut window: Window, _hints: RenderingHints) {
        let theme = self.context.theme();
        let width = window.get_width().raw_value() as usize;
        let controls = format!("[t] {}  Profile ", self.context.theme_mode());

        let mut cursor = Cursor::new(&mut window).style_modifier(theme.text_style);

        let title = format!(" {}", TITLE);
        let title_width = width.saturating_sub(controls.chars().count());
        write_styled(&mut cursor, theme.title_style, &fit(&title, title_width));
        writeln_styled(&mut cursor, theme.muted_style, &controls);

        writeln_styled(&mut cursor, theme.muted_style, &"─".repeat(width));
    }
}
