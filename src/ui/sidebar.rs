use unsegen::base::*;
use unsegen::widget::*;

use super::util::fit;
use super::{Context, View};

pub struct Sidebar<'a> {
    context: &'a Context,
}

impl<'a> Sidebar<'a> {
    const EXPANDED_WIDTH: usize = 18;
    const COLLAPSED_WIDTH: usize = 6;

    pub fn new(context: &'a Context) -> Self {
        Sidebar { context }
    }

    fn width(&self) -> usize {
        if self.context.sidebar_collapsed() {
            Self::COLLAPSED_WIDTH
        } else {
            Self::EXPANDED_WIDTH
        }
    }

    fn entry(&self, view: View) -> String {
        if self.context.sidebar_collapsed() {
            format!(" {}", view.icon())
        } else {
            format!(" {:<3} {}", view.icon(), view.label())
        }
    }
}

impl Widget for Sidebar<'_> {
    fn space_demand(&self) -> Demand2D {
        Demand2D {
            width: ColDemand::exact(self.width()),
            height: RowDemand::at_least(View::ALL.len() + 2),
        }
    }

    fn draw(&self, mut window: Window, _hints: RenderingHints) {
        let theme = self.context.theme();
        let width = self.width();

        let mut cursor = Cursor::new(&mut window).style_modifier(theme.muted_style);

        let toggle = if self.context.sidebar_collapsed() {
            " →"
        } else {
            " ← [b]"
        };
        cursor.write(&fit(toggle, width));
        cursor.write("\n\n");

        for view in View::ALL.iter() {
            let style = if *view == self.context.view() {
                theme.nav_active_style
            } else {
                theme.nav_style
            };

            cursor.set_style_modifier(style);
            cursor.write(&fit(&self.entry(*view), width));
            cursor.write("\n");
        }
    }
}
