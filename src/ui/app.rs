use itertools::Itertools;

use crate::config::Config;
use crate::events::{Dispatcher, Event};

use super::command::CommandParser;
use super::util::write_styled;
use super::{
    ChartsPane, Context, Header, KanbanBoard, Mode, SettingsPane, Sidebar,
    StatsPane, UsersTable, View, MonthPane,
};

use unsegen::base::{Cursor, GraphemeCluster, Terminal, Window};
use unsegen::input::{Behavior, EditBehavior, Event as InputEvent, Input, Key, ScrollBehavior};
use unsegen::widget::*;

const KEY_HINTS: &[(&str, &str)] = &[
    ("tab", "next view"),
    ("1-6", "jump"),
    ("/", "search"),
    (":", "command"),
    ("t", "theme"),
    ("b", "sidebar"),
    ("q", "quit"),
];

/// Applies a key pressed in normal mode. Returns `false` if the key means
/// nothing in the current view.
pub fn handle_normal_key(context: &mut Context, key: Key) -> bool {
    match key {
        Key::Char('q') => context.quit = true,
        Key::Char(':') => context.mode = Mode::Command,
        Key::Char('/') => {
            context.select_view(View::Table);
            context.mode = Mode::Search;
        }
        Key::Char('t') => context.toggle_theme(),
        Key::Char('b') => context.toggle_sidebar(),
        Key::Char('\t') => context.select_view(context.view().next()),
        Key::BackTab => context.select_view(context.view().prev()),
        Key::Char(c @ '1'..='6') => {
            if let Some(view) = c.to_digit(10).and_then(|n| View::nth(n as usize - 1)) {
                context.select_view(view);
            }
        }
        key => {
            return match context.view() {
                View::Calendar => handle_calendar_key(context, key),
                View::Settings => handle_settings_key(context, key),
                _ => false,
            }
        }
    }
    true
}

fn handle_calendar_key(context: &mut Context, key: Key) -> bool {
    match key {
        Key::Char('h') | Key::Left => context.prev_month(1),
        Key::Char('l') | Key::Right => context.next_month(1),
        Key::Char('g') => context.goto_today(),
        _ => return false,
    }
    true
}

fn handle_settings_key(context: &mut Context, key: Key) -> bool {
    match key {
        Key::Char('j') | Key::Down => context.settings.focus_next(),
        Key::Char('k') | Key::Up => context.settings.focus_prev(),
        Key::Char(' ') | Key::Char('\n') => {
            if context.settings.activate() {
                context.save_settings();
            }
        }
        Key::Char('s') => context.save_settings(),
        _ => return false,
    }
    true
}

/// Routes one input event according to the current mode. `Esc` always
/// returns to normal mode and also drops the search query.
pub fn handle_input(context: &mut Context, input: Input) {
    if input.matches(Key::Esc) {
        if context.mode == Mode::Search {
            context.set_search_query("");
        }
        context.mode = Mode::Normal;
        return;
    }

    match context.mode {
        Mode::Normal => {
            if let InputEvent::Key(key) = input.event {
                context.clear_messages();
                if !handle_normal_key(context, key) {
                    log::debug!("Unbound key {:?} in {}", key, context.view().id());
                }
            }
        }
        mode @ Mode::Search => {
            input
                .chain(
                    EditBehavior::new(context.input_sink_mut(mode))
                        .delete_forwards_on(Key::Delete)
                        .delete_backwards_on(Key::Backspace)
                        .left_on(Key::Left)
                        .right_on(Key::Right),
                )
                .chain(SearchLineBehaviour(context))
                .finish();
        }
        mode @ Mode::Command => {
            input
                .chain(
                    EditBehavior::new(context.input_sink_mut(mode))
                        .delete_forwards_on(Key::Delete)
                        .delete_backwards_on(Key::Backspace)
                        .left_on(Key::Left)
                        .right_on(Key::Right),
                )
                .chain(
                    ScrollBehavior::new(context.input_sink_mut(mode))
                        .backwards_on(Key::Up)
                        .forwards_on(Key::Down),
                )
                .chain(CommandParser::new(context))
                .finish();
        }
    }
}

/// Leaves search mode on enter, keeping the query.
struct SearchLineBehaviour<'a>(&'a mut Context);

impl Behavior for SearchLineBehaviour<'_> {
    fn input(self, input: Input) -> Option<Input> {
        if let InputEvent::Key(Key::Char('\n')) = input.event {
            self.0.mode = Mode::Normal;
            None
        } else {
            Some(input)
        }
    }
}

struct ContentPane<'a> {
    context: &'a Context,
}

impl Widget for ContentPane<'_> {
    fn space_demand(&self) -> Demand2D {
        Demand2D {
            width: ColDemand::at_least(30),
            height: RowDemand::at_least(10),
        }
    }

    fn draw(&self, window: Window, hints: RenderingHints) {
        let context = self.context;
        match context.view() {
            View::Dashboard => VLayout::new()
                .widget(StatsPane::new(context))
                .widget(ChartsPane::new(context))
                .draw(window, hints),
            View::Table => UsersTable::new(context).draw(window, hints),
            View::Charts => ChartsPane::new(context).draw(window, hints),
            View::Calendar => MonthPane::new(context).draw(window, hints),
            View::Kanban => KanbanBoard::new(context).draw(window, hints),
            View::Settings => SettingsPane::new(context).draw(window, hints),
        }
    }
}

struct MessageLine<'a> {
    context: &'a Context,
}

impl Widget for MessageLine<'_> {
    fn space_demand(&self) -> Demand2D {
        Demand2D {
            width: ColDemand::at_least(1),
            height: RowDemand::exact(1),
        }
    }

    fn draw(&self, mut window: Window, _hints: RenderingHints) {
        let theme = self.context.theme();
        let mut cursor = Cursor::new(&mut window);

        if let Some(error) = &self.context.last_error_message {
            write_styled(&mut cursor, theme.error_style, error);
        } else if let Some(status) = &self.context.status_message {
            write_styled(&mut cursor, theme.positive_style, status);
        } else {
            let hints = KEY_HINTS
                .iter()
                .map(|(key, action)| format!("[{}] {}", key, action))
                .join("  ");
            write_styled(&mut cursor, theme.muted_style, &hints);
        }
    }
}

pub struct App<'a> {
    config: &'a Config,
    context: Context,
}

impl<'a> App<'a> {
    pub fn new(config: &'a Config) -> App<'a> {
        let context = Context::new(config);
        App { config, context }
    }

    fn bottom_bar<'w>(&'w self) -> impl Widget + 'w {
        let mut layout = HLayout::new().separator(GraphemeCluster::space());
        if let mode @ (Mode::Command | Mode::Search) = self.context.mode {
            layout = layout.widget(self.context.input_sink(mode).as_widget());
        } else {
            layout = layout.widget(MessageLine {
                context: &self.context,
            });
        }

        layout
    }

    fn as_widget<'w>(&'w self) -> impl Widget + 'w
    where
        'a: 'w,
    {
        VLayout::new()
            .widget(Header::new(&self.context))
            .widget(
                HLayout::new()
                    .separator(GraphemeCluster::space())
                    .widget(Sidebar::new(&self.context))
                    .widget(ContentPane {
                        context: &self.context,
                    }),
            )
            .widget(self.bottom_bar())
    }

    pub fn run(
        &mut self,
        dispatcher: Dispatcher,
        mut term: Terminal,
    ) -> Result<(), Box<dyn std::error::Error>> {
        log::info!(
            "Starting in {} view, tick rate {:?}",
            self.context.view().id(),
            self.config.tick_rate()
        );

        while !self.context.quit {
            // Draw
            let root = term.create_root_window();
            self.as_widget().draw(root, RenderingHints::new());
            term.present();

            // Handle events
            match dispatcher.next()? {
                Event::Update => self.context.update(),
                Event::Resize => {}
                Event::Input(input) => handle_input(&mut self.context, input),
            }
        }

        Ok(())
    }
}
