use chrono::prelude::*;
use serde::Deserialize;
use std::fmt;

use crate::calendar::{MonthGrid, MonthIndex};
use crate::config::Config;
use crate::data::{Accent, User, USERS};
use crate::error::Result;
use crate::search::filter_records;
use crate::settings::SettingsForm;

use super::View;

use unsegen::base::style::*;
use unsegen::widget::builtin::PromptLine;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Normal,
    Search,
    Command,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggle(&self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }
}

impl Default for ThemeMode {
    fn default() -> Self {
        ThemeMode::Light
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        })
    }
}

#[derive(Clone, Debug)]
pub struct Theme {
    pub title_style: StyleModifier,
    pub text_style: StyleModifier,
    pub muted_style: StyleModifier,
    pub nav_style: StyleModifier,
    pub nav_active_style: StyleModifier,
    pub focus_style: StyleModifier,
    pub positive_style: StyleModifier,
    pub pending_style: StyleModifier,
    pub negative_style: StyleModifier,
    pub error_style: StyleModifier,
    pub month_header_style: StyleModifier,
    pub weekday_style: StyleModifier,
    pub today_day_style: StyleModifier,
    pub today_day_char: Option<char>,
    accents: [Color; 4],
}

impl Theme {
    pub fn light() -> Self {
        Theme {
            title_style: StyleModifier::new().bold(true),
            text_style: StyleModifier::new(),
            muted_style: StyleModifier::new().fg_color(Color::LightBlack),
            nav_style: StyleModifier::new(),
            nav_active_style: StyleModifier::new()
                .bg_color(Color::Blue)
                .fg_color(Color::White),
            focus_style: StyleModifier::new().invert(true),
            positive_style: StyleModifier::new().fg_color(Color::Green),
            pending_style: StyleModifier::new().fg_color(Color::Yellow),
            negative_style: StyleModifier::new().fg_color(Color::Red),
            error_style: StyleModifier::new().fg_color(Color::Red).bold(true),
            month_header_style: StyleModifier::new().fg_color(Color::Blue).bold(true),
            weekday_style: StyleModifier::new().fg_color(Color::LightBlack),
            today_day_style: StyleModifier::new()
                .bg_color(Color::Blue)
                .fg_color(Color::White),
            today_day_char: Some('*'),
            accents: [Color::Blue, Color::Green, Color::Yellow, Color::Magenta],
        }
    }

    pub fn dark() -> Self {
        Theme {
            title_style: StyleModifier::new().fg_color(Color::LightWhite).bold(true),
            text_style: StyleModifier::new().fg_color(Color::White),
            muted_style: StyleModifier::new().fg_color(Color::LightBlack),
            nav_style: StyleModifier::new().fg_color(Color::White),
            nav_active_style: StyleModifier::new()
                .bg_color(Color::LightBlue)
                .fg_color(Color::Black),
            focus_style: StyleModifier::new().invert(true),
            positive_style: StyleModifier::new().fg_color(Color::LightGreen),
            pending_style: StyleModifier::new().fg_color(Color::LightYellow),
            negative_style: StyleModifier::new().fg_color(Color::LightRed),
            error_style: StyleModifier::new().fg_color(Color::LightRed).bold(true),
            month_header_style: StyleModifier::new()
                .fg_color(Color::LightBlue)
                .bold(true),
            weekday_style: StyleModifier::new().fg_color(Color::LightBlack),
            today_day_style: StyleModifier::new()
                .bg_color(Color::LightBlue)
                .fg_color(Color::Black),
            today_day_char: Some('*'),
            accents: [
                Color::LightBlue,
                Color::LightGreen,
                Color::LightYellow,
                Color::LightMagenta,
            ],
        }
    }

    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Theme::light(),
            ThemeMode::Dark => Theme::dark(),
        }
    }

    pub fn accent(&self, accent: Accent) -> StyleModifier {
        let color = match accent {
            Accent::Blue => self.accents[0],
            Accent::Green => self.accents[1],
            Accent::Amber => self.accents[2],
            Accent::Violet => self.accents[3],
        };
        StyleModifier::new().fg_color(color)
    }

    pub fn change_style(&self, positive: bool) -> StyleModifier {
        if positive {
            self.positive_style
        } else {
            self.negative_style
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::light()
    }
}

/// Everything the dashboard shows that is not static sample data. Widgets
/// borrow it immutably while drawing; only the event loop mutates it.
pub struct Context {
    pub mode: Mode,
    view: View,
    sidebar_collapsed: bool,
    theme_mode: ThemeMode,
    theme: Theme,
    calendar_month: MonthIndex,
    now: DateTime<Local>,
    search_line: PromptLine,
    command_line: PromptLine,
    pub settings: SettingsForm,
    pub last_error_message: Option<String>,
    pub status_message: Option<String>,
    pub quit: bool,
}

impl Context {
    pub fn new(config: &Config) -> Self {
        Context::at(config, Local::now())
    }

    pub fn at(config: &Config, now: DateTime<Local>) -> Self {
        Context {
            mode: Mode::Normal,
            view: config.start_view,
            sidebar_collapsed: config.sidebar_collapsed,
            theme_mode: config.theme,
            theme: Theme::for_mode(config.theme),
            calendar_month: MonthIndex::of(&now),
            now,
            search_line: PromptLine::with_prompt("/".to_owned()),
            command_line: PromptLine::with_prompt(":".to_owned()),
            settings: SettingsForm::new(config.settings),
            last_error_message: None,
            status_message: None,
            quit: false,
        }
    }

    pub fn now(&self) -> &DateTime<Local> {
        &self.now
    }

    pub fn today(&self) -> NaiveDate {
        self.now.date_naive()
    }

    pub fn update(&mut self) {
        self.now = Local::now();
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn select_view(&mut self, view: View) {
        if self.view != view {
            log::debug!("Switching view {} -> {}", self.view.id(), view.id());
        }
        self.view = view;
    }

    pub fn sidebar_collapsed(&self) -> bool {
        self.sidebar_collapsed
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_collapsed = !self.sidebar_collapsed;
    }

    pub fn theme_mode(&self) -> ThemeMode {
        self.theme_mode
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn toggle_theme(&mut self) {
        self.theme_mode = self.theme_mode.toggle();
        self.theme = Theme::for_mode(self.theme_mode);
        log::debug!("Theme set to {}", self.theme_mode);
    }

    pub fn calendar_month(&self) -> MonthIndex {
        self.calendar_month
    }

    pub fn next_month(&mut self, n: u32) {
        let moved = self.calendar_month.checked_add_months(n);
        self.move_calendar(moved);
    }

    pub fn prev_month(&mut self, n: u32) {
        let moved = self.calendar_month.checked_sub_months(n);
        self.move_calendar(moved);
    }

    fn move_calendar(&mut self, moved: Result<MonthIndex>) {
        match moved {
            Ok(month) => self.calendar_month = month,
            Err(err) => self.report_error(err),
        }
    }

    pub fn goto_today(&mut self) {
        self.calendar_month = MonthIndex::of(&self.now);
    }

    pub fn month_grid(&self) -> Result<MonthGrid> {
        MonthGrid::build(self.calendar_month, self.today())
    }

    pub fn search_query(&self) -> &str {
        self.search_line.active_line()
    }

    pub fn set_search_query(&mut self, query: &str) {
        self.search_line.set(query);
    }

    pub fn filtered_users(&self) -> Vec<&'static User> {
        filter_records(USERS, self.search_query())
    }

    pub fn input_sink(&self, mode: Mode) -> &PromptLine {
        match mode {
            Mode::Search => &self.search_line,
            _ => &self.command_line,
        }
    }

    pub fn input_sink_mut(&mut self, mode: Mode) -> &mut PromptLine {
        match mode {
            Mode::Search => &mut self.search_line,
            _ => &mut self.command_line,
        }
    }

    pub fn report_error<E: fmt::Display>(&mut self, error: E) {
        log::warn!("{}", error);
        self.status_message = None;
        self.last_error_message = Some(error.to_string());
    }

    pub fn report_status<S: Into<String>>(&mut self, message: S) {
        self.last_error_message = None;
        self.status_message = Some(message.into());
    }

    pub fn clear_messages(&mut self) {
        self.last_error_message = None;
        self.status_message = None;
    }

    pub fn save_settings(&mut self) {
        if self.settings.save() {
            self.report_status("Settings saved");
        } else {
            self.report_status("Settings unchanged");
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use chrono::Month;

    pub(crate) fn context_on(y: i32, m: u32, d: u32) -> Context {
        let now = Local.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap();
        Context::at(&Config::default(), now)
    }

    #[test]
    fn starts_from_config() {
        let context = context_on(2024, 2, 14);
        assert_eq!(context.view(), View::Dashboard);
        assert_eq!(context.theme_mode(), ThemeMode::Light);
        assert!(!context.sidebar_collapsed());
        assert_eq!(context.calendar_month(), MonthIndex::new(Month::February, 2024));
        assert_eq!(context.search_query(), "");
    }

    #[test]
    fn toggles_flip_between_two_values() {
        let mut context = context_on(2024, 2, 14);

        context.toggle_theme();
        assert_eq!(context.theme_mode(), ThemeMode::Dark);
        context.toggle_theme();
        assert_eq!(context.theme_mode(), ThemeMode::Light);

        context.toggle_sidebar();
        assert!(context.sidebar_collapsed());
        context.toggle_sidebar();
        assert!(!context.sidebar_collapsed());
    }

    #[test]
    fn any_view_reachable_from_any_view() {
        let mut context = context_on(2024, 2, 14);
        for from in View::ALL.iter() {
            for to in View::ALL.iter() {
                context.select_view(*from);
                context.select_view(*to);
                assert_eq!(context.view(), *to);
            }
        }
    }

    #[test]
    fn calendar_navigation_and_today() {
        let mut context = context_on(2024, 1, 20);

        context.prev_month(1);
        assert_eq!(context.calendar_month(), MonthIndex::new(Month::December, 2023));
        assert_eq!(context.month_grid().unwrap().today(), None);

        context.next_month(2);
        assert_eq!(context.calendar_month(), MonthIndex::new(Month::February, 2024));

        context.goto_today();
        let grid = context.month_grid().unwrap();
        assert_eq!(grid.today(), Some(20));
        // the clock reading is untouched by navigation
        assert_eq!(context.today(), NaiveDate::from_ymd_opt(2024, 1, 20).unwrap());
    }

    #[test]
    fn calendar_refuses_to_leave_the_year_range() {
        let mut context = context_on(2024, 1, 20);
        context.next_month(u32::MAX);
        let far = context.calendar_month();

        for _ in 0..6 {
            context.next_month(u32::MAX);
            assert!(context.calendar_month() >= far);
        }

        assert!(context.last_error_message.is_some());
        assert!(context.calendar_month().year() > 0);
    }

    #[test]
    fn search_filters_users() {
        let mut context = context_on(2024, 2, 14);
        assert_eq!(context.filtered_users().len(), USERS.len());

        context.set_search_query("PRIYA");
        let names: Vec<&str> = context.filtered_users().iter().map(|u| u.name).collect();
        assert_eq!(names, vec!["Priya Patel"]);
    }

    #[test]
    fn messages_replace_each_other() {
        let mut context = context_on(2024, 2, 14);

        context.report_error("boom");
        assert_eq!(context.last_error_message.as_deref(), Some("boom"));

        context.save_settings();
        assert!(context.last_error_message.is_none());
        assert_eq!(context.status_message.as_deref(), Some("Settings unchanged"));
    }
}
