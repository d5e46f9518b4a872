use unsegen::input::*;

use nom::{
    bytes::complete::take_while1,
    character::complete::{digit1, space1},
    combinator::{all_consuming, map_res, opt, rest},
    sequence::{pair, separated_pair},
    IResult,
};

use super::context::{Context, Mode};
use super::View;
use crate::error::{Error, ErrorKind};

pub struct CommandParser<'a> {
    context: &'a mut Context,
}

fn name(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_ascii_alphabetic())(input)
}

/// `[count]name`, e.g. `3nm` or `theme`.
fn counted(input: &str) -> IResult<&str, (Option<u32>, &str)> {
    all_consuming(pair(
        opt(map_res(digit1, |digits: &str| digits.parse::<u32>())),
        name,
    ))(input)
}

/// `name argument`, e.g. `view calendar`.
fn with_argument(input: &str) -> IResult<&str, (&str, &str)> {
    all_consuming(separated_pair(name, space1, rest))(input)
}

fn lookup(name: &str) -> Result<&'static Action, Error> {
    COMMANDS
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, act)| act)
        .ok_or_else(|| Error::new(ErrorKind::CommandParse, &format!("unknown command '{}'", name)))
}

impl<'a> CommandParser<'a> {
    pub fn new(context: &'a mut Context) -> Self {
        CommandParser { context }
    }

    pub fn run_command(&mut self, cmd: &str) -> ActionResult {
        let cmd = cmd.trim();

        if let Ok((_, (name, arg))) = with_argument(cmd) {
            return match lookup(name)? {
                Action::Arg(a) => a(self.context, arg.trim()),
                _ => Err(Error::new(
                    ErrorKind::CommandParse,
                    &format!("'{}' takes no argument", name),
                )),
            };
        }

        let (_, (count, name)) = counted(cmd)?;

        match (lookup(name)?, count) {
            (Action::Repeatable(_), Some(0)) => Err(Error::new(
                ErrorKind::CommandParse,
                &format!("'{}' needs a count of at least 1", name),
            )),
            (Action::Repeatable(a), count) => a(self.context, count.unwrap_or(1)),
            (Action::NoArg(a), None) => a(self.context),
            (Action::NoArg(_), Some(_)) => Err(Error::new(
                ErrorKind::CommandParse,
                &format!("'{}' cannot be repeated", name),
            )),
            (Action::Arg(_), _) => Err(Error::new(
                ErrorKind::CommandParse,
                &format!("'{}' needs an argument", name),
            )),
        }
    }
}

impl Behavior for CommandParser<'_> {
    fn input(mut self, input: Input) -> Option<Input> {
        if let Event::Key(key) = input.event {
            match key {
                Key::Char('\n') => {
                    let cmd = self
                        .context
                        .input_sink_mut(Mode::Command)
                        .finish_line()
                        .to_owned();
                    if let Err(e) = self.run_command(&cmd) {
                        self.context.report_error(e);
                    } else {
                        self.context.mode = Mode::Normal;
                    }
                    None
                }
                _ => Some(input),
            }
        } else {
            Some(input)
        }
    }
}

pub type ActionResult = Result<(), Error>;

pub enum Action {
    Arg(fn(&mut Context, &str) -> ActionResult),
    NoArg(fn(&mut Context) -> ActionResult),
    Repeatable(fn(&mut Context, u32) -> ActionResult),
}

const COMMANDS: &[(&str, Action)] = &[
    (
        "q",
        Action::NoArg(|c| {
            c.quit = true;
            Ok(())
        }),
    ),
    (
        "quit",
        Action::NoArg(|c| {
            c.quit = true;
            Ok(())
        }),
    ),
    (
        "view",
        Action::Arg(|c, arg| {
            c.select_view(arg.parse::<View>()?);
            Ok(())
        }),
    ),
    (
        "theme",
        Action::NoArg(|c| {
            c.toggle_theme();
            Ok(())
        }),
    ),
    (
        "sidebar",
        Action::NoArg(|c| {
            c.toggle_sidebar();
            Ok(())
        }),
    ),
    (
        "nm",
        Action::Repeatable(|c, n| {
            c.next_month(n);
            c.select_view(View::Calendar);
            Ok(())
        }),
    ),
    (
        "pm",
        Action::Repeatable(|c, n| {
            c.prev_month(n);
            c.select_view(View::Calendar);
            Ok(())
        }),
    ),
    (
        "today",
        Action::NoArg(|c| {
            c.goto_today();
            c.select_view(View::Calendar);
            Ok(())
        }),
    ),
    (
        "search",
        Action::Arg(|c, arg| {
            c.set_search_query(arg);
            c.select_view(View::Table);
            Ok(())
        }),
    ),
    (
        "save",
        Action::NoArg(|c| {
            c.save_settings();
            Ok(())
        }),
    ),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::MonthIndex;
    use crate::ui::context::tests::context_on;
    use crate::ui::ThemeMode;
    use chrono::Month;

    fn run(context: &mut Context, cmd: &str) -> ActionResult {
        CommandParser::new(context).run_command(cmd)
    }

    #[test]
    fn switches_views() {
        let mut context = context_on(2024, 2, 14);
        run(&mut context, "view kanban").unwrap();
        assert_eq!(context.view(), View::Kanban);
    }

    #[test]
    fn unknown_view_is_reported() {
        let mut context = context_on(2024, 2, 14);
        let err = run(&mut context, "view reports").unwrap_err();
        assert!(matches!(err.kind, ErrorKind::UnknownView));
        assert_eq!(context.view(), View::Dashboard);
    }

    #[test]
    fn repeated_month_navigation() {
        let mut context = context_on(2024, 2, 14);

        run(&mut context, "nm").unwrap();
        assert_eq!(context.calendar_month(), MonthIndex::new(Month::March, 2024));

        run(&mut context, "14pm").unwrap();
        assert_eq!(context.calendar_month(), MonthIndex::new(Month::January, 2023));
        assert_eq!(context.view(), View::Calendar);

        run(&mut context, "today").unwrap();
        assert_eq!(context.calendar_month(), MonthIndex::new(Month::February, 2024));
    }

    #[test]
    fn toggles_and_quit() {
        let mut context = context_on(2024, 2, 14);

        run(&mut context, "theme").unwrap();
        assert_eq!(context.theme_mode(), ThemeMode::Dark);

        run(&mut context, " sidebar ").unwrap();
        assert!(context.sidebar_collapsed());

        run(&mut context, "q").unwrap();
        assert!(context.quit);
    }

    #[test]
    fn search_takes_the_rest_of_the_line() {
        let mut context = context_on(2024, 2, 14);
        run(&mut context, "search priya patel").unwrap();

        assert_eq!(context.search_query(), "priya patel");
        assert_eq!(context.view(), View::Table);
        assert_eq!(context.filtered_users().len(), 1);
    }

    #[test]
    fn malformed_commands() {
        let mut context = context_on(2024, 2, 14);

        for cmd in &["", "bogus", "3theme", "view", "theme dark", "nm3", "-1nm", "0nm", "00pm"] {
            let err = run(&mut context, cmd).unwrap_err();
            assert!(
                matches!(err.kind, ErrorKind::CommandParse),
                "'{}' gave {}",
                cmd,
                err
            );
        }

        assert_eq!(context.view(), View::Dashboard);
        assert_eq!(context.theme_mode(), ThemeMode::Light);
        assert_eq!(context.calendar_month(), MonthIndex::new(Month::February, 2024));
    }
}
