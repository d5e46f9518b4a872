use unsegen::base::*;
use unsegen::widget::*;

use crate::data::{Status, User, USERS};

use super::util::{fit, write_styled, writeln_styled};
use super::{Context, Mode, Theme};

const PLACEHOLDER: &str = "Search users...";
const HEADERS: [&str; 4] = ["Name", "Email", "Role", "Status"];
const COLUMN_WIDTHS: [usize; 4] = [16, 28, 10, 10];

fn status_style(theme: &Theme, status: Status) -> StyleModifier {
    match status {
        Status::Active => theme.positive_style,
        Status::Pending => theme.pending_style,
        Status::Inactive => theme.negative_style,
    }
}

fn footer(shown: usize, query: &str) -> String {
    if shown == 0 {
        format!("No users match \"{}\"", query)
    } else {
        format!("{} of {} users", shown, USERS.len())
    }
}

pub struct UsersTable<'a> {
    context: &'a Context,
}

impl<'a> UsersTable<'a> {
    pub fn new(context: &'a Context) -> Self {
        UsersTable { context }
    }

    fn write_row(&self, cursor: &mut Cursor, user: &User) {
        let theme = self.context.theme();

        cursor.write(&fit(user.name, COLUMN_WIDTHS[0]));
        cursor.write(&fit(user.email, COLUMN_WIDTHS[1]));
        cursor.write(&fit(&user.role.to_string(), COLUMN_WIDTHS[2]));
        writeln_styled(
            cursor,
            status_style(theme, user.status),
            &fit(user.status.as_str(), COLUMN_WIDTHS[3]),
        );
    }
}

impl Widget for UsersTable<'_> {
    fn space_demand(&self) -> Demand2D {
        Demand2D {
            width: ColDemand::at_least(COLUMN_WIDTHS.iter().sum::<usize>()),
            height: RowDemand::at_least(USERS.len() + 5),
        }
    }

    fn draw(&self, mut window: Window, _hints: RenderingHints) {
        let theme = self.context.theme();
        let query = self.context.search_query();
        let users = self.context.filtered_users();

        let mut cursor = Cursor::new(&mut window).style_modifier(theme.text_style);

        writeln_styled(&mut cursor, theme.title_style, "Users");

        cursor.write("Search: ");
        if query.is_empty() && self.context.mode != Mode::Search {
            writeln_styled(&mut cursor, theme.muted_style, PLACEHOLDER);
        } else {
            writeln_styled(&mut cursor, theme.text_style, query);
        }
        cursor.write("\n");

        let header: String = HEADERS
            .iter()
            .zip(COLUMN_WIDTHS.iter())
            .map(|(title, width)| fit(title, *width))
            .collect();
        writeln_styled(&mut cursor, theme.muted_style, &header);

        for user in users.iter() {
            self.write_row(&mut cursor, user);
        }

        cursor.write("\n");
        write_styled(&mut cursor, theme.muted_style, &footer(users.len(), query));
    }
}
