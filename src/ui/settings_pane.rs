use unsegen::base::*;
use unsegen::widget::*;

use crate::settings::{Settings, SettingsField};

use super::util::{write_styled, writeln_styled};
use super::Context;

fn field_text(field: SettingsField, draft: &Settings) -> String {
    match field {
        SettingsField::Language => format!("Language   < {} >", draft.language.label()),
        SettingsField::Timezone => format!("Timezone   < {} >", draft.timezone.label()),
        SettingsField::Notifications => format!(
            "[{}] Enable Notifications",
            if draft.notifications { 'x' } else { ' ' }
        ),
        SettingsField::Save => "[ Save Settings ]".to_owned(),
    }
}

pub struct SettingsPane<'a> {
    context: &'a Context,
}

impl<'a> SettingsPane<'a> {
    pub fn new(context: &'a Context) -> Self {
        SettingsPane { context }
    }

    fn write_field(&self, cursor: &mut Cursor, field: SettingsField) {
        let theme = self.context.theme();
        let form = &self.context.settings;

        let style = if form.focus() == field {
            theme.focus_style
        } else {
            theme.text_style
        };

        cursor.write("  ");
        writeln_styled(cursor, style, &field_text(field, form.draft()));
    }
}

impl Widget for SettingsPane<'_> {
    fn space_demand(&self) -> Demand2D {
        Demand2D {
            width: ColDemand::at_least(30),
            height: RowDemand::at_least(12),
        }
    }

    fn draw(&self, mut window: Window, _hints: RenderingHints) {
        let theme = self.context.theme();
        let form = &self.context.settings;

        let mut cursor = Cursor::new(&mut window).style_modifier(theme.text_style);

        writeln_styled(&mut cursor, theme.title_style, "General Settings");
        self.write_field(&mut cursor, SettingsField::Language);
        self.write_field(&mut cursor, SettingsField::Timezone);
        cursor.write("\n");

        writeln_styled(&mut cursor, theme.title_style, "Preferences");
        self.write_field(&mut cursor, SettingsField::Notifications);
        cursor.write("\n");

        self.write_field(&mut cursor, SettingsField::Save);
        if form.is_dirty() {
            writeln_styled(&mut cursor, theme.pending_style, "  unsaved changes");
        } else {
            cursor.write("\n");
        }
        cursor.write("\n");

        write_styled(
            &mut cursor,
            theme.muted_style,
            "[j/k] move  [space] change  [s] save",
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::{Language, Timezone};

    #[test]
    fn field_texts() {
        let draft = Settings::new(Language::French, Timezone::Pst, false);

        assert_eq!(field_text(SettingsField::Language, &draft), "Language   < French >");
        assert_eq!(field_text(SettingsField::Timezone, &draft), "Timezone   < PST >");
        assert_eq!(
            field_text(SettingsField::Notifications, &draft),
            "[ ] Enable Notifications"
        );
    }
}
