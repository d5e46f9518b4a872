use unsegen::base::*;
use unsegen::widget::*;

use crate::data::{Accent, DEVICE_USAGE, REVENUE_TREND};

use super::util::{fit, write_styled, writeln_styled};
use super::{Context, Theme};

const BAR: char = '█';
const LABEL_WIDTH: usize = 8;
const VALUE_WIDTH: usize = 7;

/// Length of a bar for `value` when `max` spans `width` columns. Non-zero
/// values always get at least one column.
pub fn bar_len(value: u32, max: u32, width: usize) -> usize {
    if max == 0 || value == 0 {
        return 0;
    }
    let len = (u64::from(value) * width as u64 / u64::from(max)) as usize;
    len.max(1).min(width)
}

/// Percentage of the total held by each value, in input order.
pub fn shares(values: &[u32]) -> Vec<f64> {
    let total: u64 = values.iter().map(|v| u64::from(*v)).sum();
    values
        .iter()
        .map(|v| {
            if total == 0 {
                0.0
            } else {
                f64::from(*v) * 100.0 / total as f64
            }
        })
        .collect()
}

fn bar_width(window_width: usize) -> usize {
    window_width.saturating_sub(LABEL_WIDTH + VALUE_WIDTH + 1)
}

struct RevenueChart<'a> {
    theme: &'a Theme,
}

impl Widget for RevenueChart<'_> {
    fn space_demand(&self) -> Demand2D {
        Demand2D {
            width: ColDemand::at_least(LABEL_WIDTH + VALUE_WIDTH + 10),
            height: RowDemand::at_least(REVENUE_TREND.len() + 2),
        }
    }

    fn draw(&self, mut window: Window, _hints: RenderingHints) {
        let width = bar_width(window.get_width().raw_value() as usize);
        let max = REVENUE_TREND.iter().map(|p| p.revenue).max().unwrap_or(0);

        let mut cursor = Cursor::new(&mut window).style_modifier(self.theme.text_style);
        writeln_styled(&mut cursor, self.theme.title_style, "Revenue Trend");
        cursor.write("\n");

        for point in REVENUE_TREND.iter() {
            let bar: String = std::iter::repeat(BAR)
                .take(bar_len(point.revenue, max, width))
                .collect();

            write_styled(&mut cursor, self.theme.muted_style, &fit(point.name, LABEL_WIDTH));
            write_styled(&mut cursor, self.theme.accent(Accent::Blue), &bar);
            cursor.write(&format!(" {:>width$}\n", point.revenue, width = VALUE_WIDTH - 1));
        }
    }
}

struct DeviceChart<'a> {
    theme: &'a Theme,
}

impl Widget for DeviceChart<'_> {
    fn space_demand(&self) -> Demand2D {
        Demand2D {
            width: ColDemand::at_least(LABEL_WIDTH + VALUE_WIDTH + 10),
            height: RowDemand::at_least(DEVICE_USAGE.len() + 2),
        }
    }

    fn draw(&self, mut window: Window, _hints: RenderingHints) {
        let width = bar_width(window.get_width().raw_value() as usize);
        let values: Vec<u32> = DEVICE_USAGE.iter().map(|d| d.value).collect();
        let percentages = shares(&values);

        let mut cursor = Cursor::new(&mut window).style_modifier(self.theme.text_style);
        writeln_styled(&mut cursor, self.theme.title_style, "Device Usage");
        cursor.write("\n");

        for (device, share) in DEVICE_USAGE.iter().zip(percentages) {
            let bar: String = std::iter::repeat(BAR)
                .take(bar_len(share.round() as u32, 100, width))
                .collect();

            write_styled(&mut cursor, self.theme.muted_style, &fit(device.name, LABEL_WIDTH));
            write_styled(&mut cursor, self.theme.accent(device.accent), &bar);
            cursor.write(&format!(" {:>width$.1}%\n", share, width = VALUE_WIDTH - 2));
        }
    }
}

pub struct ChartsPane<'a> {
    context: &'a Context,
}

impl<'a> ChartsPane<'a> {
    pub fn new(context: &'a Context) -> Self {
        ChartsPane { context }
    }
}

impl Widget for ChartsPane<'_> {
    fn space_demand(&self) -> Demand2D {
        Demand2D {
            width: ColDemand::at_least(2 * (LABEL_WIDTH + VALUE_WIDTH + 10)),
            height: RowDemand::at_least(REVENUE_TREND.len() + 2),
        }
    }

    fn draw(&self, window: Window, hints: RenderingHints) {
        let theme = self.context.theme();

        HLayout::new()
            .separator(GraphemeCluster::space())
            .widget(RevenueChart { theme })
            .widget(DeviceChart { theme })
            .draw(window, hints);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bars_scale_to_widest_value() {
        assert_eq!(bar_len(4800, 4800, 40), 40);
        assert_eq!(bar_len(2400, 4800, 40), 20);
        assert_eq!(bar_len(1, 4800, 40), 1);
        assert_eq!(bar_len(0, 4800, 40), 0);
        assert_eq!(bar_len(10, 0, 40), 0);
    }

    #[test]
    fn device_shares() {
        let values: Vec<u32> = DEVICE_USAGE.iter().map(|d| d.value).collect();
        let shares = shares(&values);

        assert_eq!(shares.len(), 3);
        assert!((shares.iter().sum::<f64>() - 100.0).abs() < 1e-9);
        assert!((shares[0] - 400.0 / 9.0).abs() < 1e-9);
    }

    #[test]
    fn shares_of_nothing() {
        assert_eq!(shares(&[0, 0]), vec![0.0, 0.0]);
    }
}
