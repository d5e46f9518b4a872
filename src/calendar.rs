//! Month arithmetic and the month grid shown by the calendar view.
//!
//! Months handed in from the outside are zero-based (`0` is January). Inside
//! the crate a month is a [`chrono::Month`] paired with its year in a
//! [`MonthIndex`], which is a plain `Copy` value: navigating produces a new
//! index and never touches the one it started from.

use chrono::{Datelike, Local, Month, NaiveDate, Weekday};
use num_traits::FromPrimitive;
use std::cmp::Ordering;
use std::convert::TryFrom;
use std::fmt;
use std::ops::{Add, Sub};

use crate::error::{Error, ErrorKind, Result};

pub const DAYS_PER_WEEK: usize = 7;
pub const MONTHS_PER_YEAR: u32 = 12;

/// Column headers of the grid, starting on Sunday.
pub const WEEKDAY_LABELS: [&str; DAYS_PER_WEEK] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

const MONTHS: [Month; MONTHS_PER_YEAR as usize] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
    Month::July,
    Month::August,
    Month::September,
    Month::October,
    Month::November,
    Month::December,
];

pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

fn first_of(month: &Month, year: i32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month.number_from_month(), 1).ok_or_else(|| {
        Error::new(
            ErrorKind::DateOutOfRange,
            &format!("{} {}", month.name(), year),
        )
    })
}

/// Number of days in `month` of `year`, taken from the day before the first
/// of the following month.
pub fn days_of_month(month: &Month, year: i32) -> Result<u32> {
    let begin = first_of(month, year)?;
    let next = if *month == Month::December {
        first_of(&Month::January, year + 1)?
    } else {
        first_of(&month.succ(), year)?
    };

    next.pred_opt()
        .filter(|last| last.month() == begin.month())
        .map(|last| last.day())
        .ok_or_else(|| {
            Error::new(
                ErrorKind::DateOutOfRange,
                &format!("{} {}", month.name(), year),
            )
        })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthIndex {
    month: Month,
    year: i32,
}

impl MonthIndex {
    pub fn new(month: Month, year: i32) -> Self {
        MonthIndex { month, year }
    }

    /// Builds an index from a zero-based month. Anything outside `0..=11` is
    /// rejected rather than wrapped into a neighbouring year.
    pub fn from_zero_based(year: i32, month: u32) -> Result<Self> {
        MONTHS
            .get(month as usize)
            .map(|&month| MonthIndex { month, year })
            .ok_or_else(|| {
                Error::new(
                    ErrorKind::InvalidMonth,
                    &format!("expected 0..=11, got {}", month),
                )
            })
    }

    pub fn of<T: Datelike>(date: &T) -> Self {
        MonthIndex::new(
            Month::from_u32(date.month()).unwrap_or(Month::January),
            date.year(),
        )
    }

    pub fn current() -> Self {
        MonthIndex::of(&Local::now())
    }

    pub fn month(&self) -> Month {
        self.month
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month0(&self) -> u32 {
        self.month.number_from_month() - 1
    }

    pub fn next(&self) -> Self {
        *self + 1
    }

    pub fn prev(&self) -> Self {
        *self - 1
    }

    pub fn first_day(&self) -> Result<NaiveDate> {
        first_of(&self.month, self.year)
    }

    pub fn days_in_month(&self) -> Result<u32> {
        days_of_month(&self.month, self.year)
    }

    pub fn first_weekday(&self) -> Result<Weekday> {
        Ok(self.first_day()?.weekday())
    }

    pub fn contains<T: Datelike>(&self, date: &T) -> bool {
        date.year() == self.year && date.month() == self.month.number_from_month()
    }

    /// `n` months later, or `DateOutOfRange` if the year leaves `i32`.
    pub fn checked_add_months(&self, n: u32) -> Result<Self> {
        self.shifted(i64::from(n))
    }

    /// `n` months earlier, or `DateOutOfRange` if the year leaves `i32`.
    pub fn checked_sub_months(&self, n: u32) -> Result<Self> {
        self.shifted(-i64::from(n))
    }

    fn shifted(&self, months: i64) -> Result<Self> {
        let total = i64::from(self.year) * i64::from(MONTHS_PER_YEAR)
            + i64::from(self.month0())
            + months;
        let year = total.div_euclid(i64::from(MONTHS_PER_YEAR));
        let month0 = total.rem_euclid(i64::from(MONTHS_PER_YEAR));

        let year = i32::try_from(year).map_err(|_| {
            Error::new(
                ErrorKind::DateOutOfRange,
                &format!("{} moved by {} months", self, months),
            )
        })?;

        Ok(MonthIndex {
            month: MONTHS[month0 as usize],
            year,
        })
    }
}

impl Default for MonthIndex {
    fn default() -> Self {
        MonthIndex::current()
    }
}

/// Saturates at December of `i32::MAX`.
impl Add<u32> for MonthIndex {
    type Output = MonthIndex;
    fn add(self, rhs: u32) -> Self::Output {
        self.checked_add_months(rhs)
            .unwrap_or(MonthIndex::new(Month::December, i32::MAX))
    }
}

/// Saturates at January of `i32::MIN`.
impl Sub<u32> for MonthIndex {
    type Output = MonthIndex;
    fn sub(self, rhs: u32) -> Self::Output {
        self.checked_sub_months(rhs)
            .unwrap_or(MonthIndex::new(Month::January, i32::MIN))
    }
}

impl PartialOrd for MonthIndex {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for MonthIndex {
    fn cmp(&self, other: &Self) -> Ordering {
        self.year
            .cmp(&other.year)
            .then(self.month0().cmp(&other.month0()))
    }
}

impl fmt::Display for MonthIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.month.name(), self.year)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarCell {
    Blank,
    Day { day: u32, is_today: bool },
}

impl CalendarCell {
    pub fn day(&self) -> Option<u32> {
        match self {
            CalendarCell::Blank => None,
            CalendarCell::Day { day, .. } => Some(*day),
        }
    }

    pub fn is_today(&self) -> bool {
        matches!(self, CalendarCell::Day { is_today: true, .. })
    }
}

/// Leading blanks up to the weekday of the 1st, then one cell per day. The
/// last week is not padded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    month: MonthIndex,
    cells: Vec<CalendarCell>,
}

impl MonthGrid {
    pub fn build(month: MonthIndex, today: NaiveDate) -> Result<Self> {
        let num_days = month.days_in_month()?;
        let offset = month.first_weekday()?.num_days_from_sunday() as usize;
        let today_num = if month.contains(&today) {
            Some(today.day())
        } else {
            None
        };

        let cells = std::iter::repeat(CalendarCell::Blank)
            .take(offset)
            .chain((1..=num_days).map(|day| CalendarCell::Day {
                day,
                is_today: today_num == Some(day),
            }))
            .collect();

        Ok(MonthGrid { month, cells })
    }

    pub fn month(&self) -> MonthIndex {
        self.month
    }

    pub fn cells(&self) -> &[CalendarCell] {
        &self.cells
    }

    pub fn leading_blanks(&self) -> usize {
        self.cells
            .iter()
            .take_while(|cell| **cell == CalendarCell::Blank)
            .count()
    }

    pub fn days(&self) -> impl Iterator<Item = u32> + '_ {
        self.cells.iter().filter_map(CalendarCell::day)
    }

    pub fn today(&self) -> Option<u32> {
        self.cells
            .iter()
            .find(|cell| cell.is_today())
            .and_then(CalendarCell::day)
    }

    pub fn weeks(&self) -> std::slice::Chunks<'_, CalendarCell> {
        self.cells.chunks(DAYS_PER_WEEK)
    }
}

/// Month grid for a zero-based `month`, highlighting `today` if it falls into it.
pub fn build_month_grid(year: i32, month: u32, today: NaiveDate) -> Result<MonthGrid> {
    MonthGrid::build(MonthIndex::from_zero_based(year, month)?, today)
}

impl fmt::Display for CalendarCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalendarCell::Blank => write!(f, "    "),
            CalendarCell::Day { day, is_today } => {
                write!(f, " {}{:>2}", if *is_today { '*' } else { ' ' }, day)
            }
        }
    }
}

impl fmt::Display for MonthGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:^width$}", self.month.to_string(), width = 4 * DAYS_PER_WEEK)?;

        for label in WEEKDAY_LABELS.iter() {
            write!(f, "{:>4}", label)?;
        }
        writeln!(f)?;

        for week in self.weeks() {
            for cell in week {
                write!(f, "{}", cell)?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn leap_years() {
        assert!(is_leap_year(2024));
        assert!(is_leap_year(2000));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2023));
    }

    #[test]
    fn february_length_follows_leap_rule() {
        for year in 1800..2200 {
            let expected = if is_leap_year(year) { 29 } else { 28 };
            assert_eq!(days_of_month(&Month::February, year).unwrap(), expected);
        }
        assert_eq!(days_of_month(&Month::December, 2023).unwrap(), 31);
        assert_eq!(days_of_month(&Month::April, 2023).unwrap(), 30);
    }

    #[test]
    fn february_2024() {
        let grid = build_month_grid(2024, 1, date(2020, 1, 1)).unwrap();

        assert_eq!(grid.leading_blanks(), 4);
        assert_eq!(grid.cells().len(), 4 + 29);
        assert_eq!(&grid.cells()[..5], &[
            CalendarCell::Blank,
            CalendarCell::Blank,
            CalendarCell::Blank,
            CalendarCell::Blank,
            CalendarCell::Day { day: 1, is_today: false },
        ]);
        assert_eq!(grid.days().last(), Some(29));
    }

    #[test]
    fn february_2023_has_28_days() {
        let grid = build_month_grid(2023, 1, date(2020, 1, 1)).unwrap();
        assert_eq!(grid.days().count(), 28);
    }

    #[test]
    fn january_2024_starts_on_monday() {
        let grid = build_month_grid(2024, 0, date(2020, 1, 1)).unwrap();
        assert_eq!(grid.leading_blanks(), 1);
    }

    #[test]
    fn every_month_is_complete_and_ordered() {
        for year in 1999..2030 {
            for month in 0..12 {
                let grid = build_month_grid(year, month, date(2000, 1, 1)).unwrap();
                let index = grid.month();
                let first = index.first_day().unwrap();

                assert_eq!(
                    grid.leading_blanks(),
                    first.weekday().num_days_from_sunday() as usize
                );

                let days: Vec<u32> = grid.days().collect();
                let expected: Vec<u32> = (1..=index.days_in_month().unwrap()).collect();
                assert_eq!(days, expected);

                // blanks only ever lead
                assert!(grid.cells()[grid.leading_blanks()..]
                    .iter()
                    .all(|cell| cell.day().is_some()));
            }
        }
    }

    #[test]
    fn today_is_highlighted_once() {
        let today = date(2024, 2, 14);
        let grid = build_month_grid(2024, 1, today).unwrap();

        assert_eq!(grid.cells().iter().filter(|c| c.is_today()).count(), 1);
        assert_eq!(grid.today(), Some(14));
    }

    #[test]
    fn today_outside_month_is_not_highlighted() {
        // same day and month, different year
        let grid = build_month_grid(2023, 1, date(2024, 2, 14)).unwrap();
        assert_eq!(grid.today(), None);

        let grid = build_month_grid(2024, 2, date(2024, 2, 14)).unwrap();
        assert!(grid.cells().iter().all(|c| !c.is_today()));
    }

    #[test]
    fn month_out_of_range_is_rejected() {
        let err = build_month_grid(2024, 12, date(2024, 1, 1)).unwrap_err();
        assert!(matches!(err.kind, ErrorKind::InvalidMonth));
    }

    #[test]
    fn year_out_of_range_is_rejected() {
        let err = build_month_grid(i32::MAX, 0, date(2024, 1, 1)).unwrap_err();
        assert!(matches!(err.kind, ErrorKind::DateOutOfRange));
    }

    #[test]
    fn navigation_rolls_over_years() {
        let december = MonthIndex::new(Month::December, 2023);
        assert_eq!(december.next(), MonthIndex::new(Month::January, 2024));

        let january = MonthIndex::new(Month::January, 2024);
        assert_eq!(january.prev(), december);
        assert_eq!(january.next().prev(), january);
    }

    #[test]
    fn navigation_over_several_years() {
        let november = MonthIndex::new(Month::November, 2023);
        assert_eq!(november + 25, MonthIndex::new(Month::December, 2025));

        let january = MonthIndex::new(Month::January, 2024);
        assert_eq!(january - 13, MonthIndex::new(Month::December, 2022));
        assert_eq!(january - 12, MonthIndex::new(Month::January, 2023));
    }

    #[test]
    fn navigation_stops_at_the_last_representable_year() {
        let last = MonthIndex::new(Month::December, i32::MAX);
        let err = last.checked_add_months(1).unwrap_err();
        assert!(matches!(err.kind, ErrorKind::DateOutOfRange));
        assert_eq!(last.next(), last);

        let first = MonthIndex::new(Month::January, i32::MIN);
        assert!(first.checked_sub_months(1).is_err());
        assert_eq!(first.prev(), first);

        let mut month = MonthIndex::new(Month::October, 2026);
        for _ in 0..6 {
            let next = month + u32::MAX;
            assert!(next >= month);
            month = next;
        }
        assert_eq!(month, last);
    }

    #[test]
    fn navigation_returns_new_months() {
        let start = MonthIndex::new(Month::March, 2024);
        let _ = start.next();
        let _ = start - 5;
        assert_eq!(start, MonthIndex::new(Month::March, 2024));
    }

    #[test]
    fn ordering() {
        let a = MonthIndex::new(Month::December, 2023);
        let b = MonthIndex::new(Month::January, 2024);
        assert!(a < b);
        assert!(b.next() > b);
    }

    #[test]
    fn zero_based_roundtrip() {
        let index = MonthIndex::from_zero_based(2024, 1).unwrap();
        assert_eq!(index.month(), Month::February);
        assert_eq!(index.month0(), 1);
    }

    #[test]
    fn rendered_grid() {
        let grid = build_month_grid(2024, 1, date(2024, 2, 14)).unwrap();
        let text = grid.to_string();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0].trim(), "February 2024");
        assert_eq!(lines[1], " Sun Mon Tue Wed Thu Fri Sat");
        assert_eq!(lines[2], format!("{}1   2   3", " ".repeat(19)));
        assert!(lines[4].contains("*14"));
        // 4 blanks + 29 days fill five rows
        assert_eq!(lines.len(), 2 + 5);
    }
}
