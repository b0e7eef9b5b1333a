//! Age calculator.
//!
//! Calendar-aware difference between a birth date and a target date, with
//! derived totals, next-birthday countdown and zodiac lookup.

use chrono::{Datelike, Months, NaiveDate};
use serde::Serialize;

use super::error::{ValidationError, WidgetResult};

/// Orbital periods in Earth days.
const PLANETS: [(&str, f64); 7] = [
    ("Mercury", 88.0),
    ("Venus", 225.0),
    ("Mars", 687.0),
    ("Jupiter", 4333.0),
    ("Saturn", 10759.0),
    ("Uranus", 30687.0),
    ("Neptune", 60190.0),
];

/// Western zodiac signs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ZodiacSign {
    Capricorn,
    Aquarius,
    Pisces,
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
}

impl ZodiacSign {
    /// Sign for a calendar day. `month` is 1-based.
    pub fn from_month_day(month: u32, day: u32) -> Self {
        // (sign, first day) for the sign starting in each month, January first.
        const STARTS: [(ZodiacSign, u32); 12] = [
            (ZodiacSign::Aquarius, 20),
            (ZodiacSign::Pisces, 19),
            (ZodiacSign::Aries, 21),
            (ZodiacSign::Taurus, 20),
            (ZodiacSign::Gemini, 21),
            (ZodiacSign::Cancer, 21),
            (ZodiacSign::Leo, 23),
            (ZodiacSign::Virgo, 23),
            (ZodiacSign::Libra, 23),
            (ZodiacSign::Scorpio, 23),
            (ZodiacSign::Sagittarius, 22),
            (ZodiacSign::Capricorn, 22),
        ];

        let index = (month.clamp(1, 12) - 1) as usize;
        let (sign, start) = STARTS[index];
        if day >= start {
            sign
        } else {
            // Still the sign that started the previous month.
            STARTS[(index + 11) % 12].0
        }
    }
}

/// Age expressed on another planet.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanetAge {
    pub planet: String,
    /// Orbits completed, rounded to two decimals.
    pub years: f64,
}

/// Full result of an age calculation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgeReport {
    pub years: i32,
    pub months: i32,
    pub days: i32,
    pub total_days: i64,
    pub total_weeks: i64,
    pub total_months: i64,
    pub total_hours: i64,
    pub total_minutes: i64,
    pub total_seconds: i64,
    pub next_birthday: NaiveDate,
    pub days_until_birthday: i64,
    pub birth_weekday: String,
    pub zodiac_sign: ZodiacSign,
    pub planet_ages: Vec<PlanetAge>,
}

/// Compute the age at `target` of someone born on `birth`.
pub fn calculate_age(birth: NaiveDate, target: NaiveDate) -> WidgetResult<AgeReport> {
    if birth > target {
        return Err(ValidationError::new(
            "Birth date cannot be after target date!",
        ));
    }

    // Whole months elapsed: the last monthly anniversary on or before the
    // target. Anniversaries past a month's end clamp to its last day.
    let month_delta = target.month() as i32 - birth.month() as i32;
    let mut elapsed = (target.year() - birth.year()) * 12 + month_delta;
    let mut anchor = monthly_anniversary(birth, elapsed)?;
    if anchor > target {
        elapsed -= 1;
        anchor = monthly_anniversary(birth, elapsed)?;
    }

    let years = elapsed / 12;
    let months = elapsed % 12;
    let days = target.signed_duration_since(anchor).num_days() as i32;

    let total_days = target.signed_duration_since(birth).num_days();
    let total_hours = total_days * 24;
    let total_minutes = total_hours * 60;

    let mut next_birthday = birthday_in_year(birth, target.year());
    if next_birthday < target {
        next_birthday = birthday_in_year(birth, target.year() + 1);
    }
    let days_until_birthday = next_birthday.signed_duration_since(target).num_days();

    let planet_ages = PLANETS
        .iter()
        .map(|(planet, period)| PlanetAge {
            planet: planet.to_string(),
            years: round2(total_days as f64 / period),
        })
        .collect();

    Ok(AgeReport {
        years,
        months,
        days,
        total_days,
        total_weeks: total_days / 7,
        total_months: i64::from(years) * 12 + i64::from(months),
        total_hours,
        total_minutes,
        total_seconds: total_minutes * 60,
        next_birthday,
        days_until_birthday,
        birth_weekday: birth.format("%A").to_string(),
        zodiac_sign: ZodiacSign::from_month_day(birth.month(), birth.day()),
        planet_ages,
    })
}

/// Parse a `YYYY-MM-DD` date entered by the user.
pub fn parse_date(field: &str, value: &str) -> WidgetResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|e| {
        ValidationError::new(format!("Invalid {} '{}': {}", field, value, e))
    })
}

/// `birth` moved forward by `months` whole months.
fn monthly_anniversary(birth: NaiveDate, months: i32) -> WidgetResult<NaiveDate> {
    u32::try_from(months)
        .ok()
        .and_then(|m| birth.checked_add_months(Months::new(m)))
        .ok_or_else(|| ValidationError::new("Date is out of range"))
}

/// The birthday anniversary in `year`; Feb 29 rolls over to Mar 1 when the
/// year has no leap day.
fn birthday_in_year(birth: NaiveDate, year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, birth.month(), birth.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
        .unwrap_or(birth)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_exact_years() {
        let report = calculate_age(date(2000, 1, 1), date(2020, 1, 1)).unwrap();
        assert_eq!((report.years, report.months, report.days), (20, 0, 0));
        assert_eq!(report.total_months, 240);
        assert_eq!(report.days_until_birthday, 0);
    }

    #[test]
    fn test_day_borrow_from_previous_month() {
        let report = calculate_age(date(2000, 1, 31), date(2020, 2, 1)).unwrap();
        assert!(report.days >= 0);
        assert_eq!((report.years, report.months, report.days), (20, 0, 1));
    }

    #[test]
    fn test_month_end_birth_two_months_later() {
        let report = calculate_age(date(2023, 1, 31), date(2023, 3, 1)).unwrap();
        assert_eq!((report.years, report.months, report.days), (0, 1, 1));

        let report = calculate_age(date(2024, 1, 31), date(2024, 3, 1)).unwrap();
        assert_eq!((report.years, report.months, report.days), (0, 1, 1));
    }

    #[test]
    fn test_month_end_birth_days_never_negative() {
        let birth = date(2019, 1, 31);
        let mut target = birth;
        while target < date(2021, 1, 31) {
            let report = calculate_age(birth, target).unwrap();
            assert!(report.days >= 0, "{} -> {:?}", target, report.days);
            assert!((0..12).contains(&report.months));
            target = target.succ_opt().unwrap();
        }
    }

    #[test]
    fn test_month_borrow() {
        let report = calculate_age(date(1990, 8, 15), date(2024, 3, 10)).unwrap();
        // Feb 2024 has 29 days: 10 - 15 + 29 = 24.
        assert_eq!((report.years, report.months, report.days), (33, 6, 24));
    }

    #[test]
    fn test_totals() {
        let report = calculate_age(date(2024, 1, 1), date(2024, 1, 15)).unwrap();
        assert_eq!(report.total_days, 14);
        assert_eq!(report.total_weeks, 2);
        assert_eq!(report.total_hours, 336);
        assert_eq!(report.total_minutes, 20_160);
        assert_eq!(report.total_seconds, 1_209_600);
    }

    #[test]
    fn test_birth_after_target_is_validation_error() {
        let err = calculate_age(date(2021, 1, 1), date(2020, 1, 1)).unwrap_err();
        assert_eq!(err.message(), "Birth date cannot be after target date!");
    }

    #[test]
    fn test_next_birthday_rolls_to_next_year() {
        let report = calculate_age(date(1995, 3, 1), date(2023, 6, 1)).unwrap();
        assert_eq!(report.next_birthday, date(2024, 3, 1));
        assert_eq!(report.days_until_birthday, 274);
    }

    #[test]
    fn test_leap_day_birthday_in_common_year() {
        let report = calculate_age(date(2000, 2, 29), date(2023, 1, 10)).unwrap();
        assert_eq!(report.next_birthday, date(2023, 3, 1));
    }

    #[test]
    fn test_zodiac_boundaries() {
        assert_eq!(ZodiacSign::from_month_day(1, 19), ZodiacSign::Capricorn);
        assert_eq!(ZodiacSign::from_month_day(1, 20), ZodiacSign::Aquarius);
        assert_eq!(ZodiacSign::from_month_day(3, 20), ZodiacSign::Pisces);
        assert_eq!(ZodiacSign::from_month_day(3, 21), ZodiacSign::Aries);
        assert_eq!(ZodiacSign::from_month_day(12, 21), ZodiacSign::Sagittarius);
        assert_eq!(ZodiacSign::from_month_day(12, 22), ZodiacSign::Capricorn);
    }

    #[test]
    fn test_weekday_and_planets() {
        let report = calculate_age(date(2000, 1, 1), date(2000, 3, 29)).unwrap();
        assert_eq!(report.birth_weekday, "Saturday");
        assert_eq!(report.total_days, 88);
        assert_eq!(report.planet_ages[0].planet, "Mercury");
        assert_eq!(report.planet_ages[0].years, 1.0);
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("birth date", "2000-01-31").unwrap(), date(2000, 1, 31));
        assert!(parse_date("birth date", "31/01/2000").is_err());
    }
}
