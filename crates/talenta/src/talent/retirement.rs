use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;

/// Offset added to the day of month in the NIP of female employees.
const FEMALE_DAY_OFFSET: u32 = 40;

/// Statutory retirement band derived from a free-text role-tier label.
///
/// Resolution uses case-sensitive containment so that labels such as
/// "Fungsional Ahli Utama (Guru Besar)" keep matching their band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RetirementBand {
    PrincipalFunctional,
    SeniorLeadership,
    Standard,
}

impl RetirementBand {
    pub fn for_role_tier(role_tier: &str) -> Self {
        const SENIOR_LEADERSHIP: [&str; 4] = [
            "JPT Utama",
            "JPT Madya",
            "JPT Pratama",
            "Fungsional Ahli Madya",
        ];

        if role_tier.contains("Fungsional Ahli Utama") {
            Self::PrincipalFunctional
        } else if SENIOR_LEADERSHIP
            .iter()
            .any(|label| role_tier.contains(label))
        {
            Self::SeniorLeadership
        } else {
            Self::Standard
        }
    }

    pub const fn retirement_age(self) -> u32 {
        match self {
            Self::PrincipalFunctional => 65,
            Self::SeniorLeadership => 60,
            Self::Standard => 58,
        }
    }
}

pub fn retirement_age(role_tier: &str) -> u32 {
    RetirementBand::for_role_tier(role_tier).retirement_age()
}

/// Extracts the birth date encoded in the first eight characters of a NIP (`YYYYMMDD`).
///
/// Returns `None` for short or non-numeric identifiers and for dates that do not exist.
pub fn parse_birth_date(employee_number: &str) -> Option<NaiveDate> {
    let year = digits(employee_number, 0..4)?;
    let month = digits(employee_number, 4..6)?;
    let mut day = digits(employee_number, 6..8)?;

    if day > FEMALE_DAY_OFFSET {
        day -= FEMALE_DAY_OFFSET;
    }

    if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return None;
    }

    let year = i32::try_from(year).ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

fn digits(source: &str, range: std::ops::Range<usize>) -> Option<u32> {
    let segment = source.get(range)?;
    if !segment.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }
    segment.parse().ok()
}

/// Same calendar month and day, `years` later. A 29 February that does not exist in the
/// target year rolls forward to 1 March.
pub fn shift_years(date: NaiveDate, years: u32) -> Option<NaiveDate> {
    let year = date.year().checked_add(i32::try_from(years).ok()?)?;
    NaiveDate::from_ymd_opt(year, date.month(), date.day()).or_else(|| {
        let first = NaiveDate::from_ymd_opt(year, date.month(), 1)?;
        first.checked_add_signed(Duration::days(i64::from(date.day()) - 1))
    })
}

pub fn retirement_date(birth_date: NaiveDate, role_tier: &str) -> Option<NaiveDate> {
    shift_years(birth_date, retirement_age(role_tier))
}

/// True when retirement falls after `today` but no later than one year from `today`.
pub fn is_approaching_retirement(
    birth_date: Option<NaiveDate>,
    role_tier: &str,
    today: NaiveDate,
) -> bool {
    let Some(retirement) = birth_date.and_then(|birth| retirement_date(birth, role_tier)) else {
        return false;
    };
    let Some(horizon) = shift_years(today, 1) else {
        return false;
    };

    retirement > today && retirement <= horizon
}

pub fn is_past_retirement_age(
    birth_date: Option<NaiveDate>,
    role_tier: &str,
    today: NaiveDate,
) -> bool {
    birth_date
        .and_then(|birth| retirement_date(birth, role_tier))
        .map(|retirement| retirement <= today)
        .unwrap_or(false)
}

/// Retirement facts for one employee on one evaluation date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RetirementOutlook {
    pub birth_date: Option<NaiveDate>,
    pub band: RetirementBand,
    pub retirement_age: u32,
    pub retirement_date: Option<NaiveDate>,
    pub approaching: bool,
    pub past: bool,
}

impl RetirementOutlook {
    pub fn assess(birth_date: Option<NaiveDate>, role_tier: &str, today: NaiveDate) -> Self {
        let band = RetirementBand::for_role_tier(role_tier);
        Self {
            birth_date,
            band,
            retirement_age: band.retirement_age(),
            retirement_date: birth_date.and_then(|birth| retirement_date(birth, role_tier)),
            approaching: is_approaching_retirement(birth_date, role_tier, today),
            past: is_past_retirement_age(birth_date, role_tier, today),
        }
    }

    pub fn blocks_succession(&self) -> bool {
        self.approaching || self.past
    }
}
