use serde::{Deserialize, Serialize};

/// Calendar month driving the dashboard filter.
///
/// The data-source boundary identifies months by the two-digit codes
/// "01".."12"; the dropdown shows the English month names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    /// All twelve months in calendar order.
    pub const ALL: [Month; 12] = [
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

    /// Two-digit wire code, "01".."12".
    pub fn code(self) -> &'static str {
        match self {
            Month::January => "01",
            Month::February => "02",
            Month::March => "03",
            Month::April => "04",
            Month::May => "05",
            Month::June => "06",
            Month::July => "07",
            Month::August => "08",
            Month::September => "09",
            Month::October => "10",
            Month::November => "11",
            Month::December => "12",
        }
    }

    /// Parse a two-digit code back into a month.
    pub fn from_code(code: &str) -> Option<Month> {
        Month::ALL.iter().copied().find(|m| m.code() == code)
    }

    /// English display name.
    pub fn name(self) -> &'static str {
        match self {
            Month::January => "January",
            Month::February => "February",
            Month::March => "March",
            Month::April => "April",
            Month::May => "May",
            Month::June => "June",
            Month::July => "July",
            Month::August => "August",
            Month::September => "September",
            Month::October => "October",
            Month::November => "November",
            Month::December => "December",
        }
    }

    /// Calendar number, 1..=12.
    pub fn number(self) -> u32 {
        self as u32 + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip() {
        for month in Month::ALL {
            assert_eq!(Month::from_code(month.code()), Some(month));
        }
    }

    #[test]
    fn rejects_unknown_codes() {
        assert_eq!(Month::from_code(""), None);
        assert_eq!(Month::from_code("3"), None);
        assert_eq!(Month::from_code("13"), None);
        assert_eq!(Month::from_code("march"), None);
    }

    #[test]
    fn numbers_and_names_line_up() {
        assert_eq!(Month::January.number(), 1);
        assert_eq!(Month::December.number(), 12);
        assert_eq!(Month::March.code(), "03");
        assert_eq!(Month::March.name(), "March");
    }
}
