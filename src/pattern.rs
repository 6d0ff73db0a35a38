//! The date/time format mini-language.
//!
//! A format string such as `"Y-m-d\TH:i:sP"` is compiled into a list of
//! [`Token`]s. The same token list drives both directions: [`Pattern::extract`]
//! pulls raw [`Fields`] out of an input string, and [`Pattern::render`] writes
//! a resolved moment back out. Whether the extracted fields make a real
//! calendar moment is decided elsewhere (see [`crate::calendar`]).
//!
//! Letters carry meaning, `\` escapes the next character, and every other
//! character stands for itself. Letters without a meaning are rejected at
//! compile time rather than silently treated as literals.

use chrono::{DateTime, Datelike, FixedOffset, Timelike, Weekday};
use tracing::debug;

use crate::error::{Result, SemvalError};

/// `Y-m-d\TH:i:sP`, e.g. `2025-09-17T23:45:00+00:00`.
pub const ATOM: &str = "Y-m-d\\TH:i:sP";
pub const RFC3339: &str = ATOM;
pub const RFC3339_EXTENDED: &str = "Y-m-d\\TH:i:s.vP";
pub const ISO8601: &str = "Y-m-d\\TH:i:sO";
pub const RFC2822: &str = "D, d M Y H:i:s O";
pub const RSS: &str = RFC2822;
pub const W3C: &str = ATOM;

const MONTHS: [&str; 12] = [
    "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December",
];
const WEEKDAYS: [&str; 7] = ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday"];
const WEEKDAY_VALUES: [Weekday; 7] = [
    Weekday::Mon, Weekday::Tue, Weekday::Wed, Weekday::Thu, Weekday::Fri, Weekday::Sat, Weekday::Sun,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OffsetStyle {
    /// `+HH:MM`
    Colon,
    /// `+HHMM`
    Plain,
    /// `Z` for zero, `+HH:MM` otherwise
    Zulu,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    Literal(char),
    Day { padded: bool },
    WeekdayName { long: bool },
    Month { padded: bool },
    MonthName { long: bool },
    Year,
    ShortYear,
    Hour24 { padded: bool },
    Hour12 { padded: bool },
    Meridian { upper: bool },
    Minute,
    Second,
    Millis,
    Micros,
    Offset(OffsetStyle),
    Timestamp,
    Reset,
}

impl Token {
    fn from_letter(c: char) -> Option<Token> {
        let token = match c {
            'd' => Token::Day { padded: true },
            'j' => Token::Day { padded: false },
            'D' => Token::WeekdayName { long: false },
            'l' => Token::WeekdayName { long: true },
            'm' => Token::Month { padded: true },
            'n' => Token::Month { padded: false },
            'M' => Token::MonthName { long: false },
            'F' => Token::MonthName { long: true },
            'Y' => Token::Year,
            'y' => Token::ShortYear,
            'H' => Token::Hour24 { padded: true },
            'G' => Token::Hour24 { padded: false },
            'h' => Token::Hour12 { padded: true },
            'g' => Token::Hour12 { padded: false },
            'A' => Token::Meridian { upper: true },
            'a' => Token::Meridian { upper: false },
            'i' => Token::Minute,
            's' => Token::Second,
            'v' => Token::Millis,
            'u' => Token::Micros,
            'P' => Token::Offset(OffsetStyle::Colon),
            'O' => Token::Offset(OffsetStyle::Plain),
            'p' => Token::Offset(OffsetStyle::Zulu),
            'U' => Token::Timestamp,
            _ => return None,
        };
        Some(token)
    }
}

/// Raw values pulled out of an input string. Nothing here has been checked
/// against the calendar yet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fields {
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub day: Option<u32>,
    pub weekday: Option<Weekday>,
    pub hour: Option<u32>,
    pub hour12: Option<u32>,
    /// `Some(true)` for PM.
    pub pm: Option<bool>,
    pub minute: Option<u32>,
    pub second: Option<u32>,
    pub micro: Option<u32>,
    /// Seconds east of UTC.
    pub offset: Option<i32>,
    pub timestamp: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    source: String,
    tokens: Vec<Token>,
}

impl Pattern {
    pub fn compile(format: &str) -> Result<Pattern> {
        let mut tokens = Vec::new();
        let mut chars = format.char_indices();
        while let Some((position, c)) = chars.next() {
            let token = match c {
                '\\' => match chars.next() {
                    Some((_, escaped)) => Token::Literal(escaped),
                    None => return Err(pattern_error("dangling escape", position)),
                },
                '!' | '|' => Token::Reset,
                c if c.is_ascii_alphabetic() => match Token::from_letter(c) {
                    Some(token) => token,
                    None => return Err(pattern_error(&format!("unsupported format letter '{c}'"), position)),
                },
                c => Token::Literal(c),
            };
            tokens.push(token);
        }
        Ok(Pattern { source: String::from(format), tokens })
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Pull fields out of `input`, consuming all of it, or `None`.
    pub fn extract(&self, input: &str) -> Option<Fields> {
        let mut scanner = Scanner { input, pos: 0 };
        let mut fields = Fields::default();
        for token in &self.tokens {
            match *token {
                Token::Literal(c) => scanner.literal(c)?,
                Token::Day { .. } => fields.day = Some(scanner.number(1, 2)?),
                Token::WeekdayName { .. } => {
                    let index = scanner.name(&WEEKDAYS)?;
                    fields.weekday = Some(WEEKDAY_VALUES[index]);
                }
                Token::Month { .. } => fields.month = Some(scanner.number(1, 2)?),
                Token::MonthName { .. } => fields.month = Some(scanner.name(&MONTHS)? as u32 + 1),
                Token::Year => fields.year = Some(scanner.number(1, 4)? as i32),
                Token::ShortYear => {
                    let yy = scanner.number(2, 2)? as i32;
                    fields.year = Some(if yy < 70 { 2000 + yy } else { 1900 + yy });
                }
                Token::Hour24 { .. } => fields.hour = Some(scanner.number(1, 2)?),
                Token::Hour12 { .. } => fields.hour12 = Some(scanner.number(1, 2)?),
                Token::Meridian { .. } => fields.pm = Some(scanner.meridian()?),
                Token::Minute => fields.minute = Some(scanner.number(2, 2)?),
                Token::Second => fields.second = Some(scanner.number(2, 2)?),
                Token::Millis => fields.micro = Some(scanner.number(3, 3)? * 1000),
                Token::Micros => {
                    let start = scanner.pos;
                    let n = scanner.number(1, 6)?;
                    fields.micro = Some(n * 10u32.pow(6 - (scanner.pos - start) as u32));
                }
                Token::Offset(style) => fields.offset = Some(scanner.offset(style)?),
                Token::Timestamp => fields.timestamp = Some(scanner.timestamp()?),
                Token::Reset => (),
            }
        }
        scanner.finished().then_some(fields)
    }

    /// Write `moment` out token by token.
    pub fn render(&self, moment: &DateTime<FixedOffset>) -> String {
        let mut out = String::with_capacity(self.source.len() + 8);
        for token in &self.tokens {
            match *token {
                Token::Literal(c) => out.push(c),
                Token::Day { padded } => out.push_str(&number(moment.day(), padded)),
                Token::WeekdayName { long } => {
                    out.push_str(name(WEEKDAYS[moment.weekday().num_days_from_monday() as usize], long))
                }
                Token::Month { padded } => out.push_str(&number(moment.month(), padded)),
                Token::MonthName { long } => out.push_str(name(MONTHS[moment.month0() as usize], long)),
                Token::Year => match moment.year() {
                    y if y < 0 => out.push_str(&format!("-{:04}", -y)),
                    y => out.push_str(&format!("{y:04}")),
                },
                Token::ShortYear => out.push_str(&format!("{:02}", moment.year().rem_euclid(100))),
                Token::Hour24 { padded } => out.push_str(&number(moment.hour(), padded)),
                Token::Hour12 { padded } => out.push_str(&number(moment.hour12().1, padded)),
                Token::Meridian { upper } => {
                    let (pm, _) = moment.hour12();
                    out.push_str(match (pm, upper) {
                        (false, true) => "AM",
                        (true, true) => "PM",
                        (false, false) => "am",
                        (true, false) => "pm",
                    })
                }
                Token::Minute => out.push_str(&format!("{:02}", moment.minute())),
                Token::Second => out.push_str(&format!("{:02}", moment.second())),
                Token::Millis => out.push_str(&format!("{:03}", moment.nanosecond() / 1_000_000)),
                Token::Micros => out.push_str(&format!("{:06}", moment.nanosecond() / 1_000)),
                Token::Offset(style) => out.push_str(&offset(moment.offset().local_minus_utc(), style)),
                Token::Timestamp => out.push_str(&moment.timestamp().to_string()),
                Token::Reset => (),
            }
        }
        out
    }
}

fn pattern_error(message: &str, position: usize) -> SemvalError {
    debug!(message, position, "rejected format pattern");
    SemvalError::Pattern { message: String::from(message), position }
}

fn number(n: u32, padded: bool) -> String {
    if padded { format!("{n:02}") } else { n.to_string() }
}

fn name(full: &str, long: bool) -> &str {
    if long { full } else { &full[..3] }
}

fn offset(seconds: i32, style: OffsetStyle) -> String {
    if seconds == 0 && style == OffsetStyle::Zulu {
        return String::from("Z");
    }
    let sign = if seconds < 0 { '-' } else { '+' };
    let minutes = seconds.unsigned_abs() / 60;
    let (hh, mm) = (minutes / 60, minutes % 60);
    match style {
        OffsetStyle::Plain => format!("{sign}{hh:02}{mm:02}"),
        OffsetStyle::Colon | OffsetStyle::Zulu => format!("{sign}{hh:02}:{mm:02}"),
    }
}

struct Scanner<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    fn finished(&self) -> bool {
        self.pos == self.input.len()
    }

    fn literal(&mut self, c: char) -> Option<()> {
        if self.rest().starts_with(c) {
            self.pos += c.len_utf8();
            Some(())
        } else {
            None
        }
    }

    /// Between `min` and `max` ASCII digits.
    fn number(&mut self, min: usize, max: usize) -> Option<u32> {
        let digits = self.rest().bytes().take(max).take_while(u8::is_ascii_digit).count();
        if digits < min {
            return None;
        }
        let n = self.rest()[..digits].parse().ok()?;
        self.pos += digits;
        Some(n)
    }

    /// Index into `names`, matching the full name first and then its
    /// three-letter abbreviation, ignoring case.
    fn name(&mut self, names: &[&str]) -> Option<usize> {
        let rest = self.rest();
        let starts = |prefix: &str| rest.get(..prefix.len()).is_some_and(|s| s.eq_ignore_ascii_case(prefix));
        for (index, full) in names.iter().enumerate() {
            for candidate in [*full, &full[..3]] {
                if starts(candidate) {
                    self.pos += candidate.len();
                    return Some(index);
                }
            }
        }
        None
    }

    fn meridian(&mut self) -> Option<bool> {
        let pm = match self.rest().get(..2) {
            Some(s) if s.eq_ignore_ascii_case("am") => false,
            Some(s) if s.eq_ignore_ascii_case("pm") => true,
            _ => return None,
        };
        self.pos += 2;
        Some(pm)
    }

    fn sign(&mut self) -> Option<i32> {
        match self.rest().as_bytes().first()? {
            b'+' => {
                self.pos += 1;
                Some(1)
            }
            b'-' => {
                self.pos += 1;
                Some(-1)
            }
            _ => None,
        }
    }

    fn offset(&mut self, style: OffsetStyle) -> Option<i32> {
        if style == OffsetStyle::Zulu && self.literal('Z').is_some() {
            return Some(0);
        }
        let sign = self.sign()?;
        let hh = self.number(2, 2)? as i32;
        if style != OffsetStyle::Plain {
            self.literal(':')?;
        }
        let mm = self.number(2, 2)? as i32;
        Some(sign * (hh * 3600 + mm * 60))
    }

    fn timestamp(&mut self) -> Option<i64> {
        let sign = self.sign().unwrap_or(1) as i64;
        let digits = self.rest().bytes().take_while(u8::is_ascii_digit).count();
        if digits == 0 {
            return None;
        }
        let n: i64 = self.rest()[..digits].parse().ok()?;
        self.pos += digits;
        Some(sign * n)
    }
}
