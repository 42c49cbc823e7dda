//! Localized names and `%`-token formatting.

use crate::date::{format_year, CalendarDate};
use crate::names::{NameCategory, NameLookup};

fn lookup<'a, N: NameLookup + ?Sized>(
    names: &'a N,
    category: NameCategory,
    index: usize,
) -> &'a str {
    names.names(category).get(index).copied().unwrap_or("")
}

impl CalendarDate {
    pub fn weekday_name<'a, N: NameLookup + ?Sized>(&self, names: &'a N) -> &'a str {
        lookup(names, NameCategory::Weekday, self.weekday_index() as usize)
    }

    pub fn short_weekday_name<'a, N: NameLookup + ?Sized>(&self, names: &'a N) -> &'a str {
        lookup(names, NameCategory::ShortWeekday, self.weekday_index() as usize)
    }

    pub fn month_name<'a, N: NameLookup + ?Sized>(&self, names: &'a N) -> &'a str {
        lookup(names, NameCategory::Month, self.month() as usize - 1)
    }

    pub fn short_month_name<'a, N: NameLookup + ?Sized>(&self, names: &'a N) -> &'a str {
        lookup(names, NameCategory::ShortMonth, self.month() as usize - 1)
    }

    /// Render `template`, replacing date tokens.
    ///
    /// | Token | Replacement |
    /// |-------|-------------|
    /// | `%y` | year modulo 100, two digits |
    /// | `%Y` | year, at least four digits |
    /// | `%d` | day, two digits |
    /// | `%e` | day, unpadded |
    /// | `%m` | month, two digits |
    /// | `%D` | `YYYY-MM-DD` |
    /// | `%B` / `%b` | month name / short month name |
    /// | `%A` / `%a` | weekday name / short weekday name |
    /// | `%_B` `%_b` `%_A` `%_a` | lowercase forms of the names |
    ///
    /// Any other `%` sequence is copied through untouched. Replacements are
    /// never rescanned.
    ///
    /// ```
    /// use almanac::{CalendarDate, Language};
    ///
    /// let date = CalendarDate::new(2024, 1, 1).unwrap();
    /// assert_eq!(
    ///     date.format("%Y-%m-%d is a %A", &Language::English),
    ///     "2024-01-01 is a Monday"
    /// );
    /// ```
    pub fn format<N: NameLookup + ?Sized>(&self, template: &str, names: &N) -> String {
        let mut out = String::with_capacity(template.len() + 16);
        let mut rest = template;

        while let Some(pos) = rest.find('%') {
            out.push_str(&rest[..pos]);
            let after = &rest[pos + 1..];
            match self.expand_token(after, names) {
                Some((text, consumed)) => {
                    out.push_str(&text);
                    rest = &after[consumed..];
                }
                None => {
                    out.push('%');
                    rest = after;
                }
            }
        }
        out.push_str(rest);
        out
    }

    /// Expansion of the token at the start of `token` (the text after a `%`) and
    /// the number of bytes it occupies.
    fn expand_token<N: NameLookup + ?Sized>(
        &self,
        token: &str,
        names: &N,
    ) -> Option<(String, usize)> {
        let mut chars = token.chars();
        let text = match chars.next()? {
            'y' => format!("{:02}", self.year().rem_euclid(100)),
            'Y' => format_year(self.year()),
            'd' => format!("{:02}", self.day()),
            'e' => self.day().to_string(),
            'm' => format!("{:02}", self.month()),
            'D' => self.iso_date(),
            'B' => self.month_name(names).to_string(),
            'b' => self.short_month_name(names).to_string(),
            'A' => self.weekday_name(names).to_string(),
            'a' => self.short_weekday_name(names).to_string(),
            '_' => {
                let name = match chars.next()? {
                    'B' => self.month_name(names),
                    'b' => self.short_month_name(names),
                    'A' => self.weekday_name(names),
                    'a' => self.short_weekday_name(names),
                    _ => return None,
                };
                return Some((name.to_lowercase(), 2));
            }
            _ => return None,
        };
        Some((text, 1))
    }
}
