//! Number formatting for report tables.

use std::fmt;

/// An integer printed with `,` thousands separators, e.g. `50,000`.
pub struct Thousands(pub i64);

impl fmt::Display for Thousands {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 < 0 {
            write!(f, "-")?;
        }
        write!(f, "{}", group_digits(self.0.unsigned_abs()))
    }
}

/// Like [`Thousands`] but always carries a sign, e.g. `+1,200` or `-350`.
pub struct SignedThousands(pub i64);

impl fmt::Display for SignedThousands {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { '-' } else { '+' };
        write!(f, "{sign}{}", group_digits(self.0.unsigned_abs()))
    }
}

fn group_digits(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thousands() {
        assert_eq!(Thousands(0).to_string(), "0");
        assert_eq!(Thousands(999).to_string(), "999");
        assert_eq!(Thousands(1000).to_string(), "1,000");
        assert_eq!(Thousands(60500).to_string(), "60,500");
        assert_eq!(Thousands(1234567).to_string(), "1,234,567");
        assert_eq!(Thousands(-48500).to_string(), "-48,500");
    }

    #[test]
    fn test_signed_thousands() {
        assert_eq!(SignedThousands(0).to_string(), "+0");
        assert_eq!(SignedThousands(1200).to_string(), "+1,200");
        assert_eq!(SignedThousands(-13000).to_string(), "-13,000");
    }
}
